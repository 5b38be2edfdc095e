//! Headless runners for the gfw demo projects

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use gfw_engine::core::config::{Config, EngineConfig};
use gfw_engine::foundation::logging;
use std::path::Path;

mod bounds_editor;
mod scene;
mod test_project;

use bounds_editor::{parse_point, parse_points, BoundsEditor};
use scene::SceneFile;
use test_project::TestProject;

const DEFAULT_FRAMES: &str = "150";

fn main() -> Result<()> {
    let matches = Command::new("gfw_projects")
        .about("Runs the gfw demo projects without a window")
        .subcommand_required(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .global(true)
                .help("Default log filter (RUST_LOG takes precedence)"),
        )
        .subcommand(
            Command::new("collision-demo")
                .about("Moves an image into another and reports collisions per frame")
                .arg(
                    Arg::new("scene")
                        .long("scene")
                        .value_name("FILE")
                        .help("Scene file (.toml or .ron)"),
                )
                .arg(
                    Arg::new("frames")
                        .short('n')
                        .long("frames")
                        .value_name("N")
                        .help("Number of frames to simulate")
                        .value_parser(clap::value_parser!(u64))
                        .default_value(DEFAULT_FRAMES),
                ),
        )
        .subcommand(
            Command::new("bounds-editor")
                .about("Builds a bounding polygon from clicks and prints it as RON")
                .arg(
                    Arg::new("clicks")
                        .long("clicks")
                        .value_name("POINTS")
                        .required(true)
                        .help("Click positions, e.g. \"0,0 40,0 20,30\""),
                )
                .arg(
                    Arg::new("cursor")
                        .long("cursor")
                        .value_name("X,Y")
                        .help("Final cursor position for the rubber-band vertex"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("collision-demo", sub)) => run_collision_demo(sub),
        Some(("bounds-editor", sub)) => run_bounds_editor(sub),
        other => anyhow::bail!("unknown subcommand {:?}", other.map(|(name, _)| name)),
    }
}

fn init_logging(matches: &ArgMatches, engine: &EngineConfig) -> Result<()> {
    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| engine.log_level.clone());
    engine
        .clone()
        .with_log_level(level.clone())
        .validate()
        .context("invalid log level")?;
    logging::init_with_level(&level);
    Ok(())
}

fn run_collision_demo(sub: &ArgMatches) -> Result<()> {
    let file = match sub.get_one::<String>("scene") {
        Some(path) => SceneFile::load_from_file(Path::new(path))
            .with_context(|| format!("failed to load scene {path}"))?,
        None => SceneFile::default(),
    };
    init_logging(sub, &file.engine)?;

    let frames = sub.get_one::<u64>("frames").copied().unwrap_or_default();
    let mut project = TestProject::new(&file)?;
    let summary = project.run(frames, |report| {
        println!(
            "frame {:>5}  pos ({:>4}, {:>4})  angle {:>7.1}  {}",
            report.frame,
            report.player_pos.x,
            report.player_pos.y,
            report.player_angle,
            if report.hit { "HIT" } else { "miss" }
        );
    })?;

    println!(
        "{} frames, {} with a hit, {} transitions",
        summary.frames, summary.hit_frames, summary.transitions
    );
    Ok(())
}

fn run_bounds_editor(sub: &ArgMatches) -> Result<()> {
    init_logging(sub, &EngineConfig::default())?;

    let clicks = sub
        .get_one::<String>("clicks")
        .map(|text| parse_points(text))
        .transpose()?
        .unwrap_or_default();
    let cursor = sub.get_one::<String>("cursor").map(|text| parse_point(text)).transpose()?;

    let mut editor = BoundsEditor::new();
    for click in clicks {
        editor.on_cursor_move(click);
        editor.on_click(click);
    }
    if let Some(cursor) = cursor {
        editor.on_cursor_move(cursor);
    }

    let bounds = editor.finish();
    if let Err(err) = bounds.validate() {
        log::warn!("bounds are not usable for collision yet: {err}");
    }
    let text = ron::ser::to_string_pretty(&bounds, ron::ser::PrettyConfig::default())
        .context("failed to serialize bounds")?;
    println!("{text}");
    Ok(())
}
