//! Headless collision demo
//!
//! A player image moves and rotates under scripted input. Each frame its
//! bounds are rebuilt and tested against a fixed target image; the outline
//! turns red on a hit and green otherwise, and the circle copies that color.

use crate::scene::{InputState, Scene, SceneFile};
use anyhow::{Context, Result};
use gfw_engine::debug::OutlineDrawList;
use gfw_engine::foundation::math::Vector2D;
use gfw_engine::physics::{CollisionDetector, Color, Polygon, Rect};
use gfw_engine::shapes::{update_all, CircleShape, ImageShape, MonospaceMetrics, TextShape, Updatable};
use std::sync::Arc;

/// State after one simulated frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub player_pos: Vector2D,
    pub player_angle: f64,
    pub hit: bool,
    /// Hit state differs from the previous frame
    pub transition: bool,
    pub segments: usize,
}

impl FrameReport {
    /// Outline color the player was drawn with
    pub fn color(&self) -> Color {
        if self.hit {
            Color::RED
        } else {
            Color::GREEN
        }
    }
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub hit_frames: u64,
    pub transitions: u64,
}

pub struct TestProject {
    scene: Scene,
    detector: CollisionDetector,
    player: ImageShape,
    target: ImageShape,
    title: TextShape,
    circle: CircleShape,
    draw_list: OutlineDrawList,
    frame: u64,
    last_hit: Option<bool>,
}

impl TestProject {
    pub fn new(file: &SceneFile) -> Result<Self> {
        let scene = file.scene.clone();
        scene.validate().context("invalid scene")?;

        let player = ImageShape::new(Rect::from_pos_size(scene.player_pos, scene.image_size));
        let target = ImageShape::new(Rect::from_pos_size(scene.target_pos, scene.image_size));
        let mut circle = CircleShape::new(scene.circle_center, scene.circle_radius);

        let mut title = TextShape::new(
            scene.title.clone(),
            Vector2D::zero(),
            Arc::new(MonospaceMetrics::new(10, 20)),
        );
        title.update();
        title.set_pos(Vector2D::new(
            scene.window_size.0 / 2 - title.text_size().0 / 2,
            scene.title_y,
        ));
        circle.update();

        log::info!(
            "Collision demo: {}x{} window, {:?} strategy",
            scene.window_size.0,
            scene.window_size.1,
            file.collision.strategy
        );

        Ok(Self {
            scene,
            detector: CollisionDetector::new(file.collision.clone()),
            player,
            target,
            title,
            circle,
            draw_list: OutlineDrawList::from_config(&file.engine),
            frame: 0,
            last_hit: None,
        })
    }

    pub fn player(&self) -> &ImageShape {
        &self.player
    }

    pub fn title(&self) -> &TextShape {
        &self.title
    }

    pub fn circle(&self) -> &CircleShape {
        &self.circle
    }

    pub fn draw_list(&self) -> &OutlineDrawList {
        &self.draw_list
    }

    /// Apply held keys; later keys on the same axis win
    fn move_player(&mut self, input: InputState) {
        let speed = self.scene.speed;
        let mut dx = 0;
        let mut dy = 0;
        if input.up {
            dy = -speed;
        }
        if input.down {
            dy = speed;
        }
        if input.left {
            dx = -speed;
        }
        if input.right {
            dx = speed;
        }
        if input.rotate_cw {
            self.player.rotate_by(self.scene.turn_rate);
        }
        if input.rotate_ccw {
            self.player.rotate_by(-self.scene.turn_rate);
        }
        if dx != 0 || dy != 0 {
            self.player.move_by(dx, dy);
        }
    }

    /// Simulate one frame
    pub fn step(&mut self) -> Result<FrameReport> {
        let input = self.scene.input_at(self.frame)?;
        self.move_player(input);

        self.player.request_update();
        update_all([
            &mut self.player as &mut dyn Updatable,
            &mut self.target,
            &mut self.title,
            &mut self.circle,
        ]);

        let hit = self
            .detector
            .detect(&self.player.bounds(), &self.target.bounds())
            .with_context(|| format!("collision test failed on frame {}", self.frame))?;

        let color = if hit { Color::RED } else { Color::GREEN };
        self.player.set_outline_color(color);
        self.circle.set_color(color);

        let transition = self.last_hit.is_some_and(|last| last != hit);
        if transition || (self.last_hit.is_none() && hit) {
            if hit {
                log::info!("frame {}: player hit target", self.frame);
            } else {
                log::info!("frame {}: player left target", self.frame);
            }
        }
        self.last_hit = Some(hit);

        self.draw_list.begin_frame();
        self.draw_list.draw_bounds(&self.player.bounds());
        self.draw_list.draw_polygon(&self.circle, Color::BLACK);

        let report = FrameReport {
            frame: self.frame,
            player_pos: Vector2D::new(self.player.x(), self.player.y()),
            player_angle: self.player.angle(),
            hit,
            transition,
            segments: self.draw_list.segment_count(),
        };
        log::trace!("{report:?}");

        self.frame += 1;
        Ok(report)
    }

    /// Simulate `frames` frames, calling `on_frame` after each
    pub fn run(&mut self, frames: u64, mut on_frame: impl FnMut(&FrameReport)) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for _ in 0..frames {
            let report = self.step()?;
            if report.hit {
                summary.hit_frames += 1;
            }
            if report.transition {
                summary.transitions += 1;
            }
            summary.frames += 1;
            on_frame(&report);
        }
        Ok(summary)
    }
}
