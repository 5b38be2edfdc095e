//! Scene files for the collision demo
//!
//! A scene holds the engine settings, the initial layout and a scripted
//! input sequence standing in for the keyboard.

use anyhow::{bail, Result};
use gfw_engine::core::config::{CollisionConfig, Config, EngineConfig};
use gfw_engine::foundation::math::Vector2D;
use serde::{Deserialize, Serialize};

/// Keys held down during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
}

impl InputState {
    /// Parse a key chord such as `"SD"` or `"we"`
    ///
    /// `W`/`S` move up/down, `A`/`D` left/right, `E`/`Q` rotate clockwise
    /// and counter-clockwise. `-` or an empty string means no keys.
    pub fn parse(keys: &str) -> Result<Self> {
        let mut input = Self::default();
        for key in keys.chars() {
            match key.to_ascii_uppercase() {
                'W' => input.up = true,
                'S' => input.down = true,
                'A' => input.left = true,
                'D' => input.right = true,
                'E' => input.rotate_cw = true,
                'Q' => input.rotate_ccw = true,
                '-' | ' ' => {}
                other => bail!("unknown key `{other}` in `{keys}`"),
            }
        }
        Ok(input)
    }
}

/// Hold `keys` for `frames` frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub keys: String,
    pub frames: u32,
}

impl ScriptStep {
    pub fn new(keys: impl Into<String>, frames: u32) -> Self {
        Self {
            keys: keys.into(),
            frames,
        }
    }
}

/// Initial layout and input script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub window_size: (i32, i32),
    pub image_size: (i32, i32),
    pub player_pos: Vector2D,
    pub target_pos: Vector2D,
    pub circle_center: Vector2D,
    pub circle_radius: i32,
    pub title: String,
    pub title_y: i32,
    /// Pixels moved per frame while a direction key is held
    pub speed: i32,
    /// Degrees turned per frame while a rotation key is held
    pub turn_rate: f64,
    /// Replayed from the start once exhausted
    pub script: Vec<ScriptStep>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            window_size: (1000, 700),
            image_size: (64, 64),
            player_pos: Vector2D::new(100, 100),
            target_pos: Vector2D::new(400, 400),
            circle_center: Vector2D::new(300, 300),
            circle_radius: 50,
            title: "Noobers".to_string(),
            title_y: 30,
            speed: 5,
            turn_rate: 3.0,
            script: vec![
                ScriptStep::new("SD", 60),
                ScriptStep::new("E", 30),
                ScriptStep::new("WA", 60),
            ],
        }
    }
}

impl Scene {
    /// Input for frame `frame`, counting from zero
    pub fn input_at(&self, frame: u64) -> Result<InputState> {
        let total: u64 = self.script.iter().map(|step| u64::from(step.frames)).sum();
        if total == 0 {
            return Ok(InputState::default());
        }
        let mut offset = frame % total;
        for step in &self.script {
            let frames = u64::from(step.frames);
            if offset < frames {
                return InputState::parse(&step.keys);
            }
            offset -= frames;
        }
        Ok(InputState::default())
    }

    /// Reject scenes the demo cannot run
    pub fn validate(&self) -> Result<()> {
        if self.image_size.0 <= 0 || self.image_size.1 <= 0 {
            bail!("image size must be positive, got {:?}", self.image_size);
        }
        if self.circle_radius <= 0 {
            bail!("circle radius must be positive, got {}", self.circle_radius);
        }
        for step in &self.script {
            InputState::parse(&step.keys)?;
        }
        Ok(())
    }
}

/// Everything a scene file can contain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    pub engine: EngineConfig,
    pub collision: CollisionConfig,
    pub scene: Scene,
}

impl Config for SceneFile {}

#[cfg(test)]
mod tests {
    use super::*;
    use gfw_engine::core::config::ConfigFormat;
    use gfw_engine::physics::CollisionStrategy;

    #[test]
    fn test_parse_keys() {
        let input = InputState::parse("sd").unwrap();
        assert!(input.down && input.right);
        assert!(!input.up && !input.left && !input.rotate_cw);
        assert_eq!(InputState::parse("-").unwrap(), InputState::default());
        assert!(InputState::parse("X").is_err());
    }

    #[test]
    fn test_script_cycles() {
        let scene = Scene {
            script: vec![ScriptStep::new("D", 2), ScriptStep::new("E", 1)],
            ..Scene::default()
        };
        assert!(scene.input_at(0).unwrap().right);
        assert!(scene.input_at(1).unwrap().right);
        assert!(scene.input_at(2).unwrap().rotate_cw);
        assert!(scene.input_at(3).unwrap().right);
    }

    #[test]
    fn test_empty_script_is_idle() {
        let scene = Scene {
            script: Vec::new(),
            ..Scene::default()
        };
        assert_eq!(scene.input_at(7).unwrap(), InputState::default());
    }

    #[test]
    fn test_partial_scene_file() {
        let text = "[collision]\nstrategy = \"ray_crossing\"\n\n[scene]\nspeed = 2\n";
        let file = SceneFile::parse(text, ConfigFormat::Toml).unwrap();
        assert_eq!(file.collision.strategy, CollisionStrategy::RayCrossing);
        assert_eq!(file.scene.speed, 2);
        assert_eq!(file.scene.player_pos, Vector2D::new(100, 100));
    }

    #[test]
    fn test_validate_rejects_bad_scene() {
        assert!(Scene::default().validate().is_ok());
        let scene = Scene {
            script: vec![ScriptStep::new("Z", 1)],
            ..Scene::default()
        };
        assert!(scene.validate().is_err());
        let scene = Scene {
            circle_radius: 0,
            ..Scene::default()
        };
        assert!(scene.validate().is_err());
    }
}
