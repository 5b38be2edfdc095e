//! # Unified Configuration
//!
//! Configuration structures for the framework core. Everything derives
//! serde and has sensible defaults, so a config file only needs to name the
//! values it changes.
//!
//! ```toml
//! [engine]
//! log_level = "debug"
//!
//! [collision]
//! strategy = "ray_crossing"
//! ```

use crate::physics::collision_system::CollisionStrategy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// # Collision Configuration
///
/// Selects the intersection algorithm used by
/// [`CollisionDetector`](crate::physics::CollisionDetector).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Algorithm for pairwise tests
    pub strategy: CollisionStrategy,
    /// Run the two SAT directions concurrently (needs the `parallel` feature)
    pub parallel: bool,
}

/// # Engine Configuration
///
/// Core behavior: logging and debug outline drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Whether outline draw lists record anything
    pub debug_draw: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_draw: cfg!(debug_assertions),
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable or disable outline drawing
    #[must_use]
    pub fn with_debug_draw(mut self, enabled: bool) -> Self {
        self.debug_draw = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map(|_| ())
            .map_err(|_| ConfigError::Invalid(format!("unknown log level `{}`", self.log_level)))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration applications load from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Collision configuration
    pub collision: CollisionConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }
}

impl Config for ApplicationConfig {}
