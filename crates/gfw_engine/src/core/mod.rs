//! # Core Module
//!
//! Shared configuration for the framework's subsystems.

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    CollisionConfig,
    Config,
    ConfigError,
    ConfigFormat,
    EngineConfig,
};
