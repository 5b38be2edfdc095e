//! # GFW Engine
//!
//! Polygon bounds and collision detection for a 2D sprite framework.
//!
//! ## Features
//!
//! - **Point sets**: integer polygons built from rectangles, circles or
//!   explicit vertices
//! - **Rotation**: about a set's centroid with rounded results
//! - **Collision**: separating axis test (default) and the legacy
//!   ray-crossing test behind one entry point
//! - **Shapes**: images, text blocks and circles that keep their bounds in
//!   sync through a deferred update hook
//! - **Configuration**: TOML or RON files via serde
//!
//! ## Quick Start
//!
//! ```rust
//! use gfw_engine::prelude::*;
//!
//! let mut player = ImageShape::new(Rect::new(100, 100, 64, 64));
//! let wall = ImageShape::new(Rect::new(150, 120, 32, 32));
//!
//! player.rotate_by(45.0);
//! player.update_if_needed();
//!
//! assert_eq!(player.detect_collision(&wall), Ok(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod physics;
pub mod shapes;
pub mod debug;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{ApplicationConfig, CollisionConfig, Config, ConfigFormat, EngineConfig},
        debug::{OutlineDrawList, OutlineSegment},
        foundation::math::{FVector2D, Vector2D},
        physics::{
            collision::{rotate_point, rotate_point_set},
            detect_collision, Circle, CollisionDetector, CollisionError, CollisionStrategy, Color,
            PointSet, Polygon, Rect,
        },
        shapes::{CircleShape, ImageShape, MonospaceMetrics, TextMetrics, TextShape, Updatable},
    };
}
