//! Physics module for 2D polygon collision detection
//!
//! Provides point-set shapes, rotation, and two intersection algorithms
//! behind a single combined entry point.

pub mod collision;
pub mod collision_system;
pub mod error;


pub use collision::{
    Circle,
    Color,
    PointSet,
    Polygon,
    Rect,
};
pub use collision_system::{detect_collision, detect_collision_with, CollisionDetector, CollisionStrategy};
pub use error::CollisionError;
