//! Polygon collision detection
//!
//! Shapes are reduced to [`PointSet`]s (vertices + centroid) and tested
//! pairwise. Nothing here keeps state between calls.
//!
//! # Module Organization
//!
//! - [`primitives`] - Rectangle, circle and color sources
//! - [`point_set`] - The shared shape representation and geometry conversions
//! - [`rotation`] - Rotation of points and point sets about a pivot
//! - [`sat`] - Separating Axis Theorem pass
//! - [`ray_crossing`] - Legacy ray-crossing pass
//! - [`shape`] - The [`Polygon`] capability

pub mod primitives;
pub mod point_set;
pub mod rotation;
pub mod sat;
pub mod ray_crossing;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Circle, Color, Rect};
pub use point_set::{circle_to_point_set, rect_to_point_set, PointSet, CIRCLE_VERTEX_COUNT};
pub use rotation::{rotate_point, rotate_point_set};
pub use sat::sat_test;
pub use ray_crossing::ray_crossing_test;
pub use shape::Polygon;
