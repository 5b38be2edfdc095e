//! Collision error types

use thiserror::Error;

/// Precondition violations detected before a collision test runs
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// A polygon needs at least three vertices to enclose an area
    #[error("point set has {count} vertices, at least 3 are required")]
    InsufficientVertices {
        /// Number of vertices the offending set had
        count: usize,
    },

    /// Every edge of the polygon has zero length, so it has no usable axis
    #[error("point set is degenerate: all vertices coincide")]
    DegenerateShape,
}
