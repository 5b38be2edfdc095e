//! Primitive shape sources
//!
//! Rectangles and circles as supplied by external collaborators (image
//! rects, text extents, circle widgets). They are converted into
//! [`PointSet`](super::PointSet)s before any collision test.

use crate::foundation::math::Vector2D;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and extent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Horizontal extent (zero or negative is allowed and yields a degenerate polygon)
    pub width: i32,
    /// Vertical extent
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from a top-left position and a `(width, height)` size
    pub const fn from_pos_size(pos: Vector2D, size: (i32, i32)) -> Self {
        Self::new(pos.x, pos.y, size.0, size.1)
    }

    /// Top-left corner
    pub const fn pos(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Center using truncating integer division
    ///
    /// Coordinates wrap on `i32` overflow.
    pub const fn center(&self) -> Vector2D {
        Vector2D::new(
            self.x.wrapping_add(self.width / 2),
            self.y.wrapping_add(self.height / 2),
        )
    }
}

/// Circle given by center and radius
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point
    pub center: Vector2D,
    /// Radius in pixels
    pub radius: i32,
}

impl Circle {
    /// Creates a new circle
    pub const fn new(center: Vector2D, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// RGBA color used for outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque red
    pub const RED: Self = Self::rgba(255, 0, 0, 255);
    /// Opaque green
    pub const GREEN: Self = Self::rgba(0, 255, 0, 255);

    /// Creates a color from its four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
