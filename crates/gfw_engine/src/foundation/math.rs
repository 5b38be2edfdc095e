//! Math utilities and types
//!
//! Provides the 2D point types used by shapes and collision tests.
//! [`Vector2D`] is the integer pixel unit every shape exposes; [`FVector2D`]
//! is only used inside numeric collision math.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

pub use nalgebra::{Rotation2, Vector2};

/// 2D float vector type used for projections
pub type Vec2 = Vector2<f32>;

/// Integer 2D point in pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2D {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate (grows downwards in screen space)
    pub y: i32,
}

impl Vector2D {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Vector2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Floating point 2D point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FVector2D {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl FVector2D {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Narrow to integer coordinates, rounding to nearest (half away from zero)
    pub fn round(self) -> Vector2D {
        Vector2D::new(self.x.round() as i32, self.y.round() as i32)
    }
}

// i32 -> f32 loses precision above 2^24, far outside any pixel coordinate we handle.
impl From<Vector2D> for FVector2D {
    fn from(v: Vector2D) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<FVector2D> for Vec2 {
    fn from(v: FVector2D) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for FVector2D {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vec2 {
    fn from(v: Vector2D) -> Self {
        FVector2D::from(v).into()
    }
}

impl AbsDiffEq for FVector2D {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for FVector2D {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_widening_is_lossless_for_pixels() {
        let v = Vector2D::new(-640, 480);
        let f = FVector2D::from(v);
        assert_relative_eq!(f, FVector2D::new(-640.0, 480.0));
        assert_eq!(f.round(), v);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(FVector2D::new(2.5, -2.5).round(), Vector2D::new(3, -3));
        assert_eq!(FVector2D::new(1.49, -0.51).round(), Vector2D::new(1, -1));
    }

    #[test]
    fn test_nalgebra_interop() {
        let v: Vec2 = Vector2D::new(3, 4).into();
        assert_relative_eq!(v.norm(), 5.0);
        let back = FVector2D::from(v);
        assert_relative_eq!(back, FVector2D::new(3.0, 4.0));
    }

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI);
        assert_relative_eq!(utils::rad_to_deg(constants::PI / 2.0), 90.0);
    }

    #[test]
    fn test_distance() {
        assert_relative_eq!(Vector2D::new(0, 0).distance(Vector2D::new(3, 4)), 5.0);
    }
}
