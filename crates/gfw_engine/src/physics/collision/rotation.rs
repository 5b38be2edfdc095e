//! Rotation of points and point sets about a pivot
//!
//! Angles are in degrees, positive counter-clockwise in a y-up frame. On a
//! y-down screen a positive angle therefore appears clockwise, matching how
//! renderers rotate textures.

use super::point_set::PointSet;
use crate::foundation::math::{utils, Rotation2, Vector2, Vector2D};

/// Rotates `point` about `origin` by `angle` degrees, rounding to the nearest pixel
pub fn rotate_point(origin: Vector2D, point: Vector2D, angle: f64) -> Vector2D {
    rotate_with(&Rotation2::new(utils::deg_to_rad(angle)), origin, point)
}

/// Rotates every vertex of `set` about its own centroid
///
/// The centroid and outline color are carried over unchanged. Rounding is
/// applied per call, so repeatedly rotating the result accumulates error;
/// rotate the unrotated source instead.
pub fn rotate_point_set(set: &PointSet, angle: f64) -> PointSet {
    let rotation = Rotation2::new(utils::deg_to_rad(angle));
    let vertices = set
        .vertices
        .iter()
        .map(|&v| rotate_with(&rotation, set.centroid, v))
        .collect();

    PointSet {
        vertices,
        centroid: set.centroid,
        outline_color: set.outline_color,
    }
}

// Offsets are taken in f64 so far-apart points cannot overflow; the
// result saturates at the i32 range.
fn rotate_with(rotation: &Rotation2<f64>, origin: Vector2D, point: Vector2D) -> Vector2D {
    let offset = Vector2::new(
        f64::from(point.x) - f64::from(origin.x),
        f64::from(point.y) - f64::from(origin.y),
    );
    let rotated = rotation * offset;
    Vector2D::new(
        (rotated.x + f64::from(origin.x)).round() as i32,
        (rotated.y + f64::from(origin.y)).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::primitives::{Color, Rect};

    fn within_one(a: Vector2D, b: Vector2D) -> bool {
        (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        let origin = Vector2D::new(0, 0);
        assert_eq!(rotate_point(origin, Vector2D::new(10, 0), 90.0), Vector2D::new(0, 10));
        assert_eq!(rotate_point(origin, Vector2D::new(10, 0), -90.0), Vector2D::new(0, -10));
        assert_eq!(rotate_point(origin, Vector2D::new(10, 0), 180.0), Vector2D::new(-10, 0));
    }

    #[test]
    fn test_rotate_point_about_offset_origin() {
        let origin = Vector2D::new(100, 100);
        assert_eq!(
            rotate_point(origin, Vector2D::new(110, 100), 90.0),
            Vector2D::new(100, 110)
        );
    }

    #[test]
    fn test_rotation_identity() {
        let set = PointSet::from(Rect::new(13, 7, 41, 23));
        assert_eq!(rotate_point_set(&set, 0.0), set);
        let full = rotate_point_set(&set, 360.0);
        for (a, b) in full.vertices.iter().zip(&set.vertices) {
            assert!(within_one(*a, *b), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_rotation_round_trip_within_rounding() {
        let set = PointSet::from(Rect::new(100, 100, 64, 48));
        for angle in [15.0, 33.0, 45.0, 90.0, 127.5, 200.0] {
            let back = rotate_point_set(&rotate_point_set(&set, angle), -angle);
            assert_eq!(back.centroid, set.centroid);
            for (a, b) in back.vertices.iter().zip(&set.vertices) {
                assert!(within_one(*a, *b), "angle {angle}: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_rotation_preserves_centroid_and_color() {
        let set = PointSet::from(Rect::new(0, 0, 10, 20)).with_color(Color::GREEN);
        let rotated = rotate_point_set(&set, 90.0);
        assert_eq!(rotated.centroid, Vector2D::new(5, 10));
        assert_eq!(rotated.outline_color, Some(Color::GREEN));
        // (0, 0) is (-5, -10) from the pivot and lands at (10, -5) from it
        assert_eq!(rotated.vertices[0], Vector2D::new(15, 5));
    }

    #[test]
    fn test_far_apart_points_do_not_overflow() {
        let origin = Vector2D::new(i32::MIN, 0);
        let point = Vector2D::new(i32::MAX, 0);
        assert_eq!(rotate_point(origin, point, 0.0), point);
        // Lands far outside the i32 range and saturates
        assert_eq!(rotate_point(origin, point, 90.0), Vector2D::new(i32::MIN, i32::MAX));
    }
}
