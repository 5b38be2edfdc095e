//! Separating Axis Theorem test for convex polygons
//!
//! Each edge of the first polygon contributes one candidate axis (the edge
//! normal). Both polygons are projected onto it; if the projected intervals
//! are disjoint the axis separates the shapes and the test stops early.
//!
//! A single pass only tests one polygon's axes. Two convex polygons are
//! disjoint iff some edge normal of *either* polygon separates them, so
//! callers must run the pass in both directions
//! (see [`detect_collision`](crate::physics::collision_system::detect_collision)).

use super::point_set::PointSet;
use crate::foundation::math::Vec2;
use crate::physics::error::CollisionError;

/// Runs one directional SAT pass using the edges of `p1` as axes
///
/// Returns `Ok(true)` when no separating axis was found among `p1`'s edge
/// normals. Both sets are validated first.
pub fn sat_test(p1: &PointSet, p2: &PointSet) -> Result<bool, CollisionError> {
    p1.validate()?;
    p2.validate()?;
    Ok(sat_pass(&to_float(p1), &to_float(p2)))
}

pub(crate) fn to_float(set: &PointSet) -> Vec<Vec2> {
    set.vertices.iter().map(|&v| Vec2::from(v)).collect()
}

/// One directional pass over pre-converted vertices
///
/// Zero-length edges have no normal and cannot separate anything, so they
/// are skipped instead of being normalized into NaN.
pub(crate) fn sat_pass(p1: &[Vec2], p2: &[Vec2]) -> bool {
    let n = p1.len();
    for a in 0..n {
        let b = (a + 1) % n;
        let edge = p1[b] - p1[a];
        let axis = Vec2::new(-edge.y, edge.x);

        let Some(axis) = axis.try_normalize(0.0) else {
            log::trace!("SAT: skipping zero-length edge {a}");
            continue;
        };

        let (min_r1, max_r1) = project(p1, &axis);
        let (min_r2, max_r2) = project(p2, &axis);

        // Inclusive: touching intervals count as overlap
        if !(max_r2 >= min_r1 && max_r1 >= min_r2) {
            log::trace!("SAT: edge {a} separates ({min_r1}..{max_r1} vs {min_r2}..{max_r2})");
            return false;
        }
    }
    true
}

fn project(points: &[Vec2], axis: &Vec2) -> (f32, f32) {
    points.iter().map(|p| p.dot(axis)).fold(
        (f32::INFINITY, f32::NEG_INFINITY),
        |(min, max), q| (min.min(q), max.max(q)),
    )
}
