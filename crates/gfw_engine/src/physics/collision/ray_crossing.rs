//! Ray-crossing ("diagonal") intersection test
//!
//! For every vertex of the first polygon a segment is cast from that
//! polygon's centroid to the vertex; the shapes intersect when any such
//! segment crosses an edge of the second polygon.
//!
//! Kept for cross-validation against SAT. It has a known defect that is
//! preserved on purpose: parallel segments give `h == 0`, the division
//! produces an infinite or NaN parameter, and the range check silently
//! treats that pair as "no crossing". Collinear overlapping edges are
//! therefore never reported.

use super::point_set::PointSet;
use crate::foundation::math::FVector2D;
use crate::physics::error::CollisionError;

/// Runs one directional ray-crossing pass: centroid-to-vertex rays of `p1`
/// against the edges of `p2`
///
/// Both sets are validated first.
pub fn ray_crossing_test(p1: &PointSet, p2: &PointSet) -> Result<bool, CollisionError> {
    p1.validate()?;
    p2.validate()?;
    Ok(ray_crossing_pass(p1, p2))
}

pub(crate) fn ray_crossing_pass(p1: &PointSet, p2: &PointSet) -> bool {
    let r1s = FVector2D::from(p1.centroid);

    for &vertex in &p1.vertices {
        let r1e = FVector2D::from(vertex);

        for (start, end) in p2.edges() {
            let r2s = FVector2D::from(start);
            let r2e = FVector2D::from(end);

            if let Some((t1, t2)) = segment_parameters(r1s, r1e, r2s, r2e) {
                log::trace!("ray-crossing: hit at t1={t1}, t2={t2}");
                return true;
            }
        }
    }
    false
}

/// Intersection parameters of segments `r1s..r1e` and `r2s..r2e`, if both
/// lie in `[0, 1)`
fn segment_parameters(
    r1s: FVector2D,
    r1e: FVector2D,
    r2s: FVector2D,
    r2e: FVector2D,
) -> Option<(f32, f32)> {
    let h = (r2e.x - r2s.x) * (r1s.y - r1e.y) - (r1s.x - r1e.x) * (r2e.y - r2s.y);
    // Unguarded: h == 0 yields inf/NaN and fails the range check below
    let t1 = ((r2s.y - r2e.y) * (r1s.x - r2s.x) + (r2e.x - r2s.x) * (r1s.y - r2s.y)) / h;
    let t2 = ((r1s.y - r1e.y) * (r1s.x - r2s.x) + (r1e.x - r1s.x) * (r1s.y - r2s.y)) / h;

    let in_range = |t: f32| (0.0..1.0).contains(&t);
    (in_range(t1) && in_range(t2)).then_some((t1, t2))
}
