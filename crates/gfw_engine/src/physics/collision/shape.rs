//! The polygon capability shared by every collidable shape
//!
//! Collision code depends only on [`Polygon`], never on concrete shape
//! types. A shape exposes its current outline as a [`PointSet`] and gets
//! pairwise collision tests for free.

use super::point_set::PointSet;
use crate::physics::collision_system::detect_collision;
use crate::physics::error::CollisionError;

/// Anything with an outline made of vertices and a centroid
pub trait Polygon {
    /// Current outline of this shape
    fn bounds(&self) -> PointSet;

    /// Tests this shape's bounds against an explicit point set
    ///
    /// # Errors
    /// See [`detect_collision`].
    fn detect_collision_with_points(&self, points: &PointSet) -> Result<bool, CollisionError> {
        detect_collision(&self.bounds(), points)
    }

    /// Tests this shape against another polygon
    ///
    /// # Errors
    /// See [`detect_collision`].
    fn detect_collision(&self, other: &dyn Polygon) -> Result<bool, CollisionError> {
        detect_collision(&self.bounds(), &other.bounds())
    }
}

/// A hand-built point list is its own outline
impl Polygon for PointSet {
    fn bounds(&self) -> PointSet {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::primitives::Rect;

    struct Boxed(Rect);

    impl Polygon for Boxed {
        fn bounds(&self) -> PointSet {
            PointSet::from(self.0)
        }
    }

    #[test]
    fn test_polygon_against_polygon() {
        let a = Boxed(Rect::new(0, 0, 10, 10));
        let b = Boxed(Rect::new(5, 5, 10, 10));
        let far = Boxed(Rect::new(100, 100, 10, 10));
        assert_eq!(a.detect_collision(&b), Ok(true));
        assert_eq!(a.detect_collision(&far), Ok(false));
    }

    #[test]
    fn test_polygon_against_points() {
        let a = Boxed(Rect::new(0, 0, 10, 10));
        let points = PointSet::from(Rect::new(10, 0, 10, 10));
        assert_eq!(a.detect_collision_with_points(&points), Ok(true));
        assert!(a.detect_collision_with_points(&PointSet::default()).is_err());
    }

    #[test]
    fn test_point_set_is_a_polygon() {
        let set = PointSet::from(Rect::new(0, 0, 4, 4));
        let shapes: Vec<&dyn Polygon> = vec![&set, &set];
        assert_eq!(shapes[0].detect_collision(shapes[1]), Ok(true));
    }
}
