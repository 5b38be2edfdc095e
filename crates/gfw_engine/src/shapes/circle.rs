//! Circle bounds approximated by a 360-gon

use super::updatable::{Updatable, UpdateFlag};
use crate::foundation::math::Vector2D;
use crate::physics::collision::{Circle, Color, PointSet, Polygon};

/// A circle with a render color and its polygon approximation
#[derive(Debug, Clone)]
pub struct CircleShape {
    circle: Circle,
    color: Color,
    bounding_box: PointSet,
    flag: UpdateFlag,
}

impl CircleShape {
    /// Create a circle; the polygon is built on the first update
    pub fn new(center: Vector2D, radius: i32) -> Self {
        Self {
            circle: Circle::new(center, radius),
            color: Color::BLACK,
            bounding_box: PointSet::default(),
            flag: UpdateFlag::new(),
        }
    }

    /// Center point
    pub fn center(&self) -> Vector2D {
        self.circle.center
    }

    /// Radius
    pub fn radius(&self) -> i32 {
        self.circle.radius
    }

    /// Move the center
    pub fn set_center(&mut self, center: Vector2D) {
        self.circle.center = center;
        self.request_update();
    }

    /// Change the radius
    pub fn set_radius(&mut self, radius: i32) {
        self.circle.radius = radius;
        self.request_update();
    }

    /// Render color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the render color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Updatable for CircleShape {
    fn update_flag(&self) -> UpdateFlag {
        self.flag
    }

    fn update_flag_mut(&mut self) -> &mut UpdateFlag {
        &mut self.flag
    }

    fn do_update(&mut self) {
        self.bounding_box = PointSet::from(self.circle);
        log::debug!("circle bounds rebuilt for {:?}", self.circle);
    }
}

impl Polygon for CircleShape {
    fn bounds(&self) -> PointSet {
        self.bounding_box.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::{Rect, CIRCLE_VERTEX_COUNT};
    use crate::physics::CollisionError;

    #[test]
    fn test_bounds_built_on_update() {
        let mut circle = CircleShape::new(Vector2D::new(300, 300), 50);
        assert!(circle.bounds().is_empty());
        let probe = PointSet::from(Rect::new(340, 290, 20, 20));
        assert_eq!(
            circle.detect_collision_with_points(&probe),
            Err(CollisionError::InsufficientVertices { count: 0 })
        );

        circle.update();
        let bounds = circle.bounds();
        assert_eq!(bounds.len(), CIRCLE_VERTEX_COUNT);
        assert_eq!(bounds.centroid, Vector2D::new(300, 300));
        assert_eq!(circle.detect_collision_with_points(&probe), Ok(true));
    }

    #[test]
    fn test_move_requests_rebuild() {
        let mut circle = CircleShape::new(Vector2D::new(0, 0), 10);
        circle.update();
        circle.set_center(Vector2D::new(100, 0));
        circle.set_radius(20);
        assert!(circle.update_if_needed());
        assert_eq!(circle.bounds().vertices[0], Vector2D::new(120, 0));
        assert_eq!((circle.center(), circle.radius()), (Vector2D::new(100, 0), 20));
    }

    #[test]
    fn test_color_does_not_touch_bounds() {
        let mut circle = CircleShape::new(Vector2D::new(0, 0), 10);
        circle.update();
        circle.set_color(Color::RED);
        assert!(!circle.needs_update());
        assert_eq!(circle.color(), Color::RED);
    }
}
