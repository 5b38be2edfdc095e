//! Point sets: the shape representation shared by collision and drawing
//!
//! A [`PointSet`] is an ordered list of vertices, a designated centroid and
//! an optional outline color. Edges are implied by consecutive vertices,
//! wrapping from the last vertex back to the first.

use super::primitives::{Circle, Color, Rect};
use crate::foundation::math::{utils, Vector2D};
use crate::physics::error::CollisionError;
use serde::{Deserialize, Serialize};

/// Number of vertices used to approximate a circle (one per degree)
pub const CIRCLE_VERTEX_COUNT: usize = 360;

/// Ordered vertices plus a centroid and an optional outline color
///
/// The polygon is assumed to be simple, and convex for the SAT test.
/// Neither property is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSet {
    /// Vertices in edge order
    pub vertices: Vec<Vector2D>,
    /// Shape center: ray origin for the ray-crossing test and rotation pivot
    pub centroid: Vector2D,
    /// Color used when this set is drawn as an outline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<Color>,
}

impl PointSet {
    /// Creates a point set from explicit vertices and centroid
    pub fn new(vertices: Vec<Vector2D>, centroid: Vector2D) -> Self {
        Self {
            vertices,
            centroid,
            outline_color: None,
        }
    }

    /// Creates a point set whose centroid is the rounded mean of its vertices
    ///
    /// An empty vertex list gets the origin as centroid.
    pub fn from_vertices(vertices: Vec<Vector2D>) -> Self {
        let centroid = if vertices.is_empty() {
            Vector2D::zero()
        } else {
            let n = vertices.len() as f64;
            let (sx, sy) = vertices.iter().fold((0.0, 0.0), |(sx, sy), v| {
                (sx + f64::from(v.x), sy + f64::from(v.y))
            });
            Vector2D::new((sx / n).round() as i32, (sy / n).round() as i32)
        };
        Self::new(vertices, centroid)
    }

    /// A single-vertex set located at `point`
    ///
    /// Not a valid polygon on its own; used as the seed of a hand-built outline.
    pub fn from_point(point: Vector2D) -> Self {
        Self::new(vec![point], point)
    }

    /// Sets the outline color (builder style)
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the set has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex at the end of the edge chain
    pub fn push_vertex(&mut self, vertex: Vector2D) {
        self.vertices.push(vertex);
    }

    /// Replaces the last vertex, returning `false` when the set is empty
    pub fn set_last_vertex(&mut self, vertex: Vector2D) -> bool {
        match self.vertices.last_mut() {
            Some(last) => {
                *last = vertex;
                true
            }
            None => false,
        }
    }

    /// Removes consecutive duplicate vertices, including a duplicate of the
    /// first vertex at the end of the chain
    pub fn dedup_vertices(&mut self) {
        self.vertices.dedup();
        while self.vertices.len() > 1 && self.vertices.first() == self.vertices.last() {
            self.vertices.pop();
        }
    }

    /// Moves every vertex and the centroid by `(dx, dy)`
    pub fn translate(&mut self, dx: i32, dy: i32) {
        let offset = Vector2D::new(dx, dy);
        for v in &mut self.vertices {
            *v = *v + offset;
        }
        self.centroid = self.centroid + offset;
    }

    /// Iterates over the edges `(v[i], v[(i + 1) % n])`
    pub fn edges(&self) -> impl Iterator<Item = (Vector2D, Vector2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Line segments describing the closed outline of this set
    ///
    /// Fewer than two vertices produce no segments.
    pub fn outline_segments(&self) -> Vec<(Vector2D, Vector2D)> {
        if self.vertices.len() < 2 {
            return Vec::new();
        }
        self.edges().collect()
    }

    /// Checks the preconditions of the collision tests
    ///
    /// A set must have at least three vertices, and at least one edge of
    /// non-zero length.
    pub fn validate(&self) -> Result<(), CollisionError> {
        if self.vertices.len() < 3 {
            return Err(CollisionError::InsufficientVertices {
                count: self.vertices.len(),
            });
        }
        if self.edges().all(|(a, b)| a == b) {
            return Err(CollisionError::DegenerateShape);
        }
        Ok(())
    }
}

impl From<Rect> for PointSet {
    fn from(rect: Rect) -> Self {
        rect_to_point_set(rect)
    }
}

impl From<Circle> for PointSet {
    fn from(circle: Circle) -> Self {
        circle_to_point_set(circle)
    }
}

/// Converts a rectangle into its four corners in clockwise screen order
///
/// `(x, y) -> (x + w, y) -> (x + w, y + h) -> (x, y + h)`, centroid at
/// `(x + w / 2, y + h / 2)` with truncating division. Corners wrap on
/// `i32` overflow.
pub fn rect_to_point_set(rect: Rect) -> PointSet {
    let Rect { x, y, width: w, height: h } = rect;
    let (right, bottom) = (x.wrapping_add(w), y.wrapping_add(h));
    PointSet::new(
        vec![
            Vector2D::new(x, y),
            Vector2D::new(right, y),
            Vector2D::new(right, bottom),
            Vector2D::new(x, bottom),
        ],
        rect.center(),
    )
}

/// Approximates a circle with one vertex per whole degree in `[0, 360)`
///
/// A radius of zero or less puts every vertex on the center.
pub fn circle_to_point_set(circle: Circle) -> PointSet {
    let r = f64::from(circle.radius.max(0));
    let Vector2D { x: cx, y: cy } = circle.center;
    let vertices = (0..CIRCLE_VERTEX_COUNT)
        .map(|deg| {
            let theta = utils::deg_to_rad(deg as f64);
            Vector2D::new(
                ((r * theta.cos()).round() as i32).wrapping_add(cx),
                ((r * theta.sin()).round() as i32).wrapping_add(cy),
            )
        })
        .collect();
    PointSet::new(vertices, circle.center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_mapping() {
        let set = rect_to_point_set(Rect::new(10, 10, 20, 10));
        assert_eq!(
            set.vertices,
            vec![
                Vector2D::new(10, 10),
                Vector2D::new(30, 10),
                Vector2D::new(30, 20),
                Vector2D::new(10, 20),
            ]
        );
        assert_eq!(set.centroid, Vector2D::new(20, 15));
        assert_eq!(set.outline_color, None);
    }

    #[test]
    fn test_degenerate_rect_is_not_rejected() {
        let set = PointSet::from(Rect::new(5, 5, 0, 0));
        assert_eq!(set.len(), 4);
        assert_eq!(set.validate(), Err(CollisionError::DegenerateShape));
    }

    #[test]
    fn test_circle_approximation() {
        let center = Vector2D::new(300, 300);
        let set = circle_to_point_set(Circle::new(center, 50));
        assert_eq!(set.len(), 360);
        assert_eq!(set.centroid, center);
        for v in &set.vertices {
            let d = v.distance(center);
            assert!((d - 50.0).abs() <= 1.0, "vertex {v:?} at distance {d}");
        }
        assert_eq!(set.vertices[0], Vector2D::new(350, 300));
        assert_eq!(set.vertices[90], Vector2D::new(300, 350));
        assert_eq!(set.vertices[180], Vector2D::new(250, 300));
    }

    #[test]
    fn test_zero_radius_circle_collapses_to_center() {
        let center = Vector2D::new(7, -3);
        let set = PointSet::from(Circle::new(center, 0));
        assert_eq!(set.len(), 360);
        assert!(set.vertices.iter().all(|&v| v == center));
        assert_eq!(set.validate(), Err(CollisionError::DegenerateShape));
    }

    #[test]
    fn test_negative_radius_collapses_to_center() {
        let center = Vector2D::new(300, 300);
        let set = circle_to_point_set(Circle::new(center, -50));
        assert_eq!(set.len(), 360);
        assert!(set.vertices.iter().all(|&v| v == center));
        assert_eq!(set.validate(), Err(CollisionError::DegenerateShape));

        let probe = rect_to_point_set(Rect::new(240, 290, 20, 20));
        assert_eq!(
            crate::physics::detect_collision(&set, &probe),
            Err(CollisionError::DegenerateShape)
        );
    }

    #[test]
    fn test_extreme_rect_wraps_instead_of_panicking() {
        let rect = Rect::new(i32::MAX - 1, i32::MAX - 1, 10, 10);
        let set = rect_to_point_set(rect);
        assert_eq!(set.vertices[1], Vector2D::new((i32::MAX - 1).wrapping_add(10), i32::MAX - 1));
        assert_eq!(set.centroid, Vector2D::new((i32::MAX - 1).wrapping_add(5), (i32::MAX - 1).wrapping_add(5)));

        let circle = circle_to_point_set(Circle::new(Vector2D::new(i32::MAX, 0), 5));
        assert_eq!(circle.vertices[0], Vector2D::new(i32::MAX.wrapping_add(5), 0));
    }

    #[test]
    fn test_edges_wrap_around() {
        let set = PointSet::from(Rect::new(0, 0, 2, 2));
        let edges: Vec<_> = set.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Vector2D::new(0, 2), Vector2D::new(0, 0)));
    }

    #[test]
    fn test_outline_segments_close_the_loop() {
        let set = PointSet::new(
            vec![Vector2D::new(0, 0), Vector2D::new(4, 0), Vector2D::new(0, 3)],
            Vector2D::new(1, 1),
        );
        let segments = set.outline_segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments.last(), Some(&(Vector2D::new(0, 3), Vector2D::new(0, 0))));
        assert!(PointSet::from_point(Vector2D::new(1, 1)).outline_segments().is_empty());
    }

    #[test]
    fn test_validate_vertex_count() {
        assert_eq!(
            PointSet::default().validate(),
            Err(CollisionError::InsufficientVertices { count: 0 })
        );
        assert_eq!(
            PointSet::from_point(Vector2D::new(1, 2)).validate(),
            Err(CollisionError::InsufficientVertices { count: 1 })
        );
        assert!(PointSet::from(Rect::new(0, 0, 1, 1)).validate().is_ok());
    }

    #[test]
    fn test_from_vertices_mean_centroid() {
        let set = PointSet::from_vertices(vec![
            Vector2D::new(0, 0),
            Vector2D::new(10, 0),
            Vector2D::new(10, 10),
            Vector2D::new(0, 10),
        ]);
        assert_eq!(set.centroid, Vector2D::new(5, 5));
        assert_eq!(PointSet::from_vertices(Vec::new()).centroid, Vector2D::zero());
    }

    #[test]
    fn test_editing_helpers() {
        let mut set = PointSet::default();
        assert!(!set.set_last_vertex(Vector2D::new(1, 1)));

        let p = Vector2D::new(5, 5);
        set.push_vertex(p);
        set.push_vertex(p);
        set.push_vertex(Vector2D::new(9, 5));
        set.push_vertex(Vector2D::new(9, 5));
        assert!(set.set_last_vertex(p));
        set.dedup_vertices();
        assert_eq!(set.vertices, vec![p, Vector2D::new(9, 5)]);
    }

    #[test]
    fn test_translate_moves_centroid() {
        let mut set = PointSet::from(Rect::new(0, 0, 10, 10)).with_color(Color::RED);
        set.translate(5, -5);
        assert_eq!(set.vertices[0], Vector2D::new(5, -5));
        assert_eq!(set.centroid, Vector2D::new(10, 0));
        assert_eq!(set.outline_color, Some(Color::RED));
    }
}
