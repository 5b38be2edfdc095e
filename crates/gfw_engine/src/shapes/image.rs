//! Image bounds
//!
//! The texture itself belongs to the external renderer; this type only
//! tracks the destination rectangle and rotation, and derives the outline
//! used for collision.

use super::updatable::{Updatable, UpdateFlag};
use crate::foundation::math::Vector2D;
use crate::physics::collision::{rotate_point_set, Color, PointSet, Polygon, Rect};

/// Placement of an image on screen plus its derived bounding box
#[derive(Debug, Clone)]
pub struct ImageShape {
    rect: Rect,
    angle: f64,
    outline_color: Option<Color>,
    bounding_box: PointSet,
    flag: UpdateFlag,
}

impl ImageShape {
    /// Create an image occupying `rect`, unrotated
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            angle: 0.0,
            outline_color: None,
            bounding_box: PointSet::from(rect),
            flag: UpdateFlag::new(),
        }
    }

    /// Destination rectangle
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// X of the top-left corner
    pub fn x(&self) -> i32 {
        self.rect.x
    }

    /// Y of the top-left corner
    pub fn y(&self) -> i32 {
        self.rect.y
    }

    /// Width
    pub fn width(&self) -> i32 {
        self.rect.width
    }

    /// Height
    pub fn height(&self) -> i32 {
        self.rect.height
    }

    /// Rotation in degrees
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Move the top-left corner
    pub fn set_pos(&mut self, pos: Vector2D) {
        self.rect.x = pos.x;
        self.rect.y = pos.y;
        self.request_update();
    }

    /// Move by an offset
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.set_pos(Vector2D::new(self.rect.x + dx, self.rect.y + dy));
    }

    /// Resize to `(width, height)`
    pub fn set_size(&mut self, (width, height): (i32, i32)) {
        self.rect.width = width;
        self.rect.height = height;
        self.request_update();
    }

    /// Set the rotation in degrees
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.request_update();
    }

    /// Rotate by `delta` degrees
    pub fn rotate_by(&mut self, delta: f64) {
        self.set_angle(self.angle + delta);
    }

    /// Color of the outline when drawn; takes effect immediately
    pub fn set_outline_color(&mut self, color: Color) {
        self.outline_color = Some(color);
        self.bounding_box.outline_color = Some(color);
    }
}

impl Updatable for ImageShape {
    fn update_flag(&self) -> UpdateFlag {
        self.flag
    }

    fn update_flag_mut(&mut self) -> &mut UpdateFlag {
        &mut self.flag
    }

    fn do_update(&mut self) {
        let mut bounds = PointSet::from(self.rect);
        bounds.outline_color = self.outline_color;
        self.bounding_box = if self.angle == 0.0 {
            bounds
        } else {
            rotate_point_set(&bounds, self.angle)
        };
        log::debug!("image bounds updated: {:?} at {} deg", self.rect, self.angle);
    }
}

impl Polygon for ImageShape {
    /// The box computed by the last update
    fn bounds(&self) -> PointSet {
        self.bounding_box.clone()
    }
}
