//! Text block bounds
//!
//! Glyph rendering and font loading belong to the external text library.
//! A [`TextShape`] only needs the rendered extent, which it gets from a
//! [`TextMetrics`] implementation handed to it explicitly.

use super::updatable::{Updatable, UpdateFlag};
use crate::foundation::math::Vector2D;
use crate::physics::collision::{rotate_point_set, Color, PointSet, Polygon, Rect};
use std::fmt;
use std::sync::Arc;

/// Measures the rendered size of a string
pub trait TextMetrics: Send + Sync {
    /// `(width, height)` in pixels of `text` as it would be rendered
    fn measure(&self, text: &str) -> (i32, i32);
}

/// Fixed-advance metrics: every character has the same width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    /// Horizontal advance per character
    pub advance: i32,
    /// Height of one line
    pub line_height: i32,
}

impl MonospaceMetrics {
    /// Create metrics with the given advance and line height
    pub const fn new(advance: i32, line_height: i32) -> Self {
        Self { advance, line_height }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> (i32, i32) {
        let mut lines = 0;
        let mut widest = 0;
        for line in text.lines() {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        // An empty string still occupies one line
        let lines = lines.max(1);
        (widest as i32 * self.advance, lines * self.line_height)
    }
}

/// A string placed on screen, with its measured size and rotation
#[derive(Clone)]
pub struct TextShape {
    msg: String,
    pos: Vector2D,
    size: (i32, i32),
    angle: f64,
    color: Color,
    metrics: Arc<dyn TextMetrics>,
    flag: UpdateFlag,
}

impl fmt::Debug for TextShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextShape")
            .field("msg", &self.msg)
            .field("pos", &self.pos)
            .field("size", &self.size)
            .field("angle", &self.angle)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl TextShape {
    /// Create a text block; its size is measured on the first update
    pub fn new(msg: impl Into<String>, pos: Vector2D, metrics: Arc<dyn TextMetrics>) -> Self {
        Self {
            msg: msg.into(),
            pos,
            size: (0, 0),
            angle: 0.0,
            color: Color::BLACK,
            metrics,
            flag: UpdateFlag::new(),
        }
    }

    /// The text
    pub fn text(&self) -> &str {
        &self.msg
    }

    /// Replace the text; the size is re-measured on the next update
    pub fn set_text(&mut self, msg: impl Into<String>) {
        self.msg = msg.into();
        self.request_update();
    }

    /// Top-left corner
    pub fn pos(&self) -> Vector2D {
        self.pos
    }

    /// Move the top-left corner
    pub fn set_pos(&mut self, pos: Vector2D) {
        self.pos = pos;
    }

    /// `(width, height)` measured by the last update
    pub fn text_size(&self) -> (i32, i32) {
        self.size
    }

    /// Rotation in degrees
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Set the rotation in degrees
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Render color of the glyphs
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the render color of the glyphs
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Updatable for TextShape {
    fn update_flag(&self) -> UpdateFlag {
        self.flag
    }

    fn update_flag_mut(&mut self) -> &mut UpdateFlag {
        &mut self.flag
    }

    fn do_update(&mut self) {
        self.size = self.metrics.measure(&self.msg);
        log::debug!("text {:?} measured at {:?}", self.msg, self.size);
    }
}

impl Polygon for TextShape {
    /// Rectangle at `pos` with the measured size, rotated about its center
    fn bounds(&self) -> PointSet {
        let bounds = PointSet::from(Rect::from_pos_size(self.pos, self.size));
        if self.angle == 0.0 {
            bounds
        } else {
            rotate_point_set(&bounds, self.angle)
        }
    }
}
