//! Outline drawing lists
//!
//! Collision bounds are drawn as closed line loops. The list only records
//! the segments; a renderer walks [`OutlineDrawList::segments`] and issues
//! the actual line calls.

use crate::core::config::EngineConfig;
use crate::foundation::math::Vector2D;
use crate::physics::collision::{Color, PointSet, Polygon};
use std::collections::BTreeMap;

/// Identifier for outlines that stay across frames
pub type OutlineId = String;

/// One line of an outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineSegment {
    /// Start point
    pub start: Vector2D,
    /// End point
    pub end: Vector2D,
    /// Line color
    pub color: Color,
}

/// Collects outline segments for a frame
///
/// Per-frame segments are dropped by [`begin_frame`](Self::begin_frame);
/// persistent outlines stay until removed by id.
#[derive(Debug, Clone)]
pub struct OutlineDrawList {
    frame_segments: Vec<OutlineSegment>,
    persistent: BTreeMap<OutlineId, Vec<OutlineSegment>>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl OutlineDrawList {
    /// Create an enabled, empty list
    pub fn new() -> Self {
        Self {
            frame_segments: Vec::new(),
            persistent: BTreeMap::new(),
            enabled: true,
        }
    }

    /// Create a list enabled according to `config.debug_draw`
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            enabled: config.debug_draw,
            ..Self::new()
        }
    }

    /// Draw the outline of `set` in its own color, black if it has none
    pub fn draw_bounds(&mut self, set: &PointSet) {
        let color = set.outline_color.unwrap_or(Color::BLACK);
        self.draw_outline(set, color);
    }

    /// Draw the bounds of `shape` in `color`
    pub fn draw_polygon(&mut self, shape: &dyn Polygon, color: Color) {
        self.draw_outline(&shape.bounds(), color);
    }

    /// Keep the outline of `set` under `id` until it is removed
    pub fn draw_persistent(&mut self, id: impl Into<OutlineId>, set: &PointSet) {
        if !self.enabled {
            return;
        }
        let color = set.outline_color.unwrap_or(Color::BLACK);
        self.persistent.insert(id.into(), segments_of(set, color));
    }

    /// Remove a persistent outline
    pub fn clear_persistent(&mut self, id: &str) {
        self.persistent.remove(id);
    }

    /// Drop the per-frame segments
    pub fn begin_frame(&mut self) {
        self.frame_segments.clear();
    }

    /// All segments to render this frame
    pub fn segments(&self) -> Vec<&OutlineSegment> {
        if !self.enabled {
            return Vec::new();
        }

        self.frame_segments
            .iter()
            .chain(self.persistent.values().flatten())
            .collect()
    }

    /// Number of recorded segments
    pub fn segment_count(&self) -> usize {
        self.frame_segments.len() + self.persistent.values().map(Vec::len).sum::<usize>()
    }

    /// Clear everything, persistent outlines included
    pub fn clear(&mut self) {
        self.frame_segments.clear();
        self.persistent.clear();
    }

    fn draw_outline(&mut self, set: &PointSet, color: Color) {
        if !self.enabled {
            return;
        }
        self.frame_segments.extend(segments_of(set, color));
    }
}

impl Default for OutlineDrawList {
    fn default() -> Self {
        Self::new()
    }
}

fn segments_of(set: &PointSet, color: Color) -> Vec<OutlineSegment> {
    set.outline_segments()
        .into_iter()
        .map(|(start, end)| OutlineSegment { start, end, color })
        .collect()
}
