//! Interactive bounds authoring, driven by recorded clicks
//!
//! Every click appends the clicked point twice. The second copy is the
//! rubber-band vertex: it follows the cursor until the next click pins it.

use anyhow::{bail, Context, Result};
use gfw_engine::debug::OutlineDrawList;
use gfw_engine::foundation::math::Vector2D;
use gfw_engine::physics::{Color, PointSet};

/// Parse `"x,y"` into a point
pub fn parse_point(text: &str) -> Result<Vector2D> {
    let Some((x, y)) = text.split_once(',') else {
        bail!("expected `x,y`, got `{text}`");
    };
    let x = x.trim().parse().with_context(|| format!("bad x in `{text}`"))?;
    let y = y.trim().parse().with_context(|| format!("bad y in `{text}`"))?;
    Ok(Vector2D::new(x, y))
}

/// Parse whitespace separated `"x,y"` pairs
pub fn parse_points(text: &str) -> Result<Vec<Vector2D>> {
    text.split_whitespace().map(parse_point).collect()
}

#[derive(Debug, Clone)]
pub struct BoundsEditor {
    bounds: PointSet,
    clicks: usize,
    draw_list: OutlineDrawList,
}

impl BoundsEditor {
    pub fn new() -> Self {
        Self {
            bounds: PointSet::default().with_color(Color::BLACK),
            clicks: 0,
            draw_list: OutlineDrawList::new(),
        }
    }

    pub fn click_count(&self) -> usize {
        self.clicks
    }

    pub fn on_click(&mut self, pos: Vector2D) {
        log::info!("{}, {}", pos.x, pos.y);
        self.clicks += 1;
        self.bounds.push_vertex(pos);
        self.bounds.push_vertex(pos);
    }

    /// Move the rubber-band vertex and redraw the outline
    pub fn on_cursor_move(&mut self, pos: Vector2D) {
        self.draw_list.begin_frame();
        if self.clicks == 0 {
            return;
        }
        self.bounds.set_last_vertex(pos);
        self.draw_list.draw_bounds(&self.bounds);
    }

    /// Outline currently on screen
    pub fn draw_list(&self) -> &OutlineDrawList {
        &self.draw_list
    }

    /// Vertices as placed, rubber-band copy included
    pub fn raw_bounds(&self) -> &PointSet {
        &self.bounds
    }

    /// The authored polygon: duplicate vertices removed, centroid recomputed
    pub fn finish(&self) -> PointSet {
        let mut bounds = self.bounds.clone();
        bounds.dedup_vertices();
        let mut finished = PointSet::from_vertices(bounds.vertices);
        finished.outline_color = self.bounds.outline_color;
        finished
    }
}

impl Default for BoundsEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_point(" 3, -4").unwrap(), Vector2D::new(3, -4));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
        assert_eq!(
            parse_points("0,0 10,0\n10,10").unwrap(),
            vec![Vector2D::new(0, 0), Vector2D::new(10, 0), Vector2D::new(10, 10)]
        );
    }

    #[test]
    fn test_click_appends_twice() {
        let mut editor = BoundsEditor::new();
        editor.on_click(Vector2D::new(5, 5));
        assert_eq!(editor.click_count(), 1);
        assert_eq!(editor.raw_bounds().vertices, vec![Vector2D::new(5, 5); 2]);
    }

    #[test]
    fn test_cursor_moves_last_vertex() {
        let mut editor = BoundsEditor::new();
        editor.on_cursor_move(Vector2D::new(1, 1));
        assert!(editor.raw_bounds().is_empty());
        assert_eq!(editor.draw_list().segment_count(), 0);

        editor.on_click(Vector2D::new(0, 0));
        editor.on_cursor_move(Vector2D::new(10, 0));
        assert_eq!(
            editor.raw_bounds().vertices,
            vec![Vector2D::new(0, 0), Vector2D::new(10, 0)]
        );
        // Two vertices close into two segments
        assert_eq!(editor.draw_list().segment_count(), 2);
    }

    #[test]
    fn test_finish_builds_triangle() {
        let mut editor = BoundsEditor::new();
        for point in [Vector2D::new(0, 0), Vector2D::new(30, 0), Vector2D::new(0, 30)] {
            editor.on_click(point);
            editor.on_cursor_move(point);
        }
        let bounds = editor.finish();
        assert_eq!(
            bounds.vertices,
            vec![Vector2D::new(0, 0), Vector2D::new(30, 0), Vector2D::new(0, 30)]
        );
        assert_eq!(bounds.centroid, Vector2D::new(10, 10));
        assert_eq!(bounds.outline_color, Some(Color::BLACK));
        assert!(bounds.validate().is_ok());
    }
}
