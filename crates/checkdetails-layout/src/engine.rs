//! Row placement for the list body.
//!
//! The engine is a pure function of header geometry, checkbox column
//! width, row count and viewport. Row order does not enter into it: row
//! `i` of the output belongs to whichever row is `i`th in the container.

use checkdetails_core::{Rect, Size};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::header::HeaderSegment;

/// Vertical rhythm of the list body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowMetrics {
    /// Height of a single row
    pub row_height: f32,
    /// Gap between consecutive rows, also used above the first row
    pub row_padding: f32,
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            row_height: 24.0,
            row_padding: 2.0,
        }
    }
}

impl RowMetrics {
    /// Distance from the top of one row to the top of the next.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.row_height + self.row_padding
    }

    /// Y of the first row.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.row_padding
    }
}

/// Everything a layout pass depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    /// Column offsets and widths from the header panes
    pub header: Vec<HeaderSegment>,
    /// Width of the leading checkbox column
    pub check_width: f32,
    /// Number of rows to place
    pub row_count: usize,
    /// Visible area of the body
    pub viewport: Size,
}

/// Where one row's checkbox and cells go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowPlacement {
    /// Checkbox rectangle
    pub checkbox: Rect,
    /// One rectangle per column
    pub cells: Vec<Rect>,
}

/// Output of a layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListGeometry {
    /// Placements in row order
    pub rows: Vec<RowPlacement>,
    /// Bounding box of everything placed
    pub content_size: Size,
    /// Scrollable region: per-axis max of viewport and content
    pub scroll_size: Size,
    pitch: f32,
    top: f32,
}

impl ListGeometry {
    /// Geometry with no rows and no extent.
    pub const EMPTY: Self = Self {
        rows: Vec::new(),
        content_size: Size::ZERO,
        scroll_size: Size::ZERO,
        pitch: 0.0,
        top: 0.0,
    };

    /// Row whose band contains `y`. The band of a row spans its height plus
    /// the padding below it.
    #[must_use]
    pub fn row_at(&self, y: f32) -> Option<usize> {
        if y < self.top || self.pitch <= 0.0 {
            return None;
        }
        let index = ((y - self.top) / self.pitch).floor() as usize;
        (index < self.rows.len()).then_some(index)
    }

    /// Row whose checkbox contains the point.
    #[must_use]
    pub fn checkbox_at(&self, x: f32, y: f32) -> Option<usize> {
        let index = self.row_at(y)?;
        let point = checkdetails_core::Point::new(x, y);
        self.rows[index]
            .checkbox
            .contains_point(&point)
            .then_some(index)
    }

    /// Horizontal overflow beyond the viewport.
    #[must_use]
    pub fn overflows_x(&self, viewport: Size) -> bool {
        self.content_size.width > viewport.width
    }

    /// Vertical overflow beyond the viewport.
    #[must_use]
    pub fn overflows_y(&self, viewport: Size) -> bool {
        self.content_size.height > viewport.height
    }
}

/// Computes row placements from header geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    metrics: RowMetrics,
}

impl LayoutEngine {
    /// Create a new layout engine.
    #[must_use]
    pub const fn new(metrics: RowMetrics) -> Self {
        Self { metrics }
    }

    /// Metrics in use.
    #[must_use]
    pub const fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    /// Place every row.
    #[must_use]
    pub fn compute(&self, input: &LayoutInput) -> ListGeometry {
        let pitch = self.metrics.pitch();
        let top = self.metrics.top();
        let height = self.metrics.row_height;

        let rows = (0..input.row_count)
            .map(|i| {
                let y = top + pitch * i as f32;
                RowPlacement {
                    checkbox: Rect::new(0.0, y, input.check_width, height),
                    cells: input
                        .header
                        .iter()
                        .map(|seg| Rect::new(input.check_width + seg.offset, y, seg.width, height))
                        .collect(),
                }
            })
            .collect();

        let header_width = input.header.last().map_or(0.0, HeaderSegment::right);
        let content_size = Size::new(
            input.check_width + header_width,
            top + pitch * input.row_count as f32,
        );
        let scroll_size = input.viewport.max(&content_size);

        trace!(
            target: "checkdetails::layout",
            rows = input.row_count,
            columns = input.header.len(),
            content_width = content_size.width,
            content_height = content_size.height,
            "layout pass"
        );

        ListGeometry {
            rows,
            content_size,
            scroll_size,
            pitch,
            top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(rows: usize) -> LayoutInput {
        LayoutInput {
            header: vec![
                HeaderSegment {
                    offset: 0.0,
                    width: 50.0,
                },
                HeaderSegment {
                    offset: 52.0,
                    width: 70.0,
                },
            ],
            check_width: 24.0,
            row_count: rows,
            viewport: Size::new(100.0, 60.0),
        }
    }

    #[test]
    fn test_metrics_default_pitch() {
        let m = RowMetrics::default();
        assert_eq!(m.pitch(), 26.0);
        assert_eq!(m.top(), 2.0);
    }

    #[test]
    fn test_engine_places_rows_at_pitch() {
        let g = LayoutEngine::default().compute(&input(3));
        let ys: Vec<f32> = g.rows.iter().map(|r| r.checkbox.y).collect();
        assert_eq!(ys, vec![2.0, 28.0, 54.0]);
    }

    #[test]
    fn test_engine_cells_follow_checkbox_column() {
        let g = LayoutEngine::default().compute(&input(1));
        let row = &g.rows[0];
        assert_eq!(row.checkbox, Rect::new(0.0, 2.0, 24.0, 24.0));
        assert_eq!(row.cells[0], Rect::new(24.0, 2.0, 50.0, 24.0));
        assert_eq!(row.cells[1], Rect::new(76.0, 2.0, 70.0, 24.0));
    }

    #[test]
    fn test_engine_content_and_scroll_size() {
        let g = LayoutEngine::default().compute(&input(3));
        assert_eq!(g.content_size, Size::new(146.0, 80.0));
        assert_eq!(g.scroll_size, Size::new(146.0, 80.0));
        assert!(g.overflows_x(Size::new(100.0, 60.0)));

        let g = LayoutEngine::default().compute(&input(0));
        assert_eq!(g.content_size, Size::new(146.0, 2.0));
        assert_eq!(g.scroll_size, Size::new(146.0, 60.0));
        assert!(!g.overflows_y(Size::new(100.0, 60.0)));
    }

    #[test]
    fn test_engine_no_columns_uses_checkbox_width() {
        let mut i = input(2);
        i.header.clear();
        let g = LayoutEngine::default().compute(&i);
        assert_eq!(g.content_size.width, 24.0);
        assert!(g.rows.iter().all(|r| r.cells.is_empty()));
    }

    #[test]
    fn test_geometry_row_at() {
        let g = LayoutEngine::default().compute(&input(3));
        assert_eq!(g.row_at(0.0), None);
        assert_eq!(g.row_at(2.0), Some(0));
        assert_eq!(g.row_at(27.9), Some(0));
        assert_eq!(g.row_at(28.0), Some(1));
        assert_eq!(g.row_at(79.0), Some(2));
        assert_eq!(g.row_at(80.0), None);
    }

    #[test]
    fn test_geometry_checkbox_at() {
        let g = LayoutEngine::default().compute(&input(2));
        assert_eq!(g.checkbox_at(10.0, 30.0), Some(1));
        assert_eq!(g.checkbox_at(30.0, 30.0), None);
        // Padding band below row 0 belongs to the row but not its checkbox.
        assert_eq!(g.checkbox_at(10.0, 27.0), None);
    }

    #[test]
    fn test_geometry_default_is_empty() {
        let g = ListGeometry::default();
        assert!(g.rows.is_empty());
        assert_eq!(g.row_at(10.0), None);
    }

    proptest! {
        #[test]
        fn prop_compute_is_deterministic(
            rows in 0usize..200,
            w in 1.0f32..800.0,
            h in 1.0f32..800.0,
        ) {
            let mut i = input(rows);
            i.viewport = Size::new(w, h);
            let engine = LayoutEngine::default();
            prop_assert_eq!(engine.compute(&i), engine.compute(&i));
        }

        #[test]
        fn prop_scroll_size_contains_viewport_and_content(
            rows in 0usize..100,
            w in 0.0f32..800.0,
            h in 0.0f32..800.0,
        ) {
            let mut i = input(rows);
            i.viewport = Size::new(w, h);
            let g = LayoutEngine::default().compute(&i);
            prop_assert!(g.scroll_size.contains(&g.content_size));
            prop_assert!(g.scroll_size.contains(&i.viewport));
        }

        #[test]
        fn prop_row_at_finds_each_checkbox(rows in 1usize..100) {
            let g = LayoutEngine::default().compute(&input(rows));
            for (idx, row) in g.rows.iter().enumerate() {
                prop_assert_eq!(g.row_at(row.checkbox.y + 1.0), Some(idx));
            }
        }
    }
}
