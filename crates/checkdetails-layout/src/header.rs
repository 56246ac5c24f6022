//! Resizable header panes.
//!
//! Columns sit side by side, separated by a fixed-width sash. Each pane
//! remembers the width it was created with as its minimum; dragging the
//! divider on a pane's right edge grows or shrinks it down to that minimum.

use serde::{Deserialize, Serialize};

/// Horizontal placement of one column, relative to the first pane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderSegment {
    /// X offset of the pane's left edge
    pub offset: f32,
    /// Pane width
    pub width: f32,
}

impl HeaderSegment {
    /// X coordinate of the pane's right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.offset + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Pane {
    width: f32,
    min_width: f32,
}

/// Ordered header panes with a sash between neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderPanes {
    panes: Vec<Pane>,
    sash: f32,
}

impl HeaderPanes {
    /// Create panes from their required widths. Each width doubles as the
    /// pane's minimum.
    #[must_use]
    pub fn new(widths: impl IntoIterator<Item = f32>, sash: f32) -> Self {
        let panes = widths
            .into_iter()
            .map(|w| {
                let w = w.max(0.0);
                Pane {
                    width: w,
                    min_width: w,
                }
            })
            .collect();
        Self {
            panes,
            sash: sash.max(0.0),
        }
    }

    /// Number of panes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// True when there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Sash width between panes.
    #[must_use]
    pub const fn sash(&self) -> f32 {
        self.sash
    }

    /// Current width of pane `index`.
    #[must_use]
    pub fn width(&self, index: usize) -> Option<f32> {
        self.panes.get(index).map(|p| p.width)
    }

    /// Minimum width of pane `index`.
    #[must_use]
    pub fn min_width(&self, index: usize) -> Option<f32> {
        self.panes.get(index).map(|p| p.min_width)
    }

    /// Offset and width of every pane, left to right.
    #[must_use]
    pub fn segments(&self) -> Vec<HeaderSegment> {
        let mut offset = 0.0;
        self.panes
            .iter()
            .map(|p| {
                let seg = HeaderSegment {
                    offset,
                    width: p.width,
                };
                offset += p.width + self.sash;
                seg
            })
            .collect()
    }

    /// Right edge of the last pane, or zero without columns.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.segments().last().map_or(0.0, HeaderSegment::right)
    }

    /// Resize pane `index`, clamped at its minimum. Returns the width that
    /// was applied, or `None` for a missing pane.
    pub fn set_width(&mut self, index: usize, width: f32) -> Option<f32> {
        let pane = self.panes.get_mut(index)?;
        pane.width = width.max(pane.min_width);
        Some(pane.width)
    }

    /// Index of the divider under `x`, if any. Divider `i` is the sash
    /// band immediately right of pane `i`.
    #[must_use]
    pub fn divider_at(&self, x: f32) -> Option<usize> {
        let grab = self.sash.max(1.0);
        self.segments()
            .iter()
            .position(|seg| x >= seg.right() && x < seg.right() + grab)
    }

    /// Move divider `index` to `x`, resizing the pane to its left. Returns
    /// whether the width changed.
    pub fn drag_divider(&mut self, index: usize, x: f32) -> bool {
        let Some(offset) = self.segments().get(index).map(|s| s.offset) else {
            return false;
        };
        let before = self.width(index);
        let after = self.set_width(index, x - offset);
        before != after
    }

    /// Pane under `x`, excluding sashes.
    #[must_use]
    pub fn pane_at(&self, x: f32) -> Option<usize> {
        self.segments()
            .iter()
            .position(|seg| x >= seg.offset && x < seg.right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn panes() -> HeaderPanes {
        HeaderPanes::new([60.0, 80.0, 100.0], 2.0)
    }

    #[test]
    fn test_header_segments_include_sash() {
        let segs = panes().segments();
        assert_eq!(
            segs,
            vec![
                HeaderSegment {
                    offset: 0.0,
                    width: 60.0
                },
                HeaderSegment {
                    offset: 62.0,
                    width: 80.0
                },
                HeaderSegment {
                    offset: 144.0,
                    width: 100.0
                },
            ]
        );
        assert_eq!(panes().total_width(), 244.0);
    }

    #[test]
    fn test_header_empty() {
        let p = HeaderPanes::new([], 2.0);
        assert!(p.is_empty());
        assert_eq!(p.total_width(), 0.0);
        assert!(p.segments().is_empty());
        assert_eq!(p.divider_at(0.0), None);
    }

    #[test]
    fn test_header_set_width_clamps_at_min() {
        let mut p = panes();
        assert_eq!(p.set_width(1, 10.0), Some(80.0));
        assert_eq!(p.set_width(1, 120.0), Some(120.0));
        assert_eq!(p.set_width(7, 120.0), None);
        assert_eq!(p.min_width(1), Some(80.0));
    }

    #[test]
    fn test_header_divider_hit_test() {
        let p = panes();
        assert_eq!(p.divider_at(60.0), Some(0));
        assert_eq!(p.divider_at(61.5), Some(0));
        assert_eq!(p.divider_at(62.0), None);
        assert_eq!(p.divider_at(142.0), Some(1));
        assert_eq!(p.divider_at(244.0), Some(2));
        assert_eq!(p.divider_at(30.0), None);
    }

    #[test]
    fn test_header_pane_at() {
        let p = panes();
        assert_eq!(p.pane_at(0.0), Some(0));
        assert_eq!(p.pane_at(61.0), None);
        assert_eq!(p.pane_at(62.0), Some(1));
        assert_eq!(p.pane_at(243.0), Some(2));
        assert_eq!(p.pane_at(300.0), None);
    }

    #[test]
    fn test_header_drag_divider_moves_following_panes() {
        let mut p = panes();
        assert!(p.drag_divider(0, 90.0));
        assert_eq!(p.width(0), Some(90.0));
        assert_eq!(p.segments()[1].offset, 92.0);

        assert!(!p.drag_divider(0, 90.0));
        assert!(!p.drag_divider(5, 90.0));
    }

    #[test]
    fn test_header_drag_below_min_is_clamped() {
        let mut p = panes();
        p.drag_divider(2, 150.0);
        assert_eq!(p.width(2), Some(100.0));
    }

    proptest! {
        #[test]
        fn prop_segments_never_overlap(
            widths in proptest::collection::vec(0.0f32..300.0, 0..8),
            sash in 0.0f32..6.0,
        ) {
            let segs = HeaderPanes::new(widths, sash).segments();
            for pair in segs.windows(2) {
                prop_assert!(pair[0].right() <= pair[1].offset);
            }
        }

        #[test]
        fn prop_width_never_below_min(target in -100.0f32..500.0, index in 0usize..3) {
            let mut p = panes();
            p.set_width(index, target);
            prop_assert!(p.width(index) >= p.min_width(index));
        }
    }
}
