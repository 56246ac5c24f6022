//! Layout for the checkdetails list component.
//!
//! Two pieces:
//!
//! - [`HeaderPanes`]: resizable column panes producing [`HeaderSegment`]s
//! - [`LayoutEngine`]: places each row's checkbox and cells beneath the
//!   header and derives the scrollable extent, memoized by [`LayoutCache`]

mod cache;
mod engine;
mod header;

pub use cache::LayoutCache;
pub use engine::{LayoutEngine, LayoutInput, ListGeometry, RowMetrics, RowPlacement};
pub use header::{HeaderPanes, HeaderSegment};
