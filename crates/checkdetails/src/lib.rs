//! checkdetails: a list of checkable rows under sortable, resizable column
//! headers, with a select-all control that tracks the row flags.
//!
//! This crate re-exports the workspace:
//!
//! - core types ([`Point`], [`Rect`], [`Event`], [`Canvas`], ...) at the root
//! - [`layout`]: header panes and the row layout engine
//! - [`widgets`]: the [`CheckList`](widgets::CheckList) model and the
//!   [`CheckDetails`](widgets::CheckDetails) widget
//!
//! ```
//! use checkdetails::widgets::{CheckDetails, CheckDetailsStyle, Row};
//! use checkdetails::{Rect, Widget};
//!
//! let mut list = CheckDetails::new(["Name", "Author"], CheckDetailsStyle::default())
//!     .unwrap()
//!     .with_items([Row::new(["Item1", "Auth1"]), Row::new(["Item2", "Auth2"])])
//!     .unwrap();
//! list.layout(Rect::new(0.0, 0.0, 320.0, 200.0));
//! assert_eq!(list.list().geometry().rows.len(), 2);
//! ```

pub use checkdetails_core::*;
pub use checkdetails_layout as layout;
pub use checkdetails_widgets as widgets;
