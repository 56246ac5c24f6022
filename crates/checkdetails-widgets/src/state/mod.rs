//! Rendering-free list state.
//!
//! Rows, sort state and the aggregate indicator live here with no
//! dependency on [`Canvas`](checkdetails_core::Canvas) or
//! [`Widget`](checkdetails_core::Widget); the widget in
//! [`crate::check_details`] observes it.

mod error;
mod header;
mod list;
mod row;
mod selection;
mod value;

pub use error::{ListError, StyleError};
pub use header::{ColumnHeaders, SortDirection, SortKey};
pub use list::{CheckList, ListMetrics};
pub use row::{ListId, Row, RowId};
pub use selection::{AggregateSelection, SelectionState};
pub use value::CellValue;
