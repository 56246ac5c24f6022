//! Check-details list: rows with checkboxes under sortable, resizable
//! column headers, plus a select-all control.
//!
//! [`state`] holds the rendering-free model ([`CheckList`] and friends);
//! [`CheckDetails`] is the widget that paints it and routes pointer input
//! back into it.
//!
//! ```
//! use checkdetails_widgets::{CheckList, Row, SelectionState};
//!
//! let mut list = CheckList::new(["Name", "Author"]);
//! list.add_item(Row::new(["Item1", "Auth1"])).unwrap();
//! list.add_item(Row::new(["Item2", "Auth2"])).unwrap();
//!
//! assert!(list.toggle_all());
//! assert_eq!(list.selection_state(), SelectionState::All);
//! ```

pub mod check_details;
pub mod checkbox;
pub mod state;
pub mod style;

pub use check_details::{
    AllToggled, CheckDetails, RowToggled, SortChanged, SortRefused, TOGGLE_ALL_TOOLTIP,
};
pub use checkbox::CheckState;
pub use state::{
    AggregateSelection, CellValue, CheckList, ColumnHeaders, ListError, ListId, ListMetrics, Row,
    RowId, SelectionState, SortDirection, SortKey, StyleError,
};
pub use style::CheckDetailsStyle;
