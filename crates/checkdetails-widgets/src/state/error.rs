//! Error types for the list container and style configuration.

use thiserror::Error;

/// Contract violations reported by [`CheckList`](super::CheckList).
///
/// Every variant leaves the list exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The row is already bound to a list.
    #[error("row is already attached to a list")]
    DuplicateAttachment,

    /// The row id does not name a row in this list.
    #[error("row not found in this list")]
    NotFound,

    /// Values in the sort column cannot be ordered against each other.
    #[error("values in column {column} are not mutually comparable")]
    IncomparableSort {
        /// Column that was requested
        column: usize,
    },

    /// Column index past the last column.
    #[error("column {column} out of range (list has {columns} columns)")]
    ColumnOutOfRange {
        /// Column that was requested
        column: usize,
        /// Number of columns
        columns: usize,
    },

    /// Row value count differs from the column count.
    #[error("row has {found} values, list expects {expected}")]
    ArityMismatch {
        /// Number of columns
        expected: usize,
        /// Number of values in the row
        found: usize,
    },
}

/// Failures loading or validating a [`CheckDetailsStyle`](crate::CheckDetailsStyle).
#[derive(Debug, Error)]
pub enum StyleError {
    /// YAML was malformed or did not match the schema.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A value parsed but is out of range.
    #[error("invalid style: {0}")]
    Validation(String),
}
