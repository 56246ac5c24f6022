//! Rows and their identities.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::sync::atomic::{AtomicU64, Ordering};

use super::value::CellValue;

new_key_type! {
    /// Handle to a row inside a [`CheckList`](super::CheckList).
    pub struct RowId;
}

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a list container. Rows remember the container they were
/// attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(u64);

impl ListId {
    pub(crate) fn next() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A record of column values plus its selection flag.
///
/// The values are fixed once the row exists. A row is bound to the first
/// list it is added to; a clone of a bound row stays bound to that list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: Vec<CellValue>,
    selected: bool,
    #[serde(skip)]
    owner: Option<ListId>,
}

impl Row {
    /// Create a new unselected row.
    #[must_use]
    pub fn new<V: Into<CellValue>>(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            selected: false,
            owner: None,
        }
    }

    /// Set the initial selection flag.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Column values in declaration order.
    #[must_use]
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Value of column `index`.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&CellValue> {
        self.values.get(index)
    }

    /// Current selection flag.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the row already belongs to a list.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.owner.is_some()
    }

    /// List the row belongs to.
    #[must_use]
    pub const fn owner(&self) -> Option<ListId> {
        self.owner
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn bind(&mut self, owner: ListId) {
        self.owner = Some(owner);
    }
}
