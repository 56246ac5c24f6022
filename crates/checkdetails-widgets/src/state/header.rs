//! Column titles and the click-to-sort state machine.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// Glyph shown beside the active header. Descending shows the up
    /// triangle and ascending the down triangle.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Descending => "\u{25B3}",
            Self::Ascending => "\u{25BD}",
        }
    }

    /// The other direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Column index
    pub column: usize,
    /// Direction
    pub direction: SortDirection,
}

/// Ordered column titles plus sort and hover state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeaders {
    titles: Vec<String>,
    sort: Option<SortKey>,
    #[serde(skip)]
    hovered: Option<usize>,
}

impl ColumnHeaders {
    /// Create headers from titles.
    #[must_use]
    pub fn new<T: Into<String>>(titles: impl IntoIterator<Item = T>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            sort: None,
            hovered: None,
        }
    }

    /// Column titles in order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// True when there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Current sort key, if any column has been clicked.
    #[must_use]
    pub const fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    /// Key that a click on `column` would produce: the same column flips
    /// direction, any other column starts ascending.
    #[must_use]
    pub fn next_key(&self, column: usize) -> SortKey {
        let direction = match self.sort {
            Some(key) if key.column == column => key.direction.flipped(),
            _ => SortDirection::Ascending,
        };
        SortKey { column, direction }
    }

    /// Make `key` the active sort. Only one column carries the glyph.
    pub(crate) fn set_sort(&mut self, key: SortKey) {
        self.sort = Some(key);
    }

    /// Glyph to draw beside column `index`, empty for inactive columns.
    #[must_use]
    pub fn glyph(&self, index: usize) -> &'static str {
        match self.sort {
            Some(key) if key.column == index => key.direction.glyph(),
            _ => "",
        }
    }

    /// Header currently under the pointer.
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Update the hovered header. Returns whether it changed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&i| i < self.titles.len());
        let changed = self.hovered != index;
        self.hovered = index;
        changed
    }
}
