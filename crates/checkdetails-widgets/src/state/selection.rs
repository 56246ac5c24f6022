//! The aggregate "select all" indicator.

use serde::{Deserialize, Serialize};

/// Union of the row flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionState {
    /// No row selected, or no rows at all
    #[default]
    None,
    /// Every row selected
    All,
    /// Some but not all rows selected
    Mixed,
}

impl SelectionState {
    /// Derive the indicator from a selected count and total.
    #[must_use]
    pub const fn from_counts(selected: usize, total: usize) -> Self {
        if selected == 0 {
            Self::None
        } else if selected == total {
            Self::All
        } else {
            Self::Mixed
        }
    }
}

/// State of the aggregate control.
///
/// `checked` is the control's underlying boolean. It is forced `true`
/// while mixed, so the next click selects everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateSelection {
    state: SelectionState,
    checked: bool,
    hovered: bool,
}

impl AggregateSelection {
    /// Create the indicator for an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from row flags.
    pub fn update<I: IntoIterator<Item = bool>>(&mut self, flags: I) -> SelectionState {
        let (selected, total) = flags
            .into_iter()
            .fold((0usize, 0usize), |(s, t), f| (s + usize::from(f), t + 1));
        self.state = SelectionState::from_counts(selected, total);
        self.checked = !matches!(self.state, SelectionState::None);
        self.state
    }

    /// Current indicator.
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Underlying boolean of the control.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Value every row takes when the control is clicked: the inverse of
    /// the control's boolean, except that a mixed control selects all.
    #[must_use]
    pub const fn toggle_target(&self) -> bool {
        !self.checked || matches!(self.state, SelectionState::Mixed)
    }

    /// Whether the pointer is over the control.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set hover. Returns whether it changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_selection_from_counts() {
        assert_eq!(SelectionState::from_counts(0, 0), SelectionState::None);
        assert_eq!(SelectionState::from_counts(0, 3), SelectionState::None);
        assert_eq!(SelectionState::from_counts(3, 3), SelectionState::All);
        assert_eq!(SelectionState::from_counts(1, 3), SelectionState::Mixed);
    }

    #[test]
    fn test_aggregate_mixed_forces_checked() {
        let mut agg = AggregateSelection::new();
        assert_eq!(agg.update([true, false]), SelectionState::Mixed);
        assert!(agg.is_checked());
        assert!(agg.toggle_target());
    }

    #[test]
    fn test_aggregate_all_targets_deselect() {
        let mut agg = AggregateSelection::new();
        agg.update([true, true]);
        assert!(!agg.toggle_target());

        agg.update([false, false]);
        assert!(!agg.is_checked());
        assert!(agg.toggle_target());
    }

    #[test]
    fn test_aggregate_target_follows_checked() {
        let mut agg = AggregateSelection::new();
        assert!(!agg.is_checked());
        assert!(agg.toggle_target());

        agg.update([true]);
        assert!(agg.is_checked());
        assert!(!agg.toggle_target());

        agg.update([true, false, false]);
        assert!(agg.is_checked());
        assert!(agg.toggle_target());
    }

    #[test]
    fn test_aggregate_hover() {
        let mut agg = AggregateSelection::new();
        assert!(agg.set_hovered(true));
        assert!(!agg.set_hovered(true));
        assert!(agg.is_hovered());
    }

    proptest! {
        #[test]
        fn prop_indicator_matches_flags(flags in proptest::collection::vec(any::<bool>(), 0..50)) {
            let mut agg = AggregateSelection::new();
            let state = agg.update(flags.iter().copied());
            let all = !flags.is_empty() && flags.iter().all(|&f| f);
            let none = flags.iter().all(|&f| !f);
            prop_assert_eq!(state == SelectionState::All, all);
            prop_assert_eq!(state == SelectionState::None, none);
        }
    }
}
