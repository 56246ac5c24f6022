//! Tri-state checkbox visual shared by the rows and the aggregate control.

use checkdetails_core::{Canvas, Rect};
use serde::{Deserialize, Serialize};

use crate::state::SelectionState;
use crate::style::CheckDetailsStyle;

/// Checkbox state (supports tri-state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckState {
    /// Not checked
    #[default]
    Unchecked,
    /// Checked
    Checked,
    /// Indeterminate (some rows selected)
    Indeterminate,
}

impl CheckState {
    /// Check if checked (true for Checked, false for others).
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Check if indeterminate.
    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

impl From<SelectionState> for CheckState {
    fn from(state: SelectionState) -> Self {
        match state {
            SelectionState::None => Self::Unchecked,
            SelectionState::All => Self::Checked,
            SelectionState::Mixed => Self::Indeterminate,
        }
    }
}

/// Paint a checkbox centred in `bounds`.
///
/// `active` is the highlighted sub-state rows take while the aggregate
/// control is hovered.
pub(crate) fn paint_checkbox(
    canvas: &mut dyn Canvas,
    bounds: Rect,
    state: CheckState,
    active: bool,
    style: &CheckDetailsStyle,
) -> Rect {
    let size = style.box_size.min(bounds.width).min(bounds.height);
    let box_rect = Rect::new(
        bounds.x + (bounds.width - size) / 2.0,
        bounds.y + (bounds.height - size) / 2.0,
        size,
        size,
    );

    let box_color = if active {
        style.active_color
    } else if state.is_checked() || state.is_indeterminate() {
        style.checked_color
    } else {
        style.box_color
    };
    canvas.fill_rect(box_rect, box_color);

    match state {
        CheckState::Checked => {
            let inner = Rect::new(
                size.mul_add(0.25, box_rect.x),
                size.mul_add(0.25, box_rect.y),
                size * 0.5,
                size * 0.5,
            );
            canvas.fill_rect(inner, style.check_color);
        }
        CheckState::Indeterminate => {
            let line = Rect::new(
                size.mul_add(0.2, box_rect.x),
                size.mul_add(0.4, box_rect.y),
                size * 0.6,
                size * 0.2,
            );
            canvas.fill_rect(line, style.check_color);
        }
        CheckState::Unchecked => {}
    }
    box_rect
}
