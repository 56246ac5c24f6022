//! Visual configuration for [`CheckDetails`](crate::CheckDetails).
//!
//! A style is an explicit value handed to the widget at construction. It
//! can be written and read as YAML:
//!
//! ```
//! use checkdetails_widgets::CheckDetailsStyle;
//!
//! let style = CheckDetailsStyle::from_yaml("row_height: 30.0\n").unwrap();
//! assert_eq!(style.row_height, 30.0);
//! assert_eq!(style.metrics().row.pitch(), 32.0);
//! ```
//!
//! Colors may be given as `{r, g, b, a}` maps or as quoted `"#rrggbb"` /
//! `"#rrggbbaa"` strings.

use checkdetails_core::{Color, TextStyle};
use checkdetails_layout::RowMetrics;
use serde::{Deserialize, Serialize};

use crate::state::{ListMetrics, StyleError};

/// Colors in YAML: either the component map or a hex string.
mod color_field {
    use checkdetails_core::Color;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Hex(String),
        Rgba(Color),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Hex(hex) => Color::from_hex(&hex).map_err(D::Error::custom),
            Repr::Rgba(color) => Ok(color),
        }
    }
}

/// Sizes and colors of the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckDetailsStyle {
    /// Height of one row
    pub row_height: f32,
    /// Gap between rows
    pub row_padding: f32,
    /// Width of the checkbox column
    pub check_width: f32,
    /// Side of a checkbox square
    pub box_size: f32,
    /// Height of the header strip
    pub header_height: f32,
    /// Gap between header panes
    pub sash_width: f32,
    /// Estimated width of one character
    pub char_width: f32,
    /// Horizontal padding inside a header pane
    pub header_padding: f32,
    /// Thickness of the scrollbars
    pub scrollbar_width: f32,
    /// List body background
    #[serde(deserialize_with = "color_field::deserialize")]
    pub body_background: Color,
    /// Header pane background
    #[serde(deserialize_with = "color_field::deserialize")]
    pub header_background: Color,
    /// Header pane background under the pointer
    #[serde(deserialize_with = "color_field::deserialize")]
    pub header_hover: Color,
    /// Unchecked box color
    #[serde(deserialize_with = "color_field::deserialize")]
    pub box_color: Color,
    /// Checked or mixed box color
    #[serde(deserialize_with = "color_field::deserialize")]
    pub checked_color: Color,
    /// Box color while the aggregate control is hovered
    #[serde(deserialize_with = "color_field::deserialize")]
    pub active_color: Color,
    /// Check mark color
    #[serde(deserialize_with = "color_field::deserialize")]
    pub check_color: Color,
    /// Scrollbar thumb color
    #[serde(deserialize_with = "color_field::deserialize")]
    pub scrollbar_color: Color,
    /// Cell and header text
    pub text: TextStyle,
}

impl Default for CheckDetailsStyle {
    fn default() -> Self {
        Self {
            row_height: 24.0,
            row_padding: 2.0,
            check_width: 24.0,
            box_size: 16.0,
            header_height: 24.0,
            sash_width: 2.0,
            char_width: 8.0,
            header_padding: 16.0,
            scrollbar_width: 12.0,
            body_background: Color::WHITE,
            header_background: Color::new(0.94, 0.94, 0.94, 1.0),
            header_hover: Color::LIGHT_BLUE,
            box_color: Color::new(0.8, 0.8, 0.8, 1.0),
            checked_color: Color::new(0.2, 0.47, 0.96, 1.0),
            active_color: Color::new(0.55, 0.7, 0.98, 1.0),
            check_color: Color::WHITE,
            scrollbar_color: Color::new(0.6, 0.6, 0.6, 1.0),
            text: TextStyle::default(),
        }
    }
}

impl CheckDetailsStyle {
    /// Parse and validate a style from YAML. Missing keys keep their
    /// defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        let style: Self = serde_yaml_ng::from_str(yaml)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, StyleError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Reject sizes a layout pass cannot use and colors outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), StyleError> {
        let positive = [
            ("row_height", self.row_height),
            ("check_width", self.check_width),
            ("box_size", self.box_size),
            ("header_height", self.header_height),
            ("char_width", self.char_width),
        ];
        let non_negative = [
            ("row_padding", self.row_padding),
            ("sash_width", self.sash_width),
            ("header_padding", self.header_padding),
            ("scrollbar_width", self.scrollbar_width),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(StyleError::Validation(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(StyleError::Validation(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        let colors = [
            ("body_background", self.body_background),
            ("header_background", self.header_background),
            ("header_hover", self.header_hover),
            ("box_color", self.box_color),
            ("checked_color", self.checked_color),
            ("active_color", self.active_color),
            ("check_color", self.check_color),
            ("scrollbar_color", self.scrollbar_color),
            ("text.color", self.text.color),
        ];
        if let Some((name, _)) = colors.iter().find(|(_, c)| !c.is_normalized()) {
            return Err(StyleError::Validation(format!(
                "{name} components must lie in [0, 1]"
            )));
        }
        if !self.text.size.is_finite() || self.text.size <= 0.0 {
            return Err(StyleError::Validation(format!(
                "text.size must be positive, got {}",
                self.text.size
            )));
        }
        if self.box_size > self.check_width {
            return Err(StyleError::Validation(format!(
                "box_size {} does not fit check_width {}",
                self.box_size, self.check_width
            )));
        }
        Ok(())
    }

    /// Sizes the list container needs.
    #[must_use]
    pub fn metrics(&self) -> ListMetrics {
        ListMetrics {
            row: RowMetrics {
                row_height: self.row_height,
                row_padding: self.row_padding,
            },
            check_width: self.check_width,
            sash_width: self.sash_width,
            char_width: self.char_width,
            header_padding: self.header_padding,
        }
    }
}
