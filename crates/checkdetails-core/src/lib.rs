//! Core types and traits for the checkdetails list component.
//!
//! This crate provides foundational types used throughout checkdetails:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`MouseButton`]
//! - The paint seam: [`Widget`], [`Canvas`] and the test double
//!   [`RecordingCanvas`]

mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, Transform2D, TypeId, Widget,
};
