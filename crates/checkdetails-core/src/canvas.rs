//! Canvas implementations for rendering.

use crate::widget::{Canvas, TextStyle, Transform2D};
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// A single recorded paint operation, in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled or stroked rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color, if filled
        fill: Option<Color>,
        /// Stroke color and width, if stroked
        stroke: Option<(Color, f32)>,
    },
    /// Straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Transforms pushed on the canvas are resolved before recording, so tests
/// see final positions. Commands entirely outside the current clip are
/// dropped.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every recorded text run, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.transform_stack.clear();
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform2D::IDENTITY)
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    fn map_rect(&self, rect: Rect) -> Rect {
        rect.translate(self.current_transform().apply(Point::ORIGIN))
    }

    fn visible(&self, rect: &Rect) -> bool {
        self.current_clip().map_or(true, |clip| {
            rect.x < clip.right()
                && rect.right() > clip.x
                && rect.y < clip.bottom()
                && rect.bottom() > clip.y
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let bounds = self.map_rect(rect);
        if self.visible(&bounds) {
            self.commands.push(DrawCommand::Rect {
                bounds,
                fill: Some(color),
                stroke: None,
            });
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let bounds = self.map_rect(rect);
        if self.visible(&bounds) {
            self.commands.push(DrawCommand::Rect {
                bounds,
                fill: None,
                stroke: Some((color, width)),
            });
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let position = self.current_transform().apply(position);
        let anchor = Rect::new(position.x, position.y, 1.0, style.size);
        if self.visible(&anchor) {
            self.commands.push(DrawCommand::Text {
                content: text.to_string(),
                position,
                style: style.clone(),
            });
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let t = self.current_transform();
        self.commands.push(DrawCommand::Line {
            from: t.apply(from),
            to: t.apply(to),
            color,
            width,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        let rect = self.map_rect(rect);
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}
