//! The check-details widget: a header strip with an aggregate checkbox and
//! sortable, resizable column panes above a scrollable body of rows.

use checkdetails_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, MouseButton, Point, Rect, Size, Transform2D, TypeId, Widget,
};
use std::any::Any;
use tracing::{debug, trace};

use crate::checkbox::{paint_checkbox, CheckState};
use crate::state::{CheckList, ListError, Row, RowId, SelectionState, SortDirection, StyleError};
use crate::style::CheckDetailsStyle;

const TARGET: &str = "checkdetails::widget";

/// Tooltip shown over the aggregate checkbox.
pub const TOGGLE_ALL_TOOLTIP: &str = "Toggle all checkboxes.";

/// Message emitted when a header click re-sorted the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortChanged {
    /// Column now sorted
    pub column: usize,
    /// Direction now in effect
    pub direction: SortDirection,
}

/// Message emitted when a header click could not sort its column. Rows and
/// sort state are unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRefused {
    /// Column that was clicked
    pub column: usize,
    /// Why the list refused
    pub error: ListError,
}

/// Message emitted when a row checkbox was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowToggled {
    /// Row that changed
    pub row: RowId,
    /// Its new flag
    pub selected: bool,
    /// Aggregate indicator afterwards
    pub state: SelectionState,
}

/// Message emitted when the aggregate checkbox was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllToggled {
    /// Value every row now has
    pub selected: bool,
    /// Aggregate indicator afterwards
    pub state: SelectionState,
}

/// Check-details list widget.
#[derive(Debug)]
pub struct CheckDetails {
    list: CheckList,
    style: CheckDetailsStyle,
    bounds: Rect,
    scroll: Point,
    dragging: Option<usize>,
    accessible_name_value: Option<String>,
}

impl CheckDetails {
    /// Create an empty list with the given column titles. The style is
    /// validated first.
    pub fn new<T: Into<String>>(
        titles: impl IntoIterator<Item = T>,
        style: CheckDetailsStyle,
    ) -> Result<Self, StyleError> {
        style.validate()?;
        let list = CheckList::with_metrics(titles, style.metrics());
        Ok(Self {
            list,
            style,
            bounds: Rect::default(),
            scroll: Point::ORIGIN,
            dragging: None,
            accessible_name_value: None,
        })
    }

    /// Add initial rows.
    pub fn with_items(mut self, rows: impl IntoIterator<Item = Row>) -> Result<Self, ListError> {
        self.list.add_items(rows)?;
        Ok(self)
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// The underlying list.
    #[must_use]
    pub const fn list(&self) -> &CheckList {
        &self.list
    }

    /// Mutable access for programmatic add, remove and sort.
    pub fn list_mut(&mut self) -> &mut CheckList {
        &mut self.list
    }

    /// Style in use.
    #[must_use]
    pub const fn style(&self) -> &CheckDetailsStyle {
        &self.style
    }

    /// Current scroll offset of the body.
    #[must_use]
    pub const fn scroll_offset(&self) -> Point {
        self.scroll
    }

    /// Divider currently being dragged.
    #[must_use]
    pub const fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    /// Tooltip for the point, if any.
    #[must_use]
    pub fn tooltip_at(&self, position: Point) -> Option<&'static str> {
        self.aggregate_rect()
            .contains_point(&position)
            .then_some(TOGGLE_ALL_TOOLTIP)
    }

    fn header_rect(&self) -> Rect {
        self.bounds.split_top(self.style.header_height).0
    }

    fn body_rect(&self) -> Rect {
        self.bounds.split_top(self.style.header_height).1
    }

    fn aggregate_rect(&self) -> Rect {
        let header = self.header_rect();
        Rect::new(header.x, header.y, self.style.check_width, header.height)
    }

    /// X in header-pane coordinates. Panes scroll horizontally with the body.
    fn header_x(&self, x: f32) -> f32 {
        x - self.bounds.x - self.style.check_width + self.scroll.x
    }

    fn in_panes(&self, position: Point) -> bool {
        self.header_rect().contains_point(&position)
            && !self.aggregate_rect().contains_point(&position)
    }

    fn max_scroll(&self) -> Point {
        let content = self.list.geometry().content_size;
        let viewport = self.body_rect().size();
        Point::new(
            (content.width - viewport.width).max(0.0),
            (content.height - viewport.height).max(0.0),
        )
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.scroll = Point::new(
            self.scroll.x.clamp(0.0, max.x),
            self.scroll.y.clamp(0.0, max.y),
        );
    }

    fn relayout(&mut self) {
        self.list.resize(self.body_rect().size());
        self.clamp_scroll();
    }

    fn on_move(&mut self, position: Point) {
        if let Some(divider) = self.dragging {
            let x = self.header_x(position.x);
            if self.list.drag_divider(divider, x) {
                self.clamp_scroll();
            }
        }

        let over_aggregate = self.aggregate_rect().contains_point(&position);
        if self.list.set_aggregate_hover(over_aggregate) {
            trace!(target: TARGET, hovered = over_aggregate, "aggregate hover");
        }

        let header = if self.in_panes(position) {
            self.list.panes().pane_at(self.header_x(position.x))
        } else {
            None
        };
        self.list.set_header_hover(header);
    }

    fn on_press(&mut self, position: Point) -> Option<Box<dyn Any + Send>> {
        if self.aggregate_rect().contains_point(&position) {
            let selected = self.list.toggle_all();
            return Some(Box::new(AllToggled {
                selected,
                state: self.list.selection_state(),
            }));
        }

        if self.in_panes(position) {
            let x = self.header_x(position.x);
            if let Some(divider) = self.list.panes().divider_at(x) {
                self.dragging = Some(divider);
                return None;
            }
            let column = self.list.panes().pane_at(x)?;
            return match self.list.sort(column) {
                Ok(key) => {
                    self.clamp_scroll();
                    Some(Box::new(SortChanged {
                        column: key.column,
                        direction: key.direction,
                    }))
                }
                Err(error) => {
                    debug!(target: TARGET, column, %error, "sort refused");
                    Some(Box::new(SortRefused { column, error }))
                }
            };
        }

        let body = self.body_rect();
        if !body.contains_point(&position) {
            return None;
        }
        let local = position - body.origin() + self.scroll;
        let index = self.list.geometry().checkbox_at(local.x, local.y)?;
        let row = *self.list.row_ids().get(index)?;
        let selected = self.list.toggle_row(row).ok()?;
        Some(Box::new(RowToggled {
            row,
            selected,
            state: self.list.selection_state(),
        }))
    }

    fn paint_header(&self, canvas: &mut dyn Canvas) {
        let header = self.header_rect();
        let style = &self.style;
        canvas.fill_rect(header, style.header_background);

        paint_checkbox(
            canvas,
            self.aggregate_rect(),
            CheckState::from(self.list.selection_state()),
            false,
            style,
        );

        let panes_area = Rect::new(
            header.x + style.check_width,
            header.y,
            (header.width - style.check_width).max(0.0),
            header.height,
        );
        canvas.push_clip(panes_area);
        let headers = self.list.headers();
        let text_y = header.y + (header.height - style.text.size) / 2.0;
        for (i, seg) in self.list.panes().segments().iter().enumerate() {
            let x = panes_area.x + seg.offset - self.scroll.x;
            let pane = Rect::new(x, header.y, seg.width, header.height);
            let fill = if headers.hovered() == Some(i) {
                style.header_hover
            } else {
                style.header_background
            };
            canvas.fill_rect(pane, fill);
            canvas.stroke_rect(pane, style.scrollbar_color, 1.0);

            let pad = style.header_padding / 2.0;
            if let Some(title) = headers.titles().get(i) {
                canvas.draw_text(title, Point::new(x + pad, text_y), &style.text);
            }
            let glyph = headers.glyph(i);
            if !glyph.is_empty() {
                let glyph_x = pane.right() - pad - style.char_width;
                canvas.draw_text(glyph, Point::new(glyph_x, text_y), &style.text);
            }
        }
        canvas.pop_clip();
    }

    fn paint_body(&self, canvas: &mut dyn Canvas) {
        let body = self.body_rect();
        let style = &self.style;
        canvas.fill_rect(body, style.body_background);

        canvas.push_clip(body);
        canvas.push_transform(Transform2D::translate(
            body.x - self.scroll.x,
            body.y - self.scroll.y,
        ));

        let active = self.list.aggregate().is_hovered();
        let text_dy = (style.row_height - style.text.size) / 2.0;
        for ((_, row), placement) in self.list.rows().zip(&self.list.geometry().rows) {
            paint_checkbox(
                canvas,
                placement.checkbox,
                CheckState::from(row.is_selected()),
                active,
                style,
            );
            for (value, cell) in row.values().iter().zip(&placement.cells) {
                canvas.draw_text(
                    &value.display(),
                    Point::new(cell.x + 4.0, cell.y + text_dy),
                    &style.text,
                );
            }
        }

        canvas.pop_transform();
        canvas.pop_clip();
    }

    /// Scrollbar thumbs, only on axes where content overflows.
    fn paint_scrollbars(&self, canvas: &mut dyn Canvas) {
        let body = self.body_rect();
        let geometry = self.list.geometry();
        let content = geometry.content_size;
        let thickness = self.style.scrollbar_width;
        let viewport = body.size();

        if geometry.overflows_y(viewport) && content.height > 0.0 {
            let len = body.height * (body.height / content.height);
            let y = body.y + body.height * (self.scroll.y / content.height);
            canvas.fill_rect(
                Rect::new(body.right() - thickness, y, thickness, len),
                self.style.scrollbar_color,
            );
        }
        if geometry.overflows_x(viewport) && content.width > 0.0 {
            let len = body.width * (body.width / content.width);
            let x = body.x + body.width * (self.scroll.x / content.width);
            canvas.fill_rect(
                Rect::new(x, body.bottom() - thickness, len, thickness),
                self.style.scrollbar_color,
            );
        }
    }
}

impl Widget for CheckDetails {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let metrics = self.list.metrics();
        let rows = self.list.len() as f32;
        let preferred = Size::new(
            metrics.check_width + self.list.panes().total_width(),
            self.style.header_height + metrics.row.top() + metrics.row.pitch() * rows,
        );
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.relayout();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.paint_body(canvas);
        self.paint_header(canvas);
        self.paint_scrollbars(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::Resize { width, height } => {
                self.bounds = Rect::new(self.bounds.x, self.bounds.y, *width, *height);
                self.relayout();
                None
            }
            Event::MouseMove { position } => {
                self.on_move(*position);
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.on_press(*position),
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                if self.dragging.take().is_some() {
                    self.list.refresh();
                    self.clamp_scroll();
                }
                None
            }
            Event::Scroll { delta_x, delta_y } => {
                self.scroll = Point::new(self.scroll.x + delta_x, self.scroll.y + delta_y);
                self.clamp_scroll();
                None
            }
            Event::MouseLeave => {
                self.list.set_aggregate_hover(false);
                self.list.set_header_hover(None);
                None
            }
            Event::MouseDown { .. } | Event::MouseUp { .. } => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Table
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
