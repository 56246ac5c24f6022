//! The list container: ordered rows, sort protocol, bulk toggle and layout.

use checkdetails_core::Size;
use checkdetails_layout::{
    HeaderPanes, LayoutCache, LayoutEngine, LayoutInput, ListGeometry, RowMetrics,
};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use std::cmp::Ordering;
use tracing::{debug, trace};

use super::error::ListError;
use super::header::{ColumnHeaders, SortDirection, SortKey};
use super::row::{ListId, Row, RowId};
use super::selection::{AggregateSelection, SelectionState};

const TARGET: &str = "checkdetails::list";

/// Sizes the container needs from its style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListMetrics {
    /// Row height and inter-row padding
    pub row: RowMetrics,
    /// Width of the leading checkbox column
    pub check_width: f32,
    /// Gap between header panes
    pub sash_width: f32,
    /// Estimated advance of one character of header text
    pub char_width: f32,
    /// Horizontal padding inside a header pane
    pub header_padding: f32,
}

impl Default for ListMetrics {
    fn default() -> Self {
        Self {
            row: RowMetrics::default(),
            check_width: 24.0,
            sash_width: 2.0,
            char_width: 8.0,
            header_padding: 16.0,
        }
    }
}

impl ListMetrics {
    /// Width needed to show `title` plus the sort glyph.
    #[must_use]
    pub fn pane_width(&self, title: &str) -> f32 {
        let chars = title.chars().count() + 1;
        (chars as f32).mul_add(self.char_width, self.header_padding)
    }
}

/// Ordered rows with sort state, aggregate selection and cached geometry.
///
/// All mutation goes through the list so the aggregate indicator always
/// matches the row flags.
#[derive(Debug)]
pub struct CheckList {
    id: ListId,
    headers: ColumnHeaders,
    rows: SlotMap<RowId, Row>,
    order: Vec<RowId>,
    aggregate: AggregateSelection,
    panes: HeaderPanes,
    engine: LayoutEngine,
    cache: LayoutCache,
    metrics: ListMetrics,
    viewport: Size,
}

impl CheckList {
    /// Create an empty list with default metrics.
    #[must_use]
    pub fn new<T: Into<String>>(titles: impl IntoIterator<Item = T>) -> Self {
        Self::with_metrics(titles, ListMetrics::default())
    }

    /// Create an empty list with explicit metrics.
    #[must_use]
    pub fn with_metrics<T: Into<String>>(
        titles: impl IntoIterator<Item = T>,
        metrics: ListMetrics,
    ) -> Self {
        let headers = ColumnHeaders::new(titles);
        let panes = HeaderPanes::new(
            headers.titles().iter().map(|t| metrics.pane_width(t)),
            metrics.sash_width,
        );
        Self {
            id: ListId::next(),
            headers,
            rows: SlotMap::with_key(),
            order: Vec::new(),
            aggregate: AggregateSelection::new(),
            panes,
            engine: LayoutEngine::new(metrics.row),
            cache: LayoutCache::new(),
            metrics,
            viewport: Size::ZERO,
        }
    }

    /// Identity rows are bound to.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    fn check_insertable(&self, row: &Row) -> Result<(), ListError> {
        if row.is_attached() {
            return Err(ListError::DuplicateAttachment);
        }
        let expected = self.headers.len();
        let found = row.values().len();
        if found != expected {
            return Err(ListError::ArityMismatch { expected, found });
        }
        Ok(())
    }

    fn insert(&mut self, mut row: Row) -> RowId {
        row.bind(self.id);
        let id = self.rows.insert(row);
        self.order.push(id);
        trace!(target: TARGET, ?id, len = self.order.len(), "attached row");
        id
    }

    fn update_aggregate(&mut self) -> SelectionState {
        let rows = &self.rows;
        self.aggregate
            .update(self.order.iter().filter_map(|id| rows.get(*id)).map(Row::is_selected))
    }

    /// Append a row and bind it to this list. Layout is not refreshed.
    pub fn add_item(&mut self, row: Row) -> Result<RowId, ListError> {
        self.check_insertable(&row)?;
        let id = self.insert(row);
        self.update_aggregate();
        Ok(id)
    }

    /// Append several rows. Either all are added or none are.
    pub fn add_items(
        &mut self,
        rows: impl IntoIterator<Item = Row>,
    ) -> Result<Vec<RowId>, ListError> {
        let rows: Vec<Row> = rows.into_iter().collect();
        for row in &rows {
            self.check_insertable(row)?;
        }
        let ids = rows.into_iter().map(|row| self.insert(row)).collect();
        self.update_aggregate();
        Ok(ids)
    }

    /// Remove and drop a row. Layout is not refreshed.
    pub fn remove_item(&mut self, id: RowId) -> Result<(), ListError> {
        self.rows.remove(id).ok_or(ListError::NotFound)?;
        self.order.retain(|r| *r != id);
        self.update_aggregate();
        trace!(target: TARGET, ?id, len = self.order.len(), "removed row");
        Ok(())
    }

    /// Header click on `column`.
    ///
    /// Clicking the active column flips direction; any other column sorts
    /// ascending. Rows are reordered stably and the layout is refreshed.
    /// When the column's values cannot be ordered, neither the rows nor the
    /// sort state change.
    pub fn sort(&mut self, column: usize) -> Result<SortKey, ListError> {
        let columns = self.headers.len();
        if column >= columns {
            return Err(ListError::ColumnOutOfRange { column, columns });
        }

        let key = self.headers.next_key(column);
        let rows = &self.rows;
        let values: Vec<_> = self
            .order
            .iter()
            .filter_map(|id| rows.get(*id).and_then(|r| r.value(column)))
            .collect();
        let comparable = values.iter().all(|v| v.try_cmp(v).is_some())
            && values.windows(2).all(|w| w[0].try_cmp(w[1]).is_some());
        if !comparable {
            return Err(ListError::IncomparableSort { column });
        }

        self.order.sort_by(|a, b| {
            let cmp = |x: &RowId, y: &RowId| {
                let vx = rows.get(*x).and_then(|r| r.value(column));
                let vy = rows.get(*y).and_then(|r| r.value(column));
                match (vx, vy) {
                    (Some(vx), Some(vy)) => vx.try_cmp(vy).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                }
            };
            match key.direction {
                SortDirection::Ascending => cmp(a, b),
                SortDirection::Descending => cmp(b, a),
            }
        });
        self.headers.set_sort(key);
        debug!(
            target: TARGET,
            column,
            direction = ?key.direction,
            rows = self.order.len(),
            "sorted"
        );

        self.refresh();
        Ok(key)
    }

    /// Recompute header geometry and row placements.
    pub fn refresh(&mut self) -> &ListGeometry {
        let input = LayoutInput {
            header: self.panes.segments(),
            check_width: self.metrics.check_width,
            row_count: self.order.len(),
            viewport: self.viewport,
        };
        self.cache.get_or_compute(&self.engine, input)
    }

    /// Click on the aggregate control. Every row takes the same value in a
    /// single pass; returns that value.
    pub fn toggle_all(&mut self) -> bool {
        let target = self.aggregate.toggle_target();
        for row in self.rows.values_mut() {
            row.set_selected(target);
        }
        let state = self.update_aggregate();
        debug!(target: TARGET, target, ?state, rows = self.order.len(), "toggled all");
        target
    }

    /// Set one row's flag.
    pub fn set_selected(&mut self, id: RowId, selected: bool) -> Result<SelectionState, ListError> {
        self.rows
            .get_mut(id)
            .ok_or(ListError::NotFound)?
            .set_selected(selected);
        Ok(self.update_aggregate())
    }

    /// Flip one row's flag, returning the new value.
    pub fn toggle_row(&mut self, id: RowId) -> Result<bool, ListError> {
        let selected = !self.row(id).ok_or(ListError::NotFound)?.is_selected();
        self.set_selected(id, selected)?;
        trace!(target: TARGET, ?id, selected, "toggled row");
        Ok(selected)
    }

    /// New viewport; refreshes.
    pub fn resize(&mut self, viewport: Size) -> &ListGeometry {
        self.viewport = viewport;
        self.refresh()
    }

    /// Set a column pane's width (clamped at its minimum); refreshes.
    pub fn resize_column(&mut self, column: usize, width: f32) -> Result<f32, ListError> {
        let columns = self.panes.len();
        let applied = self
            .panes
            .set_width(column, width)
            .ok_or(ListError::ColumnOutOfRange { column, columns })?;
        self.refresh();
        Ok(applied)
    }

    /// Move header divider `index` to `x`; refreshes when a width changed.
    pub fn drag_divider(&mut self, index: usize, x: f32) -> bool {
        let changed = self.panes.drag_divider(index, x);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Pointer entered or left the aggregate control.
    pub fn set_aggregate_hover(&mut self, hovered: bool) -> bool {
        self.aggregate.set_hovered(hovered)
    }

    /// Pointer moved over a header, or off all of them.
    pub fn set_header_hover(&mut self, column: Option<usize>) -> bool {
        self.headers.set_hovered(column)
    }

    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &Row)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(*id).map(|row| (*id, row)))
    }

    /// Row ids in display order.
    #[must_use]
    pub fn row_ids(&self) -> &[RowId] {
        &self.order
    }

    /// Look up a row.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id)
    }

    /// Selection flags in display order.
    #[must_use]
    pub fn selected_flags(&self) -> Vec<bool> {
        self.rows().map(|(_, r)| r.is_selected()).collect()
    }

    /// Active sort column and direction.
    #[must_use]
    pub const fn sort_key(&self) -> Option<SortKey> {
        self.headers.sort_key()
    }

    /// Aggregate indicator.
    #[must_use]
    pub const fn selection_state(&self) -> SelectionState {
        self.aggregate.state()
    }

    /// Aggregate control state.
    #[must_use]
    pub const fn aggregate(&self) -> &AggregateSelection {
        &self.aggregate
    }

    /// Geometry from the last refresh.
    #[must_use]
    pub fn geometry(&self) -> &ListGeometry {
        self.cache.current()
    }

    /// Column headers.
    #[must_use]
    pub const fn headers(&self) -> &ColumnHeaders {
        &self.headers
    }

    /// Header panes.
    #[must_use]
    pub const fn panes(&self) -> &HeaderPanes {
        &self.panes
    }

    /// Metrics in use.
    #[must_use]
    pub const fn metrics(&self) -> &ListMetrics {
        &self.metrics
    }

    /// Current viewport.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the list has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CellValue;

    fn list() -> CheckList {
        CheckList::new(["Name", "Author", "Description"])
    }

    fn names(list: &CheckList) -> Vec<String> {
        list.rows()
            .map(|(_, r)| r.values()[0].display())
            .collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let l = list();
        assert!(l.is_empty());
        assert_eq!(l.selection_state(), SelectionState::None);
        assert_eq!(l.sort_key(), None);
        assert!(l.geometry().rows.is_empty());
    }

    #[test]
    fn test_add_item_binds_and_updates_aggregate() {
        let mut l = list();
        let id = l.add_item(Row::new(["a", "b", "c"]).selected(true)).unwrap();
        assert_eq!(l.row(id).map(Row::owner), Some(Some(l.id())));
        assert_eq!(l.selection_state(), SelectionState::All);

        l.add_item(Row::new(["d", "e", "f"])).unwrap();
        assert_eq!(l.selection_state(), SelectionState::Mixed);
    }

    #[test]
    fn test_add_item_does_not_refresh() {
        let mut l = list();
        l.refresh();
        l.add_item(Row::new(["a", "b", "c"])).unwrap();
        assert!(l.geometry().rows.is_empty());
        assert_eq!(l.refresh().rows.len(), 1);
    }

    #[test]
    fn test_duplicate_attachment_leaves_list_unchanged() {
        let mut l = list();
        let id = l.add_item(Row::new(["a", "b", "c"])).unwrap();
        let bound = l.row(id).cloned().unwrap();

        assert_eq!(l.add_item(bound.clone()), Err(ListError::DuplicateAttachment));
        assert_eq!(l.len(), 1);

        let mut other = list();
        assert_eq!(other.add_item(bound), Err(ListError::DuplicateAttachment));
        assert!(other.is_empty());
    }

    #[test]
    fn test_arity_mismatch() {
        let mut l = list();
        assert_eq!(
            l.add_item(Row::new(["only one"])),
            Err(ListError::ArityMismatch {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_add_items_is_all_or_nothing() {
        let mut l = list();
        let result = l.add_items([Row::new(["a", "b", "c"]), Row::new(["x"])]);
        assert!(result.is_err());
        assert!(l.is_empty());

        let ids = l
            .add_items([Row::new(["a", "b", "c"]), Row::new(["d", "e", "f"])])
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(l.row_ids(), ids.as_slice());
    }

    #[test]
    fn test_remove_item() {
        let mut l = list();
        let a = l.add_item(Row::new(["a", "b", "c"]).selected(true)).unwrap();
        let b = l.add_item(Row::new(["d", "e", "f"])).unwrap();
        assert_eq!(l.selection_state(), SelectionState::Mixed);

        l.remove_item(b).unwrap();
        assert_eq!(l.selection_state(), SelectionState::All);
        assert_eq!(l.remove_item(b), Err(ListError::NotFound));
        assert_eq!(l.selected_flags(), vec![true]);
        assert_eq!(l.row_ids(), &[a]);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let mut l = CheckList::new(["n"]);
        l.add_items([3, 1, 2].map(|n| Row::new([n]))).unwrap();

        let key = l.sort(0).unwrap();
        assert_eq!(key.direction, SortDirection::Ascending);
        assert_eq!(names(&l), vec!["1", "2", "3"]);

        let key = l.sort(0).unwrap();
        assert_eq!(key.direction, SortDirection::Descending);
        assert_eq!(names(&l), vec!["3", "2", "1"]);
        assert_eq!(l.headers().glyph(0), "△");
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let mut l = CheckList::new(["name", "n"]);
        l.add_items([
            Row::new([CellValue::from("A"), CellValue::from(1)]),
            Row::new([CellValue::from("B"), CellValue::from(1)]),
            Row::new([CellValue::from("C"), CellValue::from(2)]),
        ])
        .unwrap();

        l.sort(1).unwrap();
        assert_eq!(names(&l), vec!["A", "B", "C"]);
        l.sort(1).unwrap();
        assert_eq!(names(&l), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_other_column_resets_ascending() {
        let mut l = list();
        l.add_item(Row::new(["a", "b", "c"])).unwrap();
        l.sort(0).unwrap();
        l.sort(0).unwrap();
        let key = l.sort(1).unwrap();
        assert_eq!(
            key,
            SortKey {
                column: 1,
                direction: SortDirection::Ascending
            }
        );
        assert_eq!(l.headers().glyph(0), "");
    }

    #[test]
    fn test_sort_empty_records_state() {
        let mut l = list();
        assert!(l.sort(2).is_ok());
        assert_eq!(l.sort_key().map(|k| k.column), Some(2));
    }

    #[test]
    fn test_sort_incomparable_changes_nothing() {
        let mut l = CheckList::new(["v"]);
        l.add_items([Row::new([CellValue::from("x")]), Row::new([CellValue::from(1)])])
            .unwrap();
        let before = l.row_ids().to_vec();

        assert_eq!(l.sort(0), Err(ListError::IncomparableSort { column: 0 }));
        assert_eq!(l.row_ids(), before.as_slice());
        assert_eq!(l.sort_key(), None);
    }

    #[test]
    fn test_sort_column_out_of_range() {
        let mut l = list();
        assert_eq!(
            l.sort(3),
            Err(ListError::ColumnOutOfRange {
                column: 3,
                columns: 3
            })
        );
    }

    #[test]
    fn test_sort_refreshes_layout() {
        let mut l = list();
        l.add_item(Row::new(["a", "b", "c"])).unwrap();
        l.sort(0).unwrap();
        assert_eq!(l.geometry().rows.len(), 1);
    }

    #[test]
    fn test_toggle_all_cycle() {
        let mut l = list();
        l.add_items([Row::new(["a", "b", "c"]), Row::new(["d", "e", "f"])])
            .unwrap();
        assert!(l.toggle_all());
        assert_eq!(l.selection_state(), SelectionState::All);
        assert!(!l.toggle_all());
        assert_eq!(l.selection_state(), SelectionState::None);
    }

    #[test]
    fn test_toggle_all_from_mixed_selects_all() {
        let mut l = list();
        let ids = l
            .add_items([Row::new(["a", "b", "c"]), Row::new(["d", "e", "f"])])
            .unwrap();
        l.set_selected(ids[0], true).unwrap();
        assert_eq!(l.selection_state(), SelectionState::Mixed);
        assert!(l.toggle_all());
        assert_eq!(l.selected_flags(), vec![true, true]);
    }

    #[test]
    fn test_toggle_all_on_empty_list() {
        let mut l = list();
        assert!(l.toggle_all());
        assert_eq!(l.selection_state(), SelectionState::None);
    }

    #[test]
    fn test_toggle_row() {
        let mut l = list();
        let id = l.add_item(Row::new(["a", "b", "c"])).unwrap();
        assert_eq!(l.toggle_row(id), Ok(true));
        assert_eq!(l.selection_state(), SelectionState::All);
        assert_eq!(l.toggle_row(id), Ok(false));

        l.remove_item(id).unwrap();
        assert_eq!(l.toggle_row(id), Err(ListError::NotFound));
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut l = list();
        l.add_items([Row::new(["a", "b", "c"]), Row::new(["d", "e", "f"])])
            .unwrap();
        l.resize(Size::new(300.0, 200.0));
        let first = l.refresh().clone();
        let second = l.refresh().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resize_column_clamps_and_refreshes() {
        let mut l = list();
        l.add_item(Row::new(["a", "b", "c"])).unwrap();
        let min = l.panes().min_width(0).unwrap();
        assert_eq!(l.resize_column(0, 1.0), Ok(min));
        assert_eq!(l.resize_column(0, min + 50.0), Ok(min + 50.0));
        assert_eq!(l.geometry().rows[0].cells[0].width, min + 50.0);
        assert!(l.resize_column(5, 10.0).is_err());
    }

    #[test]
    fn test_pane_width_fits_title_and_glyph() {
        let m = ListMetrics::default();
        assert_eq!(m.pane_width("Name"), 5.0 * 8.0 + 16.0);
        assert_eq!(m.pane_width(""), 8.0 + 16.0);
    }

    #[test]
    fn test_list_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CheckList>();
    }
}
