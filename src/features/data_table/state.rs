use super::column::{ColumnDef, TableRow};

/// Page sizes offered in the footer menu.
pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 30, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub column_id: String,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// At most one active sort key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState(Option<ColumnSort>);

impl SortState {
    pub fn unsorted() -> Self {
        Self(None)
    }

    pub fn active(&self) -> Option<&ColumnSort> {
        self.0.as_ref()
    }

    pub fn direction_for(&self, column_id: &str) -> Option<SortDirection> {
        self.0
            .as_ref()
            .filter(|sort| sort.column_id == column_id)
            .map(|sort| sort.direction)
    }

    /// Next state after a header click: unsorted -> asc -> desc -> unsorted.
    /// Clicking another column replaces the active key.
    pub fn toggled(&self, column_id: &str) -> SortState {
        match self.direction_for(column_id) {
            None => SortState(Some(ColumnSort::asc(column_id))),
            Some(SortDirection::Asc) => SortState(Some(ColumnSort::desc(column_id))),
            Some(SortDirection::Desc) => SortState(None),
        }
    }

    /// Header indicator; `None` for columns that cannot be sorted.
    pub fn indicator(&self, column_id: &str, sortable: bool) -> Option<&'static str> {
        if !sortable {
            return None;
        }
        Some(match self.direction_for(column_id) {
            Some(SortDirection::Asc) => "↑",
            Some(SortDirection::Desc) => "↓",
            None => "⇅",
        })
    }
}

impl From<ColumnSort> for SortState {
    fn from(sort: ColumnSort) -> Self {
        SortState(Some(sort))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(5)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size)
    }

    /// Row range of the current page, clamped to `row_count`. Out-of-range
    /// pages yield an empty range.
    pub fn slice_range(&self, row_count: usize) -> std::ops::Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(row_count);
        let end = start.saturating_add(self.page_size).min(row_count);
        start..end
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, page_count: usize) -> bool {
        self.page_index + 1 < page_count
    }

    pub fn previous(&self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
            ..*self
        }
    }

    pub fn next(&self) -> Self {
        Self {
            page_index: self.page_index + 1,
            ..*self
        }
    }

    /// Keeps the current top row on screen: the new page index is the page
    /// that contains it under the new size.
    pub fn with_page_size(&self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let top_row = self.page_index * self.page_size;
        Self {
            page_index: top_row / page_size,
            page_size,
        }
    }

    /// 1-based "Showing X to Y of Z" bounds.
    pub fn showing(&self, total: usize) -> (usize, usize) {
        if total == 0 {
            return (0, 0);
        }
        let to = ((self.page_index + 1) * self.page_size).min(total);
        let from = (self.page_index * self.page_size + 1).min(to);
        (from, to)
    }
}

/// Who holds the authoritative value of a piece of table state.
#[derive(Debug, Clone, PartialEq)]
pub enum Ownership<T> {
    Internal(T),
    External(T),
}

impl<T: Clone> Ownership<T> {
    /// A supplied external value, or manual mode, hands authority to the caller.
    pub fn resolve(external: Option<T>, manual: bool, initial: T) -> Self {
        match external {
            Some(value) => Ownership::External(value),
            None if manual => Ownership::External(initial),
            None => Ownership::Internal(initial),
        }
    }

    pub fn current(&self) -> &T {
        match self {
            Ownership::Internal(value) | Ownership::External(value) => value,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Ownership::External(_))
    }

    /// Applies a user-driven change. Internal state takes it immediately;
    /// external state stays as-is until the caller feeds a new value back.
    /// The proposal is always returned so it can be reported.
    pub fn propose(&mut self, next: T) -> T {
        if let Ownership::Internal(value) = self {
            *value = next.clone();
        }
        next
    }

    /// Mirrors a new value from the caller. Ignored for internal state.
    pub fn sync_external(&mut self, value: T) {
        if let Ownership::External(current) = self {
            *current = value;
        }
    }
}

/// Construction-time options of the table.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub page_size: usize,
    pub manual_pagination: bool,
    pub manual_sorting: bool,
    pub sorting: Option<SortState>,
    pub pagination: Option<PaginationState>,
}

/// State machine behind the data table, independent of rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TableController {
    sorting: Ownership<SortState>,
    pagination: Ownership<PaginationState>,
    manual_sorting: bool,
    manual_pagination: bool,
}

impl TableController {
    pub fn new(options: TableOptions) -> Self {
        Self {
            sorting: Ownership::resolve(options.sorting, options.manual_sorting, SortState::default()),
            pagination: Ownership::resolve(
                options.pagination,
                options.manual_pagination,
                PaginationState::new(options.page_size),
            ),
            manual_sorting: options.manual_sorting,
            manual_pagination: options.manual_pagination,
        }
    }

    pub fn sorting(&self) -> &SortState {
        self.sorting.current()
    }

    pub fn pagination(&self) -> PaginationState {
        *self.pagination.current()
    }

    pub fn sorting_ownership(&self) -> &Ownership<SortState> {
        &self.sorting
    }

    pub fn pagination_ownership(&self) -> &Ownership<PaginationState> {
        &self.pagination
    }

    pub fn sync_sorting(&mut self, sorting: SortState) {
        self.sorting.sync_external(sorting);
    }

    pub fn sync_pagination(&mut self, pagination: PaginationState) {
        self.pagination.sync_external(pagination);
    }

    /// Header click. Returns the proposed sort state, or `None` when the
    /// column is not sortable.
    pub fn click_header(&mut self, column_id: &str, sortable: bool) -> Option<SortState> {
        if !sortable {
            return None;
        }
        let next = self.sorting.current().toggled(column_id);
        Some(self.sorting.propose(next))
    }

    pub fn previous_page(&mut self) -> Option<PaginationState> {
        let current = self.pagination();
        current
            .can_previous()
            .then(|| self.pagination.propose(current.previous()))
    }

    pub fn next_page(&mut self, page_count: usize) -> Option<PaginationState> {
        let current = self.pagination();
        current
            .can_next(page_count)
            .then(|| self.pagination.propose(current.next()))
    }

    pub fn set_page_size(&mut self, page_size: usize) -> PaginationState {
        let next = self.pagination().with_page_size(page_size);
        self.pagination.propose(next)
    }

    /// Page count: the caller's in manual mode, derived from the data otherwise.
    pub fn page_count(&self, row_count: usize, external_page_count: Option<usize>) -> usize {
        if self.manual_pagination {
            external_page_count.unwrap_or_else(|| self.pagination().page_count(row_count))
        } else {
            self.pagination().page_count(row_count)
        }
    }

    /// Total used by the "Showing X to Y of Z" label.
    pub fn display_total(&self, row_count: usize, total_count: usize) -> usize {
        if self.manual_pagination {
            total_count
        } else {
            row_count
        }
    }

    pub fn body<Row: TableRow>(&self, data: &[Row], columns: &[ColumnDef<Row>], loading: bool) -> BodyModel<Row> {
        if loading {
            return BodyModel::Skeleton(self.pagination().page_size);
        }
        let rows = self.row_model(data, columns);
        if rows.is_empty() {
            BodyModel::Empty
        } else {
            BodyModel::Rows(rows)
        }
    }

    /// Rows to render: sorted unless sorting is manual, sliced unless
    /// pagination is manual.
    pub fn row_model<Row: TableRow>(&self, data: &[Row], columns: &[ColumnDef<Row>]) -> Vec<Row> {
        let mut rows = data.to_vec();
        if !self.manual_sorting {
            sort_rows(&mut rows, columns, self.sorting());
        }
        if self.manual_pagination {
            rows
        } else {
            let range = self.pagination().slice_range(rows.len());
            rows.drain(range).collect()
        }
    }
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyModel<Row> {
    /// Placeholder rows, one per slot of the current page.
    Skeleton(usize),
    /// A single "No results." row.
    Empty,
    Rows(Vec<Row>),
}

/// Stable single-key sort by the active column's accessor value.
pub fn sort_rows<Row: TableRow>(rows: &mut [Row], columns: &[ColumnDef<Row>], sorting: &SortState) {
    let Some(sort) = sorting.active() else {
        return;
    };
    let Some(column) = columns.iter().find(|c| c.id == sort.column_id) else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = column.value(a).compare(&column.value(b));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::data_table::column::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    impl TableRow for Item {
        fn row_key(&self) -> String {
            self.id.to_string()
        }
    }

    fn items(n: u32) -> Vec<Item> {
        const NAMES: [&str; 4] = ["delta", "alpha", "charlie", "bravo"];
        (0..n)
            .map(|id| Item {
                id,
                name: NAMES[id as usize % NAMES.len()],
            })
            .collect()
    }

    fn columns() -> Vec<ColumnDef<Item>> {
        vec![
            ColumnDef::new("name", "Name", |item: &Item| CellValue::text(item.name)),
            ColumnDef::new("id", "Id", |item: &Item| CellValue::Number(item.id as f64)).sortable(false),
        ]
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let state = SortState::default();
        let asc = state.toggled("name");
        assert_eq!(asc.direction_for("name"), Some(SortDirection::Asc));
        let desc = asc.toggled("name");
        assert_eq!(desc.direction_for("name"), Some(SortDirection::Desc));
        assert_eq!(desc.toggled("name"), SortState::unsorted());
    }

    #[test]
    fn clicking_another_column_replaces_the_key() {
        let state = SortState::from(ColumnSort::desc("name")).toggled("title");
        assert_eq!(state.active(), Some(&ColumnSort::asc("title")));
        assert_eq!(state.direction_for("name"), None);
    }

    #[test]
    fn indicators() {
        let state = SortState::from(ColumnSort::asc("name"));
        assert_eq!(state.indicator("name", true), Some("↑"));
        assert_eq!(state.indicator("other", true), Some("⇅"));
        assert_eq!(state.indicator("name", false), None);
        assert_eq!(SortState::from(ColumnSort::desc("name")).indicator("name", true), Some("↓"));
    }

    #[test]
    fn unsortable_header_click_is_ignored() {
        let mut table = TableController::new(TableOptions { page_size: 5, ..Default::default() });
        assert_eq!(table.click_header("id", false), None);
        assert_eq!(table.sorting(), &SortState::unsorted());
    }

    #[test]
    fn internal_sorting_reorders_rows() {
        let mut table = TableController::new(TableOptions { page_size: 10, ..Default::default() });
        table.click_header("name", true);
        let names: Vec<_> = table.row_model(&items(4), &columns()).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie", "delta"]);

        table.click_header("name", true);
        let names: Vec<_> = table.row_model(&items(4), &columns()).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["delta", "charlie", "bravo", "alpha"]);
    }

    #[test]
    fn external_sorting_only_proposes() {
        let mut table = TableController::new(TableOptions {
            page_size: 5,
            sorting: Some(SortState::unsorted()),
            ..Default::default()
        });
        let proposal = table.click_header("name", true);
        assert_eq!(proposal, Some(SortState::from(ColumnSort::asc("name"))));
        assert_eq!(table.sorting(), &SortState::unsorted());

        table.sync_sorting(proposal.unwrap());
        assert_eq!(table.sorting().direction_for("name"), Some(SortDirection::Asc));
    }

    #[test]
    fn manual_sorting_without_value_is_external() {
        let table = TableController::new(TableOptions { page_size: 5, manual_sorting: true, ..Default::default() });
        assert!(table.sorting_ownership().is_external());
    }

    #[test]
    fn manual_sorting_leaves_row_order_alone() {
        let table = TableController::new(TableOptions {
            page_size: 10,
            manual_sorting: true,
            sorting: Some(SortState::from(ColumnSort::asc("name"))),
            ..Default::default()
        });
        let ids: Vec<_> = table.row_model(&items(4), &columns()).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn slices_current_page() {
        let mut table = TableController::new(TableOptions { page_size: 5, ..Default::default() });
        let data = items(12);
        assert_eq!(table.page_count(data.len(), None), 3);
        table.next_page(3);
        table.next_page(3);
        let ids: Vec<_> = table.row_model(&data, &columns()).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10, 11]);
        assert_eq!(table.next_page(3), None);
    }

    #[test]
    fn out_of_range_page_renders_nothing() {
        let pagination = PaginationState { page_index: 7, page_size: 5 };
        assert!(pagination.slice_range(12).is_empty());
    }

    #[test]
    fn manual_pagination_renders_all_rows_and_uses_caller_page_count() {
        let mut table = TableController::new(TableOptions {
            page_size: 5,
            manual_pagination: true,
            ..Default::default()
        });
        let data = items(5);
        assert_eq!(table.row_model(&data, &columns()).len(), 5);
        assert_eq!(table.page_count(data.len(), Some(9)), 9);
        assert_eq!(table.display_total(data.len(), 42), 42);

        let proposal = table.next_page(9);
        assert_eq!(proposal, Some(PaginationState { page_index: 1, page_size: 5 }));
        assert_eq!(table.pagination().page_index, 0);
    }

    #[test]
    fn page_size_change_keeps_top_row_visible() {
        let pagination = PaginationState { page_index: 3, page_size: 5 };
        assert_eq!(pagination.with_page_size(10), PaginationState { page_index: 1, page_size: 10 });
        assert_eq!(pagination.with_page_size(100).page_index, 0);
        assert_eq!(PaginationState { page_index: 1, page_size: 10 }.with_page_size(5).page_index, 2);
    }

    #[test]
    fn showing_label_bounds() {
        let pagination = PaginationState { page_index: 2, page_size: 5 };
        assert_eq!(pagination.showing(12), (11, 12));
        assert_eq!(PaginationState::new(5).showing(0), (0, 0));
    }

    #[test]
    fn showing_never_starts_past_the_end() {
        let stale = PaginationState { page_index: 7, page_size: 5 };
        assert_eq!(stale.showing(12), (12, 12));
    }
}
