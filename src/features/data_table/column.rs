use std::cmp::Ordering;
use std::sync::Arc;

use chrono::NaiveDate;
use leptos::prelude::*;

/// A row the table can render. The key must be stable across re-renders.
pub trait TableRow: Clone + Send + Sync + 'static {
    fn row_key(&self) -> String;
}

/// Value a column reads from a row; drives default rendering and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(date) => date.format("%m/%d/%Y").to_string(),
        }
    }

    /// Total order used by client-side sorting. Empty values sort first,
    /// text compares case-insensitively.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Date(a), Date(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Number(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Text(_) => 3,
        }
    }
}

impl From<Option<NaiveDate>> for CellValue {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map(CellValue::Date).unwrap_or(CellValue::Empty)
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map(CellValue::text).unwrap_or(CellValue::Empty)
    }
}

pub type Accessor<Row> = Arc<dyn Fn(&Row) -> CellValue + Send + Sync>;
pub type CellRenderer<Row> = Arc<dyn Fn(&Row) -> AnyView + Send + Sync>;

/// How one field of a row becomes a header/cell pair.
pub struct ColumnDef<Row> {
    pub id: String,
    pub header: String,
    pub accessor: Accessor<Row>,
    pub cell: Option<CellRenderer<Row>>,
    pub sortable: bool,
}

impl<Row> Clone for ColumnDef<Row> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
            cell: self.cell.clone(),
            sortable: self.sortable,
        }
    }
}

impl<Row: 'static> ColumnDef<Row> {
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&Row) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Arc::new(accessor),
            cell: None,
            sortable: true,
        }
    }

    pub fn cell(mut self, render: impl Fn(&Row) -> AnyView + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(render));
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn value(&self, row: &Row) -> CellValue {
        (self.accessor)(row)
    }

    pub fn render(&self, row: &Row) -> AnyView {
        match &self.cell {
            Some(render) => render(row),
            None => self.value(row).display().into_any(),
        }
    }
}
