pub mod column;
pub mod components;
pub mod skeleton;
pub mod state;

pub use column::{CellValue, ColumnDef, TableRow};
pub use components::EnhancedDataTable;
pub use state::{
    BodyModel, ColumnSort, Ownership, PaginationState, SortDirection, SortState, TableController, TableOptions,
    PAGE_SIZE_OPTIONS,
};
