pub mod enhanced_data_table;

pub use enhanced_data_table::EnhancedDataTable;
