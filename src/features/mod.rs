pub mod dashboard;
pub mod data_table;
pub mod kanban;
