pub mod api;
pub mod format;
pub mod remote_table;
