// src/persist/mod.rs

pub mod run_log;
pub mod table;

pub use run_log::{append_log, format_log_line};
pub use table::{read_csv, write_csv, CSV_HEADER};
