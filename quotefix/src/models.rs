// src/models.rs
mod file_report;
mod quote_table;
mod run_summary;

pub use file_report::{FileFailure, FileReport};
pub use quote_table::{
    LEFT_DOUBLE_QUOTE, LEFT_SINGLE_QUOTE, QuoteTable, RIGHT_DOUBLE_QUOTE, RIGHT_SINGLE_QUOTE,
    TableMode,
};
pub use run_summary::RunSummary;
