// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, resolve_settings, run, run_with_output, run_with_settings};
pub use config::{Config, Settings};
pub use crate::core::normalizer::{count_smart_quotes, normalize, replace_smart_quotes};
pub use crate::core::processor::{normalize_file, normalize_files};
pub use crate::core::scanner::{find_files, glob_directory, walk_directory};
pub use models::{FileFailure, FileReport, QuoteTable, RunSummary, TableMode};
