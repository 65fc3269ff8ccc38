// src/utils.rs
use crate::models::FileFailure;

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Splits a comma-separated list, dropping blank items.
#[must_use]
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn print_failures(failures: &[FileFailure]) {
    eprintln!("Failed to process {} file(s):", failures.len());
    for failure in failures {
        eprintln!("  - {}: {}", failure.path.display(), failure.error);
    }
}
