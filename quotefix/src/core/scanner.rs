// src/core/scanner.rs
mod utils;
mod walk;


use anyhow::{Context as _, Result, anyhow};
use glob::{MatchOptions, Pattern};
use log::info;
use std::path::{Path, PathBuf};

pub use walk::walk_directory;

/// Lists the files selected by `pattern` inside `dir`.
///
/// Without `recursive` only direct children of `dir` are considered and the
/// order is whatever `glob` yields (alphabetical). With `recursive` the whole
/// tree is walked, hidden entries and `exclude_dirs` are skipped, and the
/// pattern is matched against file names only.
///
/// # Errors
///
/// This function may return an error if:
/// * The pattern contains invalid glob syntax
/// * The directory path is not valid UTF-8
/// * A directory cannot be read during traversal
pub fn find_files(
    dir: &Path,
    pattern: &str,
    recursive: bool,
    exclude_dirs: &[&str],
) -> Result<Vec<PathBuf>> {
    let files = if recursive {
        walk_directory(dir, pattern, exclude_dirs)?
    } else {
        glob_directory(dir, pattern)?
    };

    info!(
        "Found {} file(s) matching '{}' in {}",
        files.len(),
        pattern,
        dir.display()
    );
    Ok(files)
}

/// Expands `<dir>/<pattern>` without descending into subdirectories.
///
/// A missing directory yields an empty list.
///
/// # Errors
///
/// This function may return an error if:
/// * The pattern contains invalid glob syntax
/// * The directory path is not valid UTF-8
/// * A directory cannot be read while expanding the pattern
pub fn glob_directory(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| anyhow!("Directory path is not valid UTF-8: {}", dir.display()))?;

    // The directory is literal, only the pattern carries wildcards
    let full_pattern = if dir_str.is_empty() {
        pattern.to_owned()
    } else {
        Path::new(&Pattern::escape(dir_str))
            .join(pattern)
            .to_string_lossy()
            .into_owned()
    };

    // Wildcards never match a leading dot, so hidden files stay out
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&full_pattern, options)
        .with_context(|| format!("Invalid pattern: {full_pattern}"))?
    {
        let path = entry.with_context(|| format!("Failed to expand pattern: {full_pattern}"))?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}
