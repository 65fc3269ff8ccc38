// src/core/scanner/walk.rs
use anyhow::{Context as _, Result, bail};
use glob::Pattern;
use log::{debug, info};
use std::path::{self, Path, PathBuf};
use walkdir::WalkDir;

use crate::core::scanner::utils::should_exclude;

/// Walks `dir` and its subdirectories, returning every file whose name
/// matches `pattern`, sorted by path.
///
/// The pattern is matched against file names only, so it may not contain a
/// path separator.
///
/// # Errors
///
/// This function may return an error if:
/// * The pattern contains a path separator
/// * The pattern contains invalid glob syntax
/// * A directory cannot be read during traversal
pub fn walk_directory(dir: &Path, pattern: &str, exclude_dirs: &[&str]) -> Result<Vec<PathBuf>> {
    if pattern.contains('/') || pattern.contains(path::MAIN_SEPARATOR) {
        bail!(
            "Recursive mode matches file names only, pattern must not contain a path separator: {pattern}"
        );
    }

    let matcher =
        Pattern::new(pattern).with_context(|| format!("Invalid pattern: {pattern}"))?;

    if !dir.exists() {
        info!("Directory {} does not exist, nothing to do", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, exclude_dirs))
    {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.matches(name))
        {
            debug!("Matched {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
