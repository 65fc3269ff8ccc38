// src/core/processor.rs
use anyhow::{Context as _, Result};
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::normalizer::normalize;
use crate::models::{FileFailure, FileReport, QuoteTable, RunSummary};

/// Rewrites a single file in place with the substitutions of `table`.
///
/// Writes `Processing: <path>` to `out` before reading and the replacement
/// count after writing. The file is always written back, even when nothing
/// changed.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or read
/// * The file is not valid UTF-8
/// * The file cannot be opened for writing or the write fails
/// * Progress output cannot be written to `out`
pub fn normalize_file(path: &Path, table: &QuoteTable, out: &mut impl Write) -> Result<FileReport> {
    writeln!(out, "Processing: {}", path.display())?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let (normalized, replaced) = normalize(&content, table);
    debug!(
        "{}: {} byte(s) in, {} byte(s) out",
        path.display(),
        content.len(),
        normalized.len()
    );

    fs::write(path, normalized)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    writeln!(out, "  - Replaced {replaced} smart quotes")?;

    Ok(FileReport {
        path: path.to_path_buf(),
        replaced,
    })
}

/// Normalizes every file in `paths` in order and writes the completion line.
///
/// With `keep_going` a failing file is recorded in the summary and the run
/// continues; otherwise the first failure aborts the remaining files.
///
/// # Errors
///
/// Without `keep_going`, returns the first error from [`normalize_file`].
/// A failure to write the completion line is always returned.
pub fn normalize_files(
    paths: &[PathBuf],
    table: &QuoteTable,
    keep_going: bool,
    out: &mut impl Write,
) -> Result<RunSummary> {
    let mut summary = RunSummary::new();

    for path in paths {
        match normalize_file(path, table, &mut *out) {
            Ok(report) => summary.reports.push(report),
            Err(err) if keep_going => {
                warn!("Skipping {}: {err:#}", path.display());
                summary.failures.push(FileFailure {
                    path: path.clone(),
                    error: format!("{err:#}"),
                });
            }
            Err(err) => return Err(err),
        }
    }

    writeln!(out, "Smart quotes replacement completed!")?;
    out.flush()?;
    Ok(summary)
}
