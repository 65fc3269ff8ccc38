// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use log::LevelFilter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, Settings};
use crate::core::processor::normalize_files;
use crate::core::scanner::find_files;
use crate::models::{QuoteTable, TableMode};
use crate::utils::{print_failures, split_list};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the files to normalize (defaults to "content/services")
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Glob pattern selecting files inside the directory (defaults to "*.mdx")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Replacement table: "corrected" fixes every curly quote, "faithful"
    /// only fixes single quotes
    #[arg(short, long, value_enum)]
    pub mode: Option<TableMode>,

    /// Descend into subdirectories, matching the pattern against file names
    #[arg(short, long)]
    pub recursive: bool,

    /// Directories to skip in recursive mode (comma-separated)
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Record per-file failures and continue instead of aborting
    #[arg(short, long)]
    pub keep_going: bool,

    /// Config file (defaults to quotefix.toml or quotefix.yml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Args {
    /// Layers the command line on top of `settings`. Boolean flags can only
    /// switch a behaviour on.
    #[must_use]
    pub fn apply(&self, settings: Settings) -> Settings {
        Settings {
            directory: self.directory.clone().unwrap_or(settings.directory),
            pattern: self.pattern.clone().unwrap_or(settings.pattern),
            mode: self.mode.unwrap_or(settings.mode),
            recursive: self.recursive || settings.recursive,
            exclude: self
                .exclude
                .as_deref()
                .map_or(settings.exclude, split_list),
            keep_going: self.keep_going || settings.keep_going,
        }
    }
}

/// Resolves settings from defaults, the config file and `args`.
///
/// # Errors
///
/// This function may return an error if the config file cannot be loaded.
pub fn resolve_settings(args: &Args, search_dir: &Path) -> Result<Settings> {
    let config = Config::load(args.config.as_deref(), search_dir)?;
    Ok(args.apply(Settings::default().with_config(config)))
}

/// Runs one normalization pass with already resolved settings, writing
/// progress to standard output.
///
/// # Errors
///
/// See [`run_with_output`].
pub fn run_with_settings(settings: &Settings) -> Result<()> {
    run_with_output(settings, &mut io::stdout().lock())
}

/// Runs one normalization pass, writing progress lines to `out`.
///
/// # Errors
///
/// This function may return an error if:
/// * The pattern is invalid or the directory cannot be scanned
/// * A file fails to process and `keep_going` is off
/// * One or more files failed and `keep_going` is on
/// * Progress output cannot be written
pub fn run_with_output(settings: &Settings, out: &mut impl Write) -> Result<()> {
    log::debug!("Resolved settings: {settings:?}");

    let files = find_files(
        &settings.directory,
        &settings.pattern,
        settings.recursive,
        &settings.exclude_dirs(),
    )
    .with_context(|| format!("Failed to scan directory: {}", settings.directory.display()))?;

    let table = QuoteTable::for_mode(settings.mode);
    let summary = normalize_files(&files, &table, settings.keep_going, out)?;

    log::info!(
        "Processed {} file(s), {} smart quote(s) counted",
        summary.files_processed(),
        summary.total_replaced()
    );

    if summary.has_failures() {
        print_failures(&summary.failures);
        bail!("{} file(s) could not be processed", summary.failures.len());
    }

    Ok(())
}

/// Entry point shared by the binary and integration tests.
///
/// # Errors
///
/// See [`resolve_settings`] and [`run_with_settings`].
pub fn run(args: Args) -> Result<()> {
    let settings = resolve_settings(&args, Path::new("."))?;
    run_with_settings(&settings)
}
