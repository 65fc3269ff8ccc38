// src/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::TableMode;

pub const DEFAULT_DIRECTORY: &str = "content/services";
pub const DEFAULT_PATTERN: &str = "*.mdx";
pub const DEFAULT_EXCLUDE: &[&str] = &[".git", "node_modules"];

/// File names looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAMES: &[&str] = &["quotefix.toml", "quotefix.yml"];

/// Optional settings read from `quotefix.toml` or `quotefix.yml`.
///
/// Every key may be omitted; command line flags take precedence.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub directory: Option<PathBuf>,
    pub pattern: Option<String>,
    pub mode: Option<TableMode>,
    pub recursive: Option<bool>,
    pub exclude: Option<Vec<String>>,
    pub keep_going: Option<bool>,
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Otherwise the first of
    /// [`CONFIG_FILE_NAMES`] found in `search_dir` is used, and no file at
    /// all yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * An explicit config path does not exist
    /// * The file cannot be read
    /// * The file has an unsupported extension or invalid contents
    pub fn load(explicit: Option<&Path>, search_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Self::from_file(path);
        }

        for name in CONFIG_FILE_NAMES {
            let candidate = search_dir.join(name);
            if candidate.is_file() {
                log::info!("Using config file {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Reads a config file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The extension is not `toml`, `yml` or `yaml`
    /// * The contents do not parse
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display())),
            Some("yml" | "yaml") => Self::from_yaml(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display())),
            _ => bail!(
                "Unsupported config file format (expected .toml, .yml or .yaml): {}",
                path.display()
            ),
        }
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not a valid TOML config.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not a valid YAML config.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty YAML document means "no settings"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

/// Fully resolved settings for one run: defaults, overridden by the config
/// file, overridden by command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory: PathBuf,
    pub pattern: String,
    pub mode: TableMode,
    pub recursive: bool,
    pub exclude: Vec<String>,
    pub keep_going: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            pattern: DEFAULT_PATTERN.to_owned(),
            mode: TableMode::default(),
            recursive: false,
            exclude: DEFAULT_EXCLUDE.iter().map(|s| (*s).to_owned()).collect(),
            keep_going: false,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_config(self, config: Config) -> Self {
        Self {
            directory: config.directory.unwrap_or(self.directory),
            pattern: config.pattern.unwrap_or(self.pattern),
            mode: config.mode.unwrap_or(self.mode),
            recursive: config.recursive.unwrap_or(self.recursive),
            exclude: config.exclude.unwrap_or(self.exclude),
            keep_going: config.keep_going.unwrap_or(self.keep_going),
        }
    }

    #[must_use]
    pub fn exclude_dirs(&self) -> Vec<&str> {
        self.exclude.iter().map(String::as_str).collect()
    }
}
