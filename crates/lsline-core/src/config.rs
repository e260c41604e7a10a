//! Configuration types for lsline.
//!
//! [`Config::load`] reads `~/.config/lsline/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::parser::Convention;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[parser]
convention = "enterprise-unix"

[output]
format        = "table"
date_format   = "%Y-%m-%d"
minute_format = "%Y-%m-%d %H:%M"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/lsline/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[parser]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_convention")]
    pub convention: Convention,
    /// Fixed "today" for year inference. Unset means the local clock.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

fn default_convention() -> Convention { Convention::EnterpriseUnix }

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            convention: default_convention(),
            reference_date: None,
        }
    }
}

/// How parsed records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_minute_format")]
    pub minute_format: String,
}

fn default_format() -> OutputFormat { OutputFormat::Table }
fn default_date_format() -> String { "%Y-%m-%d".to_string() }
fn default_minute_format() -> String { "%Y-%m-%d %H:%M".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            date_format: default_date_format(),
            minute_format: default_minute_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/lsline/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Layer the file at `path` (if present) over the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("lsline")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
