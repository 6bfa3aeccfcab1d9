//! Configuration management for the document validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (`--config` or the user config directory)
//!
//! Command-line flags win over the config file, which wins over defaults.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::DocumentKind;
use crate::parser::ExtractMode;

/// Log level used when neither flag nor config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable sentence
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Command-line arguments for the validator
#[derive(Debug, Parser)]
#[command(name = "brdoc")]
#[command(about = "Validate Brazilian CPF and CNPJ numbers")]
#[command(version)]
pub struct Args {
    /// CPF or CNPJ, digits with optional punctuation (e.g. 111.444.777-35)
    pub document: String,

    /// Force the document kind instead of inferring it from the digit count
    #[arg(long, help = "Document kind to validate as (cpf, cnpj)")]
    pub kind: Option<DocumentKind>,

    /// Reject characters other than digits and mask punctuation
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Discard non-digit characters even if the config file enables strict mode
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to read instead of the default location
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub strict: Option<bool>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw document string as given on the command line
    pub document: String,
    /// Kind forced via `--kind`
    pub kind: Option<DocumentKind>,
    pub mode: ExtractMode,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file that was actually loaded, if any (logged by the binary)
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = match &args.config {
            Some(path) => Some(path.clone()),
            None => default_config_path().filter(|path| path.is_file()),
        };

        let file = match &config_path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(args, file, config_path))
    }

    /// Apply flag > file > default precedence
    pub fn merge(args: Args, file: FileConfig, config_path: Option<PathBuf>) -> Self {
        let strict = if args.strict {
            true
        } else if args.no_strict {
            false
        } else {
            file.strict.unwrap_or(false)
        };

        Config {
            document: args.document,
            kind: args.kind,
            mode: if strict {
                ExtractMode::Strict
            } else {
                ExtractMode::Lenient
            },
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_path,
        }
    }
}

/// `<config dir>/brdoc/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("brdoc").join("config.toml"))
}
