//! Command-line front end
//!
//! Picks the document kind, runs validation and renders the single output
//! line. The binary only wires this to stdout and the process exit code.

use anyhow::Result;
use serde::Serialize;

use crate::config::{Config, OutputFormat};
use crate::document::DocumentKind;
use crate::parser;
use crate::validation::{self, InvalidReason, ValidationResult};

/// Message shown when the digit count fits neither CPF nor CNPJ
pub const USAGE_MESSAGE: &str = "insert a valid CPF or CNPJ";

/// Exit status for a valid document
pub const EXIT_VALID: u8 = 0;
/// Exit status for an invalid document
pub const EXIT_INVALID: u8 = 1;
/// Exit status for input that is neither a CPF nor a CNPJ
pub const EXIT_USAGE: u8 = 2;

/// What a single run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Checked {
        kind: DocumentKind,
        result: ValidationResult,
    },
    Usage(String),
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<DocumentKind>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<InvalidReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Checked { result, .. } if result.is_valid() => EXIT_VALID,
            Outcome::Checked { .. } => EXIT_INVALID,
            Outcome::Usage(_) => EXIT_USAGE,
        }
    }

    /// Render the outcome as one output line
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => {
                let report = match self {
                    Outcome::Checked { kind, result } => Report {
                        kind: Some(*kind),
                        valid: result.is_valid(),
                        reason: result.reason(),
                        error: None,
                    },
                    Outcome::Usage(message) => Report {
                        kind: None,
                        valid: false,
                        reason: None,
                        error: Some(message.as_str()),
                    },
                };
                Ok(serde_json::to_string(&report)?)
            }
        }
    }

    fn render_text(&self) -> String {
        match self {
            Outcome::Checked { kind, result } if result.is_valid() => {
                format!("{} is valid.", kind)
            }
            Outcome::Checked { kind, .. } => format!("Invalid {}.", kind),
            Outcome::Usage(message) => message.clone(),
        }
    }
}

/// Validate the configured document
pub fn run(config: &Config) -> Outcome {
    let kind = match config.kind {
        Some(kind) => kind,
        None => {
            let count = parser::extract_digits(&config.document).len();
            match DocumentKind::from_digit_count(count) {
                Some(kind) => kind,
                None => {
                    log::debug!("{} digits match neither CPF nor CNPJ", count);
                    return Outcome::Usage(USAGE_MESSAGE.to_string());
                }
            }
        }
    };

    let result = validation::validate_with(&config.document, kind, config.mode);
    log::info!("{} validation result: {:?}", kind, result);

    Outcome::Checked { kind, result }
}
