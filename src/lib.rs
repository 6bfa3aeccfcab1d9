//! Brazilian Document Validator
//!
//! Checksum validation for CPF (individual, 11 digits) and CNPJ (legal
//! entity, 14 digits) taxpayer numbers.
//!
//! This library provides:
//! - Digit extraction from formatted input
//! - Check digit computation and validation
//! - The `brdoc` command-line front end and its configuration

pub mod cli;
pub mod config;
pub mod document;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use document::{Document, DocumentError, DocumentKind};
pub use parser::{extract_digits, ExtractMode};
pub use validation::{validate, validate_with, InvalidReason, ValidationResult};
