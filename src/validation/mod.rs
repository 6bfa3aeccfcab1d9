//! Document Validation
//!
//! Checksum arithmetic and the validation pipeline, kept apart from input
//! parsing and the command-line surface.

pub mod checksum;
pub mod engine;

pub use checksum::{cnpj_check_digits, cpf_check_digits};
pub use engine::{validate, validate_document, validate_with, InvalidReason, ValidationResult};
