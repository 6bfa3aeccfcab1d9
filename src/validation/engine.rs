//! Validation Engine
//!
//! Runs the checks in order: character scan, length, repeated digits,
//! checksum. Every outcome is a [`ValidationResult`] value.

use serde::Serialize;
use std::fmt;

use crate::document::{Document, DocumentKind};
use crate::parser::{self, ExtractMode};
use crate::validation::checksum;

/// Why a document was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Digit count differs from the declared kind (includes empty input)
    WrongLength,
    /// Every digit is the same, e.g. `00000000000`
    AllDigitsEqual,
    /// Written check digits disagree with the computed ones
    ChecksumMismatch,
    /// Strict mode found a character outside digits and mask punctuation
    NonDigitCharacter,
}

impl InvalidReason {
    /// Stable machine-readable identifier
    pub const fn code(self) -> &'static str {
        match self {
            InvalidReason::WrongLength => "wrong_length",
            InvalidReason::AllDigitsEqual => "all_digits_equal",
            InvalidReason::ChecksumMismatch => "checksum_mismatch",
            InvalidReason::NonDigitCharacter => "non_digit_character",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidReason::WrongLength => "wrong number of digits",
            InvalidReason::AllDigitsEqual => "all digits are equal",
            InvalidReason::ChecksumMismatch => "check digits do not match",
            InvalidReason::NonDigitCharacter => "contains a non-digit character",
        };
        f.write_str(text)
    }
}

/// Outcome of validating one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(*reason),
        }
    }
}

/// Validate `input` as `kind`, discarding non-digit characters
pub fn validate(input: &str, kind: DocumentKind) -> ValidationResult {
    validate_with(input, kind, ExtractMode::Lenient)
}

/// Validate `input` as `kind` with an explicit extraction mode
pub fn validate_with(input: &str, kind: DocumentKind, mode: ExtractMode) -> ValidationResult {
    let digits = match parser::scan(input, mode) {
        Ok(digits) => digits,
        Err(_) => return ValidationResult::Invalid(InvalidReason::NonDigitCharacter),
    };

    match Document::new(kind, digits) {
        Ok(document) => validate_document(&document),
        Err(e) => {
            log::debug!("{} rejected: {}", kind, e);
            ValidationResult::Invalid(InvalidReason::WrongLength)
        }
    }
}

/// Validate an already-built document
pub fn validate_document(document: &Document) -> ValidationResult {
    let kind = document.kind();

    if document.all_digits_equal() {
        log::debug!("{} rejected: all digits equal", kind);
        return ValidationResult::Invalid(InvalidReason::AllDigitsEqual);
    }

    let expected = checksum::compute(kind, document.base());
    let found = document.check_digits();
    if expected != found {
        log::debug!(
            "{} rejected: expected check digits {:?}, found {:?}",
            kind,
            expected,
            found
        );
        return ValidationResult::Invalid(InvalidReason::ChecksumMismatch);
    }

    ValidationResult::Valid
}
