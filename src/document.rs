//! Document Model
//!
//! Fixed-shape digit sequences for the two Brazilian taxpayer documents.
//! A [`Document`] can only be built with the exact length for its kind and
//! digits in `0..=9`; everything downstream relies on that.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of trailing check digits on both document kinds
pub const CHECK_DIGIT_COUNT: usize = 2;

/// Which document a digit string is declared to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Individual taxpayer, 11 digits
    Cpf,
    /// Legal entity, 14 digits
    Cnpj,
}

impl DocumentKind {
    /// Required digit count
    pub const fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Digit count before the check digits
    pub const fn base_len(self) -> usize {
        self.digit_count() - CHECK_DIGIT_COUNT
    }

    /// Upper-case display name used in user-facing messages
    pub const fn name(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// Pick the kind whose length matches a cleaned digit count
    pub fn from_digit_count(count: usize) -> Option<Self> {
        [DocumentKind::Cpf, DocumentKind::Cnpj]
            .into_iter()
            .find(|kind| kind.digit_count() == count)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(DocumentKind::Cpf),
            "cnpj" => Ok(DocumentKind::Cnpj),
            _ => Err(DocumentError::UnknownKind(s.to_string())),
        }
    }
}

/// Contract violations when building documents or computing check digits.
///
/// These are caller errors, not "the document is invalid". Invalid user
/// input is reported through [`crate::validation::ValidationResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Digit count does not fit the declared kind.
    #[error("{kind} requires {expected} digits, got {actual}")]
    LengthMismatch {
        kind: DocumentKind,
        expected: usize,
        actual: usize,
    },

    /// An element outside `0..=9`.
    #[error("value {value} at position {position} is not a decimal digit")]
    DigitOutOfRange { position: usize, value: u8 },

    /// Kind name not recognised.
    #[error("unknown document kind '{0}' (expected 'cpf' or 'cnpj')")]
    UnknownKind(String),
}

/// A CPF or CNPJ as an ordered digit sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    kind: DocumentKind,
    digits: Vec<u8>,
}

impl Document {
    /// Build a document, checking length and digit range.
    ///
    /// # Errors
    ///
    /// [`DocumentError::LengthMismatch`] when `digits.len() != kind.digit_count()`,
    /// [`DocumentError::DigitOutOfRange`] for any element above 9.
    pub fn new(kind: DocumentKind, digits: Vec<u8>) -> Result<Self, DocumentError> {
        if digits.len() != kind.digit_count() {
            return Err(DocumentError::LengthMismatch {
                kind,
                expected: kind.digit_count(),
                actual: digits.len(),
            });
        }
        if let Some((position, &value)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(DocumentError::DigitOutOfRange { position, value });
        }
        Ok(Self { kind, digits })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Leading digits the check digits are computed from
    pub fn base(&self) -> &[u8] {
        &self.digits[..self.kind.base_len()]
    }

    /// The two trailing check digits as written in the document
    pub fn check_digits(&self) -> [u8; CHECK_DIGIT_COUNT] {
        let base_len = self.kind.base_len();
        [self.digits[base_len], self.digits[base_len + 1]]
    }

    /// True for degenerate sequences like `00000000000`
    pub fn all_digits_equal(&self) -> bool {
        self.digits.windows(2).all(|pair| pair[0] == pair[1])
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_lengths() {
        assert_eq!(DocumentKind::Cpf.digit_count(), 11);
        assert_eq!(DocumentKind::Cpf.base_len(), 9);
        assert_eq!(DocumentKind::Cnpj.digit_count(), 14);
        assert_eq!(DocumentKind::Cnpj.base_len(), 12);
    }

    #[test]
    fn test_kind_from_digit_count() {
        assert_eq!(DocumentKind::from_digit_count(11), Some(DocumentKind::Cpf));
        assert_eq!(DocumentKind::from_digit_count(14), Some(DocumentKind::Cnpj));
        assert_eq!(DocumentKind::from_digit_count(0), None);
        assert_eq!(DocumentKind::from_digit_count(12), None);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("cpf".parse::<DocumentKind>(), Ok(DocumentKind::Cpf));
        assert_eq!(" CNPJ ".parse::<DocumentKind>(), Ok(DocumentKind::Cnpj));
        assert!(matches!(
            "rg".parse::<DocumentKind>(),
            Err(DocumentError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Document::new(DocumentKind::Cnpj, vec![1; 11]).unwrap_err();
        assert_eq!(
            err,
            DocumentError::LengthMismatch {
                kind: DocumentKind::Cnpj,
                expected: 14,
                actual: 11
            }
        );
        assert_eq!(err.to_string(), "CNPJ requires 14 digits, got 11");
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let mut digits = vec![1; 11];
        digits[4] = 12;
        let err = Document::new(DocumentKind::Cpf, digits).unwrap_err();
        assert_eq!(
            err,
            DocumentError::DigitOutOfRange {
                position: 4,
                value: 12
            }
        );
    }

    #[test]
    fn test_base_and_check_digits() {
        let doc =
            Document::new(DocumentKind::Cpf, vec![1, 1, 1, 4, 4, 4, 7, 7, 7, 3, 5]).unwrap();
        assert_eq!(doc.base(), &[1, 1, 1, 4, 4, 4, 7, 7, 7]);
        assert_eq!(doc.check_digits(), [3, 5]);
        assert_eq!(doc.to_string(), "11144477735");
        assert!(!doc.all_digits_equal());
    }

    #[test]
    fn test_all_digits_equal() {
        let doc = Document::new(DocumentKind::Cnpj, vec![0; 14]).unwrap();
        assert!(doc.all_digits_equal());
    }
}
