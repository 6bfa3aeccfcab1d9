//! Check Digit Arithmetic
//!
//! Modulo-11 weighted sums for CPF and CNPJ. Weights and windows are fixed
//! by the national standard and must not change.

use crate::document::{DocumentError, DocumentKind, CHECK_DIGIT_COUNT};

/// CNPJ weights for the first check digit (positions 0..12)
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights for the second check digit (positions 0..13)
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// One CPF check digit over every digit before it.
///
/// The digit at position `n` is weighted `len + 1 - n`.
fn cpf_digit(digits: &[u8]) -> u8 {
    let top = digits.len() + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(n, &d)| u32::from(d) * (top - n) as u32)
        .sum();
    ((sum * 10 % 11) % 10) as u8
}

/// One CNPJ check digit: `0` when the remainder is below 2, `11 - r` otherwise
fn cnpj_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Both check digits for `base`; the second sum includes the first digit.
///
/// Callers guarantee `base.len() == kind.base_len()` and digits in `0..=9`.
pub(crate) fn compute(kind: DocumentKind, base: &[u8]) -> [u8; CHECK_DIGIT_COUNT] {
    let mut digits = Vec::with_capacity(kind.digit_count());
    digits.extend_from_slice(base);

    let first = match kind {
        DocumentKind::Cpf => cpf_digit(&digits),
        DocumentKind::Cnpj => cnpj_digit(&digits, &CNPJ_FIRST_WEIGHTS),
    };
    digits.push(first);

    let second = match kind {
        DocumentKind::Cpf => cpf_digit(&digits),
        DocumentKind::Cnpj => cnpj_digit(&digits, &CNPJ_SECOND_WEIGHTS),
    };
    [first, second]
}

/// Check digits for a 9-digit CPF base
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; CHECK_DIGIT_COUNT] {
    compute(DocumentKind::Cpf, base)
}

/// Check digits for a 12-digit CNPJ base
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; CHECK_DIGIT_COUNT] {
    compute(DocumentKind::Cnpj, base)
}

impl DocumentKind {
    /// Compute the check digits for a base of `self.base_len()` digits.
    ///
    /// # Errors
    ///
    /// [`DocumentError::LengthMismatch`] when the base has the wrong length,
    /// [`DocumentError::DigitOutOfRange`] for elements above 9.
    pub fn check_digits(self, base: &[u8]) -> Result<[u8; CHECK_DIGIT_COUNT], DocumentError> {
        if let Some((position, &value)) = base.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(DocumentError::DigitOutOfRange { position, value });
        }
        if base.len() != self.base_len() {
            return Err(DocumentError::LengthMismatch {
                kind: self,
                expected: self.base_len(),
                actual: base.len(),
            });
        }
        let digits = compute(self, base);
        log::trace!("{} check digits for {:?}: {:?}", self, base, digits);
        Ok(digits)
    }
}
