//! Digit Extraction
//!
//! Turns user input like `111.444.777-35` or `11.222.333/0001-81` into the
//! ordered digit sequence the validators work on.

/// How characters other than digits are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// Discard every non-digit character
    #[default]
    Lenient,
    /// Accept only digits, mask punctuation (`.`, `-`, `/`) and whitespace
    Strict,
}

/// A character strict extraction refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// Byte offset into the input
    pub offset: usize,
    pub ch: char,
}

/// Keep ASCII decimal digits in order, dropping everything else
pub fn extract_digits(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Extract digits according to `mode`.
///
/// Lenient mode never fails. Strict mode stops at the first character that
/// is neither a digit nor part of the official masks.
pub fn scan(input: &str, mode: ExtractMode) -> Result<Vec<u8>, Rejection> {
    match mode {
        ExtractMode::Lenient => Ok(extract_digits(input)),
        ExtractMode::Strict => {
            let mut digits = Vec::with_capacity(input.len());
            for (offset, ch) in input.char_indices() {
                match ch {
                    '0'..='9' => digits.push(ch as u8 - b'0'),
                    '.' | '-' | '/' => {}
                    c if c.is_whitespace() => {}
                    _ => {
                        log::debug!("rejecting {:?} at byte {}", ch, offset);
                        return Err(Rejection { offset, ch });
                    }
                }
            }
            Ok(digits)
        }
    }
}
