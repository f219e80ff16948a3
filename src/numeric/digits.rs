// ============================================================================
// Digit Codec
// Single-character digit mapping and per-base lookup data
// ============================================================================

use super::errors::{ConversionError, ConversionResult};

/// The bases this crate converts between.
pub const SUPPORTED_BASES: [u32; 4] = [2, 8, 10, 16];

/// Output alphabet. Values >= 10 render as uppercase letters.
const ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// Map a single character to its value in `base`.
///
/// Accepts `0-9` and `A-F` in either case.
///
/// # Errors
/// Returns `InvalidDigit` (without a position) if the character is not
/// alphanumeric or its value is not below `base`.
#[inline]
pub fn digit_value(ch: char, base: u32) -> ConversionResult<u8> {
    match ch.to_digit(36) {
        Some(value) if value < base => Ok(value as u8),
        _ => Err(ConversionError::InvalidDigit {
            digit: ch,
            base,
            position: None,
        }),
    }
}

/// Map a digit value back to its character in `base`.
///
/// Returns `None` unless `value < base` and `base` is supported.
#[inline]
pub fn value_digit(value: u8, base: u32) -> Option<char> {
    if SUPPORTED_BASES.contains(&base) && u32::from(value) < base {
        Some(ALPHABET[value as usize] as char)
    } else {
        None
    }
}

/// Render a digit that is already known to be below the target base.
#[inline]
pub(crate) fn digit_char(value: u8) -> char {
    ALPHABET[usize::from(value) & 0x0F] as char
}

/// Human-readable name of a supported base.
pub fn base_name(base: u32) -> Option<&'static str> {
    match base {
        2 => Some("binary"),
        8 => Some("octal"),
        10 => Some("decimal"),
        16 => Some("hexadecimal"),
        _ => None,
    }
}

/// Conventional literal prefix for a base (`0b`, `0o`, `0x`); decimal has none.
pub fn base_prefix(base: u32) -> Option<&'static str> {
    match base {
        2 => Some("0b"),
        8 => Some("0o"),
        16 => Some("0x"),
        _ => None,
    }
}
