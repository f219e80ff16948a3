// ============================================================================
// Validator
// Range checks for bases, precision and input size; digit-run validation
// ============================================================================

use super::digits::{digit_value, SUPPORTED_BASES};
use super::errors::{ConversionError, ConversionResult};
use smallvec::SmallVec;

/// Smallest accepted precision (fractional digits)
pub const MIN_PRECISION: usize = 1;

/// Largest accepted precision (fractional digits)
pub const MAX_PRECISION: usize = 100;

/// Digit values of one part of a numeral, most-significant first.
pub type Digits = SmallVec<[u8; 32]>;

/// Confirm `base` is one of 2, 8, 10, 16.
#[inline]
pub fn validate_base(base: u32) -> ConversionResult<u32> {
    if SUPPORTED_BASES.contains(&base) {
        Ok(base)
    } else {
        Err(ConversionError::UnsupportedBase { base })
    }
}

/// Confirm `precision` lies in `[MIN_PRECISION, MAX_PRECISION]`. Never clamps.
#[inline]
pub fn validate_precision(precision: usize) -> ConversionResult<usize> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Ok(precision)
    } else {
        Err(ConversionError::PrecisionRange { precision })
    }
}

/// Reject inputs longer than `max_len` characters before any parsing work.
#[inline]
pub fn validate_length(text: &str, max_len: usize) -> ConversionResult<()> {
    let len = text.chars().count();
    if len > max_len {
        Err(ConversionError::invalid_format(format!(
            "input is {} characters long, limit is {}",
            len, max_len
        )))
    } else {
        Ok(())
    }
}

/// Validate a run of digit characters and return their values.
///
/// `offset` is the position of the first character of `text` in the trimmed
/// input, so errors can point at the offending character.
///
/// # Errors
/// - `InvalidFormat` for characters that are not digits at all (`#`, space, a second sign)
/// - `InvalidDigit` for alphanumerics outside the base (`2` in binary, `G` in hex)
pub fn validate_digits(text: &str, base: u32, offset: usize) -> ConversionResult<Digits> {
    let mut digits = Digits::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        let at = offset + i;
        if !ch.is_ascii_alphanumeric() {
            return Err(ConversionError::invalid_format(format!(
                "illegal character '{}' at position {}",
                ch, at
            )));
        }
        let value = digit_value(ch, base).map_err(|e| e.at_position(at))?;
        digits.push(value);
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base() {
        for base in [2, 8, 10, 16] {
            assert_eq!(validate_base(base), Ok(base));
        }
        assert_eq!(
            validate_base(3),
            Err(ConversionError::UnsupportedBase { base: 3 })
        );
        assert!(validate_base(0).is_err());
        assert!(validate_base(36).is_err());
    }

    #[test]
    fn test_validate_precision() {
        assert_eq!(validate_precision(1), Ok(1));
        assert_eq!(validate_precision(100), Ok(100));
        assert_eq!(
            validate_precision(0),
            Err(ConversionError::PrecisionRange { precision: 0 })
        );
        assert_eq!(
            validate_precision(101),
            Err(ConversionError::PrecisionRange { precision: 101 })
        );
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length("1234", 4).is_ok());
        assert!(matches!(
            validate_length("12345", 4),
            Err(ConversionError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_digits() {
        assert_eq!(validate_digits("1011", 2, 0).unwrap().as_slice(), &[1, 0, 1, 1]);
        assert_eq!(validate_digits("fA", 16, 0).unwrap().as_slice(), &[15, 10]);
        assert!(validate_digits("", 10, 0).unwrap().is_empty());
    }

    #[test]
    fn test_validate_digits_reports_position() {
        assert_eq!(
            validate_digits("102", 2, 0),
            Err(ConversionError::InvalidDigit {
                digit: '2',
                base: 2,
                position: Some(2),
            })
        );
        assert_eq!(
            validate_digits("7G", 16, 3),
            Err(ConversionError::InvalidDigit {
                digit: 'G',
                base: 16,
                position: Some(4),
            })
        );
    }

    #[test]
    fn test_validate_digits_rejects_symbols() {
        assert!(matches!(
            validate_digits("1#0", 10, 0),
            Err(ConversionError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_digits("1 0", 10, 0),
            Err(ConversionError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_digits("-5", 10, 0),
            Err(ConversionError::InvalidFormat { .. })
        ));
    }
}
