// ============================================================================
// Conversion Errors
// Error types for parsing, validating and converting numerals
// ============================================================================

use std::fmt;

/// Errors that can occur while normalizing or converting a numeral.
///
/// Every variant is a deterministic local failure: the same input always
/// produces the same error, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// Malformed structure: empty input, multiple radix points, illegal characters
    InvalidFormat {
        /// Human-readable description of the problem
        reason: String,
    },
    /// A digit-like character that is not legal for the declared base
    InvalidDigit {
        /// The offending character
        digit: char,
        /// The declared base
        base: u32,
        /// 0-based character position in the trimmed input, when known
        position: Option<usize>,
    },
    /// Precision outside the supported range
    PrecisionRange {
        /// The rejected precision
        precision: usize,
    },
    /// Base other than 2, 8, 10 or 16
    UnsupportedBase {
        /// The rejected base
        base: u32,
    },
    /// Scientific notation that is malformed or used outside base 10
    ScientificNotation {
        /// Human-readable description of the problem
        reason: String,
    },
}

/// Coarse discriminant of [`ConversionError`], for callers that only need the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    InvalidDigit,
    PrecisionRange,
    UnsupportedBase,
    ScientificNotation,
}

impl ConversionError {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        ConversionError::InvalidFormat {
            reason: reason.into(),
        }
    }

    pub(crate) fn scientific(reason: impl Into<String>) -> Self {
        ConversionError::ScientificNotation {
            reason: reason.into(),
        }
    }

    /// Attach a character position to an `InvalidDigit` error.
    ///
    /// Other variants are returned unchanged.
    pub(crate) fn at_position(self, at: usize) -> Self {
        match self {
            ConversionError::InvalidDigit { digit, base, .. } => ConversionError::InvalidDigit {
                digit,
                base,
                position: Some(at),
            },
            other => other,
        }
    }

    /// Get the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            ConversionError::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            ConversionError::PrecisionRange { .. } => ErrorKind::PrecisionRange,
            ConversionError::UnsupportedBase { .. } => ErrorKind::UnsupportedBase,
            ConversionError::ScientificNotation { .. } => ErrorKind::ScientificNotation,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidFormat { reason } => write!(f, "invalid format: {}", reason),
            ConversionError::InvalidDigit {
                digit,
                base,
                position: Some(at),
            } => write!(
                f,
                "invalid digit '{}' for base {} at position {}",
                digit, base, at
            ),
            ConversionError::InvalidDigit {
                digit,
                base,
                position: None,
            } => write!(f, "invalid digit '{}' for base {}", digit, base),
            ConversionError::PrecisionRange { precision } => write!(
                f,
                "precision must be an integer between 1 and 100, got {}",
                precision
            ),
            ConversionError::UnsupportedBase { base } => write!(
                f,
                "unsupported base {}: supported bases are 2, 8, 10, 16",
                base
            ),
            ConversionError::ScientificNotation { reason } => {
                write!(f, "invalid scientific notation: {}", reason)
            },
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
