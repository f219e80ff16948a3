// ============================================================================
// Base Converter Library
// Exact conversion of fractional numbers between bases 2, 8, 10 and 16
// ============================================================================

//! # Base Converter
//!
//! Converts numbers with fractional parts between binary, octal, decimal and
//! hexadecimal without ever touching floating point.
//!
//! ## Features
//!
//! - **Exact arithmetic**: the fraction is carried as a big-integer rational,
//!   so 100 output digits are as exact as the first one
//! - **Truncation, not rounding**: asking for more digits never changes the
//!   digits already produced
//! - **Scientific notation** for decimal input (`"6.626e-34"`), expanded on
//!   the digit string rather than through a float
//! - **Typed errors** for malformed input, bad digits, bad bases and bad precision
//!
//! ## Example
//!
//! ```rust
//! use base_converter::prelude::*;
//!
//! let converter = BaseConverter::new(8).unwrap();
//!
//! assert_eq!(converter.decimal_to_binary(3.14159, None).unwrap(), "11.00100100");
//! assert_eq!(converter.hex_to_decimal("A.8", Some(2)).unwrap(), "10.50");
//! assert_eq!(converter.convert("FF", 16, 2, None).unwrap(), "11111111");
//!
//! // Trimmed output drops the zero padding
//! let compact = BaseConverter::with_config(ConverterConfig::compact(10)).unwrap();
//! assert_eq!(compact.hex_to_decimal("A.8", None).unwrap(), "10.5");
//!
//! match converter.binary_to_decimal("102", None) {
//!     Err(ConversionError::InvalidDigit { digit, .. }) => assert_eq!(digit, '2'),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod converter;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::converter::{BaseConverter, ConverterConfig, FractionStyle, NumberInput};
    pub use crate::numeric::{
        ConversionError, ConversionResult, ErrorKind, MAX_PRECISION, MIN_PRECISION,
        SUPPORTED_BASES,
    };
}
