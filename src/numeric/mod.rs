// ============================================================================
// Numeric Module
// Exact radix conversion primitives
// ============================================================================
//
// This module provides:
// - Digit codec and per-base lookup data
// - Validation of bases, precision and digit runs
// - Input normalization (sign, prefix, scientific notation, radix point)
// - ExactFraction: fractional conversion through an exact rational
// - Big-integer conversion of the integer part
// - ConversionError: the error taxonomy shared by all of the above
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Base is a plain integer threaded through every function

mod digits;
mod errors;
mod fraction;
mod integer;
mod normalize;
mod validate;

pub use digits::{base_name, base_prefix, digit_value, value_digit, SUPPORTED_BASES};
pub use errors::{ConversionError, ConversionResult, ErrorKind};
pub use fraction::{ExactFraction, FractionDigits};
pub use integer::{convert_integer, parse_magnitude, render_magnitude};
pub use normalize::{
    expand_scientific, normalize, ParseLimits, ParsedNumber, Sign, DEFAULT_MAX_EXPONENT,
    DEFAULT_MAX_INPUT_LENGTH,
};
pub use validate::{
    validate_base, validate_digits, validate_length, validate_precision, Digits, MAX_PRECISION,
    MIN_PRECISION,
};
