// ============================================================================
// Integer Conversion
// Exact big-integer conversion of the integer part
// ============================================================================

use super::digits::digit_char;
use super::validate::validate_base;
use super::ConversionResult;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Accumulate digit values (most-significant first) into a magnitude.
///
/// An empty slice is zero.
pub fn parse_magnitude(digits: &[u8], base: u32) -> ConversionResult<BigUint> {
    let base = validate_base(base)?;
    Ok(digits
        .iter()
        .fold(BigUint::zero(), |acc, &d| acc * base + u32::from(d)))
}

/// Render a magnitude in `base` by repeated division.
///
/// Zero renders as `"0"`; otherwise there are no leading zeros.
pub fn render_magnitude(magnitude: &BigUint, base: u32) -> ConversionResult<String> {
    let base = validate_base(base)?;
    if magnitude.is_zero() {
        return Ok("0".to_string());
    }

    let divisor = BigUint::from(base);
    let mut remainders = Vec::new();
    let mut current = magnitude.clone();
    while !current.is_zero() {
        let (quotient, remainder) = current.div_rem(&divisor);
        remainders.push(digit_char(remainder.to_u8().unwrap_or(0)));
        current = quotient;
    }
    Ok(remainders.into_iter().rev().collect())
}

/// Convert integer digit values from `from_base` into a digit string in `to_base`.
pub fn convert_integer(digits: &[u8], from_base: u32, to_base: u32) -> ConversionResult<String> {
    let magnitude = parse_magnitude(digits, from_base)?;
    render_magnitude(&magnitude, to_base)
}
