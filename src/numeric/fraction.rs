// ============================================================================
// Exact Fraction
// Fractional-part conversion through an exact rational intermediate
// ============================================================================
//
// Stage A: source fraction digits -> numerator / source_base^len
// Stage B: repeated multiply-by-target-base and divmod, one digit per step
//
// Both stages are integer-only. There is no working precision to run out
// of, so no guard digits are needed and nothing is rounded before the
// final truncation at the requested digit count.

use super::digits::digit_char;
use super::validate::{validate_base, validate_precision, MAX_PRECISION};
use super::ConversionResult;
use arrayvec::ArrayVec;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Digit values produced by Stage B, at most `MAX_PRECISION` of them.
pub type FractionDigits = ArrayVec<u8, MAX_PRECISION>;

/// A value in `[0, 1)` held as `numerator / denominator`.
///
/// The denominator is always `source_base^n` for the `n` source digits, so
/// `numerator < denominator` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactFraction {
    numerator: BigUint,
    denominator: BigUint,
}

impl ExactFraction {
    /// Exactly zero.
    pub fn zero() -> Self {
        Self {
            numerator: BigUint::zero(),
            denominator: BigUint::from(1u32),
        }
    }

    /// Stage A: accumulate `Σ digit_i × base^-(i+1)` exactly.
    ///
    /// `digits` are digit values (already validated to be below `base`).
    /// An empty slice yields zero.
    pub fn from_digits(digits: &[u8], base: u32) -> ConversionResult<Self> {
        let base = validate_base(base)?;
        let mut numerator = BigUint::zero();
        let mut denominator = BigUint::from(1u32);
        for &digit in digits {
            numerator = numerator * base + u32::from(digit);
            denominator *= base;
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    #[inline]
    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Stage B: expand into at most `precision` digits of `base`.
    ///
    /// Stops as soon as the remainder is exactly zero, so the result may be
    /// shorter than `precision`; omitted digits are zeros. Digits past
    /// `precision` are truncated, never rounded.
    pub fn expand(&self, base: u32, precision: usize) -> ConversionResult<FractionDigits> {
        let base = validate_base(base)?;
        let precision = validate_precision(precision)?;

        let mut digits = FractionDigits::new();
        let mut current = self.numerator.clone();
        while digits.len() < precision && !current.is_zero() {
            current *= base;
            let (digit, rest) = current.div_rem(&self.denominator);
            // numerator < denominator, so every quotient is below base
            digits.push(digit.to_u8().unwrap_or(0));
            current = rest;
        }
        Ok(digits)
    }

    /// Stage B rendered as text: exactly `precision` characters, zero padded
    /// on the right when the expansion terminates early.
    pub fn to_digit_string(&self, base: u32, precision: usize) -> ConversionResult<String> {
        let digits = self.expand(base, precision)?;
        let mut text: String = digits.iter().map(|&d| digit_char(d)).collect();
        text.extend(std::iter::repeat('0').take(precision - digits.len()));
        Ok(text)
    }
}

impl Default for ExactFraction {
    fn default() -> Self {
        Self::zero()
    }
}
