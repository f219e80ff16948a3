// ============================================================================
// Number Input
// Values accepted at the API boundary: numeral text or native decimal numbers
// ============================================================================

use crate::numeric::{ConversionError, ConversionResult};
use rust_decimal::Decimal;
use std::borrow::Cow;

/// A value handed to [`BaseConverter`](crate::converter::BaseConverter).
///
/// Text is accepted for every base. Native numbers only make sense as
/// decimal input: a Rust integer carries no record of the literal's radix,
/// so interpreting `255` as hex or binary would be a guess.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput<'a> {
    /// Numeral text in the declared base
    Text(Cow<'a, str>),
    /// Signed native integer
    Integer(i128),
    /// Unsigned native integer
    Unsigned(u128),
    /// Native float (must be finite)
    Float(f64),
    /// Exact decimal
    Decimal(Decimal),
}

impl<'a> NumberInput<'a> {
    /// Get the numeral text to parse in `base`.
    ///
    /// Floats render with Rust's shortest round-trip formatting, which never
    /// uses exponent notation; `3.14159_f64` becomes `"3.14159"`.
    ///
    /// # Errors
    /// - `InvalidFormat` for a native number with a non-decimal base
    /// - `InvalidFormat` for NaN or infinite floats
    pub fn to_text(&self, base: u32) -> ConversionResult<Cow<'_, str>> {
        let text = match self {
            NumberInput::Text(text) => return Ok(Cow::Borrowed(text.as_ref())),
            _ if base != 10 => {
                return Err(ConversionError::invalid_format(format!(
                    "numeric input only supported for decimal (base 10), got base {}",
                    base
                )))
            },
            NumberInput::Integer(v) => v.to_string(),
            NumberInput::Unsigned(v) => v.to_string(),
            NumberInput::Float(v) if v.is_finite() => v.to_string(),
            NumberInput::Float(v) => {
                return Err(ConversionError::invalid_format(format!(
                    "non-finite value {}",
                    v
                )))
            },
            NumberInput::Decimal(d) => d.to_string(),
        };
        Ok(Cow::Owned(text))
    }

    /// True for native numbers (anything except text)
    pub fn is_native(&self) -> bool {
        !matches!(self, NumberInput::Text(_))
    }
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(value: &'a str) -> Self {
        NumberInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(value: &'a String) -> Self {
        NumberInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for NumberInput<'static> {
    fn from(value: String) -> Self {
        NumberInput::Text(Cow::Owned(value))
    }
}

impl From<f64> for NumberInput<'static> {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

impl From<f32> for NumberInput<'static> {
    fn from(value: f32) -> Self {
        // Go through the f32's own shortest text so 0.1f32 stays "0.1"
        match value.to_string().parse::<f64>() {
            Ok(widened) => NumberInput::Float(widened),
            Err(_) => NumberInput::Float(f64::from(value)),
        }
    }
}

impl From<Decimal> for NumberInput<'static> {
    fn from(value: Decimal) -> Self {
        NumberInput::Decimal(value)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for NumberInput<'static> {
            fn from(value: $t) -> Self {
                NumberInput::Integer(i128::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for NumberInput<'static> {
            fn from(value: $t) -> Self {
                NumberInput::Unsigned(u128::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128);
impl_from_unsigned!(u8, u16, u32, u64, u128);

impl From<isize> for NumberInput<'static> {
    fn from(value: isize) -> Self {
        NumberInput::Integer(value as i128)
    }
}

impl From<usize> for NumberInput<'static> {
    fn from(value: usize) -> Self {
        NumberInput::Unsigned(value as u128)
    }
}
