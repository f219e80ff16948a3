// ============================================================================
// Base Converter
// Facade: normalize -> validate -> convert integer and fraction -> format
// ============================================================================

use super::config::{ConverterConfig, FractionStyle};
use super::input::NumberInput;
use crate::numeric::{
    convert_integer, normalize, validate_base, validate_precision, ConversionResult,
    ExactFraction, ParsedNumber,
};

/// Converts numbers with fractional parts between bases 2, 8, 10 and 16.
///
/// Holds only its configuration, which is read-only after construction, so
/// one instance can be shared freely across threads.
///
/// # Example
/// ```
/// use base_converter::converter::BaseConverter;
///
/// let converter = BaseConverter::new(8).unwrap();
/// assert_eq!(converter.decimal_to_binary("3.14159", None).unwrap(), "11.00100100");
/// assert_eq!(converter.convert("FF", 16, 2, None).unwrap(), "11111111");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaseConverter {
    config: ConverterConfig,
}

impl BaseConverter {
    /// Create a converter with the given default precision and padded output.
    ///
    /// # Errors
    /// Returns `PrecisionRange` if `default_precision` is outside 1-100.
    pub fn new(default_precision: usize) -> ConversionResult<Self> {
        Self::with_config(ConverterConfig::new(default_precision))
    }

    /// Create a converter from a full configuration.
    ///
    /// # Errors
    /// Returns `PrecisionRange` if the configured default precision is outside 1-100.
    pub fn with_config(config: ConverterConfig) -> ConversionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    #[inline]
    pub fn default_precision(&self) -> usize {
        self.config.default_precision
    }

    /// Normalize `value` as a numeral in `base` without converting it.
    pub fn parse<'a>(
        &self,
        value: impl Into<NumberInput<'a>>,
        base: u32,
    ) -> ConversionResult<ParsedNumber> {
        let base = validate_base(base)?;
        let input: NumberInput<'a> = value.into();
        let text = input.to_text(base)?;
        normalize(&text, base, &self.config.limits())
    }

    /// Universal conversion between any two supported bases.
    ///
    /// `precision` falls back to the configured default. The fractional part
    /// is truncated (never rounded) at `precision` digits.
    ///
    /// # Errors
    /// - `UnsupportedBase` if either base is not 2, 8, 10 or 16
    /// - `PrecisionRange` if the precision is outside 1-100
    /// - `InvalidFormat`, `InvalidDigit`, `ScientificNotation` from parsing
    pub fn convert<'a>(
        &self,
        value: impl Into<NumberInput<'a>>,
        from_base: u32,
        to_base: u32,
        precision: Option<usize>,
    ) -> ConversionResult<String> {
        let from_base = validate_base(from_base)?;
        let to_base = validate_base(to_base)?;
        let precision = validate_precision(precision.unwrap_or(self.config.default_precision))?;
        tracing::trace!(from_base, to_base, precision, "converting value");

        let parsed = self
            .parse(value, from_base)
            .inspect_err(|e| tracing::debug!(error = %e, from_base, "rejected input"))?;
        self.render(&parsed, to_base, precision)
    }

    /// Convert an already-parsed number and format the result.
    fn render(
        &self,
        parsed: &ParsedNumber,
        to_base: u32,
        precision: usize,
    ) -> ConversionResult<String> {
        let integer = convert_integer(parsed.integer_digits(), parsed.base(), to_base)?;

        let fraction = if parsed.has_fraction() {
            let exact = ExactFraction::from_digits(parsed.fraction_digits(), parsed.base())?;
            let digits = exact.to_digit_string(to_base, precision)?;
            match self.config.fraction_style {
                FractionStyle::Padded => Some(digits),
                FractionStyle::Trimmed => {
                    let trimmed = digits.trim_end_matches('0');
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                },
            }
        } else {
            None
        };

        // A value that truncates to all zeros prints without a sign
        let renders_as_zero = integer == "0"
            && fraction
                .as_deref()
                .map_or(true, |f| f.bytes().all(|b| b == b'0'));

        let mut result = String::with_capacity(integer.len() + precision + 2);
        if parsed.sign().is_negative() && !renders_as_zero {
            result.push('-');
        }
        result.push_str(&integer);
        if let Some(fraction) = fraction {
            result.push('.');
            result.push_str(&fraction);
        }
        Ok(result)
    }

    // ========================================================================
    // Decimal Source
    // ========================================================================

    /// Convert decimal to binary.
    pub fn decimal_to_binary<'a>(
        &self,
        value: impl Into<NumberInput<'a>>,
        precision: Option<usize>,
    ) -> ConversionResult<String> {
        self.convert(value, 10, 2, precision)
    }

    /// Convert decimal to octal.
    pub fn decimal_to_octal<'a>(
        &self,
        value: impl Into<NumberInput<'a>>,
        precision: Option<usize>,
    ) -> ConversionResult<String> {
        self.convert(value, 10, 8, precision)
    }

    /// Convert decimal to hexadecimal.
    pub fn decimal_to_hex<'a>(
        &self,
        value: impl Into<NumberInput<'a>>,
        precision: Option<usize>,
    ) -> ConversionResult<String> {
        self.convert(value, 10, 16, precision)
    }

    // ========================================================================
    // Binary Source
    // Non-decimal sources take text only; see NumberInput
    // ========================================================================

    /// Convert binary to decimal.
    pub fn binary_to_decimal(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 2, 10, precision)
    }

    /// Convert binary to octal.
    pub fn binary_to_octal(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 2, 8, precision)
    }

    /// Convert binary to hexadecimal.
    pub fn binary_to_hex(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 2, 16, precision)
    }

    // ========================================================================
    // Octal Source
    // ========================================================================

    /// Convert octal to decimal.
    pub fn octal_to_decimal(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 8, 10, precision)
    }

    /// Convert octal to binary.
    pub fn octal_to_binary(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 8, 2, precision)
    }

    /// Convert octal to hexadecimal.
    pub fn octal_to_hex(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 8, 16, precision)
    }

    // ========================================================================
    // Hexadecimal Source
    // ========================================================================

    /// Convert hexadecimal to decimal.
    pub fn hex_to_decimal(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 16, 10, precision)
    }

    /// Convert hexadecimal to binary.
    pub fn hex_to_binary(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 16, 2, precision)
    }

    /// Convert hexadecimal to octal.
    pub fn hex_to_octal(&self, value: &str, precision: Option<usize>) -> ConversionResult<String> {
        self.convert(value, 16, 8, precision)
    }
}
