// ============================================================================
// Converter Configuration
// Default precision, output style and input limits for a BaseConverter
// ============================================================================

use crate::numeric::{
    validate_precision, ConversionResult, ParseLimits, DEFAULT_MAX_EXPONENT,
    DEFAULT_MAX_INPUT_LENGTH,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision used when neither the config nor the call names one
pub const DEFAULT_PRECISION: usize = 10;

// ============================================================================
// Fraction Style
// ============================================================================

/// How the fractional part of a result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FractionStyle {
    /// Exactly `precision` digits, zero padded when the expansion terminates early.
    /// - `"A.8"` (hex) at precision 4 -> `"10.5000"`
    /// - Use case: fixed-width output, string comparison
    #[default]
    Padded,

    /// Trailing zeros removed; an all-zero fraction drops the radix point.
    /// - `"A.8"` (hex) at precision 4 -> `"10.5"`
    /// - Use case: human-readable output
    Trimmed,
}

// ============================================================================
// Converter Configuration
// ============================================================================

/// Configuration for a [`BaseConverter`](crate::converter::BaseConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Fractional digits used when a call does not pass a precision (1-100)
    pub default_precision: usize,

    /// Rendering of the fractional part
    pub fraction_style: FractionStyle,

    /// Inputs longer than this (after trimming) are rejected before parsing
    pub max_input_length: usize,

    /// Largest accepted |exponent| in scientific notation
    pub max_exponent: u32,
}

impl ConverterConfig {
    /// Create a configuration with the given default precision
    pub fn new(default_precision: usize) -> Self {
        Self {
            default_precision,
            fraction_style: FractionStyle::Padded,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            max_exponent: DEFAULT_MAX_EXPONENT,
        }
    }

    /// Builder method: Set fraction rendering style
    pub fn with_fraction_style(mut self, style: FractionStyle) -> Self {
        self.fraction_style = style;
        self
    }

    /// Builder method: Set maximum input length
    pub fn with_max_input_length(mut self, len: usize) -> Self {
        self.max_input_length = len;
        self
    }

    /// Builder method: Set maximum exponent magnitude
    pub fn with_max_exponent(mut self, exponent: u32) -> Self {
        self.max_exponent = exponent;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `PrecisionRange` if `default_precision` is outside 1-100.
    pub fn validate(&self) -> ConversionResult<()> {
        validate_precision(self.default_precision)?;
        Ok(())
    }

    /// Input limits handed to the normalizer
    pub fn limits(&self) -> ParseLimits {
        ParseLimits {
            max_input_length: self.max_input_length,
            max_exponent: self.max_exponent,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ConverterConfig {
    /// Human-readable output
    /// - Trailing zeros trimmed
    /// - Terminating fractions print at their natural length (`"10.5"`)
    pub fn compact(default_precision: usize) -> Self {
        Self::new(default_precision).with_fraction_style(FractionStyle::Trimmed)
    }

    /// Fixed-width output at full precision
    /// - 100 fractional digits, zero padded
    pub fn full_precision() -> Self {
        Self::new(crate::numeric::MAX_PRECISION)
    }
}
