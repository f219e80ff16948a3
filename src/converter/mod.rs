// ============================================================================
// Converter Module
// Public conversion API built on the numeric engine
// ============================================================================

mod base_converter;
mod config;
mod input;

#[cfg(test)]
mod properties;

pub use base_converter::BaseConverter;
pub use config::{ConverterConfig, FractionStyle, DEFAULT_PRECISION};
pub use input::NumberInput;
