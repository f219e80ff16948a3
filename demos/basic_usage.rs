// ============================================================================
// Basic Usage Example
// ============================================================================

use base_converter::prelude::*;

fn main() -> Result<(), ConversionError> {
    println!("=== Base Converter Example ===\n");

    let converter = BaseConverter::new(12)?;
    println!("Created converter with default precision 12\n");

    // Pairwise conversions
    println!("Pairwise conversions:");
    println!("  3.14159 (dec) -> {} (bin)", converter.decimal_to_binary(3.14159, None)?);
    println!("  3.14159 (dec) -> {} (hex)", converter.decimal_to_hex("3.14159", None)?);
    println!("  A.8     (hex) -> {} (dec)", converter.hex_to_decimal("A.8", None)?);
    println!("  0b1010.01     -> {} (oct)", converter.binary_to_octal("0b1010.01", Some(2))?);

    // Universal conversion
    println!("\n=== Universal Conversion ===");
    for to_base in SUPPORTED_BASES {
        println!("  255.75 -> base {:>2}: {}", to_base, converter.convert("255.75", 10, to_base, Some(4))?);
    }

    // Scientific notation is expanded exactly
    println!("\n=== Scientific Notation ===");
    println!("  1e50      -> {} (hex)", converter.decimal_to_hex("1e50", None)?);
    println!("  6.626e-34 -> {} (hex)", converter.decimal_to_hex("6.626e-34", Some(40))?);

    // Trimmed output
    println!("\n=== Trimmed Output ===");
    let compact = BaseConverter::with_config(ConverterConfig::compact(12))?;
    println!("  A.8 (hex) -> {} (dec)", compact.hex_to_decimal("A.8", None)?);

    // Errors
    println!("\n=== Errors ===");
    for (value, from_base) in [("102", 2u32), ("1.2.3", 10), ("1e5", 8)] {
        match converter.convert(value, from_base, 10, None) {
            Ok(result) => println!("  {} -> {}", value, result),
            Err(e) => println!("  {} (base {}) rejected: {}", value, from_base, e),
        }
    }

    Ok(())
}
