// ============================================================================
// Base Converter CLI
// Convert one number between bases from the command line
// ============================================================================

use base_converter::numeric::base_name;
use base_converter::prelude::*;
use clap::Parser;
use std::process::ExitCode;

/// Convert numbers with fractional parts between bases 2, 8, 10 and 16
#[derive(Debug, Parser)]
#[command(
    name = "base-converter",
    version,
    after_help = "Example: base-converter 3.14159 -f 10 -t 16 -p 6"
)]
struct Args {
    /// Number to convert
    #[arg(allow_hyphen_values = true)]
    number: String,

    /// Source base
    #[arg(short, long = "from-base", default_value_t = 10)]
    from_base: u32,

    /// Target base
    #[arg(short, long = "to-base", default_value_t = 2)]
    to_base: u32,

    /// Fractional digits in the result (1-100)
    #[arg(short, long, default_value_t = 10)]
    precision: usize,

    /// Drop trailing zeros from the fractional part
    #[arg(long)]
    trim: bool,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> ConversionResult<String> {
    let style = if args.trim {
        FractionStyle::Trimmed
    } else {
        FractionStyle::Padded
    };
    let converter =
        BaseConverter::with_config(ConverterConfig::new(args.precision).with_fraction_style(style))?;
    converter.convert(args.number.as_str(), args.from_base, args.to_base, None)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let directive = if args.verbose { "base_converter=trace" } else { "warn" };
    if let Err(e) = base_converter::logging::init(directive) {
        eprintln!("Warning: {}", e);
    }

    match run(&args) {
        Ok(result) => {
            // bases were validated by the conversion, so the names exist
            let from = base_name(args.from_base).unwrap_or("unknown");
            let to = base_name(args.to_base).unwrap_or("unknown");
            println!("{} ({}) = {} ({})", args.number, from, result, to);
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "conversion failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("base-converter").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let parsed = args(&["3.5"]);
        assert_eq!(parsed.from_base, 10);
        assert_eq!(parsed.to_base, 2);
        assert_eq!(parsed.precision, 10);
        assert_eq!(run(&parsed).unwrap(), "11.1000000000");
    }

    #[test]
    fn test_flags() {
        let parsed = args(&["3.14159", "-f", "10", "-t", "16", "-p", "6", "--trim"]);
        assert_eq!(run(&parsed).unwrap(), "3.243F3E");
    }

    #[test]
    fn test_negative_number_is_not_a_flag() {
        let parsed = args(&["-5", "--to-base", "16"]);
        assert_eq!(run(&parsed).unwrap(), "-5");
        let parsed = args(&["-255", "--to-base", "16"]);
        assert_eq!(run(&parsed).unwrap(), "-FF");
    }

    #[test]
    fn test_core_errors_surface() {
        assert_eq!(
            run(&args(&["1", "-t", "3"])),
            Err(ConversionError::UnsupportedBase { base: 3 })
        );
        assert_eq!(
            run(&args(&["1.5", "-p", "0"])),
            Err(ConversionError::PrecisionRange { precision: 0 })
        );
    }
}
