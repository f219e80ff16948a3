// ============================================================================
// Conversion Properties
// Property-based checks over generated inputs
// ============================================================================

use super::{BaseConverter, ConverterConfig};
use proptest::prelude::*;

fn converter() -> BaseConverter {
    BaseConverter::default()
}

fn any_base() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![2u32, 8, 10, 16])
}

fn non_decimal_base() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![2u32, 8, 16])
}

proptest! {
    #[test]
    fn fraction_has_exactly_precision_digits(
        value in "[0-9]{1,12}\\.[0-9]{1,12}",
        base in any_base(),
        precision in 1usize..=100,
    ) {
        let result = converter().convert(value.as_str(), 10, base, Some(precision)).unwrap();
        let (_, fraction) = result.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), precision);
    }

    #[test]
    fn more_precision_never_changes_earlier_digits(
        value in "0\\.[0-9]{1,15}",
        base in non_decimal_base(),
        precision in 1usize..100,
    ) {
        let c = converter();
        let short = c.convert(value.as_str(), 10, base, Some(precision)).unwrap();
        let long = c.convert(value.as_str(), 10, base, Some(precision + 1)).unwrap();
        prop_assert!(long.starts_with(&short), "{} is not a prefix of {}", short, long);
    }

    #[test]
    fn binary_rationals_round_trip_exactly(
        integer in any::<u32>(),
        fraction in "[01]{1,20}",
        via in prop::sample::select(vec![8u32, 10, 16]),
    ) {
        let c = converter();
        let source = format!("{:b}.{}", integer, fraction);
        let there = c.convert(source.as_str(), 2, via, Some(30)).unwrap();
        let back = c.convert(there.as_str(), via, 2, Some(30)).unwrap();
        prop_assert_eq!(back, format!("{:b}.{:0<30}", integer, fraction));
    }

    #[test]
    fn scientific_expansion_matches_plain_digits(
        mantissa in any::<u32>(),
        exponent in 0usize..40,
        base in any_base(),
    ) {
        let c = converter();
        let scientific = format!("{}e{}", mantissa, exponent);
        let plain = format!("{}{}", mantissa, "0".repeat(exponent));
        prop_assert_eq!(
            c.convert(scientific.as_str(), 10, base, None).unwrap(),
            c.convert(plain.as_str(), 10, base, None).unwrap()
        );
    }

    #[test]
    fn negative_exponent_matches_leading_zeros(
        digits in "[1-9][0-9]{0,8}",
        exponent in 1usize..30,
    ) {
        let c = converter();
        let scientific = format!("0.{}e-{}", digits, exponent);
        let plain = format!("0.{}{}", "0".repeat(exponent), digits);
        prop_assert_eq!(
            c.decimal_to_hex(scientific.as_str(), Some(64)).unwrap(),
            c.decimal_to_hex(plain.as_str(), Some(64)).unwrap()
        );
    }

    #[test]
    fn zero_never_carries_a_sign(
        value in "[+-]?0{1,5}(\\.0{1,5})?",
        from in any_base(),
        to in any_base(),
    ) {
        for c in [converter(), BaseConverter::with_config(ConverterConfig::compact(4)).unwrap()] {
            let result = c.convert(value.as_str(), from, to, None).unwrap();
            prop_assert!(result.bytes().all(|b| b == b'0' || b == b'.'), "{}", result);
        }
    }

    #[test]
    fn conversion_is_deterministic(
        value in "-?[0-9A-F]{1,20}\\.[0-9A-F]{1,20}",
        to in any_base(),
    ) {
        let c = converter();
        let first = c.convert(value.as_str(), 16, to, Some(100)).unwrap();
        let second = c.convert(value.as_str(), 16, to, Some(100)).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn integers_match_std_formatting() {
    fn prop(n: i64) -> bool {
        let c = converter();
        let sign = if n < 0 { "-" } else { "" };
        let m = n.unsigned_abs();
        c.decimal_to_binary(n, None).ok() == Some(format!("{}{:b}", sign, m))
            && c.decimal_to_octal(n, None).ok() == Some(format!("{}{:o}", sign, m))
            && c.decimal_to_hex(n, None).ok() == Some(format!("{}{:X}", sign, m))
    }
    quickcheck::quickcheck(prop as fn(i64) -> bool);
}

#[test]
fn shared_converter_across_threads() {
    const PI_100: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

    let c = converter();
    let expected = c.decimal_to_hex(PI_100, Some(100)).unwrap();
    assert_eq!(
        expected,
        "3.243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89452821E638D01377BE48E6F51DA3F8B18EAF"
    );

    let shared = &c;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || shared.decimal_to_hex(PI_100, Some(100)).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
