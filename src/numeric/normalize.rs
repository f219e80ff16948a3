// ============================================================================
// Input Normalizer
// Turns raw numeral text into a canonical sign / integer / fraction split
// ============================================================================
//
// Order of operations:
// 1. Trim whitespace, enforce the input length limit
// 2. Strip sign and base prefix (either order, each at most once)
// 3. Expand decimal scientific notation into plain digits (exact, string based)
// 4. Split on the radix point
// 5. Validate every digit against the declared base

use super::errors::{ConversionError, ConversionResult};
use super::validate::{validate_base, validate_digits, validate_length, Digits};

/// Default cap on input length, in characters after trimming
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 4096;

/// Default cap on the magnitude of a scientific-notation exponent
pub const DEFAULT_MAX_EXPONENT: u32 = 10_000;

/// Sign of a parsed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// Bounds on how much work a single input may cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum characters after trimming
    pub max_input_length: usize,
    /// Maximum absolute exponent in scientific notation
    pub max_exponent: u32,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            max_exponent: DEFAULT_MAX_EXPONENT,
        }
    }
}

/// Canonical decomposition of a numeral.
///
/// Digit sequences hold digit *values* (not characters), most-significant
/// first, each guaranteed to be below `base`. An empty integer part means zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    sign: Sign,
    base: u32,
    integer_digits: Digits,
    fraction_digits: Digits,
}

impl ParsedNumber {
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer_digits
    }

    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        &self.fraction_digits
    }

    /// True if the input carried at least one digit after the radix point.
    #[inline]
    pub fn has_fraction(&self) -> bool {
        !self.fraction_digits.is_empty()
    }

    /// True if every digit is zero (the sign is irrelevant).
    pub fn is_zero(&self) -> bool {
        self.integer_digits
            .iter()
            .chain(self.fraction_digits.iter())
            .all(|&d| d == 0)
    }
}

/// Parse `raw` as a numeral in `base`.
///
/// # Errors
/// - `UnsupportedBase` if `base` is not 2, 8, 10 or 16
/// - `InvalidFormat` for empty input, a second radix point, stray symbols or oversize input
/// - `InvalidDigit` for digits outside the base
/// - `ScientificNotation` for malformed exponents or exponents outside base 10
///
/// # Example
/// ```
/// use base_converter::numeric::{normalize, ParseLimits, Sign};
///
/// let parsed = normalize("-0x1F.8", 16, &ParseLimits::default()).unwrap();
/// assert_eq!(parsed.sign(), Sign::Negative);
/// assert_eq!(parsed.integer_digits(), &[1, 15]);
/// assert_eq!(parsed.fraction_digits(), &[8]);
/// ```
pub fn normalize(raw: &str, base: u32, limits: &ParseLimits) -> ConversionResult<ParsedNumber> {
    let base = validate_base(base)?;
    let trimmed = raw.trim();
    validate_length(trimmed, limits.max_input_length)?;
    if trimmed.is_empty() {
        return Err(ConversionError::invalid_format("empty input"));
    }

    let (mut sign, mut body) = match split_sign(trimmed) {
        Some((sign, rest)) => (Some(sign), rest),
        None => (None, trimmed),
    };
    if let Some(rest) = strip_base_prefix(body, base) {
        body = rest;
        if sign.is_none() {
            if let Some((s, rest)) = split_sign(body) {
                sign = Some(s);
                body = rest;
            }
        }
    }
    let sign = sign.unwrap_or_default();

    // 'E' is a hex digit, so exponents are only looked for outside base 16
    if base != 16 && body.contains(['e', 'E']) {
        if base != 10 {
            return Err(ConversionError::scientific(format!(
                "exponent notation is only supported for decimal input, got base {}",
                base
            )));
        }
        let (int_text, frac_text) = expand_scientific(body, limits.max_exponent)?;
        return Ok(ParsedNumber {
            sign,
            base,
            integer_digits: validate_digits(&int_text, base, 0)?,
            fraction_digits: validate_digits(&frac_text, base, 0)?,
        });
    }

    let offset = trimmed.len() - body.len();
    let (int_text, frac_text) = body.split_once('.').unwrap_or((body, ""));
    if frac_text.contains('.') {
        return Err(ConversionError::invalid_format("multiple radix points"));
    }
    if int_text.is_empty() && frac_text.is_empty() {
        return Err(ConversionError::invalid_format("no digits"));
    }

    Ok(ParsedNumber {
        sign,
        base,
        integer_digits: validate_digits(int_text, base, offset)?,
        fraction_digits: validate_digits(frac_text, base, offset + int_text.len() + 1)?,
    })
}

fn split_sign(text: &str) -> Option<(Sign, &str)> {
    if let Some(rest) = text.strip_prefix('-') {
        Some((Sign::Negative, rest))
    } else {
        text.strip_prefix('+').map(|rest| (Sign::Positive, rest))
    }
}

/// Strip `0b`/`0o`/`0x` (any case) when it matches the declared base.
fn strip_base_prefix(text: &str, base: u32) -> Option<&str> {
    let marker = match base {
        2 => b'b',
        8 => b'o',
        16 => b'x',
        _ => return None,
    };
    match text.as_bytes() {
        [b'0', m, ..] if m.to_ascii_lowercase() == marker => Some(&text[2..]),
        _ => None,
    }
}

/// Expand `<mantissa>(e|E)[+-]<digits>` into plain integer and fraction digit text.
///
/// Works purely on the digit string: the radix point is moved by the exponent
/// and zeros are padded on whichever side runs out, so no precision is lost.
pub fn expand_scientific(text: &str, max_exponent: u32) -> ConversionResult<(String, String)> {
    let (mantissa, exponent) = text
        .split_once(['e', 'E'])
        .ok_or_else(|| ConversionError::scientific("missing exponent marker"))?;
    let exponent = parse_exponent(exponent, max_exponent)?;

    let (m_int, m_frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if m_int.is_empty() && m_frac.is_empty() {
        return Err(ConversionError::scientific("mantissa has no digits"));
    }
    if !m_int.bytes().chain(m_frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::scientific(format!(
            "mantissa '{}' is not a decimal number",
            mantissa
        )));
    }

    let mut digits = String::with_capacity(m_int.len() + m_frac.len());
    digits.push_str(m_int);
    digits.push_str(m_frac);

    let point = m_int.len() as i64 + exponent;
    let len = digits.len() as i64;
    if point <= 0 {
        let mut fraction = "0".repeat((-point) as usize);
        fraction.push_str(&digits);
        Ok((String::new(), fraction))
    } else if point >= len {
        digits.push_str(&"0".repeat((point - len) as usize));
        Ok((digits, String::new()))
    } else {
        let fraction = digits.split_off(point as usize);
        Ok((digits, fraction))
    }
}

fn parse_exponent(text: &str, max_exponent: u32) -> ConversionResult<i64> {
    let (negative, digits) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    };
    if digits.is_empty() {
        return Err(ConversionError::scientific("missing exponent digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::scientific(format!(
            "exponent '{}' is not an integer",
            text
        )));
    }

    let significant = digits.trim_start_matches('0');
    let magnitude = if significant.is_empty() {
        0
    } else {
        significant
            .parse::<u32>()
            .ok()
            .filter(|&m| m <= max_exponent)
            .ok_or_else(|| {
                ConversionError::scientific(format!(
                    "exponent magnitude exceeds limit of {}",
                    max_exponent
                ))
            })?
    };

    Ok(if negative {
        -i64::from(magnitude)
    } else {
        i64::from(magnitude)
    })
}
