//! Numeric parsing for command-line option values
//!
//! The permissive parsers read the longest numeric prefix of a value and never
//! fail: an integer with no leading digits is absent, a real with no leading
//! decimal literal is NaN. The strict parsers accept only a complete, finite,
//! positive number and report anything else as an invalid parameter.

use crate::io::error::{Result, invalid_parameter};

/// Parse the leading decimal integer of `text`
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// ASCII digits. Anything after the digits is ignored, so `"12px"` is 12 and
/// `"7.9"` is 7. Returns `None` when no digit follows the sign. Magnitudes
/// beyond `i64` saturate.
pub fn parse_integer(text: &str) -> Option<i64> {
    let (negative, rest) = split_sign(text.trim_start());
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0_i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });

    Some(if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    })
}

/// Parse the leading decimal literal of `text`
///
/// Accepts leading whitespace, a single sign, then either `Infinity` or the
/// longest prefix shaped like `digits[.digits][e[sign]digits]` (the integer
/// or fraction part may be empty, not both). Returns NaN when no such prefix
/// exists.
pub fn parse_real(text: &str) -> f64 {
    let (negative, rest) = split_sign(text.trim_start());

    let magnitude = if rest.starts_with("Infinity") {
        f64::INFINITY
    } else {
        decimal_prefix(rest)
            .and_then(|literal| literal.parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    };

    if negative { -magnitude } else { magnitude }
}

/// Parse a complete, strictly positive integer
///
/// # Errors
///
/// Returns `InvalidParameter` if `text` is not an integer or is not positive
pub fn strict_integer(parameter: &'static str, text: &str) -> Result<i64> {
    let value = text
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid_parameter(parameter, &text, &e))?;

    if value <= 0 {
        return Err(invalid_parameter(parameter, &text, &"must be positive"));
    }

    Ok(value)
}

/// Parse a complete, finite, strictly positive real
///
/// # Errors
///
/// Returns `InvalidParameter` if `text` is not a number, is not finite, or is
/// not positive
pub fn strict_real(parameter: &'static str, text: &str) -> Result<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid_parameter(parameter, &text, &e))?;

    if !value.is_finite() {
        return Err(invalid_parameter(parameter, &text, &"must be finite"));
    }
    if value <= 0.0 {
        return Err(invalid_parameter(parameter, &text, &"must be positive"));
    }

    Ok(value)
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn leading_digits(text: &str) -> &str {
    let end = count_digits(text.as_bytes(), 0);
    text.get(..end).unwrap_or_default()
}

/// Number of consecutive ASCII digits in `bytes` starting at `start`
fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .iter()
        .skip(start)
        .take_while(|byte| byte.is_ascii_digit())
        .count()
}

fn decimal_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();

    let integer_digits = count_digits(bytes, 0);
    let mut end = integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(bytes, end + 1);
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows the marker
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_digits = count_digits(bytes, cursor);
        if exponent_digits > 0 {
            end = cursor + exponent_digits;
        }
    }

    text.get(..end)
}
