//! Decimal display formatting.

use bigdecimal::{BigDecimal, RoundingMode};
use strata_json_core::{Error, Result};

/// Format `value` with `precision` fraction digits, rounding half-even.
///
/// Zero (and an absent value) renders as `0` plus the fraction digits.
/// Anything else gets thousands separators and at least three integer
/// digits, e.g. `1234.5` at precision 2 is `1,234.50` and `5` is `005`.
pub fn format_currency(value: Option<&BigDecimal>, precision: i64) -> Result<String> {
    if precision < 0 {
        return Err(Error::InvalidArgument(format!(
            "precision must not be negative, got {}",
            precision
        )));
    }
    let zero = BigDecimal::from(0i64);
    let value = value.unwrap_or(&zero);
    let min_integer_digits = if *value == zero { 1 } else { 3 };
    let grouped = *value != zero;

    let rounded = value.with_scale_round(precision, RoundingMode::HalfEven);
    let (digits, scale) = rounded.as_bigint_and_exponent();
    let digits = digits.to_string();
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.as_str()),
    };

    // scale == precision here, so the last `precision` digits are the fraction
    let scale = scale as usize;
    let padded = format!("{:0>width$}", digits, width = scale + min_integer_digits);
    let (integer, fraction) = padded.split_at(padded.len() - scale);

    let mut out = String::with_capacity(padded.len() + padded.len() / 3 + 2);
    if negative && digits.bytes().any(|b| b != b'0') {
        out.push('-');
    }
    if grouped {
        out.push_str(&group_thousands(integer));
    } else {
        out.push_str(integer);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    Ok(out)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
