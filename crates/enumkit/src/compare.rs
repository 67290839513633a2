//! The shared value comparator.
//!
//! Every membership and filtering operation goes through [`values_match`], so
//! strict and loose matching behave identically in `has_value`,
//! `only_values` and `except_values`.
//!
//! - Strict: same scalar type and same content. `1` never equals `"1"`.
//! - Loose: when both sides are numeric (integers, floats, or strings holding
//!   a decimal number) they compare as numbers, so `1 == "1" == 1.0 == "01"`.
//!   Otherwise two strings compare exactly and every other pairing is unequal.

use crate::value::Value;

/// Canonical numeric form used by loose comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn eq_numeric(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(a), Number::Float(b)) | (Number::Float(b), Number::Int(a)) => {
                (a as f64) == b
            }
        }
    }
}

/// Compare two values under the strict or loose rule.
pub fn values_match(a: &Value<'_>, b: &Value<'_>, strict: bool) -> bool {
    if strict {
        return a == b;
    }

    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.eq_numeric(y),
        _ => match (a, b) {
            (Value::Str(x), Value::Str(y)) => x == y,
            _ => false,
        },
    }
}

/// True if `needle` matches any value in `haystack`.
pub fn contains_match<'h, 'v: 'h, I>(haystack: I, needle: &Value<'_>, strict: bool) -> bool
where
    I: IntoIterator<Item = &'h Value<'v>>,
{
    haystack
        .into_iter()
        .any(|candidate| values_match(candidate, needle, strict))
}

pub(crate) fn numeric(value: &Value<'_>) -> Option<Number> {
    match value {
        Value::Int(n) => Some(Number::Int(*n)),
        Value::Float(x) if x.is_finite() => Some(Number::Float(*x)),
        Value::Float(_) => None,
        Value::Str(s) => parse_numeric_str(s),
    }
}

/// Parse a decimal numeric string: optional sign, digits, optional fraction
/// and exponent, surrounded by optional ASCII whitespace.
fn parse_numeric_str(s: &str) -> Option<Number> {
    let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Number::Int(n));
    }
    match trimmed.parse::<f64>() {
        Ok(x) if x.is_finite() => Some(Number::Float(x)),
        _ => None,
    }
}
