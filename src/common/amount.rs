use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;

/// Characters that make up the amount part of a token.
pub fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Parses amount text as an exact decimal.
///
/// Returns `None` for blank text and for anything that is not a decimal
/// number. Surrounding whitespace is ignored.
pub fn parse_amount(text: &str) -> Option<BigDecimal> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    BigDecimal::from_str(&with_bare_point_padded(t)).ok()
}

// "5." and ".5" are complete amounts while typing; give the point a digit on
// each side before handing the text to the decimal parser.
fn with_bare_point_padded(t: &str) -> String {
    let (sign, body) = match t.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", t),
    };
    if body == "." || !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return t.to_string();
    }
    let mut out = String::with_capacity(t.len() + 2);
    out.push_str(sign);
    if body.starts_with('.') {
        out.push('0');
    }
    out.push_str(body);
    if body.ends_with('.') {
        out.push('0');
    }
    out
}

/// Reports whether `text` is acceptable as an entry amount.
///
/// Blank text is accepted: it is an amount that has not been typed yet.
/// Otherwise the text must parse as a decimal that is not negative.
///
/// # Examples
/// ```
/// use expense_splitter::common::amount::is_valid_amount;
///
/// assert!(is_valid_amount(""));
/// assert!(is_valid_amount("12.5"));
/// assert!(!is_valid_amount("-5"));
/// assert!(!is_valid_amount("1.2.3"));
/// ```
pub fn is_valid_amount(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    match parse_amount(text) {
        Some(value) => value >= BigDecimal::zero(),
        None => false,
    }
}
