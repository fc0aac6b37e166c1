//! Value parsers for human-formatted metrics
//!
//! Money strings ("$12.5M"), abbreviated counts ("2.4K") and plain counts
//! ("1,204") are turned into numeric values for the relational columns while
//! keeping the original text for display.
//!
//! Parsing is best-effort: anything that does not match resolves to zero and
//! never returns an error.

use once_cell::sync::Lazy;
use regex::Regex;

static SCALED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\d.]+)([kmb])?$").expect("valid scaled number pattern"));

/// Parsed money amount with its display text
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyValue {
    /// Amount in dollars, rounded to cents
    pub numeric: f64,
    /// Original input (or "0" when absent)
    pub text: String,
}

/// Parsed abbreviated count with its display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCount {
    pub count: i64,
    pub text: String,
}

fn multiplier(suffix: Option<&str>) -> f64 {
    match suffix {
        Some("k") => 1e3,
        Some("m") => 1e6,
        Some("b") => 1e9,
        _ => 1.0,
    }
}

/// Match a cleaned, lower-cased string against `digits[k|m|b]`
///
/// The whole string must match and the digit run must be one valid number,
/// so `"1.2.3m"` resolves to `None` rather than a prefix such as 1.2M.
fn parse_scaled(cleaned: &str) -> Option<f64> {
    let caps = SCALED_NUMBER.captures(cleaned)?;
    let base: f64 = caps.get(1)?.as_str().parse().ok()?;
    Some(base * multiplier(caps.get(2).map(|m| m.as_str())))
}

fn display_text(input: Option<&str>) -> String {
    match input {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "0".to_string(),
    }
}

/// Parse a money string such as `"$12.5M"` or `"$820K"`
pub fn parse_money_string(input: Option<&str>) -> MoneyValue {
    let text = display_text(input);
    let cleaned: String = input
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect::<String>()
        .trim()
        .to_lowercase();

    let numeric = parse_scaled(&cleaned)
        .map(|v| (v * 100.0).round() / 100.0)
        .unwrap_or(0.0);

    MoneyValue { numeric, text }
}

/// Parse an abbreviated user count such as `"2.4K"` or `"156"`
pub fn parse_user_count(input: Option<&str>) -> UserCount {
    let text = display_text(input);
    let cleaned: String = input
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let count = parse_scaled(&cleaned).map(|v| v.round() as i64).unwrap_or(0);

    UserCount { count, text }
}

/// Parse a plain integer count such as `"1,204"`; no suffixes
///
/// Leading digits are taken, so `"12 opinions"` parses as 12.
pub fn parse_opinion_count(input: Option<&str>) -> i64 {
    let cleaned: String = input
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    let digits: String = cleaned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
