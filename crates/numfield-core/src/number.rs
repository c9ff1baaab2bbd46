//! Numeric text helpers shared by the normalizer and the comparator.
//!
//! Field text uses `,` or `.` as decimal mark. Everything here works on the
//! period form; callers swap separators at the edges.

/// Partial inputs that carry no number and normalize to empty.
pub const DEGENERATE_INPUTS: &[&str] = &[".", "-", "-.", ".-"];

/// True for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Treat every comma as a decimal period.
pub fn unify_separator(text: &str) -> String {
    text.replace(',', ".")
}

/// Parse plain decimal notation: optional leading `-`, digits, at most one `.`.
///
/// Exponents, `inf`/`NaN`, signs other than a leading minus and anything
/// that overflows to infinity are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if digits.matches('.').count() > 1 {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Prefix a zero to a bare leading decimal point (`.5` → `0.5`, `-.5` → `-0.5`).
pub fn pad_leading_point(text: &str) -> String {
    if let Some(rest) = text.strip_prefix("-.") {
        format!("-0.{rest}")
    } else if let Some(rest) = text.strip_prefix('.') {
        format!("0.{rest}")
    } else {
        text.to_string()
    }
}

/// Render `text` with exactly `places` decimals.
///
/// Rounds the exact binary value; exact ties go to even. A result that
/// rounds to zero is rendered without a sign.
pub fn fix_precision(text: &str, places: u32) -> Option<String> {
    let number = parse_number(text)?;
    let rendered = format!("{:.*}", places as usize, number);
    Some(strip_negative_zero(rendered))
}

fn strip_negative_zero(rendered: String) -> String {
    match rendered.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => rendered,
    }
}
