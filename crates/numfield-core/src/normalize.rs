//! Blur-time normalization of the field text.
//!
//! Turns whatever the user left in the field into its canonical display
//! form: verbatim tokens upper-cased, numbers fixed to the configured
//! precision with a comma decimal mark, out-of-range or out-of-order values
//! blanked. Default and null substitution happen afterwards in
//! [`crate::field::NumericField::on_blur`], since they depend on runtime
//! state and the host.

use numfield_model::{DiagnosticTag, FieldConfig};

use crate::compare::{Verdict, compare, parse_reference, same_kind};
use crate::number::{
    DEGENERATE_INPUTS, fix_precision, is_blank, pad_leading_point, parse_number, unify_separator,
};

/// Result of normalizing one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Display text, possibly empty.
    pub value: String,
    /// Why the value was blanked, if it was.
    pub diagnostic: Option<DiagnosticTag>,
    /// Numeric reference used for the cross-field check, when one ran.
    pub reference: Option<f64>,
}

impl Normalized {
    fn plain(value: String) -> Self {
        Self {
            value,
            diagnostic: None,
            reference: None,
        }
    }
}

/// Normalize `raw` under `config`.
pub fn normalize(config: &FieldConfig, raw: &str) -> Normalized {
    if config.is_other_token(raw) {
        return Normalized::plain(raw.trim().to_uppercase());
    }

    let unified = unify_separator(raw);

    let has_percent = unified.contains('%');
    let body: String = unified.chars().filter(|c| *c != '%').collect();
    let mut value = format_value(&body, config.decimal_places());

    if !within_bounds(config, &value) {
        let diagnostic = (!is_blank(raw)).then_some(DiagnosticTag::OutOfRange);
        return Normalized {
            value: String::new(),
            diagnostic,
            reference: None,
        };
    }

    let mut diagnostic = None;
    let mut reference_numeric = None;
    if let Some(reference) = config.reference()
        && same_kind(reference, has_percent)
        && let Some(reference) = parse_reference(reference)
    {
        reference_numeric = Some(reference);
        if let Some(current) = parse_number(&value)
            && let Verdict::Reject(tag) = compare(
                current,
                reference,
                config.comparison_policy,
                config.effective_role(),
            )
        {
            value.clear();
            diagnostic = Some(tag);
        }
    }

    Normalized {
        value: to_display(&value, has_percent),
        diagnostic,
        reference: reference_numeric,
    }
}

/// Canonical numeric text (period decimal mark, no percent sign).
///
/// Degenerate partial input and anything that is not a plain decimal number
/// collapse to empty.
pub fn format_value(text: &str, places: Option<u32>) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || DEGENERATE_INPUTS.contains(&trimmed) {
        return String::new();
    }
    let padded = pad_leading_point(trimmed);
    match places {
        Some(places) => fix_precision(&padded, places).unwrap_or_default(),
        None if parse_number(&padded).is_some() => padded,
        None => String::new(),
    }
}

/// Clamp check. Passes unless both bounds are set and the value lies
/// strictly outside them; empty values always pass.
pub fn within_bounds(config: &FieldConfig, value: &str) -> bool {
    match (config.bounds(), parse_number(value)) {
        (Some((min, max)), Some(number)) => number >= min && number <= max,
        _ => true,
    }
}

fn to_display(value: &str, has_percent: bool) -> String {
    let mut display = value.replace('.', ",");
    if has_percent && !display.is_empty() {
        display.push('%');
    }
    display
}
