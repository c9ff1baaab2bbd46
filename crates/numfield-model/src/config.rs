//! Field configuration supplied by the host when a field is initialized.

use serde::{Deserialize, Serialize};

use crate::enums::{ComparisonPolicy, FieldRole};
use crate::error::{ConfigError, Result};

/// Tokens accepted verbatim as whole-field values (e.g. `"NA"`).
///
/// Hosts pass either a single string or a list; both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OtherCharacters {
    One(String),
    Many(Vec<String>),
}

impl OtherCharacters {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            OtherCharacters::One(token) => std::slice::from_ref(token),
            OtherCharacters::Many(tokens) => tokens,
        };
        slice.iter().map(String::as_str)
    }

    /// Case-insensitive whole-token match. Surrounding whitespace is
    /// ignored on both sides, as in the acceptance grammar.
    pub fn matches(&self, value: &str) -> bool {
        let lower = value.trim().to_lowercase();
        self.tokens()
            .any(|token| token.trim().to_lowercase() == lower)
    }
}

impl From<&str> for OtherCharacters {
    fn from(value: &str) -> Self {
        OtherCharacters::One(value.to_string())
    }
}

impl From<Vec<String>> for OtherCharacters {
    fn from(value: Vec<String>) -> Self {
        OtherCharacters::Many(value)
    }
}

/// Immutable configuration of one numeric field.
///
/// JSON keys follow the host's attribute names (`countInt`, `prColin`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Identifier used in diagnostics and by the role heuristic.
    pub name: String,
    /// Upper bound on integer digits. `None` (or 0) means unbounded.
    pub count_int: Option<u32>,
    /// Upper bound on decimal digits. `None` (or 0) means no decimal part.
    pub count_decimal: Option<u32>,
    /// Restore the value captured at focus when the result is blank.
    pub with_default: bool,
    /// Allow a leading minus sign.
    pub with_negatives: bool,
    /// Allow a trailing percent sign.
    pub with_percentage: bool,
    /// Tokens accepted verbatim, bypassing the numeric grammar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_characters: Option<OtherCharacters>,
    /// Report `dec-max` when the decimal part is full.
    pub with_messages: bool,
    /// Inclusive lower bound. Only enforced together with `max`.
    pub min: Option<f64>,
    /// Inclusive upper bound. Only enforced together with `min`.
    pub max: Option<f64>,
    /// Value of the related column this field is compared against.
    #[serde(rename = "prColin", skip_serializing_if = "Option::is_none")]
    pub reference_value: Option<String>,
    #[serde(rename = "prefixCompare")]
    pub comparison_policy: ComparisonPolicy,
    /// Text emitted instead of a blank result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub null_value: Option<String>,
    /// Explicit range role. Falls back to [`FieldRole::from_name`] when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<FieldRole>,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_count_int(mut self, count: u32) -> Self {
        self.count_int = Some(count);
        self
    }

    pub fn with_count_decimal(mut self, count: u32) -> Self {
        self.count_decimal = Some(count);
        self
    }

    pub fn with_default(mut self, enable: bool) -> Self {
        self.with_default = enable;
        self
    }

    pub fn with_negatives(mut self, enable: bool) -> Self {
        self.with_negatives = enable;
        self
    }

    pub fn with_percentage(mut self, enable: bool) -> Self {
        self.with_percentage = enable;
        self
    }

    pub fn with_other_characters(mut self, tokens: impl Into<OtherCharacters>) -> Self {
        self.other_characters = Some(tokens.into());
        self
    }

    pub fn with_messages(mut self, enable: bool) -> Self {
        self.with_messages = enable;
        self
    }

    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_reference_value(mut self, value: impl Into<String>) -> Self {
        self.reference_value = Some(value.into());
        self
    }

    pub fn with_comparison_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.comparison_policy = policy;
        self
    }

    pub fn with_null_value(mut self, value: impl Into<String>) -> Self {
        self.null_value = Some(value.into());
        self
    }

    pub fn with_role(mut self, role: FieldRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Integer digit bound, treating 0 as unset.
    pub fn int_digits(&self) -> Option<u32> {
        self.count_int.filter(|count| *count > 0)
    }

    /// Decimal digit bound, treating 0 as unset.
    pub fn decimal_places(&self) -> Option<u32> {
        self.count_decimal.filter(|count| *count > 0)
    }

    /// Both bounds, or `None` when either is missing.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Reference value, if configured and not blank.
    pub fn reference(&self) -> Option<&str> {
        self.reference_value
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    pub fn effective_role(&self) -> FieldRole {
        self.role.unwrap_or_else(|| FieldRole::from_name(&self.name))
    }

    /// True when the value matches one of the verbatim tokens.
    pub fn is_other_token(&self, value: &str) -> bool {
        self.other_characters
            .as_ref()
            .is_some_and(|tokens| tokens.matches(value))
    }

    /// Check the configuration for combinations the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        for (bound, value) in [("min", self.min), ("max", self.max)] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteBound {
                    field: self.name.clone(),
                    bound,
                });
            }
        }
        if let Some((min, max)) = self.bounds()
            && min > max
        {
            return Err(ConfigError::InvalidBounds {
                field: self.name.clone(),
                min,
                max,
            });
        }
        if let Some(tokens) = &self.other_characters
            && tokens.tokens().any(|token| token.trim().is_empty())
        {
            return Err(ConfigError::EmptyToken {
                field: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_behave_as_unset() {
        let config = FieldConfig::new("amount")
            .with_count_int(0)
            .with_count_decimal(0);
        assert_eq!(config.int_digits(), None);
        assert_eq!(config.decimal_places(), None);
    }

    #[test]
    fn bounds_require_both_sides() {
        let config = FieldConfig::new("amount").with_bounds(Some(0.0), None);
        assert_eq!(config.bounds(), None);
        let config = config.with_bounds(Some(0.0), Some(100.0));
        assert_eq!(config.bounds(), Some((0.0, 100.0)));
    }

    #[test]
    fn blank_reference_is_ignored() {
        let config = FieldConfig::new("rangeFin").with_reference_value("  ");
        assert_eq!(config.reference(), None);
    }

    #[test]
    fn explicit_role_wins_over_name() {
        let config = FieldConfig::new("rangeInicio").with_role(FieldRole::Final);
        assert_eq!(config.effective_role(), FieldRole::Final);
        let config = FieldConfig::new("rangeInicio");
        assert_eq!(config.effective_role(), FieldRole::Initial);
    }

    #[test]
    fn other_tokens_match_case_insensitively() {
        let config = FieldConfig::new("score").with_other_characters(vec!["na".to_string()]);
        assert!(config.is_other_token("NA"));
        assert!(config.is_other_token("Na"));
        assert!(!config.is_other_token("n"));
    }

    #[test]
    fn other_tokens_ignore_surrounding_whitespace() {
        let config = FieldConfig::new("score").with_other_characters(vec![" na".to_string()]);
        assert!(config.is_other_token("na"));
        assert!(config.is_other_token(" NA "));
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let config = FieldConfig::new("amount").with_bounds(Some(10.0), Some(1.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_token() {
        let config = FieldConfig::new("amount").with_other_characters(" ");
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyToken {
                field: "amount".to_string()
            })
        );
    }
}
