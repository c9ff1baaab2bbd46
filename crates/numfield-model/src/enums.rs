//! Type-safe enumerations for the numeric field configuration surface.
//!
//! The host configuration historically passes these as bare strings
//! (`"GREAT"`, `"prIni"`, ...). Each enum keeps the wire spelling available
//! through `as_str` and accepts it back through `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering policy used by the cross-field comparison.
///
/// The names describe what an *initial* field rejects; a *final* field
/// rejects the mirror ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonPolicy {
    /// Initial field rejects `value >= reference`, final field rejects `value <= reference`.
    #[default]
    #[serde(alias = "GREAT", alias = "great")]
    GreaterOrEqualRejects,
    /// Initial field rejects `value <= reference`, final field rejects `value >= reference`.
    #[serde(alias = "LESS", alias = "less")]
    LessOrEqualRejects,
}

impl ComparisonPolicy {
    /// Returns the short code used by host configurations.
    pub fn as_code(&self) -> &'static str {
        match self {
            ComparisonPolicy::GreaterOrEqualRejects => "GREAT",
            ComparisonPolicy::LessOrEqualRejects => "LESS",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonPolicy::GreaterOrEqualRejects => "greater-or-equal-rejects",
            ComparisonPolicy::LessOrEqualRejects => "less-or-equal-rejects",
        }
    }
}

impl fmt::Display for ComparisonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComparisonPolicy {
    type Err = String;

    /// Accepts both the short codes (`GREAT`, `LESS`) and the descriptive names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('_', "-");

        match normalized.as_str() {
            "GREAT" | "GREATER-OR-EQUAL-REJECTS" => Ok(ComparisonPolicy::GreaterOrEqualRejects),
            "LESS" | "LESS-OR-EQUAL-REJECTS" => Ok(ComparisonPolicy::LessOrEqualRejects),
            _ => Err(format!("Unknown comparison policy: {s}")),
        }
    }
}

/// Role of a field inside a range pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldRole {
    /// Start of a range.
    Initial,
    /// End of a range.
    Final,
}

impl FieldRole {
    /// Marker token that identifies an initial field by name.
    pub const INITIAL_MARKER: &'static str = "INI";

    /// Derive the role from a field name: names containing [`Self::INITIAL_MARKER`]
    /// (case-insensitive) are initial, everything else is final.
    pub fn from_name(name: &str) -> Self {
        if name.to_uppercase().contains(Self::INITIAL_MARKER) {
            FieldRole::Initial
        } else {
            FieldRole::Final
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRole::Initial => "initial",
            FieldRole::Final => "final",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "initial" | "ini" => Ok(FieldRole::Initial),
            "final" | "fin" => Ok(FieldRole::Final),
            _ => Err(format!("Unknown field role: {s}")),
        }
    }
}

/// Reason a value was rejected or an edit was limited.
///
/// Tags are delivered to the diagnostic sink together with the field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticTag {
    /// The decimal part already holds the configured number of digits.
    #[serde(rename = "dec-max")]
    DecimalLimit,
    /// The value fell outside `[min, max]`.
    #[serde(rename = "max-min")]
    OutOfRange,
    /// An initial field failed the cross-field comparison.
    #[serde(rename = "prIni")]
    InitialOrdering,
    /// A final field failed the cross-field comparison.
    #[serde(rename = "prFin")]
    FinalOrdering,
}

impl DiagnosticTag {
    /// Returns the tag as the host expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticTag::DecimalLimit => "dec-max",
            DiagnosticTag::OutOfRange => "max-min",
            DiagnosticTag::InitialOrdering => "prIni",
            DiagnosticTag::FinalOrdering => "prFin",
        }
    }

    /// Ordering tag matching a field role.
    pub fn for_role(role: FieldRole) -> Self {
        match role {
            FieldRole::Initial => DiagnosticTag::InitialOrdering,
            FieldRole::Final => DiagnosticTag::FinalOrdering,
        }
    }
}

impl fmt::Display for DiagnosticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiagnosticTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dec-max" => Ok(DiagnosticTag::DecimalLimit),
            "max-min" => Ok(DiagnosticTag::OutOfRange),
            "prIni" => Ok(DiagnosticTag::InitialOrdering),
            "prFin" => Ok(DiagnosticTag::FinalOrdering),
            _ => Err(format!("Unknown diagnostic tag: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_policy_from_str() {
        assert_eq!(
            "GREAT".parse::<ComparisonPolicy>().unwrap(),
            ComparisonPolicy::GreaterOrEqualRejects
        );
        assert_eq!(
            "less".parse::<ComparisonPolicy>().unwrap(),
            ComparisonPolicy::LessOrEqualRejects
        );
        assert_eq!(
            "less_or_equal_rejects".parse::<ComparisonPolicy>().unwrap(),
            ComparisonPolicy::LessOrEqualRejects
        );
        assert!("sideways".parse::<ComparisonPolicy>().is_err());
    }

    #[test]
    fn test_role_from_name() {
        assert_eq!(FieldRole::from_name("RangeInicio"), FieldRole::Initial);
        assert_eq!(FieldRole::from_name("valorIni"), FieldRole::Initial);
        assert_eq!(FieldRole::from_name("RangeFin"), FieldRole::Final);
        assert_eq!(FieldRole::from_name(""), FieldRole::Final);
    }

    #[test]
    fn test_diagnostic_tag_round_trip_strings() {
        for tag in [
            DiagnosticTag::DecimalLimit,
            DiagnosticTag::OutOfRange,
            DiagnosticTag::InitialOrdering,
            DiagnosticTag::FinalOrdering,
        ] {
            assert_eq!(tag.as_str().parse::<DiagnosticTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_tag_for_role() {
        assert_eq!(
            DiagnosticTag::for_role(FieldRole::Initial),
            DiagnosticTag::InitialOrdering
        );
        assert_eq!(
            DiagnosticTag::for_role(FieldRole::Final),
            DiagnosticTag::FinalOrdering
        );
    }
}
