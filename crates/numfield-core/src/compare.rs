//! Cross-field ordering check against a related column's value.

use numfield_model::{ComparisonPolicy, DiagnosticTag, FieldRole};

use crate::number::{parse_number, unify_separator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Reject(DiagnosticTag),
}

/// Compare `value` with `reference` for a field playing `role`.
///
/// | role    | greater-or-equal-rejects | less-or-equal-rejects |
/// |---------|--------------------------|-----------------------|
/// | initial | `value >= reference`     | `value <= reference`  |
/// | final   | `value <= reference`     | `value >= reference`  |
pub fn compare(value: f64, reference: f64, policy: ComparisonPolicy, role: FieldRole) -> Verdict {
    let rejected = match (role, policy) {
        (FieldRole::Initial, ComparisonPolicy::GreaterOrEqualRejects)
        | (FieldRole::Final, ComparisonPolicy::LessOrEqualRejects) => value >= reference,
        (FieldRole::Initial, ComparisonPolicy::LessOrEqualRejects)
        | (FieldRole::Final, ComparisonPolicy::GreaterOrEqualRejects) => value <= reference,
    };
    if rejected {
        Verdict::Reject(DiagnosticTag::for_role(role))
    } else {
        Verdict::Pass
    }
}

/// Numeric form of a reference value such as `"50"`, `"12,5"` or `"40%"`.
pub fn parse_reference(reference: &str) -> Option<f64> {
    let stripped: String = reference.chars().filter(|c| *c != '%').collect();
    parse_number(&unify_separator(&stripped))
}

/// References are only comparable with values of the same kind: both
/// percentages or both plain numbers.
pub fn same_kind(reference: &str, value_has_percent: bool) -> bool {
    reference.contains('%') == value_has_percent
}
