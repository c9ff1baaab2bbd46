use numfield_core::KeyOutcome;
use numfield_model::{ChangeEvent, DiagnosticTag};

#[derive(Debug)]
pub struct CheckResult {
    /// Text the field would hold if the host applied the edit.
    pub proposed_text: String,
    pub outcome: KeyOutcome,
    pub diagnostics: Vec<DiagnosticTag>,
}

impl CheckResult {
    pub fn is_rejected(&self) -> bool {
        self.outcome.suppresses()
    }
}

#[derive(Debug)]
pub struct BlurResult {
    pub raw: String,
    pub event: ChangeEvent,
    /// Value pushed to the bound form control.
    pub control_value: Option<String>,
    pub diagnostics: Vec<DiagnosticTag>,
    pub reference: Option<f64>,
}

#[derive(Debug)]
pub struct ReplayStep {
    pub index: usize,
    pub event: String,
    pub outcome: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct ReplayReport {
    pub field: String,
    pub steps: Vec<ReplayStep>,
    pub changes: Vec<ChangeEvent>,
    pub diagnostics: Vec<(String, DiagnosticTag)>,
    pub control_value: Option<String>,
    pub final_text: String,
}

impl ReplayReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
