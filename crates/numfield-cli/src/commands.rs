use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use numfield_core::{
    Admission, BlurSinks, ChangeLog, ControlValue, DiagnosticLog, Edit, HostField, KeyOutcome,
    KeyPress, NumericField, TextBuffer,
};
use numfield_model::FieldConfig;

use crate::logging::redact_value;
use crate::script::{Script, ScriptEvent};
use crate::types::{BlurResult, CheckResult, ReplayReport, ReplayStep};

/// What a single `check` feeds the field.
#[derive(Debug, Clone)]
pub enum CheckInput {
    Key(String),
    Paste(String),
}

#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub text: String,
    /// Caret in characters; `None` means end of text.
    pub caret: Option<usize>,
    pub select_all: bool,
    pub input: CheckInput,
}

#[derive(Debug, Clone, Default)]
pub struct BlurRequest {
    pub value: String,
    pub focus_value: String,
    /// Replaces the configured `prColin`.
    pub reference: Option<String>,
}

pub fn load_config(path: &Path) -> Result<FieldConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read field config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parse field config {}", path.display()))
}

pub fn parse_config(json: &str) -> Result<FieldConfig> {
    let config: FieldConfig = serde_json::from_str(json)?;
    Ok(config)
}

pub fn load_script(path: &Path) -> Result<Script> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read script {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse script {}", path.display()))
}

fn build_field(config: FieldConfig) -> Result<NumericField> {
    let name = config.name.clone();
    NumericField::new(config).with_context(|| format!("invalid configuration for field `{name}`"))
}

pub fn run_grammar(config: FieldConfig) -> Result<String> {
    let field = build_field(config)?;
    Ok(field.grammar().pattern().to_string())
}

pub fn run_check(config: FieldConfig, request: &CheckRequest) -> Result<CheckResult> {
    let field = build_field(config)?;
    let mut buffer = TextBuffer::new(field.config().name.clone()).with_text(request.text.clone());
    if request.select_all {
        buffer.select_all();
    } else if let Some(caret) = request.caret {
        buffer.set_caret(caret);
    }

    let mut diagnostics = DiagnosticLog::default();
    let outcome = match &request.input {
        CheckInput::Key(key) => {
            field.on_key_down(&buffer, &KeyPress::new(key.clone()), &mut diagnostics)
        }
        CheckInput::Paste(text) => {
            KeyOutcome::Filtered(field.on_paste(&buffer, text, &mut diagnostics))
        }
    };
    let proposal = match &request.input {
        CheckInput::Key(key) | CheckInput::Paste(key) => key.as_str(),
    };
    apply_outcome(&mut buffer, outcome, proposal);

    debug!(
        field = %field.config().name,
        rejected = outcome.suppresses(),
        "edit checked"
    );
    trace!(text = redact_value(buffer.text()), "checked text");
    Ok(CheckResult {
        proposed_text: buffer.text().to_string(),
        outcome,
        diagnostics: diagnostics.tags(),
    })
}

pub fn run_blur(mut config: FieldConfig, request: &BlurRequest) -> Result<BlurResult> {
    if let Some(reference) = &request.reference {
        config.reference_value = Some(reference.clone());
    }
    let mut field = build_field(config)?;
    let mut buffer =
        TextBuffer::new(field.config().name.clone()).with_text(request.focus_value.clone());
    field.on_focus(&buffer);
    buffer.set_text(&request.value);

    let mut diagnostics = DiagnosticLog::default();
    let mut changes = ChangeLog::default();
    let mut control = ControlValue::default();
    let event = field.on_blur(
        &mut buffer,
        BlurSinks::new(&mut diagnostics, &mut changes).with_control(&mut control),
    );
    info!(
        field = %event.name,
        blank = event.value.is_empty(),
        diagnostics = diagnostics.entries.len(),
        "value normalized"
    );
    trace!(
        raw = redact_value(&request.value),
        value = redact_value(&event.value),
        "normalized value"
    );
    Ok(BlurResult {
        raw: request.value.clone(),
        event,
        control_value: control.value,
        diagnostics: diagnostics.tags(),
        reference: field.reference_numeric(),
    })
}

pub fn run_replay(config: FieldConfig, script: &Script) -> Result<ReplayReport> {
    let mut field = build_field(config)?;
    let name = field.config().name.clone();
    let span = info_span!("replay", field = %name, events = script.events.len());
    let _guard = span.enter();

    let target = script.target.clone().unwrap_or_else(|| name.clone());
    let mut buffer = TextBuffer::new(target).with_text(script.initial_text.clone());
    let mut diagnostics = DiagnosticLog::default();
    let mut changes = ChangeLog::default();
    let mut control = ControlValue::default();
    let mut steps = Vec::with_capacity(script.events.len());

    for (index, event) in script.events.iter().enumerate() {
        let outcome = match event {
            ScriptEvent::Focus => {
                field.on_focus(&buffer);
                "focused".to_string()
            }
            ScriptEvent::Key { key, ctrl, meta } => {
                let mut press = KeyPress::new(key.clone());
                press.ctrl = *ctrl;
                press.meta = *meta;
                let outcome = field.on_key_down(&buffer, &press, &mut diagnostics);
                apply_outcome(&mut buffer, outcome, key);
                describe_outcome(outcome)
            }
            ScriptEvent::Paste { text } => {
                let admission = field.on_paste(&buffer, text, &mut diagnostics);
                apply_outcome(&mut buffer, KeyOutcome::Filtered(admission), text);
                describe_admission(admission)
            }
            ScriptEvent::Select { start, end } => {
                buffer.select(*start, *end);
                "selected".to_string()
            }
            ScriptEvent::Caret { position } => {
                buffer.set_caret(*position);
                "moved".to_string()
            }
            ScriptEvent::Backspace => {
                buffer.backspace();
                "deleted".to_string()
            }
            ScriptEvent::Blur => {
                let event = field.on_blur(
                    &mut buffer,
                    BlurSinks::new(&mut diagnostics, &mut changes).with_control(&mut control),
                );
                format!("changed to {:?}", event.value)
            }
        };
        debug!(step = index, event = %event, "script event applied");
        trace!(step = index, text = redact_value(buffer.text()), "field text");
        steps.push(ReplayStep {
            index,
            event: event.to_string(),
            outcome,
            text: buffer.text().to_string(),
        });
    }

    info!(
        steps = steps.len(),
        changes = changes.events.len(),
        diagnostics = diagnostics.entries.len(),
        "replay finished"
    );
    Ok(ReplayReport {
        field: name,
        steps,
        changes: changes.events,
        diagnostics: diagnostics.entries,
        control_value: control.value,
        final_text: buffer.text().to_string(),
    })
}

/// Apply what the host would do after the handler returned.
fn apply_outcome(buffer: &mut TextBuffer, outcome: KeyOutcome, proposal: &str) {
    match outcome {
        KeyOutcome::Filtered(Admission::Allow) => {
            let text = Edit::new(buffer.text(), buffer.selection(), proposal)
                .proposed_text()
                .to_string();
            buffer.insert(&text);
        }
        KeyOutcome::PassThrough if proposal == "Backspace" => buffer.backspace(),
        KeyOutcome::PassThrough | KeyOutcome::Paste | KeyOutcome::Filtered(_) => {}
    }
}

pub fn describe_outcome(outcome: KeyOutcome) -> String {
    match outcome {
        KeyOutcome::PassThrough => "passed through".to_string(),
        KeyOutcome::Paste => "paste shortcut".to_string(),
        KeyOutcome::Filtered(admission) => describe_admission(admission),
    }
}

fn describe_admission(admission: Admission) -> String {
    match admission {
        Admission::Allow => "allowed".to_string(),
        Admission::Suppress {
            diagnostic: Some(tag),
        } => format!("suppressed ({tag})"),
        Admission::Suppress { diagnostic: None } => "suppressed".to_string(),
    }
}
