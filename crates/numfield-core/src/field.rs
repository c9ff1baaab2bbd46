//! Runtime state of one numeric field and its event handlers.

use numfield_model::{ChangeEvent, DiagnosticTag, FieldConfig};
use tracing::{debug, warn};

use crate::admission::{Admission, Edit, admit};
use crate::error::Result;
use crate::grammar::Grammar;
use crate::host::HostField;
use crate::keys::{KeyPress, KeyRoute, route};
use crate::normalize::normalize;
use crate::number::is_blank;
use crate::sink::{BlurSinks, DiagnosticSink};

/// What the keydown handler decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Navigation or shortcut; the host applies it.
    PassThrough,
    /// Paste shortcut; admission happens on the paste event.
    Paste,
    /// The key went through the admission filter.
    Filtered(Admission),
}

impl KeyOutcome {
    /// True when the host must cancel the key's default action.
    pub fn suppresses(&self) -> bool {
        matches!(self, KeyOutcome::Filtered(Admission::Suppress { .. }))
    }
}

/// A numeric field bound to one configuration.
///
/// The grammar is compiled in [`NumericField::new`] and fixed for the
/// field's lifetime; a changed configuration needs a new field.
#[derive(Debug, Clone)]
pub struct NumericField {
    config: FieldConfig,
    grammar: Grammar,
    value_at_focus: String,
    reference_numeric: Option<f64>,
}

impl NumericField {
    /// Validate `config` and compile its grammar.
    pub fn new(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        let grammar = Grammar::build(&config)?;
        Ok(Self {
            config,
            grammar,
            value_at_focus: String::new(),
            reference_numeric: None,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Text captured at the last focus.
    pub fn value_at_focus(&self) -> &str {
        &self.value_at_focus
    }

    /// Reference value used by the last cross-field check.
    pub fn reference_numeric(&self) -> Option<f64> {
        self.reference_numeric
    }

    /// Capture the host text for default restoration on blur.
    pub fn on_focus(&mut self, host: &dyn HostField) {
        self.value_at_focus = host.text().to_string();
    }

    /// Route a keydown and run the admission filter on printable keys.
    pub fn on_key_down(
        &self,
        host: &dyn HostField,
        key: &KeyPress,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> KeyOutcome {
        match route(key) {
            KeyRoute::PassThrough => KeyOutcome::PassThrough,
            KeyRoute::Paste => KeyOutcome::Paste,
            KeyRoute::Filter => KeyOutcome::Filtered(self.check(host, &key.key, diagnostics)),
        }
    }

    /// Admit or reject clipboard text as a whole.
    pub fn on_paste(
        &self,
        host: &dyn HostField,
        clipboard: &str,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Admission {
        self.check(host, clipboard, diagnostics)
    }

    /// Normalize the host text, write it back and emit the change event.
    pub fn on_blur(&mut self, host: &mut dyn HostField, sinks: BlurSinks<'_>) -> ChangeEvent {
        let normalized = normalize(&self.config, host.text());
        if normalized.reference.is_some() {
            self.reference_numeric = normalized.reference;
        }
        if let Some(tag) = normalized.diagnostic {
            self.report(sinks.diagnostics, tag);
        }

        let mut value = normalized.value;
        if value.is_empty() && self.config.with_default {
            value.clone_from(&self.value_at_focus);
        }
        host.set_text(&value);
        if let Some(control) = sinks.control {
            control.set_value(&value);
        }
        if let Some(null_value) = &self.config.null_value
            && is_blank(&value)
        {
            value.clone_from(null_value);
        }

        debug!(
            field = %self.config.name,
            blank = value.is_empty(),
            rejected = normalized.diagnostic.is_some(),
            "field normalized on blur"
        );
        let event = ChangeEvent {
            value,
            name: self.config.name.clone(),
            target: host.handle(),
        };
        sinks.changes.changed(event.clone());
        event
    }

    fn check(
        &self,
        host: &dyn HostField,
        proposal: &str,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Admission {
        let edit = Edit::new(host.text(), host.selection(), proposal);
        let admission = admit(&self.grammar, &self.config, &edit);
        match admission {
            Admission::Allow => {}
            Admission::Suppress { diagnostic } => {
                debug!(field = %self.config.name, "edit suppressed");
                if let Some(tag) = diagnostic {
                    self.report(diagnostics, tag);
                }
            }
        }
        admission
    }

    fn report(&self, diagnostics: &mut dyn DiagnosticSink, tag: DiagnosticTag) {
        warn!(field = %self.config.name, tag = %tag, "field diagnostic");
        diagnostics.report(&self.config.name, tag);
    }
}
