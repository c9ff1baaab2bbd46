//! Outbound collaborators of a numeric field.
//!
//! Closures work as sinks directly; [`DiagnosticLog`] and [`ChangeLog`]
//! record everything for inspection.

use numfield_model::{ChangeEvent, DiagnosticTag};

/// Receives `(field name, tag)` whenever a value is rejected or limited.
pub trait DiagnosticSink {
    fn report(&mut self, field: &str, tag: DiagnosticTag);
}

/// Receives the change event emitted on every blur.
pub trait ChangeSink {
    fn changed(&mut self, event: ChangeEvent);
}

/// Bound form-control model. Written after normalization, never read.
pub trait FormControl {
    fn set_value(&mut self, value: &str);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&str, DiagnosticTag),
{
    fn report(&mut self, field: &str, tag: DiagnosticTag) {
        self(field, tag);
    }
}

impl<F> ChangeSink for F
where
    F: FnMut(ChangeEvent),
{
    fn changed(&mut self, event: ChangeEvent) {
        self(event);
    }
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl DiagnosticSink for Discard {
    fn report(&mut self, _field: &str, _tag: DiagnosticTag) {}
}

impl ChangeSink for Discard {
    fn changed(&mut self, _event: ChangeEvent) {}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
    pub entries: Vec<(String, DiagnosticTag)>,
}

impl DiagnosticLog {
    pub fn tags(&self) -> Vec<DiagnosticTag> {
        self.entries.iter().map(|(_, tag)| *tag).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn report(&mut self, field: &str, tag: DiagnosticTag) {
        self.entries.push((field.to_string(), tag));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLog {
    pub events: Vec<ChangeEvent>,
}

impl ChangeLog {
    pub fn last(&self) -> Option<&ChangeEvent> {
        self.events.last()
    }
}

impl ChangeSink for ChangeLog {
    fn changed(&mut self, event: ChangeEvent) {
        self.events.push(event);
    }
}

/// Form control that keeps the last value it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlValue {
    pub value: Option<String>,
}

impl FormControl for ControlValue {
    fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// Collaborators handed to the blur handler.
pub struct BlurSinks<'a> {
    pub diagnostics: &'a mut dyn DiagnosticSink,
    pub changes: &'a mut dyn ChangeSink,
    pub control: Option<&'a mut dyn FormControl>,
}

impl<'a> BlurSinks<'a> {
    pub fn new(diagnostics: &'a mut dyn DiagnosticSink, changes: &'a mut dyn ChangeSink) -> Self {
        Self {
            diagnostics,
            changes,
            control: None,
        }
    }

    pub fn with_control(mut self, control: &'a mut dyn FormControl) -> Self {
        self.control = Some(control);
        self
    }
}
