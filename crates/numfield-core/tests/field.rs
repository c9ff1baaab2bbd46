//! End-to-end tests driving a field through focus, typing, paste and blur.

use numfield_core::{
    Admission, BlurSinks, ChangeLog, ControlValue, DiagnosticLog, HostField, KeyOutcome, KeyPress,
    NumericField, TextBuffer,
};
use numfield_model::{DiagnosticTag, FieldConfig, FieldHandle};

/// Type `keys` one at a time, applying every key the field admits.
fn type_keys(
    field: &NumericField,
    input: &mut TextBuffer,
    keys: &[&str],
    diagnostics: &mut DiagnosticLog,
) -> Vec<KeyOutcome> {
    keys.iter()
        .map(|key| {
            let outcome = field.on_key_down(&*input, &KeyPress::new(*key), diagnostics);
            if let KeyOutcome::Filtered(Admission::Allow) = outcome {
                input.insert(if *key == "Decimal" { "." } else { *key });
            }
            outcome
        })
        .collect()
}

fn blur(field: &mut NumericField, input: &mut TextBuffer) -> (String, DiagnosticLog) {
    let mut diagnostics = DiagnosticLog::default();
    let mut changes = ChangeLog::default();
    let event = field.on_blur(input, BlurSinks::new(&mut diagnostics, &mut changes));
    assert_eq!(changes.events.len(), 1, "exactly one change event per blur");
    (event.value, diagnostics)
}

#[test]
fn precision_is_reduced_on_blur() {
    let config = FieldConfig::new("amount")
        .with_count_int(3)
        .with_count_decimal(2);
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("amount").with_text("12.345");

    let (value, diagnostics) = blur(&mut field, &mut input);
    assert_eq!(value, "12,35");
    assert_eq!(input.text(), "12,35");
    assert!(diagnostics.is_empty());
}

#[test]
fn out_of_range_value_is_blanked() {
    let config = FieldConfig::new("amount").with_bounds(Some(0.0), Some(100.0));
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("amount").with_text("150");

    let (value, diagnostics) = blur(&mut field, &mut input);
    assert_eq!(value, "");
    assert_eq!(input.text(), "");
    assert_eq!(
        diagnostics.entries,
        vec![("amount".to_string(), DiagnosticTag::OutOfRange)]
    );
}

#[test]
fn percentage_survives_typing_and_blur() {
    let config = FieldConfig::new("rate")
        .with_percentage(true)
        .with_count_decimal(1);
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("rate");
    let mut diagnostics = DiagnosticLog::default();

    let outcomes = type_keys(&field, &mut input, &["4", "5", "%"], &mut diagnostics);
    assert!(outcomes.iter().all(|o| !o.suppresses()));
    assert_eq!(input.text(), "45%");

    let (value, _) = blur(&mut field, &mut input);
    assert_eq!(value, "45,0%");
}

#[test]
fn verbatim_token_can_be_typed_and_is_uppercased() {
    let config = FieldConfig::new("score").with_other_characters(vec!["na".to_string()]);
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("score");
    let mut diagnostics = DiagnosticLog::default();

    type_keys(&field, &mut input, &["n", "a", "x"], &mut diagnostics);
    assert_eq!(input.text(), "na");

    let (value, _) = blur(&mut field, &mut input);
    assert_eq!(value, "NA");
}

#[test]
fn token_with_comma_survives_blur() {
    let config = FieldConfig::new("score").with_other_characters("n,d");
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("score");
    let mut diagnostics = DiagnosticLog::default();

    let outcomes = type_keys(&field, &mut input, &["n", ",", "d"], &mut diagnostics);
    assert!(outcomes.iter().all(|o| !o.suppresses()));

    let (value, diagnostics) = blur(&mut field, &mut input);
    assert_eq!(value, "N,D");
    assert_eq!(input.text(), "N,D");
    assert!(diagnostics.is_empty());
}

#[test]
fn initial_field_not_below_reference_is_rejected() {
    let config = FieldConfig::new("RangeInicio").with_reference_value("50");
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("range-ini").with_text("60");

    let (value, diagnostics) = blur(&mut field, &mut input);
    assert_eq!(value, "");
    assert_eq!(
        diagnostics.entries,
        vec![("RangeInicio".to_string(), DiagnosticTag::InitialOrdering)]
    );
    assert_eq!(field.reference_numeric(), Some(50.0));
}

#[test]
fn equal_to_reference_is_rejected_for_initial_field() {
    let config = FieldConfig::new("dateIni")
        .with_count_decimal(2)
        .with_reference_value("50,00");
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("x").with_text("50");

    let (value, diagnostics) = blur(&mut field, &mut input);
    assert_eq!(value, "");
    assert_eq!(diagnostics.tags(), vec![DiagnosticTag::InitialOrdering]);
}

#[test]
fn letters_and_extra_digits_are_suppressed() {
    let config = FieldConfig::new("qty").with_count_int(2);
    let field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("qty");
    let mut diagnostics = DiagnosticLog::default();

    let outcomes = type_keys(&field, &mut input, &["1", "x", "2", "3", "-"], &mut diagnostics);
    assert_eq!(input.text(), "12");
    assert_eq!(
        outcomes.iter().filter(|o| o.suppresses()).count(),
        3,
        "x, 3 and - are rejected"
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn navigation_keys_are_not_filtered() {
    let field = NumericField::new(FieldConfig::new("qty")).unwrap();
    let input = TextBuffer::new("qty").with_text("12");
    let mut diagnostics = DiagnosticLog::default();

    assert_eq!(
        field.on_key_down(&input, &KeyPress::new("Backspace"), &mut diagnostics),
        KeyOutcome::PassThrough
    );
    assert_eq!(
        field.on_key_down(&input, &KeyPress::new("v").with_ctrl(), &mut diagnostics),
        KeyOutcome::Paste
    );
}

#[test]
fn decimal_limit_is_reported_while_typing() {
    let config = FieldConfig::new("amount")
        .with_count_decimal(2)
        .with_messages(true);
    let field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("amount");
    let mut diagnostics = DiagnosticLog::default();

    type_keys(
        &field,
        &mut input,
        &["1", "Decimal", "2", "5", "9"],
        &mut diagnostics,
    );
    assert_eq!(input.text(), "1.25");
    assert_eq!(
        diagnostics.entries,
        vec![("amount".to_string(), DiagnosticTag::DecimalLimit)]
    );
}

#[test]
fn paste_is_admitted_or_rejected_whole() {
    let config = FieldConfig::new("amount")
        .with_count_int(3)
        .with_count_decimal(2);
    let field = NumericField::new(config).unwrap();
    let mut diagnostics = DiagnosticLog::default();

    let input = TextBuffer::new("amount");
    assert_eq!(
        field.on_paste(&input, "123,45", &mut diagnostics),
        Admission::Allow
    );
    assert!(
        !field
            .on_paste(&input, "1.234,56", &mut diagnostics)
            .is_allowed()
    );

    let mut full = TextBuffer::new("amount").with_text("999,99");
    full.select_all();
    assert_eq!(field.on_paste(&full, "5", &mut diagnostics), Admission::Allow);
}

#[test]
fn blank_result_restores_focus_value() {
    let config = FieldConfig::new("amount")
        .with_default(true)
        .with_bounds(Some(0.0), Some(10.0));
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("amount").with_text("7");

    field.on_focus(&input);
    assert_eq!(field.value_at_focus(), "7");
    input.set_text("70");

    let (value, diagnostics) = blur(&mut field, &mut input);
    assert_eq!(value, "7");
    assert_eq!(input.text(), "7");
    assert_eq!(diagnostics.tags(), vec![DiagnosticTag::OutOfRange]);
}

#[test]
fn null_substitute_is_emitted_but_not_pushed_to_control() {
    let config = FieldConfig::new("amount").with_null_value("N/D");
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("amount-input").with_text("-");
    let mut diagnostics = DiagnosticLog::default();
    let mut changes = ChangeLog::default();
    let mut control = ControlValue::default();

    let event = field.on_blur(
        &mut input,
        BlurSinks::new(&mut diagnostics, &mut changes).with_control(&mut control),
    );
    assert_eq!(event.value, "N/D");
    assert_eq!(event.name, "amount");
    assert_eq!(event.target, FieldHandle::new("amount-input"));
    assert_eq!(control.value.as_deref(), Some(""));
    assert_eq!(changes.last(), Some(&event));
}

#[test]
fn blank_input_reports_nothing() {
    let config = FieldConfig::new("amount").with_bounds(Some(1.0), Some(10.0));
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("amount");

    let (value, diagnostics) = blur(&mut field, &mut input);
    assert_eq!(value, "");
    assert!(diagnostics.is_empty());
}

#[test]
fn closures_work_as_sinks() {
    let config = FieldConfig::new("amount").with_bounds(Some(0.0), Some(1.0));
    let mut field = NumericField::new(config).unwrap();
    let mut input = TextBuffer::new("amount").with_text("2");
    let mut seen = Vec::new();
    let mut emitted = Vec::new();

    {
        let mut on_diagnostic = |name: &str, tag: DiagnosticTag| seen.push(format!("{name}:{tag}"));
        let mut on_change = |event: numfield_model::ChangeEvent| emitted.push(event.value);
        field.on_blur(
            &mut input,
            BlurSinks::new(&mut on_diagnostic, &mut on_change),
        );
    }

    assert_eq!(seen, vec!["amount:max-min".to_string()]);
    assert_eq!(emitted, vec![String::new()]);
}

#[test]
fn invalid_config_is_refused() {
    let config = FieldConfig::new("amount").with_bounds(Some(5.0), Some(1.0));
    assert!(NumericField::new(config).is_err());
}
