use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use numfield_model::DiagnosticTag;

use numfield_cli::commands::describe_outcome;
use numfield_cli::types::{BlurResult, CheckResult, ReplayReport};

pub fn print_grammar(pattern: &str) {
    println!("{pattern}");
}

pub fn print_check(result: &CheckResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Text")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        outcome_cell(&describe_outcome(result.outcome), result.is_rejected()),
        Cell::new(&result.proposed_text),
    ]);
    println!("{table}");
    print_diagnostics(result.diagnostics.iter().copied());
}

pub fn print_blur(result: &BlurResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Raw"),
        header_cell("Value"),
        header_cell("Control"),
        header_cell("Reference"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(&result.event.name).add_attribute(Attribute::Bold),
        Cell::new(&result.raw),
        value_cell(&result.event.value),
        result
            .control_value
            .as_deref()
            .map_or_else(|| dim_cell("-"), value_cell),
        result
            .reference
            .map_or_else(|| dim_cell("-"), Cell::new),
    ]);
    println!("{table}");
    print_diagnostics(result.diagnostics.iter().copied());
}

pub fn print_replay(report: &ReplayReport) {
    println!("Field: {}", report.field);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Event"),
        header_cell("Outcome"),
        header_cell("Text"),
    ]);
    apply_replay_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for step in &report.steps {
        let rejected = step.outcome.starts_with("suppressed");
        table.add_row(vec![
            dim_cell(step.index),
            Cell::new(&step.event),
            outcome_cell(&step.outcome, rejected),
            Cell::new(&step.text),
        ]);
    }
    println!("{table}");
    println!("Final text: {:?}", report.final_text);
    if let Some(value) = &report.control_value {
        println!("Control value: {value:?}");
    }
    for change in &report.changes {
        println!("Change: {} -> {:?} ({})", change.name, change.value, change.target);
    }
    print_diagnostics(report.diagnostics.iter().map(|(_, tag)| *tag));
}

fn print_diagnostics(tags: impl Iterator<Item = DiagnosticTag>) {
    let tags: Vec<DiagnosticTag> = tags.collect();
    if tags.is_empty() {
        return;
    }
    eprintln!("Diagnostics:");
    for tag in tags {
        eprintln!("- {tag}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_replay_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn outcome_cell(outcome: &str, rejected: bool) -> Cell {
    if rejected {
        Cell::new(outcome)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(outcome).fg(Color::Green)
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(value).add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
