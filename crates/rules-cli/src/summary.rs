use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rules_transform::{RowIssue, WorkflowStatistics};

use crate::commands::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    let report = &outcome.report;
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Family"),
        header_cell("Rows"),
        header_cell("Converted"),
        header_cell("Skipped"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.family)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total_rows),
        count_cell(report.accepted, Color::Green),
        count_cell(report.skipped(), Color::Yellow),
        count_cell(report.warnings(), Color::Yellow),
    ]);
    println!("{table}");

    print_issue_table(&report.issues);
    if let Some(statistics) = &outcome.statistics {
        print_statistics(statistics);
    }
}

fn print_issue_table(issues: &[RowIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Kind"),
        header_cell("Outcome"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues {
        let row = match issue.row() {
            Some(row) => Cell::new(row),
            None => dim_cell("-"),
        };
        let outcome = if issue.skips_row() {
            Cell::new("SKIPPED").fg(Color::Red)
        } else {
            Cell::new("WARN").fg(Color::Yellow)
        };
        table.add_row(vec![
            row,
            Cell::new(issue.kind()),
            outcome,
            Cell::new(issue.to_string()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn print_statistics(statistics: &WorkflowStatistics) {
    println!();
    println!("Request type distribution:");
    println!(
        "{}",
        usage_table(
            "Request Type",
            statistics
                .request_types()
                .iter()
                .map(|(label, count)| ((*label).to_string(), *count)),
        )
    );
    println!("Trigger event usage:");
    println!(
        "{}",
        usage_table(
            "Trigger",
            statistics
                .triggers
                .iter()
                .map(|(event, count)| (event.as_str().to_string(), *count)),
        )
    );
    println!("Action type usage:");
    println!(
        "{}",
        usage_table(
            "Action",
            statistics
                .actions
                .iter()
                .map(|(kind, count)| (kind.as_str().to_string(), *count)),
        )
    );
}

fn usage_table(label: &str, rows: impl Iterator<Item = (String, usize)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Rules")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, count) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
