use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use docmerge_model::ColumnFeedback;

use crate::commands::{GenerateReport, PreviewReport};

pub fn print_preview(report: &PreviewReport) {
    let preview = &report.preview;
    println!("File: {}", report.file.display());
    println!("Rows: {}", preview.table.row_count());
    println!("Columns: {}", preview.columns.len());
    println!("Default template: {}", preview.default_template);
    print_missing_columns(&preview.missing_columns);
    print_feedback(&preview.feedback);

    if !preview.preview_rows.is_empty() {
        let mut table = Table::new();
        table.set_header(
            preview
                .columns
                .iter()
                .map(|column| header_cell(column))
                .collect::<Vec<_>>(),
        );
        apply_preview_table_style(&mut table);
        for row in &preview.preview_rows {
            table.add_row(
                row.iter()
                    .map(|value| value_cell(value))
                    .collect::<Vec<_>>(),
            );
        }
        println!();
        println!(
            "Preview ({} of {} rows):",
            preview.preview_rows.len(),
            preview.table.row_count()
        );
        println!("{table}");
    }

    if preview.has_null_values {
        println!();
        println!(
            "Null cells detected: generate with --null-policy fill \
             --null-value TEXT to substitute them."
        );
    }
}

pub fn print_generate(report: &GenerateReport) {
    println!("Archive: {}", report.archive_path.display());
    println!("Documents: {}", report.documents);
    println!("Size: {} bytes", report.archive_bytes);
    print_missing_columns(&report.missing_columns);
    print_feedback(&report.feedback);
}

fn print_missing_columns(missing: &[String]) {
    if !missing.is_empty() {
        eprintln!("Missing required columns: {}", missing.join(", "));
    }
}

fn print_feedback(feedback: &ColumnFeedback) {
    if feedback.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Feedback")]);
    apply_feedback_table_style(&mut table);
    for (column, message) in feedback {
        table.add_row(vec![Cell::new(column), warn_cell(message)]);
    }
    println!();
    println!("Feedback:");
    println!("{table}");
}

fn apply_feedback_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_preview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn warn_cell(message: &str) -> Cell {
    Cell::new(message).fg(Color::Yellow)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
