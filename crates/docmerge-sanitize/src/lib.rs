//! Column sanitization for filename-safe values.
//!
//! Cell values end up inside filenames, so each column is checked for
//! values that would make a filename unwieldy or invalid. Offending cells
//! are rewritten in place and the caller receives one feedback message per
//! affected column. A later check's message replaces an earlier one for
//! the same column, so a column never carries more than one message.

#![deny(unsafe_code)]

use tracing::debug;

use docmerge_model::{CellValue, ColumnFeedback, Table};

/// Characters that are unsafe in filenames on common filesystems.
pub const RESERVED_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Values whose string form exceeds this length trigger truncation.
pub const LONG_VALUE_LIMIT: usize = 80;

/// Length that flagged values are truncated to.
pub const TRUNCATED_LENGTH: usize = 60;

/// Sanitize every column of the table in place.
///
/// Three checks run per column, in order: over-long values are truncated,
/// reserved filename characters are replaced with `_`, and null or empty
/// values are reported (but left untouched). Counts are taken before any
/// rewriting so the feedback reflects the values as uploaded.
pub fn sanitize_table(table: &mut Table) -> ColumnFeedback {
    let mut feedback = ColumnFeedback::new();
    let columns = table.columns.clone();
    for column in &columns {
        sanitize_column(table, column, &mut feedback);
    }
    debug!(columns_flagged = feedback.len(), "sanitized table");
    feedback
}

fn sanitize_column(table: &mut Table, column: &str, feedback: &mut ColumnFeedback) {
    let mut long_values = 0usize;
    let mut invalid_chars = 0usize;
    let mut null_values = 0usize;

    for row in &table.rows {
        let cell = row.get(column);
        if cell.is_empty() {
            null_values += 1;
            continue;
        }
        let rendered = cell.render();
        if rendered.chars().count() > LONG_VALUE_LIMIT {
            long_values += 1;
        }
        if rendered.chars().any(is_reserved) {
            invalid_chars += 1;
        }
    }

    if long_values > 0 {
        for row in &mut table.rows {
            let cell = row.get(column);
            if cell.is_empty() {
                continue;
            }
            let rendered = cell.render();
            if rendered.chars().count() > LONG_VALUE_LIMIT {
                let truncated: String = rendered.chars().take(TRUNCATED_LENGTH).collect();
                row.set(column, CellValue::Text(truncated));
            }
        }
        feedback.insert(
            column.to_string(),
            format!(
                "Values longer than {LONG_VALUE_LIMIT} characters will be truncated to {TRUNCATED_LENGTH} characters. ({})",
                affected(long_values)
            ),
        );
    }

    if invalid_chars > 0 {
        for row in &mut table.rows {
            let cell = row.get(column);
            if cell.is_empty() {
                continue;
            }
            let rendered = cell.render();
            if rendered.chars().any(is_reserved) {
                let replaced: String = rendered
                    .chars()
                    .map(|c| if is_reserved(c) { '_' } else { c })
                    .collect();
                row.set(column, CellValue::Text(replaced));
            }
        }
        feedback.insert(
            column.to_string(),
            format!(
                "** This column contains invalid characters. These characters will be replaced with underscores. ({})",
                affected(invalid_chars)
            ),
        );
    }

    if null_values > 0 {
        feedback.insert(
            column.to_string(),
            format!(
                "** This column contains null or empty values. This could lead to unexpected results in the filenames. ({})",
                affected(null_values)
            ),
        );
    }
}

fn is_reserved(c: char) -> bool {
    RESERVED_CHARS.contains(&c)
}

fn affected(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Affects {count} cell{plural}")
}
