//! Upload/preview operation.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use docmerge_ingest::{TableFormat, load_table};
use docmerge_model::{ColumnFeedback, ColumnRequirement, Enforcement, PreviewOptions, Table};
use docmerge_sanitize::sanitize_table;

use crate::error::{PipelineError, Result};

/// Template suggested when the configured name columns are not all present.
pub const FALLBACK_TEMPLATE: &str = "Document-{index}";

/// Everything the caller needs to show an upload back to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPreview {
    /// The sanitized table, ready for a later generate call.
    pub table: Table,
    /// Full column-name list, in table order.
    pub columns: Vec<String>,
    /// The first rows rendered as strings, one inner vector per row.
    pub preview_rows: Vec<Vec<String>>,
    /// Per-column sanitization feedback.
    pub feedback: ColumnFeedback,
    /// Required columns the upload does not have. Empty under strict
    /// enforcement, which fails instead.
    pub missing_columns: Vec<String>,
    /// Suggested filename template for this table.
    pub default_template: String,
    /// Whether any cell is null or empty.
    pub has_null_values: bool,
}

/// Load, check, and sanitize an upload.
///
/// `file_name` is only used to sniff the format from its extension. With
/// strict enforcement missing required columns fail the preview; advisory
/// enforcement reports them in [`UploadPreview::missing_columns`].
pub fn preview_upload(
    bytes: &[u8],
    file_name: &str,
    options: &PreviewOptions,
) -> Result<UploadPreview> {
    let format = TableFormat::from_file_name(file_name)?;
    let mut table = load_table(bytes, format)?;

    let missing_columns = options.required.missing_from(&table.columns);
    if !missing_columns.is_empty() {
        if options.required.enforcement == Enforcement::Strict {
            return Err(PipelineError::MissingRequiredColumns {
                columns: missing_columns,
            });
        }
        warn!(columns = ?missing_columns, "required columns missing from upload");
    }

    let feedback = sanitize_table(&mut table);

    let preview_rows = table
        .rows
        .iter()
        .take(options.preview_rows)
        .map(|row| {
            table
                .columns
                .iter()
                .map(|column| row.get(column).render())
                .collect()
        })
        .collect();

    let default_template = default_filename_template(&table.columns, &options.required);
    let has_null_values = table.has_null_values();

    info!(
        rows = table.row_count(),
        columns = table.columns.len(),
        flagged = feedback.len(),
        "previewed upload"
    );

    Ok(UploadPreview {
        columns: table.columns.clone(),
        preview_rows,
        feedback,
        missing_columns,
        default_template,
        has_null_values,
        table,
    })
}

/// Suggest a filename template for the table.
///
/// When every configured name column is present the suggestion joins their
/// placeholders with `-`; otherwise it falls back to a row-number name.
#[must_use]
pub fn default_filename_template(columns: &[String], required: &ColumnRequirement) -> String {
    let all_present =
        !required.columns.is_empty() && required.missing_from(columns).is_empty();
    if all_present {
        let placeholders: Vec<String> = required
            .columns
            .iter()
            .map(|column| format!("{{{column}}}"))
            .collect();
        placeholders.join("-")
    } else {
        FALLBACK_TEMPLATE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use docmerge_model::ColumnRequirement;

    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn template_joins_name_columns_when_present() {
        let required = ColumnRequirement::default();
        let template = default_filename_template(
            &columns(&["First and Middle Name", "Last Name", "Age"]),
            &required,
        );
        assert_eq!(template, "{First and Middle Name}-{Last Name}");
    }

    #[test]
    fn template_falls_back_when_a_name_column_is_absent() {
        let required = ColumnRequirement::default();
        let template = default_filename_template(&columns(&["Last Name", "Age"]), &required);
        assert_eq!(template, "Document-{index}");
    }

    #[test]
    fn template_falls_back_when_nothing_is_required() {
        let required = ColumnRequirement::none();
        let template = default_filename_template(&columns(&["Name"]), &required);
        assert_eq!(template, "Document-{index}");
    }
}
