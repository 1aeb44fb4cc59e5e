//! Generate/download operation.

use tracing::info;

use docmerge_archive::{GeneratedFile, ZIP_CONTENT_TYPE, archive_file_name, pack_archive};
use docmerge_model::{GenerateRequest, Table};
use docmerge_template::FilenameResolver;

use crate::encoder::{DocumentEncoder, DocxEncoder};
use crate::error::{PipelineError, Result};

/// The packed archive, ready to hand to the user as a download.
#[derive(Debug, Clone)]
pub struct GeneratedArchive {
    /// Download filename, `.zip` suffix enforced.
    pub file_name: String,
    /// MIME type of `content`.
    pub content_type: &'static str,
    pub content: Vec<u8>,
}

/// Generate one document per row and pack them into an archive.
pub fn generate_archive(table: &Table, request: &GenerateRequest) -> Result<GeneratedArchive> {
    generate_archive_with(table, request, &DocxEncoder)
}

/// [`generate_archive`] with a caller-chosen document encoder.
///
/// Any encoding or packaging failure aborts the whole operation; a partial
/// archive is never returned.
pub fn generate_archive_with(
    table: &Table,
    request: &GenerateRequest,
    encoder: &dyn DocumentEncoder,
) -> Result<GeneratedArchive> {
    if table.is_empty() {
        return Err(PipelineError::NoData);
    }

    let mut resolver = FilenameResolver::new(
        &request.template,
        &table.columns,
        &request.null_policy,
        encoder.extension(),
    );

    let mut files = Vec::with_capacity(table.row_count());
    for (index, row) in table.rows.iter().enumerate() {
        let content = encoder.encode(&table.columns, row, &request.null_policy)?;
        let name = resolver.resolve(row, index);
        files.push(GeneratedFile::new(name, content));
    }

    let content = pack_archive(&files)?;
    let file_name = archive_file_name(request.archive_name.as_deref());
    info!(
        rows = files.len(),
        archive = %file_name,
        "generated document archive"
    );

    Ok(GeneratedArchive {
        file_name,
        content_type: ZIP_CONTENT_TYPE,
        content,
    })
}

/// Generate from a row-oriented JSON payload, as sent back by clients that
/// round-trip the preview through the browser.
pub fn generate_archive_from_records(
    records: &serde_json::Value,
    request: &GenerateRequest,
) -> Result<GeneratedArchive> {
    let table = Table::from_records(records)?;
    generate_archive(&table, request)
}

#[cfg(test)]
mod tests {
    use docmerge_model::NullPolicy;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_table_is_rejected() {
        let table = Table::new(vec!["Name".to_string()]);
        let request = GenerateRequest::new("{Name}");
        let err = generate_archive(&table, &request).unwrap_err();
        assert!(matches!(err, PipelineError::NoData));
    }

    #[test]
    fn empty_records_payload_is_rejected() {
        let request = GenerateRequest::new("{Name}");
        let err = generate_archive_from_records(&json!([]), &request).unwrap_err();
        assert!(matches!(err, PipelineError::NoData));
    }

    #[test]
    fn archive_metadata_is_filled_in() {
        let request = GenerateRequest::new("{Name}").with_archive_name("batch");
        let records = json!([{"Name": "Jane"}]);
        let archive = generate_archive_from_records(&records, &request).unwrap();

        assert_eq!(archive.file_name, "batch.zip");
        assert_eq!(archive.content_type, "application/zip");
        assert!(!archive.content.is_empty());
    }

    #[test]
    fn null_policy_reaches_both_names_and_bodies() {
        let request = GenerateRequest::new("{Name}-{Age}")
            .with_null_policy(NullPolicy::fill("unknown"));
        let records = json!([{"Name": "Jane", "Age": null}]);
        let archive = generate_archive_from_records(&records, &request).unwrap();

        let mut outer =
            zip::ZipArchive::new(std::io::Cursor::new(archive.content.as_slice())).unwrap();
        assert_eq!(outer.len(), 1);
        assert_eq!(outer.by_index(0).unwrap().name(), "Jane-unknown.docx");
    }
}
