#![deny(unsafe_code)]

use std::path::Path;

use tracing::debug;

use docmerge_model::Table;

use crate::csv_ingest::ingest_csv;
use crate::error::{IngestError, Result};
use crate::format::TableFormat;
use crate::sheet_ingest::ingest_sheet;

/// Load uploaded bytes in the given format.
///
/// Fails with [`IngestError::EmptyInput`] when no data rows survive parsing.
pub fn load_table(bytes: &[u8], format: TableFormat) -> Result<Table> {
    let table = match format {
        TableFormat::Spreadsheet => ingest_sheet(bytes)?,
        TableFormat::Csv => ingest_csv(bytes)?,
    };
    if table.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    debug!(
        rows = table.row_count(),
        columns = table.columns.len(),
        "loaded table"
    );
    Ok(table)
}

/// Load a table from disk, sniffing the format from the file name.
pub fn load_table_from_path(path: &Path) -> Result<Table> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let format = TableFormat::from_file_name(file_name)?;
    let bytes = std::fs::read(path)?;
    load_table(&bytes, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_table_without_rows() {
        let err = load_table(b"A,B\n", TableFormat::Csv).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput));

        let err = load_table(b"", TableFormat::Csv).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput));
    }

    #[test]
    fn loads_csv_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        std::fs::write(&path, "Name,Age\nJane,30\n").unwrap();

        let table = load_table_from_path(&path).unwrap();
        assert_eq!(table.columns, vec!["Name", "Age"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn rejects_unknown_extension_on_disk() {
        let err = load_table_from_path(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    }
}
