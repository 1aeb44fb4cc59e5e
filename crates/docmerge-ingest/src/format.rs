use crate::error::{IngestError, Result};

/// Supported upload formats, detected from the file name extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Excel workbook (`.xlsx` or `.xls`).
    Spreadsheet,
    /// Comma-separated values (`.csv`).
    Csv,
}

impl TableFormat {
    /// Detect the format from a file name, case-insensitively.
    ///
    /// Returns [`IngestError::UnsupportedFormat`] for anything other than
    /// `.xlsx`, `.xls`, or `.csv`.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Ok(Self::Spreadsheet)
        } else if lower.ends_with(".csv") {
            Ok(Self::Csv)
        } else {
            let extension = lower.rsplit('.').next().unwrap_or_default();
            Err(IngestError::unsupported_format(if extension == lower {
                String::new()
            } else {
                extension.to_string()
            }))
        }
    }
}
