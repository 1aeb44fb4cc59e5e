use thiserror::Error;

/// Errors that can occur while loading an uploaded table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file extension is neither a spreadsheet nor CSV.
    #[error("unsupported file type {extension:?}: only .xlsx, .xls, and .csv are accepted")]
    UnsupportedFormat { extension: String },

    /// The file parsed but produced no data rows.
    #[error("the uploaded file is empty")]
    EmptyInput,

    /// CSV syntax or field decoding failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook container or sheet decoding failure.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
