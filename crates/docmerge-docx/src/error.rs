//! Error types for document writing.

use thiserror::Error;

/// Errors that can occur when writing a document.
#[derive(Debug, Error)]
pub enum DocxError {
    /// I/O failure while writing document XML.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Container-level failure in the document package.
    #[error("package error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DocxError>;
