//! Pipeline-level errors.
//!
//! Everything here is meant to surface to the user as a plain message at
//! the boundary; nothing is retried.

use thiserror::Error;

use docmerge_archive::ArchiveError;
use docmerge_docx::DocxError;
use docmerge_ingest::IngestError;
use docmerge_model::RecordsError;

/// Errors that can occur across the preview and generate operations.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Upload could not be loaded into a table.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Strict required-column enforcement failed.
    #[error("the uploaded file is missing required columns: {}", .columns.join(", "))]
    MissingRequiredColumns { columns: Vec<String> },

    /// Generation was requested without any rows.
    #[error("no data provided for document generation")]
    NoData,

    /// The serialized table payload was malformed.
    #[error("invalid table payload: {0}")]
    Records(#[from] RecordsError),

    /// Document encoding failed mid-generation.
    #[error("document encoding failed: {0}")]
    Encode(#[from] DocxError),

    /// Archive packaging failed.
    #[error("archive packaging failed: {0}")]
    Archive(#[from] ArchiveError),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
