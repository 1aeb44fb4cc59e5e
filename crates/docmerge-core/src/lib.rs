//! The upload-to-archive pipeline.
//!
//! Two operations make up the public surface, mirroring the two steps a
//! user takes: [`preview_upload`] loads and sanitizes a tabular upload,
//! then [`generate_archive`] turns the table plus a filename template into
//! one document per row, packed into a single zip download.

pub mod encoder;
pub mod error;
pub mod generate;
pub mod preview;

pub use encoder::{DOCUMENT_HEADING, DocumentEncoder, DocxEncoder};
pub use error::{PipelineError, Result};
pub use generate::{
    GeneratedArchive, generate_archive, generate_archive_from_records, generate_archive_with,
};
pub use preview::{FALLBACK_TEMPLATE, UploadPreview, default_filename_template, preview_upload};
