//! Archive packaging for generated documents.
//!
//! Every generation pass ends here: the per-row documents are written into
//! one zip archive that the caller hands to the user as a single download.

#![deny(unsafe_code)]

use std::io::{Cursor, Write};

use thiserror::Error;
use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Archive name used when the caller does not supply one.
pub const DEFAULT_ARCHIVE_NAME: &str = "Documents.zip";

/// MIME type of the packed archive.
pub const ZIP_CONTENT_TYPE: &str = "application/zip";

/// One generated document ready for packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl GeneratedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Errors raised while packing the archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// I/O failure while writing an entry.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Container-level failure.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Pack the files into one zip archive, preserving their order.
pub fn pack_archive(files: &[GeneratedFile]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        writer.start_file(&file.name, options)?;
        writer.write_all(&file.content)?;
    }

    let cursor = writer.finish()?;
    debug!(
        entries = files.len(),
        bytes = cursor.get_ref().len(),
        "packed archive"
    );
    Ok(cursor.into_inner())
}

/// Resolve the archive filename the user asked for.
///
/// A blank or missing name falls back to [`DEFAULT_ARCHIVE_NAME`]. A name
/// without the `.zip` suffix (checked case-insensitively) gets it appended
/// exactly once.
#[must_use]
pub fn archive_file_name(requested: Option<&str>) -> String {
    let trimmed = requested.unwrap_or_default().trim();
    if trimmed.is_empty() {
        DEFAULT_ARCHIVE_NAME.to_string()
    } else if trimmed.to_lowercase().ends_with(".zip") {
        trimmed.to_string()
    } else {
        format!("{trimmed}.zip")
    }
}
