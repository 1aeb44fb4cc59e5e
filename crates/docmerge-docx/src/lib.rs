//! Minimal Office Open XML word-processing documents.
//!
//! Supports exactly what row-to-document generation needs: paragraphs of
//! plain text plus styled headings, serialized as a deterministic `.docx`
//! package.

pub mod document;
pub mod error;
pub mod writer;

/// File extension of generated documents, without the dot.
pub const DOCX_EXTENSION: &str = "docx";

pub use document::{DocxDocument, DocxParagraph, ParagraphStyle};
pub use error::{DocxError, Result};
pub use writer::{DocxWriter, docx_bytes};
