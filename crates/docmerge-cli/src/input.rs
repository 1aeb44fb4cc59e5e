//! Input detection for the generate command.
//!
//! Generation accepts either a tabular upload (`.xlsx`, `.xls`, `.csv`) or
//! a `.json` records payload produced by an earlier preview round trip.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use docmerge_ingest::TableFormat;
use docmerge_model::Table;

/// What kind of file the user pointed the CLI at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A tabular upload that still needs sanitization.
    Tabular(TableFormat),
    /// A JSON array of row objects, already sanitized by a previous preview.
    Records,
}

impl InputKind {
    /// Detect the input kind from the file name extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = file_name_of(path)?;
        if file_name.to_lowercase().ends_with(".json") {
            return Ok(Self::Records);
        }
        let format = TableFormat::from_file_name(file_name)?;
        Ok(Self::Tabular(format))
    }
}

/// Parse a records payload into a [`Table`].
pub fn load_records(bytes: &[u8]) -> Result<Table> {
    let payload: serde_json::Value =
        serde_json::from_slice(bytes).context("parse records payload")?;
    Ok(Table::from_records(&payload)?)
}

/// The final component of `path` as UTF-8.
pub fn file_name_of(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("input path {} has no file name", path.display()))
}
