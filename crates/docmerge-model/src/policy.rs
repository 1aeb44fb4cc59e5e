//! Null-value handling shared by document bodies and filename templates.

use serde::{Deserialize, Serialize};

use crate::table::CellValue;

/// Replacement used by `Fill` when the caller does not supply one.
pub const DEFAULT_NULL_REPLACEMENT: &str = "N/A";

/// Rule governing how missing/empty cell values are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullPolicy {
    /// Drop the value entirely: no document paragraph, empty filename text.
    #[default]
    Omit,
    /// Substitute a fixed replacement string.
    Fill { replacement: String },
}

impl NullPolicy {
    pub fn fill(replacement: impl Into<String>) -> Self {
        Self::Fill {
            replacement: replacement.into(),
        }
    }

    pub fn fill_default() -> Self {
        Self::fill(DEFAULT_NULL_REPLACEMENT)
    }

    /// Resolves a cell under this policy.
    ///
    /// `None` means the value is omitted; callers decide what omission means
    /// for them (skip the paragraph, substitute empty text).
    pub fn resolve(&self, cell: &CellValue) -> Option<String> {
        if cell.is_empty() {
            match self {
                Self::Omit => None,
                Self::Fill { replacement } => Some(replacement.clone()),
            }
        } else {
            Some(cell.render())
        }
    }

    /// Filename form of [`resolve`](Self::resolve): omission becomes empty text.
    pub fn resolve_or_empty(&self, cell: &CellValue) -> String {
        self.resolve(cell).unwrap_or_default()
    }
}
