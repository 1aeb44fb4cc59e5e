pub mod options;
pub mod policy;
pub mod records;
pub mod table;

use std::collections::BTreeMap;

pub use options::{
    ColumnRequirement, DEFAULT_NAME_COLUMNS, Enforcement, GenerateRequest, PreviewOptions,
};
pub use policy::{DEFAULT_NULL_REPLACEMENT, NullPolicy};
pub use records::RecordsError;
pub use table::{CellValue, Row, Table};

/// Per-column sanitizer feedback; absent entries mean "no issue".
pub type ColumnFeedback = BTreeMap<String, String>;
