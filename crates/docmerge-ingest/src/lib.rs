pub mod csv_ingest;
pub mod error;
pub mod format;
pub mod header;
pub mod loader;
pub mod sheet_ingest;

pub use csv_ingest::ingest_csv;
pub use error::{IngestError, Result};
pub use format::TableFormat;
pub use header::normalize_headers;
pub use loader::{load_table, load_table_from_path};
pub use sheet_ingest::ingest_sheet;
