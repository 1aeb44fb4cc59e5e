//! The document-encoding seam of the pipeline.

use docmerge_docx::{DOCX_EXTENSION, DocxDocument, docx_bytes};
use docmerge_model::{NullPolicy, Row};

use crate::error::Result;

/// Heading placed at the top of every generated document.
pub const DOCUMENT_HEADING: &str = "Generated Document";

/// Renders one table row into document bytes.
///
/// The pipeline is format-agnostic past this trait: the resolver asks for
/// the extension, the generator asks for the bytes.
pub trait DocumentEncoder {
    /// File extension of encoded documents, without the dot.
    fn extension(&self) -> &'static str;

    /// Encode one row. `columns` fixes the paragraph order.
    fn encode(&self, columns: &[String], row: &Row, policy: &NullPolicy) -> Result<Vec<u8>>;
}

/// Default encoder: one WordprocessingML document per row.
///
/// The document is a level-1 heading followed by one `column: value`
/// paragraph per column. Under the omit policy a null or empty cell
/// contributes no paragraph at all; under fill it renders the replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxEncoder;

impl DocumentEncoder for DocxEncoder {
    fn extension(&self) -> &'static str {
        DOCX_EXTENSION
    }

    fn encode(&self, columns: &[String], row: &Row, policy: &NullPolicy) -> Result<Vec<u8>> {
        let mut document = DocxDocument::new();
        document.add_heading(DOCUMENT_HEADING, 1);
        for column in columns {
            if let Some(value) = policy.resolve(row.get(column)) {
                document.add_paragraph(format!("{column}: {value}"));
            }
        }
        Ok(docx_bytes(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::{Cursor, Read};

    use docmerge_model::CellValue;

    use super::*;

    fn document_xml(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name("word/document.xml").unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    fn row_with_null_age() -> (Vec<String>, Row) {
        let columns = vec!["Name".to_string(), "Age".to_string()];
        let mut cells = BTreeMap::new();
        cells.insert("Name".to_string(), CellValue::text("Jane"));
        cells.insert("Age".to_string(), CellValue::Missing);
        (columns, Row::new(cells))
    }

    #[test]
    fn omit_skips_the_paragraph_entirely() {
        let (columns, row) = row_with_null_age();
        let bytes = DocxEncoder
            .encode(&columns, &row, &NullPolicy::Omit)
            .unwrap();
        let body = document_xml(&bytes);

        assert!(body.contains("Generated Document"));
        assert!(body.contains(">Name: Jane<"));
        assert!(!body.contains("Age"));
    }

    #[test]
    fn fill_renders_the_replacement() {
        let (columns, row) = row_with_null_age();
        let bytes = DocxEncoder
            .encode(&columns, &row, &NullPolicy::fill_default())
            .unwrap();
        let body = document_xml(&bytes);

        assert!(body.contains(">Age: N/A<"));
    }

    #[test]
    fn paragraphs_follow_column_order() {
        let columns = vec!["B".to_string(), "A".to_string()];
        let mut cells = BTreeMap::new();
        cells.insert("A".to_string(), CellValue::text("second"));
        cells.insert("B".to_string(), CellValue::text("first"));
        let row = Row::new(cells);

        let bytes = DocxEncoder
            .encode(&columns, &row, &NullPolicy::Omit)
            .unwrap();
        let body = document_xml(&bytes);

        let b_at = body.find("B: first").unwrap();
        let a_at = body.find("A: second").unwrap();
        assert!(b_at < a_at);
    }
}
