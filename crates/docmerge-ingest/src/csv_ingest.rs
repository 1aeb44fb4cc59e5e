#![deny(unsafe_code)]

use std::collections::BTreeMap;

use docmerge_model::{CellValue, Row, Table};

use crate::error::Result;
use crate::header::normalize_headers;

/// Parse CSV bytes into a [`Table`].
///
/// The first record is the header row. Field values are whitespace-trimmed
/// and empty fields become [`CellValue::Missing`]. Records with no value in
/// any column are dropped.
pub fn ingest_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let raw_headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let columns = normalize_headers(&raw_headers);

    let mut table = Table::new(columns.clone());
    for record in reader.records() {
        let record = record?;

        let mut cells: BTreeMap<String, CellValue> = BTreeMap::new();
        for (column, value) in columns.iter().zip(record.iter()) {
            let value = value.trim();
            let cell = if value.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value.to_string())
            };
            cells.insert(column.clone(), cell);
        }

        if cells.values().all(CellValue::is_missing) {
            continue;
        }
        table.push_row(Row::new(cells));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_trims_values() {
        let table = ingest_csv(b" Name ,Age\n Jane , 30 \n").unwrap();

        assert_eq!(table.columns, vec!["Name", "Age"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0].get("Name"), &CellValue::text("Jane"));
        assert_eq!(table.rows[0].get("Age"), &CellValue::text("30"));
    }

    #[test]
    fn empty_fields_become_missing() {
        let table = ingest_csv(b"A,B\nx,\n").unwrap();

        assert_eq!(table.rows[0].get("A"), &CellValue::text("x"));
        assert_eq!(table.rows[0].get("B"), &CellValue::Missing);
    }

    #[test]
    fn drops_records_with_no_values() {
        let table = ingest_csv(b"A,B\n,\nx,y\n").unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0].get("A"), &CellValue::text("x"));
    }

    #[test]
    fn short_records_are_padded() {
        let table = ingest_csv(b"A,B\nonly\n").unwrap();

        assert_eq!(table.rows[0].get("A"), &CellValue::text("only"));
        assert_eq!(table.rows[0].get("B"), &CellValue::Missing);
    }

    #[test]
    fn duplicate_headers_stay_addressable() {
        let table = ingest_csv(b"Name,Name\nfirst,second\n").unwrap();

        assert_eq!(table.columns, vec!["Name", "Name.1"]);
        assert_eq!(table.rows[0].get("Name"), &CellValue::text("first"));
        assert_eq!(table.rows[0].get("Name.1"), &CellValue::text("second"));
    }

    #[test]
    fn headers_only_yields_empty_table() {
        let table = ingest_csv(b"A,B\n").unwrap();
        assert!(table.is_empty());
    }
}
