#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use docmerge_model::{CellValue, Row, Table};

use crate::error::Result;
use crate::header::normalize_headers;

/// Parse workbook bytes (`.xlsx` or `.xls`) into a [`Table`].
///
/// Only the first sheet is read. The first row supplies the column headers;
/// later rows become table rows. Rows with no value in any column are
/// dropped. A workbook without sheets or data yields an empty table.
pub fn ingest_sheet(bytes: &[u8]) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_names = workbook.sheet_names();
    let Some(sheet_name) = sheet_names.first().cloned() else {
        return Ok(Table::new(Vec::new()));
    };
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Table::new(Vec::new()));
    };
    let raw_headers: Vec<String> = header_row.iter().map(ToString::to_string).collect();
    let columns = normalize_headers(&raw_headers);

    let mut table = Table::new(columns.clone());
    for data_row in rows {
        let mut cells: BTreeMap<String, CellValue> = BTreeMap::new();
        for (column, cell) in columns.iter().zip(data_row.iter()) {
            cells.insert(column.clone(), cell_from_data(cell));
        }
        if cells.values().all(CellValue::is_missing) {
            continue;
        }
        table.push_row(Row::new(cells));
    }

    Ok(table)
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Missing,
        Data::String(value) => text_or_missing(value),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        other => text_or_missing(&other.to_string()),
    }
}

fn text_or_missing(value: &str) -> CellValue {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::CompressionMethod;
    use zip::write::FileOptions;

    use super::*;

    /// Build a minimal xlsx container around the given worksheet XML bodies.
    fn xlsx_fixture(sheets: &[&str]) -> Vec<u8> {
        let mut content_types = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
             <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
             <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
             <Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>",
        );
        let mut workbook_sheets = String::new();
        let mut workbook_rels = String::new();
        for (i, _) in sheets.iter().enumerate() {
            let n = i + 1;
            content_types.push_str(&format!(
                "<Override PartName=\"/xl/worksheets/sheet{n}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>"
            ));
            workbook_sheets.push_str(&format!(
                "<sheet name=\"Sheet{n}\" sheetId=\"{n}\" r:id=\"rId{n}\"/>"
            ));
            workbook_rels.push_str(&format!(
                "<Relationship Id=\"rId{n}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet{n}.xml\"/>"
            ));
        }
        content_types.push_str("</Types>");

        let workbook = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
             xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
             <sheets>{workbook_sheets}</sheets></workbook>"
        );
        let workbook_rels = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
             {workbook_rels}</Relationships>"
        );
        let root_rels = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
             <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\
             </Relationships>";

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut put = |name: &str, body: &str| {
            writer.start_file(name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        };
        put("[Content_Types].xml", &content_types);
        put("_rels/.rels", root_rels);
        put("xl/workbook.xml", &workbook);
        put("xl/_rels/workbook.xml.rels", &workbook_rels);
        for (i, sheet) in sheets.iter().enumerate() {
            put(&format!("xl/worksheets/sheet{}.xml", i + 1), sheet);
        }

        writer.finish().unwrap().into_inner()
    }

    fn worksheet(rows: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
             <sheetData>{rows}</sheetData></worksheet>"
        )
    }

    fn inline(cell: &str, value: &str) -> String {
        format!("<c r=\"{cell}\" t=\"inlineStr\"><is><t>{value}</t></is></c>")
    }

    #[test]
    fn loads_first_sheet_only() {
        let sheet1 = worksheet(&format!(
            "<row r=\"1\">{}{}{}</row><row r=\"2\">{}<c r=\"B2\"><v>30</v></c></row>",
            inline("A1", "Name"),
            inline("B1", "Age"),
            inline("C1", "Note"),
            inline("A2", "Jane"),
        ));
        let sheet2 = worksheet(&format!(
            "<row r=\"1\">{}</row><row r=\"2\">{}</row>",
            inline("A1", "Other"),
            inline("A2", "ignored"),
        ));
        let table = ingest_sheet(&xlsx_fixture(&[&sheet1, &sheet2])).unwrap();

        assert_eq!(table.columns, vec!["Name", "Age", "Note"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0].get("Name"), &CellValue::text("Jane"));
        assert_eq!(table.rows[0].get("Age"), &CellValue::Number(30.0));
        assert_eq!(table.rows[0].get("Note"), &CellValue::Missing);
    }

    #[test]
    fn drops_rows_with_no_values() {
        let sheet = worksheet(&format!(
            "<row r=\"1\">{}</row><row r=\"2\">{}</row><row r=\"3\">{}</row>",
            inline("A1", "Name"),
            inline("A2", " "),
            inline("A3", "Jane"),
        ));
        let table = ingest_sheet(&xlsx_fixture(&[&sheet])).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0].get("Name"), &CellValue::text("Jane"));
    }

    #[test]
    fn workbook_without_sheets_yields_empty_table() {
        let table = ingest_sheet(&xlsx_fixture(&[])).unwrap();
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn header_cells_are_trimmed_and_deduplicated() {
        let sheet = worksheet(&format!(
            "<row r=\"1\">{}{}</row><row r=\"2\">{}{}</row>",
            inline("A1", " Name "),
            inline("B1", "Name"),
            inline("A2", "first"),
            inline("B2", "second"),
        ));
        let table = ingest_sheet(&xlsx_fixture(&[&sheet])).unwrap();

        assert_eq!(table.columns, vec!["Name", "Name.1"]);
        assert_eq!(table.rows[0].get("Name.1"), &CellValue::text("second"));
    }
}
