#![deny(unsafe_code)]

use std::collections::BTreeMap;

static MISSING_CELL: CellValue = CellValue::Missing;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True only for the dedicated missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// True for the missing marker and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(value) => value.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// String form used for filenames and document bodies.
    ///
    /// Integral numbers render without a fractional part so spreadsheet
    /// integer cells and CSV digit strings agree.
    pub fn render(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => render_number(*value),
            Self::Missing => String::new(),
        }
    }
}

fn render_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(cells: BTreeMap<String, CellValue>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING_CELL)
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding absent columns with `Missing` and dropping
    /// cells for columns the table does not know.
    pub fn push_row(&mut self, mut row: Row) {
        row.cells.retain(|column, _| self.columns.contains(column));
        for column in &self.columns {
            row.cells
                .entry(column.clone())
                .or_insert(CellValue::Missing);
        }
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_null_values(&self) -> bool {
        self.rows
            .iter()
            .any(|row| self.columns.iter().any(|column| row.get(column).is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, CellValue)]) -> Row {
        Row::new(
            pairs
                .iter()
                .map(|(name, value)| ((*name).to_string(), value.clone()))
                .collect(),
        )
    }

    #[test]
    fn push_row_pads_missing_and_drops_unknown_columns() {
        let mut table = Table::new(vec!["A".to_string(), "B".to_string()]);
        table.push_row(row(&[
            ("A", CellValue::text("1")),
            ("Z", CellValue::text("ignored")),
        ]));

        let pushed = &table.rows[0];
        assert_eq!(pushed.get("A"), &CellValue::text("1"));
        assert_eq!(pushed.get("B"), &CellValue::Missing);
        assert!(!pushed.cells.contains_key("Z"));
    }

    #[test]
    fn empty_detection_covers_missing_and_blank_text() {
        assert!(CellValue::Missing.is_empty());
        assert!(CellValue::text("").is_empty());
        assert!(!CellValue::text(" ").is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
        assert!(CellValue::Missing.is_missing());
        assert!(!CellValue::text("").is_missing());
    }

    #[test]
    fn numbers_render_without_spurious_fraction() {
        assert_eq!(CellValue::Number(3.0).render(), "3");
        assert_eq!(CellValue::Number(2.5).render(), "2.5");
        assert_eq!(CellValue::Number(-7.0).render(), "-7");
        assert_eq!(CellValue::Missing.render(), "");
    }

    #[test]
    fn has_null_values_scans_every_column() {
        let mut table = Table::new(vec!["A".to_string(), "B".to_string()]);
        table.push_row(row(&[
            ("A", CellValue::text("x")),
            ("B", CellValue::text("y")),
        ]));
        assert!(!table.has_null_values());

        table.push_row(row(&[("A", CellValue::text("z"))]));
        assert!(table.has_null_values());
    }
}
