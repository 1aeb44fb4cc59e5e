//! Row-oriented JSON interchange for tables.
//!
//! The preview layer hands the client a JSON array of objects, one per row,
//! and the generate call re-hydrates a [`Table`] from the same payload.
//! Column order is the order of first appearance across records, which is
//! why the workspace pins `serde_json` with `preserve_order`.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::table::{CellValue, Row, Table};

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("records payload must be a JSON array of objects")]
    NotAnArray,
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("record {index} field {field:?} holds a nested JSON value")]
    NestedValue { index: usize, field: String },
}

impl Table {
    /// Serializes the table as a JSON array of row objects.
    ///
    /// Every object carries the full column set in table order; missing
    /// cells become JSON `null`. Non-finite numbers have no JSON form and
    /// also become `null`.
    pub fn to_records(&self) -> Value {
        let records = self
            .rows
            .iter()
            .map(|row| {
                let mut object = serde_json::Map::new();
                for column in &self.columns {
                    object.insert(column.clone(), cell_to_json(row.get(column)));
                }
                Value::Object(object)
            })
            .collect();
        Value::Array(records)
    }

    /// Rebuilds a table from a JSON array of row objects.
    pub fn from_records(payload: &Value) -> Result<Self, RecordsError> {
        let records = payload.as_array().ok_or(RecordsError::NotAnArray)?;

        let mut columns: Vec<String> = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let object = record
                .as_object()
                .ok_or(RecordsError::NotAnObject { index })?;
            for field in object.keys() {
                if !columns.iter().any(|column| column == field) {
                    columns.push(field.clone());
                }
            }
        }

        let mut table = Table::new(columns);
        for (index, record) in records.iter().enumerate() {
            let object = record
                .as_object()
                .ok_or(RecordsError::NotAnObject { index })?;
            let mut cells = BTreeMap::new();
            for (field, value) in object {
                cells.insert(field.clone(), json_to_cell(value, index, field)?);
            }
            table.push_row(Row::new(cells));
        }
        Ok(table)
    }
}

fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Text(value) => Value::String(value.clone()),
        CellValue::Number(value) => number_to_json(*value),
        CellValue::Missing => Value::Null,
    }
}

// Integral values are emitted as JSON integers so payloads read back the way
// clients sent them (30, not 30.0).
fn number_to_json(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn json_to_cell(value: &Value, index: usize, field: &str) -> Result<CellValue, RecordsError> {
    match value {
        Value::Null => Ok(CellValue::Missing),
        Value::String(text) => Ok(CellValue::Text(text.clone())),
        Value::Number(number) => Ok(CellValue::Number(number.as_f64().unwrap_or(f64::NAN))),
        Value::Bool(flag) => Ok(CellValue::Text(flag.to_string())),
        Value::Array(_) | Value::Object(_) => Err(RecordsError::NestedValue {
            index,
            field: field.to_string(),
        }),
    }
}
