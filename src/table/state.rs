//! Table state: cell values, rows, and the column/row invariant.

use crate::error::{Result, SumgridError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cell value for a newly created, not-yet-filled cell.
///
/// A single space rather than an empty string, mirroring spreadsheet
/// "empty but present" cells.
pub const PLACEHOLDER: &str = " ";

/// A single cell value.
///
/// Cells are untyped scalars: storage never enforces a numeric type, and
/// numeric interpretation is attempted on demand via [`Value::to_number`].
/// Untagged serde representation so external snapshots exchange plain
/// scalars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// The blank placeholder cell.
    pub fn placeholder() -> Value {
        Value::Text(PLACEHOLDER.to_string())
    }

    /// Coerce this cell to a number for summation.
    ///
    /// Text parses as a numeric literal; anything that fails to parse
    /// (including the blank placeholder) contributes `0.0` instead of
    /// raising. Deliberate spreadsheet leniency.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

/// A row maps each current column name to its cell value.
pub type Row = HashMap<String, Value>;

/// In-memory table: ordered column names plus row-major cells.
///
/// Invariants: column names are unique and non-empty; their order defines
/// display order; every row carries exactly the current column set as keys.
/// The table has a single owner (the controller) and a single writer per
/// update cycle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with no columns and no rows.
    pub fn new() -> Table {
        Table::default()
    }

    /// Create a table with the given columns and zero rows.
    pub fn with_columns<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Result<Table> {
        Table::from_snapshot(columns.into_iter().map(Into::into).collect(), Vec::new())
    }

    /// Build a table from an externally supplied snapshot.
    ///
    /// Duplicate or empty column names are rejected. Rows are normalized to
    /// the column set: cells missing from a row are back-filled with the
    /// placeholder, and keys outside the column list are dropped, so rows
    /// can never go ragged.
    pub fn from_snapshot(columns: Vec<String>, rows: Vec<Row>) -> Result<Table> {
        let mut seen = std::collections::HashSet::new();
        for name in &columns {
            if name.is_empty() {
                return Err(SumgridError::EmptyColumnName);
            }
            if !seen.insert(name.as_str()) {
                return Err(SumgridError::DuplicateColumn(name.clone()));
            }
        }

        let rows = rows
            .into_iter()
            .map(|mut row| {
                columns
                    .iter()
                    .map(|name| {
                        let value = row.remove(name).unwrap_or_else(Value::placeholder);
                        (name.clone(), value)
                    })
                    .collect()
            })
            .collect();

        Ok(Table { columns, rows })
    }

    /// Column names in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Get a cell value, or `None` if the row or column does not exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row)?.get(column)
    }

    /// Overwrite a single cell.
    pub fn set(&mut self, row: usize, column: &str, value: Value) -> Result<()> {
        if !self.has_column(column) {
            return Err(SumgridError::UnknownColumn(column.to_string()));
        }
        let row = self
            .rows
            .get_mut(row)
            .ok_or(SumgridError::RowOutOfRange(row))?;
        row.insert(column.to_string(), value);
        Ok(())
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<String> {
        &mut self.columns
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::{PLACEHOLDER, Table, Value};
    use std::collections::HashMap;

    #[test]
    fn test_to_number_coercion() {
        assert_eq!(Value::Number(5.0).to_number(), 5.0);
        assert_eq!(Value::from("6.5").to_number(), 6.5);
        assert_eq!(Value::from(" 7 ").to_number(), 7.0);
        assert_eq!(Value::from(PLACEHOLDER).to_number(), 0.0);
        assert_eq!(Value::from("hello").to_number(), 0.0);
        assert_eq!(Value::from("").to_number(), 0.0);
    }

    #[test]
    fn test_from_snapshot_backfills_missing_cells() {
        let rows = vec![
            HashMap::from([("A".to_string(), Value::from(1.0))]),
            HashMap::from([("B".to_string(), Value::from(2.0))]),
        ];
        let table = Table::from_snapshot(vec!["A".to_string(), "B".to_string()], rows).unwrap();

        assert_eq!(table.get(0, "A"), Some(&Value::Number(1.0)));
        assert_eq!(table.get(0, "B"), Some(&Value::placeholder()));
        assert_eq!(table.get(1, "A"), Some(&Value::placeholder()));
        assert_eq!(table.get(1, "B"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_from_snapshot_drops_unknown_keys() {
        let rows = vec![HashMap::from([
            ("A".to_string(), Value::from(1.0)),
            ("ghost".to_string(), Value::from(9.0)),
        ])];
        let table = Table::from_snapshot(vec!["A".to_string()], rows).unwrap();

        assert_eq!(table.rows()[0].len(), 1);
        assert!(table.get(0, "ghost").is_none());
    }

    #[test]
    fn test_from_snapshot_rejects_duplicate_columns() {
        let result = Table::from_snapshot(vec!["A".to_string(), "A".to_string()], Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_snapshot_rejects_empty_column_name() {
        let result = Table::from_snapshot(vec![String::new()], Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_set_unknown_column_errors() {
        let mut table = Table::with_columns(["A"]).unwrap();
        table.append_row();
        assert!(table.set(0, "B", Value::from(1.0)).is_err());
        assert!(table.set(5, "A", Value::from(1.0)).is_err());
    }
}
