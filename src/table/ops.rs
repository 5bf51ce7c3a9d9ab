//! Table mutations.
//!
//! Every operation validates before it mutates, so a failed operation
//! leaves the prior table state intact.

use super::state::{Row, Table, Value};
use crate::error::{Result, SumgridError};
use crate::naming::column_name;

impl Table {
    /// Append one row with every current column set to the placeholder.
    pub fn append_row(&mut self) {
        let row: Row = self
            .columns()
            .iter()
            .map(|name| (name.clone(), Value::placeholder()))
            .collect();
        self.rows_mut().push(row);
    }

    /// Append an auto-named column, filling every existing row with the
    /// placeholder. Returns the generated name.
    ///
    /// The name is `column_name(current_column_count)`, so tables seeded
    /// with A, B, C grow D, E, ... in sequence. A collision with an
    /// existing column means the naming invariant was broken upstream and
    /// aborts without mutating.
    pub fn append_column(&mut self) -> Result<String> {
        let name = column_name(self.column_count());
        if self.has_column(&name) {
            return Err(SumgridError::DuplicateColumn(name));
        }
        self.columns_mut().push(name.clone());
        for row in self.rows_mut() {
            row.insert(name.clone(), Value::placeholder());
        }
        Ok(name)
    }

    /// Overwrite a whole column, in row order.
    ///
    /// `values` must have exactly one entry per row. If the column does not
    /// exist it is appended at the end of the column order before the
    /// overwrite.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        if name.is_empty() {
            return Err(SumgridError::EmptyColumnName);
        }
        if values.len() != self.row_count() {
            return Err(SumgridError::LengthMismatch {
                column: name.to_string(),
                expected: self.row_count(),
                got: values.len(),
            });
        }
        if !self.has_column(name) {
            self.columns_mut().push(name.to_string());
        }
        for (row, value) in self.rows_mut().iter_mut().zip(values) {
            row.insert(name.to_string(), value);
        }
        Ok(())
    }

    /// Replace the whole table with an externally edited snapshot.
    ///
    /// Normalization and validation follow [`Table::from_snapshot`]; an
    /// invalid snapshot leaves the current table untouched.
    pub fn replace_all(&mut self, columns: Vec<String>, rows: Vec<Row>) -> Result<()> {
        *self = Table::from_snapshot(columns, rows)?;
        Ok(())
    }
}
