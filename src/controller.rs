//! Per-cycle orchestration between the presentation layer and the table.
//!
//! The controller owns the live [`Table`] (no ambient globals), applies at
//! most one winning action per update cycle, and always hands back a full
//! snapshot. Failures never escape as errors: parse failures, unknown
//! columns, and internal-consistency aborts all fold into the snapshot's
//! error flag with the table left unchanged.

use crate::actions::{self, ActionKind, Timestamp};
use crate::formula::{apply_assignment, parse_assignment};
use crate::table::{Row, Table};
use serde::{Deserialize, Serialize};

/// One cycle's worth of candidate actions from the presentation layer.
///
/// Each timestamp is the most recent invocation of that action, or `None`
/// if it has never fired. `expression` is the current contents of the
/// expression text field; it is only consulted when submit wins the cycle.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EventBundle {
    pub add_row_at: Option<Timestamp>,
    pub add_column_at: Option<Timestamp>,
    pub submit_at: Option<Timestamp>,
    pub expression: String,
}

/// Column header record as consumed by the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub name: String,
    pub id: String,
}

/// Snapshot returned to the presentation layer after every cycle.
///
/// `error` drives the visible "Invalid expression" toggle; the table data
/// is always present, mutated or not.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateResult {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Row>,
    pub error: bool,
}

/// Owns the live table and applies one winning action per update cycle.
pub struct TableController {
    table: Table,
}

impl TableController {
    pub fn new(table: Table) -> TableController {
        TableController { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Run one update cycle.
    ///
    /// Resolves the winning action (the listing order AddRow, AddColumn,
    /// SubmitExpression doubles as the tie-break order), mutates the table
    /// accordingly, and returns the new snapshot. A cycle with no fired
    /// action returns the table unchanged with the error flag clear.
    pub fn update(&mut self, events: &EventBundle) -> UpdateResult {
        let winner = actions::resolve(&[
            (ActionKind::AddRow, events.add_row_at),
            (ActionKind::AddColumn, events.add_column_at),
            (ActionKind::SubmitExpression, events.submit_at),
        ]);

        let error = match winner {
            None => false,
            Some(ActionKind::AddRow) => {
                self.table.append_row();
                false
            }
            Some(ActionKind::AddColumn) => self.table.append_column().is_err(),
            Some(ActionKind::SubmitExpression) => match parse_assignment(&events.expression) {
                None => true,
                Some(assignment) => apply_assignment(&mut self.table, &assignment).is_err(),
            },
        };

        self.snapshot(error)
    }

    /// Accept an externally edited snapshot (e.g. the user typed into a
    /// rendered cell).
    ///
    /// This path never sets the error flag: a snapshot that would break the
    /// table invariant is discarded and the prior table returned instead.
    pub fn replace(&mut self, columns: Vec<String>, rows: Vec<Row>) -> UpdateResult {
        let _ = self.table.replace_all(columns, rows);
        self.snapshot(false)
    }

    fn snapshot(&self, error: bool) -> UpdateResult {
        UpdateResult {
            columns: self
                .table
                .columns()
                .iter()
                .map(|name| ColumnHeader {
                    name: name.clone(),
                    id: name.clone(),
                })
                .collect(),
            rows: self.table.rows().to_vec(),
            error,
        }
    }
}
