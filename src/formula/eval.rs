//! Assignment evaluation: per-row sums over source columns.

use super::expr::Assignment;
use crate::error::{Result, SumgridError};
use crate::table::{Table, Value};

/// Apply a parsed assignment to the table.
///
/// Every source must name an existing column; otherwise the table is left
/// untouched and `UnknownColumn` is returned. The target may be an existing
/// column, a brand-new one (appended at the end), or one of the sources:
/// all per-row sums are computed from the pre-update values before anything
/// is written, so `A = A + B` reads a consistent snapshot of `A`.
///
/// Source cells are coerced with [`Value::to_number`], so blank or textual
/// cells contribute zero rather than failing the sum.
pub fn apply_assignment(table: &mut Table, assignment: &Assignment) -> Result<()> {
    for source in &assignment.sources {
        if !table.has_column(source) {
            return Err(SumgridError::UnknownColumn(source.clone()));
        }
    }

    let sums: Vec<Value> = table
        .rows()
        .iter()
        .map(|row| {
            let total: f64 = assignment
                .sources
                .iter()
                .map(|source| row.get(source).map(Value::to_number).unwrap_or(0.0))
                .sum();
            Value::Number(total)
        })
        .collect();

    table.set_column(&assignment.target, sums)
}
