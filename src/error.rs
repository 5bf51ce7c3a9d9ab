//! Error types for the table engine.

use thiserror::Error;

/// Errors that can occur during table mutations and formula evaluation.
///
/// `UnknownColumn` is the only user-visible rejection (a formula referenced
/// a column that does not exist). The remaining variants signal a broken
/// invariant upstream; callers abort the offending mutation and keep the
/// prior table state.
#[derive(Error, Debug)]
pub enum SumgridError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column already exists: {0}")]
    DuplicateColumn(String),

    #[error("Column name is empty")]
    EmptyColumnName,

    #[error("Row {0} out of range")]
    RowOutOfRange(usize),

    #[error("Column '{column}' expects {expected} values, got {got}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, SumgridError>;
