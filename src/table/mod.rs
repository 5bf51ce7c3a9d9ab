//! Tabular document model: ordered columns plus row-major cell values.

mod ops;
mod state;

pub use state::{PLACEHOLDER, Row, Table, Value};
