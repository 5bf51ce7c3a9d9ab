//! sumgrid - UI-agnostic table engine for a minimal interactive spreadsheet.
//!
//! The engine owns an in-memory table (ordered columns, row-major cells)
//! that a presentation layer grows with append-row / append-column actions
//! and extends with additive column formulas (`Total = A + B`). Each update
//! cycle delivers one bundle of candidate actions; the engine picks the
//! most recent one, applies it, and returns a full snapshot plus an error
//! flag. Rendering, widget layout, and serving belong to the caller.

pub mod actions;
pub mod controller;
pub mod error;
pub mod formula;
pub mod naming;
pub mod table;

pub use actions::{ActionKind, Timestamp, resolve};
pub use controller::{ColumnHeader, EventBundle, TableController, UpdateResult};
pub use error::{Result, SumgridError};
pub use formula::{Assignment, apply_assignment, parse_assignment};
pub use naming::column_name;
pub use table::{PLACEHOLDER, Row, Table, Value};
