//! Additive column formulas: parsing and evaluation.

mod eval;
mod expr;

pub use eval::apply_assignment;
pub use expr::{Assignment, parse_assignment};
