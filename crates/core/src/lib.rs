//! linegrid - Rebuild tables from ruling lines and placed text.
//!
//! Ruling segment endpoints define the column and row boundaries of a grid;
//! each text label is written into the cell containing its anchor; the grid
//! is then rendered as delimited text.

pub mod api;
pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod table;

// Re-export high_level for convenience
pub use api::high_level;

pub use error::{Result, TableError};
