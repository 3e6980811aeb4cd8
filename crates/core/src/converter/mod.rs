//! Output converters for rebuilt tables.
//!
//! - CsvConverter: row-per-line, delimiter-joined text

mod csv;

pub use csv::{CsvConverter, CsvSettings, LineEnding};
