//! High-level API module for table export.
//!
//! # Example
//!
//! ```ignore
//! use linegrid_core::api::{DestinationConfig, ExportOptions, FileDestination, export_table};
//! use linegrid_core::diagnostics::TracingSink;
//!
//! let mut dest = FileDestination::new(DestinationConfig::in_dir("/tmp"));
//! let outcome = export_table(&mut selection, &mut dest, &ExportOptions::default(), &mut TracingSink)?;
//! ```

pub mod builder;
pub mod destination;
pub mod high_level;
pub mod source;

// Re-export for convenience
pub use builder::ExportBuilder;
pub use destination::{
    DEFAULT_FILE_NAME, Destination, DestinationConfig, FileDestination, WriterDestination,
};
pub use high_level::{ExportOptions, ExportOutcome, RenderedTable, export_table, render_table};
#[cfg(feature = "serde")]
pub use source::JsonSource;
pub use source::{GeometrySource, Selection};
