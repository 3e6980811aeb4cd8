//! Error types for linegrid table export.

use std::path::PathBuf;

use thiserror::Error;

/// Which kind of drawing entity carried a bad coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Segment,
    Label,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Segment => f.write_str("segment"),
            EntityKind::Label => f.write_str("label"),
        }
    }
}

/// Primary error type for table export operations.
///
/// Grid shape anomalies (degenerate grids, labels outside the grid) are not
/// errors; only malformed input and destination failures surface here.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write table to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("non-finite coordinate in {kind} #{index}")]
    NonFiniteCoordinate { kind: EntityKind, index: usize },

    #[error("precision {precision} exceeds the maximum of {max} digits")]
    InvalidPrecision { precision: u32, max: u32 },

    #[error("segment #{index} is not axis-aligned")]
    DiagonalSegment { index: usize },

    #[error("geometry source error: {0}")]
    Source(String),
}

/// Convenience Result type alias for TableError.
pub type Result<T> = std::result::Result<T, TableError>;
