//! Table reconstruction from ruling lines and placed text.
//!
//! Segment endpoints define the column and row boundaries, an empty grid is
//! allocated against them, and each label is written into the cell that
//! contains its anchor point.

mod assign;
mod grid;
mod types;

pub use assign::{AssignSummary, CellAssigner};
pub use grid::{Boundaries, CellGrid, GridBuilder, GridLayout, Placement};
pub use types::{
    DiagonalPolicy, GridSettings, LineSegment, MAX_PRECISION, Orientation, Point, TextLabel,
    round_coord,
};
