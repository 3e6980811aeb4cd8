//! Boundary derivation and cell grid construction.
//!
//! Every segment endpoint contributes one X and one Y coordinate. After
//! rounding and deduplication the X values (ascending) delimit columns and
//! the Y values (descending, so the visually highest band is row 0)
//! delimit rows.

use std::collections::BTreeSet;

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink, DropReason};
use crate::error::{EntityKind, Result, TableError};

use super::types::{
    DiagonalPolicy, GridSettings, KeyF64, LineSegment, MAX_PRECISION, Point, key_f64, round_coord,
};

/// Ordered, distinct grid line positions for both axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Boundaries {
    /// X positions, ascending. Column `c` spans `columns[c]..columns[c + 1]`.
    pub columns: Vec<f64>,
    /// Y positions, descending. Row `r` spans `rows[r]` down to `rows[r + 1]`.
    pub rows: Vec<f64>,
}

/// Where a point falls against a set of boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Cell { row: usize, col: usize },
    Outside(DropReason),
}

impl Boundaries {
    pub fn column_count(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Column whose left edge is `<= x` and right edge is `> x`.
    pub fn column_index(&self, x: f64) -> Option<usize> {
        // First boundary strictly greater than x.
        let first_greater = self.columns.partition_point(|&b| b <= x);
        if first_greater == self.columns.len() {
            return None;
        }
        first_greater.checked_sub(1)
    }

    /// Row whose top edge is `>= y` and bottom edge is `< y`.
    pub fn row_index(&self, y: f64) -> Option<usize> {
        // First boundary strictly less than y (rows are descending).
        let first_less = self.rows.partition_point(|&b| b >= y);
        if first_less == self.rows.len() {
            return None;
        }
        first_less.checked_sub(1)
    }

    /// Locate the cell containing `p`, or say why there is none.
    pub fn locate(&self, p: Point) -> Placement {
        if self.column_count() == 0 || self.row_count() == 0 {
            return Placement::Outside(DropReason::DegenerateGrid);
        }
        let col = match self.column_index(p.x) {
            Some(col) => col,
            None if p.x < self.columns[0] => return Placement::Outside(DropReason::LeftOfGrid),
            None => return Placement::Outside(DropReason::RightOfGrid),
        };
        let row = match self.row_index(p.y) {
            Some(row) => row,
            None if p.y > self.rows[0] => return Placement::Outside(DropReason::AboveGrid),
            None => return Placement::Outside(DropReason::BelowGrid),
        };
        Placement::Cell { row, col }
    }
}

/// A rows x columns grid of optional cell text, stored row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Option<String>>,
}

impl CellGrid {
    /// Allocate a grid with every cell absent.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.columns).then_some(row * self.columns + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.offset(row, col).and_then(|i| self.cells[i].as_deref())
    }

    /// Write `text` into a cell and return what it replaced.
    ///
    /// Out-of-range indices leave the grid untouched and return `None`.
    pub fn set(&mut self, row: usize, col: usize, text: String) -> Option<String> {
        let i = self.offset(row, col)?;
        self.cells[i].replace(text)
    }

    /// Number of cells holding content.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate rows as slices of cells. Yields nothing when the grid has no
    /// columns.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        let rows = if self.columns == 0 { 0 } else { self.rows };
        (0..rows).map(move |r| &self.cells[r * self.columns..(r + 1) * self.columns])
    }

    pub fn into_rows(self) -> Vec<Vec<Option<String>>> {
        if self.columns == 0 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.rows);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.rows {
            out.push(cells.by_ref().take(self.columns).collect());
        }
        out
    }
}

/// Boundaries plus the grid allocated against them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayout {
    pub boundaries: Boundaries,
    pub grid: CellGrid,
}

/// Derives boundaries and an empty grid from ruling segments.
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    settings: GridSettings,
}

impl GridBuilder {
    pub fn new(settings: GridSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Build the boundaries and an empty grid from `segments`.
    ///
    /// Fails on a precision above [`MAX_PRECISION`], on a coordinate that is
    /// not finite before or after rounding, or on a diagonal segment under
    /// [`DiagonalPolicy::Reject`].
    pub fn build(
        &self,
        segments: &[LineSegment],
        sink: &mut dyn DiagnosticSink,
    ) -> Result<GridLayout> {
        let precision = self.settings.precision;
        if precision > MAX_PRECISION {
            return Err(TableError::InvalidPrecision {
                precision,
                max: MAX_PRECISION,
            });
        }
        let mut xs: BTreeSet<KeyF64> = BTreeSet::new();
        let mut ys: BTreeSet<KeyF64> = BTreeSet::new();

        for (index, segment) in segments.iter().enumerate() {
            let rounded = [segment.start, segment.end]
                .map(|p| Point::new(round_coord(p.x, precision), round_coord(p.y, precision)));
            if !segment.is_finite() || !rounded.iter().all(Point::is_finite) {
                return Err(TableError::NonFiniteCoordinate {
                    kind: EntityKind::Segment,
                    index,
                });
            }
            if segment.orientation(precision).is_none() {
                match self.settings.diagonal_policy {
                    DiagonalPolicy::Include => {}
                    DiagonalPolicy::Skip => {
                        if sink.enabled() {
                            sink.emit(DiagnosticEvent::SegmentSkipped {
                                index,
                                segment: *segment,
                            });
                        }
                        continue;
                    }
                    DiagonalPolicy::Reject => return Err(TableError::DiagonalSegment { index }),
                }
            }
            if sink.enabled() {
                sink.emit(DiagnosticEvent::SegmentCollected {
                    index,
                    segment: *segment,
                });
            }
            for p in rounded {
                xs.insert(key_f64(p.x));
                ys.insert(key_f64(p.y));
            }
        }

        let boundaries = Boundaries {
            columns: xs.into_iter().map(|k| k.into_inner()).collect(),
            rows: ys.into_iter().rev().map(|k| k.into_inner()).collect(),
        };
        if sink.enabled() {
            sink.emit(DiagnosticEvent::BoundariesComputed {
                columns: boundaries.columns.clone(),
                rows: boundaries.rows.clone(),
            });
        }

        let grid = CellGrid::new(boundaries.row_count(), boundaries.column_count());
        Ok(GridLayout { boundaries, grid })
    }
}
