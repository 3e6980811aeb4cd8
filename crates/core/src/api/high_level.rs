//! High-level export API.
//!
//! Provides the main public entry points:
//! - `render_table()` - Rebuild the grid from a selection and render CSV
//! - `export_table()` - Collect, render and persist in one pass

use crate::converter::{CsvConverter, CsvSettings};
use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::error::Result;
use crate::table::{AssignSummary, Boundaries, CellAssigner, CellGrid, GridBuilder, GridSettings};

use super::destination::Destination;
use super::source::{GeometrySource, Selection};

/// Options for table export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    /// Boundary derivation settings.
    pub grid: GridSettings,
    /// Output separators.
    pub csv: CsvSettings,
}

/// A rebuilt table and its CSV rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub boundaries: Boundaries,
    pub grid: CellGrid,
    pub summary: AssignSummary,
    pub csv: String,
}

/// Result of an [`export_table`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The source yielded nothing; no output was produced.
    NothingSelected,
    Written {
        rows: usize,
        columns: usize,
        placed: usize,
        dropped: usize,
        bytes: usize,
    },
}

/// Rebuild the grid for `selection` and render it as CSV.
///
/// Degenerate grids and labels outside the grid are not errors; only
/// malformed coordinates fail.
///
/// # Example
/// ```
/// use linegrid_core::api::{ExportOptions, Selection, render_table};
/// use linegrid_core::diagnostics::NullSink;
/// use linegrid_core::table::{LineSegment, TextLabel};
///
/// let mut segments = Vec::new();
/// for v in [0.0, 10.0, 20.0] {
///     segments.push(LineSegment::new((0.0, v), (20.0, v)));
///     segments.push(LineSegment::new((v, 0.0), (v, 20.0)));
/// }
/// let selection = Selection::new(segments, vec![TextLabel::new("Q1", (5.0, 15.0))]);
/// let table = render_table(&selection, &ExportOptions::default(), &mut NullSink).unwrap();
/// assert_eq!(table.csv, "Q1,\n,\n");
/// ```
pub fn render_table(
    selection: &Selection,
    options: &ExportOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<RenderedTable> {
    let mut layout = GridBuilder::new(options.grid.clone()).build(&selection.segments, sink)?;
    let summary = CellAssigner::new().assign(&mut layout, &selection.labels, sink)?;
    let csv = CsvConverter::new(options.csv.clone()).render(&layout.grid);
    if sink.enabled() {
        sink.emit(DiagnosticEvent::Serialized {
            content: csv.clone(),
        });
    }
    Ok(RenderedTable {
        boundaries: layout.boundaries,
        grid: layout.grid,
        summary,
        csv,
    })
}

/// Collect from `source`, rebuild the table and persist its CSV.
///
/// An empty selection ends early with [`ExportOutcome::NothingSelected`]
/// and leaves the destination untouched. A destination failure is returned
/// as an error.
pub fn export_table<S, D>(
    source: &mut S,
    destination: &mut D,
    options: &ExportOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<ExportOutcome>
where
    S: GeometrySource + ?Sized,
    D: Destination + ?Sized,
{
    let Some(selection) = source.collect()? else {
        tracing::debug!("nothing selected, skipping export");
        return Ok(ExportOutcome::NothingSelected);
    };
    tracing::debug!(
        segments = selection.segments.len(),
        labels = selection.labels.len(),
        "selection collected"
    );

    let table = render_table(&selection, options, sink)?;
    destination.persist(&table.csv)?;
    tracing::info!(
        destination = %destination.describe(),
        rows = table.grid.rows(),
        columns = table.grid.columns(),
        "table exported"
    );

    Ok(ExportOutcome::Written {
        rows: table.grid.rows(),
        columns: table.grid.columns(),
        placed: table.summary.placed,
        dropped: table.summary.dropped,
        bytes: table.csv.len(),
    })
}
