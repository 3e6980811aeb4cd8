//! Diagnostic events emitted while a table is rebuilt.
//!
//! The grid builder, the cell assigner and the export pipeline report what
//! they see (collected segments, computed boundaries, label placements, the
//! final CSV) to an injected [`DiagnosticSink`]. Sinks only observe; the
//! output never depends on which sink is installed.

use crate::table::{LineSegment, Point};

/// Why a label did not land in any cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Fewer than two boundaries on an axis, so there are no cells at all.
    DegenerateGrid,
    /// Anchor X is left of the first column boundary.
    LeftOfGrid,
    /// Anchor X is on or beyond the last column boundary.
    RightOfGrid,
    /// Anchor Y is above the top row boundary.
    AboveGrid,
    /// Anchor Y is on or below the bottom row boundary.
    BelowGrid,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DropReason::DegenerateGrid => "grid has no cells",
            DropReason::LeftOfGrid => "left of grid",
            DropReason::RightOfGrid => "right of grid",
            DropReason::AboveGrid => "above grid",
            DropReason::BelowGrid => "below grid",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DiagnosticEvent {
    SegmentCollected {
        index: usize,
        segment: LineSegment,
    },
    /// A diagonal segment left out under `DiagonalPolicy::Skip`.
    SegmentSkipped {
        index: usize,
        segment: LineSegment,
    },
    BoundariesComputed {
        columns: Vec<f64>,
        rows: Vec<f64>,
    },
    LabelMapped {
        text: String,
        position: Point,
        row: usize,
        col: usize,
        /// Content that was in the cell before this label overwrote it.
        replaced: Option<String>,
    },
    LabelDropped {
        text: String,
        position: Point,
        reason: DropReason,
    },
    Serialized {
        content: String,
    },
}

/// Receiver for [`DiagnosticEvent`]s.
pub trait DiagnosticSink {
    fn emit(&mut self, event: DiagnosticEvent);

    /// Producers skip building events when this returns false.
    fn enabled(&self) -> bool {
        true
    }
}

impl<F: FnMut(&DiagnosticEvent)> DiagnosticSink for F {
    fn emit(&mut self, event: DiagnosticEvent) {
        self(&event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _event: DiagnosticEvent) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<DiagnosticEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropped(&self) -> impl Iterator<Item = (&str, DropReason)> {
        self.events.iter().filter_map(|e| match e {
            DiagnosticEvent::LabelDropped { text, reason, .. } => Some((text.as_str(), *reason)),
            _ => None,
        })
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, event: DiagnosticEvent) {
        self.events.push(event);
    }
}

/// Forwards events to the `tracing` facade at debug level (trace for the
/// full CSV content).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::SegmentCollected { index, segment } => tracing::debug!(
                index,
                start.x = segment.start.x,
                start.y = segment.start.y,
                end.x = segment.end.x,
                end.y = segment.end.y,
                "segment collected"
            ),
            DiagnosticEvent::SegmentSkipped { index, segment } => tracing::debug!(
                index,
                start.x = segment.start.x,
                start.y = segment.start.y,
                end.x = segment.end.x,
                end.y = segment.end.y,
                "diagonal segment skipped"
            ),
            DiagnosticEvent::BoundariesComputed { columns, rows } => {
                tracing::debug!(?columns, ?rows, "boundaries computed")
            }
            DiagnosticEvent::LabelMapped {
                text,
                position,
                row,
                col,
                replaced,
            } => tracing::debug!(
                %text,
                x = position.x,
                y = position.y,
                row,
                col,
                ?replaced,
                "label mapped to cell"
            ),
            DiagnosticEvent::LabelDropped {
                text,
                position,
                reason,
            } => tracing::debug!(
                %text,
                x = position.x,
                y = position.y,
                %reason,
                "label dropped"
            ),
            DiagnosticEvent::Serialized { content } => {
                tracing::trace!(bytes = content.len(), %content, "table serialized")
            }
        }
    }

    fn enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }
}
