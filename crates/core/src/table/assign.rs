//! Label placement into grid cells.

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::error::{EntityKind, Result, TableError};

use super::grid::{GridLayout, Placement};
use super::types::TextLabel;

/// Counts from one assignment pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssignSummary {
    /// Labels written into a cell, including ones later overwritten.
    pub placed: usize,
    /// Labels whose anchor fell outside every cell.
    pub dropped: usize,
    /// Writes that replaced earlier content in the same cell.
    pub collisions: usize,
}

/// Writes label text into the cells containing their anchors.
///
/// Labels are applied in input order and the last write to a cell wins.
/// Anchors outside the grid are dropped without error.
#[derive(Clone, Copy, Debug, Default)]
pub struct CellAssigner;

impl CellAssigner {
    pub fn new() -> Self {
        Self
    }

    pub fn assign(
        &self,
        layout: &mut GridLayout,
        labels: &[TextLabel],
        sink: &mut dyn DiagnosticSink,
    ) -> Result<AssignSummary> {
        if let Some(index) = labels.iter().position(|l| !l.position.is_finite()) {
            return Err(TableError::NonFiniteCoordinate {
                kind: EntityKind::Label,
                index,
            });
        }

        let mut summary = AssignSummary::default();
        for label in labels {
            match layout.boundaries.locate(label.position) {
                Placement::Cell { row, col } => {
                    let replaced = layout.grid.set(row, col, label.text.clone());
                    summary.placed += 1;
                    if replaced.is_some() {
                        summary.collisions += 1;
                    }
                    if sink.enabled() {
                        sink.emit(DiagnosticEvent::LabelMapped {
                            text: label.text.clone(),
                            position: label.position,
                            row,
                            col,
                            replaced,
                        });
                    }
                }
                Placement::Outside(reason) => {
                    summary.dropped += 1;
                    tracing::debug!(text = %label.text, %reason, "label outside grid");
                    if sink.enabled() {
                        sink.emit(DiagnosticEvent::LabelDropped {
                            text: label.text.clone(),
                            position: label.position,
                            reason,
                        });
                    }
                }
            }
        }
        Ok(summary)
    }
}
