//! Builder pattern for table export.
//!
//! Provides a fluent API for configuring and running an export.
//!
//! # Example
//! ```ignore
//! use linegrid_core::api::ExportBuilder;
//!
//! let csv = ExportBuilder::new()
//!     .precision(2)
//!     .delimiter(';')
//!     .render(&selection)?
//!     .csv;
//! ```

use crate::converter::LineEnding;
use crate::diagnostics::{DiagnosticSink, NullSink};
use crate::error::Result;
use crate::table::DiagonalPolicy;

use super::destination::Destination;
use super::high_level::{ExportOptions, ExportOutcome, RenderedTable, export_table, render_table};
use super::source::{GeometrySource, Selection};

/// A builder for configuring table export.
///
/// Wraps [`ExportOptions`] and the high-level functions.
#[derive(Debug, Clone, Default)]
pub struct ExportBuilder {
    options: ExportOptions,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decimal digits kept when normalizing boundary coordinates.
    pub fn precision(mut self, digits: u32) -> Self {
        self.options.grid.precision = digits;
        self
    }

    pub fn diagonal_policy(mut self, policy: DiagonalPolicy) -> Self {
        self.options.grid.diagonal_policy = policy;
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.options.csv.delimiter = delimiter;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.options.csv.line_ending = line_ending;
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn into_options(self) -> ExportOptions {
        self.options
    }

    /// Rebuild and render without diagnostics.
    pub fn render(&self, selection: &Selection) -> Result<RenderedTable> {
        render_table(selection, &self.options, &mut NullSink)
    }

    pub fn render_with(
        &self,
        selection: &Selection,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<RenderedTable> {
        render_table(selection, &self.options, sink)
    }

    pub fn export<S, D>(
        &self,
        source: &mut S,
        destination: &mut D,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<ExportOutcome>
    where
        S: GeometrySource + ?Sized,
        D: Destination + ?Sized,
    {
        export_table(source, destination, &self.options, sink)
    }
}
