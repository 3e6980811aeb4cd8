//! CSV Converter - renders a cell grid as delimited text.
//!
//! One line per row, fields joined in column order, absent cells as empty
//! fields. Cell content is written verbatim: embedded delimiters, quotes and
//! line breaks are not escaped.

use std::io::Write;

use itertools::Itertools;

use crate::table::CellGrid;

/// Row terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CsvSettings {
    pub delimiter: char,
    pub line_ending: LineEnding,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            line_ending: LineEnding::Lf,
        }
    }
}

/// CSV Converter - serializes a populated [`CellGrid`].
#[derive(Clone, Debug, Default)]
pub struct CsvConverter {
    settings: CsvSettings,
}

impl CsvConverter {
    pub fn new(settings: CsvSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CsvSettings {
        &self.settings
    }

    /// Render the grid to a string. A grid with zero rows or zero columns
    /// renders as the empty string.
    pub fn render(&self, grid: &CellGrid) -> String {
        let mut out = String::new();
        let mut delim = [0u8; 4];
        let delim: &str = self.settings.delimiter.encode_utf8(&mut delim);
        let eol = self.settings.line_ending.as_str();
        for row in grid.iter_rows() {
            out.push_str(&row.iter().map(|c| c.as_deref().unwrap_or("")).join(delim));
            out.push_str(eol);
        }
        out
    }

    /// Render the grid into `outfp`.
    pub fn write_to<W: Write>(&self, grid: &CellGrid, outfp: &mut W) -> std::io::Result<()> {
        outfp.write_all(self.render(grid).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(rows: &[&[Option<&str>]]) -> CellGrid {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut grid = CellGrid::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(text) = cell {
                    grid.set(r, c, text.to_string());
                }
            }
        }
        grid
    }

    #[test]
    fn render_empty_cells_as_empty_fields() {
        let grid = CellGrid::new(2, 2);
        assert_eq!(CsvConverter::default().render(&grid), ",\n,\n");
    }

    #[test]
    fn render_keeps_content_verbatim() {
        let grid = grid_of(&[
            &[Some(" padded "), Some("a,b")],
            &[None, Some("line\nbreak")],
        ]);
        assert_eq!(
            CsvConverter::default().render(&grid),
            " padded ,a,b\n,line\nbreak\n"
        );
    }

    #[test]
    fn render_degenerate_grid_is_empty() {
        assert_eq!(CsvConverter::default().render(&CellGrid::new(0, 0)), "");
        assert_eq!(CsvConverter::default().render(&CellGrid::new(0, 4)), "");
        assert_eq!(CsvConverter::default().render(&CellGrid::new(3, 0)), "");
    }

    #[test]
    fn render_single_column_has_no_delimiters() {
        let grid = grid_of(&[&[Some("x")], &[None], &[Some("z")]]);
        assert_eq!(CsvConverter::default().render(&grid), "x\n\nz\n");
    }

    #[test]
    fn settings_change_separators_only() {
        let grid = grid_of(&[&[Some("1"), None, Some("3")]]);
        let converter = CsvConverter::new(CsvSettings {
            delimiter: ';',
            line_ending: LineEnding::CrLf,
        });
        assert_eq!(converter.render(&grid), "1;;3\r\n");
    }

    #[test]
    fn render_is_deterministic() {
        let grid = grid_of(&[&[Some("é"), Some("ü")], &[Some("日本"), None]]);
        let converter = CsvConverter::default();
        let first = converter.render(&grid);
        assert_eq!(first, converter.render(&grid));
        let mut buf = Vec::new();
        converter.write_to(&grid, &mut buf).unwrap();
        assert_eq!(buf, first.as_bytes());
    }
}
