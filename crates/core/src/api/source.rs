//! Geometry sources: where segments and labels come from.

use crate::error::Result;
use crate::table::{LineSegment, TextLabel};

/// The drawing entities chosen for one export.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    #[cfg_attr(feature = "serde", serde(default, rename = "lines"))]
    pub segments: Vec<LineSegment>,
    #[cfg_attr(feature = "serde", serde(default, rename = "texts"))]
    pub labels: Vec<TextLabel>,
}

impl Selection {
    pub fn new(segments: Vec<LineSegment>, labels: Vec<TextLabel>) -> Self {
        Self { segments, labels }
    }

    /// True when neither segments nor labels were selected.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.labels.is_empty()
    }
}

/// Supplies the entities to export.
///
/// `Ok(None)` means nothing was selected; the export then ends without
/// writing anything.
pub trait GeometrySource {
    fn collect(&mut self) -> Result<Option<Selection>>;
}

impl GeometrySource for Selection {
    fn collect(&mut self) -> Result<Option<Selection>> {
        if self.is_empty() {
            return Ok(None);
        }
        Ok(Some(std::mem::take(self)))
    }
}

impl<F: FnMut() -> Result<Option<Selection>>> GeometrySource for F {
    fn collect(&mut self) -> Result<Option<Selection>> {
        self()
    }
}

#[cfg(feature = "serde")]
pub use json::JsonSource;

#[cfg(feature = "serde")]
mod json {
    use std::io::Read;

    use super::{GeometrySource, Selection};
    use crate::error::{Result, TableError};

    /// Reads a JSON drawing:
    /// `{"lines": [{"start": {"x": 0, "y": 0}, "end": {...}}], "texts": [{"text": "A", "position": {...}}]}`.
    ///
    /// Both arrays are optional. Blank input counts as an empty selection.
    pub struct JsonSource<R: Read> {
        reader: R,
    }

    impl<R: Read> JsonSource<R> {
        pub fn new(reader: R) -> Self {
            Self { reader }
        }
    }

    impl<R: Read> GeometrySource for JsonSource<R> {
        fn collect(&mut self) -> Result<Option<Selection>> {
            let mut raw = String::new();
            self.reader.read_to_string(&mut raw)?;
            if raw.trim().is_empty() {
                return Ok(None);
            }
            let selection: Selection = serde_json::from_str(&raw)
                .map_err(|e| TableError::Source(format!("invalid drawing JSON: {e}")))?;
            Ok((!selection.is_empty()).then_some(selection))
        }
    }
}
