//! Drawing primitives and grid settings.

use ordered_float::OrderedFloat;

/// Decimal digits kept when normalizing boundary coordinates.
pub(crate) const DEFAULT_PRECISION: u32 = 3;

/// Largest precision an `f64` can carry meaningfully.
pub const MAX_PRECISION: u32 = 15;

// Key type for ordered float sets
pub(crate) type KeyF64 = OrderedFloat<f64>;

pub(crate) fn key_f64(v: f64) -> KeyF64 {
    OrderedFloat(v)
}

/// A 2D point in drawing units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight ruling line. Only the endpoint coordinates matter; which end
/// is `start` has no effect on the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Orientation at the given precision, or `None` for a diagonal.
    ///
    /// A segment collapsed to a single point counts as horizontal.
    pub fn orientation(&self, precision: u32) -> Option<Orientation> {
        let same_y = round_coord(self.start.y, precision) == round_coord(self.end.y, precision);
        let same_x = round_coord(self.start.x, precision) == round_coord(self.end.x, precision);
        if same_y {
            Some(Orientation::Horizontal)
        } else if same_x {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }
}

/// A piece of placed text with its anchor point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextLabel {
    pub text: String,
    pub position: Point,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, position: impl Into<Point>) -> Self {
        Self {
            text: text.into(),
            position: position.into(),
        }
    }
}

/// How segments that are neither horizontal nor vertical are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DiagonalPolicy {
    /// Pool both endpoints like any other segment.
    #[default]
    Include,
    /// Leave the segment out of the boundary pools.
    Skip,
    /// Fail the export.
    Reject,
}

impl std::str::FromStr for DiagonalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "include" => Ok(DiagonalPolicy::Include),
            "skip" => Ok(DiagonalPolicy::Skip),
            "reject" => Ok(DiagonalPolicy::Reject),
            other => Err(format!("unknown diagonal policy: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridSettings {
    pub precision: u32,
    pub diagonal_policy: DiagonalPolicy,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            diagonal_policy: DiagonalPolicy::Include,
        }
    }
}

/// Round a coordinate to `precision` decimal digits, ties to even.
///
/// `precision` is capped at [`MAX_PRECISION`]. The result is not finite when
/// `v` is too large to scale.
pub fn round_coord(v: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let rounded = (v * scale).round_ties_even() / scale;
    // Fold -0.0 into 0.0 so both land on one boundary.
    if rounded == 0.0 { 0.0 } else { rounded }
}
