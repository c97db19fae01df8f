// File: crates/stackplot-core/src/error.rs
// Summary: Error taxonomy for rendering stacked bar groups and exporting figures.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Named numeric sequence taking part in a length check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sequence {
    Values,
    TickPositions,
    Bottom,
    Colors,
    Categories,
    LegendLabels,
    Segments,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sequence::Values => "values",
            Sequence::TickPositions => "tick positions",
            Sequence::Bottom => "bottom",
            Sequence::Colors => "colors",
            Sequence::Categories => "categories",
            Sequence::LegendLabels => "legend labels",
            Sequence::Segments => "segments",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two sequences that must line up index-for-index do not.
    #[error("input length mismatch: {left} has {left_len} entries but {right} has {right_len}")]
    InputLengthMismatch {
        left: Sequence,
        left_len: usize,
        right: Sequence,
        right_len: usize,
    },

    #[error("invalid hatch pattern {0:?} (expected none, backslash or forward slash)")]
    InvalidHatchPattern(String),

    /// Bar heights must be finite and non-negative.
    #[error("invalid bar value {value} at tick {index}")]
    InvalidValue { index: usize, value: f64 },

    #[error("invalid color rgba({r}, {g}, {b}, {a}): components must be within [0, 1]")]
    InvalidColor { r: f32, g: f32, b: f32, a: f32 },

    #[error("unknown palette {0:?}")]
    UnknownPalette(String),

    #[error("unsupported output format {0:?} (expected png, jpg, webp or pdf)")]
    UnsupportedFormat(String),

    /// Failure reported by the Skia surface or encoder.
    #[error("rendering surface: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn mismatch(left: Sequence, left_len: usize, right: Sequence, right_len: usize) -> Self {
        Error::InputLengthMismatch { left, left_len, right, right_len }
    }
}
