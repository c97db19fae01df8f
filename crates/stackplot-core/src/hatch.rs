// File: crates/stackplot-core/src/hatch.rs
// Summary: Hatch textures that tell apart sub-series sharing a fill color.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Hatch {
    #[default]
    None,
    /// Lines running from top-left to bottom-right.
    Backslash,
    /// Lines running from bottom-left to top-right.
    ForwardSlash,
}

/// Hatch per sub-series position within a category.
pub const HATCH_SEQUENCE: [Hatch; 3] = [Hatch::None, Hatch::Backslash, Hatch::ForwardSlash];

impl Hatch {
    /// Hatch for the `position`-th sub-series of a category, cycling through [`HATCH_SEQUENCE`].
    pub fn for_position(position: usize) -> Hatch {
        HATCH_SEQUENCE[position % HATCH_SEQUENCE.len()]
    }

    /// Unit direction of the hatch lines in screen space (y grows downward).
    pub fn direction(self) -> Option<(f32, f32)> {
        match self {
            Hatch::None => None,
            Hatch::Backslash => Some((1.0, 1.0)),
            Hatch::ForwardSlash => Some((1.0, -1.0)),
        }
    }
}

impl FromStr for Hatch {
    type Err = Error;

    /// Accepts the matplotlib spellings (`""`, `"\\"`, `"//"`, repeated for density)
    /// and the names `none`, `backslash`, `slash`/`forward-slash`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("none") {
            return Ok(Hatch::None);
        }
        if t.chars().all(|c| c == '\\') || t.eq_ignore_ascii_case("backslash") {
            return Ok(Hatch::Backslash);
        }
        if t.chars().all(|c| c == '/')
            || t.eq_ignore_ascii_case("slash")
            || t.eq_ignore_ascii_case("forward-slash")
        {
            return Ok(Hatch::ForwardSlash);
        }
        Err(Error::InvalidHatchPattern(s.to_string()))
    }
}

impl fmt::Display for Hatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hatch::None => f.write_str("none"),
            Hatch::Backslash => f.write_str("\\\\"),
            Hatch::ForwardSlash => f.write_str("//"),
        }
    }
}
