// File: crates/stackplot-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings, bar geometry).

use crate::error::{Error, Result};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1280;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 960;

/// Width of one bar in data units along x.
pub const BAR_WIDTH: f64 = 0.4;
/// Segments at or below this height get no in-bar value label.
pub const LABEL_THRESHOLD: f64 = 0.9;
/// Vertical distance (data units) between a stack top and its cumulative label.
pub const CUMULATIVE_LABEL_OFFSET: f64 = 1.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // top leaves room for the legend band above the axes
        Self::new(150, 32, 230, 130)
    }
}

/// Which side of the tick center a bar group sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Bar center for a tick at `tick` given the bar `width`.
    #[inline]
    pub fn center(self, tick: f64, width: f64) -> f64 {
        match self {
            Side::Left => tick - width / 2.0,
            Side::Right => tick + width / 2.0,
        }
    }
}

/// Straight (non-premultiplied) RGBA color, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub fn from_hex(rgb: u32) -> Self {
        let c = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Self::new(c(16), c(8), c(0), 1.0)
    }

    /// Component-wise linear interpolation, `t` in `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let m = |a: f32, b: f32| a + (b - a) * t;
        Self::new(m(self.r, other.r), m(self.g, other.g), m(self.b, other.b), m(self.a, other.a))
    }

    /// Ok when every component is finite and within `[0, 1]`.
    pub fn validate(self) -> Result<Self> {
        let ok = |v: f32| v.is_finite() && (0.0..=1.0).contains(&v);
        if ok(self.r) && ok(self.g) && ok(self.b) && ok(self.a) {
            Ok(self)
        } else {
            Err(Error::InvalidColor { r: self.r, g: self.g, b: self.b, a: self.a })
        }
    }

    /// 8-bit channels, rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}
