// File: crates/stackplot-core/src/palette.rs
// Summary: Named sequential color gradients sampled through a value normalization.
// Notes:
// - Stops are the nine ColorBrewer sequential colors, light to dark, evenly spaced.

use crate::error::{Error, Result};
use crate::types::Rgba;

const GREENS: [u32; 9] = [
    0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b,
];
const REDS: [u32; 9] = [
    0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d,
];
const BLUES: [u32; 9] = [
    0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b,
];
const GREYS: [u32; 9] = [
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
];
const ORANGES: [u32; 9] = [
    0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704,
];
const PURPLES: [u32; 9] = [
    0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d,
];

/// Sequential gradient plus the `[vmin, vmax]` range mapped onto it.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    stops: &'static [u32; 9],
    pub vmin: f64,
    pub vmax: f64,
}

impl Palette {
    pub fn greens() -> Self { Self::with_stops("Greens", &GREENS) }
    pub fn reds() -> Self { Self::with_stops("Reds", &REDS) }
    pub fn blues() -> Self { Self::with_stops("Blues", &BLUES) }
    pub fn greys() -> Self { Self::with_stops("Greys", &GREYS) }
    pub fn oranges() -> Self { Self::with_stops("Oranges", &ORANGES) }
    pub fn purples() -> Self { Self::with_stops("Purples", &PURPLES) }

    fn with_stops(name: &'static str, stops: &'static [u32; 9]) -> Self {
        Self { name, stops, vmin: 0.0, vmax: 1.0 }
    }

    /// Look a gradient up by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<Self> {
        presets()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPalette(name.to_string()))
    }

    /// Map `[vmin, vmax]` onto the gradient instead of `[0, 1]`.
    pub fn normalized(mut self, vmin: f64, vmax: f64) -> Self {
        self.vmin = vmin;
        self.vmax = vmax;
        self
    }

    /// Color at `value`; values outside the range clamp to the end stops.
    pub fn sample(&self, value: f64) -> Rgba {
        let span = self.vmax - self.vmin;
        let t = if span.abs() < 1e-12 { 0.0 } else { ((value - self.vmin) / span).clamp(0.0, 1.0) };
        let scaled = t * (self.stops.len() - 1) as f64;
        let lo = scaled.floor() as usize;
        if lo >= self.stops.len() - 1 {
            return Rgba::from_hex(self.stops[self.stops.len() - 1]);
        }
        let frac = (scaled - lo as f64) as f32;
        if frac == 0.0 {
            return Rgba::from_hex(self.stops[lo]);
        }
        Rgba::from_hex(self.stops[lo]).lerp(Rgba::from_hex(self.stops[lo + 1]), frac)
    }

    /// Colors for each value of `values`, in order.
    pub fn colors(&self, values: impl IntoIterator<Item = f64>) -> Vec<Rgba> {
        values.into_iter().map(|v| self.sample(v)).collect()
    }
}

/// Return a list of built-in gradients.
pub fn presets() -> Vec<Palette> {
    vec![
        Palette::greens(),
        Palette::reds(),
        Palette::blues(),
        Palette::greys(),
        Palette::oranges(),
        Palette::purples(),
    ]
}
