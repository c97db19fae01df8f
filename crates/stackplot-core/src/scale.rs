// File: crates/stackplot-core/src/scale.rs
// Summary: Linear data-to-pixel transform for one axis.

/// Maps the data interval `[d0, d1]` onto the pixel interval `[p0, p1]`.
///
/// The pixel interval may be reversed (`p0 > p1`), which is how the vertical
/// axis grows upward on a top-left-origin canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let mut s = Self { d0, d1, p0, p1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.p0 + t as f32 * (self.p1 - self.p0)
    }
}
