// File: crates/stackplot-core/src/surface.rs
// Summary: Draw-primitive seam between the stacking logic and the figure backend.
// Notes:
// - Coordinates are data coordinates; the figure maps them to pixels at render time.
// - `Scene` records primitives in call order and is what `Figure` rasterizes.

use tracing::debug;

use crate::error::Result;
use crate::hatch::Hatch;
use crate::types::Rgba;

/// Opaque handle to one drawn bar group, used to build the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SegmentHandle(pub(crate) usize);

impl SegmentHandle {
    /// Position of the group in draw order.
    pub fn index(self) -> usize { self.0 }
}

/// One filled rectangle in data coordinates; `x` is the bar center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub width: f64,
    pub base: f64,
    pub height: f64,
}

impl BarRect {
    pub fn left(&self) -> f64 { self.x - self.width / 2.0 }
    pub fn right(&self) -> f64 { self.x + self.width / 2.0 }
    pub fn top(&self) -> f64 { self.base + self.height }
    /// Vertical center of the rectangle.
    pub fn mid_y(&self) -> f64 { self.base + self.height / 2.0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    /// Segment value drawn inside the bar.
    Segment,
    /// Running stack total drawn above the bar.
    Cumulative,
}

/// Text centered on (`x`, `y`) in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub kind: LabelKind,
}

/// Bars drawn by one call, sharing fill and hatch.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnGroup {
    pub bars: Vec<BarRect>,
    pub fill: Rgba,
    pub hatch: Hatch,
}

/// Capabilities the stacked renderer needs from a plotting backend.
pub trait DrawSurface {
    /// Draw a group of filled, hatched rectangles and return its handle.
    fn draw_bars(&mut self, bars: Vec<BarRect>, fill: Rgba, hatch: Hatch) -> Result<SegmentHandle>;
    /// Draw a centered text label.
    fn draw_text(&mut self, label: TextLabel) -> Result<()>;
}

/// In-memory record of draw calls.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub groups: Vec<DrawnGroup>,
    pub labels: Vec<TextLabel>,
}

impl Scene {
    pub fn new() -> Self { Self::default() }

    pub fn group(&self, handle: SegmentHandle) -> Option<&DrawnGroup> {
        self.groups.get(handle.0)
    }

    pub fn labels_of(&self, kind: LabelKind) -> impl Iterator<Item = &TextLabel> {
        self.labels.iter().filter(move |l| l.kind == kind)
    }

    /// Highest bar top in the scene (0.0 when empty).
    pub fn max_top(&self) -> f64 {
        self.groups
            .iter()
            .flat_map(|g| g.bars.iter())
            .map(BarRect::top)
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.labels.is_empty()
    }
}

impl DrawSurface for Scene {
    fn draw_bars(&mut self, bars: Vec<BarRect>, fill: Rgba, hatch: Hatch) -> Result<SegmentHandle> {
        let fill = fill.validate()?;
        let handle = SegmentHandle(self.groups.len());
        debug!(group = handle.0, bars = bars.len(), %hatch, "draw bar group");
        self.groups.push(DrawnGroup { bars, fill, hatch });
        Ok(handle)
    }

    fn draw_text(&mut self, label: TextLabel) -> Result<()> {
        debug!(text = %label.text, x = label.x, y = label.y, kind = ?label.kind, "draw label");
        self.labels.push(label);
        Ok(())
    }
}
