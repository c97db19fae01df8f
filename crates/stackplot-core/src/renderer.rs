// File: crates/stackplot-core/src/renderer.rs
// Summary: Stacked group renderer: draws one sub-series on top of a running per-tick bottom.

use tracing::debug;

use crate::error::{Error, Result, Sequence};
use crate::hatch::Hatch;
use crate::surface::{BarRect, DrawSurface, LabelKind, SegmentHandle, TextLabel};
use crate::types::{Rgba, Side, BAR_WIDTH, CUMULATIVE_LABEL_OFFSET, LABEL_THRESHOLD};

/// One sub-series to stack: a value per tick plus its visual style.
#[derive(Clone, Copy, Debug)]
pub struct SegmentSpec<'a> {
    pub values: &'a [f64],
    pub ticks: &'a [f64],
    pub fill: Rgba,
    pub hatch: Hatch,
    pub side: Side,
    /// Also label each bar with the stack total it reaches.
    pub label_cumulative: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackedGroupRenderer {
    pub bar_width: f64,
    pub label_threshold: f64,
    pub cumulative_offset: f64,
}

impl Default for StackedGroupRenderer {
    fn default() -> Self {
        Self {
            bar_width: BAR_WIDTH,
            label_threshold: LABEL_THRESHOLD,
            cumulative_offset: CUMULATIVE_LABEL_OFFSET,
        }
    }
}

impl StackedGroupRenderer {
    pub fn new() -> Self { Self::default() }

    /// Draw `segment` with bases taken from `bottom`, then add its values into `bottom`.
    ///
    /// Inputs are validated before anything is drawn, so an error leaves both
    /// the surface and `bottom` untouched.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        segment: &SegmentSpec<'_>,
        bottom: &mut [f64],
    ) -> Result<SegmentHandle> {
        validate(segment, bottom)?;

        let bars: Vec<BarRect> = segment
            .values
            .iter()
            .zip(segment.ticks)
            .zip(bottom.iter())
            .map(|((&height, &tick), &base)| BarRect {
                x: segment.side.center(tick, self.bar_width),
                width: self.bar_width,
                base,
                height,
            })
            .collect();

        let mut labels = Vec::new();
        for bar in &bars {
            if bar.height > self.label_threshold {
                labels.push(TextLabel {
                    x: bar.x,
                    y: bar.mid_y(),
                    text: format_value(bar.height),
                    kind: LabelKind::Segment,
                });
            }
            if segment.label_cumulative {
                labels.push(TextLabel {
                    x: bar.x,
                    y: bar.top() + self.cumulative_offset,
                    text: format_value(bar.height + bar.base),
                    kind: LabelKind::Cumulative,
                });
            }
        }

        let handle = surface.draw_bars(bars, segment.fill, segment.hatch)?;
        for label in labels {
            surface.draw_text(label)?;
        }

        for (b, v) in bottom.iter_mut().zip(segment.values) {
            *b += v;
        }
        debug!(group = handle.index(), ?bottom, "stacked segment");
        Ok(handle)
    }
}

/// One decimal place, as shown on every bar label.
pub fn format_value(v: f64) -> String {
    format!("{v:.1}")
}

fn validate(segment: &SegmentSpec<'_>, bottom: &[f64]) -> Result<()> {
    if segment.values.len() != segment.ticks.len() {
        return Err(Error::mismatch(
            Sequence::Values,
            segment.values.len(),
            Sequence::TickPositions,
            segment.ticks.len(),
        ));
    }
    if bottom.len() != segment.ticks.len() {
        return Err(Error::mismatch(
            Sequence::Bottom,
            bottom.len(),
            Sequence::TickPositions,
            segment.ticks.len(),
        ));
    }
    if let Some((index, &value)) = segment
        .values
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(Error::InvalidValue { index, value });
    }
    Ok(())
}
