// File: crates/stackplot-core/src/stack.rs
// Summary: Driver loops that stack every sub-series of a dataset, and both datasets of a comparison.

use tracing::info;

use crate::dataset::{Comparison, Dataset};
use crate::error::{Error, Result, Sequence};
use crate::hatch::Hatch;
use crate::renderer::{SegmentSpec, StackedGroupRenderer};
use crate::surface::{DrawSurface, SegmentHandle};

/// Result of stacking one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetStack {
    /// Handles in draw order.
    pub handles: Vec<SegmentHandle>,
    /// Stack height per tick after the last sub-series.
    pub bottom: Vec<f64>,
}

/// Result of stacking a whole comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct StackReport {
    pub reference: DatasetStack,
    pub current: DatasetStack,
}

impl StackReport {
    /// Every handle in draw order, reference first.
    pub fn handles(&self) -> Vec<SegmentHandle> {
        self.reference.handles.iter().chain(&self.current.handles).copied().collect()
    }
}

/// Stack every sub-series of `dataset` over `ticks`, starting from a zero bottom.
///
/// Hatch follows the sub-series position inside its category. Only the last
/// sub-series of the last category carries the cumulative label.
pub fn render_dataset<S: DrawSurface + ?Sized>(
    renderer: &StackedGroupRenderer,
    surface: &mut S,
    dataset: &Dataset,
    ticks: &[f64],
) -> Result<DatasetStack> {
    dataset.validate(ticks.len())?;

    let mut bottom = vec![0.0; ticks.len()];
    let mut handles = Vec::with_capacity(dataset.segment_count());
    let last_category = dataset.categories.len().saturating_sub(1);

    for (i, category) in dataset.categories.iter().enumerate() {
        let last_series = category.series.len().saturating_sub(1);
        for (j, values) in category.series.iter().enumerate() {
            let segment = SegmentSpec {
                values,
                ticks,
                fill: dataset.colors[i],
                hatch: Hatch::for_position(j),
                side: dataset.side,
                label_cumulative: i == last_category && j == last_series,
            };
            handles.push(renderer.render(surface, &segment, &mut bottom)?);
        }
    }

    info!(dataset = %dataset.name, segments = handles.len(), ?bottom, "dataset stacked");
    Ok(DatasetStack { handles, bottom })
}

/// Stack the reference dataset, then the current one, each on its own fresh bottom.
pub fn render_comparison<S: DrawSurface + ?Sized>(
    renderer: &StackedGroupRenderer,
    surface: &mut S,
    comparison: &Comparison,
) -> Result<StackReport> {
    let segments = comparison.reference.segment_count() + comparison.current.segment_count();
    if comparison.legend_labels.len() != segments {
        return Err(Error::mismatch(
            Sequence::LegendLabels,
            comparison.legend_labels.len(),
            Sequence::Segments,
            segments,
        ));
    }
    // validate both before touching the surface
    comparison.reference.validate(comparison.ticks.len())?;
    comparison.current.validate(comparison.ticks.len())?;

    let reference = render_dataset(renderer, surface, &comparison.reference, &comparison.ticks)?;
    let current = render_dataset(renderer, surface, &comparison.current, &comparison.ticks)?;
    Ok(StackReport { reference, current })
}
