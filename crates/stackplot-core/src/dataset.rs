// File: crates/stackplot-core/src/dataset.rs
// Summary: Dataset model: categories of sub-series, one value per tick, plus per-dataset style.

use crate::error::{Error, Result, Sequence};
use crate::types::{Rgba, Side};

/// One value per tick position.
pub type SubSeries = Vec<f64>;

/// Sub-series stacked in order under one logical heading ("run time", "idle time", ...).
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub name: String,
    pub series: Vec<SubSeries>,
}

impl Category {
    pub fn new(name: impl Into<String>, series: Vec<SubSeries>) -> Self {
        Self { name: name.into(), series }
    }
}

/// Ordered categories drawn as one stack per tick on one side of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub side: Side,
    /// Fill for category `i` is `colors[i]`.
    pub colors: Vec<Rgba>,
    pub categories: Vec<Category>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self { name: name.into(), side, colors: Vec::new(), categories: Vec::new() }
    }

    pub fn with_colors(mut self, colors: Vec<Rgba>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Number of bar groups this dataset draws.
    pub fn segment_count(&self) -> usize {
        self.categories.iter().map(|c| c.series.len()).sum()
    }

    /// Per-tick sum of every sub-series.
    pub fn totals(&self, ticks: usize) -> Vec<f64> {
        let mut out = vec![0.0; ticks];
        for s in self.categories.iter().flat_map(|c| c.series.iter()) {
            for (o, v) in out.iter_mut().zip(s) {
                *o += v;
            }
        }
        out
    }

    /// Check every sub-series against `ticks` and that each category has a color.
    pub fn validate(&self, ticks: usize) -> Result<()> {
        if self.colors.len() < self.categories.len() {
            return Err(Error::mismatch(
                Sequence::Colors,
                self.colors.len(),
                Sequence::Categories,
                self.categories.len(),
            ));
        }
        for s in self.categories.iter().flat_map(|c| c.series.iter()) {
            if s.len() != ticks {
                return Err(Error::mismatch(Sequence::Values, s.len(), Sequence::TickPositions, ticks));
            }
            if let Some((index, &value)) = s.iter().enumerate().find(|(_, v)| !v.is_finite() || **v < 0.0) {
                return Err(Error::InvalidValue { index, value });
            }
        }
        Ok(())
    }
}

/// Reference and current datasets compared tick by tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub ticks: Vec<f64>,
    pub tick_labels: Vec<String>,
    pub reference: Dataset,
    pub current: Dataset,
    /// One label per drawn segment, reference first, in draw order.
    pub legend_labels: Vec<String>,
}

/// Group positions `0, 1, ..., n-2` followed by `n - 0.5`, leaving a wider gap before the last group.
pub fn group_positions(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let mut out: Vec<f64> = (0..n - 1).map(|i| i as f64).collect();
    out.push(n as f64 - 0.5);
    out
}
