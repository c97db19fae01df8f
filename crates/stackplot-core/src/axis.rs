// File: crates/stackplot-core/src/axis.rs
// Summary: Axis model with label, range and explicit ticks.

use crate::grid::linspace;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
    /// Text per tick; formatted tick values are used when unset.
    pub tick_labels: Option<Vec<String>>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Vec::new(), tick_labels: None }
    }

    /// `count` evenly spaced ticks over the current range.
    pub fn with_even_ticks(mut self, count: usize) -> Self {
        self.ticks = linspace(self.min, self.max, count);
        self
    }

    /// Explicit ticks and their labels.
    pub fn with_labeled_ticks(mut self, ticks: Vec<f64>, labels: Vec<String>) -> Self {
        self.ticks = ticks;
        self.tick_labels = Some(labels);
        self
    }

    /// Widen the range so every tick is visible.
    pub fn expand_to_ticks(mut self) -> Self {
        for &t in &self.ticks {
            self.min = self.min.min(t);
            self.max = self.max.max(t);
        }
        self
    }

    /// Label for tick `i`.
    pub fn tick_label(&self, i: usize) -> String {
        match self.tick_labels.as_ref().and_then(|l| l.get(i)) {
            Some(s) => s.clone(),
            None => format_tick(self.ticks.get(i).copied().unwrap_or_default()),
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new("", 0.0, 1.0)
    }
}

/// Integers without a fraction, otherwise up to two decimals.
fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
