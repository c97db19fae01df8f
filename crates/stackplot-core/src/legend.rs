// File: crates/stackplot-core/src/legend.rs
// Summary: Legend entries (reverse draw order) and their column-major grid layout.

use crate::error::{Error, Result, Sequence};
use crate::surface::SegmentHandle;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub handle: SegmentHandle,
    pub label: String,
}

/// Frameless legend spanning the plot width above the axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub columns: usize,
}

impl Legend {
    /// Pair `handles` with `labels` (both in draw order) and list them last-drawn first.
    pub fn from_segments(handles: &[SegmentHandle], labels: &[String], columns: usize) -> Result<Self> {
        if handles.len() != labels.len() {
            return Err(Error::mismatch(
                Sequence::Segments,
                handles.len(),
                Sequence::LegendLabels,
                labels.len(),
            ));
        }
        let entries = handles
            .iter()
            .rev()
            .zip(labels.iter().rev())
            .map(|(&handle, label)| LegendEntry { handle, label: label.clone() })
            .collect();
        Ok(Self { entries, columns: columns.max(1) })
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn rows(&self) -> usize {
        self.entries.len().div_ceil(self.columns.max(1))
    }

    /// Entries per column. The first `len % columns` columns hold one extra entry.
    pub fn column_sizes(&self) -> Vec<usize> {
        let columns = self.columns.max(1);
        let (base, extra) = (self.entries.len() / columns, self.entries.len() % columns);
        (0..columns).map(|col| base + usize::from(col < extra)).collect()
    }

    /// (row, column) of every entry; entries fill a column before moving right.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        self.column_sizes()
            .into_iter()
            .enumerate()
            .flat_map(|(col, size)| (0..size).map(move |row| (row, col)))
            .collect()
    }
}
