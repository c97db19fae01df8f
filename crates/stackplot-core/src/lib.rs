// File: crates/stackplot-core/src/lib.rs
// Summary: Core library entry point; exports the stacked group renderer, driver loops and figure export.

pub mod error;
pub mod types;
pub mod hatch;
pub mod palette;
pub mod surface;
pub mod renderer;
pub mod dataset;
pub mod stack;
pub mod legend;
pub mod axis;
pub mod grid;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod output;
pub mod figure;

pub use error::{Error, Result, Sequence};
pub use types::{Rgba, Side};
pub use hatch::Hatch;
pub use palette::Palette;
pub use surface::{BarRect, DrawSurface, LabelKind, Scene, SegmentHandle, TextLabel};
pub use renderer::{SegmentSpec, StackedGroupRenderer};
pub use dataset::{Category, Comparison, Dataset, SubSeries};
pub use stack::{render_comparison, render_dataset, DatasetStack, StackReport};
pub use legend::Legend;
pub use axis::Axis;
pub use theme::Theme;
pub use text::TextShaper;
pub use output::{ImageFormat, Output};
pub use figure::{Figure, RenderOptions};
