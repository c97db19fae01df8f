// File: crates/stackplot-core/tests/common/mod.rs
// Purpose: Shared fixtures: the measured weak-scaling breakdown for two worker counts.

#![allow(dead_code)]

use stackplot_core::{Category, Comparison, Dataset, Palette, Rgba, Side};

pub const TICKS: [f64; 2] = [0.0, 1.5];

pub fn current() -> Dataset {
    let greens = Palette::greens().normalized(0.0, 4.0);
    Dataset::new("Nimbus", Side::Left)
        .with_colors(greens.colors([3.0, 2.0, 1.0, 0.0]))
        .with_category(Category::new("run time", vec![vec![11.90, 12.20]]))
        .with_category(Category::new("synch time", vec![vec![12.09, 19.42]]))
        .with_category(Category::new(
            "idle time",
            vec![vec![0.67, 3.38], vec![0.14, 0.83], vec![0.52, 0.71]],
        ))
}

pub fn reference() -> Dataset {
    let reds = Palette::reds().normalized(0.0, 4.0);
    Dataset::new("PhysBAM", Side::Right)
        .with_colors(reds.colors([3.0, 2.0, 1.0]))
        .with_category(Category::new("run time", vec![vec![11.85, 12.42]]))
        .with_category(Category::new("synch time", vec![vec![12.88, 19.27]]))
}

pub fn comparison() -> Comparison {
    Comparison {
        ticks: TICKS.to_vec(),
        tick_labels: vec!["8 (64)".into(), "64 (512)".into()],
        reference: reference(),
        current: current(),
        legend_labels: [
            "PhysBAM:Compute",
            "PhysBAM:Synch",
            "Nimbus:Compute",
            "Nimbus:Synch",
            "Nimbus:Idle(Controller)",
            "Nimbus:Idle(Driver Task)",
            "Nimbus:Idle(Messaging)",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

pub const OPAQUE_GREY: Rgba = Rgba::new(0.5, 0.5, 0.5, 1.0);

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
