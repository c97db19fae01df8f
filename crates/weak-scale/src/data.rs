// File: crates/weak-scale/src/data.rs
// Summary: The measured iteration breakdowns and the figure layout they are shown in.

use stackplot_core::dataset::group_positions;
use stackplot_core::grid::linspace;
use stackplot_core::legend::Legend;
use stackplot_core::{
    render_comparison, Axis, Category, Comparison, Dataset, Figure, Palette, Side, StackReport,
    StackedGroupRenderer,
};

/// Number of worker-count configurations.
const N: usize = 2;
/// Horizontal padding on both sides of the bar groups.
const MARGIN: f64 = 0.2;
/// Y axis runs to `Y_TOP * 10` seconds with a tick every 10.
const Y_TOP: usize = 5;
const LEGEND_COLUMNS: usize = 3;

/// Nimbus (current, left) against PhysBAM (reference, right), seconds per iteration.
pub fn weak_scale() -> Comparison {
    let n_colors = 3.0;
    let greens = Palette::greens().normalized(0.0, n_colors + 1.0);
    let reds = Palette::reds().normalized(0.0, n_colors + 1.0);

    // no batching for Nimbus
    let current = Dataset::new("Nimbus", Side::Left)
        .with_colors(greens.colors([3.0, 2.0, 1.0, 0.0]))
        // avg(run)
        .with_category(Category::new("run time", vec![vec![11.90, 12.20]]))
        // avg(block) + avg(idle) - min_worker(idle)
        .with_category(Category::new("synch time", vec![vec![12.09, 19.42]]))
        .with_category(Category::new(
            "idle time",
            vec![
                // controller: assignment, messaging queue, template instantiation
                vec![0.67, 3.38],
                // parent (driver) task execution
                vec![0.14, 0.83],
                // min_worker(idle) minus the two above
                vec![0.52, 0.71],
            ],
        ));

    let reference = Dataset::new("PhysBAM", Side::Right)
        .with_colors(reds.colors([3.0, 2.0, 1.0]))
        .with_category(Category::new("run time", vec![vec![11.85, 12.42]]))
        .with_category(Category::new("synch time", vec![vec![12.88, 19.27]]));

    Comparison {
        ticks: group_positions(N),
        tick_labels: vec!["8 (64)".to_string(), "64 (512)".to_string()],
        reference,
        current,
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

/// Stack both datasets into a new figure and frame it with axes and legend.
pub fn build_figure(cmp: &Comparison) -> stackplot_core::Result<(Figure, StackReport)> {
    let renderer = StackedGroupRenderer::new();
    let mut fig = Figure::new();
    let report = render_comparison(&renderer, &mut fig, cmp)?;
    fig.set_legend(Legend::from_segments(&report.handles(), &cmp.legend_labels, LEGEND_COLUMNS)?);

    let half = renderer.bar_width / 2.0;
    let tick_at: Vec<f64> = cmp.ticks.iter().map(|t| t + half).collect();
    fig.x_axis = Axis::new("Number of workers (#cores)", -0.2 - MARGIN, N as f64 - 0.5 + 0.6 + MARGIN)
        .with_labeled_ticks(tick_at, cmp.tick_labels.clone());
    // explicit ticks widen the range past the tallest stack
    let mut y_axis = Axis::new("Iteration length (seconds)", 0.0, fig.scene.max_top());
    y_axis.ticks = linspace(0.0, (Y_TOP * 10) as f64, Y_TOP + 1);
    fig.y_axis = y_axis.expand_to_ticks();
    Ok((fig, report))
}
