use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use stackplot_core::legend::Legend;
use stackplot_core::{
    render_comparison, Axis, Category, Comparison, Dataset, Figure, Palette, RenderOptions, Scene, Side,
    StackedGroupRenderer,
};

/// A comparison with `ticks` groups and `depth` sub-series per category.
fn build_comparison(ticks: usize, depth: usize) -> Comparison {
    let series = |seed: f64| -> Vec<Vec<f64>> {
        (0..depth)
            .map(|j| (0..ticks).map(|i| ((i + j) as f64 * 0.37 + seed).sin().abs() * 4.0).collect())
            .collect()
    };
    let reds = Palette::reds().normalized(0.0, 4.0);
    let greens = Palette::greens().normalized(0.0, 4.0);
    let reference = Dataset::new("reference", Side::Right)
        .with_colors(reds.colors([3.0, 2.0]))
        .with_category(Category::new("run", series(0.1)))
        .with_category(Category::new("synch", series(0.7)));
    let current = Dataset::new("current", Side::Left)
        .with_colors(greens.colors([3.0, 2.0, 1.0]))
        .with_category(Category::new("run", series(1.3)))
        .with_category(Category::new("synch", series(1.9)))
        .with_category(Category::new("idle", series(2.5)));
    let segments = reference.segment_count() + current.segment_count();
    Comparison {
        ticks: (0..ticks).map(|i| i as f64).collect(),
        tick_labels: (0..ticks).map(|i| format!("{i}")).collect(),
        reference,
        current,
        legend_labels: (0..segments).map(|i| format!("segment {i}")).collect(),
    }
}

fn bench_stack(c: &mut Criterion) {
    let renderer = StackedGroupRenderer::new();
    let mut group = c.benchmark_group("stack_scene");
    for &ticks in &[2usize, 256usize] {
        let cmp = build_comparison(ticks, 3);
        group.bench_function(format!("ticks_{ticks}"), |b| {
            b.iter(|| -> Result<()> {
                let mut scene = Scene::new();
                let report = render_comparison(&renderer, &mut scene, &cmp)?;
                black_box((scene, report));
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let cmp = build_comparison(2, 3);
    let mut fig = Figure::new();
    let report = render_comparison(&StackedGroupRenderer::new(), &mut fig, &cmp).expect("stack");
    fig.set_legend(Legend::from_segments(&report.handles(), &cmp.legend_labels, 3).expect("legend"));
    fig.x_axis = Axis::new("X", -0.6, 1.6).with_labeled_ticks(cmp.ticks.clone(), cmp.tick_labels.clone());
    fig.y_axis = Axis::new("Y", 0.0, 50.0).with_even_ticks(6);

    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.height = 600;
    opts.draw_labels = false;
    group.bench_function("weak_scale", |b| {
        b.iter(|| -> Result<()> {
            let bytes = fig.render_to_png_bytes(&opts)?;
            black_box(bytes);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_stack, bench_render);
criterion_main!(benches);
