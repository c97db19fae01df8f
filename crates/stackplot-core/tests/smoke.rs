// File: crates/stackplot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing PNG and PDF figures.

mod common;

use stackplot_core::legend::Legend;
use stackplot_core::{render_comparison, Axis, Figure, ImageFormat, RenderOptions, StackedGroupRenderer};

fn build_figure() -> Figure {
    let cmp = common::comparison();
    let mut fig = Figure::new();
    let report = render_comparison(&StackedGroupRenderer::new(), &mut fig, &cmp).expect("stack");
    fig.set_legend(Legend::from_segments(&report.handles(), &cmp.legend_labels, 3).expect("legend"));
    fig.x_axis = Axis::new("Number of workers (#cores)", -0.4, 2.3)
        .with_labeled_ticks(vec![0.2, 1.7], cmp.tick_labels.clone());
    fig.y_axis = Axis::new("Iteration length (seconds)", 0.0, 50.0).with_even_ticks(6);
    fig
}

#[test]
fn render_smoke_png() {
    let fig = build_figure();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    let format = fig.render_to_file(&opts, &out).expect("render should succeed");
    assert_eq!(format, ImageFormat::Png);
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = fig.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_pdf() {
    let fig = build_figure();
    let out = std::path::PathBuf::from("target/test_out/nested/smoke.pdf");
    let _ = std::fs::remove_dir_all(out.parent().unwrap());

    let format = fig.render_to_file(&RenderOptions::default(), &out).expect("pdf render");
    assert_eq!(format, ImageFormat::Pdf);
    let bytes = std::fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"), "should be PDF header");
}

#[test]
fn unknown_extension_writes_nothing() {
    let fig = build_figure();
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    let _ = std::fs::remove_file(&out);
    assert!(fig.render_to_file(&RenderOptions::default(), &out).is_err());
    assert!(!out.exists());
}
