// File: crates/stackplot-core/tests/stack.rs
// Purpose: Driver loops over whole datasets, comparison ordering and legend construction.

mod common;

use common::{approx, comparison, current, reference, TICKS};
use stackplot_core::legend::Legend;
use stackplot_core::{
    render_comparison, render_dataset, Error, Hatch, LabelKind, Scene, Sequence, Side, StackedGroupRenderer,
};

#[test]
fn current_dataset_totals_and_single_cumulative_label_per_tick() {
    let renderer = StackedGroupRenderer::new();
    let mut scene = Scene::new();
    let stack = render_dataset(&renderer, &mut scene, &current(), &TICKS).unwrap();

    assert!(approx(stack.bottom[0], 25.32), "{:?}", stack.bottom);
    assert!(approx(stack.bottom[1], 36.54), "{:?}", stack.bottom);
    assert_eq!(stack.handles.len(), 5);
    for (b, t) in stack.bottom.iter().zip(current().totals(TICKS.len())) {
        assert!(approx(*b, t));
    }

    let cumulative: Vec<_> = scene.labels_of(LabelKind::Cumulative).map(|l| l.text.as_str()).collect();
    assert_eq!(cumulative, vec!["25.3", "36.5"]);
}

#[test]
fn hatch_follows_position_within_category() {
    let renderer = StackedGroupRenderer::new();
    let mut scene = Scene::new();
    render_dataset(&renderer, &mut scene, &current(), &TICKS).unwrap();

    let hatches: Vec<Hatch> = scene.groups.iter().map(|g| g.hatch).collect();
    assert_eq!(
        hatches,
        vec![Hatch::None, Hatch::None, Hatch::None, Hatch::Backslash, Hatch::ForwardSlash]
    );
    // idle contributors share the third category color
    assert_eq!(scene.groups[2].fill, scene.groups[4].fill);
    assert_ne!(scene.groups[0].fill, scene.groups[1].fill);
}

#[test]
fn small_idle_segments_stay_unlabeled() {
    let renderer = StackedGroupRenderer::new();
    let mut scene = Scene::new();
    render_dataset(&renderer, &mut scene, &current(), &TICKS).unwrap();

    let texts: Vec<_> = scene.labels_of(LabelKind::Segment).map(|l| l.text.as_str()).collect();
    // 0.67, 0.14, 0.83, 0.52 and 0.71 fall below the threshold
    assert_eq!(texts, vec!["11.9", "12.2", "12.1", "19.4", "3.4"]);
}

#[test]
fn comparison_resets_bottom_between_datasets() {
    let renderer = StackedGroupRenderer::new();
    let mut scene = Scene::new();
    let report = render_comparison(&renderer, &mut scene, &comparison()).unwrap();

    assert!(approx(report.reference.bottom[0], 11.85 + 12.88));
    assert!(approx(report.reference.bottom[1], 12.42 + 19.27));
    assert!(approx(report.current.bottom[0], 25.32));

    // first current segment starts from zero, not from the reference stack
    let first_current = scene.group(report.current.handles[0]).unwrap();
    assert!(first_current.bars.iter().all(|b| b.base == 0.0));
    assert!(first_current.bars.iter().all(|b| approx(b.x, TICKS[0] - 0.2) || approx(b.x, TICKS[1] - 0.2)));

    let first_reference = scene.group(report.reference.handles[0]).unwrap();
    assert!(approx(first_reference.bars[1].x, TICKS[1] + 0.2));

    // reference drawn first
    let order: Vec<_> = report.handles().iter().map(|h| h.index()).collect();
    assert_eq!(order, (0..7).collect::<Vec<_>>());
    assert_eq!(scene.labels_of(LabelKind::Cumulative).count(), 4);
}

#[test]
fn legend_lists_last_drawn_first() {
    let renderer = StackedGroupRenderer::new();
    let mut scene = Scene::new();
    let cmp = comparison();
    let report = render_comparison(&renderer, &mut scene, &cmp).unwrap();
    let legend = Legend::from_segments(&report.handles(), &cmp.legend_labels, 3).unwrap();

    assert_eq!(legend.len(), 7);
    assert_eq!(legend.entries[0].label, "Nimbus:Idle(Messaging)");
    assert_eq!(legend.entries[0].handle.index(), 6);
    assert_eq!(legend.entries[6].label, "PhysBAM:Compute");
    assert_eq!(legend.entries[6].handle.index(), 0);
}

#[test]
fn legend_fills_columns_first() {
    let handles = {
        let renderer = StackedGroupRenderer::new();
        let mut scene = Scene::new();
        render_comparison(&renderer, &mut scene, &comparison()).unwrap().handles()
    };
    let labels = comparison().legend_labels;
    let legend = Legend::from_segments(&handles, &labels, 3).unwrap();
    assert_eq!(legend.rows(), 3);
    assert_eq!(legend.column_sizes(), vec![3, 2, 2]);
    assert_eq!(
        legend.cells(),
        vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
    );
    // PhysBAM:Synch heads the last column
    assert_eq!(legend.entries[5].label, "PhysBAM:Synch");
}

#[test]
fn legend_spreads_short_columns_to_the_right() {
    let names = |n: usize| (0..n).map(|k| format!("s{k}")).collect::<Vec<_>>();
    let handles = |n: usize| {
        let mut scene = Scene::new();
        let renderer = StackedGroupRenderer::new();
        (0..n)
            .map(|_| {
                let segment = stackplot_core::SegmentSpec {
                    values: &[1.0],
                    ticks: &[0.0],
                    fill: common::OPAQUE_GREY,
                    hatch: Hatch::None,
                    side: Side::Left,
                    label_cumulative: false,
                };
                renderer.render(&mut scene, &segment, &mut [0.0]).unwrap()
            })
            .collect::<Vec<_>>()
    };

    let four = Legend::from_segments(&handles(4), &names(4), 3).unwrap();
    assert_eq!(four.column_sizes(), vec![2, 1, 1]);
    assert_eq!(four.cells(), vec![(0, 0), (1, 0), (0, 1), (0, 2)]);

    let two = Legend::from_segments(&handles(2), &names(2), 3).unwrap();
    assert_eq!(two.rows(), 1);
    assert_eq!(two.cells(), vec![(0, 0), (0, 1)]);
}

#[test]
fn legend_label_count_must_match() {
    let renderer = StackedGroupRenderer::new();
    let mut scene = Scene::new();
    let mut cmp = comparison();
    cmp.legend_labels.pop();
    let err = render_comparison(&renderer, &mut scene, &cmp).unwrap_err();
    assert!(matches!(err, Error::InputLengthMismatch { left: Sequence::LegendLabels, left_len: 6, .. }));
    assert!(scene.is_empty());

    let err = Legend::from_segments(&[], &["x".to_string()], 3).unwrap_err();
    assert!(matches!(err, Error::InputLengthMismatch { left: Sequence::Segments, .. }));
}

#[test]
fn bad_series_anywhere_aborts_before_drawing() {
    let renderer = StackedGroupRenderer::new();
    let mut scene = Scene::new();
    let mut cmp = comparison();
    cmp.current.categories[2].series[1] = vec![0.14, 0.83, 0.5];
    let err = render_comparison(&renderer, &mut scene, &cmp).unwrap_err();
    assert!(matches!(err, Error::InputLengthMismatch { left: Sequence::Values, left_len: 3, right_len: 2, .. }));
    assert!(scene.is_empty());
}

#[test]
fn missing_category_color_is_reported() {
    let renderer = StackedGroupRenderer::new();
    let mut scene = Scene::new();
    let mut data = reference();
    data.colors.truncate(1);
    let err = render_dataset(&renderer, &mut scene, &data, &TICKS).unwrap_err();
    assert!(matches!(err, Error::InputLengthMismatch { left: Sequence::Colors, left_len: 1, right: Sequence::Categories, right_len: 2 }));
    assert_eq!(data.side, Side::Right);
}
