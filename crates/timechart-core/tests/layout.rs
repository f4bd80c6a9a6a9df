// File: crates/timechart-core/tests/layout.rs
// Purpose: Axis column alignment, row stacking, and layout-pass error reporting.

use timechart_core::{
    compute_axis_widths, compute_layout, compute_row_offsets, AxisSlot, LayoutError, LayoutOptions, Padding,
    RowDescriptor, Side, TimeRange,
};

fn two_rows() -> Vec<RowDescriptor> {
    vec![
        RowDescriptor::new(100.0)
            .axis(AxisSlot::new("temp", 40.0))
            .plot()
            .axis(AxisSlot::new("rain", 30.0)),
        RowDescriptor::new(80.0)
            .axis(AxisSlot::new("far", 25.0))
            .axis(AxisSlot::new("near", 40.0))
            .plot(),
    ]
}

fn range() -> TimeRange {
    TimeRange::from_millis(0, 100_000).unwrap()
}

#[test]
fn widths_take_per_position_maximum() {
    let w = compute_axis_widths(&two_rows());
    assert_eq!(w.left, vec![40.0, 25.0]);
    assert_eq!(w.right, vec![30.0]);
    assert_eq!(w.left_total(), 65.0);
    assert_eq!(w.right_total(), 30.0);
    assert!(w.errors.is_empty());
}

#[test]
fn widths_ignore_row_order() {
    let mut rows = two_rows();
    let a = compute_axis_widths(&rows);
    rows.reverse();
    let b = compute_axis_widths(&rows);
    assert_eq!(a, b);
}

#[test]
fn hidden_slot_contributes_nothing() {
    let rows = vec![RowDescriptor::new(50.0)
        .axis(AxisSlot::new("a", 60.0).hidden())
        .axis(AxisSlot::named("b"))
        .plot()];
    let w = compute_axis_widths(&rows);
    assert_eq!(w.left, vec![40.0, 0.0]);
}

#[test]
fn double_plot_row_is_reported_and_siblings_still_lay_out() {
    let mut rows = two_rows();
    rows.push(RowDescriptor::new(60.0).plot().axis(AxisSlot::new("x", 90.0)).plot());

    let w = compute_axis_widths(&rows);
    assert_eq!(w.errors, vec![LayoutError::Configuration { row: 2, plot_slots: 2 }]);
    assert_eq!(w.right, vec![30.0], "broken row must not widen columns");

    let opts = LayoutOptions::default();
    let layout = compute_layout(&rows, Some(range()), &opts).expect("layout should succeed");
    assert_eq!(layout.row_errors.len(), 1);
    assert!(!layout.row_errors[0].is_fatal());
    assert!(layout.rows[2].failed);
    assert_eq!(layout.rows[2].height, 0.0);
    assert!(!layout.rows[0].failed && !layout.rows[1].failed);
}

#[test]
fn row_without_plot_is_a_configuration_error() {
    let rows = vec![RowDescriptor::new(60.0).axis(AxisSlot::named("lonely"))];
    let w = compute_axis_widths(&rows);
    assert_eq!(w.errors, vec![LayoutError::Configuration { row: 0, plot_slots: 0 }]);
}

#[test]
fn offsets_skip_hidden_rows_but_keep_their_entry() {
    let rows = vec![
        RowDescriptor::new(100.0).plot(),
        RowDescriptor::new(50.0).plot().hidden(),
        RowDescriptor::new(80.0).plot(),
        RowDescriptor::new(10.0).plot(),
    ];
    assert_eq!(compute_row_offsets(&rows), vec![0.0, 100.0, 100.0, 180.0]);
}

#[test]
fn standalone_offsets_match_layout_for_malformed_rows() {
    let rows = vec![
        RowDescriptor::new(100.0).axis(AxisSlot::named("a")).plot(),
        RowDescriptor::new(60.0).plot().plot(),
        RowDescriptor::new(40.0).axis(AxisSlot::named("b")),
        RowDescriptor::new(80.0).plot().axis(AxisSlot::named("c")),
    ];
    let opts = LayoutOptions { width: 800.0, ..LayoutOptions::default() };
    let layout = compute_layout(&rows, Some(range()), &opts).unwrap();
    assert_eq!(layout.row_offsets, vec![0.0, 100.0, 100.0, 100.0]);
    assert_eq!(compute_row_offsets(&rows), layout.row_offsets);
}

#[test]
fn plot_width_and_scale_match_container() {
    let opts = LayoutOptions { width: 800.0, ..LayoutOptions::default() };
    let layout = compute_layout(&two_rows(), Some(range()), &opts).unwrap();
    assert_eq!(layout.left_width, 65.0);
    assert_eq!(layout.right_width, 30.0);
    assert_eq!(layout.plot_width, 705.0);
    let t = timechart_core::time_range::time_from_millis(50_000);
    assert!((layout.time_scale.apply(t) - 352.5).abs() < 1e-9);
    assert_eq!(layout.row_offsets, vec![0.0, 100.0]);
}

#[test]
fn axes_are_placed_in_aligned_columns() {
    let opts = LayoutOptions { width: 800.0, ..LayoutOptions::default() };
    let layout = compute_layout(&two_rows(), Some(range()), &opts).unwrap();

    let row0 = &layout.rows[0].axes;
    assert_eq!(row0.len(), 2);
    assert_eq!((row0[0].id.as_str(), row0[0].side, row0[0].x), ("temp", Side::Left, 25.0));
    assert_eq!((row0[1].id.as_str(), row0[1].side, row0[1].x), ("rain", Side::Right, 770.0));

    let row1 = &layout.rows[1].axes;
    assert_eq!((row1[0].id.as_str(), row1[0].position, row1[0].x), ("near", 0, 25.0));
    assert_eq!((row1[1].id.as_str(), row1[1].position, row1[1].x, row1[1].width), ("far", 1, 0.0, 25.0));
}

#[test]
fn total_height_includes_title_padding_and_time_axis() {
    let opts = LayoutOptions {
        width: 800.0,
        padding: Padding::new(0.0, 0.0, 10.0, 10.0),
        title_height: 20.0,
        ..LayoutOptions::default()
    };
    let layout = compute_layout(&two_rows(), Some(range()), &opts).unwrap();
    assert_eq!(layout.total_height, 10.0 + 20.0 + 180.0 + 35.0 + 10.0);
    assert_eq!(layout.rows_top(), 30.0);
    assert_eq!(layout.time_axis_top(), 210.0);

    let hidden = LayoutOptions { hide_time_axis: true, ..opts };
    let layout = compute_layout(&two_rows(), Some(range()), &hidden).unwrap();
    assert_eq!(layout.total_height, 220.0);
}

#[test]
fn padding_shifts_the_plot() {
    let opts = LayoutOptions { width: 800.0, padding: Padding::new(10.0, 5.0, 0.0, 0.0), ..LayoutOptions::default() };
    let layout = compute_layout(&two_rows(), Some(range()), &opts).unwrap();
    assert_eq!(layout.plot_width, 690.0);
    let rect = layout.plot_rect();
    assert_eq!(rect.left, 75.0);
    assert_eq!(rect.width(), 690.0);
    assert_eq!(rect.height(), 180.0);
    assert_eq!(layout.to_plot_x(75.0), 0.0);
}

#[test]
fn narrow_container_is_degenerate() {
    let opts = LayoutOptions { width: 100.0, padding: Padding::new(5.0, 5.0, 0.0, 0.0), ..LayoutOptions::default() };
    let err = compute_layout(&two_rows(), Some(range()), &opts).unwrap_err();
    match err {
        LayoutError::DegenerateGeometry { plot_width, left_width, right_width, .. } => {
            assert_eq!(plot_width, -5.0);
            assert_eq!(left_width, 65.0);
            assert_eq!(right_width, 30.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_fatal());
}

#[test]
fn missing_or_inverted_range_fails_the_pass() {
    let opts = LayoutOptions::default();
    assert_eq!(compute_layout(&two_rows(), None, &opts).unwrap_err(), LayoutError::MissingTimeRange);
    assert_eq!(
        TimeRange::from_millis(10, 5).unwrap_err(),
        LayoutError::InvalidTimeRange { begin_ms: 10, end_ms: 5 }
    );
}
