//! Tests for grid reconstruction through the public API.

use linegrid_core::api::{ExportOptions, Selection, render_table};
use linegrid_core::diagnostics::NullSink;
use linegrid_core::table::{CellAssigner, GridBuilder, LineSegment, TextLabel, round_coord};

/// Horizontal rulings at every `ys`, vertical rulings at every `xs`.
fn ruled(xs: &[f64], ys: &[f64]) -> Vec<LineSegment> {
    let (x0, x1) = (xs[0], xs[xs.len() - 1]);
    let (y0, y1) = (ys[0], ys[ys.len() - 1]);
    let mut segments: Vec<LineSegment> = ys
        .iter()
        .map(|&y| LineSegment::new((x0, y), (x1, y)))
        .collect();
    segments.extend(xs.iter().map(|&x| LineSegment::new((x, y0), (x, y1))));
    segments
}

fn render(segments: Vec<LineSegment>, labels: Vec<TextLabel>) -> String {
    render_table(
        &Selection::new(segments, labels),
        &ExportOptions::default(),
        &mut NullSink,
    )
    .unwrap()
    .csv
}

#[test]
fn test_empty_two_by_two_grid() {
    let csv = render(ruled(&[0.0, 10.0, 20.0], &[0.0, 10.0, 20.0]), vec![]);
    assert_eq!(csv, ",\n,\n");
}

#[test]
fn test_label_in_top_left_cell() {
    let csv = render(
        ruled(&[0.0, 10.0, 20.0], &[0.0, 10.0, 20.0]),
        vec![TextLabel::new("Q1", (5.0, 15.0))],
    );
    assert_eq!(csv, "Q1,\n,\n");
}

#[test]
fn test_no_segments_gives_empty_output() {
    let labels = (0..5)
        .map(|i| TextLabel::new(format!("t{i}"), (i as f64, i as f64)))
        .collect();
    assert_eq!(render(vec![], labels), "");
}

#[test]
fn test_single_segment_gives_empty_output() {
    let labels = vec![TextLabel::new("x", (1.0, 1.0))];
    assert_eq!(
        render(vec![LineSegment::new((0.0, 0.0), (10.0, 0.0))], labels.clone()),
        ""
    );
    assert_eq!(
        render(vec![LineSegment::new((4.0, 0.0), (4.0, 10.0))], labels.clone()),
        ""
    );
    // A lone diagonal spans both axes.
    assert_eq!(
        render(vec![LineSegment::new((0.0, 0.0), (10.0, 10.0))], labels),
        "x\n"
    );
}

#[test]
fn test_boundary_counts_match_distinct_rounded_endpoints() {
    let segments = vec![
        LineSegment::new((0.0, 0.0), (12.345_6, 0.0)),
        LineSegment::new((12.345_61, 0.0), (12.345_7, 8.0)),
        LineSegment::new((3.3, 8.0), (0.0, 8.0)),
        LineSegment::new((3.3, 2.000_4), (3.3, 8.0)),
        LineSegment::new((0.0, 1.999_6), (3.3, 2.0)),
    ];
    let layout = GridBuilder::default().build(&segments, &mut NullSink).unwrap();

    let mut xs: Vec<f64> = segments
        .iter()
        .flat_map(|s| [s.start.x, s.end.x])
        .map(|v| round_coord(v, 3))
        .collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs.dedup();
    let mut ys: Vec<f64> = segments
        .iter()
        .flat_map(|s| [s.start.y, s.end.y])
        .map(|v| round_coord(v, 3))
        .collect();
    ys.sort_by(|a, b| b.partial_cmp(a).unwrap());
    ys.dedup();

    assert_eq!(layout.boundaries.columns, xs);
    assert_eq!(layout.boundaries.rows, ys);
    assert_eq!(layout.boundaries.columns, vec![0.0, 3.3, 12.346]);
    assert_eq!(layout.boundaries.rows, vec![8.0, 2.0, 0.0]);
    assert_eq!(layout.grid.columns(), xs.len() - 1);
    assert_eq!(layout.grid.rows(), ys.len() - 1);
}

#[test]
fn test_outside_labels_never_written() {
    let segments = ruled(&[0.0, 10.0, 20.0], &[0.0, 10.0, 20.0]);
    let mut layout = GridBuilder::default().build(&segments, &mut NullSink).unwrap();
    let outside = vec![
        TextLabel::new("w", (-5.0, 5.0)),
        TextLabel::new("e", (20.5, 5.0)),
        TextLabel::new("n", (5.0, 21.0)),
        TextLabel::new("s", (5.0, -1.0)),
        TextLabel::new("ne", (25.0, 25.0)),
    ];
    let summary = CellAssigner::new()
        .assign(&mut layout, &outside, &mut NullSink)
        .unwrap();
    assert_eq!(summary.dropped, outside.len());
    assert_eq!(layout.grid.filled(), 0);
}

#[test]
fn test_collision_keeps_later_label() {
    let csv = render(
        ruled(&[0.0, 10.0, 20.0], &[0.0, 10.0]),
        vec![
            TextLabel::new("old", (1.0, 1.0)),
            TextLabel::new("right", (11.0, 1.0)),
            TextLabel::new("new", (9.0, 9.0)),
        ],
    );
    assert_eq!(csv, "new,right\n");
}

#[test]
fn test_label_on_interior_boundary_goes_right_and_down() {
    let csv = render(
        ruled(&[0.0, 10.0, 20.0], &[0.0, 10.0, 20.0]),
        vec![
            TextLabel::new("v", (10.0, 15.0)),
            TextLabel::new("h", (5.0, 10.0)),
        ],
    );
    assert_eq!(csv, ",v\nh,\n");
}

#[test]
fn test_render_twice_is_identical() {
    let selection = Selection::new(
        ruled(&[0.0, 5.0, 10.0, 15.0], &[0.0, 5.0, 10.0]),
        vec![
            TextLabel::new("α", (1.0, 9.0)),
            TextLabel::new("β", (14.0, 1.0)),
        ],
    );
    let options = ExportOptions::default();
    let first = render_table(&selection, &options, &mut NullSink).unwrap();
    let second = render_table(&selection, &options, &mut NullSink).unwrap();
    assert_eq!(first.csv.as_bytes(), second.csv.as_bytes());
    assert_eq!(first.csv, "α,,\n,,β\n");
}

#[test]
fn test_grid_rows_snapshot() {
    let table = render_table(
        &Selection::new(
            ruled(&[0.0, 40.0, 80.0], &[0.0, 12.0, 24.0]),
            vec![
                TextLabel::new("Item", (2.0, 14.0)),
                TextLabel::new("Qty", (42.0, 14.0)),
                TextLabel::new("Bolt", (2.0, 2.0)),
            ],
        ),
        &ExportOptions::default(),
        &mut NullSink,
    )
    .unwrap();
    insta::assert_debug_snapshot!(table.grid.into_rows(), @r#"
    [
        [
            Some(
                "Item",
            ),
            Some(
                "Qty",
            ),
        ],
        [
            Some(
                "Bolt",
            ),
            None,
        ],
    ]
    "#);
}
