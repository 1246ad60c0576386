// File: crates/fig-core/tests/inspect.rs
// Purpose: Validate margin and gap reporting for settled layouts.

use fig_core::margins::{column_gaps, figure_margins, row_gaps};
use fig_core::{Canvas, GridSlot, LayoutError, Rect};

const EPS: f64 = 1e-9;

// deliberately lopsided 2 x 2 layout on a 10 x 8 inch canvas
fn lopsided() -> Canvas {
    let mut canvas = Canvas::new(10.0, 8.0);
    let grid = canvas.add_grid(2, 2);
    let boxes = [
        (0, 0, Rect::new(0.10, 0.625, 0.40, 0.875)),
        (0, 1, Rect::new(0.50, 0.5625, 0.90, 0.8125)),
        (1, 0, Rect::new(0.15, 0.125, 0.40, 0.4375)),
        (1, 1, Rect::new(0.55, 0.15625, 0.85, 0.4375)),
    ];
    for (row, col, frac) in boxes {
        let id = canvas
            .add_panel(format!("p{row}{col}"), GridSlot::cell(grid, row, col))
            .expect("panel");
        canvas.panel_mut(id).expect("panel").set_frac(frac);
    }
    canvas
}

#[test]
fn figure_margins_report_per_row_and_per_column() {
    let canvas = lopsided();
    let margins = figure_margins(&canvas).expect("margins");

    // left/right one entry per row, top to bottom
    assert_eq!(margins.left.len(), 2);
    assert!((margins.left[0] - 1.0).abs() < EPS);
    assert!((margins.left[1] - 1.5).abs() < EPS);
    assert!((margins.right[0] - 1.0).abs() < EPS);
    assert!((margins.right[1] - 1.5).abs() < EPS);

    // top/bottom one entry per column, left to right
    assert_eq!(margins.top.len(), 2);
    assert!((margins.top[0] - 1.0).abs() < EPS);
    assert!((margins.top[1] - 1.5).abs() < EPS);
    assert!((margins.bottom[0] - 1.0).abs() < EPS);
    assert!((margins.bottom[1] - 1.25).abs() < EPS);
}

#[test]
fn column_gaps_report_each_row_separately() {
    let canvas = lopsided();
    let gaps = column_gaps(&canvas).expect("gaps");

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].len(), 1);
    assert!((gaps[0][0] - 1.0).abs() < EPS);
    assert!((gaps[1][0] - 1.5).abs() < EPS);
}

#[test]
fn row_gaps_report_each_column_separately() {
    let canvas = lopsided();
    let gaps = row_gaps(&canvas).expect("gaps");

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].len(), 2);
    assert!((gaps[0][0] - 1.5).abs() < EPS);
    assert!((gaps[0][1] - 1.0).abs() < EPS);
}

#[test]
fn gap_queries_need_at_least_two_lanes() {
    let mut single_col = Canvas::new(6.0, 4.0);
    single_col.add_panel_grid(2, 1).expect("grid");
    assert_eq!(column_gaps(&single_col).expect_err("must fail"), LayoutError::SingleColumn);
    assert_eq!(row_gaps(&single_col).expect("gaps").len(), 1);

    let mut single_row = Canvas::new(6.0, 4.0);
    single_row.add_panel_grid(1, 2).expect("grid");
    assert_eq!(row_gaps(&single_row).expect_err("must fail"), LayoutError::SingleRow);
    assert_eq!(column_gaps(&single_row).expect("gaps").len(), 1);
}
