// File: crates/fig-core/tests/resolve.rs
// Purpose: Validate grid resolution invariants and failure modes.

use fig_core::{
    resolve_grid, Canvas, ColorbarLocation, ColorbarOptions, ColorbarRegistry, GridSlot,
    LayoutError, Rect,
};

#[test]
fn resolves_row_major_from_top_left() {
    let mut canvas = Canvas::new(6.0, 4.0);
    let (_grid, ids) = canvas.add_panel_grid(2, 3).expect("grid");

    let resolved = resolve_grid(&canvas).expect("resolve");
    assert_eq!(resolved.nrows(), 2);
    assert_eq!(resolved.ncols(), 3);
    assert_eq!(resolved.nrows() * resolved.ncols(), canvas.panels().len());

    // add_panel_grid fills row-major, so the matrix mirrors insertion order
    for (i, id) in resolved.iter().enumerate() {
        assert_eq!(id, ids[i]);
    }

    // row 0 sits above row 1 in canvas coordinates
    let top = canvas.panel(resolved.get(0, 0)).expect("panel").frac();
    let below = canvas.panel(resolved.get(1, 0)).expect("panel").frac();
    assert!(top.y0 > below.y1);
}

#[test]
fn resolution_ignores_insertion_order() {
    let mut canvas = Canvas::new(6.0, 4.0);
    let grid = canvas.add_grid(2, 2);
    let br = canvas.add_panel("br", GridSlot::cell(grid, 1, 1)).expect("br");
    let tl = canvas.add_panel("tl", GridSlot::cell(grid, 0, 0)).expect("tl");
    let tr = canvas.add_panel("tr", GridSlot::cell(grid, 0, 1)).expect("tr");
    let bl = canvas.add_panel("bl", GridSlot::cell(grid, 1, 0)).expect("bl");

    let resolved = resolve_grid(&canvas).expect("resolve");
    assert_eq!(resolved.get(0, 0), tl);
    assert_eq!(resolved.get(0, 1), tr);
    assert_eq!(resolved.get(1, 0), bl);
    assert_eq!(resolved.get(1, 1), br);
}

#[test]
fn colorbar_panels_are_not_grid_members() {
    let mut canvas = Canvas::new(6.0, 4.0);
    let (_grid, ids) = canvas.add_panel_grid(1, 1).expect("grid");
    let mut registry = ColorbarRegistry::new();
    registry
        .add_colorbar(&mut canvas, ids[0], ColorbarLocation::Right, ColorbarOptions::default())
        .expect("colorbar");

    // two panels on the canvas, but only one grid member
    assert_eq!(canvas.panels().len(), 2);
    let resolved = resolve_grid(&canvas).expect("resolve");
    assert_eq!(resolved.nrows(), 1);
    assert_eq!(resolved.ncols(), 1);
    assert_eq!(resolved.get(0, 0), ids[0]);
}

#[test]
fn free_panel_fails_resolution() {
    let mut canvas = Canvas::new(6.0, 4.0);
    canvas.add_free_panel("floating", Rect::new(0.1, 0.1, 0.9, 0.9));

    let err = resolve_grid(&canvas).expect_err("must fail");
    assert_eq!(err, LayoutError::MissingSlot("floating".to_string()));
}

#[test]
fn two_grids_fail_resolution() {
    let mut canvas = Canvas::new(6.0, 4.0);
    let first = canvas.add_grid(1, 1);
    let second = canvas.add_grid(1, 1);
    canvas.add_panel("a", GridSlot::cell(first, 0, 0)).expect("a");
    canvas.add_panel("b", GridSlot::cell(second, 0, 0)).expect("b");

    let err = resolve_grid(&canvas).expect_err("must fail");
    assert_eq!(err, LayoutError::MultipleGrids(2));
}

#[test]
fn spanning_panel_fails_resolution() {
    let mut canvas = Canvas::new(6.0, 4.0);
    let grid = canvas.add_grid(2, 2);
    canvas.add_panel("wide", GridSlot::span(grid, 0, 0, 1, 2)).expect("wide");
    canvas.add_panel("a", GridSlot::cell(grid, 1, 0)).expect("a");
    canvas.add_panel("b", GridSlot::cell(grid, 1, 1)).expect("b");

    let err = resolve_grid(&canvas).expect_err("must fail");
    assert_eq!(err, LayoutError::SpannedCell("wide".to_string()));
}

#[test]
fn duplicate_cell_fails_resolution() {
    let mut canvas = Canvas::new(6.0, 4.0);
    let grid = canvas.add_grid(1, 2);
    canvas.add_panel("a", GridSlot::cell(grid, 0, 0)).expect("a");
    canvas.add_panel("b", GridSlot::cell(grid, 0, 0)).expect("b");

    let err = resolve_grid(&canvas).expect_err("must fail");
    assert_eq!(err, LayoutError::DuplicateCell { row: 0, col: 0 });
}

#[test]
fn unfilled_cell_fails_resolution() {
    let mut canvas = Canvas::new(6.0, 4.0);
    let grid = canvas.add_grid(1, 2);
    canvas.add_panel("a", GridSlot::cell(grid, 0, 0)).expect("a");

    let err = resolve_grid(&canvas).expect_err("must fail");
    assert_eq!(err, LayoutError::EmptyCell { row: 0, col: 1 });
}

#[test]
fn empty_canvas_fails_resolution() {
    let canvas = Canvas::new(6.0, 4.0);
    let err = resolve_grid(&canvas).expect_err("must fail");
    assert_eq!(err, LayoutError::NoPanels);
}

#[test]
fn out_of_range_cell_rejected_at_insertion() {
    let mut canvas = Canvas::new(6.0, 4.0);
    let grid = canvas.add_grid(2, 2);

    let err = canvas.add_panel("x", GridSlot::cell(grid, 2, 0)).expect_err("must fail");
    assert_eq!(err, LayoutError::CellOutOfRange { row: 2, col: 0, nrows: 2, ncols: 2 });
}

#[test]
fn foreign_grid_rejected_at_insertion() {
    let mut other = Canvas::new(1.0, 1.0);
    let foreign = other.add_grid(1, 1);

    let mut canvas = Canvas::new(6.0, 4.0);
    let err = canvas.add_panel("x", GridSlot::cell(foreign, 0, 0)).expect_err("must fail");
    assert_eq!(err, LayoutError::UnknownGrid(foreign));
}
