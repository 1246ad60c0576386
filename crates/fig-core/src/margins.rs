// File: crates/fig-core/src/margins.rs
// Summary: Inspection helpers reporting margins and gaps of the current layout.

use crate::bbox::{core_box, tight_box};
use crate::canvas::{Canvas, PanelId};
use crate::colorbar::ColorbarRegistry;
use crate::edges::Edges;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Rect;
use crate::grid::{resolve_grid, PanelGrid};
use crate::measure::Measure;

/// Distances from the outermost core boxes to the canvas edges, in
/// inches: left/right hold one value per row, top/bottom one per column.
pub fn figure_margins(canvas: &Canvas) -> LayoutResult<Edges<Vec<f64>>> {
    let grid = resolve_grid(canvas)?;
    let (w, h) = canvas.size();
    let core = core_boxes(canvas, &grid)?;
    let (nrows, ncols) = (grid.nrows(), grid.ncols());

    let left = (0..nrows).map(|row| core[row * ncols].x0).collect();
    let right = (0..nrows)
        .map(|row| w - core[row * ncols + ncols - 1].x1)
        .collect();
    let top = (0..ncols).map(|col| h - core[col].y1).collect();
    let bottom = (0..ncols)
        .map(|col| core[(nrows - 1) * ncols + col].y0)
        .collect();

    Ok(Edges::new(left, right, top, bottom))
}

/// Core-box distances between adjacent columns, in inches: one row of
/// the result per grid row, `ncols - 1` values each.
pub fn column_gaps(canvas: &Canvas) -> LayoutResult<Vec<Vec<f64>>> {
    let grid = resolve_grid(canvas)?;
    if grid.ncols() < 2 {
        return Err(LayoutError::SingleColumn);
    }
    let core = core_boxes(canvas, &grid)?;
    let (nrows, ncols) = (grid.nrows(), grid.ncols());

    let mut gaps = Vec::with_capacity(nrows);
    for row in 0..nrows {
        let mut row_gaps = Vec::with_capacity(ncols - 1);
        for col in 0..ncols - 1 {
            row_gaps.push(core[row * ncols + col + 1].x0 - core[row * ncols + col].x1);
        }
        gaps.push(row_gaps);
    }
    Ok(gaps)
}

/// Core-box distances between adjacent rows, in inches: `nrows - 1` rows
/// of the result, one value per grid column.
pub fn row_gaps(canvas: &Canvas) -> LayoutResult<Vec<Vec<f64>>> {
    let grid = resolve_grid(canvas)?;
    if grid.nrows() < 2 {
        return Err(LayoutError::SingleRow);
    }
    let core = core_boxes(canvas, &grid)?;
    let (nrows, ncols) = (grid.nrows(), grid.ncols());

    let mut gaps = Vec::with_capacity(nrows - 1);
    for row in 0..nrows - 1 {
        let mut col_gaps = Vec::with_capacity(ncols);
        for col in 0..ncols {
            col_gaps.push(core[row * ncols + col].y0 - core[(row + 1) * ncols + col].y1);
        }
        gaps.push(col_gaps);
    }
    Ok(gaps)
}

/// Decoration depth of one panel per edge: how far its tight box extends
/// past its core box, in inches.
pub fn panel_margins(
    canvas: &Canvas,
    registry: &ColorbarRegistry,
    measurer: &dyn Measure,
    panel: PanelId,
) -> LayoutResult<Edges<f64>> {
    let core = core_box(canvas, panel)?;
    let tight = tight_box(canvas, registry, measurer, panel)?;
    Ok(Edges::new(
        core.x0 - tight.x0,
        tight.x1 - core.x1,
        tight.y1 - core.y1,
        core.y0 - tight.y0,
    ))
}

fn core_boxes(canvas: &Canvas, grid: &PanelGrid) -> LayoutResult<Vec<Rect>> {
    let (w, h) = canvas.size();
    let mut boxes = Vec::with_capacity(grid.nrows() * grid.ncols());
    for id in grid.iter() {
        boxes.push(canvas.panel(id)?.frac().to_physical(w, h));
    }
    Ok(boxes)
}
