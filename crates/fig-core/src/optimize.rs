// File: crates/fig-core/src/optimize.rs
// Summary: Whitespace optimizer; measures slack and recomputes panel and canvas geometry.

use crate::bbox::{core_box, tight_box};
use crate::canvas::Canvas;
use crate::colorbar::ColorbarRegistry;
use crate::edges::Edges;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Rect;
use crate::grid::{resolve_grid, PanelGrid};
use crate::measure::Measure;
use crate::pad::{MarginSpec, PadSpec};
use crate::units::pt;

/// Configuration for [`optimize`]. All lengths are in inches.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizeOptions {
    /// Keep the canvas width and scale panels to fit (`true`), or keep
    /// panel sizes and let the canvas width follow (`false`).
    pub fix_width: bool,
    /// Padding left outside the outermost tight boxes.
    pub margin_pads: MarginSpec,
    /// Requested spacing between adjacent columns (`ncols - 1` gaps).
    pub col_pads: PadSpec,
    /// Requested spacing between adjacent rows (`nrows - 1` gaps).
    pub row_pads: PadSpec,
    /// Upper bound on the resulting canvas width. Only enforced when
    /// `fix_width` is `false`.
    pub max_width: f64,
    /// Number of passes. With `fix_width` the first `iterations - 1`
    /// passes rescale panels and a final pass settles positions;
    /// decorations rarely scale linearly with panel size, so extra
    /// passes buy convergence. Without `fix_width` a single pass is
    /// exact and this knob is ignored. Values below 1 are treated as 1.
    pub iterations: usize,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            fix_width: true,
            margin_pads: MarginSpec::Uniform(pt(5.0)),
            col_pads: PadSpec::Uniform(pt(10.0)),
            row_pads: PadSpec::Uniform(pt(10.0)),
            max_width: f64::INFINITY,
            iterations: 2,
        }
    }
}

/// Rearrange the canvas's grid panels so the whitespace between rendered
/// content matches the requested pads and margins.
///
/// Per pass, every panel's core and tight box is measured, the
/// pre-existing slack between adjacent columns/rows is computed, and the
/// canvas is rebuilt with exactly the requested spacing:
///
/// - `fix_width` `true`: panels are scaled about their centers so the
///   content fits the current width, then a final pass settles absolute
///   positions (with `iterations == 1`, only the rescale runs).
/// - `fix_width` `false`: panel sizes stay; the canvas grows or shrinks
///   to the target size, failing with `FigureTooLarge` if the target
///   width exceeds `max_width`.
///
/// Validation (grid shape, pad lengths) happens before anything moves,
/// and a failed pass leaves the canvas untouched. Attached colorbars are
/// re-synced after every pass. Re-running with `fix_width = false` on an
/// already-optimal layout is a no-op up to floating-point noise.
pub fn optimize(
    canvas: &mut Canvas,
    registry: &ColorbarRegistry,
    measurer: &dyn Measure,
    options: &OptimizeOptions,
) -> LayoutResult<()> {
    let grid = resolve_grid(canvas)?;
    let pads = ResolvedPads {
        margins: options.margin_pads.resolve(),
        col: options.col_pads.broadcast("col_pads", grid.ncols() - 1)?,
        row: options.row_pads.broadcast("row_pads", grid.nrows() - 1)?,
    };

    if options.fix_width {
        let runs = options.iterations.max(1);
        for _ in 1..runs {
            run_pass(canvas, registry, measurer, &grid, &pads, Pass::Rescale)?;
        }
        let last = if runs == 1 {
            Pass::Rescale
        } else {
            Pass::Reposition { max_width: f64::INFINITY }
        };
        run_pass(canvas, registry, measurer, &grid, &pads, last)?;
    } else {
        let pass = Pass::Reposition { max_width: options.max_width };
        run_pass(canvas, registry, measurer, &grid, &pads, pass)?;
    }
    Ok(())
}

/// Whitespace already present before each column: canvas left edge to
/// column 0's rendered content, then content-to-content for each
/// adjacent pair. Negative values mean overlapping decorations.
pub fn column_slacks(
    canvas: &Canvas,
    registry: &ColorbarRegistry,
    measurer: &dyn Measure,
) -> LayoutResult<Vec<f64>> {
    let grid = resolve_grid(canvas)?;
    let frames = measure_frames(canvas, registry, measurer, &grid)?;
    Ok(column_slacks_of(&grid, &frames.tight))
}

/// Vertical analogue of [`column_slacks`], top-down: canvas top edge to
/// row 0's content, then row-to-row gaps.
pub fn row_slacks(
    canvas: &Canvas,
    registry: &ColorbarRegistry,
    measurer: &dyn Measure,
) -> LayoutResult<Vec<f64>> {
    let grid = resolve_grid(canvas)?;
    let frames = measure_frames(canvas, registry, measurer, &grid)?;
    let (_, h) = canvas.size();
    Ok(row_slacks_of(&grid, &frames.tight, h))
}

struct ResolvedPads {
    margins: Edges<f64>,
    col: Vec<f64>,
    row: Vec<f64>,
}

enum Pass {
    Rescale,
    Reposition { max_width: f64 },
}

struct Frames {
    core: Vec<Rect>,
    tight: Vec<Rect>,
}

fn measure_frames(
    canvas: &Canvas,
    registry: &ColorbarRegistry,
    measurer: &dyn Measure,
    grid: &PanelGrid,
) -> LayoutResult<Frames> {
    let mut core = Vec::with_capacity(grid.nrows() * grid.ncols());
    let mut tight = Vec::with_capacity(core.capacity());
    for id in grid.iter() {
        core.push(core_box(canvas, id)?);
        tight.push(tight_box(canvas, registry, measurer, id)?);
    }
    Ok(Frames { core, tight })
}

fn column_slacks_of(grid: &PanelGrid, tight: &[Rect]) -> Vec<f64> {
    let (nrows, ncols) = (grid.nrows(), grid.ncols());
    let min_x0 = |col: usize| {
        (0..nrows)
            .map(|row| tight[row * ncols + col].x0)
            .fold(f64::INFINITY, f64::min)
    };
    let max_x1 = |col: usize| {
        (0..nrows)
            .map(|row| tight[row * ncols + col].x1)
            .fold(f64::NEG_INFINITY, f64::max)
    };

    let mut slacks = Vec::with_capacity(ncols);
    slacks.push(min_x0(0));
    for col in 1..ncols {
        slacks.push(min_x0(col) - max_x1(col - 1));
    }
    slacks
}

fn row_slacks_of(grid: &PanelGrid, tight: &[Rect], canvas_h: f64) -> Vec<f64> {
    let (nrows, ncols) = (grid.nrows(), grid.ncols());
    let max_y1 = |row: usize| {
        (0..ncols)
            .map(|col| tight[row * ncols + col].y1)
            .fold(f64::NEG_INFINITY, f64::max)
    };
    let min_y0 = |row: usize| {
        (0..ncols)
            .map(|col| tight[row * ncols + col].y0)
            .fold(f64::INFINITY, f64::min)
    };

    let mut slacks = Vec::with_capacity(nrows);
    slacks.push(canvas_h - max_y1(0));
    for row in 1..nrows {
        slacks.push(min_y0(row - 1) - max_y1(row));
    }
    slacks
}

fn run_pass(
    canvas: &mut Canvas,
    registry: &ColorbarRegistry,
    measurer: &dyn Measure,
    grid: &PanelGrid,
    pads: &ResolvedPads,
    pass: Pass,
) -> LayoutResult<()> {
    let (w, h) = canvas.size();
    let (nrows, ncols) = (grid.nrows(), grid.ncols());
    let frames = measure_frames(canvas, registry, measurer, grid)?;
    let wslacks = column_slacks_of(grid, &frames.tight);

    // Full rendered span, minus the gaps that already exist between
    // columns, plus the gaps and margins we actually want.
    let span_x1 = (0..nrows)
        .map(|row| frames.tight[row * ncols + ncols - 1].x1)
        .fold(f64::NEG_INFINITY, f64::max);
    let span_x0 = (0..nrows)
        .map(|row| frames.tight[row * ncols].x0)
        .fold(f64::INFINITY, f64::min);
    let target_w = (span_x1 - span_x0) - wslacks[1..].iter().sum::<f64>()
        + pads.margins.hsum()
        + pads.col.iter().sum::<f64>();

    match pass {
        Pass::Rescale => {
            let scale = w / target_w;
            for (i, id) in grid.iter().enumerate() {
                let core = frames.core[i];
                let new_w = core.width() * scale;
                let new_h = core.height() * scale;
                let scaled = Rect::from_origin_size(
                    core.center_x() - new_w / 2.0,
                    core.center_y() - new_h / 2.0,
                    new_w,
                    new_h,
                );
                canvas.panel_mut(id)?.set_frac(scaled.to_fraction(w, h));
            }
        }
        Pass::Reposition { max_width } => {
            if target_w > max_width {
                return Err(LayoutError::FigureTooLarge { width: target_w, max_width });
            }

            let hslacks = row_slacks_of(grid, &frames.tight, h);
            let span_y1 = (0..ncols)
                .map(|col| frames.tight[col].y1)
                .fold(f64::NEG_INFINITY, f64::max);
            let span_y0 = (0..ncols)
                .map(|col| frames.tight[(nrows - 1) * ncols + col].y0)
                .fold(f64::INFINITY, f64::min);
            let target_h = (span_y1 - span_y0) - hslacks[1..].iter().sum::<f64>()
                + pads.margins.vsum()
                + pads.row.iter().sum::<f64>();

            canvas.set_size(target_w, target_h);
            for row in 0..nrows {
                for col in 0..ncols {
                    let core = frames.core[row * ncols + col];
                    let x0 = core.x0 - wslacks[..=col].iter().sum::<f64>()
                        + pads.col[..col].iter().sum::<f64>()
                        + pads.margins.left;
                    let y0 = core.y0 + hslacks[..=row].iter().sum::<f64>()
                        - pads.row[..row].iter().sum::<f64>()
                        - h
                        + target_h
                        - pads.margins.top;
                    let moved = Rect::from_origin_size(x0, y0, core.width(), core.height());
                    canvas
                        .panel_mut(grid.get(row, col))?
                        .set_frac(moved.to_fraction(target_w, target_h));
                }
            }
        }
    }

    registry.update(canvas);
    Ok(())
}
