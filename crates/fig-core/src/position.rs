// File: crates/fig-core/src/position.rs
// Summary: Panel-level positioning: anchored resize, alignment, minimum-gap floors.

use crate::canvas::{Canvas, PanelId};
use crate::colorbar::ColorbarRegistry;
use crate::error::LayoutResult;
use crate::geometry::Rect;
use crate::grid::resolve_grid;
use crate::pad::PadSpec;

/// Point of a panel held fixed while resizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Center,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Center,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Center,
    Top,
    Bottom,
}

/// Set a panel's physical size, keeping the anchor point fixed.
///
/// `width`/`height` are inches; edge anchors center the other axis.
/// Attached colorbars are re-synced afterward.
pub fn resize(
    canvas: &mut Canvas,
    registry: &ColorbarRegistry,
    panel: PanelId,
    width: f64,
    height: f64,
    anchor: Anchor,
) -> LayoutResult<()> {
    let (w, h) = canvas.size();
    let core = canvas.panel(panel)?.frac().to_physical(w, h);

    let x0 = if matches!(anchor, Anchor::Left | Anchor::TopLeft | Anchor::BottomLeft) {
        core.x0
    } else if matches!(anchor, Anchor::Right | Anchor::TopRight | Anchor::BottomRight) {
        core.x1 - width
    } else {
        core.center_x() - width / 2.0
    };
    let y0 = if matches!(anchor, Anchor::Bottom | Anchor::BottomLeft | Anchor::BottomRight) {
        core.y0
    } else if matches!(anchor, Anchor::Top | Anchor::TopLeft | Anchor::TopRight) {
        core.y1 - height
    } else {
        core.center_y() - height / 2.0
    };

    let resized = Rect::from_origin_size(x0, y0, width, height).to_fraction(w, h);
    canvas.panel_mut(panel)?.set_frac(resized);
    registry.update(canvas);
    Ok(())
}

/// Move `panel` vertically so its chosen reference point matches
/// `reference`'s. Horizontal position and both sizes stay put.
pub fn align_vertically(
    canvas: &mut Canvas,
    registry: &ColorbarRegistry,
    panel: PanelId,
    reference: PanelId,
    alignment: VAlign,
) -> LayoutResult<()> {
    let (w, h) = canvas.size();
    let target = canvas.panel(panel)?.frac().to_physical(w, h);
    let anchor = canvas.panel(reference)?.frac().to_physical(w, h);

    let y0 = match alignment {
        VAlign::Center => anchor.y0 + (anchor.height() - target.height()) / 2.0,
        VAlign::Top => anchor.y1 - target.height(),
        VAlign::Bottom => anchor.y0,
    };
    let moved = Rect::from_origin_size(target.x0, y0, target.width(), target.height());
    canvas.panel_mut(panel)?.set_frac(moved.to_fraction(w, h));
    registry.update(canvas);
    Ok(())
}

/// Horizontal counterpart of [`align_vertically`]: `Left` lines up the
/// left edges, `Right` the right edges.
pub fn align_horizontally(
    canvas: &mut Canvas,
    registry: &ColorbarRegistry,
    panel: PanelId,
    reference: PanelId,
    alignment: HAlign,
) -> LayoutResult<()> {
    let (w, h) = canvas.size();
    let target = canvas.panel(panel)?.frac().to_physical(w, h);
    let anchor = canvas.panel(reference)?.frac().to_physical(w, h);

    let x0 = match alignment {
        HAlign::Center => anchor.x0 + (anchor.width() - target.width()) / 2.0,
        HAlign::Left => anchor.x0,
        HAlign::Right => anchor.x1 - target.width(),
    };
    let moved = Rect::from_origin_size(x0, target.y0, target.width(), target.height());
    canvas.panel_mut(panel)?.set_frac(moved.to_fraction(w, h));
    registry.update(canvas);
    Ok(())
}

/// Enforce a floor on the core-box gaps between adjacent columns.
///
/// For each gap the narrowest distance across all rows is compared with
/// the requested minimum; columns at or beyond a deficient gap shift
/// right by the accumulated shortfalls. Gaps already wide enough are
/// untouched, as is the canvas size. A cheaper alternative to the full
/// optimizer when only spacing floors matter.
pub fn set_min_column_pads(
    canvas: &mut Canvas,
    registry: &ColorbarRegistry,
    pads: &PadSpec,
) -> LayoutResult<()> {
    let grid = resolve_grid(canvas)?;
    let (nrows, ncols) = (grid.nrows(), grid.ncols());
    let pads = pads.broadcast("min_col_pads", ncols - 1)?;
    let (w, h) = canvas.size();

    let mut core = Vec::with_capacity(nrows * ncols);
    for id in grid.iter() {
        core.push(canvas.panel(id)?.frac().to_physical(w, h));
    }

    let mut shortfalls = Vec::with_capacity(ncols.saturating_sub(1));
    for gap in 0..ncols.saturating_sub(1) {
        let narrowest = (0..nrows)
            .map(|row| core[row * ncols + gap + 1].x0 - core[row * ncols + gap].x1)
            .fold(f64::INFINITY, f64::min);
        shortfalls.push((pads[gap] - narrowest).max(0.0));
    }

    let mut shift = 0.0;
    for col in 1..ncols {
        shift += shortfalls[col - 1];
        for row in 0..nrows {
            let panel = canvas.panel_mut(grid.get(row, col))?;
            let frac = panel.frac();
            panel.set_frac(frac.translated(shift / w, 0.0));
        }
    }
    registry.update(canvas);
    Ok(())
}

/// Row analogue of [`set_min_column_pads`]: deficient gaps push the rows
/// below them downward. Pads are validated against `nrows - 1`.
pub fn set_min_row_pads(
    canvas: &mut Canvas,
    registry: &ColorbarRegistry,
    pads: &PadSpec,
) -> LayoutResult<()> {
    let grid = resolve_grid(canvas)?;
    let (nrows, ncols) = (grid.nrows(), grid.ncols());
    let pads = pads.broadcast("min_row_pads", nrows - 1)?;
    let (w, h) = canvas.size();

    let mut core = Vec::with_capacity(nrows * ncols);
    for id in grid.iter() {
        core.push(canvas.panel(id)?.frac().to_physical(w, h));
    }

    let mut shortfalls = Vec::with_capacity(nrows.saturating_sub(1));
    for gap in 0..nrows.saturating_sub(1) {
        let narrowest = (0..ncols)
            .map(|col| core[gap * ncols + col].y0 - core[(gap + 1) * ncols + col].y1)
            .fold(f64::INFINITY, f64::min);
        shortfalls.push((pads[gap] - narrowest).max(0.0));
    }

    let mut shift = 0.0;
    for row in 1..nrows {
        shift += shortfalls[row - 1];
        for col in 0..ncols {
            let panel = canvas.panel_mut(grid.get(row, col))?;
            let frac = panel.frac();
            panel.set_frac(frac.translated(0.0, -shift / h));
        }
    }
    registry.update(canvas);
    Ok(())
}
