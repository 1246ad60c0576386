// File: crates/fig-core/src/canvas.rs
// Summary: Canvas and panel model; owns all positional state the engine mutates.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Rect;

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_GRID_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique handle to a panel. Stays valid for the panel's lifetime
/// and never collides across canvases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PanelId(u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Process-unique handle to a grid partition registered with a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridId(u64);

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    /// Regular drawing panel; participates in grid resolution.
    Plot,
    /// Auxiliary panel tracked against a parent; never a grid member.
    Colorbar,
}

/// A panel's claim on a grid: which grid, which cell, and how many cells
/// it covers. Spans other than 1x1 can be stored but are rejected by grid
/// resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSlot {
    pub grid: GridId,
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
}

impl GridSlot {
    /// A single cell of `grid`.
    pub const fn cell(grid: GridId, row: usize, col: usize) -> Self {
        Self { grid, row, col, row_span: 1, col_span: 1 }
    }
    pub const fn span(
        grid: GridId,
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
    ) -> Self {
        Self { grid, row, col, row_span, col_span }
    }
}

/// A rectangular drawing region inside a canvas.
///
/// The core box is stored as fractions of the canvas size, origin at the
/// bottom-left corner, y increasing upward. Row 0 of a grid is the top row.
#[derive(Clone, Debug)]
pub struct Panel {
    id: PanelId,
    label: String,
    kind: PanelKind,
    frac: Rect,
    slot: Option<GridSlot>,
}

impl Panel {
    pub fn id(&self) -> PanelId { self.id }
    pub fn label(&self) -> &str { &self.label }
    pub fn kind(&self) -> PanelKind { self.kind }
    /// Core box in canvas fractions.
    pub fn frac(&self) -> Rect { self.frac }
    pub fn slot(&self) -> Option<GridSlot> { self.slot }

    pub fn set_frac(&mut self, frac: Rect) {
        self.frac = frac;
    }
}

#[derive(Clone, Copy, Debug)]
struct GridDef {
    id: GridId,
    nrows: usize,
    ncols: usize,
}

// Fresh grid panels start from the conventional subplot box: fixed outer
// margins with a fifth of a cell between neighbors.
const TILE_LEFT: f64 = 0.125;
const TILE_RIGHT: f64 = 0.9;
const TILE_BOTTOM: f64 = 0.11;
const TILE_TOP: f64 = 0.88;
const TILE_WSPACE: f64 = 0.2;
const TILE_HSPACE: f64 = 0.2;

/// The physical drawing surface: a size in inches plus the panels laid
/// out on it. The canvas is the normalization reference for every panel's
/// core box and the only owner of positional state.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: f64,
    height: f64,
    panels: Vec<Panel>,
    grids: Vec<GridDef>,
}

impl Canvas {
    /// New empty canvas, `width` x `height` in inches.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, panels: Vec::new(), grids: Vec::new() }
    }

    /// Physical size in inches as (width, height).
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Register a grid partition shape for later cell assignments.
    pub fn add_grid(&mut self, nrows: usize, ncols: usize) -> GridId {
        let id = GridId(NEXT_GRID_ID.fetch_add(1, Ordering::Relaxed));
        self.grids.push(GridDef { id, nrows, ncols });
        id
    }

    /// Shape of a registered grid as (nrows, ncols).
    pub fn grid_shape(&self, grid: GridId) -> LayoutResult<(usize, usize)> {
        self.grids
            .iter()
            .find(|g| g.id == grid)
            .map(|g| (g.nrows, g.ncols))
            .ok_or(LayoutError::UnknownGrid(grid))
    }

    /// Add a plot panel claiming `slot`, placed at the default tiling
    /// position for its cell.
    pub fn add_panel(&mut self, label: impl Into<String>, slot: GridSlot) -> LayoutResult<PanelId> {
        let (nrows, ncols) = self.grid_shape(slot.grid)?;
        let row_end = slot.row.checked_add(slot.row_span).unwrap_or(usize::MAX);
        let col_end = slot.col.checked_add(slot.col_span).unwrap_or(usize::MAX);
        if slot.row_span == 0 || slot.col_span == 0 || row_end > nrows || col_end > ncols {
            return Err(LayoutError::CellOutOfRange {
                row: slot.row,
                col: slot.col,
                nrows,
                ncols,
            });
        }
        let frac = default_cell_rect(nrows, ncols, &slot);
        Ok(self.push_panel(label.into(), PanelKind::Plot, frac, Some(slot)))
    }

    /// Register a grid and fill every cell with a panel, row-major from
    /// the top-left. Labels are generated as `p<row>-<col>`.
    pub fn add_panel_grid(
        &mut self,
        nrows: usize,
        ncols: usize,
    ) -> LayoutResult<(GridId, Vec<PanelId>)> {
        if nrows == 0 || ncols == 0 {
            return Err(LayoutError::CellOutOfRange { row: 0, col: 0, nrows, ncols });
        }
        let grid = self.add_grid(nrows, ncols);
        let mut ids = Vec::with_capacity(nrows * ncols);
        for row in 0..nrows {
            for col in 0..ncols {
                let id = self.add_panel(format!("p{row}-{col}"), GridSlot::cell(grid, row, col))?;
                ids.push(id);
            }
        }
        Ok((grid, ids))
    }

    /// Add a panel without a cell assignment at an explicit normalized box.
    pub fn add_free_panel(&mut self, label: impl Into<String>, frac: Rect) -> PanelId {
        self.push_panel(label.into(), PanelKind::Plot, frac, None)
    }

    pub(crate) fn push_panel(
        &mut self,
        label: String,
        kind: PanelKind,
        frac: Rect,
        slot: Option<GridSlot>,
    ) -> PanelId {
        let id = PanelId(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed));
        self.panels.push(Panel { id, label, kind, frac, slot });
        id
    }

    pub fn panel(&self, id: PanelId) -> LayoutResult<&Panel> {
        self.panels
            .iter()
            .find(|p| p.id == id)
            .ok_or(LayoutError::DetachedPanel(id))
    }

    pub fn panel_mut(&mut self, id: PanelId) -> LayoutResult<&mut Panel> {
        self.panels
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(LayoutError::DetachedPanel(id))
    }

    /// All panels in insertion order, colorbar panels included.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.panels.iter().any(|p| p.id == id)
    }

    /// Detach a panel from the canvas and return it. Colorbar registry
    /// entries referencing it simply stop resolving here.
    pub fn remove_panel(&mut self, id: PanelId) -> LayoutResult<Panel> {
        let idx = self
            .panels
            .iter()
            .position(|p| p.id == id)
            .ok_or(LayoutError::DetachedPanel(id))?;
        Ok(self.panels.remove(idx))
    }
}

fn default_cell_rect(nrows: usize, ncols: usize, slot: &GridSlot) -> Rect {
    let cols = ncols as f64;
    let cell_w = (TILE_RIGHT - TILE_LEFT) / (cols + (cols - 1.0) * TILE_WSPACE);
    let step_w = cell_w * (1.0 + TILE_WSPACE);
    let x0 = TILE_LEFT + step_w * slot.col as f64;
    let x1 = x0 + cell_w + step_w * (slot.col_span - 1) as f64;

    let rows = nrows as f64;
    let cell_h = (TILE_TOP - TILE_BOTTOM) / (rows + (rows - 1.0) * TILE_HSPACE);
    let step_h = cell_h * (1.0 + TILE_HSPACE);
    let y1 = TILE_TOP - step_h * slot.row as f64;
    let y0 = y1 - cell_h - step_h * (slot.row_span - 1) as f64;

    Rect::new(x0, y0, x1, y1)
}
