// File: crates/fig-core/src/grid.rs
// Summary: Resolve a canvas's panels into a row-major 2-D grid.

use std::collections::HashSet;

use crate::canvas::{Canvas, GridId, PanelId, PanelKind};
use crate::error::{LayoutError, LayoutResult};

/// Row-major matrix of panel ids, row 0 at the top.
#[derive(Clone, Debug)]
pub struct PanelGrid {
    nrows: usize,
    ncols: usize,
    cells: Vec<PanelId>,
}

impl PanelGrid {
    pub fn nrows(&self) -> usize { self.nrows }
    pub fn ncols(&self) -> usize { self.ncols }

    /// Panel at (row, col). Both indices must be inside the grid shape.
    pub fn get(&self, row: usize, col: usize) -> PanelId {
        self.cells[row * self.ncols + col]
    }

    /// All cells, row-major from the top-left.
    pub fn iter(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.cells.iter().copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[PanelId]> {
        self.cells.chunks(self.ncols)
    }
}

/// Group the canvas's plot panels into the 2-D grid their cell
/// assignments describe.
///
/// Colorbar panels are ignored. Fails if any plot panel lacks a cell
/// assignment, if assignments reference more than one grid, if any panel
/// spans multiple cells, or if the assignments do not tile the grid
/// exactly (duplicate or empty cells). On success the matrix holds
/// exactly `nrows * ncols` panels.
pub fn resolve_grid(canvas: &Canvas) -> LayoutResult<PanelGrid> {
    let mut assigned = Vec::new();
    for panel in canvas.panels() {
        if panel.kind() != PanelKind::Plot {
            continue;
        }
        let slot = panel
            .slot()
            .ok_or_else(|| LayoutError::MissingSlot(panel.label().to_string()))?;
        assigned.push((panel.id(), panel.label(), slot));
    }
    if assigned.is_empty() {
        return Err(LayoutError::NoPanels);
    }

    let grids: HashSet<GridId> = assigned.iter().map(|(_, _, s)| s.grid).collect();
    if grids.len() > 1 {
        return Err(LayoutError::MultipleGrids(grids.len()));
    }

    for (_, label, slot) in &assigned {
        if slot.row_span != 1 || slot.col_span != 1 {
            return Err(LayoutError::SpannedCell((*label).to_string()));
        }
    }

    let (nrows, ncols) = canvas.grid_shape(assigned[0].2.grid)?;
    let mut cells: Vec<Option<PanelId>> = vec![None; nrows * ncols];
    for (id, _, slot) in &assigned {
        let cell = &mut cells[slot.row * ncols + slot.col];
        if cell.is_some() {
            return Err(LayoutError::DuplicateCell { row: slot.row, col: slot.col });
        }
        *cell = Some(*id);
    }
    for (i, cell) in cells.iter().enumerate() {
        if cell.is_none() {
            return Err(LayoutError::EmptyCell { row: i / ncols, col: i % ncols });
        }
    }

    Ok(PanelGrid {
        nrows,
        ncols,
        cells: cells.into_iter().flatten().collect(),
    })
}
