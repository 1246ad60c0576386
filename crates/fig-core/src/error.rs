// File: crates/fig-core/src/error.rs
// Summary: Error taxonomy for grid resolution, shape checks, and layout limits.

use thiserror::Error;

use crate::canvas::{GridId, PanelId};

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Everything that can go wrong while resolving or rearranging a layout.
///
/// All variants are raised before the failing call mutates any geometry,
/// so a returned error always leaves the canvas as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("panel '{0}' has no grid cell assignment")]
    MissingSlot(String),

    #[error("panels reference {0} different grids; the layout needs exactly one")]
    MultipleGrids(usize),

    #[error("panel '{0}' spans more than one grid cell")]
    SpannedCell(String),

    #[error("grid cell ({row}, {col}) is claimed by more than one panel")]
    DuplicateCell { row: usize, col: usize },

    #[error("grid cell ({row}, {col}) has no panel")]
    EmptyCell { row: usize, col: usize },

    #[error("canvas has no grid panels")]
    NoPanels,

    #[error("grid {0} is not registered with this canvas")]
    UnknownGrid(GridId),

    #[error("cell ({row}, {col}) lies outside the {nrows}x{ncols} grid")]
    CellOutOfRange { row: usize, col: usize, nrows: usize, ncols: usize },

    #[error("{name} needs {expected} value(s), got {got}")]
    ShapeMismatch { name: &'static str, expected: usize, got: usize },

    #[error("panel {0} is not attached to this canvas")]
    DetachedPanel(PanelId),

    #[error("layout needs a width of {width:.3} in, exceeding the limit of {max_width:.3} in")]
    FigureTooLarge { width: f64, max_width: f64 },

    #[error("grid has a single column, so there are no column gaps")]
    SingleColumn,

    #[error("grid has a single row, so there are no row gaps")]
    SingleRow,
}
