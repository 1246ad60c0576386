// File: crates/fig-core/src/lib.rs
// Summary: Library entry point; exports the panel layout and whitespace-optimization API.

pub mod bbox;
pub mod canvas;
pub mod colorbar;
pub mod edges;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod margins;
pub mod measure;
pub mod optimize;
pub mod pad;
pub mod position;
pub mod units;

pub use canvas::{Canvas, GridId, GridSlot, Panel, PanelId, PanelKind};
pub use colorbar::{ColorbarAttachment, ColorbarLocation, ColorbarOptions, ColorbarRegistry};
pub use edges::Edges;
pub use error::{LayoutError, LayoutResult};
pub use geometry::Rect;
pub use grid::{resolve_grid, PanelGrid};
pub use measure::{InsetMeasurer, Measure};
pub use optimize::{optimize, OptimizeOptions};
pub use pad::{MarginSpec, PadSpec};
pub use position::{Anchor, HAlign, VAlign};
