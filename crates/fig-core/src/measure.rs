// File: crates/fig-core/src/measure.rs
// Summary: Measurement capability trait plus a deterministic inset-based measurer.

use std::collections::HashMap;

use crate::canvas::{Canvas, Panel, PanelId};
use crate::edges::Edges;
use crate::geometry::Rect;

/// Reports a panel's fully rendered extent in inches: the core box grown
/// by whatever decorations (tick labels, axis labels, titles) the
/// rendering side would draw.
///
/// The engine treats this as an opaque, synchronous call. Implementations
/// must be idempotent for unchanged panel state; the optimizer relies on
/// that for convergence. The returned box is unioned with the core box,
/// so reporting less than the core box degrades to "no decorations"
/// rather than corrupting the layout.
pub trait Measure {
    fn measure(&self, canvas: &Canvas, panel: &Panel) -> Rect;
}

/// Fixed per-edge decoration depths, optionally overridden per panel.
///
/// A stand-in for real text metrics: each panel's tight box is its core
/// box grown by the configured insets (in inches). Deterministic, which
/// makes it the measurer of choice for tests and benches.
#[derive(Clone, Debug, Default)]
pub struct InsetMeasurer {
    default: Edges<f64>,
    overrides: HashMap<PanelId, Edges<f64>>,
}

impl InsetMeasurer {
    pub fn new(default: Edges<f64>) -> Self {
        Self { default, overrides: HashMap::new() }
    }

    /// The same decoration depth on every edge of every panel.
    pub fn uniform(inset: f64) -> Self {
        Self::new(Edges::uniform(inset))
    }

    /// Use different insets for one specific panel.
    pub fn with_panel(mut self, id: PanelId, insets: Edges<f64>) -> Self {
        self.overrides.insert(id, insets);
        self
    }

    pub fn insets_for(&self, id: PanelId) -> Edges<f64> {
        self.overrides.get(&id).copied().unwrap_or(self.default)
    }
}

impl Measure for InsetMeasurer {
    fn measure(&self, canvas: &Canvas, panel: &Panel) -> Rect {
        let (w, h) = canvas.size();
        let core = panel.frac().to_physical(w, h);
        let insets = self.insets_for(panel.id());
        Rect::new(
            core.x0 - insets.left,
            core.y0 - insets.bottom,
            core.x1 + insets.right,
            core.y1 + insets.top,
        )
    }
}
