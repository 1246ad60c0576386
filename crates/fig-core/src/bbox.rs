// File: crates/fig-core/src/bbox.rs
// Summary: Core and tight bounding boxes of panels in physical units.

use crate::canvas::{Canvas, PanelId};
use crate::colorbar::{ColorbarLocation, ColorbarRegistry};
use crate::error::LayoutResult;
use crate::geometry::Rect;
use crate::measure::Measure;

/// A panel's core box in inches: pure unit conversion of its normalized
/// coordinates against the current canvas size.
pub fn core_box(canvas: &Canvas, panel: PanelId) -> LayoutResult<Rect> {
    let p = canvas.panel(panel)?;
    let (w, h) = canvas.size();
    Ok(p.frac().to_physical(w, h))
}

/// A panel's tight box in inches: the measured decorated extent, merged
/// with the tight boxes of every colorbar attached to it.
///
/// Each colorbar contributes candidates for the edge it faces away from
/// the parent plus both perpendicular edges; a right-hand colorbar can
/// push the right, top, and bottom of the result, never the left.
/// Components can be negative when decorations spill past the canvas.
/// Pure: nothing is mutated.
pub fn tight_box(
    canvas: &Canvas,
    registry: &ColorbarRegistry,
    measurer: &dyn Measure,
    panel: PanelId,
) -> LayoutResult<Rect> {
    let p = canvas.panel(panel)?;
    let (w, h) = canvas.size();
    let core = p.frac().to_physical(w, h);
    let mut tight = measurer.measure(canvas, p).union(core);

    for entry in registry.attached_to(panel) {
        let Ok(cb) = canvas.panel(entry.colorbar) else { continue };
        let cb_core = cb.frac().to_physical(w, h);
        let cb_tight = measurer.measure(canvas, cb).union(cb_core);
        match entry.location {
            ColorbarLocation::Left => {
                tight.x0 = tight.x0.min(cb_tight.x0);
                tight.y0 = tight.y0.min(cb_tight.y0);
                tight.y1 = tight.y1.max(cb_tight.y1);
            }
            ColorbarLocation::Right => {
                tight.x1 = tight.x1.max(cb_tight.x1);
                tight.y0 = tight.y0.min(cb_tight.y0);
                tight.y1 = tight.y1.max(cb_tight.y1);
            }
            ColorbarLocation::Top => {
                tight.y1 = tight.y1.max(cb_tight.y1);
                tight.x0 = tight.x0.min(cb_tight.x0);
                tight.x1 = tight.x1.max(cb_tight.x1);
            }
            ColorbarLocation::Bottom => {
                tight.y0 = tight.y0.min(cb_tight.y0);
                tight.x0 = tight.x0.min(cb_tight.x0);
                tight.x1 = tight.x1.max(cb_tight.x1);
            }
        }
    }

    Ok(tight)
}
