// File: crates/fig-core/src/colorbar.rs
// Summary: Colorbar registry; keeps auxiliary panels flush against their parents.

use crate::canvas::{Canvas, PanelId, PanelKind};
use crate::error::LayoutResult;
use crate::geometry::Rect;

// Defaults when no explicit thickness/pad is given: thickness is 5% of
// the parent's extent along the attachment axis, pad is 60% of thickness.
const DEFAULT_THICKNESS: f64 = 0.05;
const DEFAULT_PAD: f64 = 0.6;

/// Which side of the parent panel a colorbar sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorbarLocation {
    Left,
    Right,
    Top,
    Bottom,
}

/// Explicit sizing for a new colorbar, in inches. `None` fields fall back
/// to the defaults above.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorbarOptions {
    pub thickness: Option<f64>,
    pub pad: Option<f64>,
}

/// One tracked colorbar: the auxiliary panel, the parent it follows, and
/// the stored geometry (physical inches, so it survives canvas resizes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorbarAttachment {
    pub colorbar: PanelId,
    pub parent: PanelId,
    pub location: ColorbarLocation,
    pub thickness: f64,
    pub pad: f64,
}

/// Registry of colorbar attachments.
///
/// An explicit value the caller owns and passes around; it never creates
/// or destroys canvases and may outlive any of them. Entries whose panels
/// are not on the canvas being updated are skipped, so one registry can
/// serve several canvases over its lifetime.
#[derive(Clone, Debug, Default)]
pub struct ColorbarRegistry {
    entries: Vec<ColorbarAttachment>,
}

impl ColorbarRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Record an attachment whose panels already exist. `thickness` and
    /// `pad` are in inches.
    pub fn add(
        &mut self,
        colorbar: PanelId,
        parent: PanelId,
        location: ColorbarLocation,
        thickness: f64,
        pad: f64,
    ) {
        self.entries.push(ColorbarAttachment { colorbar, parent, location, thickness, pad });
    }

    /// Create a colorbar panel flush against `parent` and register it.
    ///
    /// The new panel shares the parent's extent along the attachment edge
    /// and sits outside the parent by `pad`. Fails with `DetachedPanel`
    /// if `parent` is not on `canvas`.
    pub fn add_colorbar(
        &mut self,
        canvas: &mut Canvas,
        parent: PanelId,
        location: ColorbarLocation,
        options: ColorbarOptions,
    ) -> LayoutResult<PanelId> {
        let parent_panel = canvas.panel(parent)?;
        let label = format!("colorbar:{}", parent_panel.label());
        let (w, h) = canvas.size();
        let core = parent_panel.frac().to_physical(w, h);

        let along = match location {
            ColorbarLocation::Left | ColorbarLocation::Right => core.width(),
            ColorbarLocation::Top | ColorbarLocation::Bottom => core.height(),
        };
        let thickness = options.thickness.unwrap_or(along * DEFAULT_THICKNESS);
        let pad = options.pad.unwrap_or(thickness * DEFAULT_PAD);

        let frac = colorbar_rect(core, location, thickness, pad).to_fraction(w, h);
        let id = canvas.push_panel(label, PanelKind::Colorbar, frac, None);
        self.add(id, parent, location, thickness, pad);
        Ok(id)
    }

    /// Re-align every tracked colorbar on `canvas` to its parent's
    /// current position.
    ///
    /// Entries whose colorbar or parent panel is absent from `canvas` are
    /// left untouched; stale registrations are never an error.
    pub fn update(&self, canvas: &mut Canvas) {
        for entry in &self.entries {
            let Ok(parent) = canvas.panel(entry.parent) else { continue };
            let (w, h) = canvas.size();
            let core = parent.frac().to_physical(w, h);
            let frac = colorbar_rect(core, entry.location, entry.thickness, entry.pad)
                .to_fraction(w, h);
            let Ok(colorbar) = canvas.panel_mut(entry.colorbar) else { continue };
            colorbar.set_frac(frac);
        }
    }

    /// Drop all attachments.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn attachments(&self) -> &[ColorbarAttachment] {
        &self.entries
    }

    /// Attachments whose parent is `parent`.
    pub fn attached_to(&self, parent: PanelId) -> impl Iterator<Item = &ColorbarAttachment> {
        self.entries.iter().filter(move |e| e.parent == parent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Physical box of a colorbar given its parent's physical core box.
fn colorbar_rect(parent: Rect, location: ColorbarLocation, thickness: f64, pad: f64) -> Rect {
    match location {
        ColorbarLocation::Left => {
            let x1 = parent.x0 - pad;
            Rect::new(x1 - thickness, parent.y0, x1, parent.y1)
        }
        ColorbarLocation::Right => {
            let x0 = parent.x1 + pad;
            Rect::new(x0, parent.y0, x0 + thickness, parent.y1)
        }
        ColorbarLocation::Top => {
            let y0 = parent.y1 + pad;
            Rect::new(parent.x0, y0, parent.x1, y0 + thickness)
        }
        ColorbarLocation::Bottom => {
            let y1 = parent.y0 - pad;
            Rect::new(parent.x0, y1 - thickness, parent.x1, y1)
        }
    }
}
