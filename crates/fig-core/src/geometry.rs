// File: crates/fig-core/src/geometry.rs
// Summary: Rectangle math shared by normalized and physical boxes.

/// A rectangle given by its corners, y increasing upward.
///
/// The same type carries both flavors of box used by the engine:
/// normalized canvas fractions (all components in [0, 1]) and physical
/// inches. `to_physical`/`to_fraction` convert between the two against a
/// canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }
    pub const fn from_origin_size(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self { x0, y0, x1: x0 + width, y1: y0 + height }
    }
    pub fn width(&self) -> f64 { self.x1 - self.x0 }
    pub fn height(&self) -> f64 { self.y1 - self.y0 }
    pub fn center_x(&self) -> f64 { (self.x0 + self.x1) / 2.0 }
    pub fn center_y(&self) -> f64 { (self.y0 + self.y1) / 2.0 }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    /// Interpret `self` as canvas fractions and scale into inches.
    pub fn to_physical(&self, canvas_w: f64, canvas_h: f64) -> Rect {
        Rect::new(
            self.x0 * canvas_w,
            self.y0 * canvas_h,
            self.x1 * canvas_w,
            self.y1 * canvas_h,
        )
    }

    /// Interpret `self` as inches and normalize against a canvas size.
    pub fn to_fraction(&self, canvas_w: f64, canvas_h: f64) -> Rect {
        Rect::new(
            self.x0 / canvas_w,
            self.y0 / canvas_h,
            self.x1 / canvas_w,
            self.y1 / canvas_h,
        )
    }
}
