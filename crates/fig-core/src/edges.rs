// File: crates/fig-core/src/edges.rs
// Summary: Four-sided value container used for margins, pads, and inspection results.

/// Per-edge values in left, right, top, bottom order.
///
/// The payload is generic: scalars while measuring and enforcing margins,
/// vectors when reporting per-row/per-column figures.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges<T> {
    pub left: T,
    pub right: T,
    pub top: T,
    pub bottom: T,
}

impl<T> Edges<T> {
    pub const fn new(left: T, right: T, top: T, bottom: T) -> Self {
        Self { left, right, top, bottom }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Edges<U> {
        Edges {
            left: f(self.left),
            right: f(self.right),
            top: f(self.top),
            bottom: f(self.bottom),
        }
    }
}

impl<T: Copy> Edges<T> {
    /// The same value on every edge.
    pub const fn uniform(v: T) -> Self {
        Self { left: v, right: v, top: v, bottom: v }
    }
}

impl Edges<f64> {
    /// Total horizontal extent (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical extent (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}
