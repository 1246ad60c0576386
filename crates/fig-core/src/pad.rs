// File: crates/fig-core/src/pad.rs
// Summary: Scalar-or-sequence pad parameters and the shared broadcast rule.

use crate::edges::Edges;
use crate::error::{LayoutError, LayoutResult};

/// Requested spacing for the gaps between grid columns or rows, in inches.
///
/// A uniform value applies to every gap; an explicit sequence must have
/// exactly one value per gap (`ncols - 1` for columns, `nrows - 1` for
/// rows).
#[derive(Clone, Debug, PartialEq)]
pub enum PadSpec {
    Uniform(f64),
    PerGap(Vec<f64>),
}

impl PadSpec {
    /// Expand to one value per gap, enforcing the length contract.
    ///
    /// `name` identifies the parameter in the error. A uniform spec
    /// broadcasts to any length, including zero for single-column or
    /// single-row grids.
    pub fn broadcast(&self, name: &'static str, gaps: usize) -> LayoutResult<Vec<f64>> {
        match self {
            PadSpec::Uniform(v) => Ok(vec![*v; gaps]),
            PadSpec::PerGap(vals) => {
                if vals.len() != gaps {
                    return Err(LayoutError::ShapeMismatch {
                        name,
                        expected: gaps,
                        got: vals.len(),
                    });
                }
                Ok(vals.clone())
            }
        }
    }
}

impl From<f64> for PadSpec {
    fn from(v: f64) -> Self { PadSpec::Uniform(v) }
}

impl From<Vec<f64>> for PadSpec {
    fn from(v: Vec<f64>) -> Self { PadSpec::PerGap(v) }
}

impl<const N: usize> From<[f64; N]> for PadSpec {
    fn from(v: [f64; N]) -> Self { PadSpec::PerGap(v.to_vec()) }
}

/// Requested padding outside the outermost panels, in inches. The
/// four-slot broadcast of the scalar form is encoded in the type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginSpec {
    Uniform(f64),
    PerEdge(Edges<f64>),
}

impl MarginSpec {
    pub fn resolve(&self) -> Edges<f64> {
        match self {
            MarginSpec::Uniform(v) => Edges::uniform(*v),
            MarginSpec::PerEdge(edges) => *edges,
        }
    }
}

impl From<f64> for MarginSpec {
    fn from(v: f64) -> Self { MarginSpec::Uniform(v) }
}

impl From<Edges<f64>> for MarginSpec {
    fn from(e: Edges<f64>) -> Self { MarginSpec::PerEdge(e) }
}
