// File: crates/fig-core/src/units.rs
// Summary: Physical unit constants and conversions; the engine works in inches.

pub const PTS_PER_INCH: f64 = 72.0;
pub const MM_PER_INCH: f64 = 25.4;

/// Points to inches.
pub fn pt(v: f64) -> f64 { v / PTS_PER_INCH }

/// Millimetres to inches.
pub fn mm(v: f64) -> f64 { v / MM_PER_INCH }

/// Inches to points.
pub fn to_pt(v: f64) -> f64 { v * PTS_PER_INCH }

/// Inches to millimetres.
pub fn to_mm(v: f64) -> f64 { v * MM_PER_INCH }
