// File: crates/fig-core/tests/units.rs
// Purpose: Validate unit conversions and rectangle arithmetic.

use fig_core::units::{mm, pt, to_mm, to_pt};
use fig_core::Rect;
use float_cmp::assert_approx_eq;

#[test]
fn points_and_millimetres_convert_through_inches() {
    assert_approx_eq!(f64, pt(72.0), 1.0);
    assert_approx_eq!(f64, pt(36.0), 0.5);
    assert_approx_eq!(f64, mm(25.4), 1.0);
    assert_approx_eq!(f64, to_pt(2.0), 144.0);
    assert_approx_eq!(f64, to_mm(2.0), 50.8);
    assert_approx_eq!(f64, to_pt(pt(10.0)), 10.0);
}

#[test]
fn rect_accessors_and_union() {
    let r = Rect::new(1.0, 2.0, 4.0, 6.0);
    assert_approx_eq!(f64, r.width(), 3.0);
    assert_approx_eq!(f64, r.height(), 4.0);
    assert_approx_eq!(f64, r.center_x(), 2.5);
    assert_approx_eq!(f64, r.center_y(), 4.0);

    let u = r.union(Rect::new(0.0, 3.0, 2.0, 7.0));
    assert_eq!(u, Rect::new(0.0, 2.0, 4.0, 7.0));

    let s = Rect::from_origin_size(1.0, 1.0, 2.0, 0.5);
    assert_eq!(s, Rect::new(1.0, 1.0, 3.0, 1.5));
}

#[test]
fn physical_and_fractional_boxes_convert_both_ways() {
    let frac = Rect::new(0.25, 0.5, 0.75, 1.0);
    let phys = frac.to_physical(8.0, 6.0);
    assert_eq!(phys, Rect::new(2.0, 3.0, 6.0, 6.0));

    let back = phys.to_fraction(8.0, 6.0);
    assert_approx_eq!(f64, back.x0, frac.x0);
    assert_approx_eq!(f64, back.y0, frac.y0);
    assert_approx_eq!(f64, back.x1, frac.x1);
    assert_approx_eq!(f64, back.y1, frac.y1);

    let moved = frac.translated(0.1, -0.25);
    assert_approx_eq!(f64, moved.x0, 0.35);
    assert_approx_eq!(f64, moved.y1, 0.75);
}
