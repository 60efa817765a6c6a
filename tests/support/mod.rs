//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use gearrs::float_types::Real;
use gearrs::gear::{DerivedGeometry, GearParameters, dimensions::compute_geometry};
use nalgebra::Point2;

/// Returns the bounding box `[min_x, min_y, max_x, max_y]` of a point set.
pub fn bounding_box(points: &[Point2<Real>]) -> [Real; 4] {
    let mut min_x = Real::MAX;
    let mut min_y = Real::MAX;
    let mut max_x = Real::MIN;
    let mut max_y = Real::MIN;

    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    [min_x, min_y, max_x, max_y]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn points_approx_eq(a: &Point2<Real>, b: &Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

/// Geometry of a gear without clearance.
pub fn geometry(teeth: usize, pitch: Real, angle_deg: Real) -> DerivedGeometry {
    compute_geometry(teeth, pitch, angle_deg, 0.0).unwrap()
}

/// A 24 tooth, 6 mm pitch, 20° gear with a little clearance: the root circle
/// sits outside the base circle.
pub fn medium_gear() -> GearParameters {
    GearParameters::new(24, 6.0, 20.0).with_clearance(0.1)
}

/// Polar angle of `p`, in `(-π, π]`.
pub fn angle_of(p: &Point2<Real>) -> Real {
    p.y.atan2(p.x)
}
