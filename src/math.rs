//! Scalar and planar primitives shared by the gear generators.
//!
//! The inverse trigonometric functions used by the involute and undercut
//! formulas are only defined on part of the real line. Every call site goes
//! through the `*_clamped` helpers below, which pin the argument to the valid
//! domain and report whether they had to, so that callers can turn the clamp
//! into a [`GearWarning`](crate::errors::GearWarning) instead of producing NaN.

use crate::float_types::Real;
use nalgebra::Point2;

/// A value computed from a possibly out-of-domain argument.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clamped {
    pub value: Real,
    /// `true` when the argument had to be moved into the domain first
    pub clamped: bool,
}

/// Pin `x` into `[lo, hi]`, reporting whether it moved. NaN is pinned to `lo`.
#[inline]
pub fn clamp_domain(x: Real, lo: Real, hi: Real) -> (Real, bool) {
    if x.is_nan() || x < lo {
        (lo, true)
    } else if x > hi {
        (hi, true)
    } else {
        (x, false)
    }
}

/// `asin(x)` with `x` limited to `[-1, 1]`.
#[inline]
pub fn asin_clamped(x: Real) -> Clamped {
    asin_clamped_within(x, 1.0)
}

/// `asin(x)` with `x` limited to `[-limit, limit]`, `0 < limit <= 1`.
#[inline]
pub fn asin_clamped_within(x: Real, limit: Real) -> Clamped {
    let (x, clamped) = clamp_domain(x, -limit, limit);
    Clamped { value: x.asin(), clamped }
}

/// `acos(x)` with `x` limited to `[-1, 1]`.
#[inline]
pub fn acos_clamped(x: Real) -> Clamped {
    let (x, clamped) = clamp_domain(x, -1.0, 1.0);
    Clamped { value: x.acos(), clamped }
}

/// `sqrt(x)` with negative `x` raised to zero.
#[inline]
pub fn sqrt_clamped(x: Real) -> Clamped {
    let (x, clamped) = clamp_domain(x, 0.0, Real::INFINITY);
    Clamped { value: x.sqrt(), clamped }
}

/// Point at distance `radius` from the origin at polar `angle` (radians).
#[inline]
pub fn point_on_circle(radius: Real, angle: Real) -> Point2<Real> {
    Point2::new(radius * angle.cos(), radius * angle.sin())
}

/// Polar angle swept by an involute of the base circle `base_radius` when it
/// reaches `radius`:
///
/// ```text
/// inv(r) = sqrt(r² − rb²) / rb − acos(rb / r)
/// ```
///
/// Defined for `radius >= base_radius > 0`. Below the base circle the clamps
/// make the result 0, which is where the involute starts.
#[inline]
pub fn involute_roll_angle(base_radius: Real, radius: Real) -> Real {
    debug_assert!(base_radius > 0.0, "base radius must be positive");
    let tangent = sqrt_clamped(radius * radius - base_radius * base_radius).value;
    tangent / base_radius - acos_clamped(base_radius / radius).value
}

/// `n` evenly spaced samples from `a` to `b`, both included.
///
/// `n == 1` yields `[a]` and `n == 0` yields nothing. When `a == b` every
/// sample is `a`.
pub fn linspace(a: Real, b: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as Real;
            (0..n)
                .map(|i| if i == n - 1 { b } else { a + step * i as Real })
                .collect()
        },
    }
}
