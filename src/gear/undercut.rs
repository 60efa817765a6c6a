//! Undercut detection.
//!
//! A rack cutter with addendum `k·m` undercuts a spur gear when the
//! tooth count is below `2k / sin²α`. The gear is still generated, the
//! report only tells the operator which parameter to change.
//!
//! Reference: NPTEL, *Machine Design II*, module 2, lecture 2.

use crate::errors::GearWarning;
use crate::float_types::Real;
use crate::math::{asin_clamped_within, sqrt_clamped};
use serde::Serialize;

/// Largest arcsine argument used when suggesting a pressure angle (about 66°).
pub const MAX_MIN_ANGLE_SINE: Real = 0.9135;

/// Tooth count below which a gear with pressure angle `angle_deg` undercuts.
/// Round the result up for a safe tooth count: 20° gives ≈17.09, so 18.
pub fn min_teeth_for_no_undercut(angle_deg: Real, k: Real) -> Real {
    let s = angle_deg.to_radians().sin();
    2.0 * k / (s * s)
}

/// Largest profile-shift factor `k` that avoids undercut.
pub fn max_shift_for_no_undercut(teeth: usize, angle_deg: Real) -> Real {
    let s = angle_deg.to_radians().sin();
    0.5 * teeth as Real * s * s
}

/// Smallest pressure angle (degrees) that avoids undercut for `teeth`.
///
/// The arcsine argument is capped at [`MAX_MIN_ANGLE_SINE`], so tiny tooth
/// counts get a finite suggestion instead of a domain error.
pub fn min_angle_for_no_undercut(teeth: usize, k: Real) -> Real {
    let ratio = sqrt_clamped(2.0 * k / teeth.max(1) as Real).value;
    asin_clamped_within(ratio, MAX_MIN_ANGLE_SINE)
        .value
        .to_degrees()
}

pub fn is_undercut(teeth: usize, angle_deg: Real, k: Real) -> bool {
    (teeth as Real) < min_teeth_for_no_undercut(angle_deg, k)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UndercutReport {
    pub is_undercut: bool,
    /// Smallest safe tooth count for the requested angle
    pub min_teeth: usize,
    /// Smallest safe pressure angle in degrees for the requested tooth count
    pub min_angle: Real,
    /// Profile shift, in percent relative to `k = 1`, that would avoid undercut
    pub max_shift_percent: Real,
}

impl UndercutReport {
    pub fn analyze(teeth: usize, angle_deg: Real, k: Real) -> Self {
        let min_teeth = min_teeth_for_no_undercut(angle_deg, k).ceil().max(0.0) as usize;
        Self {
            is_undercut: is_undercut(teeth, angle_deg, k),
            min_teeth,
            min_angle: min_angle_for_no_undercut(teeth, k),
            max_shift_percent: 100.0 * max_shift_for_no_undercut(teeth, angle_deg) - 100.0,
        }
    }

    pub fn warning(&self) -> Option<GearWarning> {
        self.is_undercut.then_some(GearWarning::Undercut(*self))
    }
}
