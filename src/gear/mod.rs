//! Involute spur gears, ring gears and their racks.
//!
//! Everything in this module is a pure function of an immutable
//! [`GearParameters`] record: no ambient state is read and nothing is
//! written anywhere. Independent gears can be generated from several
//! threads at once.

pub mod dimensions;
pub mod drawing;
pub mod profile;
pub mod rack;
pub mod skeleton;
pub mod undercut;

pub use dimensions::DerivedGeometry;
pub use drawing::{DrawingRequest, GearDrawing, Guides};
pub use profile::{GearOutline, RootConstruction};
pub use rack::{RackParameters, RackProfile};
pub use skeleton::{Skeleton, SkeletonParameters};
pub use undercut::UndercutReport;

use crate::errors::GearError;
use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// Fewest involute samples that still describe a flank (both endpoints).
pub const MIN_INVOLUTE_SAMPLES: usize = 2;
/// Fewest samples on the tip and root arcs.
pub const MIN_CIRCULAR_SAMPLES: usize = 3;

/// How finely the involute flanks are sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accuracy {
    /// Pick from the tooth count: small gears need more points per flank
    #[default]
    Auto,
    /// Exactly this many points per flank
    Fixed(usize),
}

impl Accuracy {
    /// `0` selects [`Accuracy::Auto`], anything else is taken literally.
    pub const fn from_setting(setting: usize) -> Self {
        match setting {
            0 => Accuracy::Auto,
            n => Accuracy::Fixed(n),
        }
    }

    pub const fn involute_samples(self, teeth: usize) -> usize {
        match self {
            Accuracy::Fixed(n) => n,
            Accuracy::Auto if teeth < 10 => 20,
            Accuracy::Auto if teeth < 30 => 12,
            Accuracy::Auto => 6,
        }
    }

    /// Tip and root arcs get about half the flank resolution, never less than three.
    pub const fn circular_samples(involute_samples: usize) -> usize {
        let half = (involute_samples / 2).saturating_sub(1);
        if half < MIN_CIRCULAR_SAMPLES {
            MIN_CIRCULAR_SAMPLES
        } else {
            half
        }
    }
}

/// Normalized inputs of one gear. All lengths share one unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GearParameters {
    pub teeth: usize,
    /// Arc length between neighbouring teeth on the pitch circle
    pub circular_pitch: Real,
    pub pressure_angle_deg: Real,
    /// Extra dedendum beyond the mating gear's addendum
    pub clearance: Real,
    /// Points per involute flank
    pub accuracy_involute: usize,
    /// Points on the tip and root arcs
    pub accuracy_circular: usize,
    /// Profile-shift factor `k` used by the undercut check
    pub profile_shift: Real,
}

impl GearParameters {
    /// Gear with automatic accuracy, no clearance and `k = 1`.
    pub fn new(teeth: usize, circular_pitch: Real, pressure_angle_deg: Real) -> Self {
        let mut params = Self {
            teeth,
            circular_pitch,
            pressure_angle_deg,
            clearance: 0.0,
            accuracy_involute: 0,
            accuracy_circular: 0,
            profile_shift: 1.0,
        };
        params.set_accuracy(Accuracy::Auto);
        params
    }

    pub fn with_clearance(mut self, clearance: Real) -> Self {
        self.clearance = clearance;
        self
    }

    pub fn with_accuracy(mut self, accuracy: Accuracy) -> Self {
        self.set_accuracy(accuracy);
        self
    }

    /// Override both sample counts directly.
    pub fn with_samples(mut self, involute: usize, circular: usize) -> Self {
        self.accuracy_involute = involute;
        self.accuracy_circular = circular;
        self
    }

    pub fn with_profile_shift(mut self, k: Real) -> Self {
        self.profile_shift = k;
        self
    }

    fn set_accuracy(&mut self, accuracy: Accuracy) {
        self.accuracy_involute = accuracy.involute_samples(self.teeth);
        self.accuracy_circular = Accuracy::circular_samples(self.accuracy_involute);
    }

    /// Reject inputs for which no outline can be computed.
    pub fn validate(&self) -> Result<(), GearError> {
        validate_primary(
            self.teeth,
            self.circular_pitch,
            self.pressure_angle_deg,
            self.clearance,
        )?;
        if !self.profile_shift.is_finite() {
            return Err(GearError::NonFiniteParameter("profile shift"));
        }
        if self.accuracy_involute < MIN_INVOLUTE_SAMPLES {
            return Err(GearError::InvalidAccuracy {
                what: "involute flank",
                min: MIN_INVOLUTE_SAMPLES,
                got: self.accuracy_involute,
            });
        }
        if self.accuracy_circular < MIN_CIRCULAR_SAMPLES {
            return Err(GearError::InvalidAccuracy {
                what: "circular arc",
                min: MIN_CIRCULAR_SAMPLES,
                got: self.accuracy_circular,
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_primary(
    teeth: usize,
    pitch: Real,
    angle_deg: Real,
    clearance: Real,
) -> Result<(), GearError> {
    if teeth < 1 {
        return Err(GearError::InvalidTeeth(teeth));
    }
    if !pitch.is_finite() {
        return Err(GearError::NonFiniteParameter("circular pitch"));
    }
    if pitch <= 0.0 {
        return Err(GearError::InvalidPitch(pitch));
    }
    if !(angle_deg > 0.0 && angle_deg < 90.0) {
        return Err(GearError::InvalidPressureAngle(angle_deg));
    }
    if !clearance.is_finite() {
        return Err(GearError::NonFiniteParameter("clearance"));
    }
    if clearance < 0.0 {
        return Err(GearError::InvalidClearance(clearance));
    }
    Ok(())
}
