//! The flat option record a host dialog or command line collects, and its
//! translation into the normalized parameters the generators take.
//!
//! This is the only place that knows about pitch systems and dialog units.
//! Everything it produces is in millimetres.

use crate::errors::GearError;
use crate::float_types::{CM, INCH, MM, PI, Real};
use crate::gear::{
    Accuracy, DrawingRequest, GearParameters, Guides, RackParameters, SkeletonParameters,
};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// How the tooth size is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitchSystem {
    /// Circular pitch, a length in dialog units
    #[default]
    #[serde(rename = "CP")]
    CircularPitch,
    /// Diametral pitch, teeth per inch of pitch diameter
    #[serde(rename = "DP")]
    DiametralPitch,
    /// Metric module, millimetres of pitch diameter per tooth
    #[serde(rename = "MM")]
    Module,
}

impl PitchSystem {
    /// Circular pitch in millimetres for `dimension` given in this system.
    pub fn circular_pitch(self, dimension: Real, units: Units) -> Real {
        match self {
            PitchSystem::CircularPitch => dimension * units.scale(),
            PitchSystem::DiametralPitch => PI * INCH / dimension,
            PitchSystem::Module => PI * dimension * MM,
        }
    }
}

impl FromStr for PitchSystem {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CP" => Ok(PitchSystem::CircularPitch),
            "DP" => Ok(PitchSystem::DiametralPitch),
            "MM" => Ok(PitchSystem::Module),
            _ => Err(GearError::UnknownPitchSystem(s.to_string())),
        }
    }
}

/// Length unit the dialog values are typed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Mm,
    Cm,
    In,
}

impl Units {
    /// Millimetres per dialog unit.
    pub const fn scale(self) -> Real {
        match self {
            Units::Mm => MM,
            Units::Cm => CM,
            Units::In => INCH,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Units::Mm => "mm",
            Units::Cm => "cm",
            Units::In => "in",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mm" => Ok(Units::Mm),
            "cm" => Ok(Units::Cm),
            "in" | "inch" => Ok(Units::In),
            _ => Err(format!("unknown unit '{s}', try mm, cm, in")),
        }
    }
}

/// Every option of a gear drawing, lengths in `units`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearConfig {
    pub teeth: usize,
    pub system: PitchSystem,
    /// Tooth size in the selected system
    pub dimension: Real,
    /// Pressure angle in degrees (common values: 14.5, 20, 25)
    pub angle: Real,
    pub units: Units,
    /// Points per involute flank, 0 for automatic
    pub accuracy: usize,
    pub clearance: Real,
    /// Profile-shift factor used by the undercut check
    pub profile_shift: Real,
    pub annotation: bool,
    pub ring: bool,
    pub mount_hole: Real,
    pub mount_diameter: Real,
    pub spoke_count: usize,
    pub spoke_width: Real,
    pub center_cross: bool,
    pub pitch_circle: bool,
    pub draw_rack: bool,
    pub rack_teeth: usize,
    pub rack_base_height: Real,
    pub rack_base_tab: Real,
}

impl Default for GearConfig {
    fn default() -> Self {
        let skeleton = SkeletonParameters::default();
        let rack = RackParameters::default();
        Self {
            teeth: 24,
            system: PitchSystem::CircularPitch,
            dimension: 1.0,
            angle: 20.0,
            units: Units::Mm,
            accuracy: 0,
            clearance: 0.0,
            profile_shift: 1.0,
            annotation: false,
            ring: false,
            mount_hole: skeleton.mount_hole,
            mount_diameter: skeleton.mount_diameter,
            spoke_count: skeleton.spoke_count,
            spoke_width: skeleton.spoke_width,
            center_cross: false,
            pitch_circle: false,
            draw_rack: false,
            rack_teeth: rack.tooth_count,
            rack_base_height: rack.base_height,
            rack_base_tab: rack.tab_length,
        }
    }
}

impl GearConfig {
    pub fn circular_pitch(&self) -> Real {
        self.system.circular_pitch(self.dimension, self.units)
    }

    /// Normalize into a drawing request with every length in millimetres.
    pub fn resolve(&self) -> Result<DrawingRequest, GearError> {
        if !self.dimension.is_finite() || self.dimension <= 0.0 {
            return Err(GearError::InvalidPitch(self.dimension));
        }
        let scale = self.units.scale();

        let gear = GearParameters::new(self.teeth, self.circular_pitch(), self.angle)
            .with_clearance(self.clearance * scale)
            .with_accuracy(Accuracy::from_setting(self.accuracy))
            .with_profile_shift(self.profile_shift);
        gear.validate()?;

        let skeleton = SkeletonParameters {
            spoke_count: self.spoke_count,
            spoke_width: self.spoke_width * scale,
            mount_hole: self.mount_hole * scale,
            mount_diameter: self.mount_diameter * scale,
            ring: self.ring,
        };
        skeleton.validate()?;

        let rack = if self.draw_rack {
            let rack = RackParameters {
                tooth_count: self.rack_teeth,
                base_height: self.rack_base_height * scale,
                tab_length: self.rack_base_tab * scale,
                draw_guide: self.pitch_circle,
            };
            rack.validate()?;
            Some(rack)
        } else {
            None
        };

        Ok(DrawingRequest {
            gear,
            skeleton: Some(skeleton),
            rack,
            guides: Guides {
                pitch_circle: self.pitch_circle,
                center_cross: self.center_cross,
            },
        })
    }
}
