use crate::errors::{GearError, GearWarning};
use crate::float_types::{PI, Real, TAU};
use crate::gear::{GearParameters, validate_primary};
use crate::math::involute_roll_angle;
use serde::Serialize;

/// Radii and angles of a spur gear, derived from tooth count, circular
/// pitch, pressure angle and clearance.
///
/// Addendum is one module, dedendum is one module plus clearance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedGeometry {
    pub teeth: usize,
    pub circular_pitch: Real,
    /// Pressure angle in radians
    pub pressure_angle: Real,
    pub pitch_diameter: Real,
    pub pitch_radius: Real,
    pub base_radius: Real,
    /// Teeth per unit length of pitch diameter
    pub diametral_pitch: Real,
    /// Pitch diameter per tooth
    pub module: Real,
    pub addendum: Real,
    pub dedendum: Real,
    pub outer_radius: Real,
    pub root_radius: Real,
    /// Tooth width measured along the pitch circle
    pub tooth_thickness: Real,
    /// Half the angular width of a tooth at the pitch circle
    pub half_thick_angle: Real,
    /// Involute roll angle from the base circle to the pitch circle
    pub pitch_to_base_angle: Real,
    /// Involute roll angle from the pitch circle to the outer circle
    pub pitch_to_outer_angle: Real,
}

/// Derive all dimensions of a gear.
///
/// Fails on `teeth < 1`, `pitch <= 0`, an angle outside `(0°, 90°)` or a
/// negative clearance. A non-positive root radius is *not* an error, see
/// [`DerivedGeometry::degenerate_root`].
pub fn compute_geometry(
    teeth: usize,
    pitch: Real,
    angle_deg: Real,
    clearance: Real,
) -> Result<DerivedGeometry, GearError> {
    validate_primary(teeth, pitch, angle_deg, clearance)?;

    let z = teeth as Real;
    let pressure_angle = angle_deg.to_radians();

    let pitch_diameter = z * pitch / PI;
    let pitch_radius = pitch_diameter / 2.0;
    let base_radius = pitch_radius * pressure_angle.cos();
    let diametral_pitch = z / pitch_diameter;
    let addendum = 1.0 / diametral_pitch;
    let dedendum = addendum + clearance;
    let outer_radius = pitch_radius + addendum;
    let root_radius = pitch_radius - dedendum;

    let half_thick_angle = PI / (2.0 * z);
    let pitch_to_base_angle = involute_roll_angle(base_radius, pitch_radius);
    let pitch_to_outer_angle =
        involute_roll_angle(base_radius, outer_radius) - pitch_to_base_angle;

    Ok(DerivedGeometry {
        teeth,
        circular_pitch: pitch,
        pressure_angle,
        pitch_diameter,
        pitch_radius,
        base_radius,
        diametral_pitch,
        module: pitch_diameter / z,
        addendum,
        dedendum,
        outer_radius,
        root_radius,
        tooth_thickness: PI * pitch_diameter / (2.0 * z),
        half_thick_angle,
        pitch_to_base_angle,
        pitch_to_outer_angle,
    })
}

impl DerivedGeometry {
    pub fn from_parameters(params: &GearParameters) -> Result<Self, GearError> {
        compute_geometry(
            params.teeth,
            params.circular_pitch,
            params.pressure_angle_deg,
            params.clearance,
        )
    }

    pub fn pressure_angle_deg(&self) -> Real {
        self.pressure_angle.to_degrees()
    }

    pub fn clearance(&self) -> Real {
        self.dedendum - self.addendum
    }

    /// Angle between neighbouring tooth centers.
    pub fn angular_pitch(&self) -> Real {
        TAU / self.teeth as Real
    }

    pub fn outer_diameter(&self) -> Real {
        2.0 * self.outer_radius
    }

    pub fn base_diameter(&self) -> Real {
        2.0 * self.base_radius
    }

    pub fn root_diameter(&self) -> Real {
        2.0 * self.root_radius
    }

    /// True when the root circle lies strictly outside the base circle, so the
    /// involute reaches all the way down to the root.
    pub fn root_outside_base(&self) -> bool {
        self.root_radius > self.base_radius
    }

    /// Radius where the sampled flank begins.
    pub fn involute_start_radius(&self) -> Real {
        self.base_radius.max(self.root_radius)
    }

    /// Warning for a dedendum that reaches the gear center.
    pub fn degenerate_root(&self) -> Option<GearWarning> {
        (self.root_radius <= 0.0).then_some(GearWarning::DegenerateRoot {
            root_radius: self.root_radius,
        })
    }
}
