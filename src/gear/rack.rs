//! Straight rack matching a spur gear.
//!
//! An involute on a circle of infinite radius is a straight ramp, so every
//! rack tooth is a trapezoid whose flanks lean by the pressure angle. The
//! rack is laid out in its own frame:
//! - the pitch line, where it rolls on the gear's pitch circle, is `y = 0`,
//! - tooth tips sit at `y = +addendum`,
//! - tooth roots sit at `y = -(addendum + clearance)`,
//! - the base bar extends `base_height` further down from the roots, with a
//!   flat tab of `tab_length` at each end for mounting.
//!
//! The middle tooth is centered on `x = 0`; with an even tooth count the
//! extra tooth goes on the right.

use crate::errors::GearError;
use crate::float_types::Real;
use crate::gear::DerivedGeometry;
use crate::path::Contour;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RackParameters {
    pub tooth_count: usize,
    /// Height of the bar below the tooth roots
    pub base_height: Real,
    /// Length of the flat tab at each end
    pub tab_length: Real,
    /// Also return the pitch line as a separate segment
    pub draw_guide: bool,
}

impl Default for RackParameters {
    fn default() -> Self {
        Self {
            tooth_count: 12,
            base_height: 8.0,
            tab_length: 14.0,
            draw_guide: false,
        }
    }
}

impl RackParameters {
    pub fn validate(&self) -> Result<(), GearError> {
        if self.tooth_count < 1 {
            return Err(GearError::InvalidRack(format!(
                "a rack needs at least one tooth, got {}",
                self.tooth_count
            )));
        }
        if !(self.base_height.is_finite() && self.base_height >= 0.0) {
            return Err(GearError::InvalidRack(format!(
                "base height must be >= 0, got {}",
                self.base_height
            )));
        }
        if !(self.tab_length.is_finite() && self.tab_length >= 0.0) {
            return Err(GearError::InvalidRack(format!(
                "tab length must be >= 0, got {}",
                self.tab_length
            )));
        }
        Ok(())
    }
}

/// Open rack outline; the closing edge runs along the bottom of the bar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RackProfile {
    pub points: Vec<Point2<Real>>,
    /// Pitch line, inset by half a tab at each end
    pub guide: Option<[Point2<Real>; 2]>,
    pub tooth_count: usize,
    pub pitch: Real,
}

impl RackProfile {
    /// Rack for the given tooth size.
    pub fn new(
        rack: &RackParameters,
        pitch: Real,
        addendum: Real,
        pressure_angle_deg: Real,
        clearance: Real,
    ) -> Result<Self, GearError> {
        rack.validate()?;
        if !(pitch.is_finite() && pitch > 0.0) {
            return Err(GearError::InvalidPitch(pitch));
        }
        if !(pressure_angle_deg > 0.0 && pressure_angle_deg < 90.0) {
            return Err(GearError::InvalidPressureAngle(pressure_angle_deg));
        }

        // Rolling one pitch on the gear moves the rack by one pitch; each
        // tooth and each gap take half of it at the pitch line.
        let spacing = 0.5 * pitch;
        let slope = pressure_angle_deg.to_radians().tan();
        let tip_run = slope * addendum;
        let root_run = slope * (addendum + clearance);
        let root_y = -(addendum + clearance);
        let base_y = root_y - rack.base_height;

        let n = rack.tooth_count;
        let half_below = ((n - 1) / 2) as Real;
        // Left end of the first tooth on the pitch line.
        let first_x = -pitch * half_below - spacing / 2.0;
        let x_lhs = first_x - root_run - rack.tab_length;

        let mut points = Vec::with_capacity(4 * n + 4);
        points.push(Point2::new(x_lhs, base_y));
        points.push(Point2::new(x_lhs, root_y));
        let mut x = first_x;
        for _ in 0..n {
            points.push(Point2::new(x - root_run, root_y));
            points.push(Point2::new(x + tip_run, addendum));
            points.push(Point2::new(x + spacing - tip_run, addendum));
            points.push(Point2::new(x + spacing + root_run, root_y));
            x += pitch;
        }
        let x_rhs = x - pitch + spacing + root_run + rack.tab_length;
        points.push(Point2::new(x_rhs, root_y));
        points.push(Point2::new(x_rhs, base_y));

        let guide = rack.draw_guide.then(|| {
            [
                Point2::new(x_lhs + 0.5 * rack.tab_length, 0.0),
                Point2::new(x_rhs - 0.5 * rack.tab_length, 0.0),
            ]
        });

        Ok(Self {
            points,
            guide,
            tooth_count: n,
            pitch,
        })
    }

    /// Rack matching `geom`, in the rack's own frame.
    pub fn for_gear(rack: &RackParameters, geom: &DerivedGeometry) -> Result<Self, GearError> {
        Self::new(
            rack,
            geom.circular_pitch,
            geom.addendum,
            geom.pressure_angle_deg(),
            geom.clearance(),
        )
    }

    /// Rack moved under `geom` so that it meshes: pitch line tangent to the
    /// pitch circle at its lowest point (y = -pitch radius in the y-up
    /// drawing frame), a rack tooth opposite a gear gap.
    pub fn meshed_with(rack: &RackParameters, geom: &DerivedGeometry) -> Result<Self, GearError> {
        let profile = Self::for_gear(rack, geom)?;
        Ok(profile.translate(
            mesh_offset(geom.teeth, geom.circular_pitch),
            -geom.pitch_radius,
        ))
    }

    /// X positions of the tooth centers on the pitch line.
    pub fn tooth_centers(&self) -> Vec<Real> {
        (0..self.tooth_count)
            .map(|i| {
                // midpoint of the two tip corners of tooth i
                let a = self.points[2 + 4 * i + 1];
                let b = self.points[2 + 4 * i + 2];
                0.5 * (a.x + b.x)
            })
            .collect()
    }

    pub fn translate(&self, dx: Real, dy: Real) -> Self {
        let offset = Vector2::new(dx, dy);
        Self {
            points: self.points.iter().map(|p| p + offset).collect(),
            guide: self.guide.map(|[a, b]| [a + offset, b + offset]),
            tooth_count: self.tooth_count,
            pitch: self.pitch,
        }
    }

    /// Outline closed along the bottom of the bar.
    pub fn to_contour(&self) -> Option<Contour> {
        Contour::polyline(&self.points, true)
    }

    pub fn guide_contour(&self) -> Option<Contour> {
        self.guide.and_then(|g| Contour::polyline(&g, false))
    }
}

/// Horizontal shift that puts a rack tooth into the gear gap on the line of
/// centers, for a rack whose middle tooth is at `x = 0`.
///
/// Gear tooth 0 points along +X and gaps sit half a pitch from each tooth,
/// so along the pitch line under the gear the gaps fall at
/// `(T/4 + 1/2 + i) · pitch`. Only `T mod 4` matters; the result is wrapped
/// into `(-pitch, 0]`:
///
/// | `T mod 4` | 0    | 1     | 2 | 3     |
/// |-----------|------|-------|---|-------|
/// | offset    | −½ p | −¼ p  | 0 | −¾ p  |
pub fn mesh_offset(teeth: usize, pitch: Real) -> Real {
    let phase = ((teeth % 4) as Real / 4.0 + 0.5).fract();
    if phase == 0.0 {
        0.0
    } else {
        (phase - 1.0) * pitch
    }
}
