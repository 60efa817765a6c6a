//! Hub cut-outs of a spur gear, or the support ring of a ring gear.

use crate::errors::{GearError, GearWarning};
use crate::float_types::{Real, TAU};
use crate::gear::DerivedGeometry;
use crate::math::{asin_clamped, point_on_circle};
use crate::path::{CircularArc, Contour, Segment};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkeletonParameters {
    /// Number of spokes; 0 leaves the disc solid apart from the bore
    pub spoke_count: usize,
    /// Spoke width, or ring width for ring gears
    pub spoke_width: Real,
    /// Diameter of the central bore
    pub mount_hole: Real,
    /// Diameter of the solid hub around the bore
    pub mount_diameter: Real,
    /// Ring gear: draw a support ring outside the teeth instead of spokes
    pub ring: bool,
}

impl Default for SkeletonParameters {
    fn default() -> Self {
        Self {
            spoke_count: 3,
            spoke_width: 5.0,
            mount_hole: 5.0,
            mount_diameter: 15.0,
            ring: false,
        }
    }
}

impl SkeletonParameters {
    pub fn validate(&self) -> Result<(), GearError> {
        for (name, value) in [
            ("spoke width", self.spoke_width),
            ("mount hole", self.mount_hole),
            ("mount diameter", self.mount_diameter),
        ] {
            if !value.is_finite() {
                return Err(GearError::NonFiniteParameter(name));
            }
            if value < 0.0 {
                return Err(GearError::InvalidSkeleton(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Skeleton {
    /// Spoke-shaped openings between hub and rim, plus the central bore
    Spokes { openings: Vec<Contour>, bore: Contour },
    /// Single circle outside the teeth; `width` is its distance from the tips
    Ring { support: Contour, width: Real },
}

impl Skeleton {
    /// Build the fragment for `geom`, collecting warnings for spokes that do
    /// not fit. Mutually exclusive: a ring gear gets no hub at all.
    pub fn generate(
        params: &SkeletonParameters,
        geom: &DerivedGeometry,
    ) -> Result<(Self, Vec<GearWarning>), GearError> {
        params.validate()?;
        if params.ring {
            let support = Contour::circle(geom.outer_radius + params.spoke_width);
            return Ok((
                Skeleton::Ring {
                    support,
                    width: params.spoke_width,
                },
                Vec::new(),
            ));
        }

        let mut warnings = Vec::new();
        let mount_radius = 0.5 * params.mount_diameter;
        let openings = spoke_openings(
            params.spoke_count,
            params.spoke_width,
            mount_radius,
            geom.root_radius - params.spoke_width,
            &mut warnings,
        );
        let bore = Contour::circle(0.5 * params.mount_hole);
        Ok((Skeleton::Spokes { openings, bore }, warnings))
    }

    pub fn contours(&self) -> Vec<&Contour> {
        match self {
            Skeleton::Spokes { openings, bore } => openings.iter().chain(Some(bore)).collect(),
            Skeleton::Ring { support, .. } => vec![support],
        }
    }
}

/// Half the angle a chord of length `width` subtends on a circle of `radius`.
/// A circle of no usable radius is treated like a spoke wider than the circle.
fn half_gap(width: Real, radius: Real, warnings: &mut Vec<GearWarning>) -> Real {
    let ratio = if radius > 0.0 { width / radius / 2.0 } else { 1.0 };
    let clamped = asin_clamped(ratio);
    if clamped.clamped || !(radius > 0.0 && radius.is_normal()) {
        warnings.push(GearWarning::SpokeWidthInfeasible {
            radius,
            spoke_width: width,
        });
    }
    clamped.value
}

/// One opening per sector: an arc on the hub circle, a straight spoke edge
/// out to the rim circle, the rim arc back, and the other spoke edge.
fn spoke_openings(
    count: usize,
    width: Real,
    mount_radius: Real,
    rim_radius: Real,
    warnings: &mut Vec<GearWarning>,
) -> Vec<Contour> {
    if count == 0 {
        return Vec::new();
    }
    if rim_radius <= mount_radius {
        warnings.push(GearWarning::SpokeRimInsideMount {
            rim_radius,
            mount_radius,
        });
    }
    let a_hub = half_gap(width, mount_radius, warnings);
    let a_rim = half_gap(width, rim_radius, warnings);
    let sector = TAU / count as Real;

    (0..count)
        .map(|i| {
            let start_a = i as Real * sector;
            let end_a = start_a + sector;
            let hub = CircularArc::centered(mount_radius, start_a + a_hub, end_a - a_hub);
            let rim = CircularArc::centered(rim_radius, end_a - a_rim, start_a + a_rim);
            Contour {
                start: hub.start_point(),
                segments: vec![
                    Segment::Arc(hub),
                    Segment::Line(point_on_circle(rim_radius, end_a - a_rim)),
                    Segment::Arc(rim),
                ],
                closed: true,
            }
        })
        .collect()
}
