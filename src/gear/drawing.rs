use crate::aabb::Aabb2;
use crate::errors::{GearError, GearWarning};
use crate::float_types::{INCH, PI, Real};
use crate::gear::{
    DerivedGeometry, GearOutline, GearParameters, RackParameters, RackProfile, Skeleton,
    SkeletonParameters, UndercutReport,
};
use crate::path::Contour;
use log::{debug, warn};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Arc subdivision used when a bounding box has to include arcs.
const BOUNDS_ARC_SEGMENTS: usize = 32;

/// Helper geometry drawn with a light stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guides {
    /// Pitch circle of the gear, and pitch line of the rack
    pub pitch_circle: bool,
    pub center_cross: bool,
}

/// Everything needed for one drawing, in normalized units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingRequest {
    pub gear: GearParameters,
    /// Hub or ring fragment; `None` leaves just the tooth outline
    pub skeleton: Option<SkeletonParameters>,
    pub rack: Option<RackParameters>,
    pub guides: Guides,
}

impl DrawingRequest {
    pub fn new(gear: GearParameters) -> Self {
        Self {
            gear,
            skeleton: None,
            rack: None,
            guides: Guides::default(),
        }
    }

    pub fn with_skeleton(mut self, skeleton: SkeletonParameters) -> Self {
        self.skeleton = Some(skeleton);
        self
    }

    pub fn with_rack(mut self, rack: RackParameters) -> Self {
        self.rack = Some(rack);
        self
    }

    pub fn with_guides(mut self, guides: Guides) -> Self {
        self.guides = guides;
        self
    }
}

/// A generated gear with every optional fragment and the accumulated warnings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GearDrawing {
    pub geometry: DerivedGeometry,
    pub undercut: UndercutReport,
    pub outline: GearOutline,
    pub skeleton: Option<Skeleton>,
    /// Rack already moved into mesh below the gear
    pub rack: Option<RackProfile>,
    pub pitch_circle: Option<Contour>,
    pub center_cross: Vec<Contour>,
    /// Bounding-box center of the tooth outline
    pub pivot: Point2<Real>,
    pub warnings: Vec<GearWarning>,
}

impl GearDrawing {
    pub fn generate(request: &DrawingRequest) -> Result<Self, GearError> {
        let params = &request.gear;
        params.validate()?;

        let geometry = DerivedGeometry::from_parameters(params)?;
        debug!(
            "gear {} teeth: pitch r={:.4} base r={:.4} outer r={:.4} root r={:.4}",
            geometry.teeth,
            geometry.pitch_radius,
            geometry.base_radius,
            geometry.outer_radius,
            geometry.root_radius
        );
        debug!(
            "accuracy: involute={} circular={}",
            params.accuracy_involute, params.accuracy_circular
        );

        let mut warnings = Vec::new();
        let undercut =
            UndercutReport::analyze(params.teeth, params.pressure_angle_deg, params.profile_shift);
        warnings.extend(undercut.warning());
        warnings.extend(geometry.degenerate_root());

        let outline =
            GearOutline::assemble(&geometry, params.accuracy_involute, params.accuracy_circular);
        let pivot = outline.pivot().unwrap_or_else(Point2::origin);

        let skeleton = match &request.skeleton {
            Some(skel) => {
                let (skeleton, skel_warnings) = Skeleton::generate(skel, &geometry)?;
                warnings.extend(skel_warnings);
                Some(skeleton)
            },
            None => None,
        };

        let rack = match &request.rack {
            Some(rack) => {
                let rack = RackParameters {
                    draw_guide: rack.draw_guide || request.guides.pitch_circle,
                    ..rack.clone()
                };
                Some(RackProfile::meshed_with(&rack, &geometry)?)
            },
            None => None,
        };

        let pitch_circle = request
            .guides
            .pitch_circle
            .then(|| Contour::circle(geometry.pitch_radius));
        let center_cross = if request.guides.center_cross {
            center_cross(params.circular_pitch / 3.0)
        } else {
            Vec::new()
        };

        for w in &warnings {
            warn!("{w}");
        }

        Ok(Self {
            geometry,
            undercut,
            outline,
            skeleton,
            rack,
            pitch_circle,
            center_cross,
            pivot,
            warnings,
        })
    }

    /// Gear outline followed by the hub or ring fragment, the contours a
    /// cutter follows for the gear itself.
    pub fn gear_contours(&self) -> Vec<Contour> {
        let mut out: Vec<Contour> = self.outline.to_contour().into_iter().collect();
        if let Some(skeleton) = &self.skeleton {
            out.extend(skeleton.contours().into_iter().cloned());
        }
        out
    }

    pub fn guide_contours(&self) -> Vec<Contour> {
        let mut out: Vec<Contour> = self.pitch_circle.iter().cloned().collect();
        out.extend(self.center_cross.iter().cloned());
        out
    }

    /// Bounds of every fragment, rack and guides included.
    pub fn bounding_box(&self) -> Option<Aabb2> {
        let mut contours = self.gear_contours();
        contours.extend(self.guide_contours());
        if let Some(rack) = &self.rack {
            contours.extend(rack.to_contour());
        }
        contours
            .iter()
            .filter_map(|c| c.bounding_box(BOUNDS_ARC_SEGMENTS))
            .reduce(|a, b| a.union(&b))
    }

    /// Dimension notes for the drawing, lengths divided by `unit_scale` and
    /// labelled `unit_name`.
    pub fn annotations(&self, unit_name: &str, unit_scale: Real) -> Vec<String> {
        let g = &self.geometry;
        let mut outer_diameter = g.outer_diameter();
        if let Some(Skeleton::Ring { width, .. }) = &self.skeleton {
            outer_diameter += 2.0 * width;
        }
        vec![
            format!(
                "Teeth: {}   CP: {:.4}({unit_name}) ",
                g.teeth,
                g.circular_pitch / unit_scale
            ),
            format!(
                "DP: {:.4} Module: {:.4}",
                PI * INCH / g.circular_pitch,
                g.circular_pitch / PI
            ),
            format!("Pressure Angle: {:.4} degrees", g.pressure_angle_deg()),
            format!(
                "Pitch diameter: {:.4} {unit_name}",
                g.pitch_diameter / unit_scale
            ),
            format!("Outer diameter: {:.4} {unit_name}", outer_diameter / unit_scale),
            format!("Base diameter:  {:.4} {unit_name}", g.base_diameter() / unit_scale),
        ]
    }
}

fn center_cross(half_length: Real) -> Vec<Contour> {
    [
        [Point2::new(-half_length, 0.0), Point2::new(half_length, 0.0)],
        [Point2::new(0.0, -half_length), Point2::new(0.0, half_length)],
    ]
    .iter()
    .filter_map(|line| Contour::polyline(line, false))
    .collect()
}
