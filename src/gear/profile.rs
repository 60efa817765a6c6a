//! Tooth-by-tooth assembly of the gear outline.
//!
//! One tooth is, in order:
//! 1. the left involute flank, sampled from the start radius out to the tip,
//! 2. the tip arc on the outer circle,
//! 3. the right flank, mirrored about the tooth's radial center line and
//!    walked back down,
//! 4. the root arc over to where the next tooth's left flank starts.
//!
//! Consecutive pieces never repeat a junction point. Which arc samples are
//! dropped to keep that true depends on where the root circle lies relative
//! to the base circle, see [`RootConstruction`].

use crate::aabb::{Aabb2, bounding_box_center};
use crate::float_types::Real;
use crate::gear::DerivedGeometry;
use crate::math::{involute_roll_angle, linspace, point_on_circle};
use crate::path::Contour;
use geo::Polygon;
use nalgebra::Point2;
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the gap between two teeth is closed at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RootConstruction {
    /// Root circle outside the base circle: the flanks themselves reach the
    /// root circle, so the root arc shares both endpoints with them and both
    /// are dropped.
    InvoluteToRoot,
    /// Root circle on or inside the base circle: the flanks stop at the base
    /// circle and the full root arc is kept, joined to the flanks by short
    /// radial edges.
    BaseCircleArc,
}

impl RootConstruction {
    pub fn select(geom: &DerivedGeometry) -> Self {
        if geom.root_outside_base() {
            RootConstruction::InvoluteToRoot
        } else {
            RootConstruction::BaseCircleArc
        }
    }

    /// Points one tooth contributes for the given sample counts.
    pub const fn points_per_tooth(self, involute: usize, circular: usize) -> usize {
        let tip = circular.saturating_sub(2);
        match self {
            RootConstruction::InvoluteToRoot => 2 * involute + tip + circular.saturating_sub(2),
            RootConstruction::BaseCircleArc => 2 * involute + tip + circular,
        }
    }
}

/// Builds teeth for one gear. Holds the flank sampling shared by every tooth.
pub struct ToothAssembler<'a> {
    geom: &'a DerivedGeometry,
    radii: Vec<Real>,
    roll_angles: Vec<Real>,
    accuracy_circular: usize,
    construction: RootConstruction,
}

impl<'a> ToothAssembler<'a> {
    pub fn new(geom: &'a DerivedGeometry, accuracy_involute: usize, accuracy_circular: usize) -> Self {
        let radii = linspace(
            geom.involute_start_radius(),
            geom.outer_radius,
            accuracy_involute,
        );
        let roll_angles = radii
            .iter()
            .map(|&r| involute_roll_angle(geom.base_radius, r))
            .collect();
        Self {
            geom,
            radii,
            roll_angles,
            accuracy_circular,
            construction: RootConstruction::select(geom),
        }
    }

    pub const fn construction(&self) -> RootConstruction {
        self.construction
    }

    pub fn points_per_tooth(&self) -> usize {
        self.construction
            .points_per_tooth(self.radii.len(), self.accuracy_circular)
    }

    /// Angular centers of all teeth, tooth 0 on the +X axis.
    pub fn tooth_centers(&self) -> Vec<Real> {
        let step = self.geom.angular_pitch();
        (0..self.geom.teeth).map(|i| i as Real * step).collect()
    }

    /// Left flank of the tooth centered at `center`, from start radius to tip.
    pub fn left_flank(&self, center: Real) -> Vec<Point2<Real>> {
        let base1 = center - self.geom.half_thick_angle - self.geom.pitch_to_base_angle;
        self.radii
            .iter()
            .zip(&self.roll_angles)
            .map(|(&r, &a)| point_on_circle(r, base1 + a))
            .collect()
    }

    /// Right flank of the tooth centered at `center`, from start radius to tip.
    pub fn right_flank(&self, center: Real) -> Vec<Point2<Real>> {
        let base2 = center + self.geom.half_thick_angle + self.geom.pitch_to_base_angle;
        self.radii
            .iter()
            .zip(&self.roll_angles)
            .map(|(&r, &a)| point_on_circle(r, base2 - a))
            .collect()
    }

    /// Boundary points of the tooth centered at `center`.
    pub fn tooth(&self, center: Real) -> Vec<Point2<Real>> {
        let g = self.geom;
        let n = self.accuracy_circular;

        let pitch1 = center - g.half_thick_angle;
        let pitch2 = center + g.half_thick_angle;
        let base1 = pitch1 - g.pitch_to_base_angle;
        let base2 = pitch2 + g.pitch_to_base_angle;
        let tip_roll = self.roll_angles.last().copied().unwrap_or(0.0);

        let flank1 = self.left_flank(center);
        let flank2 = self.right_flank(center);

        let tip: Vec<Point2<Real>> = linspace(base1 + tip_roll, base2 - tip_roll, n)
            .into_iter()
            .map(|a| point_on_circle(g.outer_radius, a))
            .collect();

        let next_tooth = g.angular_pitch();
        let root: Vec<Point2<Real>> = match self.construction {
            RootConstruction::InvoluteToRoot => {
                let pitch_to_root =
                    g.pitch_to_base_angle - involute_roll_angle(g.base_radius, g.root_radius);
                let root1 = pitch1 - pitch_to_root;
                let root2 = pitch2 + pitch_to_root;
                linspace(root2, root1 + next_tooth, n)
            },
            RootConstruction::BaseCircleArc => linspace(base2, base1 + next_tooth, n),
        }
        .into_iter()
        .map(|a| point_on_circle(g.root_radius, a))
        .collect();

        let mut points = Vec::with_capacity(self.points_per_tooth());
        points.extend_from_slice(&flank1);
        points.extend_from_slice(trim_ends(&tip));
        points.extend(flank2.iter().rev());
        match self.construction {
            RootConstruction::InvoluteToRoot => points.extend_from_slice(trim_ends(&root)),
            RootConstruction::BaseCircleArc => points.extend_from_slice(&root),
        }
        points
    }

    /// All teeth, concatenated in order of increasing center angle.
    pub fn outline(&self) -> GearOutline {
        let centers = self.tooth_centers();

        #[cfg(feature = "parallel")]
        let teeth: Vec<Vec<Point2<Real>>> = centers.par_iter().map(|&c| self.tooth(c)).collect();
        #[cfg(not(feature = "parallel"))]
        let teeth: Vec<Vec<Point2<Real>>> = centers.iter().map(|&c| self.tooth(c)).collect();

        GearOutline {
            points: teeth.concat(),
            teeth: self.geom.teeth,
            points_per_tooth: self.points_per_tooth(),
            construction: self.construction,
        }
    }
}

/// Drops the first and last sample, which coincide with flank endpoints.
fn trim_ends(samples: &[Point2<Real>]) -> &[Point2<Real>] {
    if samples.len() <= 2 {
        &[]
    } else {
        &samples[1..samples.len() - 1]
    }
}

/// The closed tooth boundary of a whole gear.
///
/// The last point connects back to the first one; that closing edge is the
/// end of the last tooth's root arc.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GearOutline {
    pub points: Vec<Point2<Real>>,
    pub teeth: usize,
    pub points_per_tooth: usize,
    pub construction: RootConstruction,
}

impl GearOutline {
    /// Outline of the gear described by `geom`.
    pub fn assemble(geom: &DerivedGeometry, accuracy_involute: usize, accuracy_circular: usize) -> Self {
        ToothAssembler::new(geom, accuracy_involute, accuracy_circular).outline()
    }

    /// Points of tooth `index`, `None` past the last tooth.
    pub fn tooth(&self, index: usize) -> Option<&[Point2<Real>]> {
        let start = index.checked_mul(self.points_per_tooth)?;
        self.points.get(start..start + self.points_per_tooth)
    }

    pub fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.points)
    }

    /// Center of the bounding box; the natural rotation pivot when the
    /// gear is animated.
    pub fn pivot(&self) -> Option<Point2<Real>> {
        bounding_box_center(&self.points)
    }

    pub fn to_contour(&self) -> Option<Contour> {
        Contour::polyline(&self.points, true)
    }

    pub fn to_polygon(&self) -> Polygon<Real> {
        let coords: Vec<(Real, Real)> = self.points.iter().map(|p| (p.x, p.y)).collect();
        Polygon::new(coords.into(), vec![])
    }
}
