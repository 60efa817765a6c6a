use approx::assert_relative_eq;
use gearrs::errors::{GearError, GearWarning};
use gearrs::float_types::{PI, Real, TAU};
use gearrs::gear::dimensions::compute_geometry;
use gearrs::gear::profile::ToothAssembler;
use gearrs::gear::{
    Accuracy, DerivedGeometry, GearOutline, GearParameters, RootConstruction,
};

mod support;

use crate::support::{angle_of, approx_eq, geometry, medium_gear, points_approx_eq};

#[test]
fn radii_are_ordered() {
    for teeth in [3, 8, 17, 24, 60, 200] {
        for angle in [14.5, 20.0, 25.0] {
            let g = compute_geometry(teeth, 3.0, angle, 0.2).unwrap();
            assert!(g.outer_radius > g.pitch_radius, "T={teeth} a={angle}");
            assert!(g.pitch_radius > g.base_radius, "T={teeth} a={angle}");
            assert!(g.pitch_radius > g.root_radius, "T={teeth} a={angle}");
        }
    }
}

#[test]
fn derived_dimensions() {
    let g = geometry(20, PI, 20.0);
    // pitch = π gives module 1
    assert_relative_eq!(g.pitch_diameter, 20.0, epsilon = 1e-9);
    assert_relative_eq!(g.module, 1.0, epsilon = 1e-9);
    assert_relative_eq!(g.addendum, 1.0, epsilon = 1e-9);
    assert_relative_eq!(g.dedendum, 1.0, epsilon = 1e-9);
    assert_relative_eq!(g.outer_radius, 11.0, epsilon = 1e-9);
    assert_relative_eq!(g.root_radius, 9.0, epsilon = 1e-9);
    assert_relative_eq!(g.diametral_pitch, 1.0, epsilon = 1e-9);
    assert_relative_eq!(
        g.base_radius,
        10.0 * (20.0 as Real).to_radians().cos(),
        epsilon = 1e-9
    );
    assert_relative_eq!(g.tooth_thickness, PI / 2.0, epsilon = 1e-9);
    assert_relative_eq!(g.half_thick_angle, PI / 40.0, epsilon = 1e-12);
    assert_relative_eq!(g.clearance(), 0.0, epsilon = 1e-12);
    assert!(g.pitch_to_base_angle > 0.0);
    assert!(g.pitch_to_outer_angle > 0.0);
}

#[test]
fn clearance_only_deepens_the_root() {
    let plain = geometry(30, 5.0, 20.0);
    let deep = compute_geometry(30, 5.0, 20.0, 0.5).unwrap();
    assert_eq!(plain.outer_radius, deep.outer_radius);
    assert_relative_eq!(plain.root_radius - deep.root_radius, 0.5, epsilon = 1e-9);
    assert_relative_eq!(deep.clearance(), 0.5, epsilon = 1e-9);
}

#[test]
fn geometry_is_deterministic() {
    let params = medium_gear();
    let a = DerivedGeometry::from_parameters(&params).unwrap();
    let b = DerivedGeometry::from_parameters(&params).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.root_radius.to_bits(), b.root_radius.to_bits());
    assert_eq!(a.pitch_to_outer_angle.to_bits(), b.pitch_to_outer_angle.to_bits());

    let g = DerivedGeometry::from_parameters(&params).unwrap();
    let o1 = GearOutline::assemble(&g, params.accuracy_involute, params.accuracy_circular);
    let o2 = GearOutline::assemble(&g, params.accuracy_involute, params.accuracy_circular);
    assert_eq!(o1, o2);
}

#[test]
fn invalid_parameters_are_rejected() {
    assert_eq!(
        compute_geometry(0, 3.0, 20.0, 0.0),
        Err(GearError::InvalidTeeth(0))
    );
    assert_eq!(
        compute_geometry(12, 0.0, 20.0, 0.0),
        Err(GearError::InvalidPitch(0.0))
    );
    assert_eq!(
        compute_geometry(12, -1.0, 20.0, 0.0),
        Err(GearError::InvalidPitch(-1.0))
    );
    assert_eq!(
        compute_geometry(12, 3.0, 0.0, 0.0),
        Err(GearError::InvalidPressureAngle(0.0))
    );
    assert_eq!(
        compute_geometry(12, 3.0, 90.0, 0.0),
        Err(GearError::InvalidPressureAngle(90.0))
    );
    assert_eq!(
        compute_geometry(12, 3.0, 20.0, -0.1),
        Err(GearError::InvalidClearance(-0.1))
    );
    assert!(matches!(
        compute_geometry(12, Real::NAN, 20.0, 0.0),
        Err(GearError::NonFiniteParameter(_))
    ));
    assert!(matches!(
        compute_geometry(12, 3.0, Real::NAN, 0.0),
        Err(GearError::InvalidPressureAngle(_))
    ));
}

#[test]
fn accuracy_settings() {
    assert_eq!(Accuracy::from_setting(0), Accuracy::Auto);
    assert_eq!(Accuracy::from_setting(7), Accuracy::Fixed(7));

    assert_eq!(Accuracy::Auto.involute_samples(8), 20);
    assert_eq!(Accuracy::Auto.involute_samples(24), 12);
    assert_eq!(Accuracy::Auto.involute_samples(30), 6);
    assert_eq!(Accuracy::Fixed(9).involute_samples(8), 9);

    assert_eq!(Accuracy::circular_samples(20), 9);
    assert_eq!(Accuracy::circular_samples(12), 5);
    assert_eq!(Accuracy::circular_samples(6), 3);
    assert_eq!(Accuracy::circular_samples(2), 3);

    let params = GearParameters::new(24, 6.0, 20.0);
    assert_eq!(params.accuracy_involute, 12);
    assert_eq!(params.accuracy_circular, 5);

    let too_coarse = params.clone().with_samples(1, 3);
    assert_eq!(
        too_coarse.validate(),
        Err(GearError::InvalidAccuracy {
            what: "involute flank",
            min: 2,
            got: 1
        })
    );
    assert!(params.with_samples(4, 2).validate().is_err());
}

#[test]
fn root_construction_branches() {
    // 60 teeth at 20°: root circle outside the base circle
    let big = geometry(60, 3.0, 20.0);
    assert!(big.root_radius > big.base_radius);
    assert_eq!(RootConstruction::select(&big), RootConstruction::InvoluteToRoot);

    // 12 teeth at 20°: root circle inside the base circle
    let small = geometry(12, 3.0, 20.0);
    assert!(small.root_radius <= small.base_radius);
    assert_eq!(RootConstruction::select(&small), RootConstruction::BaseCircleArc);

    assert_eq!(
        RootConstruction::InvoluteToRoot.points_per_tooth(6, 3),
        2 * 6 + 1 + 1
    );
    assert_eq!(
        RootConstruction::BaseCircleArc.points_per_tooth(6, 3),
        2 * 6 + 1 + 3
    );
}

#[test]
fn outline_repeats_the_tooth_pattern() {
    for (teeth, inv, circ) in [(60, 6, 3), (12, 20, 9), (7, 5, 4)] {
        let g = geometry(teeth, 3.0, 20.0);
        let construction = RootConstruction::select(&g);
        let outline = GearOutline::assemble(&g, inv, circ);

        assert_eq!(outline.teeth, teeth);
        assert_eq!(outline.construction, construction);
        assert_eq!(
            outline.points_per_tooth,
            construction.points_per_tooth(inv, circ)
        );
        assert_eq!(outline.points.len(), teeth * outline.points_per_tooth);
        assert!(outline.tooth(teeth - 1).is_some());
        assert!(outline.tooth(teeth).is_none());

        // each tooth is the first one rotated by a whole number of angular pitches
        let step = TAU / teeth as Real;
        let first = outline.tooth(0).unwrap();
        for i in 1..teeth {
            let rot = nalgebra::Rotation2::new(i as Real * step);
            for (p0, pi) in first.iter().zip(outline.tooth(i).unwrap()) {
                let expected = rot.transform_point(p0);
                assert!(
                    points_approx_eq(&expected, pi, 1e-9),
                    "tooth {i} of {teeth}: {expected:?} vs {pi:?}"
                );
            }
        }
    }
}

#[test]
fn tooth_centers_are_evenly_spaced() {
    let g = geometry(17, 4.0, 20.0);
    let assembler = ToothAssembler::new(&g, 8, 4);
    let centers = assembler.tooth_centers();
    assert_eq!(centers.len(), 17);
    assert_eq!(centers[0], 0.0);
    for pair in centers.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], TAU / 17.0, epsilon = 1e-12);
    }
}

#[test]
fn flanks_mirror_about_the_tooth_center() {
    let g = geometry(24, 6.0, 20.0);
    let assembler = ToothAssembler::new(&g, 12, 5);
    for center in [0.0, 0.7, -2.1] {
        let left = assembler.left_flank(center);
        let right = assembler.right_flank(center);
        assert_eq!(left.len(), right.len());
        for (l, r) in left.iter().zip(&right) {
            // same radius, angles symmetric about `center`
            assert!(approx_eq(l.coords.norm(), r.coords.norm(), 1e-9));
            let dl = (angle_of(l) - center + PI).rem_euclid(TAU) - PI;
            let dr = (angle_of(r) - center + PI).rem_euclid(TAU) - PI;
            assert!(approx_eq(dl, -dr, 1e-9), "center {center}: {dl} vs {dr}");
        }
    }
}

#[test]
fn flank_spans_start_radius_to_tip() {
    for teeth in [12, 60] {
        let g = geometry(teeth, 3.0, 20.0);
        let flank = ToothAssembler::new(&g, 10, 4).left_flank(0.0);
        assert_eq!(flank.len(), 10);
        assert_relative_eq!(
            flank[0].coords.norm(),
            g.involute_start_radius(),
            epsilon = 1e-9
        );
        assert_relative_eq!(flank[9].coords.norm(), g.outer_radius, epsilon = 1e-9);
        for pair in flank.windows(2) {
            assert!(pair[1].coords.norm() > pair[0].coords.norm());
        }
    }
}

#[test]
fn flank_crosses_pitch_circle_at_half_tooth() {
    // left flank of tooth 0 meets the pitch circle at -half_thick_angle
    let g = geometry(40, 3.0, 20.0);
    let angle = -g.half_thick_angle - g.pitch_to_base_angle
        + gearrs::math::involute_roll_angle(g.base_radius, g.pitch_radius);
    assert_relative_eq!(angle, -g.half_thick_angle, epsilon = 1e-12);
}

#[test]
fn no_repeated_junction_points() {
    for (teeth, inv, circ) in [(60, 6, 3), (12, 12, 5)] {
        let g = geometry(teeth, 3.0, 20.0);
        let outline = GearOutline::assemble(&g, inv, circ);
        let pts = &outline.points;
        for i in 0..pts.len() {
            let next = &pts[(i + 1) % pts.len()];
            assert!(
                (next - pts[i]).norm() > 1e-9,
                "T={teeth}: duplicate point at {i}"
            );
        }
    }
}

#[test]
fn outline_stays_between_root_and_tip() {
    let g = compute_geometry(30, 4.0, 20.0, 0.25).unwrap();
    let outline = GearOutline::assemble(&g, 8, 4);
    for p in &outline.points {
        let r = p.coords.norm();
        assert!(r >= g.root_radius - 1e-9 && r <= g.outer_radius + 1e-9);
    }
    let bb = outline.bounding_box().unwrap();
    assert!(bb.width() <= 2.0 * g.outer_radius + 1e-9);
    let pivot = outline.pivot().unwrap();
    assert!(pivot.coords.norm() < 0.1 * g.circular_pitch);
}

#[test]
fn outline_converts_to_geo() {
    use geo::Area;

    let g = geometry(24, 6.0, 20.0);
    let outline = GearOutline::assemble(&g, 12, 5);
    let polygon = outline.to_polygon();
    let area = polygon.unsigned_area();
    let root_disc = PI * g.root_radius * g.root_radius;
    let tip_disc = PI * g.outer_radius * g.outer_radius;
    assert!(area > root_disc && area < tip_disc, "area {area}");

    let contour = outline.to_contour().unwrap();
    assert!(contour.closed);
    assert_eq!(contour.segments.len(), outline.points.len() - 1);
}

#[test]
fn degenerate_root_is_a_warning() {
    // three teeth with a large clearance push the root past the center
    let g = compute_geometry(3, 3.0, 20.0, 1.0).unwrap();
    assert!(g.root_radius <= 0.0);
    match g.degenerate_root() {
        Some(GearWarning::DegenerateRoot { root_radius }) => {
            assert_eq!(root_radius, g.root_radius)
        },
        other => panic!("expected a degenerate root warning, got {other:?}"),
    }
    assert!(geometry(24, 3.0, 20.0).degenerate_root().is_none());

    // the outline is still produced
    let outline = GearOutline::assemble(&g, 6, 3);
    assert_eq!(outline.points.len(), 3 * outline.points_per_tooth);
    assert!(outline.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn single_tooth_gear() {
    let g = geometry(1, 3.0, 20.0);
    let outline = GearOutline::assemble(&g, 4, 3);
    assert_eq!(outline.teeth, 1);
    assert_eq!(outline.points.len(), outline.points_per_tooth);
    assert!(outline.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}
