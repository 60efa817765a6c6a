use approx::assert_relative_eq;
use gearrs::errors::GearWarning;
use gearrs::float_types::Real;
use gearrs::gear::UndercutReport;
use gearrs::gear::undercut::{
    is_undercut, max_shift_for_no_undercut, min_angle_for_no_undercut, min_teeth_for_no_undercut,
};

#[test]
fn twenty_degree_boundary() {
    let min = min_teeth_for_no_undercut(20.0, 1.0);
    assert_relative_eq!(min, 17.097, epsilon = 1e-3);
    assert_eq!(min.ceil() as usize, 18);

    assert!(is_undercut(17, 20.0, 1.0));
    assert!(!is_undercut(18, 20.0, 1.0));
}

#[test]
fn larger_angles_allow_fewer_teeth() {
    assert!(min_teeth_for_no_undercut(25.0, 1.0) < min_teeth_for_no_undercut(20.0, 1.0));
    assert!(min_teeth_for_no_undercut(14.5, 1.0) > 31.0);
    // half the cutter addendum halves the limit
    assert_relative_eq!(
        min_teeth_for_no_undercut(20.0, 0.5),
        0.5 * min_teeth_for_no_undercut(20.0, 1.0),
        epsilon = 1e-12
    );
}

#[test]
fn min_angle_is_capped() {
    // sqrt(2/12) is well below the cap
    assert_relative_eq!(min_angle_for_no_undercut(12, 1.0), 24.095, epsilon = 1e-3);
    // one or two teeth would need asin(>= 1); the cap keeps it finite
    let capped = min_angle_for_no_undercut(1, 1.0);
    assert_relative_eq!(capped, (0.9135 as Real).asin().to_degrees(), epsilon = 1e-6);
    assert_eq!(min_angle_for_no_undercut(2, 1.0), capped);
    assert!(capped.is_finite());
}

#[test]
fn suggested_angle_clears_the_boundary() {
    for teeth in [8, 12, 15] {
        let angle = min_angle_for_no_undercut(teeth, 1.0);
        assert!(!is_undercut(teeth, angle + 0.1, 1.0), "T={teeth}");
    }
}

#[test]
fn max_shift() {
    let k = max_shift_for_no_undercut(12, 20.0);
    assert_relative_eq!(k, 0.70187, epsilon = 1e-4);
    // exactly at the shift limit the boundary is met
    assert_relative_eq!(min_teeth_for_no_undercut(20.0, k), 12.0, epsilon = 1e-9);
}

#[test]
fn report_and_warning() {
    let report = UndercutReport::analyze(12, 20.0, 1.0);
    assert!(report.is_undercut);
    assert_eq!(report.min_teeth, 18);
    assert_relative_eq!(report.max_shift_percent, -29.81, epsilon = 1e-2);

    let warning = report.warning().unwrap();
    assert!(matches!(warning, GearWarning::Undercut(_)));
    let text = warning.to_string();
    assert!(text.contains("tooth count of 18 or more"), "{text}");
    assert!(text.contains("pressure angle of 24.2"), "{text}");
    assert!(text.contains("profile shift of -30 %"), "{text}");

    let fine = UndercutReport::analyze(30, 20.0, 1.0);
    assert!(!fine.is_undercut);
    assert!(fine.warning().is_none());
}
