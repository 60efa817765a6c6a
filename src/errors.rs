//! Parameter errors and geometry warnings

use crate::float_types::Real;
use crate::gear::undercut::UndercutReport;
use serde::Serialize;

/// Extra pressure angle (degrees) added to the suggested minimum angle so the
/// suggestion lands strictly on the safe side of the undercut boundary.
const MIN_ANGLE_MARGIN_DEG: Real = 0.1;

/// Problems that prevent any geometry from being produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GearError {
    /// (InvalidTeeth) A gear needs at least one tooth
    #[error("(InvalidTeeth) tooth count must be at least 1, got {0}")]
    InvalidTeeth(usize),
    /// (InvalidPitch) Circular pitch must be strictly positive
    #[error("(InvalidPitch) circular pitch must be > 0, got {0}")]
    InvalidPitch(Real),
    /// (InvalidPressureAngle) Pressure angle must lie in the open interval (0°, 90°)
    #[error("(InvalidPressureAngle) pressure angle must be between 0 and 90 degrees (exclusive), got {0}")]
    InvalidPressureAngle(Real),
    /// (InvalidClearance) Clearance cannot be negative
    #[error("(InvalidClearance) clearance must be >= 0, got {0}")]
    InvalidClearance(Real),
    /// (InvalidAccuracy) Too few samples to describe a curve
    #[error("(InvalidAccuracy) {what} needs at least {min} samples, got {got}")]
    InvalidAccuracy {
        what: &'static str,
        min: usize,
        got: usize,
    },
    /// (NonFiniteParameter) NaN or infinity was passed in
    #[error("(NonFiniteParameter) {0} is NaN or infinite")]
    NonFiniteParameter(&'static str),
    /// (InvalidRack) Rack dimensions that cannot describe a bar
    #[error("(InvalidRack) {0}")]
    InvalidRack(String),
    /// (InvalidSkeleton) Spoke or mount dimensions that cannot describe a hub
    #[error("(InvalidSkeleton) {0}")]
    InvalidSkeleton(String),
    /// (UnknownPitchSystem) The pitch system selector is not one of CP, DP, MM
    #[error("(UnknownPitchSystem) unknown system '{0}', try CP, DP, MM")]
    UnknownPitchSystem(String),
}

/// Conditions worth telling the operator about that still leave a drawable gear.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
pub enum GearWarning {
    /// The cutter would undercut the tooth root.
    #[error("{}", undercut_advice(.0))]
    Undercut(UndercutReport),
    /// The dedendum reaches or passes the gear center.
    #[error(
        "root radius {root_radius:.4} is not positive; the outline may self-intersect, \
         use more teeth or less clearance"
    )]
    DegenerateRoot { root_radius: Real },
    /// A spoke is wider than the chord available at `radius`.
    #[error("spoke width {spoke_width:.4} is infeasible at radius {radius:.4}")]
    SpokeWidthInfeasible { radius: Real, spoke_width: Real },
    /// The spoke rim circle lies inside the mount support circle.
    #[error("spoke rim radius {rim_radius:.4} does not clear the mount support radius {mount_radius:.4}")]
    SpokeRimInsideMount { rim_radius: Real, mount_radius: Real },
}

fn undercut_advice(report: &UndercutReport) -> String {
    format!(
        "Undercut Warning: This gear will not work well. Try tooth count of {} or more, \
         or a pressure angle of {:.1} ° or more, or try a profile shift of {:.0} %. \
         Or other decent combinations.",
        report.min_teeth,
        report.min_angle + MIN_ANGLE_MARGIN_DEG,
        // whole percent of k first, then relative to k = 1
        (report.max_shift_percent + 100.0).trunc() - 100.0
    )
}
