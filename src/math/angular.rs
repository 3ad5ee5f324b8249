use std::f64::consts::{PI, TAU};

/// Normalize an arbitrary angle to (-π, π].
///
/// Angles already in range are returned untouched, so the result is
/// bit-identical to repeated ±2π adjustment. Angles outside are reduced
/// in closed form, independent of their magnitude.
pub fn normalize_symmetric(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let angle = angle.rem_euclid(TAU);
    if angle > PI {
        return angle - TAU;
    }
    angle
}

// ----- Tests ---------------------------------------------------------------------
