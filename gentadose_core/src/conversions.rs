//! Unit conversions used for display and for the Devine formula.

pub const CM_PER_INCH: f64 = 2.54;
pub const LBS_PER_KG: f64 = 2.2046226218;

pub fn cm_to_inches(height_cm: f64) -> f64 {
    height_cm / CM_PER_INCH
}

pub fn kg_to_lbs(weight_kg: f64) -> f64 {
    weight_kg * LBS_PER_KG
}

/// Split a height in inches into whole feet and the remaining inches.
///
/// The remainder is always in `[0, 12)` for non-negative input.
pub fn inches_to_feet_inches(height_inches: f64) -> (u32, f64) {
    // fmod is exact, a floored division can round up to the next foot
    let remainder = height_inches.rem_euclid(12.0);
    let feet = ((height_inches - remainder) / 12.0).round();
    (feet as u32, height_inches - feet * 12.0)
}
