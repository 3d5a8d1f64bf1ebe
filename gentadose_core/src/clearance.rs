//! Cockcroft-Gault creatinine clearance with creatinine in µmol/L.
//!
//! Uses actual body weight, not the dosing weight.

use crate::{Error, Result, Sex};

const MALE_FACTOR: f64 = 1.23;
const FEMALE_FACTOR: f64 = 1.04;

/// CrCl (ml/min) = (140 − age) × weight × factor / creatinine
pub fn creatinine_clearance(
    age_years: u32,
    actual_weight_kg: f64,
    sex: Sex,
    creatinine_umol_per_l: f64,
) -> Result<f64> {
    if creatinine_umol_per_l <= 0.0 || creatinine_umol_per_l.is_nan() {
        return Err(Error::DivideByZero {
            creatinine_umol_per_l,
        });
    }

    let factor = match sex {
        Sex::Male => MALE_FACTOR,
        Sex::Female => FEMALE_FACTOR,
    };

    let crcl = ((140.0 - f64::from(age_years)) * actual_weight_kg * factor) / creatinine_umol_per_l;
    tracing::debug!("Creatinine clearance {:.2} ml/min", crcl);
    Ok(crcl)
}
