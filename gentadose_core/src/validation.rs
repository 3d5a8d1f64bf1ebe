//! Patient input validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. weight, height, age, creatinine: present, numeric, positive
//! 2. range checks for the same four fields
//! 3. sex normalization

use crate::{Error, PatientInput, RawPatientInput, Result, Sex};
use std::str::FromStr;

const WEIGHT_LABEL: &str = "Weight (kg)";
const HEIGHT_LABEL: &str = "Height (cm)";
const AGE_LABEL: &str = "Age (years)";
const CREATININE_LABEL: &str = "Serum Creatinine (µmol/L)";

const AGE_RANGE: (f64, f64) = (1.0, 120.0);
const WEIGHT_RANGE_KG: (f64, f64) = (1.0, 1000.0);
const HEIGHT_RANGE_CM: (f64, f64) = (30.0, 300.0);
const CREATININE_RANGE_UMOL_L: (f64, f64) = (1.0, 1000.0);

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(invalid_sex()),
        }
    }
}

impl PatientInput {
    /// Validate already-numeric inputs
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: i64,
        sex: &str,
        creatinine_umol_per_l: f64,
    ) -> Result<Self> {
        check_positive(WEIGHT_LABEL, weight_kg)?;
        check_positive(HEIGHT_LABEL, height_cm)?;
        check_positive(AGE_LABEL, age_years as f64)?;
        check_positive(CREATININE_LABEL, creatinine_umol_per_l)?;

        finish(weight_kg, height_cm, age_years, Some(sex), creatinine_umol_per_l)
    }

    /// Validate inputs as collected from a form or command line
    pub fn from_raw(raw: &RawPatientInput) -> Result<Self> {
        let weight_kg = parse_number(WEIGHT_LABEL, raw.weight_kg.as_deref())?;
        check_positive(WEIGHT_LABEL, weight_kg)?;

        let height_cm = parse_number(HEIGHT_LABEL, raw.height_cm.as_deref())?;
        check_positive(HEIGHT_LABEL, height_cm)?;

        // Ages typed as "45.0" are accepted and truncated
        let age_years = parse_number(AGE_LABEL, raw.age_years.as_deref())?.trunc();
        check_positive(AGE_LABEL, age_years)?;

        let creatinine = parse_number(CREATININE_LABEL, raw.creatinine_umol_per_l.as_deref())?;
        check_positive(CREATININE_LABEL, creatinine)?;

        // Saturating cast; anything huge is rejected by the range check
        finish(
            weight_kg,
            height_cm,
            age_years as i64,
            raw.sex.as_deref(),
            creatinine,
        )
    }
}

/// Range checks and sex normalization, shared by both entry points
fn finish(
    weight_kg: f64,
    height_cm: f64,
    age_years: i64,
    sex: Option<&str>,
    creatinine_umol_per_l: f64,
) -> Result<PatientInput> {
    if !in_range(age_years as f64, AGE_RANGE) {
        return Err(reject("Age must be between 1 and 120 years."));
    }
    if !in_range(weight_kg, WEIGHT_RANGE_KG) {
        return Err(reject("Weight must be between 1 and 1000 kg."));
    }
    if !in_range(height_cm, HEIGHT_RANGE_CM) {
        return Err(reject("Height must be between 30 and 300 cm."));
    }
    if !in_range(creatinine_umol_per_l, CREATININE_RANGE_UMOL_L) {
        return Err(reject("Serum creatinine must be between 1 and 1000 µmol/L."));
    }

    let sex = match sex {
        Some(s) => s.parse::<Sex>()?,
        None => return Err(invalid_sex()),
    };

    // Range check above guarantees 1..=120
    let age_years = age_years as u32;

    tracing::debug!(
        weight_kg,
        height_cm,
        age_years,
        sex = sex.as_str(),
        creatinine_umol_per_l,
        "Patient input validated"
    );

    Ok(PatientInput {
        weight_kg,
        height_cm,
        age_years,
        sex,
        creatinine_umol_per_l,
    })
}

fn parse_number(label: &str, value: Option<&str>) -> Result<f64> {
    let text = match value.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(reject(format!("{} is required.", label))),
    };

    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(reject(format!("{} must be a number.", label))),
    }
}

fn check_positive(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(reject(format!("{} must be a number.", label)));
    }
    if value <= 0.0 {
        return Err(reject(format!("{} must be positive.", label)));
    }
    Ok(())
}

fn in_range(value: f64, (low, high): (f64, f64)) -> bool {
    (low..=high).contains(&value)
}

fn invalid_sex() -> Error {
    reject("Sex must be 'male' or 'female'.")
}

fn reject(message: impl Into<String>) -> Error {
    let message = message.into();
    tracing::debug!("Rejected patient input: {}", message);
    Error::Validation(message)
}
