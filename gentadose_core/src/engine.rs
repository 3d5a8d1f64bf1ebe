//! Dosing engine: the full calculation pipeline.
//!
//! Stages run in order, each producing a new value for the next:
//! 1. BMI and dosing-weight selection (normal or adjusted pathway)
//! 2. Creatinine clearance from actual weight
//! 3. Dose band, rounding and ceiling
//! 4. Display conversions and result assembly
//!
//! The engine holds no state; calls are independent and may run in parallel.

use crate::clearance::creatinine_clearance;
use crate::conversions::{inches_to_feet_inches, kg_to_lbs};
use crate::dosing::resolve_dose;
use crate::weight::select_dosing_weight;
use crate::{Conversions, DosingResult, PatientInput, RawPatientInput, Result};

/// Calculate the recommended dose for a validated patient
pub fn calculate_dose(input: &PatientInput) -> Result<DosingResult> {
    let assessment = select_dosing_weight(input.weight_kg, input.height_cm, input.sex)?;

    let crcl = creatinine_clearance(
        input.age_years,
        input.weight_kg,
        input.sex,
        input.creatinine_umol_per_l,
    )?;

    let outcome = resolve_dose(crcl, assessment.dosing_weight_kg);

    let (height_feet, height_inches_remainder) = inches_to_feet_inches(assessment.height_inches);
    let conversions = Conversions {
        weight_lbs: kg_to_lbs(input.weight_kg),
        height_feet,
        height_inches_remainder,
    };

    match outcome.dose_mg() {
        Some(mg) => tracing::info!(
            "{}: dosing weight {:.1} kg, CrCl {:.1} ml/min, dose {} mg",
            assessment.pathway,
            assessment.dosing_weight_kg,
            crcl,
            mg
        ),
        None => tracing::info!(
            "{}: dosing weight {:.1} kg, CrCl {:.1} ml/min, advisory only",
            assessment.pathway,
            assessment.dosing_weight_kg,
            crcl
        ),
    }

    Ok(DosingResult {
        bmi: assessment.bmi,
        pathway: assessment.pathway,
        dosing_weight_kg: assessment.dosing_weight_kg,
        height_inches: assessment.height_inches,
        creatinine_clearance_ml_min: crcl,
        outcome,
        conversions,
    })
}

/// Validate raw inputs, then calculate
pub fn calculate_dose_from_raw(raw: &RawPatientInput) -> Result<(PatientInput, DosingResult)> {
    let input = PatientInput::from_raw(raw)?;
    let result = calculate_dose(&input)?;
    Ok((input, result))
}
