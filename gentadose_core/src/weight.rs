//! BMI and dosing-weight selection.
//!
//! Obese patients (BMI at or above 30) are dosed on adjusted body weight:
//! - IBW from the Devine formula (50 kg male / 45.5 kg female + 2.3 kg per
//!   inch over 60 in)
//! - Adjusted weight = IBW + 0.4 × (actual − IBW)

use crate::conversions::cm_to_inches;
use crate::{Error, Pathway, Result, Sex, WeightAssessment};

pub const OBESITY_BMI_THRESHOLD: f64 = 30.0;
pub const IBW_MIN_HEIGHT_INCHES: f64 = 60.0;
pub const ADJUSTED_WEIGHT_FACTOR: f64 = 0.4;

const IBW_BASE_MALE_KG: f64 = 50.0;
const IBW_BASE_FEMALE_KG: f64 = 45.5;
const IBW_KG_PER_INCH: f64 = 2.3;

/// BMI = weight_kg / height_m²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    let height_m = height_cm / 100.0;
    if height_m <= 0.0 {
        return Err(Error::Validation("Height must be > 0 cm.".into()));
    }
    Ok(weight_kg / height_m.powi(2))
}

/// Devine ideal body weight. Returns `(ibw_kg, height_inches)`.
///
/// Only defined above 60 inches.
pub fn calculate_ibw(height_cm: f64, sex: Sex) -> Result<(f64, f64)> {
    let height_inches = cm_to_inches(height_cm);
    if height_inches <= IBW_MIN_HEIGHT_INCHES {
        return Err(Error::IbwRange { height_inches });
    }

    let inches_over_60 = height_inches - IBW_MIN_HEIGHT_INCHES;
    let base = match sex {
        Sex::Male => IBW_BASE_MALE_KG,
        Sex::Female => IBW_BASE_FEMALE_KG,
    };
    let ibw_kg = base + IBW_KG_PER_INCH * inches_over_60;

    if ibw_kg <= 0.0 {
        return Err(Error::NonPhysiologic { ibw_kg });
    }

    Ok((ibw_kg, height_inches))
}

/// IBW + 0.4 × (actual − IBW)
pub fn adjusted_body_weight(actual_weight_kg: f64, ibw_kg: f64) -> f64 {
    ibw_kg + ADJUSTED_WEIGHT_FACTOR * (actual_weight_kg - ibw_kg)
}

/// Pick the pathway and the weight the dose is calculated from
pub fn select_dosing_weight(weight_kg: f64, height_cm: f64, sex: Sex) -> Result<WeightAssessment> {
    let bmi = calculate_bmi(weight_kg, height_cm)?;

    if bmi < OBESITY_BMI_THRESHOLD {
        tracing::debug!("BMI {:.1} below {}, using actual weight", bmi, OBESITY_BMI_THRESHOLD);
        return Ok(WeightAssessment {
            bmi,
            pathway: Pathway::NormalWeight,
            dosing_weight_kg: weight_kg,
            height_inches: cm_to_inches(height_cm),
        });
    }

    let (ibw_kg, height_inches) = calculate_ibw(height_cm, sex)?;
    let dosing_weight_kg = adjusted_body_weight(weight_kg, ibw_kg);

    tracing::debug!(
        "BMI {:.1} at or above {}, IBW {:.1} kg, adjusted weight {:.1} kg",
        bmi,
        OBESITY_BMI_THRESHOLD,
        ibw_kg,
        dosing_weight_kg
    );

    Ok(WeightAssessment {
        bmi,
        pathway: Pathway::AdjustedWeight { ibw_kg },
        dosing_weight_kg,
        height_inches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(85.0, 175.0).unwrap();
        assert!((bmi - 27.755_102).abs() < 1e-5);
    }

    #[test]
    fn test_bmi_rejects_zero_height() {
        assert!(matches!(
            calculate_bmi(85.0, 0.0),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_ibw_male_and_female() {
        let (male, inches) = calculate_ibw(175.0, Sex::Male).unwrap();
        assert!((inches - 68.897_638).abs() < 1e-5);
        assert!((male - 70.464_567).abs() < 1e-5);

        let (female, _) = calculate_ibw(175.0, Sex::Female).unwrap();
        assert!((male - female - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_ibw_requires_more_than_60_inches() {
        let err = calculate_ibw(150.0, Sex::Female).unwrap_err();
        match err {
            Error::IbwRange { height_inches } => assert!(height_inches < 60.0),
            other => panic!("expected IbwRange, got {:?}", other),
        }

        // Exactly 60 inches is still outside the formula's range
        assert!(matches!(
            calculate_ibw(152.4, Sex::Male),
            Err(Error::IbwRange { .. })
        ));
    }

    #[test]
    fn test_normal_weight_pathway() {
        let assessment = select_dosing_weight(85.0, 175.0, Sex::Male).unwrap();
        assert_eq!(assessment.pathway, Pathway::NormalWeight);
        assert_eq!(assessment.dosing_weight_kg, 85.0);
        assert!((assessment.height_inches - 68.897_638).abs() < 1e-5);
    }

    #[test]
    fn test_adjusted_weight_pathway() {
        let assessment = select_dosing_weight(120.0, 175.0, Sex::Male).unwrap();
        assert!(matches!(assessment.pathway, Pathway::AdjustedWeight { .. }));
        assert!((assessment.dosing_weight_kg - 90.28).abs() < 0.01);
    }

    #[test]
    fn test_bmi_exactly_30_is_adjusted() {
        let weight = 30.0 * 1.7_f64.powi(2);
        let assessment = select_dosing_weight(weight, 170.0, Sex::Male).unwrap();
        assert!(assessment.bmi >= OBESITY_BMI_THRESHOLD);
        assert!(matches!(assessment.pathway, Pathway::AdjustedWeight { .. }));
    }

    #[test]
    fn test_short_obese_patient_fails() {
        let err = select_dosing_weight(90.0, 150.0, Sex::Female).unwrap_err();
        assert!(matches!(err, Error::IbwRange { .. }));
    }

    #[test]
    fn test_short_normal_weight_patient_is_fine() {
        // IBW is never needed below the threshold, so height is unrestricted
        let assessment = select_dosing_weight(50.0, 150.0, Sex::Female).unwrap();
        assert_eq!(assessment.pathway, Pathway::NormalWeight);
    }

    #[test]
    fn test_pathway_matches_bmi_threshold() {
        for weight in (40..=250).step_by(5) {
            for height in (155..=210).step_by(5) {
                let weight = weight as f64;
                let height = height as f64;
                let bmi = calculate_bmi(weight, height).unwrap();
                let assessment = select_dosing_weight(weight, height, Sex::Male).unwrap();
                assert_eq!(
                    bmi >= OBESITY_BMI_THRESHOLD,
                    matches!(assessment.pathway, Pathway::AdjustedWeight { .. }),
                    "weight {} height {}",
                    weight,
                    height
                );
            }
        }
    }

    #[test]
    fn test_adjusted_weight_never_exceeds_actual() {
        for weight in (100..=400).step_by(10) {
            let weight = weight as f64;
            let assessment = select_dosing_weight(weight, 165.0, Sex::Female).unwrap();
            let ibw = assessment.pathway.ibw_kg().unwrap();
            assert!(weight > ibw);
            assert!(assessment.dosing_weight_kg <= weight);
            assert!(assessment.dosing_weight_kg >= ibw);
        }
    }
}
