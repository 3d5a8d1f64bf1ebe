//! Human-readable and JSON renderings of a calculation.

use crate::{DoseOutcome, DosingResult, PatientInput, Result};
use serde::Serialize;

const TITLE: &str = "GENTAMICIN DOSAGE CALCULATOR";
const DISCLAIMER: [&str; 2] = [
    "MEDICAL DISCLAIMER: This calculator is for educational/reference purposes only.",
    "Always consult qualified healthcare professionals for actual medical decisions.",
];

/// Inputs and result together, as written by `--format json`
#[derive(Debug, Serialize)]
pub struct CalculationReport<'a> {
    pub input: &'a PatientInput,
    pub result: &'a DosingResult,
}

/// Pretty-printed JSON of the inputs and result
pub fn render_json(input: &PatientInput, result: &DosingResult) -> Result<String> {
    let report = CalculationReport { input, result };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Plain-text report with fixed labels, without a trailing newline
pub fn render_report(input: &PatientInput, result: &DosingResult, include_disclaimer: bool) -> String {
    let c = &result.conversions;
    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        "Patient Details:".to_string(),
        format!("- Weight: {:.1} kg ({:.1} lbs)", input.weight_kg(), c.weight_lbs),
        format!(
            "- Height: {:.1} cm ({}'{:.0}\")",
            input.height_cm(),
            c.height_feet,
            c.height_inches_remainder
        ),
        format!("- Age: {} years", input.age_years()),
        format!("- Sex: {}", input.sex().label()),
        format!(
            "- Serum Creatinine: {:.1} µmol/L",
            input.creatinine_umol_per_l()
        ),
        String::new(),
        "Calculations:".to_string(),
        format!("- BMI: {:.1} kg/m² ({})", result.bmi, result.pathway),
    ];

    if let Some(ibw_kg) = result.ibw_kg() {
        lines.push(format!("- Height (for IBW): {:.1} inches", result.height_inches));
        lines.push(format!("- IBW: {:.1} kg", ibw_kg));
    }

    lines.push(format!("- Dosing Weight: {:.1} kg", result.dosing_weight_kg));
    lines.push(format!(
        "- Creatinine Clearance: {:.1} ml/min",
        result.creatinine_clearance_ml_min
    ));

    lines.push(match &result.outcome {
        DoseOutcome::Dose { mg, basis } => {
            format!("- Recommended Dose: {} mg (nearest 10 mg; {})", mg, basis)
        }
        DoseOutcome::Advisory { message } => format!("- Recommendation: {}", message),
    });

    if include_disclaimer {
        lines.push(String::new());
        lines.extend(DISCLAIMER.iter().map(|l| l.to_string()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate_dose;

    fn report_for(weight: f64, height: f64, age: i64, sex: &str, creat: f64) -> String {
        let input = PatientInput::new(weight, height, age, sex, creat).unwrap();
        let result = calculate_dose(&input).unwrap();
        render_report(&input, &result, true)
    }

    #[test]
    fn test_normal_weight_report() {
        let report = report_for(85.0, 175.0, 45, "male", 120.0);

        assert!(report.starts_with("GENTAMICIN DOSAGE CALCULATOR\n============================\n"));
        assert!(report.contains("- Weight: 85.0 kg (187.4 lbs)"));
        assert!(report.contains("- Height: 175.0 cm (5'9\")"));
        assert!(report.contains("- Age: 45 years"));
        assert!(report.contains("- Sex: Male"));
        assert!(report.contains("- Serum Creatinine: 120.0 µmol/L"));
        assert!(report.contains("- BMI: 27.8 kg/m² (Normal weight pathway)"));
        assert!(!report.contains("IBW"));
        assert!(report.contains("- Dosing Weight: 85.0 kg"));
        assert!(report.contains("- Creatinine Clearance: 82.8 ml/min"));
        assert!(report.contains("- Recommended Dose: 430 mg (nearest 10 mg; 5 mg/kg)"));
        assert!(report.contains("MEDICAL DISCLAIMER"));
    }

    #[test]
    fn test_adjusted_weight_report_shows_ibw() {
        let report = report_for(120.0, 175.0, 45, "male", 120.0);

        assert!(report.contains("(Adjusted weight pathway)"));
        assert!(report.contains("- Height (for IBW): 68.9 inches"));
        assert!(report.contains("- IBW: 70.5 kg"));
        assert!(report.contains("- Dosing Weight: 90.3 kg"));
        assert!(report.contains("- Recommended Dose: 450 mg"));
    }

    #[test]
    fn test_advisory_report() {
        let report = report_for(50.0, 160.0, 80, "female", 180.0);

        assert!(report.contains("- Sex: Female"));
        assert!(report.contains("- Recommendation: Seek microbiology advice as CrCl < 20"));
        assert!(!report.contains("Recommended Dose"));
    }

    #[test]
    fn test_disclaimer_optional() {
        let input = PatientInput::new(85.0, 175.0, 45, "male", 120.0).unwrap();
        let result = calculate_dose(&input).unwrap();
        let report = render_report(&input, &result, false);

        assert!(!report.contains("DISCLAIMER"));
        assert!(report.ends_with("(nearest 10 mg; 5 mg/kg)"));
    }

    #[test]
    fn test_json_rendering() {
        let input = PatientInput::new(50.0, 160.0, 80, "female", 180.0).unwrap();
        let result = calculate_dose(&input).unwrap();
        let json = render_json(&input, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["input"]["sex"], "female");
        assert_eq!(value["input"]["age_years"], 80);
        assert_eq!(value["result"]["pathway"]["kind"], "normal_weight");
        assert_eq!(value["result"]["outcome"]["type"], "advisory");
        assert!(value["result"]["outcome"].get("mg").is_none());
    }
}
