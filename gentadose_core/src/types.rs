//! Core domain types for the gentamicin dosing engine.
//!
//! This module defines the value records passed between the calculation
//! stages:
//! - Patient inputs (raw and validated)
//! - Weight pathway selection
//! - Dose outcome and its per-kg basis
//! - Display conversions and the assembled result

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Patient Types
// ============================================================================

/// Patient sex, as used by the Devine and Cockcroft-Gault formulas
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Normalized lowercase form ("male" / "female")
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Capitalized form for reports
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five fields exactly as a form or command line collected them.
///
/// Any field may be missing or hold text that is not a number; validation
/// turns this into a [`PatientInput`] or a field-named error.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawPatientInput {
    pub weight_kg: Option<String>,
    pub height_cm: Option<String>,
    pub age_years: Option<String>,
    pub sex: Option<String>,
    pub creatinine_umol_per_l: Option<String>,
}

/// Validated patient inputs.
///
/// Fields are crate-private so the only way to obtain one is through
/// [`PatientInput::new`] or [`PatientInput::from_raw`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PatientInput {
    pub(crate) weight_kg: f64,
    pub(crate) height_cm: f64,
    pub(crate) age_years: u32,
    pub(crate) sex: Sex,
    pub(crate) creatinine_umol_per_l: f64,
}

impl PatientInput {
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn creatinine_umol_per_l(&self) -> f64 {
        self.creatinine_umol_per_l
    }
}

// ============================================================================
// Weight Pathway
// ============================================================================

/// Which body weight the dose is based on
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pathway {
    /// BMI below the obesity threshold; actual weight is used
    NormalWeight,
    /// BMI at or above the obesity threshold; adjusted weight derived from IBW
    AdjustedWeight { ibw_kg: f64 },
}

impl Pathway {
    /// Ideal body weight, only known on the adjusted pathway
    pub fn ibw_kg(&self) -> Option<f64> {
        match self {
            Pathway::NormalWeight => None,
            Pathway::AdjustedWeight { ibw_kg } => Some(*ibw_kg),
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pathway::NormalWeight => f.write_str("Normal weight pathway"),
            Pathway::AdjustedWeight { .. } => f.write_str("Adjusted weight pathway"),
        }
    }
}

/// Output of the BMI and dosing-weight stage
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightAssessment {
    pub bmi: f64,
    pub pathway: Pathway,
    pub dosing_weight_kg: f64,
    pub height_inches: f64,
}

// ============================================================================
// Dose Outcome
// ============================================================================

/// Per-kilogram rate applied to the dosing weight
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DoseBasis {
    #[serde(rename = "5 mg/kg")]
    FiveMgPerKg,
    #[serde(rename = "3 mg/kg")]
    ThreeMgPerKg,
}

impl DoseBasis {
    pub fn mg_per_kg(&self) -> f64 {
        match self {
            DoseBasis::FiveMgPerKg => 5.0,
            DoseBasis::ThreeMgPerKg => 3.0,
        }
    }
}

impl fmt::Display for DoseBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoseBasis::FiveMgPerKg => f.write_str("5 mg/kg"),
            DoseBasis::ThreeMgPerKg => f.write_str("3 mg/kg"),
        }
    }
}

/// Either a numeric dose or an advisory in place of one
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DoseOutcome {
    /// Rounded and capped dose in mg
    Dose { mg: i64, basis: DoseBasis },
    /// Renal function too poor for a standard dose
    Advisory { message: String },
}

impl DoseOutcome {
    pub fn dose_mg(&self) -> Option<i64> {
        match self {
            DoseOutcome::Dose { mg, .. } => Some(*mg),
            DoseOutcome::Advisory { .. } => None,
        }
    }

    pub fn is_advisory(&self) -> bool {
        matches!(self, DoseOutcome::Advisory { .. })
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Imperial conversions shown alongside the metric inputs
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Conversions {
    pub weight_lbs: f64,
    pub height_feet: u32,
    pub height_inches_remainder: f64,
}

/// Everything one calculation produces
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DosingResult {
    pub bmi: f64,
    pub pathway: Pathway,
    pub dosing_weight_kg: f64,
    pub height_inches: f64,
    pub creatinine_clearance_ml_min: f64,
    pub outcome: DoseOutcome,
    pub conversions: Conversions,
}

impl DosingResult {
    pub fn ibw_kg(&self) -> Option<f64> {
        self.pathway.ibw_kg()
    }

    pub fn dose_mg(&self) -> Option<i64> {
        self.outcome.dose_mg()
    }
}
