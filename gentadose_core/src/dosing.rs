//! Dose band lookup, rounding and ceiling.
//!
//! | CrCl (ml/min)  | rate                 |
//! |----------------|----------------------|
//! | > 30           | 5 mg/kg              |
//! | 20 to 30       | 3 mg/kg (inclusive)  |
//! | < 20           | advisory, no dose    |
//!
//! Doses are rounded to the nearest 10 mg (half-up) and capped at 480 mg.

use crate::{DoseBasis, DoseOutcome};

pub const HIGH_CRCL_THRESHOLD: f64 = 30.0;
pub const LOW_CRCL_THRESHOLD: f64 = 20.0;
pub const MAX_DOSE_MG: i64 = 480;
pub const LOW_CRCL_ADVISORY: &str = "Seek microbiology advice as CrCl < 20";

/// Per-kg rate for a clearance, or `None` below the dosing range
pub fn dose_basis_for(crcl_ml_min: f64) -> Option<DoseBasis> {
    if crcl_ml_min > HIGH_CRCL_THRESHOLD {
        Some(DoseBasis::FiveMgPerKg)
    } else if crcl_ml_min >= LOW_CRCL_THRESHOLD {
        Some(DoseBasis::ThreeMgPerKg)
    } else {
        None
    }
}

/// Nearest 10 with halves rounded up: `floor(x / 10 + 0.5) × 10`
pub fn round_to_nearest_10(value: f64) -> i64 {
    ((value / 10.0 + 0.5).floor() * 10.0) as i64
}

/// Resolve the band for a clearance and compute the final dose
pub fn resolve_dose(crcl_ml_min: f64, dosing_weight_kg: f64) -> DoseOutcome {
    let Some(basis) = dose_basis_for(crcl_ml_min) else {
        tracing::warn!(
            "CrCl {:.1} ml/min below {}, no dose calculated",
            crcl_ml_min,
            LOW_CRCL_THRESHOLD
        );
        return DoseOutcome::Advisory {
            message: LOW_CRCL_ADVISORY.to_string(),
        };
    };

    let raw_dose = basis.mg_per_kg() * dosing_weight_kg;
    let rounded = round_to_nearest_10(raw_dose);
    let mg = rounded.min(MAX_DOSE_MG);

    if mg < rounded {
        tracing::info!("Dose {} mg capped at {} mg", rounded, MAX_DOSE_MG);
    }
    tracing::debug!(
        "Raw dose {:.2} mg at {}, rounded to {} mg",
        raw_dose,
        basis,
        rounded
    );

    DoseOutcome::Dose { mg, basis }
}
