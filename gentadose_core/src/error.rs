//! Error types for the gentadose_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for gentadose_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A patient input field is missing, non-numeric or out of range
    #[error("{0}")]
    Validation(String),

    /// Devine IBW is only defined above 60 inches
    #[error(
        "Height must be > 60 inches (152.4 cm) for IBW calculation (got {height_inches:.1} inches)."
    )]
    IbwRange { height_inches: f64 },

    /// IBW came out at or below zero
    #[error("Calculated IBW ({ibw_kg:.1} kg) is non-physiologic; please check inputs.")]
    NonPhysiologic { ibw_kg: f64 },

    /// Creatinine clearance would divide by a non-positive creatinine
    #[error("Serum creatinine must be > 0 (got {creatinine_umol_per_l} µmol/L).")]
    DivideByZero { creatinine_umol_per_l: f64 },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for errors caused by the patient inputs themselves.
    ///
    /// These are never retryable; the caller has to correct the input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_)
                | Error::IbwRange { .. }
                | Error::NonPhysiologic { .. }
                | Error::DivideByZero { .. }
        )
    }
}
