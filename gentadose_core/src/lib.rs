#![forbid(unsafe_code)]

//! Core domain model and calculation pipeline for gentamicin dosing.
//!
//! This crate provides:
//! - Domain types (patient inputs, weight pathway, dose outcome)
//! - Input validation
//! - BMI, IBW and adjusted body weight
//! - Cockcroft-Gault creatinine clearance
//! - Dose banding, rounding and ceiling
//! - Text and JSON reports
//!
//! Every calculation is a pure function; nothing is retained between calls.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod validation;
pub mod conversions;
pub mod weight;
pub mod clearance;
pub mod dosing;
pub mod engine;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, OutputFormat};
pub use clearance::creatinine_clearance;
pub use dosing::{resolve_dose, round_to_nearest_10};
pub use weight::{calculate_bmi, calculate_ibw, select_dosing_weight};
pub use engine::{calculate_dose, calculate_dose_from_raw};
