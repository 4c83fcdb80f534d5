//! Data models
//!
//! Calculation value objects and the saved user record.

mod profile;
mod user_record;

pub use profile::{
    ActivityLevel, BiologicalSex, CalculationInput, CalculationResult, FormOption, Goal,
};
pub use user_record::{SavedRecord, UserRecord};
