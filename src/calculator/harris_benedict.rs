//! Harris-Benedict basal metabolic rate and activity multipliers

use crate::models::{ActivityLevel, BiologicalSex, CalculationInput};

/// Basal metabolic rate in kcal/day.
///
/// No plausibility checks: zero or negative inputs flow straight through
/// the equation.
pub fn compute_bmr(input: &CalculationInput) -> f64 {
    let weight = input.weight_kg;
    let height = input.height_cm;
    let age = input.age_years as f64;

    match input.biological_sex {
        BiologicalSex::Male => 66.47 + (13.75 * weight) + (5.003 * height) - (6.755 * age),
        BiologicalSex::Female => 655.1 + (9.563 * weight) + (1.850 * height) - (4.676 * age),
    }
}

/// Multiplier applied to BMR for an activity level
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Resolve an activity option value, falling back to Sedentary for anything
/// unrecognized.
pub fn resolve_activity_level(label: &str) -> ActivityLevel {
    match ActivityLevel::from_str(label) {
        Some(level) => level,
        None => {
            tracing::warn!(
                "Unrecognized activity level '{}'. Using Sedentary multiplier.",
                label
            );
            ActivityLevel::Sedentary
        }
    }
}

/// Multiplier for a raw activity option value
pub fn activity_multiplier_for_label(label: &str) -> f64 {
    activity_multiplier(resolve_activity_level(label))
}
