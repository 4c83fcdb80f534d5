//! Caloric needs calculation
//!
//! Daily calories = Harris-Benedict BMR x activity multiplier, rounded to two
//! decimals. Everything here is pure and never fails; missing inputs must be
//! rejected before these functions are called.

pub mod harris_benedict;
pub mod rounding;

pub use harris_benedict::{
    activity_multiplier, activity_multiplier_for_label, compute_bmr, resolve_activity_level,
};
pub use rounding::{round_to_cents, to_fixed_2};

use crate::models::{BiologicalSex, CalculationInput, CalculationResult};

/// Estimated daily caloric requirement for one set of inputs
pub fn compute_daily_calories(input: &CalculationInput) -> CalculationResult {
    let bmr = compute_bmr(input);
    let multiplier = activity_multiplier(input.activity_level);

    CalculationResult {
        daily_calories: round_to_cents(bmr * multiplier),
        bmr,
        multiplier,
    }
}

/// Same calculation over raw option values.
///
/// `"Male"` selects the male equation and any other sex label the female
/// one; unrecognized activity labels use the Sedentary multiplier.
pub fn compute_daily_calories_from_labels(
    weight_kg: f64,
    height_cm: f64,
    age_years: i64,
    biological_sex: &str,
    activity_level: &str,
) -> CalculationResult {
    compute_daily_calories(&CalculationInput {
        weight_kg,
        height_cm,
        age_years,
        biological_sex: BiologicalSex::from_label(biological_sex),
        activity_level: resolve_activity_level(activity_level),
    })
}
