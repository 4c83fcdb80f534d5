//! Calculator MCP Tools
//!
//! Runs the caloric needs form for one set of raw field values.

use std::sync::Arc;

use serde::Serialize;

use crate::form::{CaloricNeedsForm, FormField, FormOptions, MISSING_FIELDS_MESSAGE};
use crate::persistence::RecordSink;

/// Usage notes for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Caloric Needs Calculator Instructions

Estimates daily calories with the Harris-Benedict equation:

- Male BMR:   66.47 + 13.75 x weight(kg) + 5.003 x height(cm) - 6.755 x age
- Female BMR: 655.1 + 9.563 x weight(kg) + 1.850 x height(cm) - 4.676 x age
- Daily calories = BMR x activity multiplier, rounded to 2 decimals

| Activity level    | Multiplier |
|-------------------|------------|
| Sedentary         | 1.2        |
| Lightly active    | 1.375      |
| Moderately active | 1.55       |
| Active            | 1.725      |
| Very active       | 1.9        |

## Workflow

1. Call `get_form_options` for the exact option values.
2. Call `calculate_caloric_needs` with all seven fields:
   name, gender, age, height, weight, activity_level, goal.
   Age, height and weight are whole numbers; decimals are truncated.
3. If `success` is false, ask the user for the fields in `missing_fields`.
4. Each successful calculation is saved automatically. Use
   `list_saved_records` / `get_saved_record` to review past results.

## Notes

- Option values are case-sensitive. An unrecognized activity level is
  calculated as Sedentary.
- Goal is recorded but does not change the result.
"#;

/// Raw field values as entered on the form
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
}

/// Response for calculate_caloric_needs
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<FormField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caloric_needs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

/// Fill a fresh form, calculate, and dispatch the save
pub fn calculate_caloric_needs(sink: Arc<dyn RecordSink>, input: &FormInput) -> CalculateResponse {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();

    let mut form = CaloricNeedsForm::new();
    form.set_name(&field(&input.name));
    form.set_gender(&field(&input.gender));
    form.set_age(&field(&input.age));
    form.set_height(&field(&input.height));
    form.set_weight(&field(&input.weight));
    form.set_activity_level(&field(&input.activity_level));
    form.set_goal(&field(&input.goal));

    match form.calculate(sink) {
        Ok(submission) => {
            let caloric_needs = submission.record.caloric_needs;
            CalculateResponse {
                success: true,
                message: format!("Estimated daily caloric needs: {} kcal", caloric_needs),
                missing_fields: Vec::new(),
                caloric_needs: Some(caloric_needs),
                daily_calories: Some(submission.result.daily_calories),
                bmr: Some(submission.result.bmr),
                multiplier: Some(submission.result.multiplier),
            }
        }
        Err(e) => CalculateResponse {
            success: false,
            message: MISSING_FIELDS_MESSAGE.to_string(),
            missing_fields: e.missing,
            caloric_needs: None,
            daily_calories: None,
            bmr: None,
            multiplier: None,
        },
    }
}

pub fn get_form_options() -> FormOptions {
    FormOptions::current()
}
