//! Calculation profile types
//!
//! Biological sex, activity level and goal option values, plus the input and
//! result value objects passed through the calculator.

use serde::{Deserialize, Serialize};

/// A `{label, value}` pair for a dropdown option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl FormOption {
    const fn same(text: &'static str) -> Self {
        Self { label: text, value: text }
    }
}

/// Biological sex, selects the BMR formula branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub const ALL: [BiologicalSex; 2] = [BiologicalSex::Male, BiologicalSex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "Male",
            BiologicalSex::Female => "Female",
        }
    }

    /// Exact option value lookup
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(BiologicalSex::Male),
            "Female" => Some(BiologicalSex::Female),
            _ => None,
        }
    }

    /// Resolve a label the way the formula branches: only `"Male"` selects the
    /// male equation, every other label takes the female one.
    pub fn from_label(s: &str) -> Self {
        Self::from_str(s).unwrap_or(BiologicalSex::Female)
    }

    pub fn options() -> Vec<FormOption> {
        Self::ALL.iter().map(|s| FormOption::same(s.as_str())).collect()
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    #[serde(rename = "Lightly active")]
    LightlyActive,
    #[serde(rename = "Moderately active")]
    ModeratelyActive,
    Active,
    #[serde(rename = "Very active")]
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        }
    }

    /// Exact, case-sensitive option value lookup
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.as_str() == s)
    }

    pub fn options() -> Vec<FormOption> {
        Self::ALL.iter().map(|l| FormOption::same(l.as_str())).collect()
    }
}

/// Goal selected on the form. Informational only, never part of the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Weight gain")]
    WeightGain,
    #[serde(rename = "Weight loss")]
    WeightLoss,
    #[serde(rename = "Maintain weight and gain muscle")]
    MaintainAndGainMuscle,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightGain, Goal::WeightLoss, Goal::MaintainAndGainMuscle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightGain => "Weight gain",
            Goal::WeightLoss => "Weight loss",
            Goal::MaintainAndGainMuscle => "Maintain weight and gain muscle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|goal| goal.as_str() == s)
    }

    pub fn options() -> Vec<FormOption> {
        Self::ALL.iter().map(|g| FormOption::same(g.as_str())).collect()
    }
}

/// Inputs to a single calorie calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i64,
    pub biological_sex: BiologicalSex,
    pub activity_level: ActivityLevel,
}

/// Outcome of a calorie calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Estimated daily calories, rounded to two decimals
    pub daily_calories: f64,
    /// Unrounded basal metabolic rate
    pub bmr: f64,
    pub multiplier: f64,
}

impl CalculationResult {
    /// Two-decimal string form, as stored in saved records
    pub fn formatted(&self) -> String {
        crate::calculator::to_fixed_2(self.daily_calories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_labels_round_trip() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(ActivityLevel::from_str("lightly active"), None);
        assert_eq!(ActivityLevel::from_str("Marathon"), None);
    }

    #[test]
    fn test_sex_label_branching() {
        assert_eq!(BiologicalSex::from_label("Male"), BiologicalSex::Male);
        assert_eq!(BiologicalSex::from_label("Female"), BiologicalSex::Female);
        assert_eq!(BiologicalSex::from_label("male"), BiologicalSex::Female);
        assert_eq!(BiologicalSex::from_str("male"), None);
    }

    #[test]
    fn test_option_lists_match_form_values() {
        let values: Vec<_> = ActivityLevel::options().iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec!["Sedentary", "Lightly active", "Moderately active", "Active", "Very active"]
        );

        let goals: Vec<_> = Goal::options().iter().map(|o| o.label).collect();
        assert_eq!(
            goals,
            vec!["Weight gain", "Weight loss", "Maintain weight and gain muscle"]
        );

        assert_eq!(BiologicalSex::options().len(), 2);
    }

    #[test]
    fn test_serde_uses_option_values() {
        let json = serde_json::to_string(&ActivityLevel::ModeratelyActive).unwrap();
        assert_eq!(json, "\"Moderately active\"");
        let goal: Goal = serde_json::from_str("\"Weight loss\"").unwrap();
        assert_eq!(goal, Goal::WeightLoss);
    }
}
