//! Caloric needs form
//!
//! Holds the seven raw field values, validates them, runs the calculation
//! and hands the resulting record to a sink without waiting for the save.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::calculator::{compute_daily_calories, resolve_activity_level};
use crate::models::{
    ActivityLevel, BiologicalSex, CalculationInput, CalculationResult, FormOption, Goal,
    UserRecord,
};
use crate::persistence::{dispatch_save, RecordSink};

/// Message shown when any field is missing
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Gender,
    Age,
    Height,
    Weight,
    ActivityLevel,
    Goal,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Gender => "gender",
            FormField::Age => "age",
            FormField::Height => "height",
            FormField::Weight => "weight",
            FormField::ActivityLevel => "activity_level",
            FormField::Goal => "goal",
        }
    }
}

/// One or more required fields were missing; nothing was calculated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all fields.")]
pub struct ValidationError {
    pub missing: Vec<FormField>,
}

/// Dropdown option lists for the form
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub gender_options: Vec<FormOption>,
    pub activity_levels: Vec<FormOption>,
    pub goal_options: Vec<FormOption>,
}

impl FormOptions {
    pub fn current() -> Self {
        Self {
            gender_options: BiologicalSex::options(),
            activity_levels: ActivityLevel::options(),
            goal_options: Goal::options(),
        }
    }
}

/// Result of a successful calculate action
#[derive(Debug)]
pub struct Submission {
    pub result: CalculationResult,
    pub record: UserRecord,
    /// In-flight save. Never needs awaiting; failures are already logged.
    pub save: JoinHandle<()>,
}

/// Form state. Numeric fields keep whatever `parse_int` made of the input.
#[derive(Debug, Clone, Default)]
pub struct CaloricNeedsForm {
    name: String,
    gender: String,
    age: Option<i64>,
    height: Option<i64>,
    weight: Option<i64>,
    activity_level: String,
    goal: String,
    caloric_needs: Option<String>,
}

impl CaloricNeedsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_string();
    }

    pub fn set_gender(&mut self, value: &str) {
        self.gender = value.to_string();
    }

    pub fn set_age(&mut self, value: &str) {
        self.age = parse_int(value);
    }

    pub fn set_height(&mut self, value: &str) {
        self.height = parse_int(value);
    }

    pub fn set_weight(&mut self, value: &str) {
        self.weight = parse_int(value);
    }

    pub fn set_activity_level(&mut self, value: &str) {
        self.activity_level = value.to_string();
    }

    pub fn set_goal(&mut self, value: &str) {
        self.goal = value.to_string();
    }

    /// Last calculated value, two-decimal string
    pub fn caloric_needs(&self) -> Option<&str> {
        self.caloric_needs.as_deref()
    }

    /// Check every field is present. Zero is a present numeric value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.checked_numbers().map(|_| ())
    }

    /// Validated `(age, height, weight)`
    fn checked_numbers(&self) -> Result<(i64, i64, i64), ValidationError> {
        let text_present = |s: &str| !s.trim().is_empty();

        let checks = [
            (FormField::Name, text_present(&self.name)),
            (FormField::Gender, text_present(&self.gender)),
            (FormField::Age, self.age.is_some()),
            (FormField::Height, self.height.is_some()),
            (FormField::Weight, self.weight.is_some()),
            (FormField::ActivityLevel, text_present(&self.activity_level)),
            (FormField::Goal, text_present(&self.goal)),
        ];

        let missing: Vec<FormField> = checks
            .iter()
            .filter(|(_, present)| !present)
            .map(|(field, _)| *field)
            .collect();

        match (self.age, self.height, self.weight) {
            (Some(age), Some(height), Some(weight)) if missing.is_empty() => {
                Ok((age, height, weight))
            }
            _ => Err(ValidationError { missing }),
        }
    }

    /// Validate, calculate, and dispatch the save to `sink`.
    ///
    /// Must be called inside a tokio runtime. On validation failure nothing
    /// is calculated, the previous result is left alone and no save happens.
    pub fn calculate(&mut self, sink: Arc<dyn RecordSink>) -> Result<Submission, ValidationError> {
        let (age, height, weight) = match self.checked_numbers() {
            Ok(numbers) => numbers,
            Err(e) => {
                let fields: Vec<&str> = e.missing.iter().map(FormField::as_str).collect();
                tracing::debug!("Calculation skipped, missing fields: {}", fields.join(", "));
                return Err(e);
            }
        };

        let input = CalculationInput {
            weight_kg: weight as f64,
            height_cm: height as f64,
            age_years: age,
            biological_sex: BiologicalSex::from_label(&self.gender),
            activity_level: resolve_activity_level(&self.activity_level),
        };
        let result = compute_daily_calories(&input);
        let caloric_needs = result.formatted();
        self.caloric_needs = Some(caloric_needs.clone());

        let record = UserRecord {
            name: self.name.clone(),
            gender: self.gender.clone(),
            age,
            height,
            weight,
            activity_level: self.activity_level.clone(),
            goal: self.goal.clone(),
            caloric_needs,
        };
        let save = dispatch_save(sink, record.clone());

        Ok(Submission {
            result,
            record,
            save,
        })
    }
}

/// Integer parsing with `parseInt(value, 10)` rules: leading whitespace and
/// an optional sign, then as many decimal digits as are present. Anything
/// after the digits is ignored. No digits means no value.
pub fn parse_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistenceError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemorySink {
        saved: Mutex<Vec<UserRecord>>,
    }

    #[async_trait]
    impl RecordSink for MemorySink {
        fn name(&self) -> &'static str {
            "memory"
        }

        async fn save(&self, record: &UserRecord) -> Result<Option<i64>, PersistenceError> {
            let mut saved = self.saved.lock().unwrap();
            saved.push(record.clone());
            Ok(Some(saved.len() as i64))
        }
    }

    struct BrokenSink;

    #[async_trait]
    impl RecordSink for BrokenSink {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn save(&self, _record: &UserRecord) -> Result<Option<i64>, PersistenceError> {
            Err(PersistenceError::Task("endpoint unavailable".to_string()))
        }
    }

    fn filled_form() -> CaloricNeedsForm {
        let mut form = CaloricNeedsForm::new();
        form.set_name("Alan");
        form.set_gender("Male");
        form.set_age("30");
        form.set_height("175");
        form.set_weight("70");
        form.set_activity_level("Sedentary");
        form.set_goal("Weight loss");
        form
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("72"), Some(72));
        assert_eq!(parse_int("  72kg"), Some(72));
        assert_eq!(parse_int("72.9"), Some(72));
        assert_eq!(parse_int("-5"), Some(-5));
        assert_eq!(parse_int("+8"), Some(8));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(".5"), None);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let err = CaloricNeedsForm::new().validate().unwrap_err();
        assert_eq!(err.missing.len(), 7);
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let clear: [(FormField, fn(&mut CaloricNeedsForm)); 7] = [
            (FormField::Name, |f| f.set_name("  ")),
            (FormField::Gender, |f| f.set_gender("")),
            (FormField::Age, |f| f.set_age("")),
            (FormField::Height, |f| f.set_height("tall")),
            (FormField::Weight, |f| f.set_weight("")),
            (FormField::ActivityLevel, |f| f.set_activity_level("")),
            (FormField::Goal, |f| f.set_goal("")),
        ];

        for (field, clear_field) in clear {
            let mut form = filled_form();
            clear_field(&mut form);
            let err = form.validate().unwrap_err();
            assert_eq!(err.missing, vec![field]);
        }
    }

    #[test]
    fn test_zero_counts_as_present() {
        let mut form = filled_form();
        form.set_age("0");
        assert!(form.validate().is_ok());
    }

    #[tokio::test]
    async fn test_calculate_saves_record() {
        let sink = Arc::new(MemorySink::default());
        let mut form = filled_form();

        let submission = form.calculate(sink.clone()).unwrap();
        assert_eq!(submission.result.daily_calories, 2042.21);
        assert_eq!(form.caloric_needs(), Some("2042.21"));

        submission.save.await.unwrap();
        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Alan");
        assert_eq!(saved[0].goal, "Weight loss");
        assert_eq!(saved[0].caloric_needs, "2042.21");
    }

    #[tokio::test]
    async fn test_missing_field_skips_calculation_and_save() {
        let sink = Arc::new(MemorySink::default());
        let mut form = filled_form();
        form.set_weight("");

        let err = form.calculate(sink.clone()).unwrap_err();
        assert_eq!(err.missing, vec![FormField::Weight]);
        assert_eq!(form.caloric_needs(), None);

        tokio::task::yield_now().await;
        assert!(sink.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_result() {
        let mut form = filled_form();
        let submission = form.calculate(Arc::new(BrokenSink)).unwrap();
        submission.save.await.unwrap();

        assert_eq!(submission.result.formatted(), "2042.21");
        assert_eq!(form.caloric_needs(), Some("2042.21"));
    }

    #[tokio::test]
    async fn test_goal_does_not_change_result() {
        let mut results = Vec::new();
        for goal in Goal::ALL {
            let mut form = filled_form();
            form.set_goal(goal.as_str());
            let submission = form.calculate(Arc::new(MemorySink::default())).unwrap();
            results.push(submission.result.daily_calories);
        }
        assert!(results.iter().all(|r| *r == results[0]));
    }

    #[tokio::test]
    async fn test_unknown_activity_level_uses_sedentary() {
        let mut form = filled_form();
        form.set_activity_level("Marathon");
        let submission = form.calculate(Arc::new(MemorySink::default())).unwrap();

        assert_eq!(submission.result.multiplier, 1.2);
        assert_eq!(submission.record.activity_level, "Marathon");
    }

    #[test]
    fn test_form_options() {
        let options = FormOptions::current();
        assert_eq!(options.gender_options[0].value, "Male");
        assert_eq!(options.activity_levels.len(), 5);
        assert_eq!(options.goal_options[2].value, "Maintain weight and gain muscle");
    }
}
