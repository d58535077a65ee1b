//! Weekly meal plan generation.
//!
//! The plan is whatever JSON object the model returns, passed through with
//! key order intact once it has the expected shape: day name to an object
//! of meal name to description.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::ai::{CompletionModel, CompletionParams};
use crate::error::AppError;
use crate::errors::ErrorCode;

pub const PARSE_FAILED_MESSAGE: &str = "Failed to parse meal plan. Please try again.";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate meal plan. Please try again later.";

/// A calorie target as the form sends it, number or text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CalorieTarget {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CalorieTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Body of `POST /api/generate-mealplan`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPreferences {
    #[serde(default)]
    pub diet_type: Option<String>,
    #[serde(default)]
    pub calories: Option<CalorieTarget>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub snacks: bool,
    /// Accepted for form compatibility; plans are always seven days.
    #[serde(default)]
    pub days: Option<Value>,
}

fn or_default<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
}

pub fn build_prompt(prefs: &MealPreferences) -> String {
    let diet = prefs.diet_type.as_deref().unwrap_or_default();
    let calories = prefs
        .calories
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let allergies = or_default(&prefs.allergies, "none");
    let cuisine = or_default(&prefs.cuisine, "no preference");
    let snacks = if prefs.snacks { "yes" } else { "no" };
    let snack_line = if prefs.snacks { "\n  - Snacks" } else { "" };

    format!(
        r#"You are a professional nutritionist. Create a 7-day meal plan for an individual following a {diet} diet aiming for {calories} calories per day.

Allergies or restrictions: {allergies}.
Preferred cuisine: {cuisine}.
Snacks included: {snacks}.

For each day, provide:
  - Breakfast
  - Lunch
  - Dinner{snack_line}

Use simple ingredients and provide brief instructions. Include approximate calorie counts for each meal.

Structure the response as a JSON object where each day is a key, and each meal (breakfast, lunch, dinner, snacks) is a sub-key. Example:

{{
  "Monday": {{
    "Breakfast": "Oatmeal with fruits - 350 calories",
    "Lunch": "Grilled chicken salad - 500 calories",
    "Dinner": "Steamed vegetables with quinoa - 600 calories",
    "Snacks": "Greek yogurt - 150 calories"
  }},
  "Tuesday": {{
    "Breakfast": "Smoothie bowl - 300 calories",
    "Lunch": "Turkey sandwich - 450 calories",
    "Dinner": "Baked salmon with asparagus - 700 calories",
    "Snacks": "Almonds - 200 calories"
  }}
}}

Return just the json with no extra commentaries and no backticks."#
    )
}

/// Why a completion was not accepted as a meal plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanShapeError {
    NotJson(String),
    NotAnObject,
    NoDays,
    DayNotAnObject(String),
    MealNotText { day: String, meal: String },
}

impl fmt::Display for PlanShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotJson(e) => write!(f, "completion is not JSON: {e}"),
            Self::NotAnObject => f.write_str("plan is not a JSON object"),
            Self::NoDays => f.write_str("plan has no days"),
            Self::DayNotAnObject(day) => write!(f, "day '{day}' is not an object"),
            Self::MealNotText { day, meal } => write!(f, "meal '{day}.{meal}' is not a string"),
        }
    }
}

/// Parse a trimmed completion and check the plan shape.
pub fn parse_plan(raw: &str) -> Result<Map<String, Value>, PlanShapeError> {
    let value: Value =
        serde_json::from_str(raw.trim()).map_err(|e| PlanShapeError::NotJson(e.to_string()))?;

    let Value::Object(plan) = value else {
        return Err(PlanShapeError::NotAnObject);
    };
    if plan.is_empty() {
        return Err(PlanShapeError::NoDays);
    }

    for (day, meals) in &plan {
        let Value::Object(meals) = meals else {
            return Err(PlanShapeError::DayNotAnObject(day.clone()));
        };
        if let Some((meal, _)) = meals.iter().find(|(_, v)| !v.is_string()) {
            return Err(PlanShapeError::MealNotText {
                day: day.clone(),
                meal: meal.clone(),
            });
        }
    }

    Ok(plan)
}

pub async fn generate(
    model: &dyn CompletionModel,
    params: CompletionParams,
    prefs: &MealPreferences,
) -> Result<Map<String, Value>, AppError> {
    let prompt = build_prompt(prefs);

    let raw = model.complete(&prompt, params).await.map_err(|e| {
        error!(error = %e, "meal plan completion failed");
        AppError::upstream(ErrorCode::MealPlanGenerationFailed, GENERATION_FAILED_MESSAGE)
    })?;
    debug!(chars = raw.len(), "meal plan completion received");

    parse_plan(&raw).map_err(|e| {
        warn!(error = %e, "meal plan rejected");
        AppError::upstream(ErrorCode::MealPlanParseFailed, PARSE_FAILED_MESSAGE)
    })
}
