use serde::{Deserialize, Serialize};

/// Incoming body for `POST /nutrition_plan`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRequest {
    pub fitness_level: String,
    pub goal: String,
    pub activity_level: String,
    pub age: i32,
    pub gender: String,
    /// Height in cm
    pub height: f64,
    /// Weight in kg
    pub weight: f64,
}

/// Daily activity bucket used for the TDEE multiplier and macro table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Parse an already normalized key ("veryactive", not "Very Active")
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "veryactive" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Daily calorie target and macro split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub calories_kcal: i64,

    pub protein_g: i64,
    pub protein_kcal: i64,
    pub protein_pct_of_total_kcal: f64,

    pub fat_g: i64,
    pub fat_kcal: i64,
    pub fat_pct_of_total_kcal: f64,

    pub carbohydrate_g: i64,
    pub carb_kcal: i64,
    pub carb_pct_of_total_kcal: f64,

    pub total_kcal_from_macros: i64,
}
