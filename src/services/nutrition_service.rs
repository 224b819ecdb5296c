use tracing::debug;

use crate::errors::{PlannerError, Result};
use crate::models::{ActivityLevel, FitnessLevel, Goal, MacroBreakdown, NutritionRequest};

/// Protein range and fat/carb split for an activity level and goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroGuideline {
    pub protein_g_per_kg: (f64, f64),
    pub fat_pct: f64,
    pub carb_pct: f64,
}

const fn guideline(low: f64, high: f64, fat_pct: f64, carb_pct: f64) -> MacroGuideline {
    MacroGuideline {
        protein_g_per_kg: (low, high),
        fat_pct,
        carb_pct,
    }
}

pub fn macro_guideline(activity: ActivityLevel, goal: Goal) -> MacroGuideline {
    use ActivityLevel::*;
    use Goal::*;

    match (activity, goal) {
        (Sedentary, FatLoss) => guideline(1.2, 1.6, 30.0, 40.0),
        (Sedentary, MuscleGain) => guideline(1.4, 1.8, 25.0, 50.0),
        (Sedentary, Strength) => guideline(1.4, 1.8, 30.0, 45.0),
        (Sedentary, Endurance) => guideline(1.2, 1.5, 25.0, 55.0),

        (Light, FatLoss) => guideline(1.4, 1.8, 30.0, 40.0),
        (Light, MuscleGain) => guideline(1.6, 2.0, 25.0, 50.0),
        (Light, Strength) => guideline(1.6, 2.0, 25.0, 50.0),
        (Light, Endurance) => guideline(1.4, 1.6, 25.0, 55.0),

        (Moderate, FatLoss) => guideline(1.6, 2.0, 30.0, 40.0),
        (Moderate, MuscleGain) => guideline(1.8, 2.2, 25.0, 50.0),
        (Moderate, Strength) => guideline(1.8, 2.2, 25.0, 50.0),
        (Moderate, Endurance) => guideline(1.5, 1.8, 20.0, 60.0),

        (Active, FatLoss) => guideline(1.8, 2.2, 30.0, 40.0),
        (Active, MuscleGain) => guideline(2.0, 2.2, 25.0, 50.0),
        (Active, Strength) => guideline(2.0, 2.2, 25.0, 50.0),
        (Active, Endurance) => guideline(1.6, 1.8, 20.0, 60.0),

        (VeryActive, FatLoss) => guideline(2.0, 2.4, 30.0, 40.0),
        (VeryActive, MuscleGain) => guideline(2.0, 2.4, 20.0, 55.0),
        (VeryActive, Strength) => guideline(2.0, 2.4, 25.0, 50.0),
        (VeryActive, Endurance) => guideline(1.6, 2.0, 20.0, 60.0),
    }
}

/// Calorie offset applied to TDEE for each goal
pub fn goal_calorie_offset(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => -500.0,
        Goal::MuscleGain => 300.0,
        Goal::Endurance => 150.0,
        Goal::Strength => 0.0,
    }
}

/// Lower-case and drop spaces and underscores: "Very_Active" -> "veryactive"
fn normalize_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != ' ' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

/// Half-to-even rounding to `decimals` places
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

fn round_int(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Closed-form macro calculator: Mifflin-St Jeor BMR, activity multiplier,
/// goal offset, then a protein-first macro split
#[derive(Debug, Clone, Default)]
pub struct NutritionService;

impl NutritionService {
    pub fn new() -> Self {
        Self
    }

    pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: f64, gender: &str) -> f64 {
        let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age;
        if gender.trim().eq_ignore_ascii_case("male") {
            base + 5.0
        } else {
            base - 161.0
        }
    }

    /// Daily calorie target: BMR x activity multiplier + goal offset
    pub fn daily_calories(
        weight_kg: f64,
        height_cm: f64,
        age: f64,
        gender: &str,
        activity: ActivityLevel,
        goal: Goal,
    ) -> f64 {
        let bmr = Self::basal_metabolic_rate(weight_kg, height_cm, age, gender);
        bmr * activity.multiplier() + goal_calorie_offset(goal)
    }

    pub fn calculate(&self, request: &NutritionRequest) -> Result<MacroBreakdown> {
        if !(request.weight > 0.0 && request.height > 0.0) || request.age <= 0 {
            return Err(PlannerError::InvalidInput(
                "weight, height and age must be positive".to_string(),
            ));
        }

        let activity_key = normalize_key(&request.activity_level);
        let activity = ActivityLevel::from_key(&activity_key)
            .ok_or_else(|| PlannerError::UnknownActivityLevel(request.activity_level.clone()))?;

        let goal = Goal::from_key(&normalize_key(&request.goal)).ok_or_else(|| {
            PlannerError::UnknownGoal {
                goal: request.goal.clone(),
                available: Goal::available_keys(),
            }
        })?;

        let fitness_level = FitnessLevel::parse(&normalize_key(&request.fitness_level))
            .map_err(|_| PlannerError::InvalidFitnessLevel(request.fitness_level.clone()))?;

        let calories = Self::daily_calories(
            request.weight,
            request.height,
            f64::from(request.age),
            &request.gender,
            activity,
            goal,
        );
        debug!("Daily calorie target {:.2} kcal ({:?}, {:?})", calories, activity, goal);

        if !calories.is_finite() || calories <= 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "computed daily calorie target {:.2} kcal is not positive",
                calories
            )));
        }

        Ok(Self::split_macros(
            macro_guideline(activity, goal),
            calories,
            request.weight,
            fitness_level,
        ))
    }

    /// Protein from g/kg by experience, remaining calories split between fat
    /// and carbohydrate in the guideline's ratio
    pub fn split_macros(
        guideline: MacroGuideline,
        calories: f64,
        weight_kg: f64,
        fitness_level: FitnessLevel,
    ) -> MacroBreakdown {
        let (low, high) = guideline.protein_g_per_kg;
        let protein_per_kg = match fitness_level {
            FitnessLevel::Beginner => low,
            FitnessLevel::Intermediate => (low + high) / 2.0,
            FitnessLevel::Advanced => high,
        };

        let protein_g = round_int(protein_per_kg * weight_kg);
        let protein_kcal = protein_g * 4;

        let fat_pct = guideline.fat_pct / 100.0;
        let carb_pct = guideline.carb_pct / 100.0;
        let total_pct = fat_pct + carb_pct;

        let remaining_kcal = calories - protein_kcal as f64;
        let fat_kcal = round_int(fat_pct / total_pct * remaining_kcal);
        let carb_kcal = round_int(carb_pct / total_pct * remaining_kcal);

        let pct_of_total = |kcal: i64| round_to(kcal as f64 / calories * 100.0, 2);

        MacroBreakdown {
            calories_kcal: round_int(calories),

            protein_g,
            protein_kcal,
            protein_pct_of_total_kcal: pct_of_total(protein_kcal),

            fat_g: round_int(fat_kcal as f64 / 9.0),
            fat_kcal,
            fat_pct_of_total_kcal: pct_of_total(fat_kcal),

            carbohydrate_g: round_int(carb_kcal as f64 / 4.0),
            carb_kcal,
            carb_pct_of_total_kcal: pct_of_total(carb_kcal),

            total_kcal_from_macros: protein_kcal + fat_kcal + carb_kcal,
        }
    }
}
