use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{PlannerError, Result};

/// Incoming body for `POST /workout_planner`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlannerRequest {
    pub fitness_level: String,
    pub goal: String,
    pub availability: i64,
    /// Comma-separated equipment names, e.g. "Bodyweight, Dumbbell"
    pub equipment_str: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    /// Comma-separated injured body zones to avoid
    #[serde(default)]
    pub injury_str: Option<String>,
}

/// Training experience, used both for difficulty filtering and prescription lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(PlannerError::InvalidFitnessLevel(raw.to_string())),
        }
    }

    /// Position in the (beginner, intermediate, advanced) prescription tuples
    pub fn index(&self) -> usize {
        match self {
            FitnessLevel::Beginner => 0,
            FitnessLevel::Intermediate => 1,
            FitnessLevel::Advanced => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Supported training goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Strength,
    Endurance,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::FatLoss, Goal::MuscleGain, Goal::Strength, Goal::Endurance];

    /// Normalized lookup key ("fatloss", "musclegain", ...)
    pub fn key(&self) -> &'static str {
        match self {
            Goal::FatLoss => "fatloss",
            Goal::MuscleGain => "musclegain",
            Goal::Strength => "strength",
            Goal::Endurance => "endurance",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Goal::ALL.into_iter().find(|goal| goal.key() == key)
    }

    pub fn available_keys() -> Vec<&'static str> {
        Goal::ALL.iter().map(Goal::key).collect()
    }
}

/// Lower-case and strip spaces: "Fat Loss" -> "fatloss"
pub fn normalize_goal(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "")
}

/// Split a comma-separated list, trimming and dropping empty entries
pub fn parse_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validated planner input
#[derive(Debug, Clone, PartialEq)]
pub struct UserConstraints {
    pub fitness_level: FitnessLevel,
    /// Goal exactly as the caller sent it; normalized where it is looked up
    pub goal: String,
    pub availability: i64,
    /// Lower-cased, trimmed equipment names
    pub equipment: BTreeSet<String>,
    pub injury_zones: Vec<String>,
}

impl UserConstraints {
    pub fn from_request(request: &WorkoutPlannerRequest) -> Result<Self> {
        let fitness_level = FitnessLevel::parse(&request.fitness_level)?;

        let equipment = parse_comma_list(&request.equipment_str)
            .into_iter()
            .map(|item| item.to_lowercase())
            .collect();

        let injury_zones = request
            .injury_str
            .as_deref()
            .map(parse_comma_list)
            .unwrap_or_default();

        Ok(Self {
            fitness_level,
            goal: request.goal.clone(),
            availability: request.availability,
            equipment,
            injury_zones,
        })
    }

    /// Normalized goal key used for table lookups and selection seeds
    pub fn goal_key(&self) -> String {
        normalize_goal(&self.goal)
    }
}

/// Training focus for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    #[serde(rename = "Full Body")]
    FullBody,
    #[serde(rename = "Upper Body")]
    UpperBody,
    #[serde(rename = "Lower Body")]
    LowerBody,
    Push,
    Pull,
    Legs,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::FullBody => "Full Body",
            DayType::UpperBody => "Upper Body",
            DayType::LowerBody => "Lower Body",
            DayType::Push => "Push",
            DayType::Pull => "Pull",
            DayType::Legs => "Legs",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitDay {
    /// "Day N", 1-based
    pub label: String,
    pub day_type: DayType,
}

/// Ordered day-by-day training focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPlan {
    days: Vec<SplitDay>,
}

impl SplitPlan {
    pub fn from_day_types(day_types: impl IntoIterator<Item = DayType>) -> Self {
        let days = day_types
            .into_iter()
            .enumerate()
            .map(|(i, day_type)| SplitDay {
                label: format!("Day {}", i + 1),
                day_type,
            })
            .collect();

        Self { days }
    }

    pub fn days(&self) -> &[SplitDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day_types(&self) -> Vec<DayType> {
        self.days.iter().map(|day| day.day_type).collect()
    }
}

/// A single exercise slot in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    pub exercise_name: String,
    pub primary_muscle: String,
    pub sets: u32,
    pub reps: u32,
    pub rest: String,
    pub intensity: String,
}

/// "Day N - <DayType>" -> prescriptions, in day order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutPlan {
    days: IndexMap<String, Vec<ExercisePrescription>>,
}

impl WorkoutPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_day(&mut self, key: String, exercises: Vec<ExercisePrescription>) {
        self.days.insert(key, exercises);
    }

    pub fn day(&self, key: &str) -> Option<&[ExercisePrescription]> {
        self.days.get(key).map(Vec::as_slice)
    }

    pub fn day_keys(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ExercisePrescription])> {
        self.days.iter().map(|(key, exercises)| (key.as_str(), exercises.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
