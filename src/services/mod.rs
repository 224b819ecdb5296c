// Planning, nutrition and prediction services

pub mod calorie_prediction_service;
pub mod exercise_catalog;
pub mod exercise_filter_service;
pub mod goal_policy;
pub mod nutrition_service;
pub mod plan_assembly_service;
pub mod split_planner;
pub mod workout_planner_service;

pub use calorie_prediction_service::{CalorieModel, CaloriePredictionService, CaloriePredictor};
pub use exercise_catalog::{CatalogView, ExerciseCatalog};
pub use exercise_filter_service::ExerciseFilterService;
pub use nutrition_service::NutritionService;
pub use plan_assembly_service::PlanAssemblyService;
pub use split_planner::plan_split;
pub use workout_planner_service::WorkoutPlannerService;
