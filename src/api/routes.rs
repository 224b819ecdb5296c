use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::calorie_prediction::calorie_prediction_routes;
use super::health::health_check;
use super::nutrition::nutrition_routes;
use super::workout_planner::workout_planner_routes;
use crate::services::{CaloriePredictionService, NutritionService, WorkoutPlannerService};

/// Services constructed once at startup and shared by every request
#[derive(Clone)]
pub struct AppServices {
    pub workout_planner: Arc<WorkoutPlannerService>,
    pub nutrition: NutritionService,
    pub calorie_prediction: CaloriePredictionService,
}

pub fn create_routes(services: AppServices, cors_allow_any_origin: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(workout_planner_routes(services.workout_planner))
        .merge(nutrition_routes(services.nutrition))
        .merge(calorie_prediction_routes(services.calorie_prediction))
        .layer(TraceLayer::new_for_http());

    if cors_allow_any_origin {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
