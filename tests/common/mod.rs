// Shared fixtures for integration tests

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

use fitplan::api::routes::{create_routes, AppServices};
use fitplan::models::CalorieFeatures;
use fitplan::services::{
    CaloriePredictionService, CaloriePredictor, ExerciseCatalog, NutritionService,
    WorkoutPlannerService,
};
use fitplan::Result;

pub fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("exercise.csv")
}

pub fn sample_catalog() -> Arc<ExerciseCatalog> {
    Arc::new(ExerciseCatalog::load(sample_catalog_path()).unwrap())
}

/// Burns a fixed number of calories per minute of exercise
pub struct PerMinutePredictor(pub f64);

impl CaloriePredictor for PerMinutePredictor {
    fn predict(&self, features: &CalorieFeatures) -> Result<f64> {
        Ok(self.0 * features.duration)
    }
}

pub fn test_services() -> AppServices {
    AppServices {
        workout_planner: Arc::new(WorkoutPlannerService::new(sample_catalog())),
        nutrition: NutritionService::new(),
        calorie_prediction: CaloriePredictionService::new(Arc::new(PerMinutePredictor(8.0))),
    }
}

pub fn test_app() -> Router {
    create_routes(test_services(), true)
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
