use axum::{extract::State, response::Json, routing::post, Router};
use axum_extra::extract::WithRejection;

use crate::errors::PlannerError;
use crate::models::{CalorieInput, CaloriePrediction};
use crate::services::CaloriePredictionService;

#[derive(Clone)]
pub struct CaloriePredictionAppState {
    pub prediction_service: CaloriePredictionService,
}

pub fn calorie_prediction_routes(prediction_service: CaloriePredictionService) -> Router {
    Router::new()
        .route("/predict_calories", post(predict_calories))
        .with_state(CaloriePredictionAppState { prediction_service })
}

/// Estimated calories burned for a workout
pub async fn predict_calories(
    State(state): State<CaloriePredictionAppState>,
    WithRejection(Json(input), _): WithRejection<Json<CalorieInput>, PlannerError>,
) -> Result<Json<CaloriePrediction>, PlannerError> {
    let prediction = state.prediction_service.predict_total(&input)?;
    Ok(Json(prediction))
}
