use axum::{extract::State, response::Json, routing::post, Router};
use axum_extra::extract::WithRejection;

use crate::errors::PlannerError;
use crate::models::{MacroBreakdown, NutritionRequest};
use crate::services::NutritionService;

#[derive(Clone)]
pub struct NutritionAppState {
    pub nutrition_service: NutritionService,
}

pub fn nutrition_routes(nutrition_service: NutritionService) -> Router {
    Router::new()
        .route("/nutrition_plan", post(nutrition_plan))
        .with_state(NutritionAppState { nutrition_service })
}

/// Daily calorie target and macro split
pub async fn nutrition_plan(
    State(state): State<NutritionAppState>,
    WithRejection(Json(request), _): WithRejection<Json<NutritionRequest>, PlannerError>,
) -> Result<Json<MacroBreakdown>, PlannerError> {
    let macros = state.nutrition_service.calculate(&request)?;
    Ok(Json(macros))
}
