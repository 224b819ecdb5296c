use axum::{extract::State, response::Json, routing::post, Router};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::errors::PlannerError;
use crate::models::{WorkoutPlan, WorkoutPlannerRequest};
use crate::services::WorkoutPlannerService;

#[derive(Clone)]
pub struct WorkoutPlannerAppState {
    pub planner: Arc<WorkoutPlannerService>,
}

pub fn workout_planner_routes(planner: Arc<WorkoutPlannerService>) -> Router {
    Router::new()
        .route("/workout_planner", post(generate_workout_plan))
        .with_state(WorkoutPlannerAppState { planner })
}

/// Build a day-by-day workout plan from the user's level, goal, availability and equipment
pub async fn generate_workout_plan(
    State(state): State<WorkoutPlannerAppState>,
    WithRejection(Json(request), _): WithRejection<Json<WorkoutPlannerRequest>, PlannerError>,
) -> Result<Json<WorkoutPlan>, PlannerError> {
    tracing::info!(
        "Workout plan requested: level={}, goal={}, availability={}, equipment={}",
        request.fitness_level,
        request.goal,
        request.availability,
        request.equipment_str
    );

    let plan = state.planner.generate_plan(&request)?;
    Ok(Json(plan))
}
