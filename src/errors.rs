use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Failed to load data: {0}")]
    DataLoad(String),
    #[error("Goal '{goal}' not recognized. Available goals: {available:?}")]
    UnknownGoal {
        goal: String,
        available: Vec<&'static str>,
    },
    #[error("Availability must be between 1 and 7 days per week, got {0}")]
    InvalidAvailability(i64),
    #[error("Invalid fitness level '{0}', expected beginner, intermediate or advanced")]
    InvalidFitnessLevel(String),
    #[error("Unknown activity level '{0}'")]
    UnknownActivityLevel(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Prediction failed: {0}")]
    Prediction(String),
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
}

impl PlannerError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::DataLoad(_) => "DATA_LOAD_ERROR",
            PlannerError::UnknownGoal { .. } => "UNKNOWN_GOAL",
            PlannerError::InvalidAvailability(_) => "INVALID_AVAILABILITY",
            PlannerError::InvalidFitnessLevel(_) => "INVALID_FITNESS_LEVEL",
            PlannerError::UnknownActivityLevel(_) => "UNKNOWN_ACTIVITY_LEVEL",
            PlannerError::InvalidInput(_) => "INVALID_INPUT",
            PlannerError::Prediction(_) => "PREDICTION_ERROR",
            PlannerError::JsonRejection(_) => "INVALID_REQUEST_BODY",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PlannerError::DataLoad(_) | PlannerError::Prediction(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            PlannerError::UnknownGoal { .. }
            | PlannerError::InvalidAvailability(_)
            | PlannerError::InvalidFitnessLevel(_)
            | PlannerError::UnknownActivityLevel(_)
            | PlannerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PlannerError::JsonRejection(rejection) => rejection.status(),
        }
    }
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        PlannerError::DataLoad(err.to_string())
    }
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "error_code": self.error_code(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
