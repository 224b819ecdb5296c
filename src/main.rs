use anyhow::Context;
use fitplan::api::routes::{create_routes, AppServices};
use fitplan::config::AppConfig;
use fitplan::services::{
    CalorieModel, CaloriePredictionService, ExerciseCatalog, NutritionService, WorkoutPlannerService,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Data and model artifacts are loaded once; any failure aborts startup
    let catalog = ExerciseCatalog::load(&config.exercise_catalog_path)
        .context("failed to load exercise catalog")?;
    let calorie_model = CalorieModel::load(&config.calorie_model_dir)
        .context("failed to load calorie model")?;

    let services = AppServices {
        workout_planner: Arc::new(WorkoutPlannerService::new(Arc::new(catalog))),
        nutrition: NutritionService::new(),
        calorie_prediction: CaloriePredictionService::new(Arc::new(calorie_model)),
    };

    let app = create_routes(services, config.cors_allow_any_origin);

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Fitplan server starting on http://{} ({})", address, config.environment);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
