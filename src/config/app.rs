use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub exercise_catalog_path: PathBuf,
    pub calorie_model_dir: PathBuf,
    pub cors_allow_any_origin: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; `from_env` uses the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "8000")
            .parse()
            .context("PORT must be a valid port number")?;
        let cors_allow_any_origin = var("CORS_ALLOW_ANY_ORIGIN", "true")
            .parse()
            .context("CORS_ALLOW_ANY_ORIGIN must be true or false")?;

        Ok(AppConfig {
            host: var("HOST", "0.0.0.0"),
            port,
            environment: var("ENVIRONMENT", "development"),
            log_level: var("LOG_LEVEL", "info"),
            exercise_catalog_path: PathBuf::from(var("EXERCISE_CATALOG_PATH", "data/exercise.csv")),
            calorie_model_dir: PathBuf::from(var("CALORIE_MODEL_DIR", "calorie_burned")),
            cors_allow_any_origin,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
