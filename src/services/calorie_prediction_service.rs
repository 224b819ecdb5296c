use ndarray::Array1;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::errors::{PlannerError, Result};
use crate::models::{CalorieFeatures, CalorieInput, CaloriePrediction};

pub const SCALER_FILE: &str = "scaler.json";
pub const POLY_FILE: &str = "poly.json";
pub const REGRESSOR_FILE: &str = "regressor.json";

/// Length of one prediction chunk in minutes
const CHUNK_MINUTES: f64 = 60.0;

/// Anything that can estimate calories burned for one workout chunk
#[cfg_attr(test, mockall::automock)]
pub trait CaloriePredictor: Send + Sync {
    fn predict(&self, features: &CalorieFeatures) -> Result<f64>;
}

/// Standard scaling with pre-fitted statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl FeatureScaler {
    /// Transform a single feature vector
    pub fn transform_single(&self, features: &Array1<f64>) -> Array1<f64> {
        let mean = Array1::from(self.mean.clone());
        let scale = Array1::from(self.scale.clone());
        (features - &mean) / &scale
    }

    fn validate(&self) -> Result<()> {
        if self.mean.len() != CalorieFeatures::COUNT || self.scale.len() != CalorieFeatures::COUNT {
            return Err(PlannerError::DataLoad(format!(
                "scaler expects {} features, got mean={} scale={}",
                CalorieFeatures::COUNT,
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(PlannerError::DataLoad("scaler has a zero or non-finite scale".to_string()));
        }
        Ok(())
    }
}

/// Polynomial feature expansion, terms ordered by degree then
/// lexicographically by feature index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialExpander {
    pub degree: usize,
    #[serde(default = "default_include_bias")]
    pub include_bias: bool,
    #[serde(default)]
    pub interaction_only: bool,
}

fn default_include_bias() -> bool {
    true
}

impl PolynomialExpander {
    /// Feature-index combinations making up each output term
    pub fn terms(&self, n_features: usize) -> Vec<Vec<usize>> {
        let min_degree = if self.include_bias { 0 } else { 1 };
        let mut terms = Vec::new();

        for degree in min_degree..=self.degree {
            let mut current = Vec::with_capacity(degree);
            self.collect_terms(n_features, degree, 0, &mut current, &mut terms);
        }

        terms
    }

    fn collect_terms(
        &self,
        n_features: usize,
        remaining: usize,
        start: usize,
        current: &mut Vec<usize>,
        terms: &mut Vec<Vec<usize>>,
    ) {
        if remaining == 0 {
            terms.push(current.clone());
            return;
        }

        for index in start..n_features {
            current.push(index);
            let next = if self.interaction_only { index + 1 } else { index };
            self.collect_terms(n_features, remaining - 1, next, current, terms);
            current.pop();
        }
    }

    pub fn output_len(&self, n_features: usize) -> usize {
        self.terms(n_features).len()
    }

    pub fn transform(&self, features: &Array1<f64>) -> Array1<f64> {
        self.terms(features.len())
            .iter()
            .map(|term| term.iter().map(|&i| features[i]).product::<f64>())
            .collect()
    }
}

/// Linear model over the expanded features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegressor {
    pub fn predict(&self, features: &Array1<f64>) -> f64 {
        Array1::from(self.coef.clone()).dot(features) + self.intercept
    }
}

/// Pre-trained scale -> polynomial -> linear regression pipeline
#[derive(Debug, Clone)]
pub struct CalorieModel {
    scaler: FeatureScaler,
    expander: PolynomialExpander,
    regressor: LinearRegressor,
}

impl CalorieModel {
    pub fn new(
        scaler: FeatureScaler,
        expander: PolynomialExpander,
        regressor: LinearRegressor,
    ) -> Result<Self> {
        scaler.validate()?;

        let expected = expander.output_len(CalorieFeatures::COUNT);
        if regressor.coef.len() != expected {
            return Err(PlannerError::DataLoad(format!(
                "regressor has {} coefficients but the polynomial expansion yields {}",
                regressor.coef.len(),
                expected
            )));
        }

        Ok(Self {
            scaler,
            expander,
            regressor,
        })
    }

    /// Load the three JSON artifacts from a model directory
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let model = Self::new(
            read_artifact(&dir.join(SCALER_FILE))?,
            read_artifact(&dir.join(POLY_FILE))?,
            read_artifact(&dir.join(REGRESSOR_FILE))?,
        )?;

        info!(
            "Loaded calorie model from {} (degree {}, {} terms)",
            dir.display(),
            model.expander.degree,
            model.regressor.coef.len()
        );

        Ok(model)
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PlannerError::DataLoad(format!("cannot read {}: {}", path.display(), e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| PlannerError::DataLoad(format!("malformed {}: {}", path.display(), e)))
}

impl CaloriePredictor for CalorieModel {
    fn predict(&self, features: &CalorieFeatures) -> Result<f64> {
        let scaled = self.scaler.transform_single(&features.to_ndarray());
        let expanded = self.expander.transform(&scaled);
        Ok(self.regressor.predict(&expanded))
    }
}

/// Sums per-chunk predictions over a workout of any length
#[derive(Clone)]
pub struct CaloriePredictionService {
    predictor: Arc<dyn CaloriePredictor>,
}

impl CaloriePredictionService {
    pub fn new(predictor: Arc<dyn CaloriePredictor>) -> Self {
        Self { predictor }
    }

    /// Predict full 60-minute chunks plus the remainder and add them up
    pub fn predict_total(&self, input: &CalorieInput) -> Result<CaloriePrediction> {
        let duration = input.duration;
        if !duration.is_finite() || duration < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "Duration must be a non-negative number of minutes, got {}",
                duration
            )));
        }

        let features = CalorieFeatures::from_input(input);
        let full_chunks = (duration / CHUNK_MINUTES).floor();
        let remainder = duration - full_chunks * CHUNK_MINUTES;

        let mut total = 0.0;
        if full_chunks > 0.0 {
            total += full_chunks * self.predictor.predict(&features.with_duration(CHUNK_MINUTES))?;
        }
        if remainder > 0.0 {
            total += self.predictor.predict(&features.with_duration(remainder))?;
        }

        if !total.is_finite() {
            return Err(PlannerError::Prediction("model produced a non-finite value".to_string()));
        }

        debug!(
            "Predicted {:.2} kcal for {} min ({} full chunks, {:.1} min remainder)",
            total, duration, full_chunks, remainder
        );

        Ok(CaloriePrediction {
            predicted_calories: total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mockall::predicate::function;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn input(duration: f64) -> CalorieInput {
        CalorieInput {
            gender: "male".to_string(),
            age: 30,
            height: 180.0,
            weight: 80.0,
            duration,
            heart_rate: 110.0,
            body_temp: 40.5,
        }
    }

    fn identity_scaler() -> FeatureScaler {
        FeatureScaler {
            mean: vec![0.0; CalorieFeatures::COUNT],
            scale: vec![1.0; CalorieFeatures::COUNT],
        }
    }

    /// Degree-1 model that returns duration * 5
    fn duration_model() -> CalorieModel {
        let expander = PolynomialExpander {
            degree: 1,
            include_bias: true,
            interaction_only: false,
        };
        let mut coef = vec![0.0; 1 + CalorieFeatures::COUNT];
        coef[5] = 5.0; // bias term first, Duration is feature 4
        CalorieModel::new(identity_scaler(), expander, LinearRegressor { coef, intercept: 0.0 }).unwrap()
    }

    #[test]
    fn test_polynomial_terms_order() {
        let expander = PolynomialExpander {
            degree: 2,
            include_bias: true,
            interaction_only: false,
        };
        assert_eq!(
            expander.terms(2),
            vec![vec![], vec![0], vec![1], vec![0, 0], vec![0, 1], vec![1, 1]]
        );
        assert_eq!(expander.output_len(CalorieFeatures::COUNT), 36);

        let values = expander.transform(&Array1::from(vec![2.0, 3.0]));
        assert_eq!(values.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);
    }

    #[test]
    fn test_interaction_only_terms() {
        let expander = PolynomialExpander {
            degree: 2,
            include_bias: false,
            interaction_only: true,
        };
        assert_eq!(expander.terms(3), vec![vec![0], vec![1], vec![2], vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn test_scaler_transform() {
        let scaler = FeatureScaler {
            mean: vec![1.0, 2.0],
            scale: vec![2.0, 4.0],
        };
        let scaled = scaler.transform_single(&Array1::from(vec![5.0, 10.0]));
        assert_eq!(scaled.to_vec(), vec![2.0, 2.0]);
    }

    #[test]
    fn test_model_rejects_mismatched_coefficients() {
        let expander = PolynomialExpander {
            degree: 2,
            include_bias: true,
            interaction_only: false,
        };
        let regressor = LinearRegressor {
            coef: vec![0.0; 8],
            intercept: 0.0,
        };
        assert_matches!(
            CalorieModel::new(identity_scaler(), expander, regressor),
            Err(PlannerError::DataLoad(_))
        );
    }

    #[test]
    fn test_model_predicts_linear_combination() {
        let model = duration_model();
        let features = CalorieFeatures::from_input(&input(30.0));
        let prediction = model.predict(&features).unwrap();
        assert!((prediction - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_model_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, value: serde_json::Value| {
            let mut file = fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(value.to_string().as_bytes()).unwrap();
        };

        write(SCALER_FILE, serde_json::json!({ "mean": vec![0.0; 7], "scale": vec![1.0; 7] }));
        write(POLY_FILE, serde_json::json!({ "degree": 1 }));
        write(REGRESSOR_FILE, serde_json::json!({ "coef": vec![0.0; 8], "intercept": 42.0 }));

        let model = CalorieModel::load(dir.path()).unwrap();
        let prediction = model.predict(&CalorieFeatures::from_input(&input(20.0))).unwrap();
        assert!((prediction - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_missing_artifacts_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(CalorieModel::load(dir.path()), Err(PlannerError::DataLoad(_)));
    }

    #[test]
    fn test_duration_is_split_into_hour_chunks() {
        let mut predictor = MockCaloriePredictor::new();
        predictor
            .expect_predict()
            .with(function(|f: &CalorieFeatures| f.duration == 60.0))
            .times(1)
            .returning(|_| Ok(500.0));
        predictor
            .expect_predict()
            .with(function(|f: &CalorieFeatures| f.duration == 30.0))
            .times(1)
            .returning(|_| Ok(200.0));

        let service = CaloriePredictionService::new(Arc::new(predictor));
        let prediction = service.predict_total(&input(150.0)).unwrap();

        assert_eq!(prediction.predicted_calories, 2.0 * 500.0 + 200.0);
    }

    #[test]
    fn test_short_workout_uses_single_prediction() {
        let service = CaloriePredictionService::new(Arc::new(duration_model()));
        let prediction = service.predict_total(&input(45.0)).unwrap();
        assert!((prediction.predicted_calories - 225.0).abs() < 1e-9);

        let exact_hours = service.predict_total(&input(120.0)).unwrap();
        assert!((exact_hours.predicted_calories - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let service = CaloriePredictionService::new(Arc::new(MockCaloriePredictor::new()));
        assert_matches!(
            service.predict_total(&input(-5.0)),
            Err(PlannerError::InvalidInput(_))
        );
    }
}
