use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Incoming body for `POST /predict_calories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieInput {
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: i32,
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "Weight")]
    pub weight: f64,
    /// Workout duration in minutes
    #[serde(rename = "Duration")]
    pub duration: f64,
    #[serde(rename = "Heart_Rate")]
    pub heart_rate: f64,
    #[serde(rename = "Body_Temp")]
    pub body_temp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriePrediction {
    pub predicted_calories: f64,
}

/// Numeric feature vector in the order the regression model was trained on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieFeatures {
    /// 0 for male, 1 otherwise
    pub gender: f64,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub duration: f64,
    pub heart_rate: f64,
    pub body_temp: f64,
}

impl CalorieFeatures {
    pub const COUNT: usize = 7;

    pub fn from_input(input: &CalorieInput) -> Self {
        Self {
            gender: encode_gender(&input.gender),
            age: f64::from(input.age),
            height: input.height,
            weight: input.weight,
            duration: input.duration,
            heart_rate: input.heart_rate,
            body_temp: input.body_temp,
        }
    }

    /// Same features with a different workout duration
    pub fn with_duration(&self, duration: f64) -> Self {
        Self { duration, ..*self }
    }

    pub fn to_ndarray(&self) -> Array1<f64> {
        Array1::from(vec![
            self.gender,
            self.age,
            self.height,
            self.weight,
            self.duration,
            self.heart_rate,
            self.body_temp,
        ])
    }
}

fn encode_gender(gender: &str) -> f64 {
    if gender.trim().eq_ignore_ascii_case("male") {
        0.0
    } else {
        1.0
    }
}
