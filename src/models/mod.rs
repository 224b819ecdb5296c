// Request/response types and catalog records

pub mod calorie_prediction;
pub mod exercise;
pub mod nutrition;
pub mod workout_plan;

pub use calorie_prediction::*;
pub use exercise::*;
pub use nutrition::*;
pub use workout_plan::*;
