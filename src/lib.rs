//! Workout planning, macro calculation and calorie prediction over HTTP.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::{PlannerError, Result};
