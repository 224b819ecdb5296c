// API routes and handlers

pub mod calorie_prediction;
pub mod health;
pub mod nutrition;
pub mod routes;
pub mod workout_planner;
