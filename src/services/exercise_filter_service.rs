use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::errors::{PlannerError, Result};
use crate::models::{normalize_goal, DifficultyLevel, FitnessLevel, Goal, UserConstraints};
use crate::services::exercise_catalog::CatalogView;
use crate::services::goal_policy::allowed_classifications;

/// Secondary equipment values meaning "nothing else required"
const NO_SECONDARY_EQUIPMENT: [&str; 3] = ["", "none", "nan"];

/// Sequential catalog filters: difficulty, equipment, injuries, classification.
///
/// Each stage takes a view and returns a new one. Difficulty, equipment and
/// injury stages pass their input through unchanged when the catalog lacks
/// the columns they inspect.
#[derive(Debug, Clone, Default)]
pub struct ExerciseFilterService;

impl ExerciseFilterService {
    pub fn new() -> Self {
        Self
    }

    /// Run every stage in order for the given constraints
    pub fn apply<'a>(
        &self,
        view: &CatalogView<'a>,
        constraints: &UserConstraints,
    ) -> Result<CatalogView<'a>> {
        let filtered = self.filter_by_difficulty(view, constraints.fitness_level);
        let filtered = self.filter_by_equipment(&filtered, &constraints.equipment);
        let filtered = self.filter_by_injury(&filtered, &constraints.injury_zones);
        self.filter_by_classification(&filtered, &constraints.goal)
    }

    /// Difficulty levels a fitness level may train with
    pub fn difficulty_inclusion(level: FitnessLevel) -> [DifficultyLevel; 2] {
        match level {
            FitnessLevel::Beginner => [DifficultyLevel::Beginner, DifficultyLevel::Novice],
            FitnessLevel::Intermediate => [DifficultyLevel::Beginner, DifficultyLevel::Intermediate],
            FitnessLevel::Advanced => [DifficultyLevel::Intermediate, DifficultyLevel::Advanced],
        }
    }

    pub fn filter_by_difficulty<'a>(
        &self,
        view: &CatalogView<'a>,
        level: FitnessLevel,
    ) -> CatalogView<'a> {
        if !view.schema().has_difficulty {
            warn!("Catalog has no difficulty column, skipping difficulty filter");
            return view.clone();
        }

        let allowed = Self::difficulty_inclusion(level);
        let filtered = view.filter(|row| {
            row.difficulty
                .map(|difficulty| allowed.contains(&difficulty))
                .unwrap_or(false)
        });

        debug!("Difficulty filter ({}): {} -> {} exercises", level, view.len(), filtered.len());
        filtered
    }

    /// Keep rows whose primary equipment is available and whose secondary
    /// equipment is either absent or also available. `available` must hold
    /// lower-cased names.
    pub fn filter_by_equipment<'a>(
        &self,
        view: &CatalogView<'a>,
        available: &BTreeSet<String>,
    ) -> CatalogView<'a> {
        if !view.schema().has_equipment() {
            warn!("Catalog is missing equipment columns, skipping equipment filter");
            return view.clone();
        }

        let filtered = view.filter(|row| {
            let primary = row.primary_equipment.trim().to_lowercase();
            if !available.contains(&primary) {
                return false;
            }

            let secondary = row.secondary_equipment.trim().to_lowercase();
            NO_SECONDARY_EQUIPMENT.contains(&secondary.as_str()) || available.contains(&secondary)
        });

        debug!("Equipment filter: {} -> {} exercises", view.len(), filtered.len());
        filtered
    }

    /// Drop rows that work an injured body zone, matched by substring
    /// against the target muscle group and prime mover columns
    pub fn filter_by_injury<'a>(&self, view: &CatalogView<'a>, zones: &[String]) -> CatalogView<'a> {
        let schema = view.schema();
        if zones.is_empty() || !(schema.has_target_muscle_group || schema.has_prime_mover_muscle) {
            return view.clone();
        }

        let zones: Vec<String> = zones.iter().map(|zone| zone.to_lowercase()).collect();
        let filtered = view.filter(|row| {
            let target = row.target_muscle_group.to_lowercase();
            let prime = row.prime_mover_muscle.to_lowercase();
            !zones
                .iter()
                .any(|zone| target.contains(zone.as_str()) || prime.contains(zone.as_str()))
        });

        debug!("Injury filter: {} -> {} exercises", view.len(), filtered.len());
        filtered
    }

    /// Keep rows whose classification suits the goal. An unmapped goal is
    /// rejected with `UnknownGoal`.
    pub fn filter_by_classification<'a>(
        &self,
        view: &CatalogView<'a>,
        goal: &str,
    ) -> Result<CatalogView<'a>> {
        let goal_key = normalize_goal(goal);
        let goal = Goal::from_key(&goal_key).ok_or_else(|| PlannerError::UnknownGoal {
            goal: goal.to_string(),
            available: Goal::available_keys(),
        })?;

        if !view.schema().has_classification {
            warn!("Catalog has no classification column, skipping classification filter");
            return Ok(view.clone());
        }

        let allowed = allowed_classifications(goal);
        let filtered = view.filter(|row| allowed.contains(&row.classification.as_str()));

        debug!(
            "Classification filter ({}): {} -> {} exercises",
            goal_key,
            view.len(),
            filtered.len()
        );
        Ok(filtered)
    }
}
