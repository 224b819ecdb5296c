use std::sync::Arc;
use tracing::info;

use crate::errors::Result;
use crate::models::{UserConstraints, WorkoutPlan, WorkoutPlannerRequest};
use crate::services::exercise_catalog::ExerciseCatalog;
use crate::services::exercise_filter_service::ExerciseFilterService;
use crate::services::plan_assembly_service::PlanAssemblyService;
use crate::services::split_planner::plan_split;

/// Request-level entry point: filter the shared catalog, plan the split,
/// assemble the prescriptions
#[derive(Clone)]
pub struct WorkoutPlannerService {
    catalog: Arc<ExerciseCatalog>,
    filter_service: ExerciseFilterService,
    assembly_service: PlanAssemblyService,
}

impl WorkoutPlannerService {
    pub fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self {
            catalog,
            filter_service: ExerciseFilterService::new(),
            assembly_service: PlanAssemblyService::new(),
        }
    }

    pub fn generate_plan(&self, request: &WorkoutPlannerRequest) -> Result<WorkoutPlan> {
        let constraints = UserConstraints::from_request(request)?;
        self.plan_for(&constraints)
    }

    pub fn plan_for(&self, constraints: &UserConstraints) -> Result<WorkoutPlan> {
        let filtered = self.filter_service.apply(&self.catalog.view(), constraints)?;
        let split = plan_split(constraints.availability)?;

        let plan = self.assembly_service.assemble(
            &filtered,
            &split,
            &constraints.goal,
            constraints.fitness_level,
        );

        info!(
            "Generated {}-day plan for goal '{}' ({}) from {} eligible exercises",
            split.len(),
            constraints.goal_key(),
            constraints.fitness_level,
            filtered.len()
        );

        Ok(plan)
    }
}
