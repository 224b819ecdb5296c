use crate::errors::{PlannerError, Result};
use crate::models::{DayType, SplitPlan};

const UPPER_LOWER: [DayType; 2] = [DayType::UpperBody, DayType::LowerBody];
const PUSH_PULL_LEGS: [DayType; 3] = [DayType::Push, DayType::Pull, DayType::Legs];

/// Availability is days per week
pub const MAX_AVAILABILITY_DAYS: i64 = 7;

/// Maps weekly availability to a training split:
/// up to 3 days full body, 4 days upper/lower, 5 to 7 days push/pull/legs.
pub fn plan_split(days: i64) -> Result<SplitPlan> {
    if !(1..=MAX_AVAILABILITY_DAYS).contains(&days) {
        return Err(PlannerError::InvalidAvailability(days));
    }

    let day_count = usize::try_from(days).map_err(|_| PlannerError::InvalidAvailability(days))?;
    let day_types = (0..day_count).map(|i| match day_count {
        1..=3 => DayType::FullBody,
        4 => UPPER_LOWER[i % UPPER_LOWER.len()],
        _ => PUSH_PULL_LEGS[i % PUSH_PULL_LEGS.len()],
    });

    Ok(SplitPlan::from_day_types(day_types))
}
