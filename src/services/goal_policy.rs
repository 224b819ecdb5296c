//! Static lookup tables that drive the workout planner.

use crate::models::{DayType, FitnessLevel, Goal};

/// Exercise classifications a goal is allowed to draw from
pub fn allowed_classifications(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::FatLoss => &["Calisthenics", "Ballistics", "Plyometric", "Animal Flow", "Bodybuilding"],
        Goal::MuscleGain => &["Bodybuilding", "Powerlifting", "Olympic Weightlifting", "Grinds"],
        Goal::Strength => &["Bodybuilding", "Powerlifting", "Olympic Weightlifting", "Grinds"],
        Goal::Endurance => &["Calisthenics", "Ballistics", "Plyometric"],
    }
}

/// Muscle groups trained on a given day type, in prescription order
pub fn muscle_groups(day_type: DayType) -> &'static [&'static str] {
    match day_type {
        DayType::FullBody => &[
            "Chest",
            "Back",
            "Shoulders",
            "Triceps",
            "Biceps",
            "Quadriceps",
            "Hamstrings",
            "Glutes",
        ],
        DayType::UpperBody => &["Chest", "Back", "Shoulders", "Triceps", "Biceps"],
        DayType::LowerBody => &["Quadriceps", "Hamstrings", "Glutes", "Calves"],
        DayType::Push => &["Chest", "Shoulders", "Triceps"],
        DayType::Pull => &["Back", "Biceps"],
        DayType::Legs => &["Quadriceps", "Hamstrings", "Glutes", "Calves"],
    }
}

/// Sets/reps per experience level plus rest and intensity guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalPrescription {
    /// (beginner, intermediate, advanced)
    pub sets: [u32; 3],
    pub reps: [u32; 3],
    pub rest: &'static str,
    pub intensity: &'static str,
}

impl GoalPrescription {
    pub fn sets_for(&self, level: FitnessLevel) -> u32 {
        self.sets[level.index()]
    }

    pub fn reps_for(&self, level: FitnessLevel) -> u32 {
        self.reps[level.index()]
    }
}

pub fn goal_prescription(goal: Goal) -> GoalPrescription {
    match goal {
        Goal::Strength => GoalPrescription {
            sets: [3, 5, 6],
            reps: [2, 4, 6],
            rest: "2-5 min",
            intensity: "85%+ 1RM",
        },
        Goal::MuscleGain => GoalPrescription {
            sets: [3, 5, 6],
            reps: [6, 9, 12],
            rest: "30-90 sec",
            intensity: "67-85% 1RM",
        },
        Goal::FatLoss => GoalPrescription {
            sets: [3, 4, 5],
            reps: [10, 13, 15],
            rest: "30-90 sec",
            intensity: "67-75% 1RM",
        },
        Goal::Endurance => GoalPrescription {
            sets: [3, 4, 4],
            reps: [12, 15, 20],
            rest: "up to 30 sec",
            intensity: "≤67% 1RM",
        },
    }
}

/// Prescription for a normalized goal key. Unknown keys get the muscle gain
/// entry rather than an error, unlike the classification lookup.
pub fn prescription_for_key(goal_key: &str) -> GoalPrescription {
    goal_prescription(Goal::from_key(goal_key).unwrap_or(Goal::MuscleGain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prescription_indexes_by_level() {
        let strength = goal_prescription(Goal::Strength);
        assert_eq!(strength.sets_for(FitnessLevel::Beginner), 3);
        assert_eq!(strength.reps_for(FitnessLevel::Beginner), 2);
        assert_eq!(strength.sets_for(FitnessLevel::Advanced), 6);
        assert_eq!(strength.reps_for(FitnessLevel::Intermediate), 4);

        let endurance = goal_prescription(Goal::Endurance);
        assert_eq!(endurance.reps_for(FitnessLevel::Advanced), 20);
        assert_eq!(endurance.rest, "up to 30 sec");
    }

    #[test]
    fn test_unknown_goal_falls_back_to_muscle_gain() {
        assert_eq!(prescription_for_key("yoga"), goal_prescription(Goal::MuscleGain));
        assert_eq!(prescription_for_key("fatloss"), goal_prescription(Goal::FatLoss));
    }

    #[test]
    fn test_lower_body_days_share_muscle_groups() {
        assert_eq!(muscle_groups(DayType::LowerBody), muscle_groups(DayType::Legs));
        assert_eq!(muscle_groups(DayType::FullBody).len(), 8);
        assert!(!muscle_groups(DayType::FullBody).contains(&"Calves"));
    }
}
