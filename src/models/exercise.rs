use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tag carried by each exercise in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Novice => "Novice",
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "novice" => Ok(DifficultyLevel::Novice),
            "beginner" => Ok(DifficultyLevel::Beginner),
            "intermediate" => Ok(DifficultyLevel::Intermediate),
            "advanced" => Ok(DifficultyLevel::Advanced),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exercise from the static catalog.
///
/// Optional columns that are absent from the source are stored as empty
/// strings; `CatalogSchema` records which columns were actually present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRow {
    pub name: String,
    /// `None` when the column is missing or the value is not a known level
    pub difficulty: Option<DifficultyLevel>,
    pub primary_equipment: String,
    pub secondary_equipment: String,
    pub target_muscle_group: String,
    pub prime_mover_muscle: String,
    pub classification: String,
}

impl ExerciseRow {
    /// Minimal row used when building catalogs in code
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            difficulty: None,
            primary_equipment: String::new(),
            secondary_equipment: String::new(),
            target_muscle_group: String::new(),
            prime_mover_muscle: String::new(),
            classification: String::new(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: DifficultyLevel) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_equipment(mut self, primary: &str, secondary: &str) -> Self {
        self.primary_equipment = primary.to_string();
        self.secondary_equipment = secondary.to_string();
        self
    }

    pub fn with_target_muscle(mut self, target: &str) -> Self {
        self.target_muscle_group = target.to_string();
        self
    }

    pub fn with_prime_mover(mut self, prime_mover: &str) -> Self {
        self.prime_mover_muscle = prime_mover.to_string();
        self
    }

    pub fn with_classification(mut self, classification: &str) -> Self {
        self.classification = classification.to_string();
        self
    }

    /// Case-insensitive substring match against the target muscle text
    pub fn targets_muscle(&self, muscle: &str) -> bool {
        self.target_muscle_group
            .to_lowercase()
            .contains(&muscle.to_lowercase())
    }
}

/// Which optional catalog columns were present in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSchema {
    pub has_difficulty: bool,
    pub has_primary_equipment: bool,
    pub has_secondary_equipment: bool,
    pub has_target_muscle_group: bool,
    pub has_prime_mover_muscle: bool,
    pub has_classification: bool,
}

impl CatalogSchema {
    /// Every optional column present
    pub fn full() -> Self {
        Self {
            has_difficulty: true,
            has_primary_equipment: true,
            has_secondary_equipment: true,
            has_target_muscle_group: true,
            has_prime_mover_muscle: true,
            has_classification: true,
        }
    }

    pub fn has_equipment(&self) -> bool {
        self.has_primary_equipment && self.has_secondary_equipment
    }
}

impl Default for CatalogSchema {
    fn default() -> Self {
        Self::full()
    }
}
