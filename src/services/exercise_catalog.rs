use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::{PlannerError, Result};
use crate::models::{CatalogSchema, ExerciseRow};

pub const COLUMN_EXERCISE: &str = "Exercise";
pub const COLUMN_DIFFICULTY: &str = "Difficulty Level";
pub const COLUMN_PRIMARY_EQUIPMENT: &str = "Primary Equipment";
pub const COLUMN_SECONDARY_EQUIPMENT: &str = "Secondary Equipment";
pub const COLUMN_TARGET_MUSCLE_GROUP: &str = "Target Muscle Group";
pub const COLUMN_PRIME_MOVER_MUSCLE: &str = "Prime Mover Muscle";
pub const COLUMN_CLASSIFICATION: &str = "Primary Exercise Classification";

/// Read-only exercise table, loaded once at startup and shared by reference.
///
/// Filtering never touches the catalog itself: every stage works on a
/// [`CatalogView`] of borrowed rows.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    schema: CatalogSchema,
    rows: Vec<ExerciseRow>,
}

/// Column positions resolved from the CSV header
struct ColumnIndex {
    exercise: usize,
    difficulty: Option<usize>,
    primary_equipment: Option<usize>,
    secondary_equipment: Option<usize>,
    target_muscle_group: Option<usize>,
    prime_mover_muscle: Option<usize>,
    classification: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|header| header == name);

        let exercise = find(COLUMN_EXERCISE).ok_or_else(|| {
            PlannerError::DataLoad(format!("catalog is missing the '{}' column", COLUMN_EXERCISE))
        })?;

        Ok(Self {
            exercise,
            difficulty: find(COLUMN_DIFFICULTY),
            primary_equipment: find(COLUMN_PRIMARY_EQUIPMENT),
            secondary_equipment: find(COLUMN_SECONDARY_EQUIPMENT),
            target_muscle_group: find(COLUMN_TARGET_MUSCLE_GROUP),
            prime_mover_muscle: find(COLUMN_PRIME_MOVER_MUSCLE),
            classification: find(COLUMN_CLASSIFICATION),
        })
    }

    fn schema(&self) -> CatalogSchema {
        CatalogSchema {
            has_difficulty: self.difficulty.is_some(),
            has_primary_equipment: self.primary_equipment.is_some(),
            has_secondary_equipment: self.secondary_equipment.is_some(),
            has_target_muscle_group: self.target_muscle_group.is_some(),
            has_prime_mover_muscle: self.prime_mover_muscle.is_some(),
            has_classification: self.classification.is_some(),
        }
    }

    fn row(&self, record: &StringRecord) -> ExerciseRow {
        let field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };

        ExerciseRow {
            name: record.get(self.exercise).unwrap_or_default().to_string(),
            difficulty: self
                .difficulty
                .and_then(|i| record.get(i))
                .and_then(|value| value.parse().ok()),
            primary_equipment: field(self.primary_equipment),
            secondary_equipment: field(self.secondary_equipment),
            target_muscle_group: field(self.target_muscle_group),
            prime_mover_muscle: field(self.prime_mover_muscle),
            classification: field(self.classification),
        }
    }
}

impl ExerciseCatalog {
    /// Load the catalog from a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PlannerError::DataLoad(format!("cannot open catalog {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_reader(file)?;
        info!(
            "Loaded {} exercises from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// Parse a catalog from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;
        let schema = columns.schema();

        let mut rows = Vec::new();
        for (line, record) in csv_reader.records().enumerate() {
            let row = columns.row(&record?);
            if row.name.is_empty() {
                warn!("Skipping catalog row {} without an exercise name", line + 2);
                continue;
            }
            rows.push(row);
        }

        Self::from_rows(schema, rows)
    }

    /// Build a catalog from rows already in memory
    pub fn from_rows(schema: CatalogSchema, rows: Vec<ExerciseRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(PlannerError::DataLoad("catalog contains no exercises".to_string()));
        }

        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> CatalogSchema {
        self.schema
    }

    pub fn rows(&self) -> &[ExerciseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Unfiltered view over every row
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            schema: self.schema,
            rows: self.rows.iter().collect(),
        }
    }
}

/// Derived, borrowed subset of the catalog. Row order follows the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    schema: CatalogSchema,
    rows: Vec<&'a ExerciseRow>,
}

impl<'a> CatalogView<'a> {
    pub fn new(schema: CatalogSchema, rows: Vec<&'a ExerciseRow>) -> Self {
        Self { schema, rows }
    }

    pub fn schema(&self) -> CatalogSchema {
        self.schema
    }

    pub fn rows(&self) -> &[&'a ExerciseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// New view holding only the rows that satisfy `predicate`
    pub fn filter<P>(&self, mut predicate: P) -> CatalogView<'a>
    where
        P: FnMut(&ExerciseRow) -> bool,
    {
        CatalogView {
            schema: self.schema,
            rows: self.rows.iter().copied().filter(|row| predicate(row)).collect(),
        }
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.rows.iter().map(|row| row.name.as_str()).collect()
    }
}
