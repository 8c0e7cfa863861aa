//! Declarative rosters
//!
//! A roster lists animals, health issues, enclosures and moves. Applying it
//! runs each step against a [`ZooManager`] in order and records what
//! happened; a failed step is reported and the run carries on.
//!
//! ```json
//! {
//!   "animals": [
//!     { "species": "mammal", "name": "Leo", "age": 5, "diet": "Meat", "environment": "Savannah" }
//!   ],
//!   "enclosures": [
//!     { "name": "Savannah Zone", "capacity": 500, "environment": "Savannah",
//!       "cleanliness": 10, "species": "mammal" }
//!   ],
//!   "health_issues": [
//!     { "animal": "Leo", "description": "Broken Tooth", "date": "2024-11-24",
//!       "severity": 8, "treatment": "Surgery" }
//!   ],
//!   "assignments": [ { "animal": "Leo", "enclosure": "Savannah Zone" } ]
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use tracing::warn;

use crate::animal::{Animal, Species};
use crate::enclosure::Enclosure;
use crate::error::Result;
use crate::event::ZooEvent;
use crate::registry::ZooManager;

#[derive(Debug, Clone, Deserialize)]
pub struct AnimalEntry {
    pub species: Species,
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub diet: String,
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnclosureEntry {
    pub name: String,
    pub capacity: u32,
    pub environment: String,
    pub cleanliness: i64,
    pub species: Species,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthIssueEntry {
    pub animal: String,
    pub description: String,
    pub date: String,
    pub severity: i64,
    #[serde(default = "default_treatment")]
    pub treatment: String,
}

fn default_treatment() -> String {
    crate::health::NO_TREATMENT.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentEntry {
    pub animal: String,
    pub enclosure: String,
}

/// A full roster document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub animals: Vec<AnimalEntry>,
    #[serde(default)]
    pub enclosures: Vec<EnclosureEntry>,
    /// Recorded after registration and before any move
    #[serde(default)]
    pub health_issues: Vec<HealthIssueEntry>,
    #[serde(default)]
    pub assignments: Vec<AssignmentEntry>,
}

/// Outcome of one roster step
#[derive(Debug)]
pub struct StepOutcome {
    /// Human-readable description of the step
    pub step: String,
    pub result: Result<Option<ZooEvent>>,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Number of steps that did not succeed
pub fn count_failures(outcomes: &[StepOutcome]) -> usize {
    outcomes.iter().filter(|o| !o.is_ok()).count()
}

impl Roster {
    /// Parse a roster from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a roster file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Apply every step to `zoo`: animals, enclosures, health issues, then moves
    pub fn apply(&self, zoo: &mut ZooManager) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();

        for entry in &self.animals {
            let animal = Animal::new(
                entry.species,
                entry.name.clone(),
                entry.age,
                entry.diet.clone(),
                entry.environment.clone(),
            );
            outcomes.push(StepOutcome {
                step: format!("register {} {}", entry.species, entry.name),
                result: zoo.add_animal(animal).map(Some),
            });
        }

        for entry in &self.enclosures {
            let result = Enclosure::new(
                entry.name.clone(),
                entry.capacity,
                entry.environment.clone(),
                entry.cleanliness,
                entry.species,
            )
            .and_then(|enclosure| zoo.add_enclosure(enclosure))
            .map(Some);
            outcomes.push(StepOutcome {
                step: format!("build {}", entry.name),
                result,
            });
        }

        for entry in &self.health_issues {
            outcomes.push(StepOutcome {
                step: format!("record '{}' for {}", entry.description, entry.animal),
                result: zoo.record_health_issue(
                    &entry.animal,
                    &entry.description,
                    &entry.date,
                    entry.severity,
                    &entry.treatment,
                ),
            });
        }

        for entry in &self.assignments {
            outcomes.push(StepOutcome {
                step: format!("move {} to {}", entry.animal, entry.enclosure),
                result: zoo
                    .assign_animal_to_enclosure(&entry.animal, &entry.enclosure)
                    .map(Some),
            });
        }

        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                warn!(step = %outcome.step, error = %e, "Roster step failed");
            }
        }

        outcomes
    }
}
