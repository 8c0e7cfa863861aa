//! Animals and their species-specific behaviour

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::Result;
use crate::event::{EventKind, ZooEvent};
use crate::health::HealthRecord;

/// The fixed set of animal kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Mammal,
    Bird,
    Reptile,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Mammal, Species::Bird, Species::Reptile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Mammal => "Mammal",
            Species::Bird => "Bird",
            Species::Reptile => "Reptile",
        }
    }

    pub fn cry(&self) -> &'static str {
        match self {
            Species::Mammal => "ROAR!",
            Species::Bird => "CAW! CAW!",
            Species::Reptile => "Hissing softly.",
        }
    }

    pub fn eat(&self) -> &'static str {
        match self {
            Species::Mammal => "Chewing...",
            Species::Bird => "Pecking grain.",
            Species::Reptile => "Swallowing prey whole.",
        }
    }

    pub fn sleep(&self) -> &'static str {
        match self {
            Species::Mammal => "Curled up and resting.",
            Species::Bird => "Perched and sleeping.",
            Species::Reptile => "Basking under heat lamp.",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown species '{}' (expected mammal, bird or reptile)", s))
    }
}

/// Derived health state of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    UnderTreatment,
}

/// A single animal. The name is fixed at construction; the health history
/// only ever grows through [`Animal::add_health_issue`].
#[derive(Debug, Clone)]
pub struct Animal {
    name: String,
    age: u32,
    dietary_needs: String,
    environment: String,
    species: Species,
    health_history: Vec<HealthRecord>,
}

impl Animal {
    pub fn new(
        species: Species,
        name: impl Into<String>,
        age: u32,
        dietary_needs: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            dietary_needs: dietary_needs.into(),
            environment: environment.into(),
            species,
            health_history: Vec::new(),
        }
    }

    pub fn mammal(
        name: impl Into<String>,
        age: u32,
        diet: impl Into<String>,
        env: impl Into<String>,
    ) -> Self {
        Self::new(Species::Mammal, name, age, diet, env)
    }

    pub fn bird(
        name: impl Into<String>,
        age: u32,
        diet: impl Into<String>,
        env: impl Into<String>,
    ) -> Self {
        Self::new(Species::Bird, name, age, diet, env)
    }

    pub fn reptile(
        name: impl Into<String>,
        age: u32,
        diet: impl Into<String>,
        env: impl Into<String>,
    ) -> Self {
        Self::new(Species::Reptile, name, age, diet, env)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn dietary_needs(&self) -> &str {
        &self.dietary_needs
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// Read-only view of the health history, oldest first
    pub fn health_history(&self) -> &[HealthRecord] {
        &self.health_history
    }

    pub fn cry(&self) -> &'static str {
        self.species.cry()
    }

    pub fn eat(&self) -> &'static str {
        self.species.eat()
    }

    pub fn sleep(&self) -> &'static str {
        self.species.sleep()
    }

    /// Append a health record.
    ///
    /// Returns a health alert when the record prescribes a treatment.
    /// Nothing is appended if the record fails validation.
    pub fn add_health_issue(
        &mut self,
        description: impl Into<String>,
        date: impl Into<String>,
        severity: i64,
        treatment: impl Into<String>,
    ) -> Result<Option<ZooEvent>> {
        let record = HealthRecord::new(description, date, severity, treatment)?;

        let alert = record.requires_treatment().then(|| {
            warn!(animal = %self.name, treatment = record.treatment(), "Animal requires treatment");
            ZooEvent::new(EventKind::HealthAlert {
                animal: self.name.clone(),
                treatment: record.treatment().to_string(),
            })
        });

        debug!(animal = %self.name, severity = record.severity(), "Recorded health issue");
        self.health_history.push(record);
        Ok(alert)
    }

    pub fn is_under_treatment(&self) -> bool {
        self.health_history.iter().any(HealthRecord::requires_treatment)
    }

    pub fn health_status(&self) -> HealthStatus {
        if self.is_under_treatment() {
            HealthStatus::UnderTreatment
        } else {
            HealthStatus::Healthy
        }
    }
}
