//! Enclosures and their admission rules

use tracing::debug;

use crate::animal::{Animal, Species};
use crate::error::{EntityKind, Mismatch, Result, ZooError};

/// Lowest valid cleanliness
pub const MIN_CLEANLINESS: u8 = 1;
/// Highest valid cleanliness, restored by [`Enclosure::clean`]
pub const MAX_CLEANLINESS: u8 = 10;

/// A named habitat for one species in one environment.
///
/// Members are held as animal names; the registry owns the animals and
/// resolves these handles, so health changes made through the registry are
/// visible to anyone looking up an enclosure's residents.
///
/// Species and environment are checked on admission only. Changing an
/// animal after it moved in does not evict it.
#[derive(Debug, Clone)]
pub struct Enclosure {
    name: String,
    capacity: u32,
    environment: String,
    cleanliness: u8,
    allowed_species: Species,
    /// Admission order is kept for reporting
    members: Vec<String>,
}

impl Enclosure {
    /// Create an enclosure, rejecting cleanliness outside 1..=10
    pub fn new(
        name: impl Into<String>,
        capacity: u32,
        environment: impl Into<String>,
        cleanliness: i64,
        allowed_species: Species,
    ) -> Result<Self> {
        if !(MIN_CLEANLINESS as i64..=MAX_CLEANLINESS as i64).contains(&cleanliness) {
            return Err(ZooError::Validation {
                field: "cleanliness",
                value: cleanliness,
            });
        }

        Ok(Self {
            name: name.into(),
            capacity,
            environment: environment.into(),
            cleanliness: cleanliness as u8,
            allowed_species,
            members: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn cleanliness(&self) -> u8 {
        self.cleanliness
    }

    pub fn allowed_species(&self) -> Species {
        self.allowed_species
    }

    /// Names of housed animals, in admission order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, animal: &str) -> bool {
        self.members.iter().any(|m| m == animal)
    }

    pub fn occupancy(&self) -> usize {
        self.members.len()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity as usize
    }

    /// Admit an animal after checking species, then environment.
    ///
    /// Capacity is not considered here. Re-admitting a name that is already
    /// housed leaves a single entry.
    pub fn add_animal(&mut self, animal: &Animal) -> Result<()> {
        self.check_compatibility(animal)?;
        self.insert(animal.name());
        Ok(())
    }

    /// Like [`Enclosure::add_animal`], but also refuses a new resident once
    /// the enclosure is full.
    pub fn add_animal_within_capacity(&mut self, animal: &Animal) -> Result<()> {
        self.check_compatibility(animal)?;
        if self.is_full() && !self.contains(animal.name()) {
            return Err(Mismatch::Capacity {
                capacity: self.capacity,
            }
            .into());
        }
        self.insert(animal.name());
        Ok(())
    }

    /// Remove a resident, returning its name
    pub fn remove_animal(&mut self, name: &str) -> Result<String> {
        let index = self
            .members
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| ZooError::not_found(EntityKind::Animal, name))?;

        debug!(enclosure = %self.name, animal = name, "Removed resident");
        Ok(self.members.remove(index))
    }

    /// Reset cleanliness to the maximum
    pub fn clean(&mut self) {
        self.cleanliness = MAX_CLEANLINESS;
        debug!(enclosure = %self.name, "Cleaned");
    }

    /// Lower cleanliness by `amount`, never below the minimum
    pub fn soil(&mut self, amount: u8) {
        self.cleanliness = self.cleanliness.saturating_sub(amount).max(MIN_CLEANLINESS);
        debug!(enclosure = %self.name, cleanliness = self.cleanliness, "Soiled");
    }

    /// Multi-line summary of the enclosure
    pub fn report_status(&self) -> String {
        let residents = if self.members.is_empty() {
            "None".to_string()
        } else {
            self.members.join(", ")
        };

        format!(
            "Enclosure: {}\nEnvironment: {}\nCleanliness: {}/{}\nAnimals: {}",
            self.name, self.environment, self.cleanliness, MAX_CLEANLINESS, residents
        )
    }

    fn check_compatibility(&self, animal: &Animal) -> Result<()> {
        if animal.species() != self.allowed_species {
            return Err(Mismatch::Species {
                expected: self.allowed_species.to_string(),
                actual: animal.species().to_string(),
            }
            .into());
        }

        if animal.environment() != self.environment {
            return Err(Mismatch::Environment {
                expected: self.environment.clone(),
                actual: animal.environment().to_string(),
            }
            .into());
        }

        Ok(())
    }

    fn insert(&mut self, name: &str) {
        if !self.contains(name) {
            self.members.push(name.to_string());
        }
        debug!(enclosure = %self.name, animal = name, "Admitted resident");
    }
}
