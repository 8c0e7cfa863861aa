//! Zoo Registry
//!
//! Owns every animal and enclosure, and enforces the rules that need both:
//! an animal under treatment is never moved, and only registered entities
//! take part in a move.

use tracing::{debug, info};

use crate::animal::{Animal, Species};
use crate::config::ZooConfig;
use crate::enclosure::Enclosure;
use crate::error::{EntityKind, Result, ZooError};
use crate::event::{EventKind, ZooEvent};

/// The central registry of animals and enclosures
#[derive(Debug, Default)]
pub struct ZooManager {
    /// Registration order is kept for reports
    animals: Vec<Animal>,
    enclosures: Vec<Enclosure>,
    config: ZooConfig,
}

impl ZooManager {
    /// Create an empty registry with default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given rules
    pub fn with_config(config: ZooConfig) -> Self {
        Self {
            animals: Vec::new(),
            enclosures: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &ZooConfig {
        &self.config
    }

    /// All animals, in registration order
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// All enclosures, in construction order
    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    pub fn animal(&self, name: &str) -> Option<&Animal> {
        self.animals.iter().find(|a| a.name() == name)
    }

    pub fn animal_mut(&mut self, name: &str) -> Option<&mut Animal> {
        self.animals.iter_mut().find(|a| a.name() == name)
    }

    pub fn enclosure(&self, name: &str) -> Option<&Enclosure> {
        self.enclosures.iter().find(|e| e.name() == name)
    }

    pub fn enclosure_mut(&mut self, name: &str) -> Option<&mut Enclosure> {
        self.enclosures.iter_mut().find(|e| e.name() == name)
    }

    /// Register a new animal
    pub fn add_animal(&mut self, animal: Animal) -> Result<ZooEvent> {
        if self.animal(animal.name()).is_some() {
            return Err(ZooError::duplicate(EntityKind::Animal, animal.name()));
        }

        info!(animal = animal.name(), species = %animal.species(), "Registered new animal");
        let event = ZooEvent::new(EventKind::AnimalRegistered {
            animal: animal.name().to_string(),
        });
        self.animals.push(animal);
        Ok(event)
    }

    /// Remove an animal from the registry and hand it back with its notice.
    ///
    /// Enclosures keep their handle to it unless `cascade_removal` is on.
    pub fn remove_animal(&mut self, name: &str) -> Result<(Animal, ZooEvent)> {
        let index = self
            .animals
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| ZooError::not_found(EntityKind::Animal, name))?;

        if self.config.registry.cascade_removal {
            for enclosure in self.enclosures.iter_mut().filter(|e| e.contains(name)) {
                enclosure.remove_animal(name)?;
            }
        }

        info!(animal = name, "Removed animal");
        let event = ZooEvent::new(EventKind::AnimalRemoved {
            animal: name.to_string(),
        });
        Ok((self.animals.remove(index), event))
    }

    /// Register a new enclosure
    pub fn add_enclosure(&mut self, enclosure: Enclosure) -> Result<ZooEvent> {
        if self.enclosure(enclosure.name()).is_some() {
            return Err(ZooError::duplicate(EntityKind::Enclosure, enclosure.name()));
        }

        info!(
            enclosure = enclosure.name(),
            environment = enclosure.environment(),
            "Built new enclosure"
        );
        let event = ZooEvent::new(EventKind::EnclosureBuilt {
            enclosure: enclosure.name().to_string(),
        });
        self.enclosures.push(enclosure);
        Ok(event)
    }

    /// Remove an enclosure and hand it back with its notice; its residents
    /// stay registered
    pub fn remove_enclosure(&mut self, name: &str) -> Result<(Enclosure, ZooEvent)> {
        let index = self
            .enclosures
            .iter()
            .position(|e| e.name() == name)
            .ok_or_else(|| ZooError::not_found(EntityKind::Enclosure, name))?;

        info!(enclosure = name, "Removed enclosure");
        let event = ZooEvent::new(EventKind::EnclosureRemoved {
            enclosure: name.to_string(),
        });
        Ok((self.enclosures.remove(index), event))
    }

    /// Move a registered animal into a registered enclosure.
    ///
    /// Health is checked here; species and environment are checked by the
    /// enclosure. An animal already housed elsewhere is not released from
    /// its old enclosure.
    pub fn assign_animal_to_enclosure(
        &mut self,
        animal_name: &str,
        enclosure_name: &str,
    ) -> Result<ZooEvent> {
        let animal = self
            .animals
            .iter()
            .find(|a| a.name() == animal_name)
            .ok_or_else(|| ZooError::not_found(EntityKind::Animal, animal_name))?;
        let enclosure = self
            .enclosures
            .iter_mut()
            .find(|e| e.name() == enclosure_name)
            .ok_or_else(|| ZooError::not_found(EntityKind::Enclosure, enclosure_name))?;

        if animal.is_under_treatment() {
            return Err(ZooError::Safety {
                animal: animal_name.to_string(),
            });
        }

        if self.config.registry.enforce_capacity {
            enclosure.add_animal_within_capacity(animal)?;
        } else {
            enclosure.add_animal(animal)?;
        }

        info!(animal = animal_name, enclosure = enclosure_name, "Moved animal");
        Ok(ZooEvent::new(EventKind::AnimalMoved {
            animal: animal_name.to_string(),
            enclosure: enclosure_name.to_string(),
        }))
    }

    /// Take an animal out of an enclosure without unregistering it
    pub fn release_from_enclosure(
        &mut self,
        animal_name: &str,
        enclosure_name: &str,
    ) -> Result<ZooEvent> {
        let enclosure = self
            .enclosure_mut(enclosure_name)
            .ok_or_else(|| ZooError::not_found(EntityKind::Enclosure, enclosure_name))?;
        enclosure.remove_animal(animal_name)?;

        Ok(ZooEvent::new(EventKind::AnimalReleased {
            animal: animal_name.to_string(),
            enclosure: enclosure_name.to_string(),
        }))
    }

    /// Append a health record to a registered animal
    pub fn record_health_issue(
        &mut self,
        animal_name: &str,
        description: &str,
        date: &str,
        severity: i64,
        treatment: &str,
    ) -> Result<Option<ZooEvent>> {
        let animal = self
            .animal_mut(animal_name)
            .ok_or_else(|| ZooError::not_found(EntityKind::Animal, animal_name))?;
        animal.add_health_issue(description, date, severity, treatment)
    }

    /// Resolve an enclosure's residents. Handles to animals that are no
    /// longer registered are skipped.
    pub fn housed_animals(&self, enclosure_name: &str) -> Result<Vec<&Animal>> {
        let enclosure = self
            .enclosure(enclosure_name)
            .ok_or_else(|| ZooError::not_found(EntityKind::Enclosure, enclosure_name))?;

        Ok(enclosure
            .members()
            .iter()
            .filter_map(|name| self.animal(name))
            .collect())
    }

    /// Enclosures currently holding the named animal
    pub fn locate(&self, animal_name: &str) -> Vec<&Enclosure> {
        self.enclosures
            .iter()
            .filter(|e| e.contains(animal_name))
            .collect()
    }

    /// Names of all animals of one species, in registration order
    pub fn report_by_species(&self, species: Species) -> Vec<String> {
        debug!(%species, "Generating species report");
        self.animals
            .iter()
            .filter(|a| a.species() == species)
            .map(|a| a.name().to_string())
            .collect()
    }

    /// One alert line per health record at or above `min_severity`,
    /// by animal registration order then record order
    pub fn report_by_severity(&self, min_severity: u8) -> Vec<String> {
        debug!(min_severity, "Checking medical logs");
        self.animals
            .iter()
            .flat_map(|animal| {
                animal
                    .health_history()
                    .iter()
                    .filter(move |record| record.severity() >= min_severity)
                    .map(move |record| format!("URGENT: {} - {}", animal.name(), record))
            })
            .collect()
    }

    /// [`ZooManager::report_by_severity`] at the configured threshold
    pub fn medical_alerts(&self) -> Vec<String> {
        self.report_by_severity(self.config.reports.severity_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Mismatch;

    fn zoo_with_leo() -> ZooManager {
        let mut zoo = ZooManager::new();
        zoo.add_animal(Animal::mammal("Leo", 5, "Meat", "Savannah")).unwrap();
        let pen = Enclosure::new("Savannah Pen", 500, "Savannah", 5, Species::Mammal).unwrap();
        zoo.add_enclosure(pen).unwrap();
        zoo
    }

    #[test]
    fn test_add_animal() {
        let zoo = zoo_with_leo();
        assert_eq!(zoo.animals().len(), 1);
        assert_eq!(zoo.animal("Leo").unwrap().species(), Species::Mammal);
    }

    #[test]
    fn test_duplicate_animal_rejected() {
        let mut zoo = zoo_with_leo();
        let err = zoo
            .add_animal(Animal::bird("Leo", 1, "Seeds", "Aviary"))
            .unwrap_err();
        assert!(matches!(err, ZooError::Duplicate { kind: EntityKind::Animal, .. }));
        assert_eq!(zoo.animals().len(), 1);
    }

    #[test]
    fn test_duplicate_enclosure_rejected() {
        let mut zoo = zoo_with_leo();
        let again = Enclosure::new("Savannah Pen", 10, "Desert", 3, Species::Reptile).unwrap();
        assert!(matches!(
            zoo.add_enclosure(again).unwrap_err(),
            ZooError::Duplicate { kind: EntityKind::Enclosure, .. }
        ));
    }

    #[test]
    fn test_assign_unknown_names() {
        let mut zoo = zoo_with_leo();
        assert!(matches!(
            zoo.assign_animal_to_enclosure("Ghost", "Savannah Pen").unwrap_err(),
            ZooError::NotFound { kind: EntityKind::Animal, .. }
        ));
        assert!(matches!(
            zoo.assign_animal_to_enclosure("Leo", "Nowhere").unwrap_err(),
            ZooError::NotFound { kind: EntityKind::Enclosure, .. }
        ));
    }

    #[test]
    fn test_assign_success_emits_transport_notice() {
        let mut zoo = zoo_with_leo();
        let event = zoo.assign_animal_to_enclosure("Leo", "Savannah Pen").unwrap();

        assert_eq!(
            event.kind,
            EventKind::AnimalMoved {
                animal: "Leo".to_string(),
                enclosure: "Savannah Pen".to_string(),
            }
        );
        assert!(zoo.enclosure("Savannah Pen").unwrap().contains("Leo"));
    }

    #[test]
    fn test_treatment_blocks_move() {
        let mut zoo = zoo_with_leo();
        let alert = zoo
            .record_health_issue("Leo", "Flu", "2024-01-01", 5, "Rest")
            .unwrap();
        assert!(alert.is_some());

        let err = zoo.assign_animal_to_enclosure("Leo", "Savannah Pen").unwrap_err();
        assert!(matches!(err, ZooError::Safety { ref animal } if animal == "Leo"));
        assert!(zoo.enclosure("Savannah Pen").unwrap().members().is_empty());
    }

    #[test]
    fn test_health_changes_visible_through_enclosure() {
        let mut zoo = zoo_with_leo();
        zoo.assign_animal_to_enclosure("Leo", "Savannah Pen").unwrap();
        zoo.record_health_issue("Leo", "Limp", "2024-03-01", 4, "Rest").unwrap();

        let residents = zoo.housed_animals("Savannah Pen").unwrap();
        assert_eq!(residents.len(), 1);
        assert!(residents[0].is_under_treatment());
    }

    #[test]
    fn test_remove_animal_without_cascade_leaves_handle() {
        let mut zoo = zoo_with_leo();
        zoo.assign_animal_to_enclosure("Leo", "Savannah Pen").unwrap();

        let (leo, event) = zoo.remove_animal("Leo").unwrap();
        assert_eq!(leo.name(), "Leo");
        assert_eq!(event.to_string(), "[Registry]: Removed animal: Leo");
        assert!(zoo.animal("Leo").is_none());
        assert!(zoo.enclosure("Savannah Pen").unwrap().contains("Leo"));
        assert!(zoo.housed_animals("Savannah Pen").unwrap().is_empty());

        assert!(matches!(
            zoo.remove_animal("Leo").unwrap_err(),
            ZooError::NotFound { .. }
        ));
    }

    #[test]
    fn test_remove_animal_with_cascade() {
        let mut config = ZooConfig::default();
        config.registry.cascade_removal = true;
        let mut zoo = ZooManager::with_config(config);
        zoo.add_animal(Animal::mammal("Leo", 5, "Meat", "Savannah")).unwrap();
        let pen = Enclosure::new("Savannah Pen", 5, "Savannah", 5, Species::Mammal).unwrap();
        zoo.add_enclosure(pen).unwrap();
        zoo.assign_animal_to_enclosure("Leo", "Savannah Pen").unwrap();

        zoo.remove_animal("Leo").unwrap();
        assert!(zoo.locate("Leo").is_empty());
    }

    #[test]
    fn test_remove_enclosure() {
        let mut zoo = zoo_with_leo();
        zoo.assign_animal_to_enclosure("Leo", "Savannah Pen").unwrap();

        let (pen, event) = zoo.remove_enclosure("Savannah Pen").unwrap();
        assert_eq!(pen.members(), ["Leo".to_string()]);
        assert_eq!(
            event.kind,
            EventKind::EnclosureRemoved {
                enclosure: "Savannah Pen".to_string(),
            }
        );

        assert!(zoo.animal("Leo").is_some());
        assert!(zoo.enclosure("Savannah Pen").is_none());
        assert!(zoo.locate("Leo").is_empty());

        assert!(matches!(
            zoo.remove_enclosure("Savannah Pen").unwrap_err(),
            ZooError::NotFound { kind: EntityKind::Enclosure, .. }
        ));
    }

    #[test]
    fn test_capacity_enforced_when_configured() {
        let mut config = ZooConfig::default();
        config.registry.enforce_capacity = true;
        let mut zoo = ZooManager::with_config(config);
        zoo.add_animal(Animal::mammal("Leo", 5, "Meat", "Savannah")).unwrap();
        zoo.add_animal(Animal::mammal("Nala", 4, "Meat", "Savannah")).unwrap();
        zoo.add_enclosure(Enclosure::new("Tiny Pen", 1, "Savannah", 5, Species::Mammal).unwrap())
            .unwrap();

        zoo.assign_animal_to_enclosure("Leo", "Tiny Pen").unwrap();
        let err = zoo.assign_animal_to_enclosure("Nala", "Tiny Pen").unwrap_err();
        assert!(matches!(err, ZooError::Incompatible(Mismatch::Capacity { .. })));
    }

    #[test]
    fn test_move_keeps_previous_enclosure() {
        let mut zoo = zoo_with_leo();
        zoo.add_enclosure(Enclosure::new("Second Pen", 5, "Savannah", 8, Species::Mammal).unwrap())
            .unwrap();
        zoo.assign_animal_to_enclosure("Leo", "Savannah Pen").unwrap();
        zoo.assign_animal_to_enclosure("Leo", "Second Pen").unwrap();
        assert_eq!(zoo.locate("Leo").len(), 2);

        zoo.release_from_enclosure("Leo", "Savannah Pen").unwrap();
        let homes: Vec<_> = zoo.locate("Leo").iter().map(|e| e.name()).collect();
        assert_eq!(homes, vec!["Second Pen"]);
    }

    #[test]
    fn test_report_by_species_keeps_registration_order() {
        let mut zoo = ZooManager::new();
        zoo.add_animal(Animal::mammal("Leo", 5, "Meat", "Savannah")).unwrap();
        zoo.add_animal(Animal::bird("Waddles", 2, "Fish", "Aquatic")).unwrap();
        zoo.add_animal(Animal::mammal("Moby", 10, "Plankton", "Aquatic")).unwrap();

        assert_eq!(zoo.report_by_species(Species::Mammal), vec!["Leo", "Moby"]);
        assert!(zoo.report_by_species(Species::Reptile).is_empty());
    }

    #[test]
    fn test_report_by_severity_order() {
        let mut zoo = ZooManager::new();
        zoo.add_animal(Animal::mammal("Leo", 5, "Meat", "Savannah")).unwrap();
        zoo.add_animal(Animal::bird("Waddles", 2, "Fish", "Aquatic")).unwrap();
        zoo.record_health_issue("Waddles", "Wing Sprain", "2024-02-01", 9, "Splint").unwrap();
        zoo.record_health_issue("Leo", "Broken Tooth", "2024-11-24", 8, "Surgery").unwrap();
        zoo.record_health_issue("Leo", "Scratch", "2024-11-25", 3, "none").unwrap();
        zoo.record_health_issue("Leo", "Fever", "2024-11-26", 7, "Rest").unwrap();

        assert_eq!(
            zoo.medical_alerts(),
            vec![
                "URGENT: Leo - Issue: Broken Tooth (Severity: 8, Treatment: Surgery)",
                "URGENT: Leo - Issue: Fever (Severity: 7, Treatment: Rest)",
                "URGENT: Waddles - Issue: Wing Sprain (Severity: 9, Treatment: Splint)",
            ]
        );
    }
}
