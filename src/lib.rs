//! Zoo Registry
//!
//! An in-memory registry for a small zoo: animals with health histories,
//! enclosures that only admit compatible animals, and a manager that owns
//! both and decides who may move where.
//!
//! ## Rules
//!
//! - **Health records**: severity must be within 1..=10
//! - **Enclosures**: cleanliness must be within 1..=10; admission requires a
//!   matching species and environment
//! - **Moves**: an animal with any prescribed treatment cannot be moved
//! - **Names**: animal and enclosure names are unique within a registry
//!
//! ## Example
//!
//! ```
//! use zoo_registry::{Animal, Enclosure, Species, ZooManager};
//!
//! let mut zoo = ZooManager::new();
//! zoo.add_animal(Animal::mammal("Leo", 5, "Meat", "Savannah")).unwrap();
//! let zone = Enclosure::new("Savannah Zone", 500, "Savannah", 10, Species::Mammal).unwrap();
//! zoo.add_enclosure(zone).unwrap();
//!
//! zoo.assign_animal_to_enclosure("Leo", "Savannah Zone").unwrap();
//! assert!(zoo.enclosure("Savannah Zone").unwrap().contains("Leo"));
//! ```

pub mod animal;
pub mod config;
pub mod enclosure;
pub mod error;
pub mod event;
pub mod health;
pub mod registry;
pub mod roster;

pub use animal::{Animal, HealthStatus, Species};
pub use config::ZooConfig;
pub use enclosure::Enclosure;
pub use error::{EntityKind, Mismatch, Result, ZooError};
pub use event::{EventKind, ZooEvent};
pub use health::HealthRecord;
pub use registry::ZooManager;
pub use roster::Roster;
