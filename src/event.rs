//! Notices produced by registry mutations
//!
//! Mutating operations hand these back to the caller instead of printing,
//! so the caller decides whether to show, log or drop them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// What happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    AnimalRegistered { animal: String },
    AnimalRemoved { animal: String },
    EnclosureBuilt { enclosure: String },
    EnclosureRemoved { enclosure: String },
    AnimalMoved { animal: String, enclosure: String },
    AnimalReleased { animal: String, enclosure: String },
    HealthAlert { animal: String, treatment: String },
}

/// A timestamped notice
#[derive(Debug, Clone, Serialize)]
pub struct ZooEvent {
    pub kind: EventKind,
    pub at: DateTime<Utc>,
}

impl ZooEvent {
    pub fn new(kind: EventKind) -> Self {
        Self { kind, at: Utc::now() }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::AnimalRegistered { animal } => {
                write!(f, "[Registry]: Registered new animal: {}", animal)
            }
            EventKind::AnimalRemoved { animal } => {
                write!(f, "[Registry]: Removed animal: {}", animal)
            }
            EventKind::EnclosureBuilt { enclosure } => {
                write!(f, "[Construction]: Built new enclosure: {}", enclosure)
            }
            EventKind::EnclosureRemoved { enclosure } => {
                write!(f, "[Construction]: Demolished enclosure: {}", enclosure)
            }
            EventKind::AnimalMoved { animal, enclosure } => {
                write!(f, "[Transport]: Successfully moved {} to {}.", animal, enclosure)
            }
            EventKind::AnimalReleased { animal, enclosure } => {
                write!(f, "[Transport]: Released {} from {}.", animal, enclosure)
            }
            EventKind::HealthAlert { animal, treatment } => {
                write!(f, "[Alert]: {} requires treatment: {}", animal, treatment)
            }
        }
    }
}

impl fmt::Display for ZooEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_notice() {
        let event = ZooEvent::new(EventKind::AnimalMoved {
            animal: "Leo".to_string(),
            enclosure: "Savannah Zone".to_string(),
        });
        assert_eq!(
            event.to_string(),
            "[Transport]: Successfully moved Leo to Savannah Zone."
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let event = ZooEvent::new(EventKind::EnclosureBuilt {
            enclosure: "Aquatic Center".to_string(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"]["type"], "enclosure_built");
        assert_eq!(json["kind"]["enclosure"], "Aquatic Center");
    }
}
