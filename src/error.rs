//! Error types for the zoo registry

use std::fmt;

use thiserror::Error;

/// Result type for zoo operations
pub type Result<T> = std::result::Result<T, ZooError>;

/// What kind of registered entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Animal,
    Enclosure,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Animal => write!(f, "animal"),
            EntityKind::Enclosure => write!(f, "enclosure"),
        }
    }
}

/// Reason an enclosure refused to admit an animal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    #[error("species mismatch: enclosure houses {expected}, got {actual}")]
    Species { expected: String, actual: String },

    #[error("environment mismatch: enclosure is {expected}, animal needs {actual}")]
    Environment { expected: String, actual: String },

    #[error("capacity reached: enclosure holds at most {capacity}")]
    Capacity { capacity: u32 },
}

/// Zoo registry errors
#[derive(Error, Debug)]
pub enum ZooError {
    #[error("Invalid {field}: {value} is outside 1..=10")]
    Validation { field: &'static str, value: i64 },

    #[error("The {kind} {name} is already registered")]
    Duplicate { kind: EntityKind, name: String },

    #[error("Could not find {kind} {name}")]
    NotFound { kind: EntityKind, name: String },

    #[error("Cannot admit animal: {0}")]
    Incompatible(#[from] Mismatch),

    #[error("Cannot move {animal}: currently under treatment")]
    Safety { animal: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ZooError {
    pub(crate) fn not_found(kind: EntityKind, name: &str) -> Self {
        ZooError::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn duplicate(kind: EntityKind, name: &str) -> Self {
        ZooError::Duplicate {
            kind,
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_messages() {
        let species = ZooError::from(Mismatch::Species {
            expected: "Mammal".to_string(),
            actual: "Bird".to_string(),
        });
        assert!(species.to_string().contains("species mismatch"));

        let env = ZooError::from(Mismatch::Environment {
            expected: "Savannah".to_string(),
            actual: "Aquatic".to_string(),
        });
        assert!(env.to_string().contains("environment mismatch"));
    }

    #[test]
    fn test_not_found_names_entity() {
        let err = ZooError::not_found(EntityKind::Enclosure, "Dry Pen");
        assert_eq!(err.to_string(), "Could not find enclosure Dry Pen");
    }
}
