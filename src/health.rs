//! Health records attached to animals

use std::fmt;

use crate::error::{Result, ZooError};

/// Treatment value meaning "nothing prescribed"
pub const NO_TREATMENT: &str = "none";

/// Lowest valid severity
pub const MIN_SEVERITY: u8 = 1;
/// Highest valid severity
pub const MAX_SEVERITY: u8 = 10;

/// One medical event in an animal's history. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthRecord {
    description: String,
    /// Calendar date as given by the caller; never parsed
    date: String,
    severity: u8,
    treatment: String,
}

impl HealthRecord {
    /// Create a record, rejecting severities outside 1..=10
    pub fn new(
        description: impl Into<String>,
        date: impl Into<String>,
        severity: i64,
        treatment: impl Into<String>,
    ) -> Result<Self> {
        if !(MIN_SEVERITY as i64..=MAX_SEVERITY as i64).contains(&severity) {
            return Err(ZooError::Validation {
                field: "severity",
                value: severity,
            });
        }

        Ok(Self {
            description: description.into(),
            date: date.into(),
            severity: severity as u8,
            treatment: treatment.into(),
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn severity(&self) -> u8 {
        self.severity
    }

    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    /// True when the treatment is anything other than "none" (any case)
    pub fn requires_treatment(&self) -> bool {
        !self.treatment.eq_ignore_ascii_case(NO_TREATMENT)
    }
}

impl fmt::Display for HealthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Issue: {} (Severity: {}, Treatment: {})",
            self.description, self.severity, self.treatment
        )
    }
}
