use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The two kinds of user the backend knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Physiotherapist / practitioner.
    Clinician,
    /// Views their own records only.
    Patient,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Clinician, Role::Patient];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Clinician => "clinician",
            Role::Patient => "patient",
        }
    }

    /// Backend collection for users of this role (`clinicians`, `patients`).
    pub fn collection(&self) -> &'static str {
        match self {
            Role::Clinician => "clinicians",
            Role::Patient => "patients",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clinician" => Ok(Role::Clinician),
            "patient" => Ok(Role::Patient),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}
