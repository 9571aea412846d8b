//! Organizer configuration.
//!
//! # Invariants
//! - Every field has a default, so a partial or empty JSON object is valid.
//! - Unknown keys are rejected to surface typos early.

use crate::store::IdPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// What deleting a contact does to reminders and notes that reference it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactDeletePolicy {
    /// Delete only the contact; references are left dangling.
    #[default]
    Keep,
    /// Also delete reminders and notes that reference the contact.
    Cascade,
    /// Refuse to delete a contact that is still referenced.
    Restrict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrganizerConfig {
    pub id_policy: IdPolicy,
    pub contact_delete_policy: ContactDeletePolicy,
    /// Start stores with the built-in demo records instead of empty.
    pub seed_fixtures: bool,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::Monotonic,
            contact_delete_policy: ContactDeletePolicy::Keep,
            seed_fixtures: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl OrganizerConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::Parse)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
