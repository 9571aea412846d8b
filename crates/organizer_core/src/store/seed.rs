//! Initial data sources for entity stores.
//!
//! # Responsibility
//! - Abstract where a store's first records come from, so persistence can be
//!   swapped in without touching forms or validators.
//! - Provide the built-in fixture data and a JSON loader.

use crate::model::contact::Contact;
use crate::model::emergency::EmergencyContact;
use crate::model::note::Note;
use crate::model::reminder::Reminder;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Failure to produce seed records.
#[derive(Debug)]
pub enum SeedError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed data: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Supplies the records a store starts with.
pub trait SeedSource<R> {
    fn load(&self) -> Result<Vec<R>, SeedError>;

    /// Short label used in log events.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Starts a store with no records.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySeed;

impl<R> SeedSource<R> for EmptySeed {
    fn load(&self) -> Result<Vec<R>, SeedError> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "empty"
    }
}

/// JSON array of records, held in memory.
#[derive(Debug, Clone)]
pub struct JsonSeed {
    text: String,
}

impl JsonSeed {
    pub fn from_json(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads the whole file eagerly; parsing happens on `load`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { text })
    }
}

impl<R: DeserializeOwned> SeedSource<R> for JsonSeed {
    fn load(&self) -> Result<Vec<R>, SeedError> {
        Ok(serde_json::from_str(&self.text)?)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// Built-in demo data the dashboard ships with.
///
/// Contact ids 1..=3 are the targets of the fixture notes and reminders.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSeed;

impl SeedSource<Contact> for FixtureSeed {
    fn load(&self) -> Result<Vec<Contact>, SeedError> {
        Ok(vec![
            fixture_contact(
                1,
                "John Doe",
                "9806053511",
                Some("john@example.com"),
                "Brother",
                "Sample note",
            ),
            fixture_contact(2, "Jane Doe", "9806053522", None, "Sister", "Another note"),
            fixture_contact(3, "Bob Smith", "9806053533", None, "Friend", "Friend note"),
        ])
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

impl SeedSource<Reminder> for FixtureSeed {
    fn load(&self) -> Result<Vec<Reminder>, SeedError> {
        Ok(vec![
            fixture_reminder(1, 1, "Sample reminder 1", "2026-05-10"),
            fixture_reminder(2, 2, "Sample reminder 2", "2026-05-20"),
            fixture_reminder(3, 3, "Sample reminder 3", "2026-05-30"),
            fixture_reminder(4, 1, "Sample reminder 4", "2026-06-29"),
        ])
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

impl SeedSource<Note> for FixtureSeed {
    fn load(&self) -> Result<Vec<Note>, SeedError> {
        Ok(vec![
            fixture_note(1, 1, "Follow up on project."),
            fixture_note(2, 2, "Send meeting agenda."),
            fixture_note(3, 3, "Call regarding invoice."),
        ])
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

impl SeedSource<EmergencyContact> for FixtureSeed {
    fn load(&self) -> Result<Vec<EmergencyContact>, SeedError> {
        Ok((1..=4)
            .map(|id| EmergencyContact {
                id,
                name: format!("Example {id}"),
                phone: format!("98060535{id}{id}"),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

fn fixture_contact(
    id: u32,
    name: &str,
    phone: &str,
    email: Option<&str>,
    relationship: &str,
    note: &str,
) -> Contact {
    Contact {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.map(str::to_string),
        relationship: relationship.to_string(),
        note: Some(note.to_string()),
    }
}

fn fixture_reminder(id: u32, contact_id: u32, title: &str, date: &str) -> Reminder {
    Reminder {
        id,
        contact_id,
        title: title.to_string(),
        date: date.to_string(),
        time: "09:00".to_string(),
        kind: "Other".to_string(),
    }
}

fn fixture_note(id: u32, contact_id: u32, description: &str) -> Note {
    Note {
        id,
        contact_id,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{FixtureSeed, JsonSeed, SeedError, SeedSource};
    use crate::model::emergency::EmergencyContact;
    use crate::model::note::Note;

    #[test]
    fn fixture_emergency_numbers_match_dashboard_data() {
        let records: Vec<EmergencyContact> = FixtureSeed.load().unwrap();
        let phones: Vec<&str> = records.iter().map(|r| r.phone.as_str()).collect();
        assert_eq!(
            phones,
            vec!["9806053511", "9806053522", "9806053533", "9806053544"]
        );
    }

    #[test]
    fn json_seed_parses_camel_case_records() {
        let seed = JsonSeed::from_json(r#"[{"id": 7, "contactId": 2, "description": "hi"}]"#);
        let notes: Vec<Note> = seed.load().unwrap();
        assert_eq!(notes[0].id, 7);
        assert_eq!(notes[0].contact_id, 2);
    }

    #[test]
    fn json_seed_reports_parse_errors() {
        let seed = JsonSeed::from_json("[{]");
        let err = SeedSource::<Note>::load(&seed).unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }
}
