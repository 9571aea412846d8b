//! Domain records and drafts for the four organizer features.
//!
//! # Responsibility
//! - Define record shapes for contacts, reminders, notes and emergency
//!   contacts, plus the id-less draft each form edits.
//! - Declare the per-entity validation schema next to the shape it checks.
//!
//! # Invariants
//! - A record id is a positive integer unique within its store.
//! - A draft never carries an id; ids are assigned by the store on commit.

pub mod contact;
pub mod emergency;
pub mod note;
pub mod record;
pub mod reminder;

use serde::{Deserialize, Deserializer};

/// Deserializes an optional text field, treating blank strings as absent.
///
/// Fixture data uses `""` for "no email", which must not be validated as an
/// email address.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// Maps raw form input for an optional field to its draft value.
pub(crate) fn optional_input(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses a contact selector value. Non-numeric input means "nothing
/// selected" and is reported by the validator, not here.
pub(crate) fn contact_id_input(value: &str) -> record::RecordId {
    value.trim().parse().unwrap_or(0)
}
