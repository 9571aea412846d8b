//! Shared record/draft contracts.

use crate::validation::Schema;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Store-local record identifier. `0` is never a valid id.
pub type RecordId = u32;

/// Feature a record or draft belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Contact,
    Reminder,
    Note,
    EmergencyContact,
}

impl EntityKind {
    /// Stable lowercase name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Reminder => "reminder",
            Self::Note => "note",
            Self::EmergencyContact => "emergency_contact",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a form change names a field the draft does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField {
    pub kind: EntityKind,
    pub field: String,
}

impl Display for UnknownField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} field: `{}`", self.kind, self.field)
    }
}

impl Error for UnknownField {}

/// In-progress, id-less edit state of a record.
pub trait Draft: Clone + Default + PartialEq + Debug + 'static {
    /// Feature this draft belongs to.
    const KIND: EntityKind;

    /// Canonical field names in form order. Error keys are always drawn from
    /// this list.
    const FIELDS: &'static [&'static str];

    /// Writes raw form input into one field.
    ///
    /// Returns the canonical field name that was written, which may differ
    /// from `field` when an alias was used.
    fn set_field(&mut self, field: &str, value: &str) -> Result<&'static str, UnknownField>;

    /// Declarative rule set checked on submit.
    fn schema() -> &'static Schema<Self>;
}

/// Committed record held by an entity store.
pub trait Record: Clone + Debug {
    type Draft: Draft;

    fn id(&self) -> RecordId;

    /// Builds a record from a validated draft and a store-assigned id.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Copies the record's editable fields into a fresh draft.
    fn to_draft(&self) -> Self::Draft;

    fn kind() -> EntityKind {
        <Self::Draft as Draft>::KIND
    }
}

pub(crate) fn unknown_field(kind: EntityKind, field: &str) -> UnknownField {
    UnknownField {
        kind,
        field: field.to_string(),
    }
}
