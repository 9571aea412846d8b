//! Emergency contact list entries.
//!
//! # Invariants
//! - The number is at least 10 characters and ASCII digits only.
//! - The form field is `number`; `phone` is accepted as an alias because the
//!   record stores the value as `phone`.

use crate::model::record::{unknown_field, Draft, EntityKind, Record, RecordId, UnknownField};
use crate::validation::rules::{has_min_chars, is_numeric, is_present};
use crate::validation::{Rule, Schema, ValidationContext};
use serde::{Deserialize, Serialize};

/// Minimum accepted phone number length.
pub const MIN_NUMBER_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmergencyContactDraft {
    pub name: String,
    pub number: String,
}

static EMERGENCY_SCHEMA: Schema<EmergencyContactDraft> = Schema::new(&[
    Rule {
        field: "name",
        message: "Name is required",
        check: name_present,
    },
    Rule {
        field: "number",
        message: "Number must be at least 10 digits",
        check: number_long_enough,
    },
    Rule {
        field: "number",
        message: "Number must be numeric",
        check: number_numeric,
    },
]);

fn name_present(draft: &EmergencyContactDraft, _: &ValidationContext) -> bool {
    is_present(&draft.name)
}

fn number_long_enough(draft: &EmergencyContactDraft, _: &ValidationContext) -> bool {
    has_min_chars(&draft.number, MIN_NUMBER_LEN)
}

fn number_numeric(draft: &EmergencyContactDraft, _: &ValidationContext) -> bool {
    is_numeric(&draft.number)
}

impl Draft for EmergencyContactDraft {
    const KIND: EntityKind = EntityKind::EmergencyContact;
    const FIELDS: &'static [&'static str] = &["name", "number"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<&'static str, UnknownField> {
        match field {
            "name" => {
                self.name = value.to_string();
                Ok("name")
            }
            "number" | "phone" => {
                self.number = value.to_string();
                Ok("number")
            }
            other => Err(unknown_field(Self::KIND, other)),
        }
    }

    fn schema() -> &'static Schema<Self> {
        &EMERGENCY_SCHEMA
    }
}

impl Record for EmergencyContact {
    type Draft = EmergencyContactDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: EmergencyContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.number,
        }
    }

    fn to_draft(&self) -> EmergencyContactDraft {
        EmergencyContactDraft {
            name: self.name.clone(),
            number: self.phone.clone(),
        }
    }
}
