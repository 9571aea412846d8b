//! Contact book records.
//!
//! # Invariants
//! - `name` and `phone` are non-empty; phone format is not enforced.
//! - `email`, when present, is a well-formed address. Blank input is stored
//!   as `None`, never as an empty string.
//! - `relationship` is one of [`RELATIONSHIP_OPTIONS`].

use crate::model::record::{unknown_field, Draft, EntityKind, Record, RecordId, UnknownField};
use crate::model::{blank_as_none, optional_input};
use crate::validation::rules::{is_one_of, is_present, is_well_formed_email};
use crate::validation::{Rule, Schema, ValidationContext};
use serde::{Deserialize, Serialize};

/// Allowed relationship values, in selector order.
pub const RELATIONSHIP_OPTIONS: &[&str] = &["Father", "Mother", "Brother", "Sister", "Friend"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
    pub relationship: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub relationship: String,
    pub note: Option<String>,
}

static CONTACT_SCHEMA: Schema<ContactDraft> = Schema::new(&[
    Rule {
        field: "name",
        message: "Name is required",
        check: name_present,
    },
    Rule {
        field: "phone",
        message: "Phone number is required",
        check: phone_present,
    },
    Rule {
        field: "email",
        message: "Invalid email address",
        check: email_well_formed,
    },
    Rule {
        field: "relationship",
        message: "Please select a relationship",
        check: relationship_known,
    },
]);

fn name_present(draft: &ContactDraft, _: &ValidationContext) -> bool {
    is_present(&draft.name)
}

fn phone_present(draft: &ContactDraft, _: &ValidationContext) -> bool {
    is_present(&draft.phone)
}

fn email_well_formed(draft: &ContactDraft, _: &ValidationContext) -> bool {
    draft.email.as_deref().map_or(true, is_well_formed_email)
}

fn relationship_known(draft: &ContactDraft, _: &ValidationContext) -> bool {
    is_one_of(&draft.relationship, RELATIONSHIP_OPTIONS)
}

impl Draft for ContactDraft {
    const KIND: EntityKind = EntityKind::Contact;
    const FIELDS: &'static [&'static str] = &["name", "phone", "email", "relationship", "note"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<&'static str, UnknownField> {
        match field {
            "name" => {
                self.name = value.to_string();
                Ok("name")
            }
            "phone" => {
                self.phone = value.to_string();
                Ok("phone")
            }
            "email" => {
                self.email = optional_input(value);
                Ok("email")
            }
            "relationship" => {
                self.relationship = value.to_string();
                Ok("relationship")
            }
            "note" => {
                self.note = optional_input(value);
                Ok("note")
            }
            other => Err(unknown_field(Self::KIND, other)),
        }
    }

    fn schema() -> &'static Schema<Self> {
        &CONTACT_SCHEMA
    }
}

impl Record for Contact {
    type Draft = ContactDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            relationship: draft.relationship,
            note: draft.note,
        }
    }

    fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            relationship: self.relationship.clone(),
            note: self.note.clone(),
        }
    }
}
