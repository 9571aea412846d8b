//! Reminder records tied to a contact.
//!
//! # Invariants
//! - `contact_id` references a live contact at the time of commit.
//! - `title`, `date`, `time` and `kind` are non-empty; `kind` is one of
//!   [`REMINDER_TYPES`]. Date and time stay opaque strings as entered.

use crate::model::contact_id_input;
use crate::model::record::{unknown_field, Draft, EntityKind, Record, RecordId, UnknownField};
use crate::validation::rules::{is_one_of, is_present};
use crate::validation::{Rule, Schema, ValidationContext};
use serde::{Deserialize, Serialize};

/// Allowed reminder types, in selector order.
pub const REMINDER_TYPES: &[&str] = &["Birthday", "Meeting", "Anniversary", "Other"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: RecordId,
    pub contact_id: RecordId,
    pub title: String,
    pub date: String,
    pub time: String,
    /// Serialized as `type` to match the form field name.
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderDraft {
    pub contact_id: RecordId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub kind: String,
}

pub(crate) fn contact_selected(contact_id: RecordId) -> bool {
    contact_id > 0
}

pub(crate) const SELECT_CONTACT_MESSAGE: &str = "Please select a contact";
pub(crate) const UNKNOWN_CONTACT_MESSAGE: &str = "Selected contact does not exist";

static REMINDER_SCHEMA: Schema<ReminderDraft> = Schema::new(&[
    Rule {
        field: "contactId",
        message: SELECT_CONTACT_MESSAGE,
        check: selected,
    },
    Rule {
        field: "contactId",
        message: UNKNOWN_CONTACT_MESSAGE,
        check: contact_exists,
    },
    Rule {
        field: "title",
        message: "Title is required",
        check: title_present,
    },
    Rule {
        field: "date",
        message: "Date is required",
        check: date_present,
    },
    Rule {
        field: "time",
        message: "Time is required",
        check: time_present,
    },
    Rule {
        field: "type",
        message: "Type is required",
        check: kind_present,
    },
    Rule {
        field: "type",
        message: "Invalid reminder type",
        check: kind_known,
    },
]);

fn selected(draft: &ReminderDraft, _: &ValidationContext) -> bool {
    contact_selected(draft.contact_id)
}

fn contact_exists(draft: &ReminderDraft, ctx: &ValidationContext) -> bool {
    ctx.has_contact(draft.contact_id)
}

fn title_present(draft: &ReminderDraft, _: &ValidationContext) -> bool {
    is_present(&draft.title)
}

fn date_present(draft: &ReminderDraft, _: &ValidationContext) -> bool {
    is_present(&draft.date)
}

fn time_present(draft: &ReminderDraft, _: &ValidationContext) -> bool {
    is_present(&draft.time)
}

fn kind_present(draft: &ReminderDraft, _: &ValidationContext) -> bool {
    is_present(&draft.kind)
}

fn kind_known(draft: &ReminderDraft, _: &ValidationContext) -> bool {
    is_one_of(&draft.kind, REMINDER_TYPES)
}

impl Draft for ReminderDraft {
    const KIND: EntityKind = EntityKind::Reminder;
    const FIELDS: &'static [&'static str] = &["contactId", "title", "date", "time", "type"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<&'static str, UnknownField> {
        match field {
            "contactId" => {
                self.contact_id = contact_id_input(value);
                Ok("contactId")
            }
            "title" => {
                self.title = value.to_string();
                Ok("title")
            }
            "date" => {
                self.date = value.to_string();
                Ok("date")
            }
            "time" => {
                self.time = value.to_string();
                Ok("time")
            }
            "type" => {
                self.kind = value.to_string();
                Ok("type")
            }
            other => Err(unknown_field(Self::KIND, other)),
        }
    }

    fn schema() -> &'static Schema<Self> {
        &REMINDER_SCHEMA
    }
}

impl Record for Reminder {
    type Draft = ReminderDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ReminderDraft) -> Self {
        Self {
            id,
            contact_id: draft.contact_id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            kind: draft.kind,
        }
    }

    fn to_draft(&self) -> ReminderDraft {
        ReminderDraft {
            contact_id: self.contact_id,
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            kind: self.kind.clone(),
        }
    }
}
