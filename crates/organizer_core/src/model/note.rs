//! Free-text notes attached to a contact.

use crate::model::contact_id_input;
use crate::model::record::{unknown_field, Draft, EntityKind, Record, RecordId, UnknownField};
use crate::model::reminder::{contact_selected, SELECT_CONTACT_MESSAGE, UNKNOWN_CONTACT_MESSAGE};
use crate::validation::rules::is_present;
use crate::validation::{Rule, Schema, ValidationContext};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub contact_id: RecordId,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub contact_id: RecordId,
    pub description: String,
}

static NOTE_SCHEMA: Schema<NoteDraft> = Schema::new(&[
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
        field: "description",
        message: "Description is required",
        check: description_present,
    },
]);

fn selected(draft: &NoteDraft, _: &ValidationContext) -> bool {
    contact_selected(draft.contact_id)
}

fn contact_exists(draft: &NoteDraft, ctx: &ValidationContext) -> bool {
    ctx.has_contact(draft.contact_id)
}

fn description_present(draft: &NoteDraft, _: &ValidationContext) -> bool {
    is_present(&draft.description)
}

impl Draft for NoteDraft {
    const KIND: EntityKind = EntityKind::Note;
    const FIELDS: &'static [&'static str] = &["contactId", "description"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<&'static str, UnknownField> {
        match field {
            "contactId" => {
                self.contact_id = contact_id_input(value);
                Ok("contactId")
            }
            "description" => {
                self.description = value.to_string();
                Ok("description")
            }
            other => Err(unknown_field(Self::KIND, other)),
        }
    }

    fn schema() -> &'static Schema<Self> {
        &NOTE_SCHEMA
    }
}

impl Record for Note {
    type Draft = NoteDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NoteDraft) -> Self {
        Self {
            id,
            contact_id: draft.contact_id,
            description: draft.description,
        }
    }

    fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            contact_id: self.contact_id,
            description: self.description.clone(),
        }
    }
}
