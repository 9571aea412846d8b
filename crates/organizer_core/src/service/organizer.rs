//! Organizer use-case service.
//!
//! # Responsibility
//! - Own the four feature stores and their forms for one session.
//! - Build the validation context from the live contact list.
//! - Apply the configured consistency policy when contacts are deleted.
//!
//! # Invariants
//! - Reminder and note commits are validated against the contacts that exist
//!   at submit time.
//! - Filtering never mutates a store.

use crate::config::{ContactDeletePolicy, OrganizerConfig};
use crate::form::{FormController, FormError, SubmitOutcome};
use crate::model::contact::Contact;
use crate::model::emergency::EmergencyContact;
use crate::model::note::Note;
use crate::model::record::{Record, RecordId};
use crate::model::reminder::Reminder;
use crate::store::{EmptySeed, EntityStore, FilteredView, FixtureSeed, SeedSource, StoreError};
use crate::validation::ValidationContext;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum OrganizerError {
    Form(FormError),
    Store(StoreError),
    /// `ContactDeletePolicy::Restrict` refused a referenced contact.
    ContactInUse {
        id: RecordId,
        reminders: usize,
        notes: usize,
    },
}

impl Display for OrganizerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::ContactInUse {
                id,
                reminders,
                notes,
            } => write!(
                f,
                "contact {id} is referenced by {reminders} reminder(s) and {notes} note(s)"
            ),
        }
    }
}

impl Error for OrganizerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::ContactInUse { .. } => None,
        }
    }
}

impl From<FormError> for OrganizerError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<StoreError> for OrganizerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Where each store's initial records come from.
pub struct SeedSources<'a> {
    pub contacts: &'a dyn SeedSource<Contact>,
    pub reminders: &'a dyn SeedSource<Reminder>,
    pub notes: &'a dyn SeedSource<Note>,
    pub emergency_contacts: &'a dyn SeedSource<EmergencyContact>,
}

impl SeedSources<'static> {
    pub fn fixtures() -> Self {
        Self {
            contacts: &FixtureSeed,
            reminders: &FixtureSeed,
            notes: &FixtureSeed,
            emergency_contacts: &FixtureSeed,
        }
    }

    pub fn empty() -> Self {
        Self {
            contacts: &EmptySeed,
            reminders: &EmptySeed,
            notes: &EmptySeed,
            emergency_contacts: &EmptySeed,
        }
    }
}

/// Saved note with its contact resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: RecordId,
    /// `None` when the referenced contact has been deleted.
    pub contact_name: Option<String>,
    pub description: String,
}

/// One feature's store and form, borrowed together for a user action.
pub struct Feature<'a, R: Record> {
    store: &'a mut EntityStore<R>,
    form: &'a mut FormController<R>,
    ctx: ValidationContext,
}

impl<R: Record> Feature<'_, R> {
    pub fn store(&self) -> &EntityStore<R> {
        &*self.store
    }

    pub fn form(&self) -> &FormController<R> {
        &*self.form
    }

    pub fn open_add(&mut self) {
        self.form.open_add();
    }

    pub fn open_edit(&mut self, id: RecordId) -> Result<(), OrganizerError> {
        Ok(self.form.open_edit(&*self.store, id)?)
    }

    pub fn change_field(&mut self, field: &str, value: &str) -> Result<(), OrganizerError> {
        Ok(self.form.change_field(field, value)?)
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, OrganizerError> {
        Ok(self.form.submit(&mut *self.store, &self.ctx)?)
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn reset(&mut self) -> Result<(), OrganizerError> {
        Ok(self.form.reset()?)
    }
}

/// Session state for the whole organizer.
#[derive(Debug, Clone)]
pub struct Organizer {
    config: OrganizerConfig,
    contacts: EntityStore<Contact>,
    reminders: EntityStore<Reminder>,
    notes: EntityStore<Note>,
    emergency_contacts: EntityStore<EmergencyContact>,
    contact_form: FormController<Contact>,
    reminder_form: FormController<Reminder>,
    note_form: FormController<Note>,
    emergency_form: FormController<EmergencyContact>,
}

impl Organizer {
    /// Creates an organizer seeded from fixtures or empty, per `config`.
    pub fn new(config: OrganizerConfig) -> Result<Self, OrganizerError> {
        let sources = if config.seed_fixtures {
            SeedSources::fixtures()
        } else {
            SeedSources::empty()
        };
        Self::with_sources(config, &sources)
    }

    /// Creates an organizer whose stores load from the given sources.
    pub fn with_sources(
        config: OrganizerConfig,
        sources: &SeedSources<'_>,
    ) -> Result<Self, OrganizerError> {
        let policy = config.id_policy;
        let organizer = Self {
            contacts: EntityStore::from_seed(sources.contacts, policy)?,
            reminders: EntityStore::from_seed(sources.reminders, policy)?,
            notes: EntityStore::from_seed(sources.notes, policy)?,
            emergency_contacts: EntityStore::from_seed(sources.emergency_contacts, policy)?,
            contact_form: FormController::new(),
            reminder_form: FormController::new(),
            note_form: FormController::new(),
            emergency_form: FormController::new(),
            config,
        };
        info!(
            "event=organizer_init module=service status=ok id_policy={:?} contact_delete_policy={:?}",
            organizer.config.id_policy, organizer.config.contact_delete_policy
        );
        Ok(organizer)
    }

    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    /// Facts validators need: the currently live contact ids.
    pub fn validation_context(&self) -> ValidationContext {
        ValidationContext::with_contacts(self.contacts.ids())
    }

    pub fn contacts(&self) -> &EntityStore<Contact> {
        &self.contacts
    }

    pub fn reminders(&self) -> &EntityStore<Reminder> {
        &self.reminders
    }

    pub fn notes(&self) -> &EntityStore<Note> {
        &self.notes
    }

    pub fn emergency_contacts(&self) -> &EntityStore<EmergencyContact> {
        &self.emergency_contacts
    }

    pub fn contact_form(&self) -> &FormController<Contact> {
        &self.contact_form
    }

    pub fn reminder_form(&self) -> &FormController<Reminder> {
        &self.reminder_form
    }

    pub fn note_form(&self) -> &FormController<Note> {
        &self.note_form
    }

    pub fn emergency_form(&self) -> &FormController<EmergencyContact> {
        &self.emergency_form
    }

    pub fn contacts_mut(&mut self) -> Feature<'_, Contact> {
        let ctx = self.validation_context();
        Feature {
            store: &mut self.contacts,
            form: &mut self.contact_form,
            ctx,
        }
    }

    pub fn reminders_mut(&mut self) -> Feature<'_, Reminder> {
        let ctx = self.validation_context();
        Feature {
            store: &mut self.reminders,
            form: &mut self.reminder_form,
            ctx,
        }
    }

    pub fn notes_mut(&mut self) -> Feature<'_, Note> {
        let ctx = self.validation_context();
        Feature {
            store: &mut self.notes,
            form: &mut self.note_form,
            ctx,
        }
    }

    pub fn emergency_contacts_mut(&mut self) -> Feature<'_, EmergencyContact> {
        let ctx = self.validation_context();
        Feature {
            store: &mut self.emergency_contacts,
            form: &mut self.emergency_form,
            ctx,
        }
    }

    /// Contacts matching `query` by name or phone, case-insensitively.
    pub fn filter_contacts(&self, query: &str) -> FilteredView<'_> {
        self.contacts.filter(query)
    }

    pub fn contact_name(&self, id: RecordId) -> Option<&str> {
        self.contacts.get(id).map(|contact| contact.name.as_str())
    }

    /// Saved notes in store order with contact names resolved.
    pub fn note_rows(&self) -> Vec<NoteRow> {
        self.notes
            .iter()
            .map(|note| NoteRow {
                id: note.id,
                contact_name: self.contact_name(note.contact_id).map(str::to_string),
                description: note.description.clone(),
            })
            .collect()
    }

    /// Deletes a contact, applying the configured reference policy.
    ///
    /// Returns `Ok(false)` when no contact has `id`.
    ///
    /// # Errors
    /// - `ContactInUse` under `ContactDeletePolicy::Restrict` when reminders
    ///   or notes still reference the contact. Nothing is deleted.
    pub fn delete_contact(&mut self, id: RecordId) -> Result<bool, OrganizerError> {
        if !self.contacts.contains(id) {
            return Ok(self.contacts.delete(id));
        }

        match self.config.contact_delete_policy {
            ContactDeletePolicy::Keep => {}
            ContactDeletePolicy::Restrict => {
                let reminders = self.reminders.iter().filter(|r| r.contact_id == id).count();
                let notes = self.notes.iter().filter(|n| n.contact_id == id).count();
                if reminders > 0 || notes > 0 {
                    warn!(
                        "event=contact_delete module=service status=error error_code=contact_in_use id={} reminders={} notes={}",
                        id, reminders, notes
                    );
                    return Err(OrganizerError::ContactInUse {
                        id,
                        reminders,
                        notes,
                    });
                }
            }
            ContactDeletePolicy::Cascade => {
                let reminders = self.reminders.delete_where(|r| r.contact_id == id);
                let notes = self.notes.delete_where(|n| n.contact_id == id);
                info!(
                    "event=contact_delete module=service status=cascade id={} reminders={} notes={}",
                    id, reminders, notes
                );
            }
        }

        Ok(self.contacts.delete(id))
    }

    pub fn delete_reminder(&mut self, id: RecordId) -> bool {
        self.reminders.delete(id)
    }

    pub fn delete_note(&mut self, id: RecordId) -> bool {
        self.notes.delete(id)
    }

    pub fn delete_emergency_contact(&mut self, id: RecordId) -> bool {
        self.emergency_contacts.delete(id)
    }
}
