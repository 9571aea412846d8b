//! Core logic for the personal organizer.
//! This crate owns every validation rule and list-state invariant; front ends
//! only render what it exposes.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod nav;
pub mod service;
pub mod store;
pub mod validation;

pub use config::{ConfigError, ContactDeletePolicy, OrganizerConfig};
pub use form::{FormController, FormError, FormState, SubmitOutcome};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::contact::{Contact, ContactDraft, RELATIONSHIP_OPTIONS};
pub use model::emergency::{EmergencyContact, EmergencyContactDraft};
pub use model::note::{Note, NoteDraft};
pub use model::record::{Draft, EntityKind, Record, RecordId, UnknownField};
pub use model::reminder::{Reminder, ReminderDraft, REMINDER_TYPES};
pub use nav::{MenuItem, NavigationError, Navigator, Route, MENU};
pub use service::dashboard::{DashboardSummary, ReminderRow};
pub use service::organizer::{Feature, NoteRow, Organizer, OrganizerError, SeedSources};
pub use store::{
    EmptySeed, EntityStore, FilteredView, FixtureSeed, IdPolicy, JsonSeed, ListState, SeedError,
    SeedSource, StoreError, StoreResult, NO_CONTACTS_MESSAGE,
};
pub use validation::{validate, FieldErrors, ValidationContext, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
