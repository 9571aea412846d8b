//! Form controller shared by every feature's add/edit form.
//!
//! # Responsibility
//! - Own the open/closed state, the current draft and its field errors.
//! - Run validation on submit and commit accepted drafts to a store.
//!
//! # Invariants
//! - A failed submit leaves the state, the draft and the store unchanged and
//!   replaces the error map wholesale.
//! - A field change clears only that field's errors; it never re-validates.
//! - Editing commits preserve the target record's id.
//! - Reset restores the draft the form was opened with: defaults when
//!   adding, the stored record when editing.
//! - Every mutating call takes `&mut self`, so validate-then-commit cannot
//!   interleave with another edit.

use crate::model::record::{Draft, Record, RecordId, UnknownField};
use crate::store::{EntityStore, StoreError};
use crate::validation::{validate, FieldErrors, ValidationContext, ValidationError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle of one form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Adding,
    Editing(RecordId),
}

/// Result of a submit that reached the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was stored under this id and the form closed.
    Committed(RecordId),
    /// The draft was rejected; the form stays open with these errors.
    Rejected(ValidationError),
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// Caller misuse of a form, as opposed to invalid user input.
#[derive(Debug)]
pub enum FormError {
    /// The operation needs an open form.
    NotOpen,
    UnknownField(UnknownField),
    Store(StoreError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "form is not open"),
            Self::UnknownField(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotOpen => None,
            Self::UnknownField(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<UnknownField> for FormError {
    fn from(value: UnknownField) -> Self {
        Self::UnknownField(value)
    }
}

impl From<StoreError> for FormError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Add/edit form for records of type `R`.
#[derive(Debug, Clone)]
pub struct FormController<R: Record> {
    state: FormState,
    draft: R::Draft,
    baseline: R::Draft,
    errors: FieldErrors,
}

impl<R: Record> Default for FormController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> FormController<R> {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            draft: R::Draft::default(),
            baseline: R::Draft::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Opens an empty draft for a new record.
    ///
    /// Calling this on an open form discards the current draft.
    pub fn open_add(&mut self) {
        self.draft = R::Draft::default();
        self.baseline = R::Draft::default();
        self.errors.clear();
        self.state = FormState::Adding;
        debug!(
            "event=form_open module=form status=ok entity={} mode=add",
            R::kind()
        );
    }

    /// Opens a draft copied from record `id`.
    ///
    /// # Errors
    /// - `FormError::Store(StoreError::NotFound)` when `id` is not in `store`;
    ///   the form is left as it was.
    pub fn open_edit(&mut self, store: &EntityStore<R>, id: RecordId) -> Result<(), FormError> {
        let record = store.get(id).ok_or(StoreError::NotFound(id))?;
        self.draft = record.to_draft();
        self.baseline = self.draft.clone();
        self.errors.clear();
        self.state = FormState::Editing(id);
        debug!(
            "event=form_open module=form status=ok entity={} mode=edit id={}",
            R::kind(),
            id
        );
        Ok(())
    }

    /// Writes one field of the draft and clears that field's errors.
    pub fn change_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        if !self.is_open() {
            return Err(FormError::NotOpen);
        }
        let canonical = self.draft.set_field(field, value)?;
        self.errors.clear_field(canonical);
        Ok(())
    }

    /// Validates the draft and, when it passes, commits it and closes.
    ///
    /// A rejected draft is reported as `Ok(SubmitOutcome::Rejected)`.
    ///
    /// # Errors
    /// - `NotOpen` when the form is closed.
    /// - `Store` when the commit itself fails (edit target gone, id
    ///   collision). The form stays open with its draft.
    pub fn submit(
        &mut self,
        store: &mut EntityStore<R>,
        ctx: &ValidationContext,
    ) -> Result<SubmitOutcome, FormError> {
        let mode = match self.state {
            FormState::Closed => return Err(FormError::NotOpen),
            FormState::Adding => "add",
            FormState::Editing(_) => "edit",
        };

        let normalized = match validate(&self.draft, ctx) {
            Ok(normalized) => normalized,
            Err(rejection) => {
                self.errors = rejection.errors().clone();
                info!(
                    "event=form_submit module=form status=rejected entity={} mode={} field_error_count={}",
                    R::kind(),
                    mode,
                    self.errors.len()
                );
                return Ok(SubmitOutcome::Rejected(rejection));
            }
        };

        let id = match self.state {
            FormState::Editing(id) => {
                store.replace(id, normalized)?;
                id
            }
            _ => store.insert(normalized)?,
        };

        info!(
            "event=form_submit module=form status=ok entity={} mode={} id={}",
            R::kind(),
            mode,
            id
        );
        self.close();
        Ok(SubmitOutcome::Committed(id))
    }

    /// Discards the draft and closes the form. A no-op when closed.
    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!(
                "event=form_cancel module=form status=ok entity={}",
                R::kind()
            );
        }
        self.close();
    }

    /// Restores the draft captured when the form opened and clears errors,
    /// keeping the form open in its current mode.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if !self.is_open() {
            return Err(FormError::NotOpen);
        }
        self.draft = self.baseline.clone();
        self.errors.clear();
        Ok(())
    }

    fn close(&mut self) {
        self.state = FormState::Closed;
        self.draft = R::Draft::default();
        self.baseline = R::Draft::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{FormController, FormError, FormState};
    use crate::model::note::Note;
    use crate::store::{EntityStore, IdPolicy};

    #[test]
    fn closed_form_rejects_edits() {
        let mut form = FormController::<Note>::new();
        let err = form.change_field("description", "x").unwrap_err();
        assert!(matches!(err, FormError::NotOpen));
        assert!(matches!(form.reset().unwrap_err(), FormError::NotOpen));
    }

    #[test]
    fn open_edit_on_missing_record_leaves_form_closed() {
        let store = EntityStore::<Note>::new(IdPolicy::Monotonic);
        let mut form = FormController::<Note>::new();
        assert!(form.open_edit(&store, 4).is_err());
        assert_eq!(form.state(), FormState::Closed);
    }

    #[test]
    fn unknown_field_leaves_draft_untouched() {
        let mut form = FormController::<Note>::new();
        form.open_add();
        let err = form.change_field("title", "x").unwrap_err();
        assert!(matches!(err, FormError::UnknownField(_)));
        assert_eq!(form.draft().description, "");
    }
}
