use organizer_core::{
    Contact, ContactDraft, EmergencyContact, EntityStore, FixtureSeed, FormController, FormError,
    FormState, IdPolicy, Record, Reminder, StoreError, SubmitOutcome, ValidationContext,
};

fn contact_store() -> EntityStore<Contact> {
    EntityStore::from_seed(&FixtureSeed, IdPolicy::Monotonic).unwrap()
}

fn fill_contact(form: &mut FormController<Contact>, name: &str, phone: &str, relationship: &str) {
    form.change_field("name", name).unwrap();
    form.change_field("phone", phone).unwrap();
    form.change_field("relationship", relationship).unwrap();
}

#[test]
fn open_add_starts_from_empty_draft() {
    let mut form = FormController::<Contact>::new();
    assert_eq!(form.state(), FormState::Closed);

    form.open_add();
    assert_eq!(form.state(), FormState::Adding);
    assert_eq!(form.draft(), &ContactDraft::default());
    assert!(form.errors().is_empty());
}

#[test]
fn valid_add_appends_one_record_with_draft_fields() {
    let mut store = contact_store();
    let mut form = FormController::<Contact>::new();
    let before = store.len();

    form.open_add();
    fill_contact(&mut form, "Alice", "9800000000", "Friend");
    form.change_field("email", "alice@example.com").unwrap();
    let draft = form.draft().clone();

    let outcome = form.submit(&mut store, &ValidationContext::new()).unwrap();
    let SubmitOutcome::Committed(id) = outcome else {
        panic!("expected commit");
    };

    assert_eq!(store.len(), before + 1);
    let created = store.records().last().unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.name, draft.name);
    assert_eq!(created.phone, draft.phone);
    assert_eq!(created.email, draft.email);
    assert_eq!(created.relationship, draft.relationship);
    assert_eq!(created.note, draft.note);
    assert_eq!(form.state(), FormState::Closed);
}

#[test]
fn valid_edit_changes_only_target_and_keeps_id() {
    let mut store = contact_store();
    let untouched: Vec<Contact> = store.records().iter().filter(|c| c.id != 2).cloned().collect();
    let mut form = FormController::<Contact>::new();

    form.open_edit(&store, 2).unwrap();
    assert_eq!(form.state(), FormState::Editing(2));
    assert_eq!(form.draft().name, "Jane Doe");

    form.change_field("name", "Jane Roe").unwrap();
    let outcome = form.submit(&mut store, &ValidationContext::new()).unwrap();
    assert_eq!(outcome, SubmitOutcome::Committed(2));

    assert_eq!(store.len(), 3);
    assert_eq!(store.records()[1].id, 2);
    assert_eq!(store.records()[1].name, "Jane Roe");
    assert_eq!(store.records()[1].phone, "9806053522");
    let others: Vec<Contact> = store.records().iter().filter(|c| c.id != 2).cloned().collect();
    assert_eq!(others, untouched);
}

#[test]
fn rejected_submit_keeps_form_open_and_store_unchanged() {
    let mut store = contact_store();
    let snapshot = store.records().to_vec();
    let mut form = FormController::<Contact>::new();

    form.open_add();
    fill_contact(&mut form, "", "123", "Brother");
    let outcome = form.submit(&mut store, &ValidationContext::new()).unwrap();

    let SubmitOutcome::Rejected(err) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(err.errors().fields(), vec!["name"]);
    assert_eq!(form.state(), FormState::Adding);
    assert_eq!(form.errors(), err.errors());
    assert_eq!(form.draft().phone, "123");
    assert_eq!(store.records(), snapshot.as_slice());
}

#[test]
fn field_change_clears_only_that_field() {
    let mut store = contact_store();
    let mut form = FormController::<Contact>::new();
    form.open_add();
    form.submit(&mut store, &ValidationContext::new()).unwrap();
    assert_eq!(form.errors().fields(), vec!["name", "phone", "relationship"]);

    form.change_field("name", "x").unwrap();
    assert_eq!(form.errors().fields(), vec!["phone", "relationship"]);

    // Clearing is optimistic: an invalid value does not re-add the error.
    form.change_field("relationship", "Cousin").unwrap();
    assert_eq!(form.errors().fields(), vec!["phone"]);
}

#[test]
fn resubmit_replaces_errors_wholesale() {
    let mut store = EntityStore::<EmergencyContact>::new(IdPolicy::Monotonic);
    let mut form = FormController::<EmergencyContact>::new();
    let ctx = ValidationContext::new();

    form.open_add();
    form.submit(&mut store, &ctx).unwrap();
    assert_eq!(form.errors().fields(), vec!["name", "number"]);

    form.change_field("name", "Example").unwrap();
    form.change_field("number", "123").unwrap();
    form.submit(&mut store, &ctx).unwrap();
    assert_eq!(form.errors().fields(), vec!["number"]);
    assert_eq!(
        form.errors().get("number").unwrap(),
        ["Number must be at least 10 digits"]
    );
}

#[test]
fn cancel_discards_draft_without_touching_store() {
    let mut store = contact_store();
    let mut form = FormController::<Contact>::new();

    form.open_edit(&store, 1).unwrap();
    form.change_field("name", "Changed").unwrap();
    form.cancel();

    assert_eq!(form.state(), FormState::Closed);
    assert_eq!(form.draft(), &ContactDraft::default());
    assert_eq!(store.get(1).unwrap().name, "John Doe");
    assert!(matches!(
        form.submit(&mut store, &ValidationContext::new()),
        Err(FormError::NotOpen)
    ));
}

#[test]
fn reset_clears_draft_and_errors_but_stays_open() {
    let mut store = EntityStore::<Reminder>::new(IdPolicy::Monotonic);
    let mut form = FormController::<Reminder>::new();
    let ctx = ValidationContext::with_contacts([1]);

    form.open_add();
    form.change_field("title", "Birthday party").unwrap();
    form.submit(&mut store, &ctx).unwrap();
    assert!(!form.errors().is_empty());

    form.reset().unwrap();
    assert_eq!(form.state(), FormState::Adding);
    assert_eq!(form.draft().title, "");
    assert!(form.errors().is_empty());
}

#[test]
fn reset_while_editing_restores_the_stored_record() {
    let mut store = contact_store();
    let mut form = FormController::<Contact>::new();

    form.open_edit(&store, 2).unwrap();
    form.change_field("name", "").unwrap();
    form.change_field("phone", "12ab").unwrap();
    form.submit(&mut store, &ValidationContext::new()).unwrap();
    assert!(!form.errors().is_empty());

    form.reset().unwrap();
    assert_eq!(form.state(), FormState::Editing(2));
    assert_eq!(form.draft(), &store.get(2).unwrap().to_draft());
    assert_eq!(form.draft().name, "Jane Doe");
    assert!(form.errors().is_empty());

    let outcome = form.submit(&mut store, &ValidationContext::new()).unwrap();
    assert_eq!(outcome, SubmitOutcome::Committed(2));
    assert_eq!(store.get(2).unwrap().name, "Jane Doe");
}

#[test]
fn edit_target_deleted_before_submit_reports_store_error() {
    let mut store = contact_store();
    let mut form = FormController::<Contact>::new();

    form.open_edit(&store, 3).unwrap();
    assert!(store.delete(3));

    let err = form
        .submit(&mut store, &ValidationContext::new())
        .unwrap_err();
    assert!(matches!(err, FormError::Store(StoreError::NotFound(3))));
    assert_eq!(form.state(), FormState::Editing(3));
    assert_eq!(store.len(), 2);
}
