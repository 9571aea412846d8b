use organizer_core::{
    Contact, EntityStore, FixtureSeed, IdPolicy, JsonSeed, ListState, StoreError,
    NO_CONTACTS_MESSAGE,
};

fn fixture_contacts() -> EntityStore<Contact> {
    EntityStore::from_seed(&FixtureSeed, IdPolicy::Monotonic).unwrap()
}

fn names<'a>(contacts: impl Iterator<Item = &'a Contact>) -> Vec<&'a str> {
    contacts.map(|contact| contact.name.as_str()).collect()
}

#[test]
fn empty_query_returns_full_list_in_order() {
    let store = fixture_contacts();
    let view = store.filter("");
    assert_eq!(
        names(view.iter()),
        vec!["John Doe", "Jane Doe", "Bob Smith"]
    );
    assert_eq!(view.to_vec(), store.records().to_vec());
}

#[test]
fn filter_is_case_insensitive() {
    let store = fixture_contacts();
    assert_eq!(names(store.filter("JOHN").iter()), vec!["John Doe"]);
    assert_eq!(names(store.filter("doe").iter()), vec!["John Doe", "Jane Doe"]);
}

#[test]
fn filter_matches_phone_substrings() {
    let store = fixture_contacts();
    assert_eq!(names(store.filter("3533").iter()), vec!["Bob Smith"]);
}

#[test]
fn filter_does_not_mutate_store_and_follows_later_changes() {
    let mut store = fixture_contacts();
    assert_eq!(store.filter("smith").len(), 1);
    assert_eq!(store.len(), 3);

    assert!(store.delete(3));
    assert!(store.filter("smith").is_empty());
}

#[test]
fn empty_result_reports_no_results_state() {
    let store = fixture_contacts();
    let view = store.filter("nobody");
    assert_eq!(view.state(), ListState::NoResults);
    assert_eq!(NO_CONTACTS_MESSAGE, "No contacts found");

    let empty = EntityStore::<Contact>::new(IdPolicy::Monotonic);
    assert_eq!(empty.filter("").state(), ListState::NoResults);
}

#[test]
fn deleting_missing_id_is_a_noop() {
    let mut store = fixture_contacts();
    let snapshot = store.records().to_vec();
    assert!(!store.delete(42));
    assert_eq!(store.records(), snapshot.as_slice());
}

#[test]
fn deleting_existing_id_removes_exactly_one() {
    let mut store = fixture_contacts();
    assert!(store.delete(2));
    assert_eq!(store.len(), 2);
    assert!(!store.contains(2));
    assert_eq!(store.ids().collect::<Vec<_>>(), vec![1, 3]);
    assert!(!store.delete(2));
}

#[test]
fn json_seed_file_loads_into_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 5, "name": "Ana", "phone": "111", "email": "", "relationship": "Mother"},
            {"id": 9, "name": "Ben", "phone": "222", "relationship": "Father", "note": "gate code"}
        ]"#,
    )
    .unwrap();

    let seed = JsonSeed::from_path(&path).unwrap();
    let mut store: EntityStore<Contact> =
        EntityStore::from_seed(&seed, IdPolicy::Monotonic).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(5).unwrap().email, None);
    assert_eq!(store.get(9).unwrap().note.as_deref(), Some("gate code"));
    assert_eq!(store.next_id().unwrap(), 10);
    assert!(store.delete(5));
}

#[test]
fn json_seed_with_duplicate_ids_is_rejected() {
    let seed = JsonSeed::from_json(
        r#"[
            {"id": 1, "name": "Ana", "phone": "111", "relationship": "Mother"},
            {"id": 1, "name": "Ben", "phone": "222", "relationship": "Father"}
        ]"#,
    );
    let err = EntityStore::<Contact>::from_seed(&seed, IdPolicy::Monotonic).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(1)));
}

#[test]
fn missing_seed_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonSeed::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
