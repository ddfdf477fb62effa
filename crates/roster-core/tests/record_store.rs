use std::fs;

use roster_core::{
    filter_by_name, FileStorage, Profile, ProfileForm, Record, RecordStore, FORM_DATA_SLOT,
};
use tempfile::tempdir;

fn profile(name: &str, city: &str) -> Profile {
    Profile {
        name: name.to_string(),
        email: "someone@example.com".to_string(),
        number: "+919876543210".to_string(),
        pan: "ABCDE1234F".to_string(),
        address1: "7 Park Street".to_string(),
        address2: "Flat 3".to_string(),
        city: city.to_string(),
        state: "West Bengal".to_string(),
        postal_code: "700016".to_string(),
    }
}

#[test]
fn test_round_trip_through_files() {
    let dir = tempdir().expect("tempdir");
    let store = RecordStore::new(FileStorage::new(dir.path()));

    let first = store.submit(profile("Asha Rao", "Kolkata")).expect("submit");
    let second = store.submit(profile("Ravi Kumar", "Howrah")).expect("submit");

    let reopened = RecordStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.load_all(), vec![first, second]);
}

#[test]
fn test_slot_file_is_a_json_array() {
    let dir = tempdir().expect("tempdir");
    let store = RecordStore::new(FileStorage::new(dir.path()));
    store.submit(profile("Asha Rao", "Kolkata")).expect("submit");

    let raw = fs::read_to_string(dir.path().join(format!("{}.json", FORM_DATA_SLOT)))
        .expect("slot file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let array = value.as_array().expect("array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["postalCode"], "700016");
    assert_eq!(array[0]["address2"], "Flat 3");
}

#[test]
fn test_corrupt_file_reads_empty_and_is_replaced_on_write() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("formData.json"), "{ not json").expect("write");
    let store = RecordStore::new(FileStorage::new(dir.path()));

    assert!(store.load_all().is_empty());

    store.submit(profile("Asha Rao", "Kolkata")).expect("submit");
    assert_eq!(store.load_all().len(), 1);
}

#[test]
fn test_legacy_records_gain_durable_ids_on_write() {
    let dir = tempdir().expect("tempdir");
    let legacy = serde_json::json!([{
        "name": "Old Entry",
        "email": "old@example.com",
        "number": "+911234567890",
        "pan": "ZZZZZ9999Z",
        "address1": "Somewhere",
        "address2": "",
        "city": "Chennai",
        "state": "Tamil Nadu",
        "postalCode": "600001"
    }]);
    fs::write(dir.path().join("formData.json"), legacy.to_string()).expect("write");
    let store = RecordStore::new(FileStorage::new(dir.path()));

    store.submit(profile("Asha Rao", "Kolkata")).expect("submit");

    let first_load = store.load_all();
    let second_load = store.load_all();
    assert_eq!(first_load.len(), 2);
    assert_eq!(first_load[0].profile.name, "Old Entry");
    assert_eq!(first_load[0].id, second_load[0].id);
}

#[test]
fn test_legacy_record_deleted_by_listed_id_before_any_write() {
    let dir = tempdir().expect("tempdir");
    let legacy = serde_json::json!([
        {"name": "Old Entry", "email": "old@example.com", "postalCode": "600001"},
        {"name": "Other Entry", "email": "other@example.com", "postalCode": "600002"}
    ]);
    fs::write(dir.path().join("formData.json"), legacy.to_string()).expect("write");

    let listed = RecordStore::new(FileStorage::new(dir.path())).load_all();
    let target = listed[0].id;

    let reopened = RecordStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.get(&target).expect("listed id resolves").profile.name, "Old Entry");
    reopened.delete(&target).expect("delete by listed id");

    let remaining = reopened.load_all();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, listed[1].id);
}

#[test]
fn test_filtered_delete_targets_backing_record() {
    let dir = tempdir().expect("tempdir");
    let store = RecordStore::new(FileStorage::new(dir.path()));
    for (name, city) in [
        ("Asha Rao", "Kolkata"),
        ("Ravi Kumar", "Howrah"),
        ("Meera Rajan", "Siliguri"),
    ] {
        store.submit(profile(name, city)).expect("submit");
    }

    let records = store.load_all();
    let hits = filter_by_name(&records, "meera");
    assert_eq!(hits.len(), 1);
    // Filtered position 0 is backing position 2.
    assert_eq!(hits[0].index, 2);

    let removed = store.delete_at(hits[0].index).expect("delete");
    assert_eq!(removed.profile.name, "Meera Rajan");
    let names: Vec<_> = store
        .load_all()
        .into_iter()
        .map(|r| r.profile.name)
        .collect();
    assert_eq!(names, vec!["Asha Rao", "Ravi Kumar"]);
}

#[test]
fn test_edit_through_form_keeps_identity() {
    let dir = tempdir().expect("tempdir");
    let store = RecordStore::new(FileStorage::new(dir.path()));
    let original: Record = store.submit(profile("Asha Rao", "Kolkata")).expect("submit");

    let mut form = ProfileForm::from_profile(&original.profile);
    form.set_pan("pqrst6789k");
    let edited = form.validate().expect("valid edit");
    store.replace(&original.id, edited).expect("replace");

    let reloaded = store.get(&original.id).expect("still present");
    assert_eq!(reloaded.profile.pan, "PQRST6789K");
    assert_eq!(reloaded.created_at, original.created_at);
}
