use std::collections::HashSet;
use std::str::FromStr;
use storekeep_model::RecordId;

#[test]
fn record_id_new_is_unique() {
    let a = RecordId::new();
    let b = RecordId::new();
    assert_ne!(a, b);
}

#[test]
fn record_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    let id = RecordId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn record_id_display_and_parse() {
    let id = RecordId::new();
    let s = id.to_string();
    let parsed = RecordId::parse(&s).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn record_id_from_str() {
    let id = RecordId::new();
    let s = id.to_string();
    let parsed: RecordId = RecordId::from_str(&s).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn record_id_parse_invalid() {
    assert!(RecordId::parse("not-a-uuid").is_err());
}

#[test]
fn record_ids_sort_by_creation_time() {
    // UUID v7 embeds a millisecond timestamp, so string order tracks
    // creation order for ids minted at distinct instants.
    let first = RecordId::new().to_string();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = RecordId::new().to_string();
    assert!(first < second);
}

#[test]
fn record_id_hash_and_eq() {
    let id = RecordId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn record_id_serialization_roundtrip() {
    let id = RecordId::new();
    let json = serde_json::to_string(&id).unwrap();
    let parsed: RecordId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn record_id_serializes_as_bare_string() {
    let id = RecordId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}
