use super::*;

#[test]
fn memory_storage_round_trips_items() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.get_item("k").unwrap(), None);
    storage.set_item("k", "v1").unwrap();
    storage.set_item("k", "v2").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
}

#[test]
fn rejecting_storage_fails_writes_but_keeps_prior_value() {
    let mut storage = MemoryStorage::rejecting().with_item("k", "old");
    let err = storage.set_item("k", "new").unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("old"));
}

#[test]
fn reject_writes_can_be_toggled() {
    let mut storage = MemoryStorage::new();
    storage.set_reject_writes(true);
    assert!(storage.set_item("k", "v").is_err());
    storage.set_reject_writes(false);
    assert!(storage.set_item("k", "v").is_ok());
}
