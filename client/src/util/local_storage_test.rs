#![cfg(not(feature = "csr"))]

use record::{LoadOutcome, RecordError};

use super::*;

#[test]
fn native_storage_reads_nothing() {
    let storage = LocalStorage::open();
    assert_eq!(storage.get_item("myTimelineData").unwrap(), None);
}

#[test]
fn native_storage_rejects_writes() {
    let mut storage = LocalStorage::open();
    assert!(matches!(storage.set_item("k", "v"), Err(StorageError::Unavailable(_))));
    assert!(storage.remove_item("k").is_err());
}

#[test]
fn browser_store_uses_default_key_and_reports_missing_record() {
    let store = browser_store();
    assert_eq!(store.config().storage_key, "myTimelineData");
    assert!(!store.config().save_policy.include_all_radios);
    assert_eq!(store.load_saved().unwrap(), LoadOutcome::NotFound);
}

#[test]
fn browser_store_save_fails_natively() {
    let mut store = browser_store();
    assert!(matches!(store.save_form(&[]), Err(RecordError::StorageUnavailable(_))));
}
