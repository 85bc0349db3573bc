//! Browser `localStorage` backend for the record store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the `csr` build talks to the browser. Native builds (tests, tooling)
//! see an empty store that rejects writes, so save paths surface the same
//! failure a disabled browser store would.

use record::{FormRecordStore, RecordStorage, StorageError};

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

/// Handle to `window.localStorage`, if the page has one.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage {
    #[cfg(feature = "csr")]
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        #[cfg(feature = "csr")]
        {
            let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if inner.is_none() {
                leptos::logging::warn!("localStorage is not available");
            }
            Self { inner }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self {}
        }
    }

    #[cfg(feature = "csr")]
    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_owned()))
    }
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl RecordStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            self.storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("browser storage requires the csr build".to_owned()))
        }
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("browser storage requires the csr build".to_owned()))
        }
    }
}

/// Record store over `localStorage` with the default key and save policy.
pub fn browser_store() -> FormRecordStore<LocalStorage> {
    FormRecordStore::new(LocalStorage::open())
}
