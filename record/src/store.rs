//! Conversion between form fields and persisted records.
//!
//! SYSTEM CONTEXT
//! ==============
//! The data-entry page saves the whole form as one flat record under a single
//! well-known key. The report page and the restore action read it back. The
//! last writer wins; there is no locking across tabs.
//!
//! ERROR HANDLING
//! ==============
//! Rejected writes and undecodable stored text are returned to the caller,
//! which turns them into user notices. A missing record is a normal outcome
//! ([`LoadOutcome::NotFound`]), never an error.

use tracing::{debug, warn};

use crate::codec::{self, Record, RecordValue};
use crate::error::RecordError;
use crate::field::{Field, FieldHandle, FieldKind};
use crate::radio::{RadioToggleController, select_radio};
use crate::storage::RecordStorage;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Storage key the questionnaire record lives under.
pub const DEFAULT_STORAGE_KEY: &str = "myTimelineData";

/// Which fields are written on save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavePolicy {
    /// Save every radio with its `checked` flag. When `false`, only checked
    /// radios are saved. Checkboxes are always saved.
    pub include_all_radios: bool,
}

/// Store configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    pub save_policy: SavePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            save_policy: SavePolicy::default(),
        }
    }
}

/// Result of reading the stored record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Found(Record),
    NotFound,
}

/// Saves and restores form fields through a [`RecordStorage`] backend.
#[derive(Debug)]
pub struct FormRecordStore<S> {
    storage: S,
    config: StoreConfig,
}

impl<S: RecordStorage> FormRecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Build a record from every field that has a stable id and is eligible
    /// under the configured [`SavePolicy`].
    pub fn serialize(&self, fields: &[Field]) -> Record {
        let policy = self.config.save_policy;
        fields
            .iter()
            .filter_map(|field| {
                let id = field.stable_id()?;
                let value = match field.kind {
                    FieldKind::Radio if !policy.include_all_radios && !field.checked => return None,
                    FieldKind::Checkbox | FieldKind::Radio => RecordValue::Flag(field.checked),
                    FieldKind::Text | FieldKind::Number | FieldKind::Phone | FieldKind::MultilineText => {
                        RecordValue::Text(field.value.clone())
                    }
                };
                Some((id.to_owned(), value))
            })
            .collect()
    }

    /// Write record values back into `fields`, then rescan `radios`.
    ///
    /// Fields whose id is absent from the record keep their current state.
    /// Restoring a radio to checked clears its group-mates, like the host
    /// form does when `checked` is assigned.
    pub fn deserialize(&self, record: &Record, fields: &mut [Field], radios: &mut RadioToggleController) {
        for index in 0..fields.len() {
            let Some(value) = fields[index].stable_id().and_then(|id| record.get(id)) else {
                continue;
            };
            match fields[index].kind {
                FieldKind::Radio if value.is_truthy() => select_radio(fields, FieldHandle(index)),
                FieldKind::Checkbox | FieldKind::Radio => fields[index].checked = value.is_truthy(),
                FieldKind::Text | FieldKind::Number | FieldKind::Phone | FieldKind::MultilineText => {
                    fields[index].value = value.as_input_value();
                }
            }
        }
        radios.rescan(fields);
    }

    /// Encode `record` and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::StorageUnavailable`] if the backend rejects the write.
    pub fn persist(&mut self, key: &str, record: &Record) -> Result<(), RecordError> {
        let raw = codec::encode(record);
        if let Err(e) = self.storage.set_item(key, &raw) {
            warn!(key, error = %e, "record write rejected");
            return Err(e.into());
        }
        debug!(key, entries = record.len(), bytes = raw.len(), "record persisted");
        Ok(())
    }

    /// Read and decode the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::StorageUnavailable`] if the backend cannot be
    /// read and [`RecordError::CorruptRecord`] if the stored text does not
    /// decode.
    pub fn load(&self, key: &str) -> Result<LoadOutcome, RecordError> {
        let Some(raw) = self.storage.get_item(key)? else {
            debug!(key, "no stored record");
            return Ok(LoadOutcome::NotFound);
        };
        match codec::decode(&raw) {
            Ok(record) => {
                debug!(key, entries = record.len(), "record loaded");
                Ok(LoadOutcome::Found(record))
            }
            Err(e) => {
                warn!(key, error = %e, "stored record is corrupt");
                Err(e)
            }
        }
    }

    /// Serialize `fields` and persist them under the configured key.
    ///
    /// # Errors
    ///
    /// Same as [`FormRecordStore::persist`].
    pub fn save_form(&mut self, fields: &[Field]) -> Result<Record, RecordError> {
        let record = self.serialize(fields);
        let key = self.config.storage_key.clone();
        self.persist(&key, &record)?;
        Ok(record)
    }

    /// Load the record stored under the configured key.
    ///
    /// # Errors
    ///
    /// Same as [`FormRecordStore::load`].
    pub fn load_saved(&self) -> Result<LoadOutcome, RecordError> {
        self.load(&self.config.storage_key)
    }
}
