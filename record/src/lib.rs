//! Form field model, radio toggle state and flat record persistence for the
//! disaster timeline questionnaire.
//!
//! This crate owns the persisted representation shared by `client`, `cli`
//! and `report`. It is UI-framework agnostic: a form is a slice of
//! [`Field`] descriptors, storage is anything implementing
//! [`RecordStorage`], and the stored text is a flat JSON object.
//!
//! DESIGN
//! ======
//! Field identity is positional ([`FieldHandle`]). The stable external `id`
//! of a field is only a storage key; two radios may share a value or even an
//! `id` and still be told apart by the toggle controller.

mod codec;
mod error;
mod field;
mod radio;
mod storage;
mod store;

pub use codec::{Record, RecordValue, decode, encode};
pub use error::{RecordError, StorageError};
pub use field::{Field, FieldHandle, FieldKind};
pub use radio::{RadioGroupState, RadioToggleController, select_radio};
pub use storage::{MemoryStorage, RecordStorage};
pub use store::{DEFAULT_STORAGE_KEY, FormRecordStore, LoadOutcome, SavePolicy, StoreConfig};
