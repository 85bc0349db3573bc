//! Editable questionnaire form state.
//!
//! DESIGN
//! ======
//! Field values live in one `FormModel` next to the radio toggle controller
//! that tracks them, so every radio click and every restore goes through a
//! single owner and the controller cannot drift from the fields.

use record::{Field, FieldHandle, FieldKind, FormRecordStore, RadioToggleController, Record, RecordStorage, select_radio};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Debug)]
pub struct FormModel {
    fields: Vec<Field>,
    radios: RadioToggleController,
}

impl FormModel {
    /// Wrap `fields` and take the initial radio snapshot.
    pub fn new(fields: Vec<Field>) -> Self {
        let mut radios = RadioToggleController::new();
        radios.rescan(&fields);
        Self { fields, radios }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, handle: FieldHandle) -> Option<&Field> {
        self.fields.get(handle.0)
    }

    pub fn radios(&self) -> &RadioToggleController {
        &self.radios
    }

    /// Set the value of a text-like field. Checkable fields are ignored.
    pub fn set_value(&mut self, handle: FieldHandle, value: String) {
        if let Some(field) = self.fields.get_mut(handle.0) {
            if !field.kind.is_checkable() {
                field.value = value;
            }
        }
    }

    /// Set a checkbox. Radios must go through [`FormModel::click_radio`].
    pub fn set_checked(&mut self, handle: FieldHandle, checked: bool) {
        if let Some(field) = self.fields.get_mut(handle.0) {
            if field.kind == FieldKind::Checkbox {
                field.checked = checked;
            }
        }
    }

    /// A click on a radio: native exclusive select, then toggle handling.
    pub fn click_radio(&mut self, handle: FieldHandle) {
        if self.field(handle).is_none_or(|f| f.kind != FieldKind::Radio) {
            return;
        }
        select_radio(&mut self.fields, handle);
        self.radios.handle_click(&mut self.fields, handle);
    }

    /// Write `record` into the form and resynchronize the radio state.
    pub fn restore<S: RecordStorage>(&mut self, store: &FormRecordStore<S>, record: &Record) {
        store.deserialize(record, &mut self.fields, &mut self.radios);
    }
}
