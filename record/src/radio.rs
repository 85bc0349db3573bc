//! Radio groups that can be cleared by clicking the selected option again.
//!
//! DESIGN
//! ======
//! Native radio groups cannot return to "nothing selected" once an option is
//! chosen. The controller remembers the selection that existed before each
//! click; a click on that same field is a deliberate re-click and clears it.
//! The memory is only trustworthy if it is rebuilt with
//! [`RadioToggleController::rescan`] whenever `checked` flags change outside
//! the click path (page init, restoring a record).

use std::collections::HashMap;

use crate::field::{Field, FieldHandle};

#[cfg(test)]
#[path = "radio_test.rs"]
mod radio_test;

/// Group name to the currently selected radio. Absent groups have no selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadioGroupState {
    selected: HashMap<String, FieldHandle>,
}

impl RadioGroupState {
    /// Selected field of `group`, or `None`.
    #[must_use]
    pub fn selected(&self, group: &str) -> Option<FieldHandle> {
        self.selected.get(group).copied()
    }

    /// Number of groups that currently have a selection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Tracks per-group radio selection and implements click-again-to-clear.
#[derive(Clone, Debug, Default)]
pub struct RadioToggleController {
    state: RadioGroupState,
}

impl RadioToggleController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &RadioGroupState {
        &self.state
    }

    /// Rebuild the group state from the fields' current `checked` flags.
    pub fn rescan(&mut self, fields: &[Field]) {
        self.state.selected.clear();
        for (index, field) in fields.iter().enumerate() {
            let Some(group) = field.radio_group() else {
                continue;
            };
            if field.checked {
                self.state.selected.insert(group.to_owned(), FieldHandle(index));
            }
        }
    }

    /// Handle a click on a radio after the host applied its native toggle.
    ///
    /// If the clicked field was already the recorded selection, it is
    /// unchecked and its group is left with no selection.
    pub fn handle_click(&mut self, fields: &mut [Field], handle: FieldHandle) {
        let Some(field) = fields.get_mut(handle.0) else {
            return;
        };
        let Some(group) = field.radio_group().map(str::to_owned) else {
            return;
        };
        if self.state.selected(&group) == Some(handle) {
            field.checked = false;
            self.state.selected.remove(&group);
        } else {
            self.state.selected.insert(group, handle);
        }
    }
}

/// Apply the host's native radio click: check `handle` and uncheck its
/// group-mates.
pub fn select_radio(fields: &mut [Field], handle: FieldHandle) {
    let Some(field) = fields.get_mut(handle.0) else {
        return;
    };
    field.checked = true;
    let Some(group) = field.radio_group().map(str::to_owned) else {
        return;
    };
    for (index, other) in fields.iter_mut().enumerate() {
        if index != handle.0 && other.radio_group() == Some(group.as_str()) {
            other.checked = false;
        }
    }
}
