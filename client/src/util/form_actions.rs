//! Save, restore and report-entry actions, free of browser glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these with a store over `localStorage`; tests call them with
//! an in-memory store. Each action turns storage failures into a notice and
//! leaves the in-memory form untouched when it fails.

use record::{FormRecordStore, LoadOutcome, RecordStorage};
use report::{RenderedView, ReportSpec, render_report};

use crate::state::form::FormModel;
use crate::state::notice::{self, Notice};

#[cfg(test)]
#[path = "form_actions_test.rs"]
mod form_actions_test;

/// Result of the save button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Persisted; navigate to the evaluation page.
    Saved,
    /// Not persisted; stay on the form and show the notice.
    Failed(Notice),
}

/// What the evaluation page should do on entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvaluationState {
    Ready(RenderedView),
    /// No saved record: go back to data entry with this notice.
    Redirect(Notice),
    /// A record exists but cannot be read.
    Failed(Notice),
}

pub fn save_action<S: RecordStorage>(store: &mut FormRecordStore<S>, form: &FormModel) -> SaveOutcome {
    match store.save_form(form.fields()) {
        Ok(record) => {
            leptos::logging::log!("timeline saved: {} entries", record.len());
            SaveOutcome::Saved
        }
        Err(e) => {
            leptos::logging::warn!("timeline save failed: {e}");
            SaveOutcome::Failed(Notice::error(notice::SAVE_FAILED))
        }
    }
}

pub fn restore_action<S: RecordStorage>(store: &FormRecordStore<S>, form: &mut FormModel) -> Notice {
    match store.load_saved() {
        Ok(LoadOutcome::Found(record)) => {
            form.restore(store, &record);
            Notice::info(notice::RESTORED)
        }
        Ok(LoadOutcome::NotFound) => Notice::info(notice::NO_SAVED_DATA),
        Err(e) => {
            leptos::logging::warn!("timeline restore failed: {e}");
            Notice::error(notice::RESTORE_FAILED)
        }
    }
}

pub fn evaluation_state<S: RecordStorage>(store: &FormRecordStore<S>, spec: &ReportSpec) -> EvaluationState {
    match store.load_saved() {
        Ok(LoadOutcome::Found(record)) => EvaluationState::Ready(render_report(&record, spec)),
        Ok(LoadOutcome::NotFound) => EvaluationState::Redirect(Notice::info(notice::NO_REPORT_DATA)),
        Err(e) => {
            leptos::logging::warn!("evaluation load failed: {e}");
            EvaluationState::Failed(Notice::error(notice::REPORT_FAILED))
        }
    }
}
