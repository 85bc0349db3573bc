use record::{DEFAULT_STORAGE_KEY, Field, FieldHandle, MemoryStorage, RecordStorage};
use report::timeline_report;
use serde_json::json;

use super::*;
use crate::state::notice::NoticeKind;
use crate::state::questionnaire::questionnaire;

fn form() -> FormModel {
    FormModel::new(vec![
        Field::text("name1"),
        Field::radio("support_yes", "support"),
        Field::radio("support_no", "support"),
        Field::text("support_detail"),
        Field::checkbox("item_food"),
        Field::checkbox("item_med"),
    ])
}

fn filled_form() -> FormModel {
    let mut form = form();
    form.set_value(FieldHandle(0), "Tanaka".to_owned());
    form.click_radio(FieldHandle(1));
    form.set_value(FieldHandle(3), "wheelchair".to_owned());
    form.set_checked(FieldHandle(4), true);
    form
}

// =============================================================
// save_action
// =============================================================

#[test]
fn save_persists_and_navigates() {
    let mut store = FormRecordStore::new(MemoryStorage::new());
    assert_eq!(save_action(&mut store, &filled_form()), SaveOutcome::Saved);
    let raw = store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        stored,
        json!({
            "name1": "Tanaka",
            "support_yes": true,
            "support_detail": "wheelchair",
            "item_food": true,
            "item_med": false,
        })
    );
}

#[test]
fn save_with_rejected_write_fails_without_navigation() {
    let mut store = FormRecordStore::new(MemoryStorage::rejecting());
    let outcome = save_action(&mut store, &filled_form());
    let SaveOutcome::Failed(shown) = outcome else {
        panic!("expected save to fail");
    };
    assert_eq!(shown.kind, NoticeKind::Error);
    assert_eq!(shown.message, notice::SAVE_FAILED);
}

// =============================================================
// restore_action
// =============================================================

#[test]
fn restore_fills_form_and_reports_success() {
    let mut store = FormRecordStore::new(MemoryStorage::new());
    save_action(&mut store, &filled_form());
    let mut restored = form();
    let shown = restore_action(&store, &mut restored);
    assert_eq!(shown, Notice::info(notice::RESTORED));
    assert_eq!(restored.fields(), filled_form().fields());
    assert_eq!(restored.radios().state().selected("support"), Some(FieldHandle(1)));
}

#[test]
fn restore_without_record_leaves_form_alone() {
    let store = FormRecordStore::new(MemoryStorage::new());
    let mut current = filled_form();
    let shown = restore_action(&store, &mut current);
    assert_eq!(shown, Notice::info(notice::NO_SAVED_DATA));
    assert_eq!(current.fields(), filled_form().fields());
}

#[test]
fn restore_corrupt_record_reports_failure_and_keeps_form() {
    let store = FormRecordStore::new(MemoryStorage::new().with_item(DEFAULT_STORAGE_KEY, "{\"name1\":"));
    let mut current = filled_form();
    let shown = restore_action(&store, &mut current);
    assert_eq!(shown, Notice::error(notice::RESTORE_FAILED));
    assert_eq!(current.fields(), filled_form().fields());
}

// =============================================================
// evaluation_state
// =============================================================

#[test]
fn evaluation_without_record_redirects() {
    let store = FormRecordStore::new(MemoryStorage::new());
    assert_eq!(
        evaluation_state(&store, &timeline_report()),
        EvaluationState::Redirect(Notice::info(notice::NO_REPORT_DATA))
    );
}

#[test]
fn evaluation_with_corrupt_record_fails_instead_of_rendering_empty() {
    let store = FormRecordStore::new(MemoryStorage::new().with_item(DEFAULT_STORAGE_KEY, "[]"));
    assert_eq!(
        evaluation_state(&store, &timeline_report()),
        EvaluationState::Failed(Notice::error(notice::REPORT_FAILED))
    );
}

#[test]
fn evaluation_renders_saved_questionnaire() {
    let mut q = FormModel::new(questionnaire().fields);
    q.set_value(FieldHandle(0), "Tanaka".to_owned());
    let mut store = FormRecordStore::new(MemoryStorage::new());
    assert_eq!(save_action(&mut store, &q), SaveOutcome::Saved);

    let EvaluationState::Ready(view) = evaluation_state(&store, &timeline_report()) else {
        panic!("expected a rendered report");
    };
    assert_eq!(view.rows("eval-family-table").map(<[Vec<String>]>::len), Some(1));
    assert_eq!(view.text("eval-support"), Some("いない"));
    assert_eq!(view.text("eval-timeline1"), Some("---"));
}
