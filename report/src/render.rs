//! Record to report derivation.
//!
//! Rendering is a pure function of the record and the spec: the record is
//! only read, and rendering the same input twice yields the same view.

use record::{Record, RecordValue};
use tracing::debug;

use crate::layout::{ChecklistItem, ConditionPart, ReportSpec, SlotKind};
use crate::view::{RenderedView, ReportEntry, SlotContent};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Fallback for empty text slots and table cells.
pub const MISSING_TEXT: &str = "---";
/// Fallback for an empty detail after a present flag.
pub const MISSING_DETAIL: &str = "詳細未入力";
/// Fallback for an empty detail inside a checklist label.
pub const MISSING_LABEL_DETAIL: &str = "未入力";
/// Checklist placeholder when nothing is checked.
pub const NO_CHECKED_ITEMS: &str = "チェックされた項目はありません";

/// Render every slot of `spec` from `record`.
#[must_use]
pub fn render_report(record: &Record, spec: &ReportSpec) -> RenderedView {
    let mut view = RenderedView::default();
    for slot in &spec.slots {
        let content = match &slot.kind {
            SlotKind::Text { key } => SlotContent::Text(text_or(record, key, MISSING_TEXT)),
            SlotKind::Conditional { parts } => SlotContent::Text(conditional_text(record, parts)),
            SlotKind::Table { rows, columns } => SlotContent::Rows(table_rows(record, *rows, columns)),
            SlotKind::Checklist { items, placeholder } => {
                SlotContent::List(checklist_entries(record, items, placeholder))
            }
        };
        view.push(slot.slot, content);
    }
    debug!(slots = view.len(), entries = record.len(), "report rendered");
    view
}

fn flag(record: &Record, key: &str) -> bool {
    record.get(key).is_some_and(RecordValue::is_truthy)
}

fn text_or(record: &Record, key: &str, fallback: &str) -> String {
    record
        .get(key)
        .and_then(RecordValue::display_text)
        .unwrap_or_else(|| fallback.to_owned())
}

fn conditional_text(record: &Record, parts: &[ConditionPart]) -> String {
    let phrases: Vec<String> = parts
        .iter()
        .filter_map(|part| {
            if flag(record, part.flag) {
                Some(match part.detail {
                    Some(key) => format!("{} ({})", part.present, text_or(record, key, MISSING_DETAIL)),
                    None => part.present.to_owned(),
                })
            } else {
                part.absent.map(str::to_owned)
            }
        })
        .collect();
    if phrases.is_empty() {
        return MISSING_TEXT.to_owned();
    }
    phrases.join(" / ")
}

fn table_rows(record: &Record, rows: usize, columns: &[&str]) -> Vec<Vec<String>> {
    let Some(primary) = columns.first() else {
        return Vec::new();
    };
    (1..=rows)
        .filter(|row| flag(record, &format!("{primary}{row}")))
        .map(|row| {
            columns
                .iter()
                .map(|column| text_or(record, &format!("{column}{row}"), MISSING_TEXT))
                .collect()
        })
        .collect()
}

fn checklist_entries(record: &Record, items: &[ChecklistItem], placeholder: &str) -> Vec<ReportEntry> {
    let entries: Vec<ReportEntry> = items
        .iter()
        .map(|item| {
            let label = match item.detail {
                Some(key) => format!("{} ({})", item.label, text_or(record, key, MISSING_LABEL_DETAIL)),
                None => item.label.to_owned(),
            };
            ReportEntry::item(label, flag(record, item.flag))
        })
        .collect();
    if entries.iter().any(|entry| entry.checked) {
        entries
    } else {
        vec![ReportEntry::placeholder(placeholder)]
    }
}
