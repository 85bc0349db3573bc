use record::Record;
use serde_json::json;

use super::*;
use crate::render::{MISSING_TEXT, render_report};
use crate::view::ReportEntry;

fn data_from(value: serde_json::Value) -> Record {
    record::decode(&value.to_string()).unwrap()
}

#[test]
fn layout_has_all_evaluation_slots_in_page_order() {
    let names: Vec<&str> = timeline_report().slots.iter().map(|s| s.slot).collect();
    assert_eq!(
        names,
        vec![
            "eval-family-table",
            "eval-support",
            "eval-flood",
            "eval-landslide",
            "eval-dest-list",
            "eval-info-list",
            "eval-item-list",
            "eval-item-custom",
            "eval-contact-table",
            "eval-custom-timing",
            "eval-timeline1",
            "eval-timeline2",
            "eval-timeline3",
            "eval-timeline4",
            "eval-timeline5",
        ]
    );
}

#[test]
fn tanaka_scenario() {
    let data = data_from(json!({
        "name1": "Tanaka",
        "support_yes": true,
        "support_detail": "wheelchair",
        "item_food": true,
        "item_med": false,
    }));
    let view = render_report(&data, &timeline_report());

    assert_eq!(
        view.rows("eval-family-table"),
        Some(&[vec!["Tanaka".to_owned(), "---".to_owned(), "---".to_owned(), "---".to_owned()]][..])
    );
    assert_eq!(view.text("eval-support"), Some("いる (wheelchair)"));

    let items = view.list("eval-item-list").unwrap();
    assert_eq!(items.len(), 14);
    assert_eq!(items[0], ReportEntry::item("食料・飲料水".to_owned(), true));
    assert_eq!(items[1], ReportEntry::item("常備薬・救急セット".to_owned(), false));
    assert!(items.iter().all(|entry| !entry.placeholder));
}

#[test]
fn empty_record_renders_fallbacks() {
    let view = render_report(&Record::new(), &timeline_report());
    assert_eq!(view.rows("eval-family-table").map(<[Vec<String>]>::len), Some(0));
    assert_eq!(view.rows("eval-contact-table").map(<[Vec<String>]>::len), Some(0));
    assert_eq!(view.text("eval-support"), Some("いない"));
    assert_eq!(view.text("eval-flood"), Some("洪水なし"));
    assert_eq!(view.text("eval-landslide"), Some("なし"));
    assert_eq!(view.text("eval-item-custom"), Some(MISSING_TEXT));
    assert_eq!(view.text("eval-custom-timing"), Some(MISSING_TEXT));
    for step in 1..=TIMELINE_STEPS {
        assert_eq!(view.text(&format!("eval-timeline{step}")), Some(MISSING_TEXT));
    }
    for list in ["eval-dest-list", "eval-info-list", "eval-item-list"] {
        let entries = view.list(list).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].placeholder);
        assert_eq!(entries[0].label, NO_CHECKED_ITEMS);
    }
}

#[test]
fn hazard_slot_combines_flood_and_surge() {
    let data = data_from(json!({
        "flood_yes": true,
        "flood_detail": "0.5m",
        "surge_yes": true,
        "landslide_yes": true,
    }));
    let view = render_report(&data, &timeline_report());
    assert_eq!(view.text("eval-flood"), Some("洪水あり (0.5m) / 高潮あり (詳細未入力)"));
    assert_eq!(view.text("eval-landslide"), Some("あり"));
}

#[test]
fn destination_labels_carry_typed_details() {
    let data = data_from(json!({
        "dest_relative_check": true,
        "dest_relative_text": "叔母の家",
    }));
    let view = render_report(&data, &timeline_report());
    let entries = view.list("eval-dest-list").unwrap();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[1], ReportEntry::item("親戚や知人の家 (叔母の家)".to_owned(), true));
    assert_eq!(entries[0].label, "指定緊急避難場所 (未入力)");
}

#[test]
fn contact_rows_skip_blank_names() {
    let data = data_from(json!({
        "contact_name1": "Sato",
        "contact_tel1": "03-0000-0000",
        "contact_tel2": "unused",
        "contact_name3": "Ito",
    }));
    let view = render_report(&data, &timeline_report());
    let rows = view.rows("eval-contact-table").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["Sato".to_owned(), "03-0000-0000".to_owned()]);
    assert_eq!(rows[1], vec!["Ito".to_owned(), "---".to_owned()]);
}

#[test]
fn timeline_report_is_idempotent() {
    let data = data_from(json!({ "timeline3": "Move to shelter", "info_tv": true }));
    let spec = timeline_report();
    assert_eq!(render_report(&data, &spec), render_report(&data, &spec));
    assert_eq!(render_report(&data, &spec).text("eval-timeline3"), Some("Move to shelter"));
}
