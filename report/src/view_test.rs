use super::*;

fn sample() -> RenderedView {
    let mut view = RenderedView::default();
    view.push("eval-support", SlotContent::Text("いない".to_owned()));
    view.push(
        "eval-item-list",
        SlotContent::List(vec![
            ReportEntry::item("食料・飲料水".to_owned(), true),
            ReportEntry::item("雨具".to_owned(), false),
        ]),
    );
    view.push("eval-contact-table", SlotContent::Rows(vec![vec!["Sato".to_owned(), "---".to_owned()]]));
    view
}

#[test]
fn lookups_match_slot_type() {
    let view = sample();
    assert_eq!(view.text("eval-support"), Some("いない"));
    assert_eq!(view.list("eval-item-list").map(<[ReportEntry]>::len), Some(2));
    assert_eq!(view.rows("eval-contact-table").map(<[Vec<String>]>::len), Some(1));
    assert_eq!(view.text("eval-item-list"), None);
    assert_eq!(view.slot("missing"), None);
}

#[test]
fn iter_preserves_insertion_order() {
    let view = sample();
    let names: Vec<&str> = view.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["eval-support", "eval-item-list", "eval-contact-table"]);
}

#[test]
fn display_renders_marks_and_rows() {
    let text = sample().to_string();
    assert_eq!(
        text,
        "[eval-support]\nいない\n\n[eval-item-list]\n[x] 食料・飲料水\n[ ] 雨具\n\n[eval-contact-table]\nSato | ---\n"
    );
}

#[test]
fn display_marks_placeholder_entry() {
    let mut view = RenderedView::default();
    view.push("eval-info-list", SlotContent::List(vec![ReportEntry::placeholder("なし")]));
    assert_eq!(view.to_string(), "[eval-info-list]\n- なし\n");
}
