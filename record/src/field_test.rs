use super::*;

#[test]
fn checkable_kinds_are_checkbox_and_radio() {
    assert!(FieldKind::Checkbox.is_checkable());
    assert!(FieldKind::Radio.is_checkable());
    assert!(!FieldKind::Text.is_checkable());
    assert!(!FieldKind::Number.is_checkable());
    assert!(!FieldKind::Phone.is_checkable());
    assert!(!FieldKind::MultilineText.is_checkable());
}

#[test]
fn input_type_matches_html_attribute() {
    assert_eq!(FieldKind::Phone.input_type(), Some("tel"));
    assert_eq!(FieldKind::Number.input_type(), Some("number"));
    assert_eq!(FieldKind::MultilineText.input_type(), None);
}

#[test]
fn stable_id_ignores_missing_and_empty_ids() {
    assert_eq!(Field::text("name1").stable_id(), Some("name1"));
    assert_eq!(Field::anonymous(FieldKind::Text).stable_id(), None);
    let empty = Field {
        id: Some(String::new()),
        ..Field::text("x")
    };
    assert_eq!(empty.stable_id(), None);
}

#[test]
fn radio_group_only_reported_for_radios() {
    assert_eq!(Field::radio("support_yes", "support").radio_group(), Some("support"));
    let checkbox = Field {
        group_name: Some("support".to_owned()),
        ..Field::checkbox("item_food")
    };
    assert_eq!(checkbox.radio_group(), None);
    let ungrouped = Field {
        group_name: None,
        ..Field::radio("lonely", "g")
    };
    assert_eq!(ungrouped.radio_group(), None);
}

#[test]
fn builders_set_value_and_checked() {
    let f = Field::text("name1").with_value("Tanaka");
    assert_eq!(f.value, "Tanaka");
    assert!(!f.checked);
    let c = Field::checkbox("item_food").with_checked(true);
    assert!(c.checked);
}
