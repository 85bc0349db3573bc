//! Report layout of the evacuation timeline questionnaire.

use crate::layout::{ChecklistItem, ConditionPart, ReportSpec, SlotKind, SlotSpec};
use crate::render::NO_CHECKED_ITEMS;

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

/// Family members table rows.
pub const FAMILY_ROWS: usize = 4;
/// Emergency contacts table rows.
pub const CONTACT_ROWS: usize = 3;
/// Numbered timeline steps.
pub const TIMELINE_STEPS: usize = 5;

const TIMELINE_SLOTS: [(&str, &str); TIMELINE_STEPS] = [
    ("eval-timeline1", "timeline1"),
    ("eval-timeline2", "timeline2"),
    ("eval-timeline3", "timeline3"),
    ("eval-timeline4", "timeline4"),
    ("eval-timeline5", "timeline5"),
];

fn slot(slot: &'static str, kind: SlotKind) -> SlotSpec {
    SlotSpec { slot, kind }
}

fn checklist(items: Vec<ChecklistItem>) -> SlotKind {
    SlotKind::Checklist {
        items,
        placeholder: NO_CHECKED_ITEMS,
    }
}

/// The evaluation page layout.
///
/// The hazard slot carries only its composed phrase; the record is never
/// consulted for a key named after that phrase.
#[must_use]
pub fn timeline_report() -> ReportSpec {
    let mut slots = vec![
        slot(
            "eval-family-table",
            SlotKind::Table {
                rows: FAMILY_ROWS,
                columns: vec!["name", "age", "tel", "other"],
            },
        ),
        slot(
            "eval-support",
            SlotKind::Conditional {
                parts: vec![ConditionPart::new("support_yes", "いる").detail("support_detail").absent("いない")],
            },
        ),
        slot(
            "eval-flood",
            SlotKind::Conditional {
                parts: vec![
                    ConditionPart::new("flood_yes", "洪水あり").detail("flood_detail").absent("洪水なし"),
                    ConditionPart::new("surge_yes", "高潮あり").detail("surge_detail"),
                ],
            },
        ),
        slot(
            "eval-landslide",
            SlotKind::Conditional {
                parts: vec![ConditionPart::new("landslide_yes", "あり").absent("なし")],
            },
        ),
        slot(
            "eval-dest-list",
            checklist(vec![
                ChecklistItem::with_detail("dest_shelter_check", "指定緊急避難場所", "dest_shelter_text"),
                ChecklistItem::with_detail("dest_relative_check", "親戚や知人の家", "dest_relative_text"),
                ChecklistItem::new("dest_building_check", "頑丈な建物（マンションなど）"),
                ChecklistItem::with_detail("dest_hotel_check", "宿泊施設など", "dest_hotel_text"),
                ChecklistItem::new("dest_home_check", "自宅の上階（垂直避難）"),
                ChecklistItem::with_detail("dest_other_check", "その他", "dest_other_text"),
            ]),
        ),
        slot(
            "eval-info-list",
            checklist(vec![
                ChecklistItem::new("info_tv", "TV・ラジオ"),
                ChecklistItem::new("info_web", "自治体ホームページ"),
                ChecklistItem::new("info_mail", "防災メール"),
                ChecklistItem::new("info_line", "自治体LINE"),
                ChecklistItem::new("info_app", "防災アプリ"),
                ChecklistItem::new("info_jma", "気象庁ホームページ"),
                ChecklistItem::with_detail("info_other_check", "その他", "info_other_text"),
            ]),
        ),
        slot(
            "eval-item-list",
            checklist(vec![
                ChecklistItem::new("item_food", "食料・飲料水"),
                ChecklistItem::new("item_med", "常備薬・救急セット"),
                ChecklistItem::new("item_cash", "現金・身分証明書"),
                ChecklistItem::new("item_light", "懐中電灯"),
                ChecklistItem::new("item_radio", "携帯ラジオ"),
                ChecklistItem::new("item_battery", "モバイルバッテリー"),
                ChecklistItem::new("item_glasses", "メガネ・コンタクト"),
                ChecklistItem::new("item_clothes", "着替え・下着"),
                ChecklistItem::new("item_rain", "雨具"),
                ChecklistItem::new("item_towel", "タオル・毛布"),
                ChecklistItem::new("item_bag", "ビニール袋"),
                ChecklistItem::new("item_toilet", "携帯用トイレ"),
                ChecklistItem::new("item_baby", "乳児用ミルク・おむつ"),
                ChecklistItem::new("item_mask", "生理用品・マスク"),
            ]),
        ),
        slot("eval-item-custom", SlotKind::Text { key: "item_custom" }),
        slot(
            "eval-contact-table",
            SlotKind::Table {
                rows: CONTACT_ROWS,
                columns: vec!["contact_name", "contact_tel"],
            },
        ),
        slot("eval-custom-timing", SlotKind::Text { key: "custom_timing" }),
    ];
    slots.extend(
        TIMELINE_SLOTS
            .iter()
            .map(|&(name, key)| slot(name, SlotKind::Text { key })),
    );
    ReportSpec { slots }
}
