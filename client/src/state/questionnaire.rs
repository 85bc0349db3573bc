//! Field set of the evacuation timeline questionnaire.
//!
//! Every field carries the stable storage id the evaluation report reads.
//! Field positions are fixed at construction and double as field identity.

use record::{Field, FieldHandle};
use report::{CONTACT_ROWS, FAMILY_ROWS, TIMELINE_STEPS};

#[cfg(test)]
#[path = "questionnaire_test.rs"]
mod questionnaire_test;

/// An input and the text shown next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledInput {
    pub handle: FieldHandle,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub inputs: Vec<LabeledInput>,
}

/// Flat field list plus the sections that group it for display.
#[derive(Clone, Debug, Default)]
pub struct Questionnaire {
    pub fields: Vec<Field>,
    pub sections: Vec<Section>,
}

impl Questionnaire {
    fn section(&mut self, title: &'static str) -> &mut Self {
        self.sections.push(Section { title, inputs: Vec::new() });
        self
    }

    fn input(&mut self, label: &'static str, field: Field) -> &mut Self {
        let handle = FieldHandle(self.fields.len());
        self.fields.push(field);
        if let Some(section) = self.sections.last_mut() {
            section.inputs.push(LabeledInput { handle, label });
        }
        self
    }

    fn yes_no(&mut self, group: &'static str, yes: &'static str, no: &'static str) -> &mut Self {
        self.input(yes, Field::radio(&format!("{group}_yes"), group))
            .input(no, Field::radio(&format!("{group}_no"), group))
    }
}

const TIMELINE_LABELS: [&str; TIMELINE_STEPS] = [
    "早期注意情報（警戒レベル1）",
    "大雨・洪水注意報（警戒レベル2）",
    "高齢者等避難（警戒レベル3）",
    "避難指示（警戒レベル4）",
    "緊急安全確保（警戒レベル5）",
];

const INFO_SOURCES: [(&str, &str); 6] = [
    ("info_tv", "TV・ラジオ"),
    ("info_web", "自治体ホームページ"),
    ("info_mail", "防災メール"),
    ("info_line", "自治体LINE"),
    ("info_app", "防災アプリ"),
    ("info_jma", "気象庁ホームページ"),
];

const CARRY_ITEMS: [(&str, &str); 14] = [
    ("item_food", "食料・飲料水"),
    ("item_med", "常備薬・救急セット"),
    ("item_cash", "現金・身分証明書"),
    ("item_light", "懐中電灯"),
    ("item_radio", "携帯ラジオ"),
    ("item_battery", "モバイルバッテリー"),
    ("item_glasses", "メガネ・コンタクト"),
    ("item_clothes", "着替え・下着"),
    ("item_rain", "雨具"),
    ("item_towel", "タオル・毛布"),
    ("item_bag", "ビニール袋"),
    ("item_toilet", "携帯用トイレ"),
    ("item_baby", "乳児用ミルク・おむつ"),
    ("item_mask", "生理用品・マスク"),
];

/// Build the questionnaire.
pub fn questionnaire() -> Questionnaire {
    let mut q = Questionnaire::default();

    q.section("家族構成");
    for row in 1..=FAMILY_ROWS {
        q.input("氏名", Field::text(&format!("name{row}")))
            .input("年齢", Field::number(&format!("age{row}")))
            .input("電話番号", Field::phone(&format!("tel{row}")))
            .input("その他（持病など）", Field::text(&format!("other{row}")));
    }

    q.section("避難の際に支援が必要な人")
        .yes_no("support", "いる", "いない")
        .input("支援の内容", Field::text("support_detail"));

    q.section("ハザードマップの確認")
        .yes_no("flood", "洪水あり", "洪水なし")
        .input("想定される浸水の深さ", Field::text("flood_detail"))
        .yes_no("surge", "高潮あり", "高潮なし")
        .input("想定される高潮の深さ", Field::text("surge_detail"))
        .yes_no("landslide", "土砂災害あり", "土砂災害なし");

    q.section("避難先")
        .input("指定緊急避難場所", Field::checkbox("dest_shelter_check"))
        .input("場所", Field::text("dest_shelter_text"))
        .input("親戚や知人の家", Field::checkbox("dest_relative_check"))
        .input("場所", Field::text("dest_relative_text"))
        .input("頑丈な建物（マンションなど）", Field::checkbox("dest_building_check"))
        .input("宿泊施設など", Field::checkbox("dest_hotel_check"))
        .input("場所", Field::text("dest_hotel_text"))
        .input("自宅の上階（垂直避難）", Field::checkbox("dest_home_check"))
        .input("その他", Field::checkbox("dest_other_check"))
        .input("内容", Field::text("dest_other_text"));

    q.section("情報の入手方法");
    for (id, label) in INFO_SOURCES {
        q.input(label, Field::checkbox(id));
    }
    q.input("その他", Field::checkbox("info_other_check"))
        .input("内容", Field::text("info_other_text"));

    q.section("非常持出品");
    for (id, label) in CARRY_ITEMS {
        q.input(label, Field::checkbox(id));
    }
    q.input("その他の持出品", Field::multiline("item_custom"));

    q.section("緊急連絡先");
    for row in 1..=CONTACT_ROWS {
        q.input("氏名", Field::text(&format!("contact_name{row}")))
            .input("電話番号", Field::phone(&format!("contact_tel{row}")));
    }

    q.section("わが家の避難のタイミング")
        .input("独自の避難開始のタイミング", Field::multiline("custom_timing"));

    q.section("わが家のタイムライン");
    for (step, label) in TIMELINE_LABELS.into_iter().enumerate() {
        q.input(label, Field::multiline(&format!("timeline{}", step + 1)));
    }

    q
}
