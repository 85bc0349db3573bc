//! Rendering of one evaluation report slot.

use leptos::prelude::*;
use report::{ReportEntry, SlotContent};

#[cfg(test)]
#[path = "report_slot_test.rs"]
mod report_slot_test;

/// CSS class for a checklist line.
pub fn entry_class(entry: &ReportEntry) -> &'static str {
    match (entry.placeholder, entry.checked) {
        (true, _) => "placeholder",
        (false, true) => "checked",
        (false, false) => "not-checked",
    }
}

/// Section heading shown above a slot.
pub fn slot_heading(slot: &str) -> &'static str {
    match slot {
        "eval-family-table" => "家族構成",
        "eval-support" => "避難の際に支援が必要な人",
        "eval-flood" => "洪水・高潮",
        "eval-landslide" => "土砂災害",
        "eval-dest-list" => "避難先",
        "eval-info-list" => "情報の入手方法",
        "eval-item-list" => "非常持出品",
        "eval-item-custom" => "その他の持出品",
        "eval-contact-table" => "緊急連絡先",
        "eval-custom-timing" => "独自の避難開始のタイミング",
        "eval-timeline1" => "警戒レベル1",
        "eval-timeline2" => "警戒レベル2",
        "eval-timeline3" => "警戒レベル3",
        "eval-timeline4" => "警戒レベル4",
        "eval-timeline5" => "警戒レベル5",
        _ => "",
    }
}

#[component]
pub fn ReportSlot(name: String, content: SlotContent) -> impl IntoView {
    let heading = slot_heading(&name);
    let body = match content {
        SlotContent::Text(text) => view! { <p id=name class="report-text">{text}</p> }.into_any(),
        SlotContent::List(entries) => view! {
            <ul id=name class="report-list">
                {entries
                    .into_iter()
                    .map(|entry| {
                        let class = entry_class(&entry);
                        view! { <li class=class>{entry.label}</li> }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        SlotContent::Rows(rows) => view! {
            <table class="report-table">
                <tbody id=name>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <section class="report-slot">
            <h2>{heading}</h2>
            {body}
        </section>
    }
}
