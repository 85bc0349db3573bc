//! Read-only evaluation report of the saved timeline.
//!
//! Entering without a saved record sends the user back to the data-entry
//! page instead of rendering an empty report.

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};
use report::timeline_report;

use crate::app::TIMELINE_PATH;
use crate::components::notice_banner::NoticeBanner;
use crate::components::report_slot::ReportSlot;
use crate::state::notice::Notice;
use crate::util::form_actions::{EvaluationState, evaluation_state};
use crate::util::local_storage::browser_store;
use crate::util::print::print_page;

#[component]
pub fn EvaluationPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    match evaluation_state(&browser_store(), &timeline_report()) {
        EvaluationState::Ready(rendered) => {
            let slots: Vec<_> = rendered
                .iter()
                .map(|(name, content)| (name.to_owned(), content.clone()))
                .collect();
            view! {
                <div class="page page-evaluation">
                    <h1>"マイ・タイムライン 確認"</h1>
                    <NoticeBanner/>
                    {slots
                        .into_iter()
                        .map(|(name, content)| view! { <ReportSlot name=name content=content/> })
                        .collect_view()}
                    <div class="page-actions">
                        <button type="button" id="printButton" on:click=move |_| print_page()>
                            "印刷する"
                        </button>
                        <A href=TIMELINE_PATH>"入力画面に戻る"</A>
                    </div>
                </div>
            }
            .into_any()
        }
        EvaluationState::Redirect(shown) => {
            notice.set(Some(shown));
            view! { <Redirect path=TIMELINE_PATH/> }.into_any()
        }
        EvaluationState::Failed(shown) => {
            notice.set(Some(shown));
            view! {
                <div class="page page-evaluation">
                    <NoticeBanner/>
                    <A href=TIMELINE_PATH>"入力画面に戻る"</A>
                </div>
            }
            .into_any()
        }
    }
}
