//! Data-entry page for the evacuation timeline.
//!
//! Save persists the form and opens the evaluation page. Restore reads the
//! saved record back into the form. Failures stay on this page as notices.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::EVALUATION_PATH;
use crate::components::field_input::FieldInput;
use crate::components::notice_banner::NoticeBanner;
use crate::state::form::FormModel;
use crate::state::notice::Notice;
use crate::state::questionnaire::questionnaire;
use crate::util::form_actions::{SaveOutcome, restore_action, save_action};
use crate::util::local_storage::browser_store;
use crate::util::print::print_page;

#[component]
pub fn TimelinePage() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();
    let questionnaire = questionnaire();
    let form = RwSignal::new(FormModel::new(questionnaire.fields));
    provide_context(form);
    let navigate = use_navigate();

    let on_save = move |_| {
        let mut store = browser_store();
        match form.with_untracked(|f| save_action(&mut store, f)) {
            SaveOutcome::Saved => {
                notice.set(None);
                navigate(EVALUATION_PATH, NavigateOptions::default());
            }
            SaveOutcome::Failed(failure) => notice.set(Some(failure)),
        }
    };

    let on_restore = move |_| {
        let store = browser_store();
        let shown = form.try_update(|f| restore_action(&store, f));
        notice.set(shown);
    };

    view! {
        <div class="page page-timeline">
            <h1>"マイ・タイムライン"</h1>
            <NoticeBanner/>
            <form id="timelineForm" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                {questionnaire
                    .sections
                    .into_iter()
                    .map(|section| {
                        view! {
                            <fieldset class="form-section">
                                <legend>{section.title}</legend>
                                {section
                                    .inputs
                                    .into_iter()
                                    .map(|input| view! { <FieldInput handle=input.handle label=input.label/> })
                                    .collect_view()}
                            </fieldset>
                        }
                    })
                    .collect_view()}
            </form>
            <div class="page-actions">
                <button type="button" id="saveButton" on:click=on_save>
                    "保存して確認する"
                </button>
                <button type="button" id="loadButton" on:click=on_restore>
                    "保存した内容を復元"
                </button>
                <button type="button" id="printButton" on:click=move |_| print_page()>
                    "印刷する"
                </button>
            </div>
        </div>
    }
}
