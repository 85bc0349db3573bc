//! Banner for the app-wide notice signal.

use leptos::prelude::*;

use crate::state::notice::Notice;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class=move || notice.with(|n| n.as_ref().map_or("notice", Notice::css_class)) role="status">
                <span>{move || notice.with(|n| n.as_ref().map(|n| n.message.clone()).unwrap_or_default())}</span>
                <button type="button" class="notice__close" on:click=move |_| notice.set(None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
