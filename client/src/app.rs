//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{evaluation::EvaluationPage, timeline::TimelinePage};
use crate::state::notice::Notice;

pub const TIMELINE_PATH: &str = "/timeline";
pub const EVALUATION_PATH: &str = "/evaluation";

/// Root application component.
///
/// Provides the notice signal shared across pages so a message raised on
/// one route is still shown after navigating to another.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notice = RwSignal::new(None::<Notice>);
    provide_context(notice);

    view! {
        <Title text="マイ・タイムライン"/>

        <Router>
            <main>
                <Routes fallback=|| "ページが見つかりません。".into_view()>
                    <Route path=StaticSegment("") view=TimelinePage/>
                    <Route path=StaticSegment("timeline") view=TimelinePage/>
                    <Route path=StaticSegment("evaluation") view=EvaluationPage/>
                </Routes>
            </main>
        </Router>
    }
}
