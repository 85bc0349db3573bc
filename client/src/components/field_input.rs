//! One questionnaire input bound to the shared form model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `RwSignal<FormModel>` from context. Radio clicks go
//! through `FormModel::click_radio` so a second click clears the option.

use leptos::prelude::*;
use record::{FieldHandle, FieldKind};

use crate::state::form::FormModel;

#[component]
pub fn FieldInput(handle: FieldHandle, label: &'static str) -> impl IntoView {
    let form = expect_context::<RwSignal<FormModel>>();
    let Some((kind, id, group)) = form.with_untracked(|f| {
        f.field(handle).map(|field| {
            (
                field.kind,
                field.stable_id().unwrap_or_default().to_owned(),
                field.group_name.clone().unwrap_or_default(),
            )
        })
    }) else {
        return ().into_any();
    };

    let value = move || form.with(|f| f.field(handle).map(|field| field.value.clone()).unwrap_or_default());
    let checked = move || form.with(|f| f.field(handle).is_some_and(|field| field.checked));
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_value(handle, event_target_value(&ev)));

    match kind {
        FieldKind::Radio => view! {
            <label class="field field--radio">
                <input
                    type="radio"
                    name=group
                    data-id=id
                    prop:checked=checked
                    on:click=move |_| form.update(|f| f.click_radio(handle))
                />
                <span>{label}</span>
            </label>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <label class="field field--checkbox">
                <input
                    type="checkbox"
                    data-id=id
                    prop:checked=checked
                    on:change=move |ev| form.update(|f| f.set_checked(handle, event_target_checked(&ev)))
                />
                <span>{label}</span>
            </label>
        }
        .into_any(),
        FieldKind::MultilineText => view! {
            <label class="field field--multiline">
                <span>{label}</span>
                <textarea data-id=id prop:value=value on:input=on_input></textarea>
            </label>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Number | FieldKind::Phone => {
            let input_type = kind.input_type().unwrap_or("text");
            view! {
                <label class="field">
                    <span>{label}</span>
                    <input type=input_type data-id=id prop:value=value on:input=on_input />
                </label>
            }
            .into_any()
        }
    }
}
