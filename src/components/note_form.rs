use leptos::prelude::*;

use crate::notes::types::{NoteFormValues, NoteTag};
use crate::notes::validation::{validate, FieldErrors};

/// Purely presentational: validates and hands the values up; the parent
/// owns the creation request and the in-flight flag.
#[component]
pub fn NoteForm(
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<NoteFormValues>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let tag = RwSignal::new(NoteTag::Todo);
    let errors = RwSignal::new(FieldErrors::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let values = NoteFormValues {
            title: title.get(),
            content: content.get(),
            tag: tag.get(),
        };
        match validate(&values) {
            Ok(()) => {
                errors.set(FieldErrors::default());
                on_submit.run(values);
            }
            Err(found) => errors.set(found),
        }
    };

    view! {
        <form class="note-form" on:submit=submit>
            <div class="form-group">
                <label for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <Show when=move || errors.with(|found| found.title.is_some())>
                    <span class="form-error">{move || errors.with(|found| found.title.clone())}</span>
                </Show>
            </div>

            <div class="form-group">
                <label for="content">"Content"</label>
                <textarea
                    id="content"
                    rows="8"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || errors.with(|found| found.content.is_some())>
                    <span class="form-error">{move || errors.with(|found| found.content.clone())}</span>
                </Show>
            </div>

            <div class="form-group">
                <label for="tag">"Tag"</label>
                <select
                    id="tag"
                    prop:value=move || tag.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = NoteTag::parse(&event_target_value(&ev)) {
                            tag.set(parsed);
                        }
                    }
                >
                    {NoteTag::ALL
                        .iter()
                        .map(|option| {
                            view! { <option value=option.as_str()>{option.as_str()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-actions">
                <button type="button" class="cancel-button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="submit-button" disabled=move || submitting.get()>
                    "Create note"
                </button>
            </div>
        </form>
    }
}
