use std::collections::HashSet;

use leptos::prelude::*;

use crate::notes::format_created;
use crate::notes::types::Note;

#[component]
pub fn NoteList(
    #[prop(into)] notes: Signal<Vec<Note>>,
    #[prop(into)] deleting: Signal<HashSet<String>>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="note-list">
            <For each=move || notes.get() key=|note| note.id.clone() let:note>
                {
                    let row_id = note.id.clone();
                    let delete_id = note.id.clone();
                    view! {
                        <li class="note-list-item">
                            <h2 class="note-title">{note.title.clone()}</h2>
                            <p class="note-content">{note.content.clone()}</p>
                            <div class="note-footer">
                                <span class="note-tag">{note.tag.as_str()}</span>
                                <span
                                    class="note-created"
                                    title=format!("Updated {}", format_created(&note.updated_at))
                                >
                                    {format_created(&note.created_at)}
                                </span>
                                <button
                                    class="note-delete"
                                    disabled=move || deleting.with(|ids| ids.contains(&row_id))
                                    on:click=move |_| on_delete.run(delete_id.clone())
                                >
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                }
            </For>
        </ul>
    }
}
