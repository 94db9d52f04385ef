use std::collections::HashSet;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::components::modal::Modal;
use crate::components::note_form::NoteForm;
use crate::components::note_list::NoteList;
use crate::components::pagination::Pagination;
use crate::components::search_box::SearchBox;
use crate::notes::types::NoteFormValues;
use crate::state::{Debouncer, QueryState, SEARCH_DEBOUNCE_MS};
use crate::store::{NotesStore, QueryKey};

#[component]
pub fn App(store: NotesStore, portal_target: web_sys::Element) -> impl IntoView {
    let portal_mount = StoredValue::new_local(portal_target);

    let query = RwSignal::new(QueryState::default());
    let debounced_search = RwSignal::new(String::new());
    let modal_open = RwSignal::new(false);
    let creating = RwSignal::new(false);
    let deleting = RwSignal::new(HashSet::<String>::new());
    let mutation_error = RwSignal::new(None::<String>);
    let debouncer = StoredValue::new(Debouncer::default());

    let notes = store.notes;
    let fetching = store.fetching;
    let load_error = store.load_error;

    let search_value = Signal::derive(move || query.with(|state| state.search.clone()));
    // Memoized so that keystrokes which leave the page untouched do not
    // re-key the list query; only a real page change does.
    let current_page = Memo::new(move |_| query.with(|state| state.page));
    let total_pages = Signal::derive(move || {
        notes.with(|data| data.as_ref().map(|data| data.total_pages).unwrap_or(0))
    });
    let note_items = Signal::derive(move || {
        notes.with(|data| {
            data.as_ref()
                .map(|data| data.notes.clone())
                .unwrap_or_default()
        })
    });

    // The active list query is keyed by (page, debounced search) and the
    // store's invalidation generation; any change triggers a refetch.
    {
        let store = store.clone();
        Effect::new(move |_| {
            store.track_invalidation();
            let key = QueryKey {
                page: current_page.get(),
                search: debounced_search.get(),
            };
            let request = store.begin_list(&key);
            let store = store.clone();
            spawn_local(async move {
                let result = store.list(&key).await;
                store.settle_list(request, &key, result);
            });
        });
    }

    let on_search_change = Callback::new(move |value: String| {
        query.update(|state| state.set_search(value.clone()));
        let Some(generation) = debouncer.try_update_value(|debouncer| debouncer.input(&value))
        else {
            return;
        };
        set_timeout(
            move || {
                let settled = debouncer.with_value(|debouncer| debouncer.settle(generation));
                if let Some(value) = settled {
                    if debounced_search.get_untracked() != value {
                        debounced_search.set(value);
                    }
                }
            },
            Duration::from_millis(SEARCH_DEBOUNCE_MS),
        );
    });

    let on_page_change = Callback::new(move |page: usize| {
        let total = total_pages.get();
        query.update(|state| state.set_page(page, total));
    });

    let close_modal = Callback::new(move |_: ()| modal_open.set(false));

    let on_create = {
        let store = store.clone();
        Callback::new(move |values: NoteFormValues| {
            creating.set(true);
            let store = store.clone();
            spawn_local(async move {
                match store.create(&values).await {
                    Ok(_) => {
                        mutation_error.set(None);
                        modal_open.set(false);
                    }
                    Err(err) => {
                        warn!("create note failed: {err}");
                        mutation_error.set(Some("Failed to create note".to_string()));
                    }
                }
                creating.set(false);
            });
        })
    };

    let on_delete = {
        let store = store.clone();
        Callback::new(move |id: String| {
            deleting.update(|pending| {
                pending.insert(id.clone());
            });
            let store = store.clone();
            spawn_local(async move {
                match store.delete(&id).await {
                    Ok(_) => mutation_error.set(None),
                    Err(err) => {
                        warn!("delete note failed: {err}");
                        let message = if err.is_not_found() {
                            "Failed to delete note: not found"
                        } else {
                            "Failed to delete note"
                        };
                        mutation_error.set(Some(message.to_string()));
                    }
                }
                deleting.update(|pending| {
                    pending.remove(&id);
                });
            });
        })
    };

    view! {
        <div class="app">
            <header class="toolbar">
                <SearchBox value=search_value on_change=on_search_change/>
                <Show when=move || (total_pages.get() > 1)>
                    <Pagination
                        page=current_page
                        total_pages=total_pages
                        on_page_change=on_page_change
                    />
                </Show>
                <button class="create-button" on:click=move |_| modal_open.set(true)>
                    "Create note +"
                </button>
            </header>

            <Show when=move || fetching.get() && notes.with(|data| data.is_none())>
                <p class="status">"Loading..."</p>
            </Show>
            <Show when=move || load_error.with(|error| error.is_some())>
                <p class="status-error">{move || load_error.get()}</p>
            </Show>
            <Show when=move || mutation_error.with(|error| error.is_some())>
                <p class="status-error">{move || mutation_error.get()}</p>
            </Show>

            <NoteList notes=note_items deleting=deleting on_delete=on_delete/>

            <Show when=move || modal_open.get()>
                <Modal mount=portal_mount.get_value() on_close=close_modal>
                    <NoteForm submitting=creating on_submit=on_create on_cancel=close_modal/>
                </Modal>
            </Show>
        </div>
    }
}
