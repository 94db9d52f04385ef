use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use leptos::prelude::*;
use tracing::{debug, warn};

use crate::api::{ApiError, ListNotesParams, NoteService};
use crate::notes::types::{FetchNotesResponse, Note, NoteFormValues};
use crate::state::PER_PAGE;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub page: usize,
    pub search: String,
}

#[derive(Default)]
struct CacheInner {
    pages: HashMap<QueryKey, FetchNotesResponse>,
    latest_request: u64,
}

/// Client-side view of the server-owned notes collection.
///
/// Owns the response cache keyed by `(page, search)`, the displayed
/// data, and the refresh policy: a successful mutation always drops the
/// cache and triggers a refetch, never patching entries in place.
#[derive(Clone)]
pub struct NotesStore {
    service: StoredValue<NoteService, LocalStorage>,
    cache: Arc<Mutex<CacheInner>>,
    generation: RwSignal<u64>,
    pub notes: RwSignal<Option<FetchNotesResponse>>,
    pub fetching: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl NotesStore {
    pub fn new(service: NoteService) -> Self {
        Self {
            service: StoredValue::new_local(service),
            cache: Arc::new(Mutex::new(CacheInner::default())),
            generation: RwSignal::new(0),
            notes: RwSignal::new(None),
            fetching: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // Reactive dependency for consumers that refetch after a mutation.
    pub fn track_invalidation(&self) {
        self.generation.track();
    }

    pub fn cached(&self, key: &QueryKey) -> Option<FetchNotesResponse> {
        self.lock().pages.get(key).cloned()
    }

    /// Starts a list fetch for `key` and returns its request id.
    ///
    /// A cached response for the key is shown immediately; otherwise the
    /// previously displayed page stays on screen while the fetch runs.
    pub fn begin_list(&self, key: &QueryKey) -> u64 {
        if let Some(hit) = self.cached(key) {
            self.notes.set(Some(hit));
        }
        self.fetching.set(true);
        self.load_error.set(None);

        let mut inner = self.lock();
        inner.latest_request += 1;
        debug!(
            page = key.page,
            search = %key.search,
            request = inner.latest_request,
            "list fetch started"
        );
        inner.latest_request
    }

    /// Applies a finished list fetch unless a newer one has started.
    pub fn settle_list(
        &self,
        request: u64,
        key: &QueryKey,
        result: Result<FetchNotesResponse, ApiError>,
    ) {
        if self.lock().latest_request != request {
            // Superseded; the latest request owns the screen.
            return;
        }

        self.fetching.set(false);
        match result {
            Ok(response) => {
                self.lock().pages.insert(key.clone(), response.clone());
                self.notes.set(Some(response));
            }
            Err(err) => {
                warn!("list fetch failed: {err}");
                // Keep whatever was on screen; only flag the failure.
                self.load_error.set(Some("Error loading notes".to_string()));
            }
        }
    }

    pub async fn list(&self, key: &QueryKey) -> Result<FetchNotesResponse, ApiError> {
        let service = self.service.get_value();
        let params = ListNotesParams::new(key.page, PER_PAGE, &key.search);
        service.fetch_notes(&params).await
    }

    pub async fn create(&self, values: &NoteFormValues) -> Result<Note, ApiError> {
        let service = self.service.get_value();
        let note = service.create_note(values).await?;
        self.invalidate();
        Ok(note)
    }

    pub async fn delete(&self, id: &str) -> Result<Note, ApiError> {
        let service = self.service.get_value();
        let note = service.delete_note(id).await?;
        self.invalidate();
        Ok(note)
    }

    /// Drops every cached page and notifies listeners to refetch.
    pub fn invalidate(&self) {
        self.lock().pages.clear();
        self.generation.update(|generation| *generation += 1);
    }
}
