mod api;
mod app;
mod components;
mod config;
mod notes;
mod state;
mod store;

use leptos::prelude::*;

use crate::api::NoteService;
use crate::app::App;
use crate::config::ApiConfig;
use crate::store::NotesStore;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
}

fn main() {
    init_tracing();

    let config = ApiConfig::from_build_env();
    if let Err(err) = config.validate() {
        tracing::warn!("api configuration invalid: {err}");
    }

    let store = NotesStore::new(NoteService::new(&config));
    let portal_target: web_sys::Element = document()
        .body()
        .expect("document should have a body")
        .into();

    leptos::mount::mount_to_body(move || view! { <App store=store portal_target=portal_target/> });
}
