mod debounce;
mod notebook;
mod notes_store;
mod throttle;

pub(crate) use debounce::DebouncedSave;
pub(crate) use notes_store::NotesStore;
pub(crate) use throttle::Throttle;

use crate::config::NotesConfig;
use crate::quick_notes::QuickNotesStore;
use crate::storage::LocalStorage;
use crate::timers::{BrowserTimers, SharedTimers};
use crate::window::BrowserViewport;
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub config: NotesConfig,
    pub timers: SharedTimers,

    pub notes: NotesStore,
    pub quick_notes: QuickNotesStore,

    /// Global UI state.
    pub sidebar_open: RwSignal<bool>,
    pub quick_capture_open: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: NotesConfig) -> Self {
        let storage = LocalStorage::shared();

        Self {
            config,
            timers: BrowserTimers::shared(),
            notes: NotesStore::new(storage.clone(), Arc::new(BrowserViewport)),
            quick_notes: QuickNotesStore::new(storage),
            sidebar_open: RwSignal::new(false),
            quick_capture_open: RwSignal::new(false),
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
