use super::notebook::NoteBook;
use crate::models::{FloatingNote, FloatingPatch, Note, NotePatch};
use crate::persist::NotesPersistence;
use crate::storage::SharedStore;
use crate::util::{local_time_label, now, random_unit};
use crate::window::{Point, ViewportSource};
use leptos::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Changed {
    Nothing,
    Notes,
    Floating,
    Both,
}

impl Changed {
    fn notes(self) -> bool {
        matches!(self, Changed::Notes | Changed::Both)
    }

    fn floating(self) -> bool {
        matches!(self, Changed::Floating | Changed::Both)
    }
}

/// Session state for notes and their floating windows.
///
/// Constructed once by the app root and shared through context. Every
/// mutation goes through an action here: the action updates the book, writes
/// the full snapshot to storage, then publishes the changed slices. Views
/// subscribe to [`NotesStore::notes`] or [`NotesStore::floating_notes`].
#[derive(Clone)]
pub(crate) struct NotesStore {
    book: Arc<Mutex<NoteBook>>,
    notes: RwSignal<Vec<Note>>,
    floating_notes: RwSignal<Vec<FloatingNote>>,
    persistence: NotesPersistence,
    viewport: Arc<dyn ViewportSource>,
}

impl NotesStore {
    pub fn new(storage: SharedStore, viewport: Arc<dyn ViewportSource>) -> Self {
        let persistence = NotesPersistence::new(storage);
        let book = NoteBook::from(persistence.load());

        Self {
            notes: RwSignal::new(book.notes.clone()),
            floating_notes: RwSignal::new(book.floating_notes.clone()),
            book: Arc::new(Mutex::new(book)),
            persistence,
            viewport,
        }
    }

    /// Reactive slice: all notes, newest first.
    pub fn notes(&self) -> ReadSignal<Vec<Note>> {
        self.notes.read_only()
    }

    /// Reactive slice: open windows.
    pub fn floating_notes(&self) -> ReadSignal<Vec<FloatingNote>> {
        self.floating_notes.read_only()
    }

    pub fn note_untracked(&self, id: &str) -> Option<Note> {
        self.book.lock().ok()?.note(id).cloned()
    }

    pub fn add_note(&self, title: &str, content: &str) -> Option<Note> {
        let mut added = None;
        self.mutate(|b| {
            added = Some(b.add_note(title, content));
            Changed::Notes
        });
        added
    }

    pub fn update_note_by_id(&self, id: &str, patch: &NotePatch) {
        self.mutate(|b| {
            if b.update_note_by_id(id, patch) {
                Changed::Notes
            } else {
                Changed::Nothing
            }
        });
    }

    pub fn delete_note(&self, id: &str) {
        self.mutate(|b| {
            let had_window = b.floating(id).is_some();
            match (b.delete_note(id), had_window) {
                (false, _) => Changed::Nothing,
                (true, false) => Changed::Notes,
                (true, true) => Changed::Both,
            }
        });
    }

    pub fn open_floating_note(&self, note_id: &str, position: Option<Point>) {
        let viewport = self.viewport.viewport();
        self.mutate(|b| {
            if b.open_floating_note(note_id, position, viewport, random_unit) {
                Changed::Floating
            } else {
                Changed::Nothing
            }
        });
    }

    pub fn close_floating_note(&self, note_id: &str) {
        self.mutate(|b| {
            if b.close_floating_note(note_id) {
                Changed::Floating
            } else {
                Changed::Nothing
            }
        });
    }

    pub fn update_floating_note(&self, note_id: &str, patch: &FloatingPatch) {
        self.mutate(|b| {
            if b.update_floating_note(note_id, patch) {
                Changed::Floating
            } else {
                Changed::Nothing
            }
        });
    }

    pub fn bring_to_front(&self, note_id: &str) {
        self.mutate(|b| {
            if b.bring_to_front(note_id) {
                Changed::Floating
            } else {
                Changed::Nothing
            }
        });
    }

    /// Sweeps blank notes, then creates a timestamp-titled note and opens it.
    pub fn create_empty_note(&self) -> Option<Note> {
        self.cleanup_empty_notes();
        let title = format!("Note {}", local_time_label(now()));
        let note = self.add_note(&title, "")?;
        self.open_floating_note(&note.id, None);
        Some(note)
    }

    pub fn cleanup_empty_notes(&self) {
        self.mutate(|b| {
            let had_windows = b.floating_notes.len();
            let removed = b.cleanup_empty_notes();
            if removed.is_empty() {
                return Changed::Nothing;
            }
            tracing::info!(count = removed.len(), "Removed empty notes");
            if b.floating_notes.len() != had_windows {
                Changed::Both
            } else {
                Changed::Notes
            }
        });
    }

    fn mutate(&self, f: impl FnOnce(&mut NoteBook) -> Changed) {
        let published = {
            let Ok(mut book) = self.book.lock() else {
                tracing::error!("Notes state lock poisoned; dropping mutation");
                return;
            };
            let changed = f(&mut book);
            if changed == Changed::Nothing {
                return;
            }
            if let Err(e) = self
                .persistence
                .save(&book.notes, &book.floating_notes)
            {
                tracing::error!(error = %e, "Failed to persist notes");
            }
            (
                changed.notes().then(|| book.notes.clone()),
                changed.floating().then(|| book.floating_notes.clone()),
            )
        };

        // Publish after releasing the lock so subscribers may call back in.
        if let Some(notes) = published.0 {
            self.notes.set(notes);
        }
        if let Some(floating) = published.1 {
            self.floating_notes.set(floating);
        }
    }
}
