//! Whole-collection persistence of notes and their floating layouts.
//!
//! Loads never fail: a missing key or an unparsable payload yields an empty
//! collection, and individual records that cannot be decoded are skipped.

use crate::models::{FloatingNote, Note, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::storage::{
    load_json_from_storage, save_json_to_storage, SharedStore, StorageError, FLOATING_NOTES_KEY,
    NOTES_KEY,
};
use crate::util::now;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct NotesSnapshot {
    pub notes: Vec<Note>,
    pub floating_notes: Vec<FloatingNote>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredNote {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    created_at: Option<Value>,
    #[serde(default)]
    updated_at: Option<Value>,
}

/// ISO-8601 string or epoch milliseconds; anything else becomes `fallback`.
pub(crate) fn parse_date_or(value: Option<&Value>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or(fallback),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .unwrap_or(fallback),
        _ => fallback,
    }
}

fn decode_note(raw: Value, now: DateTime<Utc>) -> Option<Note> {
    let stored: StoredNote = serde_json::from_value(raw).ok()?;
    if stored.id.trim().is_empty() {
        return None;
    }
    let created_at = parse_date_or(stored.created_at.as_ref(), now);
    let updated_at = parse_date_or(stored.updated_at.as_ref(), now).max(created_at);
    Some(Note {
        id: stored.id,
        title: stored.title,
        content: stored.content,
        created_at,
        updated_at,
    })
}

fn decode_floating(raw: Value) -> Option<FloatingNote> {
    let mut f: FloatingNote = serde_json::from_value(raw).ok()?;
    if !(f.x.is_finite() && f.y.is_finite() && f.width.is_finite() && f.height.is_finite()) {
        return None;
    }
    f.width = f.width.max(MIN_WINDOW_WIDTH);
    f.height = f.height.max(MIN_WINDOW_HEIGHT);
    Some(f)
}

#[derive(Clone)]
pub(crate) struct NotesPersistence {
    store: SharedStore,
}

impl NotesPersistence {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn load(&self) -> NotesSnapshot {
        let now = now();

        let mut notes: Vec<Note> = Vec::new();
        for raw in load_json_from_storage::<Vec<Value>>(self.store.as_ref(), NOTES_KEY)
            .unwrap_or_default()
        {
            if let Some(n) = decode_note(raw, now) {
                if !notes.iter().any(|x| x.id == n.id) {
                    notes.push(n);
                }
            }
        }

        let mut floating_notes: Vec<FloatingNote> = Vec::new();
        for raw in load_json_from_storage::<Vec<Value>>(self.store.as_ref(), FLOATING_NOTES_KEY)
            .unwrap_or_default()
        {
            let Some(f) = decode_floating(raw) else {
                continue;
            };
            // Layouts never outlive their note, and a note has at most one window.
            if notes.iter().any(|n| n.id == f.note_id)
                && !floating_notes.iter().any(|x| x.note_id == f.note_id)
            {
                floating_notes.push(f);
            }
        }

        tracing::debug!(
            notes = notes.len(),
            floating = floating_notes.len(),
            "Loaded notes snapshot"
        );

        NotesSnapshot {
            notes,
            floating_notes,
        }
    }

    pub fn save(&self, notes: &[Note], floating_notes: &[FloatingNote]) -> Result<(), StorageError> {
        save_json_to_storage(self.store.as_ref(), NOTES_KEY, notes)?;
        save_json_to_storage(self.store.as_ref(), FLOATING_NOTES_KEY, floating_notes)
    }
}
