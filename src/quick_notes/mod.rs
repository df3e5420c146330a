//! Page-context notes captured by the inline widget, kept under their own key.

use crate::models::{MergedSource, QuickNote};
use crate::persist::parse_date_or;
use crate::storage::{
    load_json_from_storage, save_json_to_storage, KeyValueStore, SharedStore, QUICK_NOTES_KEY,
};
use crate::util::{generate_id, now};
use chrono::{DateTime, Utc};
use leptos::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MergeError {
    #[error("select at least two notes to merge (selected {selected})")]
    TooFewNotes { selected: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CaptureError {
    #[error("note content is empty")]
    EmptyContent,
}

const MERGE_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSource {
    id: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    timestamp: Option<Value>,
    #[serde(default)]
    quoted_text: Option<String>,
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredQuickNote {
    id: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    timestamp: Option<Value>,
    #[serde(default)]
    quoted_text: Option<String>,
    #[serde(default)]
    is_merged: Option<bool>,
    #[serde(default)]
    last_updated: Option<Value>,
    #[serde(default)]
    merged_from: Option<Vec<StoredSource>>,
}

fn decode_quick_note(raw: Value, now: DateTime<Utc>) -> Option<QuickNote> {
    let s: StoredQuickNote = serde_json::from_value(raw).ok()?;
    if s.id.trim().is_empty() {
        return None;
    }
    Some(QuickNote {
        id: s.id,
        content: s.content,
        url: s.url,
        timestamp: parse_date_or(s.timestamp.as_ref(), now),
        quoted_text: s.quoted_text.filter(|q| !q.is_empty()),
        is_merged: s.is_merged,
        last_updated: s
            .last_updated
            .as_ref()
            .map(|v| parse_date_or(Some(v), now)),
        merged_from: s.merged_from.map(|sources| {
            sources
                .into_iter()
                .map(|src| MergedSource {
                    id: src.id,
                    url: src.url,
                    timestamp: parse_date_or(src.timestamp.as_ref(), now),
                    quoted_text: src.quoted_text.filter(|q| !q.is_empty()),
                    content: src.content,
                })
                .collect()
        }),
    })
}

pub(crate) fn load_quick_notes(store: &dyn KeyValueStore) -> Vec<QuickNote> {
    let now = now();
    load_json_from_storage::<Vec<Value>>(store, QUICK_NOTES_KEY)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| decode_quick_note(raw, now))
        .collect()
}

pub(crate) fn new_quick_note(
    content: &str,
    url: &str,
    quoted_text: Option<&str>,
) -> Result<QuickNote, CaptureError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CaptureError::EmptyContent);
    }
    Ok(QuickNote {
        id: generate_id(),
        content: content.to_string(),
        url: url.to_string(),
        timestamp: now(),
        quoted_text: quoted_text
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string),
        is_merged: None,
        last_updated: None,
        merged_from: None,
    })
}

fn as_sources(note: &QuickNote) -> Vec<MergedSource> {
    match &note.merged_from {
        Some(inner) if note.is_merged() && !inner.is_empty() => inner.clone(),
        _ => vec![MergedSource {
            id: note.id.clone(),
            url: note.url.clone(),
            timestamp: note.timestamp,
            quoted_text: note.quoted_text.clone(),
            content: note.content.clone(),
        }],
    }
}

fn block(note: &QuickNote) -> String {
    match &note.quoted_text {
        Some(q) => {
            let quoted: Vec<String> = q.lines().map(|l| format!("> {l}")).collect();
            format!("{}\n\n{}", quoted.join("\n"), note.content)
        }
        None => note.content.clone(),
    }
}

/// Replaces the selected notes with one merged note at the head of the list.
///
/// The merged note takes the earliest source timestamp; `merged_from` lists
/// every original note, flattened through earlier merges, oldest first.
pub(crate) fn merge_quick_notes(
    notes: &[QuickNote],
    selected_ids: &[String],
    at: DateTime<Utc>,
) -> Result<(Vec<QuickNote>, QuickNote), MergeError> {
    let mut selected: Vec<&QuickNote> = notes
        .iter()
        .filter(|n| selected_ids.iter().any(|id| id == &n.id))
        .collect();
    if selected.len() < 2 {
        return Err(MergeError::TooFewNotes {
            selected: selected.len(),
        });
    }
    selected.sort_by_key(|n| n.timestamp);

    let earliest = selected[0];

    let mut merged_from: Vec<MergedSource> = selected.iter().flat_map(|n| as_sources(n)).collect();
    merged_from.sort_by_key(|s| s.timestamp);

    let content = selected
        .iter()
        .map(|n| block(n))
        .collect::<Vec<_>>()
        .join(MERGE_SEPARATOR);

    let merged = QuickNote {
        id: generate_id(),
        content,
        // Shared url when the sources agree, otherwise the oldest note's page.
        url: earliest.url.clone(),
        timestamp: earliest.timestamp,
        quoted_text: None,
        is_merged: Some(true),
        last_updated: Some(at),
        merged_from: Some(merged_from),
    };

    let mut next = Vec::with_capacity(notes.len() + 1 - selected.len());
    next.push(merged.clone());
    next.extend(
        notes
            .iter()
            .filter(|n| !selected_ids.iter().any(|id| id == &n.id))
            .cloned(),
    );

    Ok((next, merged))
}

/// Short human label for the page a note came from. Best effort only.
pub(crate) fn display_label(url: &str) -> String {
    let mut path = url.trim();
    if let Some(idx) = path.find("://") {
        let rest = &path[idx + 3..];
        path = rest.find('/').map(|i| &rest[i..]).unwrap_or("/");
    }
    let path = path.split(['?', '#']).next().unwrap_or("");

    match path.split('/').filter(|s| !s.is_empty()).last() {
        None => "Home".to_string(),
        Some(seg) => {
            let decoded = urlencoding::decode(seg)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| seg.to_string());
            decoded.replace(['-', '_'], " ")
        }
    }
}

/// QuickNote list for the session, persisted as a whole on every change.
#[derive(Clone)]
pub(crate) struct QuickNotesStore {
    notes: RwSignal<Vec<QuickNote>>,
    storage: SharedStore,
}

impl QuickNotesStore {
    pub fn new(storage: SharedStore) -> Self {
        let notes = load_quick_notes(storage.as_ref());
        Self {
            notes: RwSignal::new(notes),
            storage,
        }
    }

    pub fn notes(&self) -> ReadSignal<Vec<QuickNote>> {
        self.notes.read_only()
    }

    /// Re-reads storage; another tab may have captured notes.
    pub fn reload(&self) {
        self.notes.set(load_quick_notes(self.storage.as_ref()));
    }

    pub fn capture(
        &self,
        content: &str,
        url: &str,
        quoted_text: Option<&str>,
    ) -> Result<QuickNote, CaptureError> {
        let note = new_quick_note(content, url, quoted_text)?;
        let mut next = load_quick_notes(self.storage.as_ref());
        next.insert(0, note.clone());
        self.commit(next);
        Ok(note)
    }

    pub fn delete(&self, id: &str) {
        let mut next = self.notes.get_untracked();
        let before = next.len();
        next.retain(|n| n.id != id);
        if next.len() != before {
            self.commit(next);
        }
    }

    pub fn merge(&self, selected_ids: &[String]) -> Result<QuickNote, MergeError> {
        let (next, merged) = merge_quick_notes(&self.notes.get_untracked(), selected_ids, now())?;
        tracing::info!(
            merged_id = %merged.id,
            sources = merged.merged_from.as_ref().map_or(0, Vec::len),
            "Merged quick notes"
        );
        self.commit(next);
        Ok(merged)
    }

    fn commit(&self, next: Vec<QuickNote>) {
        if let Err(e) = save_json_to_storage(self.storage.as_ref(), QUICK_NOTES_KEY, &next) {
            tracing::error!(error = %e, "Failed to save quick notes");
        }
        self.notes.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn qn(id: &str, secs: i64, url: &str, content: &str) -> QuickNote {
        QuickNote {
            id: id.to_string(),
            content: content.to_string(),
            url: url.to_string(),
            timestamp: Utc.timestamp_opt(secs, 0).single().expect("valid ts"),
            quoted_text: None,
            is_merged: None,
            last_updated: None,
            merged_from: None,
        }
    }

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_uses_earliest_timestamp_and_chronological_sources() {
        let notes = vec![qn("A", 10, "/a", "alpha"), qn("B", 5, "/b", "beta"), qn("C", 1, "/c", "c")];
        let at = Utc.timestamp_opt(100, 0).single().expect("valid ts");
        let (next, merged) = merge_quick_notes(&notes, &ids(&["A", "B"]), at).expect("merge");

        assert_eq!(merged.timestamp.timestamp(), 5);
        assert_eq!(merged.last_updated, Some(at));
        assert!(merged.is_merged());
        let from: Vec<&str> = merged
            .merged_from
            .as_ref()
            .expect("sources")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(from, vec!["B", "A"]);

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, merged.id);
        assert!(next.iter().all(|n| n.id != "A" && n.id != "B"));
        assert_eq!(next[1].id, "C");
    }

    #[test]
    fn test_merge_requires_two_notes() {
        let notes = vec![qn("A", 10, "/", "a")];
        let at = Utc::now();
        assert_eq!(
            merge_quick_notes(&notes, &ids(&["A"]), at).unwrap_err(),
            MergeError::TooFewNotes { selected: 1 }
        );
        assert_eq!(
            merge_quick_notes(&notes, &ids(&["A", "missing"]), at).unwrap_err(),
            MergeError::TooFewNotes { selected: 1 }
        );
    }

    #[test]
    fn test_merge_content_orders_blocks_and_quotes() {
        let mut b = qn("B", 5, "/p", "second");
        b.quoted_text = Some("line one\nline two".to_string());
        let notes = vec![qn("A", 1, "/p", "first"), b];
        let (_, merged) = merge_quick_notes(&notes, &ids(&["A", "B"]), Utc::now()).expect("merge");
        assert_eq!(
            merged.content,
            "first\n\n---\n\n> line one\n> line two\n\nsecond"
        );
        assert_eq!(merged.url, "/p");
        assert!(merged.quoted_text.is_none());
    }

    #[test]
    fn test_merge_of_merged_flattens_sources() {
        let notes = vec![qn("A", 3, "/", "a"), qn("B", 1, "/", "b"), qn("C", 2, "/", "c")];
        let (next, first) = merge_quick_notes(&notes, &ids(&["A", "B"]), Utc::now()).expect("merge");
        let (_, second) =
            merge_quick_notes(&next, &[first.id.clone(), "C".to_string()], Utc::now()).expect("merge");
        let from: Vec<&str> = second
            .merged_from
            .as_ref()
            .expect("sources")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(from, vec!["B", "C", "A"]);
        assert_eq!(second.timestamp.timestamp(), 1);
    }

    #[test]
    fn test_new_quick_note_trims_and_rejects_empty() {
        assert_eq!(new_quick_note("   ", "/", None).unwrap_err(), CaptureError::EmptyContent);
        let n = new_quick_note("  hi  ", "/blog/x", Some("  ")).expect("capture");
        assert_eq!(n.content, "hi");
        assert!(n.quoted_text.is_none());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("/"), "Home");
        assert_eq!(display_label(""), "Home");
        assert_eq!(display_label("/blog/getting-started"), "getting started");
        assert_eq!(display_label("/compare/service/aws_ec2-vs-azure_vm/"), "aws ec2 vs azure vm");
        assert_eq!(display_label("https://example.com/glossary?q=1"), "glossary");
        assert_eq!(display_label("https://example.com"), "Home");
        assert_eq!(display_label("/notes/hello%20world"), "hello world");
    }

    #[test]
    fn test_load_tolerates_bad_dates_and_records() {
        let mem = MemoryStorage::new();
        mem.set(
            QUICK_NOTES_KEY,
            r#"[{"id":"a","content":"x","url":"/","timestamp":"garbage"},{"content":"no id"},{"id":"b","content":"y","url":"/","timestamp":"2024-01-01T00:00:00.000Z","quotedText":"q"}]"#,
        )
        .expect("set");
        let notes = load_quick_notes(&mem);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].quoted_text.as_deref(), Some("q"));
        assert_eq!(notes[1].timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_store_capture_delete_merge_persist() {
        let mem = MemoryStorage::new();
        let store = QuickNotesStore::new(Arc::new(mem.clone()));
        let a = store.capture("first", "/a", None).expect("capture");
        let b = store.capture("second", "/b", Some("quote")).expect("capture");
        assert_eq!(load_quick_notes(&mem).len(), 2);
        assert_eq!(store.notes().get_untracked()[0].id, b.id);

        let merged = store.merge(&[a.id.clone(), b.id.clone()]).expect("merge");
        let stored = load_quick_notes(&mem);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], merged);

        store.delete(&merged.id);
        assert!(load_quick_notes(&mem).is_empty());
    }
}
