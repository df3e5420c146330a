use crate::util::{generate_id, now};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_WINDOW_WIDTH: f64 = 400.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f64 = 300.0;
pub(crate) const MIN_WINDOW_WIDTH: f64 = 300.0;
pub(crate) const MIN_WINDOW_HEIGHT: f64 = 200.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Blank title and blank content; eligible for the empty-note sweep.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    pub fn both(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// On-screen placement of one open note.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FloatingNote {
    pub note_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FloatingPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl FloatingPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// `other` wins for every field it sets.
    pub fn merge(self, other: FloatingPatch) -> Self {
        Self {
            x: other.x.or(self.x),
            y: other.y.or(self.y),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }

    pub fn apply_to(&self, f: &mut FloatingNote) {
        if let Some(x) = self.x {
            f.x = x;
        }
        if let Some(y) = self.y {
            f.y = y;
        }
        if let Some(w) = self.width {
            f.width = w;
        }
        if let Some(h) = self.height {
            f.height = h;
        }
    }
}

/// Page-context note captured by the inline widget.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuickNote {
    pub id: String,
    pub content: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_merged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_from: Option<Vec<MergedSource>>,
}

impl QuickNote {
    pub fn is_merged(&self) -> bool {
        self.is_merged.unwrap_or(false)
    }
}

/// One original note absorbed into a merge.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MergedSource {
    pub id: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_text: Option<String>,
    pub content: String,
}

pub(crate) fn create_note(title: &str, content: &str) -> Note {
    let now = now();
    Note {
        id: generate_id(),
        title: title.to_string(),
        content: content.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn update_note(note: &Note, patch: &NotePatch) -> Note {
    let mut next = note.clone();
    if let Some(title) = &patch.title {
        next.title = title.clone();
    }
    if let Some(content) = &patch.content {
        next.content = content.clone();
    }
    // Never move backwards, even if the wall clock does.
    next.updated_at = now().max(note.updated_at);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_create_note_stamps_both_dates() {
        let n = create_note("t", "");
        assert_eq!(n.title, "t");
        assert_eq!(n.content, "");
        assert_eq!(n.created_at, n.updated_at);
        assert!(!n.id.is_empty());
    }

    #[test]
    fn test_update_note_empty_patch_keeps_fields_and_advances() {
        let n = create_note("t", "c");
        let u = update_note(&n, &NotePatch::default());
        assert_eq!(u.id, n.id);
        assert_eq!(u.title, "t");
        assert_eq!(u.content, "c");
        assert_eq!(u.created_at, n.created_at);
        assert!(u.updated_at >= n.updated_at);
    }

    #[test]
    fn test_update_note_partial() {
        let n = create_note("t", "c");
        let u = update_note(&n, &NotePatch::content("new"));
        assert_eq!(u.title, "t");
        assert_eq!(u.content, "new");
    }

    #[test]
    fn test_update_note_never_moves_updated_at_backwards() {
        let mut n = create_note("t", "c");
        n.updated_at = n.updated_at + Duration::hours(1);
        let u = update_note(&n, &NotePatch::title("x"));
        assert!(u.updated_at >= n.updated_at);
        assert!(u.updated_at >= u.created_at);
    }

    #[test]
    fn test_is_empty_trims_whitespace() {
        let mut n = create_note("  ", "\n\t");
        assert!(n.is_empty());
        n.content = "x".to_string();
        assert!(!n.is_empty());
    }

    #[test]
    fn test_floating_patch_merge_and_apply() {
        let p = FloatingPatch::position(1.0, 2.0).merge(FloatingPatch {
            x: Some(5.0),
            width: Some(350.0),
            ..Default::default()
        });
        let mut f = FloatingNote {
            note_id: "n".to_string(),
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 300.0,
            z_index: 1,
        };
        p.apply_to(&mut f);
        assert_eq!((f.x, f.y, f.width, f.height), (5.0, 2.0, 350.0, 300.0));
    }

    #[test]
    fn test_floating_note_serializes_camel_case() {
        let f = FloatingNote {
            note_id: "n".to_string(),
            x: 1.0,
            y: 2.0,
            width: 400.0,
            height: 300.0,
            z_index: 3,
        };
        let v = serde_json::to_value(&f).expect("should serialize");
        assert_eq!(v["noteId"], "n");
        assert_eq!(v["zIndex"], 3);
    }

    #[test]
    fn test_quick_note_omits_absent_optionals() {
        let q = QuickNote {
            id: "q".to_string(),
            content: "c".to_string(),
            url: "/".to_string(),
            timestamp: Utc::now(),
            quoted_text: None,
            is_merged: None,
            last_updated: None,
            merged_from: None,
        };
        let v = serde_json::to_value(&q).expect("should serialize");
        assert!(v.get("quotedText").is_none());
        assert!(v.get("mergedFrom").is_none());
        assert!(!q.is_merged());
    }
}
