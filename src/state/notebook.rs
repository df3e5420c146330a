use crate::models::{
    create_note, update_note, FloatingNote, FloatingPatch, Note, NotePatch,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::persist::NotesSnapshot;
use crate::window::{clamp_position, random_position, Point, Viewport};

/// Notes and their open windows, with every mutation the store exposes.
///
/// Notes are kept newest first. Each method reports whether anything changed
/// so the store only republishes and persists real mutations.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct NoteBook {
    pub notes: Vec<Note>,
    pub floating_notes: Vec<FloatingNote>,
}

impl From<NotesSnapshot> for NoteBook {
    fn from(s: NotesSnapshot) -> Self {
        Self {
            notes: s.notes,
            floating_notes: s.floating_notes,
        }
    }
}

impl NoteBook {
    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn floating(&self, note_id: &str) -> Option<&FloatingNote> {
        self.floating_notes.iter().find(|f| f.note_id == note_id)
    }

    pub fn max_z(&self) -> i64 {
        self.floating_notes
            .iter()
            .map(|f| f.z_index)
            .max()
            .unwrap_or(0)
            .max(0)
    }

    pub fn add_note(&mut self, title: &str, content: &str) -> Note {
        let mut note = create_note(title, content);
        // Ids come from a random source; re-roll on the off chance of a clash.
        while self.note(&note.id).is_some() {
            note = create_note(title, content);
        }
        self.notes.insert(0, note.clone());
        note
    }

    pub fn update_note_by_id(&mut self, id: &str, patch: &NotePatch) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                *n = update_note(n, patch);
                true
            }
            None => false,
        }
    }

    /// Removes the note and its window, if open.
    pub fn delete_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.floating_notes.retain(|f| f.note_id != id);
        self.notes.len() != before
    }

    /// Opens a window for `note_id`, or brings the existing one to front.
    pub fn open_floating_note(
        &mut self,
        note_id: &str,
        position: Option<Point>,
        viewport: Viewport,
        rand: impl FnMut() -> f64,
    ) -> bool {
        if self.note(note_id).is_none() {
            return false;
        }
        if self.floating(note_id).is_some() {
            return self.bring_to_front(note_id);
        }

        let (width, height) = (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
        let pos = match position {
            Some(p) => clamp_position(p, width, height, viewport),
            None => random_position(width, height, viewport, rand),
        };
        let z_index = self.max_z() + 1;
        self.floating_notes.push(FloatingNote {
            note_id: note_id.to_string(),
            x: pos.x,
            y: pos.y,
            width,
            height,
            z_index,
        });
        true
    }

    pub fn close_floating_note(&mut self, note_id: &str) -> bool {
        let before = self.floating_notes.len();
        self.floating_notes.retain(|f| f.note_id != note_id);
        self.floating_notes.len() != before
    }

    /// Merges `patch` into the window's layout. Position is taken as given;
    /// size still never drops below the minimum.
    pub fn update_floating_note(&mut self, note_id: &str, patch: &FloatingPatch) -> bool {
        let Some(f) = self.floating_notes.iter_mut().find(|f| f.note_id == note_id) else {
            return false;
        };
        let before = f.clone();
        patch.apply_to(f);
        f.width = f.width.max(MIN_WINDOW_WIDTH);
        f.height = f.height.max(MIN_WINDOW_HEIGHT);
        *f != before
    }

    pub fn bring_to_front(&mut self, note_id: &str) -> bool {
        let max_z = self.max_z();
        let Some(f) = self.floating_notes.iter_mut().find(|f| f.note_id == note_id) else {
            return false;
        };
        f.z_index = max_z + 1;
        true
    }

    /// Deletes every note with a blank title and blank content. Returns the removed ids.
    pub fn cleanup_empty_notes(&mut self) -> Vec<String> {
        let empty: Vec<String> = self
            .notes
            .iter()
            .filter(|n| n.is_empty())
            .map(|n| n.id.clone())
            .collect();
        if empty.is_empty() {
            return empty;
        }
        self.notes.retain(|n| !empty.contains(&n.id));
        self.floating_notes.retain(|f| !empty.contains(&f.note_id));
        empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const VP: Viewport = Viewport {
        width: 1200.0,
        height: 800.0,
    };

    fn open(b: &mut NoteBook, id: &str) -> bool {
        b.open_floating_note(id, None, VP, || 0.5)
    }

    #[test]
    fn test_add_note_inserts_at_head() {
        let mut b = NoteBook::default();
        let a = b.add_note("a", "");
        let c = b.add_note("c", "body");
        assert_eq!(b.notes[0].id, c.id);
        assert_eq!(b.notes[1].id, a.id);
    }

    #[test]
    fn test_ids_stay_unique_across_add_delete() {
        let mut b = NoteBook::default();
        let mut ids = Vec::new();
        for i in 0..50 {
            let n = b.add_note(&format!("n{i}"), "");
            ids.push(n.id);
            if i % 3 == 0 {
                let victim = ids.remove(0);
                b.delete_note(&victim);
            }
            let unique: HashSet<_> = b.notes.iter().map(|n| n.id.clone()).collect();
            assert_eq!(unique.len(), b.notes.len());
        }
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut b = NoteBook::default();
        b.add_note("a", "");
        let before = b.clone();
        assert!(!b.update_note_by_id("missing", &NotePatch::title("x")));
        assert_eq!(b, before);
    }

    #[test]
    fn test_update_note_by_id_overwrites_fields() {
        let mut b = NoteBook::default();
        let n = b.add_note("a", "");
        assert!(b.update_note_by_id(&n.id, &NotePatch::content("body")));
        let stored = b.note(&n.id).expect("note exists");
        assert_eq!(stored.title, "a");
        assert_eq!(stored.content, "body");
        assert!(stored.updated_at >= n.updated_at);
    }

    #[test]
    fn test_delete_cascades_to_window() {
        let mut b = NoteBook::default();
        let n = b.add_note("a", "");
        open(&mut b, &n.id);
        assert!(b.delete_note(&n.id));
        assert!(b.notes.is_empty());
        assert!(b.floating_notes.is_empty());
    }

    #[test]
    fn test_open_twice_yields_one_window_with_higher_z() {
        let mut b = NoteBook::default();
        let n = b.add_note("a", "");
        open(&mut b, &n.id);
        let z1 = b.floating(&n.id).expect("open").z_index;
        open(&mut b, &n.id);
        assert_eq!(b.floating_notes.len(), 1);
        assert!(b.floating(&n.id).expect("open").z_index > z1);
    }

    #[test]
    fn test_open_defaults_and_bounds() {
        let mut b = NoteBook::default();
        let n = b.add_note("a", "");
        b.open_floating_note(&n.id, None, VP, || 0.999);
        let f = b.floating(&n.id).expect("open");
        assert_eq!((f.width, f.height), (400.0, 300.0));
        assert!(f.x >= 0.0 && f.x <= VP.width - 400.0);
        assert!(f.y >= 0.0 && f.y <= VP.height - 300.0);
        assert_eq!(f.z_index, 1);
    }

    #[test]
    fn test_open_explicit_position_is_clamped() {
        let mut b = NoteBook::default();
        let n = b.add_note("a", "");
        b.open_floating_note(&n.id, Some(Point::new(5000.0, -20.0)), VP, || 0.0);
        let f = b.floating(&n.id).expect("open");
        assert_eq!((f.x, f.y), (800.0, 0.0));
    }

    #[test]
    fn test_open_unknown_note_is_rejected() {
        let mut b = NoteBook::default();
        assert!(!open(&mut b, "ghost"));
        assert!(b.floating_notes.is_empty());
    }

    #[test]
    fn test_close_keeps_note() {
        let mut b = NoteBook::default();
        let n = b.add_note("a", "");
        open(&mut b, &n.id);
        assert!(b.close_floating_note(&n.id));
        assert!(b.floating_notes.is_empty());
        assert!(b.note(&n.id).is_some());
    }

    #[test]
    fn test_bring_to_front_uses_max_plus_one() {
        let mut b = NoteBook::default();
        let x = b.add_note("x", "");
        let y = b.add_note("y", "");
        open(&mut b, &x.id);
        open(&mut b, &y.id);
        assert_eq!(b.floating(&y.id).expect("y").z_index, 2);
        b.bring_to_front(&x.id);
        assert_eq!(b.floating(&x.id).expect("x").z_index, 3);
        assert!(!b.bring_to_front("ghost"));
    }

    #[test]
    fn test_update_floating_merges_and_floors_size() {
        let mut b = NoteBook::default();
        let n = b.add_note("a", "");
        b.open_floating_note(&n.id, Some(Point::new(10.0, 10.0)), VP, || 0.0);
        assert!(b.update_floating_note(&n.id, &FloatingPatch::size(100.0, 900.0)));
        let f = b.floating(&n.id).expect("open");
        assert_eq!((f.x, f.y, f.width, f.height), (10.0, 10.0, 300.0, 900.0));
        assert!(!b.update_floating_note(&n.id, &FloatingPatch::default()));
    }

    #[test]
    fn test_cleanup_removes_only_blank_notes() {
        let mut b = NoteBook::default();
        let blank = b.add_note("  ", "\n");
        let titled = b.add_note("title", "");
        let bodied = b.add_note("", "body");
        open(&mut b, &blank.id);
        open(&mut b, &titled.id);

        let removed = b.cleanup_empty_notes();
        assert_eq!(removed, vec![blank.id.clone()]);
        assert!(b.note(&blank.id).is_none());
        assert!(b.note(&titled.id).is_some());
        assert!(b.note(&bodied.id).is_some());
        assert_eq!(b.floating_notes.len(), 1);
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let mut b = NoteBook::default();
        b.add_note("", "");
        b.cleanup_empty_notes();
        let after_first = b.clone();
        assert!(b.cleanup_empty_notes().is_empty());
        assert_eq!(b, after_first);
    }
}
