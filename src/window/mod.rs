//! Floating note window behaviour, independent of the DOM.
//!
//! A window is in one of `{Viewing, Editing} × {Idle, Dragging, Resizing}`.
//! Pointer events are fed in; layout patches come out already clamped.

mod geometry;

pub(crate) use geometry::{
    clamp_position, clamp_size, random_position, BrowserViewport, Point, Viewport,
    ViewportSource,
};

use crate::models::{FloatingNote, FloatingPatch, Note, NotePatch};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum WindowMode {
    Viewing,
    #[default]
    Editing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum Gesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer position relative to the window's top-left corner.
        offset: Point,
    },
    Resizing {
        origin: Point,
        start_width: f64,
        start_height: f64,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct WindowInteraction {
    pub mode: WindowMode,
    pub gesture: Gesture,
}

/// What the pointer went down on inside the window header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HeaderTarget {
    Surface,
    ActionButton,
    TextField,
}

impl WindowInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Gesture::Resizing { .. })
    }

    pub fn is_editing(&self) -> bool {
        self.mode == WindowMode::Editing
    }

    pub fn begin_drag(&mut self, pointer: Point, layout: &FloatingNote, target: HeaderTarget) -> bool {
        if target != HeaderTarget::Surface || self.gesture != Gesture::Idle {
            return false;
        }
        self.gesture = Gesture::Dragging {
            offset: Point::new(pointer.x - layout.x, pointer.y - layout.y),
        };
        true
    }

    pub fn begin_resize(&mut self, pointer: Point, layout: &FloatingNote) -> bool {
        if self.gesture != Gesture::Idle {
            return false;
        }
        self.gesture = Gesture::Resizing {
            origin: pointer,
            start_width: layout.width,
            start_height: layout.height,
        };
        true
    }

    /// Layout change implied by the pointer now being at `pointer`.
    pub fn pointer_move(
        &self,
        pointer: Point,
        layout: &FloatingNote,
        viewport: Viewport,
    ) -> Option<FloatingPatch> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { offset } => {
                let p = clamp_position(
                    Point::new(pointer.x - offset.x, pointer.y - offset.y),
                    layout.width,
                    layout.height,
                    viewport,
                );
                Some(FloatingPatch::position(p.x, p.y))
            }
            Gesture::Resizing {
                origin,
                start_width,
                start_height,
            } => {
                let (w, h) = clamp_size(
                    start_width + (pointer.x - origin.x),
                    start_height + (pointer.y - origin.y),
                );
                Some(FloatingPatch::size(w, h))
            }
        }
    }

    /// Returns whether a gesture was active.
    pub fn end_gesture(&mut self) -> bool {
        let was_active = self.gesture != Gesture::Idle;
        self.gesture = Gesture::Idle;
        was_active
    }

    pub fn start_editing(&mut self) {
        self.mode = WindowMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.mode = WindowMode::Viewing;
    }
}

/// Local title/content drafts for a window, ahead of the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EditBuffer {
    pub title: String,
    pub content: String,
    saved_title: String,
    saved_content: String,
}

impl EditBuffer {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            saved_title: note.title.clone(),
            saved_content: note.content.clone(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.title != self.saved_title || self.content != self.saved_content
    }

    pub fn set_title(&mut self, title: String) -> NotePatch {
        self.title = title;
        self.draft()
    }

    pub fn set_content(&mut self, content: String) -> NotePatch {
        self.content = content;
        self.draft()
    }

    pub fn draft(&self) -> NotePatch {
        NotePatch::both(self.title.clone(), self.content.clone())
    }

    /// Marks the current drafts as persisted and returns them.
    pub fn commit(&mut self) -> NotePatch {
        self.saved_title = self.title.clone();
        self.saved_content = self.content.clone();
        self.draft()
    }

    /// Back to the last persisted title/content.
    pub fn revert(&mut self) {
        self.title = self.saved_title.clone();
        self.content = self.saved_content.clone();
    }

    /// Adopts the stored note as the new baseline; local drafts are kept only when dirty.
    pub fn sync_from_note(&mut self, note: &Note) {
        let dirty = self.is_dirty();
        self.saved_title = note.title.clone();
        self.saved_content = note.content.clone();
        if !dirty {
            self.title = note.title.clone();
            self.content = note.content.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::create_note;

    const VP: Viewport = Viewport {
        width: 1024.0,
        height: 768.0,
    };

    fn layout() -> FloatingNote {
        FloatingNote {
            note_id: "n".to_string(),
            x: 100.0,
            y: 100.0,
            width: 400.0,
            height: 300.0,
            z_index: 1,
        }
    }

    #[test]
    fn test_new_window_is_editing_and_idle() {
        let w = WindowInteraction::new();
        assert!(w.is_editing());
        assert_eq!(w.gesture, Gesture::Idle);
    }

    #[test]
    fn test_drag_keeps_pointer_offset() {
        let mut w = WindowInteraction::new();
        let l = layout();
        assert!(w.begin_drag(Point::new(110.0, 105.0), &l, HeaderTarget::Surface));
        let patch = w
            .pointer_move(Point::new(210.0, 155.0), &l, VP)
            .expect("dragging yields a patch");
        assert_eq!(patch, FloatingPatch::position(200.0, 150.0));
    }

    #[test]
    fn test_drag_clamps_into_viewport() {
        let mut w = WindowInteraction::new();
        let l = layout();
        w.begin_drag(Point::new(100.0, 100.0), &l, HeaderTarget::Surface);
        for (px, py) in [(-500.0, -500.0), (5000.0, 5000.0), (0.0, 9999.0)] {
            let p = w.pointer_move(Point::new(px, py), &l, VP).expect("patch");
            let (x, y) = (p.x.expect("x"), p.y.expect("y"));
            assert!((0.0..=VP.width - l.width).contains(&x));
            assert!((0.0..=VP.height - l.height).contains(&y));
        }
    }

    #[test]
    fn test_drag_not_started_from_buttons_or_fields() {
        let mut w = WindowInteraction::new();
        let l = layout();
        assert!(!w.begin_drag(Point::new(0.0, 0.0), &l, HeaderTarget::ActionButton));
        assert!(!w.begin_drag(Point::new(0.0, 0.0), &l, HeaderTarget::TextField));
        assert_eq!(w.gesture, Gesture::Idle);
    }

    #[test]
    fn test_resize_floors_at_minimum() {
        let mut w = WindowInteraction::new();
        let l = layout();
        assert!(w.begin_resize(Point::new(500.0, 400.0), &l));
        let p = w
            .pointer_move(Point::new(0.0, 0.0), &l, VP)
            .expect("resizing yields a patch");
        assert_eq!(p, FloatingPatch::size(300.0, 200.0));

        let p = w.pointer_move(Point::new(550.0, 420.0), &l, VP).expect("patch");
        assert_eq!(p, FloatingPatch::size(450.0, 320.0));
    }

    #[test]
    fn test_gestures_are_exclusive_and_end() {
        let mut w = WindowInteraction::new();
        let l = layout();
        w.begin_resize(Point::new(0.0, 0.0), &l);
        assert!(!w.begin_drag(Point::new(0.0, 0.0), &l, HeaderTarget::Surface));
        assert!(w.end_gesture());
        assert!(!w.end_gesture());
        assert!(w.pointer_move(Point::new(1.0, 1.0), &l, VP).is_none());
    }

    #[test]
    fn test_edit_buffer_cancel_reverts_to_persisted() {
        let n = create_note("title", "body");
        let mut b = EditBuffer::from_note(&n);
        b.set_title("changed".to_string());
        b.set_content("changed body".to_string());
        assert!(b.is_dirty());
        b.revert();
        assert_eq!((b.title.as_str(), b.content.as_str()), ("title", "body"));
        assert!(!b.is_dirty());
    }

    #[test]
    fn test_edit_buffer_commit_sets_new_baseline() {
        let n = create_note("title", "body");
        let mut b = EditBuffer::from_note(&n);
        let patch = b.set_content("new".to_string());
        assert_eq!(patch, NotePatch::both("title", "new"));
        b.commit();
        assert!(!b.is_dirty());
        b.revert();
        assert_eq!(b.content, "new");
    }

    #[test]
    fn test_edit_buffer_sync_keeps_dirty_drafts() {
        let n = create_note("title", "body");
        let mut b = EditBuffer::from_note(&n);
        b.set_content("typing".to_string());

        let mut stored = n.clone();
        stored.title = "renamed elsewhere".to_string();
        b.sync_from_note(&stored);
        assert_eq!(b.content, "typing");
        assert_eq!(b.title, "title");

        let mut clean = EditBuffer::from_note(&n);
        clean.sync_from_note(&stored);
        assert_eq!(clean.title, "renamed elsewhere");
    }
}
