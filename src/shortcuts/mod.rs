//! Global single-key shortcuts.
//!
//! Keys are matched case-insensitively against `KeyboardEvent.key`. Nothing
//! fires while focus is in a text field, an editable element, or a rich
//! editor region, or when Ctrl, Meta or Alt is held.

use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use std::collections::HashMap;
use std::sync::Arc;
use wasm_bindgen::JsCast;

/// Class marking a rich-text editor region.
pub const RICH_EDITOR_CLASS: &str = "rich-editor";

pub type ShortcutAction = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Default)]
pub struct ShortcutMap {
    bindings: HashMap<String, ShortcutAction>,
}

impl ShortcutMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, key: &str, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.bindings.insert(key.to_lowercase(), Arc::new(action));
        self
    }

    /// Runs the action bound to the pressed key. Returns whether one ran,
    /// which is also whether the browser default should be suppressed.
    pub fn dispatch(&self, press: &KeyPress, target: &FocusTarget) -> bool {
        if press.has_modifier() || target.is_editable() {
            return false;
        }
        match self.bindings.get(&press.key.to_lowercase()) {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

/// The key of a keydown event plus the modifiers that claim it for the
/// browser or the OS.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn has_modifier(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }

    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
        }
    }
}

/// What a key event was aimed at, as far as editability goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusTarget {
    pub tag_name: String,
    pub content_editable: bool,
    pub inside_editable: bool,
    pub inside_rich_editor: bool,
}

impl FocusTarget {
    pub fn is_editable(&self) -> bool {
        let tag = self.tag_name.to_ascii_uppercase();
        tag == "INPUT"
            || tag == "TEXTAREA"
            || self.content_editable
            || self.inside_editable
            || self.inside_rich_editor
    }

    pub fn from_element(el: &web_sys::Element) -> Self {
        let content_editable = el
            .dyn_ref::<web_sys::HtmlElement>()
            .map(|h| h.content_editable() == "true")
            .unwrap_or(false);
        let closest = |selector: &str| matches!(el.closest(selector), Ok(Some(_)));

        Self {
            tag_name: el.tag_name(),
            content_editable,
            inside_editable: closest("[contenteditable=\"true\"]"),
            inside_rich_editor: closest(&format!(".{RICH_EDITOR_CLASS}")),
        }
    }
}

/// Installs `map` as a window keydown listener for the lifetime of the
/// calling component.
pub fn use_keyboard_shortcuts(map: ShortcutMap) {
    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| FocusTarget::from_element(&el))
            .unwrap_or_default();

        if map.dispatch(&KeyPress::from_event(&ev), &target) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tag(tag_name: &str) -> FocusTarget {
        FocusTarget {
            tag_name: tag_name.to_string(),
            ..FocusTarget::default()
        }
    }

    fn key(k: &str) -> KeyPress {
        KeyPress {
            key: k.to_string(),
            ..KeyPress::default()
        }
    }

    fn counting() -> (Arc<AtomicUsize>, ShortcutMap) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let map = ShortcutMap::new().bind("n", move || {
            h.fetch_add(1, Ordering::SeqCst);
        });
        (hits, map)
    }

    #[test]
    fn test_bound_key_fires_once_case_insensitive() {
        let (hits, map) = counting();
        assert!(map.dispatch(&key("N"), &tag("BODY")));
        assert!(map.dispatch(&key("n"), &tag("DIV")));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let (hits, map) = counting();
        assert!(!map.dispatch(&key("x"), &tag("BODY")));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_suppressed_in_editable_targets() {
        let (hits, map) = counting();
        let targets = [
            tag("INPUT"),
            tag("textarea"),
            FocusTarget {
                content_editable: true,
                ..tag("DIV")
            },
            FocusTarget {
                inside_editable: true,
                ..tag("P")
            },
            FocusTarget {
                inside_rich_editor: true,
                ..tag("SPAN")
            },
        ];
        for t in &targets {
            assert!(!map.dispatch(&key("n"), t), "{t:?} should suppress");
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_modified_keys_are_left_to_the_browser() {
        let (hits, map) = counting();
        let presses = [
            KeyPress { ctrl: true, ..key("n") },
            KeyPress { meta: true, ..key("n") },
            KeyPress { alt: true, ..key("n") },
        ];
        for p in &presses {
            assert!(!map.dispatch(p, &tag("BODY")), "{p:?} should pass through");
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        assert!(map.dispatch(&KeyPress { ctrl: false, ..key("n") }, &tag("BODY")));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_later_binding_replaces_earlier() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let map = ShortcutMap::new()
            .bind("s", || panic!("replaced binding ran"))
            .bind("S", move || {
                h.fetch_add(10, Ordering::SeqCst);
            });
        map.dispatch(&key("s"), &tag("BODY"));
        assert_eq!(hits.load(Ordering::SeqCst), 10);
    }
}
