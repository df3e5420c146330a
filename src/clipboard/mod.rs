//! Copy text to the system clipboard.
//!
//! Tries the async Clipboard API first. If it is missing or rejects, falls
//! back to a hidden textarea and `document.execCommand("copy")`.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Copies `text`, then calls `on_done` with whether it worked.
pub fn copy_text(text: String, on_done: impl FnOnce(bool) + 'static) {
    let on_done: Rc<RefCell<Option<Box<dyn FnOnce(bool)>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_done))));
    let finish = {
        let on_done = on_done.clone();
        move |ok: bool| {
            if let Some(f) = on_done.borrow_mut().take() {
                f(ok);
            }
        }
    };

    let Some(promise) = clipboard_write(&text) else {
        finish(copy_with_textarea(&text));
        return;
    };

    let finish_ok = finish.clone();
    let resolved = Closure::once(move |_: JsValue| finish_ok(true));
    let rejected = Closure::once(move |err: JsValue| {
        tracing::debug!(error = ?err, "Clipboard API rejected; using textarea fallback");
        finish(copy_with_textarea(&text));
    });
    let _ = promise.then2(&resolved, &rejected);
    resolved.forget();
    rejected.forget();
}

fn clipboard_write(text: &str) -> Option<js_sys::Promise> {
    let navigator = web_sys::window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into()).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    write
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()?
        .dyn_into::<js_sys::Promise>()
        .ok()
}

fn copy_with_textarea(text: &str) -> bool {
    let copied = (|| -> Option<bool> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;
        let area = document
            .create_element("textarea")
            .ok()?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .ok()?;
        area.set_value(text);
        let _ = area.set_attribute("readonly", "");
        let _ = area.set_attribute("style", "position:fixed;top:0;left:0;opacity:0;");
        body.append_child(&area).ok()?;
        area.select();
        let ok = document
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|d| d.exec_command("copy").ok())
            .unwrap_or(false);
        area.remove();
        Some(ok)
    })()
    .unwrap_or(false);

    if !copied {
        tracing::warn!("Failed to copy text to clipboard");
    }
    copied
}
