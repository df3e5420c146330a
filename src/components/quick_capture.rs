use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::state::AppContext;
use icons::X;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_router::hooks::use_location;

const STATUS_CLEAR_MS: u32 = 3000;

/// Text currently selected on the page, trimmed.
pub(crate) fn selected_text() -> Option<String> {
    let selection = web_sys::window()?.get_selection().ok()??;
    let text = String::from(selection.to_string());
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Bottom-docked capture box for quick notes tied to the current page.
///
/// Enter saves, Shift+Enter adds a line, Escape dismisses. Anything
/// selected on the page when the box opened is stored as the quote.
#[component]
pub fn QuickCapture() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let open = app.quick_capture_open;
    let quick_notes = app.quick_notes.clone();
    let timers = app.timers.clone();
    let location = use_location();

    let content = RwSignal::new(String::new());
    let quoted = RwSignal::new(None::<String>);
    let status = RwSignal::new(None::<&'static str>);
    let textarea_ref = NodeRef::<html::Textarea>::new();

    let close = move || {
        open.set(false);
        content.set(String::new());
        quoted.set(None);
    };

    // Quote whatever was selected when the box opened, then focus it.
    Effect::new(move |was_open: Option<bool>| {
        let is_open = open.get();
        if is_open && was_open != Some(true) {
            quoted.set(selected_text());
            request_animation_frame(move || {
                if let Some(el) = textarea_ref.get_untracked() {
                    let _ = el.focus();
                }
            });
        }
        is_open
    });

    let escape_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || escape_handle.remove());

    let flash = move |msg: &'static str| {
        status.set(Some(msg));
        timers.schedule(STATUS_CLEAR_MS, Box::new(move || status.set(None)));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        let url = location.pathname.get_untracked();
        let quote = quoted.get_untracked();
        match quick_notes.capture(&content.get_untracked(), &url, quote.as_deref()) {
            Ok(note) => {
                tracing::debug!(id = %note.id, url = %note.url, "Captured quick note");
                close();
                flash("Note saved");
            }
            Err(e) => tracing::debug!(error = %e, "Quick note not saved"),
        }
    };

    let on_input = move |ev: web_sys::Event| {
        content.set(event_target_value(&ev));
        if let Some(el) = textarea_ref.get_untracked() {
            let style = web_sys::HtmlElement::style(&el);
            let _ = style.set_property("height", "auto");
            let height = el.scroll_height().min(200);
            let _ = style.set_property("height", &format!("{height}px"));
        }
    };

    view! {
        <Show when=move || status.get().is_some() fallback=|| ().into_view()>
            <div class="fixed bottom-24 left-1/2 z-50 -translate-x-1/2 rounded-md border border-border bg-background px-3 py-2 text-sm shadow-lg">
                {move || status.get()}
            </div>
        </Show>

        <div
            data-name="QuickCapture"
            class=move || if open.get() { "fixed inset-x-0 bottom-0 z-50" } else { "hidden" }
        >
            <div class="mx-auto max-w-4xl px-4 pb-4">
                <div class="relative rounded-lg border border-border bg-background/95 shadow-lg backdrop-blur-md">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::IconSm
                        class="absolute right-2 top-2 z-10"
                        attr:aria-label="Close quick note"
                        on:click=move |_| close()
                    >
                        <X />
                    </Button>
                    {move || quoted.get().map(|q| view! {
                        <div class="border-b border-border/50 px-4 pb-2 pt-4">
                            <div class="mb-1 text-xs text-muted-foreground">"Quoted text:"</div>
                            <div class="max-h-20 overflow-y-auto rounded border-l-2 border-primary/30 bg-muted/30 px-3 py-2 text-sm">
                                {q}
                            </div>
                        </div>
                    })}
                    <textarea
                        node_ref=textarea_ref
                        class="max-h-[200px] min-h-[60px] w-full resize-none border-none bg-transparent p-4 pr-12 text-sm outline-none placeholder:text-muted-foreground"
                        rows=1
                        placeholder=move || format!(
                            "Quick note for {} - Press Enter to save, Shift+Enter for new line, Esc to cancel",
                            location.pathname.get()
                        )
                        prop:value=move || content.get()
                        on:input=on_input
                        on:keydown=on_keydown
                    />
                    <div class="px-4 pb-3 text-xs text-muted-foreground">
                        <kbd class="rounded bg-muted px-1.5 py-0.5">"Enter"</kbd>" to save · "
                        <kbd class="rounded bg-muted px-1.5 py-0.5">"Shift+Enter"</kbd>" for new line · "
                        <kbd class="rounded bg-muted px-1.5 py-0.5">"Esc"</kbd>" to cancel"
                    </div>
                </div>
            </div>
        </div>
    }
}
