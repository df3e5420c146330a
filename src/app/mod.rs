use crate::components::ui::{Button, ButtonSize};
use crate::components::{FloatingNoteWindow, NotesSidebar, QuickCapture};
use crate::config::NotesConfig;
use crate::pages::{CompareIndexPage, ComparePage, HomePage, QuickNotesPage};
use crate::shortcuts::{use_keyboard_shortcuts, ShortcutMap};
use crate::state::{AppContext, AppState};
use icons::{NotebookPen, StickyNote};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use std::time::Duration;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new(NotesConfig::new())));

    view! {
        <Router>
            <main class="min-h-screen bg-background text-foreground">
                <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("notes") view=QuickNotesPage />
                    <Route path=path!("compare") view=CompareIndexPage />
                    <Route path=path!("compare/*any") view=ComparePage />
                </Routes>
            </main>
            <NotesLayer />
        </Router>
    }
}

/// Everything that floats above the routed page: note windows, the sidebar,
/// the quick capture box, and the global shortcuts and sweeps behind them.
#[component]
fn NotesLayer() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let store = app.notes.clone();
    let sidebar_open = app.sidebar_open;
    let quick_capture_open = app.quick_capture_open;

    use_keyboard_shortcuts(
        ShortcutMap::new()
            .bind("n", {
                let store = store.clone();
                move || {
                    store.create_empty_note();
                }
            })
            .bind("s", move || sidebar_open.update(|o| *o = !*o))
            .bind("q", move || quick_capture_open.set(true)),
    );

    let interval = {
        let store = store.clone();
        set_interval_with_handle(
            move || store.cleanup_empty_notes(),
            Duration::from_millis(app.config.cleanup_interval_ms as u64),
        )
    };
    match interval {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!(error = ?e, "Failed to start empty-note sweep"),
    }

    let pagehide = window_event_listener(ev::pagehide, {
        let store = store.clone();
        move |_: web_sys::PageTransitionEvent| store.cleanup_empty_notes()
    });
    on_cleanup(move || pagehide.remove());

    let floating = store.floating_notes();

    view! {
        <For
            each=move || floating.get()
            key=|f| f.note_id.clone()
            children=|f| view! { <FloatingNoteWindow note_id=f.note_id /> }
        />

        <NotesSidebar />
        <QuickCapture />

        <div class="fixed bottom-6 right-6 z-50 flex flex-col gap-3">
            <Button
                size=ButtonSize::Fab
                attr:aria-label="Quick note"
                on:click=move |_| quick_capture_open.set(true)
            >
                <NotebookPen class="size-5" />
            </Button>
            <Button
                size=ButtonSize::Fab
                attr:aria-label="Open notes"
                on:click=move |_| sidebar_open.update(|o| *o = !*o)
            >
                <StickyNote class="size-5" />
            </Button>
        </div>
    }
}
