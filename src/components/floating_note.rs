use crate::components::ui::{Button, ButtonSize, ButtonVariant, Spinner, Textarea};
use crate::models::{FloatingPatch, NotePatch};
use crate::shortcuts::RICH_EDITOR_CLASS;
use crate::state::{AppContext, DebouncedSave, Throttle};
use crate::window::{BrowserViewport, EditBuffer, HeaderTarget, Point, ViewportSource, WindowInteraction};
use icons::{Check, Pencil, X};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use wasm_bindgen::JsCast;

fn header_target(ev: &web_sys::MouseEvent) -> HeaderTarget {
    let Some(el) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return HeaderTarget::Surface;
    };
    if matches!(el.closest("button"), Ok(Some(_))) {
        return HeaderTarget::ActionButton;
    }
    match el.tag_name().as_str() {
        "INPUT" | "TEXTAREA" => HeaderTarget::TextField,
        _ => HeaderTarget::Surface,
    }
}

fn pointer(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// One draggable, resizable editor window bound to a note.
#[component]
pub fn FloatingNoteWindow(#[prop(into)] note_id: String) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let store = app.notes.clone();

    let layout = {
        let id = note_id.clone();
        let floating = store.floating_notes();
        Memo::new(move |_| floating.with(|all| all.iter().find(|f| f.note_id == id).cloned()))
    };
    let note = {
        let id = note_id.clone();
        let notes = store.notes();
        Memo::new(move |_| notes.with(|all| all.iter().find(|n| n.id == id).cloned()))
    };

    let interaction = RwSignal::new(WindowInteraction::new());
    let buffer = RwSignal::new(
        store
            .note_untracked(&note_id)
            .map(|n| EditBuffer::from_note(&n))
            .unwrap_or_default(),
    );
    let saving = RwSignal::new(false);

    // Store changes (our own autosaves included) become the new baseline.
    Effect::new(move |_| {
        if let Some(n) = note.get() {
            buffer.update(|b| b.sync_from_note(&n));
        }
    });

    let saver = {
        let store = store.clone();
        let id = note_id.clone();
        DebouncedSave::new(
            app.timers.clone(),
            app.config.autosave_delay_ms,
            move |patch: NotePatch| {
                store.update_note_by_id(&id, &patch);
                Ok(())
            },
        )
        .with_indicators(move || saving.set(true), move || saving.set(false))
    };

    let mover = {
        let store = store.clone();
        let id = note_id.clone();
        Throttle::new(
            app.timers.clone(),
            app.config.drag_throttle_ms,
            move |patch: FloatingPatch| store.update_floating_note(&id, &patch),
        )
    };

    let move_handle = window_event_listener(ev::mousemove, {
        let mover = mover.clone();
        move |ev: web_sys::MouseEvent| {
            let Some(l) = layout.get_untracked() else {
                return;
            };
            let patch = interaction
                .with_untracked(|w| w.pointer_move(pointer(&ev), &l, BrowserViewport.viewport()));
            if let Some(patch) = patch {
                mover.call(patch);
            }
        }
    });
    let up_handle = window_event_listener(ev::mouseup, {
        let mover = mover.clone();
        move |_: web_sys::MouseEvent| {
            if interaction.with_untracked(|w| w.is_dragging() || w.is_resizing()) {
                interaction.update(|w| {
                    w.end_gesture();
                });
                mover.flush();
            }
        }
    });

    on_cleanup({
        let saver = saver.clone();
        let mover = mover.clone();
        move || {
            move_handle.remove();
            up_handle.remove();
            saver.cancel_save();
            mover.cancel();
        }
    });

    let on_window_mousedown = {
        let store = store.clone();
        let id = note_id.clone();
        move |_: web_sys::MouseEvent| store.bring_to_front(&id)
    };

    let on_header_mousedown = move |ev: web_sys::MouseEvent| {
        let Some(l) = layout.get_untracked() else {
            return;
        };
        let target = header_target(&ev);
        let mut started = false;
        interaction.update(|w| started = w.begin_drag(pointer(&ev), &l, target));
        if started {
            ev.prevent_default();
        }
    };

    let on_resize_mousedown = move |ev: web_sys::MouseEvent| {
        let Some(l) = layout.get_untracked() else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();
        interaction.update(|w| {
            w.begin_resize(pointer(&ev), &l);
        });
    };

    let on_title_input = {
        let saver = saver.clone();
        move |ev: web_sys::Event| {
            if let Some(patch) = buffer.try_update(|b| b.set_title(event_target_value(&ev))) {
                saver.debounced_save(patch);
            }
        }
    };

    let on_content_input = {
        let saver = saver.clone();
        move |value: String| {
            if let Some(patch) = buffer.try_update(|b| b.set_content(value)) {
                saver.debounced_save(patch);
            }
        }
    };

    let on_save = {
        let saver = saver.clone();
        move |_| {
            if let Some(patch) = buffer.try_update(|b| b.commit()) {
                saver.force_save(patch);
            }
            interaction.update(|w| w.stop_editing());
        }
    };

    let on_cancel = {
        let saver = saver.clone();
        move |_| {
            saver.cancel_save();
            buffer.update(|b| b.revert());
            interaction.update(|w| w.stop_editing());
        }
    };

    let on_close = {
        let store = store.clone();
        let saver = saver.clone();
        let id = note_id.clone();
        move |_| {
            saver.flush();
            store.close_floating_note(&id);
        }
    };

    let frame_style = move || {
        layout
            .get()
            .map(|l| {
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    l.x, l.y, l.width, l.height, l.z_index
                )
            })
            .unwrap_or_else(|| "display:none;".to_string())
    };

    let frame_class = move || {
        let gesture = if interaction.with(|w| w.is_dragging()) {
            " cursor-grabbing select-none"
        } else if interaction.with(|w| w.is_resizing()) {
            " select-none"
        } else {
            ""
        };
        format!(
            "fixed flex flex-col overflow-hidden rounded-lg border border-border bg-background shadow-xl{gesture}"
        )
    };

    view! {
        <div
            data-name="FloatingNoteWindow"
            class=frame_class
            style=frame_style
            on:mousedown=on_window_mousedown
        >
            <div
                class="flex cursor-grab items-center gap-2 border-b border-border bg-muted/40 px-3 py-2"
                on:mousedown=on_header_mousedown
            >
                <Show
                    when=move || interaction.with(|w| w.is_editing())
                    fallback=move || view! {
                        <div class="min-w-0 flex-1 truncate text-sm font-medium">
                            {move || {
                                let title = buffer.with(|b| b.title.clone());
                                if title.trim().is_empty() { "Untitled".to_string() } else { title }
                            }}
                        </div>
                    }
                >
                    <input
                        class="min-w-0 flex-1 bg-transparent text-sm font-medium outline-none"
                        placeholder="Title"
                        prop:value=move || buffer.with(|b| b.title.clone())
                        on:input=on_title_input.clone()
                    />
                </Show>

                <Show when=move || saving.get() fallback=|| ().into_view()>
                    <span class="inline-flex items-center gap-1 text-xs text-muted-foreground">
                        <Spinner class="size-3" />
                        "Saving..."
                    </span>
                </Show>

                <Show when=move || !interaction.with(|w| w.is_editing()) fallback=|| ().into_view()>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::IconSm
                        attr:title="Edit"
                        on:click=move |_| interaction.update(|w| w.start_editing())
                    >
                        <Pencil />
                    </Button>
                </Show>

                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::IconSm
                    attr:title="Close"
                    on:click=on_close
                >
                    <X />
                </Button>
            </div>

            <div class=format!("{RICH_EDITOR_CLASS} min-h-0 flex-1 overflow-auto p-3")>
                <Show
                    when=move || interaction.with(|w| w.is_editing())
                    fallback=move || view! {
                        <div
                            class="h-full whitespace-pre-wrap text-sm"
                            on:dblclick=move |_| interaction.update(|w| w.start_editing())
                        >
                            {move || buffer.with(|b| b.content.clone())}
                        </div>
                    }
                >
                    <Textarea
                        class="h-full resize-none border-0 shadow-none focus-visible:ring-0"
                        placeholder="Write something..."
                        value=Signal::derive(move || buffer.with(|b| b.content.clone()))
                        on_input=on_content_input.clone()
                    />
                </Show>
            </div>

            <Show when=move || interaction.with(|w| w.is_editing()) fallback=|| ().into_view()>
                <div class="flex items-center justify-end gap-2 border-t border-border px-3 py-2">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on:click=on_cancel.clone()
                    >
                        "Cancel"
                    </Button>
                    <Button size=ButtonSize::Sm on:click=on_save.clone()>
                        <Check />
                        "Save"
                    </Button>
                </div>
            </Show>

            <div
                class="absolute bottom-0 right-0 size-4 cursor-se-resize"
                attr:aria-label="Resize"
                on:mousedown=on_resize_mousedown
            />
        </div>
    }
}
