use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, Input, Label, Textarea,
};
use crate::shortcuts::RICH_EDITOR_CLASS;
use crate::state::AppContext;
use crate::util::{format_relative_age, now};
use icons::{Plus, Trash2, X};
use leptos::prelude::*;

const PREVIEW_CHARS: usize = 60;

fn preview(content: &str) -> Option<String> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    let mut out: String = content.chars().take(PREVIEW_CHARS).collect();
    if content.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    Some(out)
}

/// Right-hand panel listing every note, with an inline creation card.
#[component]
pub fn NotesSidebar() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let open = app.sidebar_open;
    let notes = app.notes.notes();

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <aside
                data-name="NotesSidebar"
                class="fixed inset-y-0 right-0 z-40 flex w-80 flex-col border-l border-border bg-background shadow-lg"
            >
                <div class="flex items-start justify-between border-b border-border px-4 py-3">
                    <div class="space-y-1">
                        <h2 class="text-lg font-semibold">"Notes"</h2>
                        <p class="text-xs text-muted-foreground">
                            "Press "<kbd class="rounded bg-muted px-1 py-0.5">"N"</kbd>" for a new note, "
                            <kbd class="rounded bg-muted px-1 py-0.5">"S"</kbd>" to toggle"
                        </p>
                    </div>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::IconSm
                        attr:title="Close notes"
                        on:click=move |_| open.set(false)
                    >
                        <X />
                    </Button>
                </div>

                <div class="flex-1 space-y-4 overflow-y-auto px-3 py-4">
                    <section class="space-y-2">
                        <div class="px-1 text-xs font-medium text-muted-foreground">"Create New"</div>
                        <NewNoteCard />
                    </section>
                    <section class="space-y-2">
                        <div class="px-1 text-xs font-medium text-muted-foreground">
                            {move || format!("Your Notes ({})", notes.with(Vec::len))}
                        </div>
                        <NotesList />
                    </section>
                </div>
            </aside>
        </Show>
    }
}

#[component]
fn NewNoteCard() -> impl IntoView {
    let store = expect_context::<AppContext>().0.notes;
    let creating = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    let reset = move || {
        title.set(String::new());
        content.set(String::new());
        creating.set(false);
    };

    let save = Callback::new(move |_: ()| {
        let t = title.get_untracked();
        if t.trim().is_empty() {
            return;
        }
        store.add_note(t.trim(), &content.get_untracked());
        reset();
    });

    view! {
        <Show
            when=move || creating.get()
            fallback=move || view! {
                <button
                    class="flex w-full flex-col items-center justify-center gap-2 rounded-xl border-2 border-dashed border-border py-6 text-muted-foreground transition-colors hover:border-primary/50"
                    on:click=move |_| creating.set(true)
                >
                    <Plus class="size-6" />
                    <span class="text-sm">"Create new note"</span>
                </button>
            }
        >
            <Card>
                <CardHeader>
                    <div class="flex w-full items-center gap-2">
                        <Input
                            bind_value=title
                            placeholder="Note title..."
                            class="h-8 font-medium"
                            autofocus=true
                            on_enter=save
                        />
                        <Button
                            size=ButtonSize::Sm
                            attr:disabled=move || title.with(|t| t.trim().is_empty())
                            on:click=move |_| save.run(())
                        >
                            "Save"
                        </Button>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::IconSm
                            attr:title="Cancel"
                            on:click=move |_| reset()
                        >
                            <X />
                        </Button>
                    </div>
                </CardHeader>
                <CardContent class="space-y-1">
                    <Label>"Content (optional)"</Label>
                    <Textarea
                        class=format!("{RICH_EDITOR_CLASS} min-h-24")
                        rows=5
                        value=Signal::derive(move || content.get())
                        on_input=move |v: String| content.set(v)
                    />
                </CardContent>
            </Card>
        </Show>
    }
}

#[component]
fn NotesList() -> impl IntoView {
    let store = expect_context::<AppContext>().0.notes;
    let notes = store.notes();

    view! {
        <Show
            when=move || notes.with(|n| !n.is_empty())
            fallback=|| view! {
                <div class="py-8 text-center">
                    <p class="text-sm text-muted-foreground">"No notes yet"</p>
                    <p class="mt-1 text-xs text-muted-foreground">"Create your first note above"</p>
                </div>
            }
        >
            <div class="space-y-2">
                <For
                    each=move || notes.get()
                    key=|n| (n.id.clone(), n.updated_at)
                    children={
                        let store = store.clone();
                        move |n| {
                            let open_store = store.clone();
                            let delete_store = store.clone();
                            let open_id = n.id.clone();
                            let delete_id = n.id.clone();
                            let title = if n.title.trim().is_empty() {
                                "Untitled".to_string()
                            } else {
                                n.title.clone()
                            };
                            view! {
                                <div
                                    class="group cursor-pointer rounded-lg border border-border p-3 transition-colors hover:bg-accent/50"
                                    on:click=move |_| open_store.open_floating_note(&open_id, None)
                                >
                                    <div class="flex items-start justify-between gap-2">
                                        <div class="min-w-0 flex-1">
                                            <h3 class="mb-1 truncate text-sm font-medium">{title}</h3>
                                            <p class="text-xs text-muted-foreground">
                                                {format_relative_age(n.updated_at, now())}
                                            </p>
                                            {preview(&n.content).map(|p| view! {
                                                <p class="mt-1 line-clamp-2 text-xs text-muted-foreground">{p}</p>
                                            })}
                                        </div>
                                        <Button
                                            variant=ButtonVariant::Ghost
                                            size=ButtonSize::IconSm
                                            class="opacity-0 transition-opacity group-hover:opacity-100"
                                            attr:title="Delete note"
                                            on:click=move |ev: web_sys::MouseEvent| {
                                                ev.stop_propagation();
                                                delete_store.delete_note(&delete_id);
                                            }
                                        >
                                            <Trash2 class="text-destructive" />
                                        </Button>
                                    </div>
                                </div>
                            }
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_content() {
        assert_eq!(preview("   "), None);
        assert_eq!(preview("short").as_deref(), Some("short"));
        let long = "x".repeat(80);
        let p = preview(&long).expect("preview");
        assert_eq!(p.len(), PREVIEW_CHARS + 3);
        assert!(p.ends_with("..."));
    }
}
