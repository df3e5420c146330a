use crate::clipboard::copy_text;
use crate::compare::{
    categories_by_parent, comparison_path, comparison_segments, parent_categories,
    parse_comparison_path,
    ComparisonKind, ComparisonRequest, FeatureValue, Features,
};
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Separator,
};
use crate::models::QuickNote;
use crate::quick_notes::display_label;
use crate::state::AppContext;
use chrono::{DateTime, Local, Utc};
use icons::{Check, Copy, Trash2};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use std::collections::HashSet;

fn format_capture_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d, %Y, %I:%M %p").to_string()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let store = app.notes.clone();
    let notes = store.notes();
    let open_windows = store.floating_notes();
    let sidebar_open = app.sidebar_open;

    view! {
        <div class="container mx-auto max-w-4xl px-4 py-12">
            <h1 class="text-3xl font-bold tracking-tight">"Notes"</h1>
            <p class="mt-2 text-muted-foreground">
                "Scratch notes that stay in this browser. Drag windows around, resize them, and they will be where you left them next time."
            </p>

            <div class="mt-8 grid gap-4 sm:grid-cols-2">
                <Card>
                    <CardHeader>
                        <CardTitle>"Floating notes"</CardTitle>
                        <CardDescription>
                            {move || format!(
                                "{} saved, {} open",
                                notes.with(Vec::len),
                                open_windows.with(Vec::len)
                            )}
                        </CardDescription>
                    </CardHeader>
                    <CardContent class="flex gap-2">
                        <Button
                            size=ButtonSize::Sm
                            on:click={
                                let store = store.clone();
                                move |_| {
                                    store.create_empty_note();
                                }
                            }
                        >
                            "New note"
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            on:click=move |_| sidebar_open.update(|o| *o = !*o)
                        >
                            "Show all"
                        </Button>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>"Quick notes"</CardTitle>
                        <CardDescription>"Jot something down about the page you are on."</CardDescription>
                    </CardHeader>
                    <CardContent class="flex gap-2">
                        <Button size=ButtonSize::Sm href="/notes">"Open quick notes"</Button>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm href="/compare">
                            "Compare services"
                        </Button>
                    </CardContent>
                </Card>
            </div>

            <div class="mt-8 space-y-2 text-sm text-muted-foreground">
                <div class="font-medium text-foreground">"Shortcuts"</div>
                <ShortcutHint key_label="N" text="new floating note" />
                <ShortcutHint key_label="S" text="toggle the notes sidebar" />
                <ShortcutHint key_label="Q" text="quick note, quoting the selected text" />
                <ShortcutHint key_label="Esc" text="dismiss the quick note box" />
            </div>
        </div>
    }
}

#[component]
fn ShortcutHint(key_label: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div>
            <kbd class="rounded bg-muted px-2 py-1 text-xs">{key_label}</kbd>
            " "
            {text}
        </div>
    }
}

/// Every captured quick note, with delete, copy and merge.
#[component]
pub fn QuickNotesPage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let quick_notes = app.quick_notes.clone();
    quick_notes.reload();
    let notes = quick_notes.notes();

    let selected = RwSignal::new(HashSet::<String>::new());
    let merge_error = RwSignal::new(None::<String>);

    // Drop selections whose notes have gone away.
    Effect::new(move |_| {
        let live: HashSet<String> = notes.with(|all| all.iter().map(|n| n.id.clone()).collect());
        selected.update(|s| s.retain(|id| live.contains(id)));
    });

    let on_merge = {
        let quick_notes = quick_notes.clone();
        move |_| {
            let ids: Vec<String> = notes.with_untracked(|all| {
                let picked = selected.get_untracked();
                all.iter()
                    .filter(|n| picked.contains(&n.id))
                    .map(|n| n.id.clone())
                    .collect()
            });
            match quick_notes.merge(&ids) {
                Ok(_) => {
                    selected.set(HashSet::new());
                    merge_error.set(None);
                }
                Err(e) => merge_error.set(Some(e.to_string())),
            }
        }
    };

    view! {
        <div class="container mx-auto max-w-4xl px-4 py-8">
            <div class="mb-8 flex items-center justify-between gap-3">
                <div>
                    <h1 class="text-3xl font-bold">"Quick Notes"</h1>
                    <p class="text-muted-foreground">"All your captured thoughts and quotes"</p>
                </div>
                <div class="flex items-center gap-2">
                    <span class="text-xs text-muted-foreground">
                        {move || format!("{} selected", selected.with(HashSet::len))}
                    </span>
                    <Button
                        size=ButtonSize::Sm
                        attr:disabled=move || selected.with(|s| s.len() < 2)
                        on:click=on_merge
                    >
                        "Merge"
                    </Button>
                </div>
            </div>

            <Show when=move || merge_error.get().is_some() fallback=|| ().into_view()>
                {move || merge_error.get().map(|e| view! {
                    <Alert class="mb-4 border-destructive/30">
                        <AlertDescription class="text-xs text-destructive">{e}</AlertDescription>
                    </Alert>
                })}
            </Show>

            <Show
                when=move || notes.with(|n| !n.is_empty())
                fallback=|| view! {
                    <div class="py-12 text-center">
                        <h3 class="mb-2 text-lg font-medium">"No notes yet"</h3>
                        <p class="mb-4 text-muted-foreground">
                            "Start taking quick notes by pressing "
                            <kbd class="rounded bg-muted px-2 py-1 text-xs">"Q"</kbd>
                            " anywhere on the site"
                        </p>
                    </div>
                }
            >
                <div class="space-y-4">
                    <For
                        each=move || notes.get()
                        key=|n| n.id.clone()
                        children={
                            let quick_notes = quick_notes.clone();
                            move |note| {
                                view! {
                                    <QuickNoteCard
                                        note=note
                                        selected=selected
                                        on_delete={
                                            let quick_notes = quick_notes.clone();
                                            move |id: String| quick_notes.delete(&id)
                                        }
                                    />
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn QuickNoteCard(
    note: QuickNote,
    selected: RwSignal<HashSet<String>>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let copied = RwSignal::new(false);
    let id = note.id.clone();
    let is_selected = {
        let id = id.clone();
        Memo::new(move |_| selected.with(|s| s.contains(&id)))
    };
    let toggle = {
        let id = id.clone();
        move |_| {
            selected.update(|s| {
                if !s.remove(&id) {
                    s.insert(id.clone());
                }
            })
        }
    };
    let on_copy = {
        let content = note.content.clone();
        move |_| {
            copy_text(content.clone(), move |ok| copied.set(ok));
        }
    };

    let sources = note
        .merged_from
        .clone()
        .filter(|_| note.is_merged())
        .unwrap_or_default();
    let source_labels = sources
        .iter()
        .map(|s| display_label(&s.url))
        .collect::<Vec<_>>();

    view! {
        <div class=move || {
            if is_selected.get() {
                "rounded-lg border border-primary bg-card p-6 shadow-md"
            } else {
                "rounded-lg border border-border bg-card p-6 transition-shadow hover:shadow-md"
            }
        }>
            {note.quoted_text.clone().map(|q| view! {
                <div class="mb-4 border-b border-border/50 pb-4">
                    <div class="mb-2 text-xs text-muted-foreground">"Quoted text:"</div>
                    <div class="rounded border-l-2 border-primary/30 bg-muted/30 px-3 py-2 text-sm">{q}</div>
                </div>
            })}

            <div class="mb-4 whitespace-pre-wrap text-sm leading-relaxed">{note.content.clone()}</div>

            {(!sources.is_empty()).then(|| view! {
                <div class="mb-4 text-xs text-muted-foreground">
                    {format!("Merged from {} notes: {}", sources.len(), source_labels.join(", "))}
                </div>
            })}

            <Separator class="mb-3" />

            <div class="flex items-center justify-between text-xs text-muted-foreground">
                <div class="flex items-center gap-4">
                    <span>{format_capture_time(note.timestamp)}</span>
                    <a href=note.url.clone() class="hover:text-foreground hover:underline">
                        {display_label(&note.url)}
                    </a>
                </div>
                <div class="flex items-center gap-1">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        on:click=toggle
                    >
                        {move || if is_selected.get() { "Selected" } else { "Select" }}
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::IconSm
                        attr:title="Copy"
                        on:click=on_copy
                    >
                        <Show when=move || copied.get() fallback=|| view! { <Copy /> }>
                            <Check />
                        </Show>
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::IconSm
                        attr:title="Delete"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        <Trash2 />
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Links to the categories and a few popular comparisons.
#[component]
pub fn CompareIndexPage() -> impl IntoView {
    let popular = [
        comparison_path(ComparisonKind::Service, None, &["aws_ec2", "azure_vm"]),
        comparison_path(ComparisonKind::Service, None, &["aws_lambda", "azure_functions"]),
        comparison_path(ComparisonKind::Service, None, &["aws_s3", "azure_blob"]),
        comparison_path(ComparisonKind::Service, None, &["openai_gpt", "anthropic_claude"]),
        comparison_path(
            ComparisonKind::Category,
            Some("compute"),
            &["virtual-machines", "serverless-functions"],
        ),
        comparison_path(
            ComparisonKind::Category,
            Some("storage"),
            &["object-storage", "managed-databases"],
        ),
    ];

    view! {
        <div class="container mx-auto max-w-5xl px-4 py-8">
            <h1 class="text-3xl font-medium tracking-tight">"Compare"</h1>
            <p class="mt-1 text-muted-foreground">"Cloud services side by side."</p>

            <div class="mt-6 grid gap-4 md:grid-cols-3">
                {parent_categories()
                    .iter()
                    .map(|parent| {
                        let concepts: Vec<&str> =
                            categories_by_parent(parent.id).iter().map(|c| c.id).collect();
                        let concept_href = (concepts.len() > 1).then(|| {
                            comparison_path(ComparisonKind::Category, Some(parent.id), &concepts)
                        });
                        view! {
                            <Card>
                                <CardHeader>
                                    <CardTitle>{parent.name}</CardTitle>
                                </CardHeader>
                                <CardContent class="space-y-3">
                                    {parent
                                        .child_categories
                                        .iter()
                                        .map(|child| {
                                            let ids: Vec<&str> = child.services.iter().map(|s| s.id).collect();
                                            let href = comparison_path(ComparisonKind::Service, None, &ids);
                                            view! {
                                                <a href=href class="block rounded-md border border-border px-3 py-2 text-sm hover:bg-accent/50">
                                                    <div class="font-medium">{child.name}</div>
                                                    <div class="text-xs text-muted-foreground">
                                                        {child.services.iter().map(|s| s.name).collect::<Vec<_>>().join(", ")}
                                                    </div>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                    {concept_href.map(|href| view! {
                                        <Button variant=ButtonVariant::Link size=ButtonSize::Sm href=href>
                                            "Compare approaches"
                                        </Button>
                                    })}
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>

            <h2 class="mt-10 text-lg font-medium">"Popular"</h2>
            <ul class="mt-2 space-y-1 text-sm">
                {popular
                    .into_iter()
                    .map(|href| {
                        let title = parse_comparison_path(&comparison_segments(&href)).title();
                        view! {
                            <li>
                                <a href=href class="text-primary underline-offset-4 hover:underline">{title}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// `/compare/service/...` and `/compare/category/...`.
#[component]
pub fn ComparePage() -> impl IntoView {
    let location = use_location();
    let request = Memo::new(move |_| {
        let segments = comparison_segments(&location.pathname.get());
        parse_comparison_path(&segments)
    });

    Effect::new(move |_| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&request.with(|r| r.title()));
        }
    });

    view! {
        {move || {
            let req = request.get();
            if req.is_invalid() {
                return view! { <CompareNotFound /> }.into_any();
            }
            let kind = req.kind().map(|k| format!("{k} comparison"));
            let title = req.title();
            let description = req.description();
            let table = match req {
                ComparisonRequest::Service { services } => {
                    let columns = services
                        .iter()
                        .map(|s| (format!("{} {}", s.logo, s.name), s.features))
                        .collect();
                    view! { <FeatureTable columns=columns /> }.into_any()
                }
                ComparisonRequest::Category { categories, .. } => {
                    let columns = categories
                        .iter()
                        .map(|c| (format!("{} {}", c.icon, c.name), c.features))
                        .collect();
                    view! { <FeatureTable columns=columns /> }.into_any()
                }
                ComparisonRequest::Invalid => ().into_any(),
            };
            view! {
                <div class="min-h-screen bg-background">
                    <div class="border-b border-border p-6">
                        <div class="mx-auto flex max-w-7xl items-center justify-between">
                            <div>
                                <div class="text-xs uppercase tracking-wide text-muted-foreground">{kind}</div>
                                <h1 class="text-3xl font-medium tracking-tight">{title}</h1>
                                <p class="mt-1 text-muted-foreground">{description}</p>
                            </div>
                            <Button variant=ButtonVariant::Outline href="/compare">
                                "Back to Compare"
                            </Button>
                        </div>
                    </div>
                    <div class="mx-auto max-w-7xl overflow-x-auto p-6">{table}</div>
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
fn CompareNotFound() -> impl IntoView {
    view! {
        <div class="container mx-auto max-w-xl px-4 py-16">
            <Alert>
                <AlertTitle>"Comparison Not Found"</AlertTitle>
                <AlertDescription class="text-muted-foreground">
                    "The requested comparison could not be found."
                </AlertDescription>
            </Alert>
            <Button class="mt-4" variant=ButtonVariant::Outline href="/compare">
                "Back to Compare"
            </Button>
        </div>
    }
}

/// Feature names in first-seen order across all columns.
fn feature_rows(columns: &[(String, Features)]) -> Vec<&'static str> {
    let mut rows: Vec<&'static str> = Vec::new();
    for (_, features) in columns {
        for (name, _) in features.iter() {
            if !rows.contains(name) {
                rows.push(*name);
            }
        }
    }
    rows
}

fn feature_cell(value: Option<&FeatureValue>) -> AnyView {
    let Some(value) = value else {
        return view! { <span class="text-muted-foreground">"-"</span> }.into_any();
    };
    let label = value.label();
    let code = value.code();
    let tooltip = value.tooltip();
    view! {
        <div class="space-y-1">
            <span title=tooltip.unwrap_or_default()>{label}</span>
            {code.map(|c| view! {
                <pre class="overflow-x-auto rounded bg-muted px-2 py-1 text-xs"><code>{c}</code></pre>
            })}
        </div>
    }
    .into_any()
}

#[component]
fn FeatureTable(columns: Vec<(String, Features)>) -> impl IntoView {
    let rows = feature_rows(&columns);

    view! {
        <table class="w-full border-collapse text-sm">
            <thead>
                <tr class="border-b border-border">
                    <th class="p-3 text-left font-medium text-muted-foreground">"Feature"</th>
                    {columns
                        .iter()
                        .map(|(name, _)| view! { <th class="p-3 text-left font-medium">{name.clone()}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr class="border-b border-border/50">
                                <td class="p-3 font-medium">{row}</td>
                                {columns
                                    .iter()
                                    .map(|(_, features)| {
                                        let value = features.iter().find(|(n, _)| *n == row).map(|(_, v)| v);
                                        view! { <td class="p-3 align-top">{feature_cell(value)}</td> }
                                    })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::service_by_id;

    #[test]
    fn test_feature_rows_union_in_first_seen_order() {
        let ec2 = service_by_id("aws_ec2").expect("known service");
        let lambda = service_by_id("aws_lambda").expect("known service");
        let columns = vec![
            (ec2.name.to_string(), ec2.features),
            (lambda.name.to_string(), lambda.features),
        ];
        let rows = feature_rows(&columns);
        assert_eq!(rows[0], "Starting Price");
        assert!(rows.contains(&"Runtime Support"));
        let unique: HashSet<_> = rows.iter().collect();
        assert_eq!(unique.len(), rows.len());
    }
}
