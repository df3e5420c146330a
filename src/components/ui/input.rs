use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;

const FIELD_CLASS: &str = "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2";

/// Single-line text field bound to a signal. `on_enter` fires on a plain Enter.
#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] autofocus: bool,
    #[prop(into)] bind_value: RwSignal<String>,
    #[prop(into, optional)] on_enter: Option<Callback<()>>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = tw_merge!(FIELD_CLASS, "flex h-9", class);

    view! {
        <input
            data-name="Input"
            type="text"
            class=merged_class
            placeholder=placeholder
            autofocus=autofocus
            prop:value=move || bind_value.get()
            on:input=move |ev| bind_value.set(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" && !ev.shift_key() {
                    if let Some(cb) = on_enter {
                        ev.prevent_default();
                        cb.run(());
                    }
                }
            }
            node_ref=node_ref
        />
    }
}

/// Multi-line text field. The parent owns the value; edits arrive through `on_input`.
#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(default = 3)] rows: u32,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
) -> impl IntoView {
    let merged_class = tw_merge!(FIELD_CLASS, "block py-2", class);

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            rows=rows
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            node_ref=node_ref
        />
    }
}
