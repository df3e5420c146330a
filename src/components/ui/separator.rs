use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Separator(
    #[prop(into, optional)] orientation: Signal<SeparatorOrientation>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let merged_class = move || {
        let orientation = orientation.get();
        SeparatorClass { orientation }.with_class(class.clone())
    };

    view! { <div class=merged_class role="separator" /> }
}

#[derive(TwClass, Default)]
#[tw(class = "shrink-0 bg-border")]
pub struct SeparatorClass {
    orientation: SeparatorOrientation,
}

#[derive(TwVariant)]
pub enum SeparatorOrientation {
    #[tw(default, class = "w-full h-[1px]")]
    Horizontal,
    #[tw(class = "h-full w-[1px]")]
    Vertical,
}
