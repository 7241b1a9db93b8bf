use icons::LoaderCircle;
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn Spinner(
    #[prop(into, optional)] class: String,
    #[prop(into, default = "Loading".to_string())] label: String,
) -> impl IntoView {
    let merged_class = tw_merge!("size-4 animate-spin", class);

    view! { <LoaderCircle class=merged_class attr:role="status" attr:aria-label=label /> }
}

/// Spinner with a caption, used for whole-page waits.
#[component]
pub fn LoadingState(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 py-10 text-sm text-muted-foreground">
            <Spinner label=message.get_untracked() />
            <span>{move || message.get()}</span>
        </div>
    }
}
