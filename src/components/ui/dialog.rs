use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {DialogHeader, div, "mb-3 space-y-1"}
    clx! {DialogTitle, h3, "text-base leading-none font-semibold"}
    clx! {DialogDescription, p, "text-muted-foreground text-sm"}
    clx! {DialogFooter, footer, "flex items-center justify-end gap-2 pt-2"}
}

pub use components::*;

/// Modal driven by `open`. Escape and a click on the backdrop call `on_close`.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);

    let esc = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if open.get_untracked() && ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || esc.remove());

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                data-name="DialogBackdrop"
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    data-name="DialogContent"
                    role="dialog"
                    aria-modal="true"
                    class="w-full max-w-sm rounded-md border border-border bg-background p-4 shadow-lg"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    {move || children.with_value(|c| c())}
                </div>
            </div>
        </Show>
    }
}
