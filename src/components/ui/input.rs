use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

#[component]
pub fn Input(
    #[prop(into, optional)] class: String,

    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: Option<Signal<String>>,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] autofocus: bool,

    // Manual wiring instead of `bind:value`; see `on_input` below.
    #[prop(into)] bind_value: RwSignal<String>,

    /// Decides the stored value from `(current, proposed)`. When it keeps
    /// something other than the proposed text the element is reset to it.
    #[prop(optional, into)]
    accept: Option<Callback<(String, String), String>>,

    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        "aria-invalid:ring-destructive/20 aria-invalid:border-destructive",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };

        let proposed = input.value();
        let kept = match accept {
            Some(accept) => accept.run((bind_value.get_untracked(), proposed.clone())),
            None => proposed.clone(),
        };
        if kept != proposed {
            input.set_value(&kept);
        }
        bind_value.set(kept);
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=move || placeholder.map(|p| p.get())
            name=name
            id=id
            required=required
            autofocus=autofocus
            prop:value=move || bind_value.get()
            on:input=on_input
            node_ref=node_ref
        />
    }
    .into_any()
}
