use crate::components::ui::{Button, Input, Spinner};
use crate::i18n::Msg;
use crate::models::{accept_title_input, remaining_title_chars, NewNote};
use crate::state::AppContext;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Title plus rich-text body. Validation failures raise a warning notice and
/// never reach `on_submit`.
#[component]
pub fn NoteInput(
    #[prop(into)] on_submit: Callback<NewNote>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    let title: RwSignal<String> = RwSignal::new(String::new());
    let body: RwSignal<String> = RwSignal::new(String::new());
    let body_ref: NodeRef<html::Div> = NodeRef::new();

    let accept_title = Callback::new(|(current, proposed): (String, String)| {
        accept_title_input(&current, &proposed)
    });

    let on_body_input = move |ev: web_sys::Event| {
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            body.set(el.inner_html());
        }
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        match NewNote::new(&title.get_untracked(), &body.get_untracked()) {
            Ok(note) => {
                on_submit.run(note);
                title.set(String::new());
                body.set(String::new());
                if let Some(el) = body_ref.get_untracked() {
                    el.set_inner_html("");
                }
            }
            Err(e) => app.notify_validation(e),
        }
    };

    view! {
        <form class="flex flex-col gap-3" on:submit=on_form_submit>
            <p class="text-right text-xs text-muted-foreground">
                {move || {
                    let count = remaining_title_chars(&title.get()).to_string();
                    app.tr(Msg::TitleCharLimit, &[("count", count.as_str())])
                }}
            </p>
            <Input
                id="note-title"
                class="h-11 text-lg font-semibold"
                placeholder=Signal::derive(move || app.t(Msg::NoteTitlePlaceholder))
                bind_value=title
                accept=accept_title
                required=true
            />
            <div
                node_ref=body_ref
                data-name="NoteBody"
                class="min-h-48 w-full rounded-md border border-input bg-transparent px-3 py-2 text-sm shadow-xs outline-none focus-visible:ring-2 focus-visible:ring-ring/50 empty:before:text-muted-foreground empty:before:content-[attr(data-placeholder)]"
                contenteditable="true"
                data-placeholder=move || app.t(Msg::NoteBodyPlaceholder)
                on:input=on_body_input
            ></div>
            <Button class="self-end" attr:disabled=move || busy.get()>
                <span class="inline-flex items-center gap-2">
                    <Show when=move || busy.get() fallback=|| ().into_view()>
                        <Spinner />
                    </Show>
                    {move || if busy.get() { app.t(Msg::ProcessingText) } else { app.t(Msg::CreateNoteButton) }}
                </span>
            </Button>
        </form>
    }
}
