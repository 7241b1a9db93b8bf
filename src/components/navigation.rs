use crate::i18n::Msg;
use crate::routes::{ARCHIVED_PATH, HOME_PATH, NEW_NOTE_PATH};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Navigation() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let pathname = use_location().pathname;

    let link_class = move |path: &'static str| {
        if pathname.get() == path {
            "rounded-md px-3 py-1.5 text-sm font-medium bg-accent text-accent-foreground"
        } else {
            "rounded-md px-3 py-1.5 text-sm text-muted-foreground transition-colors hover:bg-surface-hover hover:text-foreground"
        }
    };

    let links = [
        (HOME_PATH, Msg::ActiveNotes),
        (ARCHIVED_PATH, Msg::ArchivedNotes),
        (NEW_NOTE_PATH, Msg::AddNote),
    ];

    view! {
        <nav class="flex flex-wrap items-center gap-1">
            {links
                .into_iter()
                .map(|(path, label)| {
                    view! {
                        <a
                            href=path
                            class=move || link_class(path)
                            aria-current=move || (pathname.get() == path).then_some("page")
                        >
                            {move || app.t(label)}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
