use crate::i18n::Msg;
use crate::routes::HOME_PATH;
use crate::state::AppContext;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    view! {
        <div class="flex flex-col items-center gap-3 py-16 text-center">
            <h1 class="text-2xl font-semibold">{move || app.t(Msg::PageNotFound)}</h1>
            <p class="text-sm text-muted-foreground">{move || app.t(Msg::PageNotFoundMessage)}</p>
            <a href=HOME_PATH class="rounded-md border px-4 py-2 text-sm font-medium hover:bg-accent">
                {move || app.t(Msg::BackToHome)}
            </a>
        </div>
    }
}
