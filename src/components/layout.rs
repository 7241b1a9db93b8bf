use crate::components::{Header, NoticeBanner};
use crate::i18n::Msg;
use crate::state::AppContext;
use crate::util::current_year;
use leptos::prelude::*;

/// Header, notice banner, page body and footer.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let year = current_year().to_string();

    view! {
        <div class="flex min-h-screen flex-col bg-background text-foreground">
            <Header />
            <NoticeBanner />
            <main class="mx-auto w-full max-w-4xl flex-1 px-4 py-6">
                {children()}
            </main>
            <footer class="border-t border-border py-4 text-center text-xs text-muted-foreground">
                {move || app.tr(Msg::Copyright, &[("year", year.as_str())])}
            </footer>
        </div>
    }
}
