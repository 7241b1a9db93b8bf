use crate::components::ui::Input;
use crate::i18n::Msg;
use crate::routes::{with_keyword, KEYWORD_PARAM};
use crate::state::AppContext;
use icons::Search;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};
use leptos_router::NavigateOptions;

/// Title filter mirrored to `?keyword=` on the current path.
#[component]
pub fn SearchBar() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let query = use_query_map();
    let pathname = use_location().pathname;
    let navigate = StoredValue::new(use_navigate());

    let url_keyword = move || query.with(|q| q.get(KEYWORD_PARAM).unwrap_or_default());
    let keyword = RwSignal::new(url_keyword());

    // URL -> input (back/forward, links).
    Effect::new(move |_| {
        let k = url_keyword();
        if k != keyword.get_untracked() {
            keyword.set(k);
        }
    });

    // Input -> URL.
    Effect::new(move |_| {
        let k = keyword.get();
        if k == query.with_untracked(|q| q.get(KEYWORD_PARAM).unwrap_or_default()) {
            return;
        }
        let target = with_keyword(&pathname.get_untracked(), &k);
        navigate.with_value(|nav| {
            nav(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            )
        });
    });

    view! {
        <div class="relative w-full">
            <Search class="pointer-events-none absolute left-2.5 top-1/2 size-4 -translate-y-1/2 text-muted-foreground" />
            <Input
                r#type="search"
                class="h-9 pl-8 text-sm"
                placeholder=Signal::derive(move || app.t(Msg::SearchPlaceholder))
                bind_value=keyword
            />
        </div>
    }
}
