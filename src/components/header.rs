use crate::components::ui::{Button, ButtonSize, ButtonVariant, Tooltip, TooltipContent, TooltipPosition};
use crate::components::{Navigation, SearchBar};
use crate::i18n::Msg;
use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::state::AppContext;
use crate::theme::ThemeMode;
use icons::{Languages, LogOut, Moon, Sun};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Header() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let navigate = StoredValue::new(use_navigate());

    let is_authenticated = move || app.session.with(|s| s.is_authenticated());
    let user_name = move || app.current_user().map(|u| u.name).unwrap_or_default();

    let on_logout = move |_| {
        app.logout();
        navigate.with_value(|nav| nav(LOGIN_PATH, Default::default()));
    };

    let theme_label = move || match app.theme.get() {
        ThemeMode::Light => app.t(Msg::ThemeToggleDark),
        ThemeMode::Dark => app.t(Msg::ThemeToggleLight),
    };

    view! {
        <header class="sticky top-0 z-30 border-b border-border bg-background/95 backdrop-blur">
            <div class="mx-auto flex h-14 w-full max-w-4xl items-center gap-2 px-4">
                <a href=HOME_PATH class="flex-1 truncate text-sm font-semibold text-foreground">
                    {move || app.t(Msg::AppName)}
                </a>

                <Tooltip>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        attr:aria-label=move || app.t(Msg::LanguageToggle)
                        on:click=move |_| app.toggle_locale()
                    >
                        <Languages />
                        <span class="hidden text-xs uppercase sm:inline">{move || app.locale.get().as_ref().to_string()}</span>
                    </Button>
                    <TooltipContent position=TooltipPosition::Bottom>{move || app.t(Msg::LanguageToggle)}</TooltipContent>
                </Tooltip>

                <Tooltip>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:aria-label=theme_label
                        on:click=move |_| app.toggle_theme()
                    >
                        {move || match app.theme.get() {
                            ThemeMode::Light => view! { <Moon /> }.into_any(),
                            ThemeMode::Dark => view! { <Sun /> }.into_any(),
                        }}
                    </Button>
                    <TooltipContent position=TooltipPosition::Bottom>{theme_label}</TooltipContent>
                </Tooltip>

                <Show when=is_authenticated fallback=|| ().into_view()>
                    <Tooltip>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            attr:aria-label=move || app.t(Msg::Logout)
                            on:click=on_logout
                        >
                            <LogOut />
                        </Button>
                        <TooltipContent position=TooltipPosition::Bottom>{move || app.t(Msg::Logout)}</TooltipContent>
                    </Tooltip>
                </Show>
            </div>

            <Show when=is_authenticated fallback=|| ().into_view()>
                <div class="mx-auto flex w-full max-w-4xl flex-col gap-2 px-4 pb-3">
                    <Navigation />
                    <SearchBar />
                    <div class="text-right text-xs text-muted-foreground">
                        {move || app.tr(Msg::LoginAs, &[("name", user_name().as_str())])}
                    </div>
                </div>
            </Show>
        </header>
    }
}
