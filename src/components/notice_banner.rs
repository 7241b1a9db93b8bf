use crate::components::ui::{alert_tone, Alert, AlertDescription, AlertTitle, Button, ButtonSize, ButtonVariant};
use crate::i18n::Msg;
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

const AUTO_DISMISS_MS: i32 = 4000;

/// Shows the current notice and clears it after a few seconds.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    Effect::new(move |_| {
        let Some(id) = app.notice.with(|n| n.as_ref().map(|n| n.id)) else {
            return;
        };

        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(move || {
                app.dismiss_notice(id);
            })
            .as_ref()
            .unchecked_ref(),
            AUTO_DISMISS_MS,
        );
    });

    view! {
        {move || {
            app.notice.get().map(|notice| {
                let id = notice.id;
                let class = tw_merge!("flex items-start justify-between gap-3", alert_tone(notice.kind));
                view! {
                    <div class="fixed inset-x-0 top-3 z-40 mx-auto w-full max-w-md px-4">
                        <Alert class=class attr:role="status">
                            <div class="min-w-0 space-y-1">
                                <AlertTitle>{notice.title}</AlertTitle>
                                <AlertDescription class="text-xs">{notice.message}</AlertDescription>
                            </div>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                class="size-6"
                                attr:aria-label=move || app.t(Msg::DismissButton)
                                on:click=move |_| app.dismiss_notice(id)
                            >
                                <X />
                            </Button>
                        </Alert>
                    </div>
                }
            })
        }}
    }
}
