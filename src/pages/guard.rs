use crate::components::ui::LoadingState;
use crate::i18n::Msg;
use crate::routes::{decide, GuardOutcome, RouteAccess};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// Renders `children` only when the current session may see a route of `access`.
#[component]
pub fn RouteGuard(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    // Store children so the view closure stays `Fn`.
    let children = StoredValue::new(children);
    let outcome = Memo::new(move |_| app.session.with(|s| decide(access, s)));

    move || match outcome.get() {
        GuardOutcome::Pending => view! {
            <LoadingState message=Signal::derive(move || app.t(Msg::LoadingSession)) />
        }
        .into_any(),
        GuardOutcome::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        GuardOutcome::Render => children.with_value(|c| c()).into_any(),
    }
}
