use crate::components::AppLayout;
use crate::config::EnvConfig;
use crate::pages::{
    ArchivedPage, HomePage, LoginPage, NewNotePage, NoteDetailPage, NotFoundPage, RegisterPage,
    RouteGuard,
};
use crate::routes::RouteAccess;
use crate::state::{AppContext, AppState};
use crate::storage::default_store;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let app = AppState::new(&EnvConfig::new(), default_store());
    provide_context(AppContext(app));

    Effect::new(move |_| app.theme.get().apply_to_document());
    Effect::new(move |_| app.locale.get().apply_to_document());

    spawn_local(app.initialize_session());

    view! {
        <Router>
            <AppLayout>
                <Routes fallback=|| view! {
                    <RouteGuard access=RouteAccess::CatchAll>
                        <NotFoundPage />
                    </RouteGuard>
                }>
                    <Route path=path!("") view=|| view! {
                        <RouteGuard access=RouteAccess::Protected>
                            <HomePage />
                        </RouteGuard>
                    } />
                    <Route path=path!("archived") view=|| view! {
                        <RouteGuard access=RouteAccess::Protected>
                            <ArchivedPage />
                        </RouteGuard>
                    } />
                    <Route path=path!("notes/new") view=|| view! {
                        <RouteGuard access=RouteAccess::Protected>
                            <NewNotePage />
                        </RouteGuard>
                    } />
                    <Route path=path!("notes/:id") view=|| view! {
                        <RouteGuard access=RouteAccess::Protected>
                            <NoteDetailPage />
                        </RouteGuard>
                    } />
                    <Route path=path!("login") view=|| view! {
                        <RouteGuard access=RouteAccess::Public>
                            <LoginPage />
                        </RouteGuard>
                    } />
                    <Route path=path!("register") view=|| view! {
                        <RouteGuard access=RouteAccess::Public>
                            <RegisterPage />
                        </RouteGuard>
                    } />
                </Routes>
            </AppLayout>
        </Router>
    }
}
