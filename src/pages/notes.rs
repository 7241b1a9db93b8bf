use crate::components::ui::{Card, CardContent, CardHeader, CardTitle, LoadingState};
use crate::components::{NoteInput, NoteList};
use crate::i18n::Msg;
use crate::models::{NewNote, Note};
use crate::notes::{filter_by_title, ListKind};
use crate::routes::{navigate_if_mounted, HOME_PATH, KEYWORD_PARAM};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

/// One of the two collections, filtered by `?keyword=`.
#[component]
fn FilteredNotes(kind: ListKind) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let query = use_query_map();

    let keyword = move || query.with(|q| q.get(KEYWORD_PARAM).unwrap_or_default());
    let source = match kind {
        ListKind::Active => app.active_notes,
        ListKind::Archived => app.archived_notes,
    };
    let filtered = Signal::derive(move || source.with(|notes| filter_by_title(notes, &keyword())));

    // Spinner only for the first load; later refreshes keep the old list visible.
    let first_load = move || {
        app.notes_loading.get()
            && app.active_notes.with(Vec::is_empty)
            && app.archived_notes.with(Vec::is_empty)
    };

    let heading = move || match kind {
        ListKind::Active => app.t(Msg::ActiveNotes),
        ListKind::Archived => app.t(Msg::ArchivedNotes),
    };

    view! {
        <section class="space-y-4">
            <h1 class="text-xl font-semibold">{heading}</h1>
            <Show
                when=move || !first_load()
                fallback=move || view! { <LoadingState message=Signal::derive(move || app.t(Msg::LoadingNotes)) /> }
            >
                <NoteList notes=filtered kind=kind />
            </Show>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <FilteredNotes kind=ListKind::Active /> }
}

#[component]
pub fn ArchivedPage() -> impl IntoView {
    view! { <FilteredNotes kind=ListKind::Archived /> }
}

#[component]
pub fn NewNotePage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let navigate = StoredValue::new(use_navigate());
    let saving: RwSignal<bool> = RwSignal::new(false);

    let on_submit = Callback::new(move |note: NewNote| {
        saving.set(true);
        spawn_local(async move {
            let created: Result<Note, _> = app.create_note(note).await;
            let _ = saving.try_set(false);
            if created.is_ok() {
                navigate_if_mounted(navigate, HOME_PATH);
            }
        });
    });

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-lg">{move || app.t(Msg::NewNoteTitle)}</CardTitle>
            </CardHeader>
            <CardContent>
                <NoteInput on_submit=on_submit busy=saving />
            </CardContent>
        </Card>
    }
}
