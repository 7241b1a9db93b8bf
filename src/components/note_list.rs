use crate::components::NoteItem;
use crate::i18n::Msg;
use crate::models::Note;
use crate::notes::ListKind;
use crate::state::AppContext;
use leptos::prelude::*;

#[component]
pub fn NoteList(#[prop(into)] notes: Signal<Vec<Note>>, kind: ListKind) -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    let empty_message = move || match kind {
        ListKind::Active => app.t(Msg::NoActiveNotes),
        ListKind::Archived => app.t(Msg::NoArchivedNotes),
    };

    view! {
        <Show
            when=move || notes.with(|n| !n.is_empty())
            fallback=move || view! {
                <div class="rounded-md border border-border bg-muted p-6 text-center text-sm text-muted-foreground">
                    {empty_message}
                </div>
            }
        >
            <div class="grid grid-cols-1 gap-3 sm:grid-cols-2 lg:grid-cols-3">
                <For
                    each=move || notes.get()
                    key=|n| (n.id.clone(), n.archived)
                    children=|note| view! { <NoteItem note=note /> }
                />
            </div>
        </Show>
    }
}
