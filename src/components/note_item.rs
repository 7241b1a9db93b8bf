use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, Spinner, Tooltip, TooltipContent,
};
use crate::components::ConfirmDeleteDialog;
use crate::i18n::Msg;
use crate::models::Note;
use crate::notes::{NoteRowState, RowEvent};
use crate::routes::note_path;
use crate::state::AppContext;
use crate::util::{body_preview, format_date};
use icons::{Archive, ArchiveRestore, Trash2};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One card in a note list: title link, date, body preview and actions.
#[component]
pub fn NoteItem(note: Note) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let row = RwSignal::new(NoteRowState::Idle);

    let id = StoredValue::new(note.id.clone());
    let archived = note.archived;
    let href = note_path(&note.id);
    let title = note.title.clone();
    let created_at = note.created_at.clone();
    let preview = body_preview(&note.body);
    let has_body = !preview.trim().is_empty();

    let settle = move || {
        // The row may already be gone after the refetch.
        let _ = row.try_update(|s| *s = s.next(RowEvent::Settled));
    };

    let on_toggle_archive = move |_| {
        if !row.get_untracked().starts_work(RowEvent::ToggleArchive) {
            return;
        }
        row.update(|s| *s = s.next(RowEvent::ToggleArchive));
        let id = id.get_value();
        spawn_local(async move {
            let _ = app.set_archived(id, !archived).await;
            settle();
        });
    };

    let on_confirm_delete = Callback::new(move |_| {
        if !row.get_untracked().starts_work(RowEvent::ConfirmDelete) {
            return;
        }
        row.update(|s| *s = s.next(RowEvent::ConfirmDelete));
        let id = id.get_value();
        spawn_local(async move {
            let _ = app.delete_note(id).await;
            settle();
        });
    });

    let title_text = move || {
        if title.trim().is_empty() {
            app.t(Msg::UntitledNote)
        } else {
            title.clone()
        }
    };

    view! {
        <div class=move || if row.get().is_busy() { "opacity-70 transition-opacity" } else { "transition-opacity" }>
            <Card class="h-full gap-2 py-4">
                <div class="flex flex-1 flex-col gap-1 px-4">
                    <a href=href class="truncate text-base font-semibold hover:underline">
                        {title_text}
                    </a>
                    <div class="text-xs text-muted-foreground">
                        {move || format_date(app.locale.get(), &created_at)}
                    </div>
                    {if has_body {
                        view! { <div class="line-clamp-3 text-sm text-muted-foreground" inner_html=preview></div> }
                            .into_any()
                    } else {
                        view! { <div class="text-sm italic text-muted-foreground">{move || app.t(Msg::NoNoteBody)}</div> }
                            .into_any()
                    }}
                </div>

                <div class="flex items-center justify-end gap-1 px-3">
                    <Show
                        when=move || !row.get().is_busy()
                        fallback=move || view! { <Spinner class="m-2" label=app.t(Msg::ProcessingText) /> }
                    >
                        <Tooltip>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                class="text-destructive"
                                attr:aria-label=move || app.t(Msg::DeleteAction)
                                on:click=move |_| row.update(|s| *s = s.next(RowEvent::AskDelete))
                            >
                                <Trash2 />
                            </Button>
                            <TooltipContent>{move || app.t(Msg::DeleteAction)}</TooltipContent>
                        </Tooltip>

                        <Tooltip>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                attr:aria-label=move || {
                                    app.t(if archived { Msg::UnarchiveAction } else { Msg::ArchiveAction })
                                }
                                on:click=on_toggle_archive
                            >
                                {if archived {
                                    view! { <ArchiveRestore /> }.into_any()
                                } else {
                                    view! { <Archive /> }.into_any()
                                }}
                            </Button>
                            <TooltipContent>
                                {move || app.t(if archived { Msg::UnarchiveAction } else { Msg::ArchiveAction })}
                            </TooltipContent>
                        </Tooltip>
                    </Show>
                </div>

                <ConfirmDeleteDialog
                    open=Signal::derive(move || row.get().is_confirming())
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |_| row.update(|s| *s = s.next(RowEvent::Cancel)))
                />
            </Card>
        </div>
    }
}
