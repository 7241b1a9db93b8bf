use crate::api::NotesGateway;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, LoadingState, Spinner, Tooltip, TooltipContent,
    TooltipPosition,
};
use crate::components::ConfirmDeleteDialog;
use crate::i18n::Msg;
use crate::models::Note;
use crate::notes::{NoteRowState, RowEvent};
use crate::pages::NotFoundPage;
use crate::routes::{after_delete, navigate_if_mounted};
use crate::state::AppContext;
use crate::util::format_date_long;
use icons::{Archive, ArchiveRestore, ArrowLeft, Trash2};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

#[derive(Clone, Debug, PartialEq)]
enum Detail {
    Loading,
    Loaded(Note),
    Missing,
}

#[component]
pub fn NoteDetailPage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let params = use_params_map();
    let pathname = use_location().pathname;
    let navigate = StoredValue::new(use_navigate());

    let detail: RwSignal<Detail> = RwSignal::new(Detail::Loading);
    let row = RwSignal::new(NoteRowState::Idle);
    let request_id: RwSignal<u64> = RwSignal::new(0);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        let req = request_id.get_untracked() + 1;
        request_id.set(req);
        detail.set(Detail::Loading);

        let backend = app.backend.get_untracked();
        spawn_local(async move {
            let loaded = backend.get_note(&id).await;
            if request_id.try_get_untracked() != Some(req) {
                return;
            }
            let next = match loaded {
                Ok(note) => Detail::Loaded(note),
                Err(e) => {
                    tracing::warn!(%id, error = %e, "note detail unavailable");
                    Detail::Missing
                }
            };
            let _ = detail.try_set(next);
        });
    });

    let loaded = move || match detail.get() {
        Detail::Loaded(note) => Some(note),
        _ => None,
    };

    let on_toggle_archive = move |_| {
        let Some(note) = loaded() else { return };
        if !row.get_untracked().starts_work(RowEvent::ToggleArchive) {
            return;
        }
        row.update(|s| *s = s.next(RowEvent::ToggleArchive));
        let target = !note.archived;
        spawn_local(async move {
            if app.set_archived(note.id.clone(), target).await.is_ok() {
                let _ = detail.try_update(|d| {
                    if let Detail::Loaded(n) = d {
                        n.archived = target;
                    }
                });
            }
            let _ = row.try_update(|s| *s = s.next(RowEvent::Settled));
        });
    };

    let on_confirm_delete = Callback::new(move |_| {
        let Some(note) = loaded() else { return };
        if !row.get_untracked().starts_work(RowEvent::ConfirmDelete) {
            return;
        }
        row.update(|s| *s = s.next(RowEvent::ConfirmDelete));
        spawn_local(async move {
            let deleted = app.delete_note(note.id.clone()).await;
            let _ = row.try_update(|s| *s = s.next(RowEvent::Settled));
            if deleted.is_err() {
                return;
            }
            let current = pathname.try_get_untracked().unwrap_or_default();
            if let Some(target) = after_delete(&current, &note.id, note.archived) {
                navigate_if_mounted(navigate, target);
            }
        });
    });

    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    move || match detail.get() {
        Detail::Loading => view! {
            <LoadingState message=Signal::derive(move || app.t(Msg::LoadingNoteDetail)) />
        }
        .into_any(),
        Detail::Missing => view! { <NotFoundPage /> }.into_any(),
        Detail::Loaded(note) => {
            let archived = note.archived;
            let title = if note.title.trim().is_empty() { app.t(Msg::UntitledNote) } else { note.title.clone() };
            let created_at = note.created_at.clone();
            let body = note.body.clone();

            view! {
                <article class="space-y-4">
                    <div class="flex items-center gap-2">
                        <Tooltip>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                attr:aria-label=move || app.t(Msg::BackButtonTooltip)
                                on:click=go_back
                            >
                                <ArrowLeft />
                            </Button>
                            <TooltipContent position=TooltipPosition::Bottom>
                                {move || app.t(Msg::BackButtonTooltip)}
                            </TooltipContent>
                        </Tooltip>
                        <h1 class="flex-1 truncate text-2xl font-semibold">{title}</h1>
                    </div>
                    <p class="text-sm text-muted-foreground">
                        {move || {
                            let date = format_date_long(app.locale.get(), &created_at);
                            app.tr(Msg::NoteDetailCreatedOn, &[("date", date.as_str())])
                        }}
                    </p>
                    {if body.trim().is_empty() {
                        view! { <p class="italic text-muted-foreground">{move || app.t(Msg::NoNoteBody)}</p> }
                            .into_any()
                    } else {
                        view! { <div class="prose max-w-none break-words" inner_html=body></div> }.into_any()
                    }}

                    <div class="flex items-center gap-2">
                        <Show
                            when=move || !row.get().is_busy()
                            fallback=move || view! { <Spinner label=app.t(Msg::ProcessingText) /> }
                        >
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                on:click=on_toggle_archive
                            >
                                {if archived {
                                    view! { <ArchiveRestore /> }.into_any()
                                } else {
                                    view! { <Archive /> }.into_any()
                                }}
                                {move || app.t(if archived { Msg::UnarchiveAction } else { Msg::ArchiveAction })}
                            </Button>
                            <Button
                                variant=ButtonVariant::Destructive
                                size=ButtonSize::Sm
                                on:click=move |_| row.update(|s| *s = s.next(RowEvent::AskDelete))
                            >
                                <Trash2 />
                                {move || app.t(Msg::DeleteAction)}
                            </Button>
                        </Show>
                    </div>

                    <ConfirmDeleteDialog
                        open=Signal::derive(move || row.get().is_confirming())
                        on_confirm=on_confirm_delete
                        on_cancel=Callback::new(move |_| row.update(|s| *s = s.next(RowEvent::Cancel)))
                    />
                </article>
            }
            .into_any()
        }
    }
}
