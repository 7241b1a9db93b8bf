use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Dialog, DialogDescription, DialogFooter, DialogHeader,
    DialogTitle,
};
use crate::i18n::Msg;
use crate::state::AppContext;
use leptos::prelude::*;

/// "Are you sure?" prompt shown before any delete.
#[component]
pub fn ConfirmDeleteDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    view! {
        <Dialog open=open on_close=on_cancel>
            <DialogHeader>
                <DialogTitle class="text-destructive">{move || app.t(Msg::ConfirmDeleteTitle)}</DialogTitle>
                <DialogDescription class="text-xs">{move || app.t(Msg::ConfirmDeleteText)}</DialogDescription>
            </DialogHeader>
            <DialogFooter>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    on:click=move |_| on_cancel.run(())
                >
                    {move || app.t(Msg::CancelButton)}
                </Button>
                <Button
                    variant=ButtonVariant::Destructive
                    size=ButtonSize::Sm
                    on:click=move |_| on_confirm.run(())
                >
                    {move || app.t(Msg::ConfirmDeleteButton)}
                </Button>
            </DialogFooter>
        </Dialog>
    }
}
