use crate::state::NoticeKind;
use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm shadow-sm"}
    clx! {AlertTitle, h4, "mb-1 font-medium tracking-tight leading-none"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

/// Border and text colours for a notice of `kind`.
pub fn alert_tone(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "border-success/40 bg-success/10 text-foreground",
        NoticeKind::Info => "border-border bg-background text-foreground",
        NoticeKind::Warning => "border-warning/40 bg-warning/10 text-foreground",
        NoticeKind::Error => "border-destructive/40 bg-destructive/10 text-destructive",
    }
}
