use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, Card, CardContent, CardHeader, CardTitle, Input,
    Label, Spinner,
};
use crate::i18n::Msg;
use crate::models::{Credentials, Registration};
use crate::routes::{navigate_if_mounted, LOGIN_PATH, REGISTER_PATH};
use crate::state::{AppContext, NoticeKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
fn AuthCard(#[prop(into)] title: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <div class="mx-auto flex w-full max-w-sm flex-col justify-center py-10">
            <Card>
                <CardHeader>
                    <CardTitle class="text-lg">{move || title.get()}</CardTitle>
                </CardHeader>
                <CardContent>{children()}</CardContent>
            </Card>
        </div>
    }
}

#[component]
fn FieldError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ().into_view()>
            {move || {
                error.get().map(|e| {
                    view! {
                        <Alert class="border-destructive/30">
                            <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                        </Alert>
                    }
                })
            }}
        </Show>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app = expect_context::<AppContext>().0;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let credentials = Credentials::new(&email.get_untracked(), &password.get_untracked());
        if credentials.email.is_empty() || credentials.password.is_empty() {
            error.set(Some(app.t(Msg::MissingField)));
            return;
        }

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match app.login(credentials).await {
                Ok(_) => {
                    // The public-route guard redirects to home once signed in.
                    let _ = email.try_set(String::new());
                    let _ = password.try_set(String::new());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    let message = app.tr(Msg::LoginFail, &[("message", e.message.as_str())]);
                    app.notify(NoticeKind::Error, app.t(Msg::LoginFailTitle), message);
                }
            }
            let _ = loading.try_set(false);
        });
    };

    view! {
        <AuthCard title=Signal::derive(move || app.t(Msg::LoginTitle))>
            <form class="flex flex-col gap-3" on:submit=on_submit>
                <div class="flex flex-col gap-1.5">
                    <Label html_for="email" class="text-xs">{move || app.t(Msg::EmailLabel)}</Label>
                    <Input
                        id="email"
                        r#type="email"
                        placeholder=Signal::derive(|| "you@example.com".to_string())
                        bind_value=email
                        required=true
                        autofocus=true
                        class="h-8 text-sm"
                    />
                </div>

                <div class="flex flex-col gap-1.5">
                    <Label html_for="password" class="text-xs">{move || app.t(Msg::PasswordLabel)}</Label>
                    <Input
                        id="password"
                        r#type="password"
                        bind_value=password
                        required=true
                        class="h-8 text-sm"
                    />
                </div>

                <FieldError error=error />

                <Button class="w-full" size=ButtonSize::Sm attr:disabled=move || loading.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || loading.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || app.t(Msg::LoginButton)}
                    </span>
                </Button>

                <div class="pt-1 text-xs text-muted-foreground">
                    {move || app.t(Msg::NoAccount)}" "
                    <a class="text-primary underline underline-offset-4" href=REGISTER_PATH>
                        {move || app.t(Msg::RegisterHere)}
                    </a>
                </div>
            </form>
        </AuthCard>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name: RwSignal<String> = RwSignal::new(String::new());
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let confirm_password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app = expect_context::<AppContext>().0;
    let navigate = StoredValue::new(use_navigate());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let registration = match Registration::new(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(r) => r,
            Err(e) => {
                error.set(Some(app.t(Msg::from(e))));
                return;
            }
        };

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match app.register(registration).await {
                Ok(()) => {
                    app.notify(
                        NoticeKind::Success,
                        app.t(Msg::SuccessTitle),
                        app.t(Msg::RegisterSuccess),
                    );
                    navigate_if_mounted(navigate, LOGIN_PATH);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "registration failed");
                    let message = app.tr(Msg::RegisterFail, &[("message", e.message.as_str())]);
                    app.notify(NoticeKind::Error, app.t(Msg::RegisterFailTitle), message);
                }
            }
            let _ = loading.try_set(false);
        });
    };

    let field = move |id: &'static str, label: Msg, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="flex flex-col gap-1.5">
                <Label html_for=id class="text-xs">{move || app.t(label)}</Label>
                <Input id=id r#type=kind bind_value=value required=true class="h-8 text-sm" />
            </div>
        }
    };

    view! {
        <AuthCard title=Signal::derive(move || app.t(Msg::RegisterTitle))>
            <form class="flex flex-col gap-3" on:submit=on_submit>
                {field("name", Msg::NameLabel, "text", name)}
                {field("email", Msg::EmailLabel, "email", email)}
                {field("password", Msg::PasswordLabel, "password", password)}
                {field("confirm_password", Msg::ConfirmPasswordLabel, "password", confirm_password)}

                <FieldError error=error />

                <Button class="w-full" size=ButtonSize::Sm attr:disabled=move || loading.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || loading.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || app.t(Msg::RegisterButton)}
                    </span>
                </Button>

                <div class="pt-1 text-xs text-muted-foreground">
                    {move || app.t(Msg::HaveAccount)}" "
                    <a class="text-primary underline underline-offset-4" href=LOGIN_PATH>
                        {move || app.t(Msg::LoginHere)}
                    </a>
                </div>
            </form>
        </AuthCard>
    }
}
