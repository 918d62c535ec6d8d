//! Account Dialogs
//!
//! Login and registration.

use leptos::prelude::*;
use proje_core::RegisterForm;

use super::form_field::{bind, submit_and_close, TextField};
use crate::context::use_app_context;
use crate::store::ActiveModal;

#[derive(Clone, Debug, Default)]
struct Credentials {
    email: String,
    password: String,
}

#[component]
pub fn LoginDialog() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(Credentials::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Credentials { email, password } = form.get_untracked();
        submit_and_close(ctx, busy, move |client| async move {
            client.login(&email, &password).await.is_ok()
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <h2>"Log in"</h2>
            <TextField label="Email" input_type="email" field=bind(form, |f| &f.email, |f| &mut f.email) required=true />
            <TextField
                label="Password"
                input_type="password"
                field=bind(form, |f| &f.password, |f| &mut f.password)
                required=true
            />
            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                "Log in"
            </button>
            <p class="form-switch">
                "No account yet? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.open(ActiveModal::Register);
                }>"Sign up"</a>
            </p>
        </form>
    }
}

#[component]
pub fn RegisterDialog() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let data = form.get_untracked();
        ctx.spawn(move |client| async move {
            let registered = client.register(&data).await.is_ok();
            busy.try_set(false);
            // the account exists but no session yet: continue at login
            if registered {
                ctx.open(ActiveModal::Login);
            }
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <h2>"Create an account"</h2>
            <div class="form-row">
                <TextField label="First name" field=bind(form, |f| &f.first_name, |f| &mut f.first_name) required=true />
                <TextField label="Last name" field=bind(form, |f| &f.last_name, |f| &mut f.last_name) required=true />
            </div>
            <TextField label="Email" input_type="email" field=bind(form, |f| &f.email, |f| &mut f.email) required=true />
            <TextField
                label="Password"
                input_type="password"
                field=bind(form, |f| &f.password, |f| &mut f.password)
                required=true
            />
            <TextField
                label="Confirm password"
                input_type="password"
                field=bind(form, |f| &f.password_confirm, |f| &mut f.password_confirm)
                required=true
            />
            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                "Sign up"
            </button>
        </form>
    }
}
