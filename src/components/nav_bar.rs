//! Navigation Bar Component
//!
//! Brand, section links and the account controls for the current session.

use leptos::prelude::*;
use proje_core::TaskFilter;

use crate::context::use_app_context;
use crate::store::{ActiveModal, UiStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let signed_in = move || store.session().read().is_some();
    let greeting = move || {
        store
            .session()
            .read()
            .as_ref()
            .map(|s| format!("Hello, {}", s.full_name()))
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Proje"</span>
            <div class="nav-links">
                <a href="#projects">"Projects"</a>
                <a href="#tasks">"Tasks"</a>
                <a href="#team">"Team"</a>
            </div>
            <div class="nav-account">
                <Show
                    when=signed_in
                    fallback=move || view! {
                        <button class="btn-secondary" on:click=move |_| ctx.open(ActiveModal::Login)>
                            "Log in"
                        </button>
                        <button class="btn-primary" on:click=move |_| ctx.open(ActiveModal::Register)>
                            "Sign up"
                        </button>
                    }
                >
                    <span class="nav-user">{greeting}</span>
                    <button class="btn-secondary" on:click=move |_| ctx.open(ActiveModal::Profile)>
                        "Profile"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| {
                            *store.task_filter().write() = TaskFilter::All;
                            ctx.client().logout();
                        }
                    >
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
