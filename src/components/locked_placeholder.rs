//! Locked Placeholder Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::ActiveModal;

/// Shown to guests in place of a collection
#[component]
pub fn LockedPlaceholder(what: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="locked-placeholder">
            <p>{format!("Log in to see your {}.", what)}</p>
            <button class="btn-primary" on:click=move |_| ctx.open(ActiveModal::Login)>
                "Log in"
            </button>
        </div>
    }
}
