//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks the client for a delete
//! intent and shows its prompt, the second confirms it.

use leptos::prelude::*;
use proje_core::{DeleteIntent, EntityKind};

use crate::context::use_app_context;

/// Inline delete confirmation button
///
/// Shows a trash button initially. When clicked, shows the intent's
/// prompt with ✓/✗ buttons. Nothing is sent until ✓.
#[component]
pub fn DeleteConfirmButton(kind: EntityKind, id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let pending = RwSignal::new(None::<DeleteIntent>);

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Ok(intent) = ctx.client().request_delete(kind, id) {
            pending.set(Some(intent));
        }
    };

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(intent) = pending.get_untracked() else {
            return;
        };
        pending.set(None);
        ctx.spawn(move |client| async move {
            let _ = client.confirm_delete(intent).await;
        });
    };

    view! {
        <Show when=move || pending.read().is_none()>
            <button class="btn-icon delete-btn" title="Delete" on:click=ask>
                "🗑"
            </button>
        </Show>
        <Show when=move || pending.read().is_some()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    {move || pending.read().as_ref().map(DeleteIntent::prompt)}
                </span>
                <button class="confirm-btn" on:click=confirm>
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        pending.set(None);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
