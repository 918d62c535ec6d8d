//! Toast Stack Component

use leptos::prelude::*;
use proje_core::NotificationKind;

use crate::store::{store_dismiss_toast, use_ui_store, UiStateStoreFields};

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast toast-success",
        NotificationKind::Error => "toast toast-error",
        NotificationKind::Info => "toast toast-info",
        NotificationKind::Warning => "toast toast-warning",
    }
}

/// Bottom-right notifications. Click to dismiss early.
#[component]
pub fn Toasts() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.kind) on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
