//! Stats Bar Component
//!
//! Headline counters above the board.

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_ui_store();
    let stats = move || store.stats().get();

    view! {
        <div class="stats-bar">
            <div class="stat-card">
                <span class="stat-value">{move || stats().projects}</span>
                <span class="stat-label">"Projects"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || stats().completed_tasks}</span>
                <span class="stat-label">"Completed tasks"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || stats().members}</span>
                <span class="stat-label">"Team members"</span>
            </div>
        </div>
    }
}
