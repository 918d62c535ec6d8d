//! Proje Frontend App
//!
//! Main application component: navigation, headline stats and the three
//! board sections, plus the modal host and toast stack.

use leptos::prelude::*;
use proje_core::LoadPhase;
use reactive_stores::Store;

use crate::components::{ModalHost, NavBar, ProjectList, StatsBar, TaskList, TeamList, Toasts};
use crate::context::AppContext;
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(UiState::default());
    provide_context(store);

    let ctx = AppContext::new(store);
    provide_context(ctx);

    // Restore the session and load the board once on mount
    ctx.spawn(|client| async move {
        let view = client.start().await;
        log::info!("[APP] Started as {:?}", view);
    });

    let status = move || match store.view().get().phase {
        LoadPhase::Loading => Some(view! { <div class="status-banner loading">"Loading..."</div> }.into_any()),
        LoadPhase::Error => Some(
            view! {
                <div class="status-banner error">
                    "Data could not be loaded. "
                    <button
                        class="retry-btn"
                        on:click=move |_| ctx.spawn(|client| async move {
                            client.load_all().await;
                        })
                    >
                        "Retry"
                    </button>
                </div>
            }
            .into_any(),
        ),
        LoadPhase::Ready => None,
    };

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {status}
                <StatsBar />
                <ProjectList />
                <TaskList />
                <TeamList />
            </main>

            <ModalHost />
            <Toasts />
        </div>
    }
}
