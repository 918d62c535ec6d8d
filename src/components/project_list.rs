//! Project List Component
//!
//! Project cards with schedule, budget, manager and task progress.

use leptos::prelude::*;
use proje_core::{CollectionView, EntityKind, ProjectCard, ProjectForm};

use super::{DeleteConfirmButton, LockedPlaceholder};
use crate::context::use_app_context;
use crate::store::{ActiveModal, UiStateStoreFields};

#[component]
fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    let edit = move |_| {
        let form = ctx.client().state().projects().find(id).map(ProjectForm::from_project);
        match form {
            Some(form) => ctx.open(ActiveModal::Project(form)),
            None => log::warn!("[PROJECTS] Project {} is no longer cached", id),
        }
    };

    let schedule = match &card.end_label {
        Some(end) => format!("{} → {}", card.start_label, end),
        None => card.start_label.clone(),
    };

    view! {
        <div class="project-card">
            <div class="project-header">
                <h3 class="project-title">{card.name.clone()}</h3>
                <div class="project-actions">
                    <button class="btn-icon" title="Edit" on:click=edit>"✎"</button>
                    <DeleteConfirmButton kind=EntityKind::Project id=id />
                </div>
            </div>
            <div class="project-meta">
                <span class="project-dates">{schedule}</span>
                <span class="project-budget">{card.budget_label.clone()}</span>
            </div>
            <div class="project-progress">
                <div class="card-progress">
                    <div class="progress-bar" style=format!("width: {}%", card.progress)></div>
                </div>
                <div class="card-info">{format!("{}% complete", card.progress)}</div>
            </div>
            <div class="project-team">
                <div class="avatar">{card.manager_initials.clone()}</div>
                <span class="manager-name">{card.manager_name.clone()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="board-section" id="projects">
            <header class="section-header">
                <h2>"Projects"</h2>
                <Show when=move || store.session().read().is_some()>
                    <button
                        class="btn-primary"
                        on:click=move |_| ctx.open(ActiveModal::Project(ProjectForm::default()))
                    >
                        "+ New Project"
                    </button>
                </Show>
            </header>
            {move || match store.projects().get() {
                CollectionView::Locked => view! { <LockedPlaceholder what="projects" /> }.into_any(),
                CollectionView::Empty => {
                    view! { <p class="empty-state">"No projects yet. Create the first one."</p> }.into_any()
                }
                CollectionView::Items(cards) => view! {
                    <div class="project-grid">
                        {cards.into_iter().map(|card| view! { <ProjectCardView card=card /> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
