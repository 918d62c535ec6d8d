//! Task List Component
//!
//! Status filter bar and task cards with priority and status badges.

use leptos::prelude::*;
use proje_core::{
    CollectionView, EntityKind, TaskCard, TaskFilter, TaskForm, DEFAULT_PRIORITY_ID, DEFAULT_STATUS_ID,
    STATUS_OPTIONS,
};

use super::{DeleteConfirmButton, LockedPlaceholder};
use crate::context::use_app_context;
use crate::store::{ActiveModal, UiStateStoreFields};

fn new_task_form() -> TaskForm {
    TaskForm {
        status_id: DEFAULT_STATUS_ID.to_string(),
        priority_id: DEFAULT_PRIORITY_ID.to_string(),
        ..Default::default()
    }
}

#[component]
fn TaskFilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let apply = move |filter: TaskFilter| {
        *store.task_filter().write() = filter;
        ctx.client().set_task_filter(filter);
    };

    let filters = std::iter::once((TaskFilter::All, "All"))
        .chain(STATUS_OPTIONS.iter().map(|(id, name)| (TaskFilter::Status(*id), *name)));

    view! {
        <div class="task-filters">
            {filters.map(|(filter, label)| {
                let is_active = move || store.task_filter().get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| apply(filter)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn TaskCardView(card: TaskCard) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    let edit = move |_| {
        let form = ctx.client().state().tasks().find(id).map(TaskForm::from_task);
        match form {
            Some(form) => ctx.open(ActiveModal::Task(form)),
            None => log::warn!("[TASKS] Task {} is no longer cached", id),
        }
    };

    view! {
        <div class="task-card">
            <div class="task-header">
                <h3 class="task-title">{card.name.clone()}</h3>
                <div class="task-badges">
                    <span class=format!("badge badge-priority {}", card.priority_class)>
                        {card.priority_label.clone()}
                    </span>
                    <span class=format!("badge badge-status {}", card.status_class)>
                        {card.status_label.clone()}
                    </span>
                </div>
            </div>
            <p class="task-description">{card.description.clone()}</p>
            <div class="task-footer">
                <span class="task-project">{card.project_name.clone()}</span>
                <span class="task-due">{card.due_label.clone()}</span>
                <div class="task-actions">
                    <button class="btn-icon" title="Edit" on:click=edit>"✎"</button>
                    <DeleteConfirmButton kind=EntityKind::Task id=id />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="board-section" id="tasks">
            <header class="section-header">
                <h2>"Tasks"</h2>
                <Show when=move || store.session().read().is_some()>
                    <button class="btn-primary" on:click=move |_| ctx.open(ActiveModal::Task(new_task_form()))>
                        "+ New Task"
                    </button>
                </Show>
            </header>
            <Show when=move || !store.tasks().read().is_locked()>
                <TaskFilterBar />
            </Show>
            {move || match store.tasks().get() {
                CollectionView::Locked => view! { <LockedPlaceholder what="tasks" /> }.into_any(),
                CollectionView::Empty => {
                    view! { <p class="empty-state">"No tasks match this filter."</p> }.into_any()
                }
                CollectionView::Items(cards) => view! {
                    <div class="task-list">
                        {cards.into_iter().map(|card| view! { <TaskCardView card=card /> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
