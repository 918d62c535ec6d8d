//! Team List Component

use leptos::prelude::*;
use proje_core::{CollectionView, EntityKind, MemberCard, MemberForm};

use super::{DeleteConfirmButton, LockedPlaceholder};
use crate::context::use_app_context;
use crate::store::{ActiveModal, UiStateStoreFields};

#[component]
fn MemberCardView(card: MemberCard) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    let edit = move |_| {
        let form = ctx.client().state().members().find(id).map(MemberForm::from_member);
        match form {
            Some(form) => ctx.open(ActiveModal::Member(form)),
            None => log::warn!("[TEAM] Member {} is no longer cached", id),
        }
    };

    view! {
        <div class="team-card">
            <div class="avatar large">{card.initials.clone()}</div>
            <div class="team-info">
                <h3 class="team-name">{card.full_name.clone()}</h3>
                <span class="team-role">{card.role.clone()}</span>
                <a class="team-email" href=format!("mailto:{}", card.email)>{card.email.clone()}</a>
            </div>
            <div class="team-actions">
                <button class="btn-icon" title="Edit" on:click=edit>"✎"</button>
                <DeleteConfirmButton kind=EntityKind::Member id=id />
            </div>
        </div>
    }
}

#[component]
pub fn TeamList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="board-section" id="team">
            <header class="section-header">
                <h2>"Team"</h2>
                <Show when=move || store.session().read().is_some()>
                    <button
                        class="btn-primary"
                        on:click=move |_| ctx.open(ActiveModal::Member(MemberForm::default()))
                    >
                        "+ Add Member"
                    </button>
                </Show>
            </header>
            {move || match store.team().get() {
                CollectionView::Locked => view! { <LockedPlaceholder what="team" /> }.into_any(),
                CollectionView::Empty => view! { <p class="empty-state">"No team members yet."</p> }.into_any(),
                CollectionView::Items(cards) => view! {
                    <div class="team-grid">
                        {cards.into_iter().map(|card| view! { <MemberCardView card=card /> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
