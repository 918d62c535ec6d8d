//! Modal Host Component
//!
//! Renders whichever dialog the store says is open.

use leptos::prelude::*;

use super::{LoginDialog, MemberEditor, ProfilePanel, ProjectEditor, RegisterDialog, TaskEditor};
use crate::context::use_app_context;
use crate::store::{ActiveModal, UiStateStoreFields};

#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    move || {
        store.modal().get().map(|modal| {
            let body = match modal {
                ActiveModal::Login => view! { <LoginDialog /> }.into_any(),
                ActiveModal::Register => view! { <RegisterDialog /> }.into_any(),
                ActiveModal::Profile => view! { <ProfilePanel /> }.into_any(),
                ActiveModal::Project(form) => view! { <ProjectEditor initial=form /> }.into_any(),
                ActiveModal::Task(form) => view! { <TaskEditor initial=form /> }.into_any(),
                ActiveModal::Member(form) => view! { <MemberEditor initial=form /> }.into_any(),
            };
            view! {
                <div class="modal-backdrop" on:click=move |_| ctx.close()>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" title="Close" on:click=move |_| ctx.close()>
                            "×"
                        </button>
                        {body}
                    </div>
                </div>
            }
        })
    }
}
