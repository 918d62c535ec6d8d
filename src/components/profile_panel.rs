//! Profile Panel Component
//!
//! Counters, the user's own tasks and projects, and the profile and
//! password forms.

use leptos::prelude::*;
use proje_core::view::{format_date, initials, priority_class, status_class};
use proje_core::{PasswordForm, ProfileForm, ProfileView};

use super::form_field::{bind, TextField};
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
fn ProfileSummaryView(profile: ProfileView) -> impl IntoView {
    let summary = profile.summary;
    let full_name = format!("{} {}", summary.first_name, summary.last_name);

    view! {
        <div class="profile-summary">
            <div class="avatar large">{initials(&full_name)}</div>
            <div class="profile-identity">
                <h3>{full_name.clone()}</h3>
                <span class="profile-email">{summary.email.clone()}</span>
            </div>
            <div class="profile-counters">
                <span>{format!("{} projects", summary.project_count)}</span>
                <span>{format!("{} tasks", summary.task_count)}</span>
            </div>
        </div>

        <h3>"My tasks"</h3>
        {if profile.tasks.is_empty() {
            view! { <p class="empty-state">"No tasks assigned to you."</p> }.into_any()
        } else {
            view! {
                <ul class="profile-list">
                    {profile.tasks.into_iter().map(|task| view! {
                        <li class="profile-task">
                            <span class="profile-task-name">{task.name.clone()}</span>
                            <span class="profile-task-project">{task.project_name.clone()}</span>
                            <span class=format!("badge badge-priority {}", priority_class(&task.priority_name))>
                                {task.priority_name.clone()}
                            </span>
                            <span class=format!("badge badge-status {}", status_class(&task.status_name))>
                                {task.status_name.clone()}
                            </span>
                            <span class="profile-task-due">{format_date(task.due_date.as_deref())}</span>
                        </li>
                    }).collect_view()}
                </ul>
            }.into_any()
        }}

        <h3>"My projects"</h3>
        {if profile.projects.is_empty() {
            view! { <p class="empty-state">"You are not part of any project."</p> }.into_any()
        } else {
            view! {
                <ul class="profile-list">
                    {profile.projects.into_iter().map(|project| view! {
                        <li class="profile-project">
                            <span class="profile-project-name">{project.name.clone()}</span>
                            <span class="profile-project-role">{project.role.clone().unwrap_or_default()}</span>
                            <span class="profile-project-dates">
                                {format!(
                                    "{} → {}",
                                    format_date(project.start_date.as_deref()),
                                    format_date(project.end_date.as_deref()),
                                )}
                            </span>
                        </li>
                    }).collect_view()}
                </ul>
            }.into_any()
        }}
    }
}

#[component]
fn ProfileEditor(profile: RwSignal<Option<ProfileView>>) -> impl IntoView {
    let ctx = use_app_context();
    let initial = ctx
        .store
        .session()
        .get_untracked()
        .map(|s| ProfileForm::from_session(&s))
        .unwrap_or_default();
    let form = RwSignal::new(initial);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let data = form.get_untracked();
        ctx.spawn(move |client| async move {
            if let Ok(session) = client.update_profile(&data).await {
                profile.try_update(|p| {
                    if let Some(p) = p {
                        p.apply_session(&session);
                    }
                });
            }
            busy.try_set(false);
        });
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <h3>"Edit profile"</h3>
            <div class="form-row">
                <TextField label="First name" field=bind(form, |f| &f.first_name, |f| &mut f.first_name) required=true />
                <TextField label="Last name" field=bind(form, |f| &f.last_name, |f| &mut f.last_name) required=true />
            </div>
            <TextField label="Email" input_type="email" field=bind(form, |f| &f.email, |f| &mut f.email) required=true />
            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                "Save profile"
            </button>
        </form>
    }
}

#[component]
fn PasswordEditor() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(PasswordForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let data = form.get_untracked();
        ctx.spawn(move |client| async move {
            if client.change_password(&data).await.is_ok() {
                form.try_set(PasswordForm::default());
            }
            busy.try_set(false);
        });
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <h3>"Change password"</h3>
            <TextField
                label="Current password"
                input_type="password"
                field=bind(form, |f| &f.old_password, |f| &mut f.old_password)
                required=true
            />
            <TextField
                label="New password"
                input_type="password"
                field=bind(form, |f| &f.new_password, |f| &mut f.new_password)
                required=true
            />
            <TextField
                label="Confirm new password"
                input_type="password"
                field=bind(form, |f| &f.confirm_password, |f| &mut f.confirm_password)
                required=true
            />
            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                "Change password"
            </button>
        </form>
    }
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let ctx = use_app_context();
    let profile = RwSignal::new(None::<ProfileView>);

    ctx.spawn(move |client| async move {
        if let Ok(view) = client.load_profile().await {
            profile.try_set(Some(view));
        }
    });

    view! {
        <div class="profile-panel">
            <h2>"My profile"</h2>
            {move || match profile.get() {
                Some(view) => view! { <ProfileSummaryView profile=view /> }.into_any(),
                None => view! { <p class="loading">"Loading profile..."</p> }.into_any(),
            }}
            <ProfileEditor profile=profile />
            <PasswordEditor />
        </div>
    }
}
