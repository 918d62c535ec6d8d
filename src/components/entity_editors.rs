//! Entity Editor Dialogs
//!
//! Create/edit forms for projects, tasks and team members. A form with an
//! id edits, one without creates.

use leptos::prelude::*;
use proje_core::{MemberForm, ProjectForm, TaskForm, PRIORITY_OPTIONS, STATUS_OPTIONS};

use super::form_field::{bind, lookup_options, submit_and_close, SelectField, TextAreaField, TextField};
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

fn dialog_title(editing: bool, noun: &str) -> String {
    if editing {
        format!("Edit {}", noun)
    } else {
        format!("New {}", noun)
    }
}

#[component]
pub fn ProjectEditor(initial: ProjectForm) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let editing = initial.id.is_some();
    let form = RwSignal::new(initial);
    let busy = RwSignal::new(false);

    let managers = Signal::derive(move || {
        store
            .team()
            .read()
            .items()
            .iter()
            .map(|m| (m.id.to_string(), m.full_name.clone()))
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        submit_and_close(ctx, busy, move |client| async move { client.save_project(&data).await.is_ok() });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <h2>{dialog_title(editing, "Project")}</h2>
            <TextField label="Project name" field=bind(form, |f| &f.name, |f| &mut f.name) required=true />
            <div class="form-row">
                <TextField
                    label="Start date"
                    input_type="date"
                    field=bind(form, |f| &f.start_date, |f| &mut f.start_date)
                    required=true
                />
                <TextField label="End date" input_type="date" field=bind(form, |f| &f.end_date, |f| &mut f.end_date) />
            </div>
            <TextField label="Budget (₺)" input_type="number" field=bind(form, |f| &f.budget, |f| &mut f.budget) />
            <SelectField
                label="Manager"
                placeholder="No manager"
                options=managers
                field=bind(form, |f| &f.manager_id, |f| &mut f.manager_id)
            />
            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                {if editing { "Save" } else { "Create" }}
            </button>
        </form>
    }
}

#[component]
pub fn TaskEditor(initial: TaskForm) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let editing = initial.id.is_some();
    let form = RwSignal::new(initial);
    let busy = RwSignal::new(false);

    let projects = Signal::derive(move || {
        store
            .projects()
            .read()
            .items()
            .iter()
            .map(|p| (p.id.to_string(), p.name.clone()))
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        submit_and_close(ctx, busy, move |client| async move { client.save_task(&data).await.is_ok() });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <h2>{dialog_title(editing, "Task")}</h2>
            <TextField label="Task name" field=bind(form, |f| &f.name, |f| &mut f.name) required=true />
            <TextAreaField label="Description" field=bind(form, |f| &f.description, |f| &mut f.description) />
            <TextField
                label="Due date"
                input_type="date"
                field=bind(form, |f| &f.due_date, |f| &mut f.due_date)
                required=true
            />
            <SelectField
                label="Project"
                placeholder="Select a project"
                options=projects
                field=bind(form, |f| &f.project_id, |f| &mut f.project_id)
            />
            <div class="form-row">
                <SelectField
                    label="Status"
                    placeholder="-"
                    options=Signal::stored(lookup_options(STATUS_OPTIONS))
                    field=bind(form, |f| &f.status_id, |f| &mut f.status_id)
                />
                <SelectField
                    label="Priority"
                    placeholder="-"
                    options=Signal::stored(lookup_options(PRIORITY_OPTIONS))
                    field=bind(form, |f| &f.priority_id, |f| &mut f.priority_id)
                />
            </div>
            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                {if editing { "Save" } else { "Create" }}
            </button>
        </form>
    }
}

#[component]
pub fn MemberEditor(initial: MemberForm) -> impl IntoView {
    let ctx = use_app_context();
    let editing = initial.id.is_some();
    let form = RwSignal::new(initial);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        submit_and_close(ctx, busy, move |client| async move { client.save_member(&data).await.is_ok() });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <h2>{dialog_title(editing, "Team Member")}</h2>
            <div class="form-row">
                <TextField label="First name" field=bind(form, |f| &f.first_name, |f| &mut f.first_name) required=true />
                <TextField label="Last name" field=bind(form, |f| &f.last_name, |f| &mut f.last_name) required=true />
            </div>
            <TextField
                label="Email"
                input_type="email"
                field=bind(form, |f| &f.email, |f| &mut f.email)
                required=true
            />
            <Show when=move || !editing>
                <TextField
                    label="Password"
                    input_type="password"
                    field=bind(form, |f| &f.password, |f| &mut f.password)
                    required=true
                />
            </Show>
            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                {if editing { "Save" } else { "Add" }}
            </button>
        </form>
    }
}
