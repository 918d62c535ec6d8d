//! Form Fields
//!
//! Labelled inputs bound to one `String` field of a form signal, and the
//! shared submit path every dialog uses.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::context::{AppContext, WebClient};

/// Two-way binding of one text field
#[derive(Clone, Copy)]
pub struct Binding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
}

pub fn bind<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    read: fn(&T) -> &String,
    write: fn(&mut T) -> &mut String,
) -> Binding {
    Binding {
        value: Signal::derive(move || form.with(|f| read(f).clone())),
        on_input: Callback::new(move |value: String| form.update(|f| *write(f) = value)),
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    field: Binding,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let Binding { value, on_input } = field;
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(#[prop(into)] label: String, field: Binding) -> impl IntoView {
    let Binding { value, on_input } = field;
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `<select>` over `(value, label)` pairs with an empty first option
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    field: Binding,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let Binding { value, on_input } = field;
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select on:change=move |ev| on_input.run(event_target_value(&ev))>
                <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                {move || options.get().into_iter().map(|(option, text)| {
                    let current = option.clone();
                    view! {
                        <option value=option selected=move || value.get() == current>{text}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

/// Run a dialog submit in the background. The dialog closes only when
/// `op` reports success; failures were already shown as toasts.
pub fn submit_and_close<F, Fut>(ctx: AppContext, busy: RwSignal<bool>, op: F)
where
    F: FnOnce(Rc<WebClient>) -> Fut + 'static,
    Fut: Future<Output = bool> + 'static,
{
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    ctx.spawn(move |client| async move {
        let done = op(client).await;
        busy.try_set(false);
        if done {
            ctx.close();
        }
    });
}

/// Options for `SelectField` from a static lookup table
pub fn lookup_options(table: &[(u32, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}
