//! Reusable labeled form controls with inline validation errors.
//!
//! Each control takes a [`FieldBinding`], which wires the input to one
//! field of a form record signal and to that field's slot in the error
//! map. Editing a field writes the value and clears only that field's
//! error, leaving the rest of the map untouched.

use std::collections::BTreeMap;

use leptos::prelude::*;

/// Signals connecting one input to its form record and error entry.
#[derive(Clone)]
pub struct FieldBinding {
    pub value: Signal<String>,
    pub error: Signal<Option<String>>,
    pub on_input: Callback<String>,
}

/// Build a [`FieldBinding`] for `field` of the record held in `form`.
pub fn bind_field<R, F>(
    form: RwSignal<R>,
    errors: RwSignal<BTreeMap<F, String>>,
    field: F,
    get: fn(&R) -> String,
    set: fn(&mut R, String),
) -> FieldBinding
where
    R: Clone + Send + Sync + 'static,
    F: Copy + Ord + Send + Sync + 'static,
{
    FieldBinding {
        value: Signal::derive(move || get(&form.get())),
        error: Signal::derive(move || errors.get().get(&field).cloned()),
        on_input: Callback::new(move |value: String| {
            form.update(|record| set(record, value));
            errors.update(|map| {
                map.remove(&field);
            });
        }),
    }
}

/// A labeled single-line input with an inline error message.
#[component]
pub fn TextField(
    label: &'static str,
    placeholder: &'static str,
    bind: FieldBinding,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into, optional)] help: Option<Signal<String>>,
) -> impl IntoView {
    let FieldBinding { value, error, on_input } = bind;
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                class:error-input=move || error.get().is_some()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="error-text">{msg}</span> })}
            {help.map(|help| view! { <small class="help-text">{move || help.get()}</small> })}
        </div>
    }
}

/// A labeled multi-line input with an inline error message and optional
/// help line.
#[component]
pub fn TextAreaField(
    label: &'static str,
    placeholder: &'static str,
    bind: FieldBinding,
    #[prop(default = 3)] rows: u32,
    #[prop(into, optional)] help: Option<Signal<String>>,
) -> impl IntoView {
    let FieldBinding { value, error, on_input } = bind;
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                class:error-input=move || error.get().is_some()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <span class="error-text">{msg}</span> })}
            {help.map(|help| view! { <small class="help-text">{move || help.get()}</small> })}
        </div>
    }
}

/// A labeled select with a leading placeholder option and an inline error
/// message.
#[component]
pub fn SelectField(
    label: &'static str,
    prompt: &'static str,
    options: &'static [&'static str],
    bind: FieldBinding,
) -> impl IntoView {
    let FieldBinding { value, error, on_input } = bind;
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:value=move || value.get()
                class:error-input=move || error.get().is_some()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                <option value="">{prompt}</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect::<Vec<_>>()}
            </select>
            {move || error.get().map(|msg| view! { <span class="error-text">{msg}</span> })}
        </div>
    }
}
