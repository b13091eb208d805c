//! Inline message under a form field.

use leptos::prelude::*;

use crate::validation::FieldErrors;

#[component]
pub fn FieldError(errors: ReadSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        })
    }
}
