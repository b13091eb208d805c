//! Error Banner Component
//!
//! Shows an error record: its message plus any field-level details.

use leptos::prelude::*;

use crate::models::ErrorRecord;

#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<ErrorRecord>>) -> impl IntoView {
    move || {
        error.get().map(|record| {
            let details = record.details().to_vec();
            view! {
                <div class="error-banner" role="alert">
                    <p class="error-message">{record.message}</p>
                    {details
                        .into_iter()
                        .map(|detail| view! {
                            <p class="error-detail">
                                <strong>{detail.field}":"</strong>" "{detail.message}
                            </p>
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}
