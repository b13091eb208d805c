//! Terms and Privacy pages

use leptos::prelude::*;
use leptos_router::components::A;

use crate::markdown::parse_markdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDocument {
    Terms,
    Privacy,
}

impl LegalDocument {
    pub fn source(self) -> &'static str {
        match self {
            LegalDocument::Terms => include_str!("../../content/terms.md"),
            LegalDocument::Privacy => include_str!("../../content/privacy.md"),
        }
    }

    pub fn render(self) -> String {
        parse_markdown(self.source())
    }
}

#[component]
pub fn LegalPage(document: LegalDocument) -> impl IntoView {
    view! {
        <div class="legal-page">
            <article class="markdown-body" inner_html=document.render()></article>
            <A href="/signup">"Back to Sign Up"</A>
        </div>
    }
}
