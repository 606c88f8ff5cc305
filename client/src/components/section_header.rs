//! Centered section heading with an underline accent.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <header class="section-header">
            <h2 class="section-header__title">{title}</h2>
            <p class="section-header__subtitle">{subtitle}</p>
        </header>
    }
}
