//! Inline alert box.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

use crate::state::notification::NotificationVariant;

/// Static alert with an icon, optional title and body.
///
/// The close button only renders when `on_close` is supplied; the caller owns
/// visibility.
#[component]
pub fn Alert(
    #[prop(optional)] variant: NotificationVariant,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=alert_class(variant) role="alert">
            <span class="alert__icon" aria-hidden="true">{variant.icon()}</span>
            <div class="alert__content">
                {title.map(|t| view! { <h3 class="alert__title">{t}</h3> })}
                <div class="alert__body">{children()}</div>
            </div>
            {on_close.map(|cb| {
                view! {
                    <button class="alert__close" aria-label="Close" on:click=move |_| cb.run(())>
                        "✕"
                    </button>
                }
            })}
        </div>
    }
}

fn alert_class(variant: NotificationVariant) -> String {
    format!("alert alert--{}", variant.modifier())
}
