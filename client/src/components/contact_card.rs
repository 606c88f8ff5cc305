//! Click-to-copy contact card.
//!
//! Copies the card's value to the clipboard and reports the outcome through
//! the shared toast slot: success as a `Success` toast, any failure as an
//! `Error` toast.

use leptos::prelude::*;

use crate::content::profile::ContactMethod;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::clipboard::{copy_outcome_variant, copy_text, copy_toast_message, copy_toast_title};

#[component]
pub fn ContactCard(contact: ContactMethod) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_click = move |_| {
        let value = contact.value;
        leptos::task::spawn_local(async move {
            let outcome = copy_text(value).await;
            #[cfg(feature = "hydrate")]
            {
                if let Err(err) = &outcome {
                    log::warn!("copy of {value} failed: {err}");
                }
            }
            let variant = copy_outcome_variant(&outcome);
            toasts.update(|t| {
                t.show(variant, Some(copy_toast_title(variant)), copy_toast_message(&outcome, value));
            });
        });
    };

    let icon_class = move || {
        if ui.with(|u| u.theme.is_dark()) {
            "contact-card__icon contact-card__icon--dark"
        } else {
            "contact-card__icon"
        }
    };

    view! {
        <button class="contact-card" on:click=on_click title=format!("Copy {}", contact.label)>
            <span class=icon_class aria-hidden="true">{contact.kind.icon()}</span>
            <span class="contact-card__text">
                <span class="contact-card__label">{contact.label}</span>
                <span class="contact-card__value">{contact.value}</span>
            </span>
        </button>
    }
}
