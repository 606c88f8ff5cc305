//! Full-width notification banner pinned to the top or bottom of the viewport.

#[cfg(test)]
#[path = "notification_banner_test.rs"]
mod notification_banner_test;

use leptos::prelude::*;

use crate::state::notification::NotificationVariant;

/// Viewport edge the banner is pinned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerPosition {
    #[default]
    Top,
    Bottom,
}

impl BannerPosition {
    fn modifier(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

#[component]
pub fn NotificationBanner(
    #[prop(optional)] variant: NotificationVariant,
    #[prop(optional)] position: BannerPosition,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=banner_class(variant, position) role="alert">
            <div class="banner__inner">
                <div class="banner__content">
                    <span class="banner__icon" aria-hidden="true">{variant.icon()}</span>
                    <div class="banner__message">{children()}</div>
                </div>
                {on_close.map(|cb| {
                    view! {
                        <button class="banner__close" aria-label="Close" on:click=move |_| cb.run(())>
                            "✕"
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

fn banner_class(variant: NotificationVariant, position: BannerPosition) -> String {
    format!("banner banner--{} banner--{}", variant.modifier(), position.modifier())
}
