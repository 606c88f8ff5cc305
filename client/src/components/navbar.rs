//! Fixed top navigation bar with scroll-spy highlighting and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listens to window scroll (hydrate only) to track the compact style and the
//! active section in `UiState`. Clicking a link smooth-scrolls to its section
//! and closes the mobile menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::content::nav::{HOME_SECTION, NAV_ITEMS};
use crate::state::ui::UiState;
use crate::util::{scroll, theme_storage};

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let section_ids = NAV_ITEMS.map(|item| item.id);
        let on_scroll = move || {
            if let Some(obs) = scroll::observe(&section_ids) {
                ui.maybe_update(|u| u.record_scroll(obs.scrolled, obs.active_section.as_deref()));
            }
        };
        // Initial observation runs after hydration.
        Effect::new(on_scroll);
        let handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
        on_cleanup(move || handle.remove());
    }

    let go_to = move |id: &'static str| {
        scroll::scroll_to_section(id);
        ui.update(UiState::close_mobile_menu);
    };

    let on_toggle_theme = move |_| {
        let next = theme_storage::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let links = move |variant: &'static str| {
        NAV_ITEMS
            .iter()
            .map(move |item| {
                let id = item.id;
                view! {
                    <button
                        class=move || nav_link_class(variant, ui.with(|u| u.is_active(id)))
                        on:click=move |_| go_to(id)
                    >
                        <span class="navbar__link-icon" aria-hidden="true">{item.icon}</span>
                        <span class="navbar__link-label">{item.label}</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class=move || navbar_class(ui.with(|u| u.scrolled))>
            <div class="navbar__inner">
                <button class="navbar__logo" on:click=move |_| go_to(HOME_SECTION)>
                    <span class="navbar__logo-glyph" aria-hidden="true">"✦"</span>
                    <span class="navbar__logo-text">"Portfolio"</span>
                </button>

                <div class="navbar__actions">
                    <div class="navbar__links">{links("desktop")}</div>

                    <button
                        class=move || theme_toggle_class(ui.with(|u| u.theme.is_dark()))
                        on:click=on_toggle_theme
                        title="Toggle theme"
                    >
                        <span class="sr-only">"Toggle theme"</span>
                        <span class="theme-toggle__knob">{move || ui.with(|u| u.theme.glyph())}</span>
                    </button>

                    <button
                        class="navbar__menu-button"
                        aria-label="Toggle menu"
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    >
                        {move || if ui.with(|u| u.mobile_menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <div class=move || mobile_menu_class(ui.with(|u| u.mobile_menu_open))>{links("mobile")}</div>
        </nav>
    }
}

fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled { "navbar navbar--scrolled" } else { "navbar" }
}

fn nav_link_class(variant: &str, active: bool) -> String {
    if active {
        format!("navbar__link navbar__link--{variant} navbar__link--active")
    } else {
        format!("navbar__link navbar__link--{variant}")
    }
}

fn theme_toggle_class(dark: bool) -> &'static str {
    if dark { "theme-toggle theme-toggle--dark" } else { "theme-toggle" }
}

fn mobile_menu_class(open: bool) -> &'static str {
    if open { "navbar__mobile navbar__mobile--open" } else { "navbar__mobile" }
}
