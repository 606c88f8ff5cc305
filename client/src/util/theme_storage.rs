//! Theme persistence and document application.
//!
//! Reads the user's preference from `localStorage["theme"]` and toggles the
//! `dark` class (plus a `data-theme` attribute) on the `<html>` element.
//! Toggle writes back to `localStorage`, which also notifies other tabs via
//! the `storage` event.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op and report `Light` so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::util::ui_persistence::local_storage;

pub const STORAGE_KEY: &str = "theme";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(feature = "hydrate")]
type SchemeListener = (web_sys::MediaQueryList, wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>);

#[cfg(feature = "hydrate")]
thread_local! {
    static SCHEME_LISTENER: std::cell::RefCell<Option<SchemeListener>> = const { std::cell::RefCell::new(None) };
}

/// Read the theme preference.
///
/// A valid stored value wins. Otherwise the system color-scheme preference
/// decides, and outside a browser the result is `Light`.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        if let Some(storage) = local_storage() {
            if let Some(theme) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(Theme::parse) {
                return theme;
            }
        }

        let prefers_dark = window
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        system_theme(prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Reflect `theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist `theme` without touching the document.
pub fn store(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    store(next);
    next
}

/// Decide whether a `storage` event carries a theme change.
///
/// Only the theme key with a valid value counts. A cleared key (`None`) is
/// ignored so another tab wiping storage does not flip this one.
#[must_use]
pub fn stored_theme_changed(key: Option<&str>, new_value: Option<&str>) -> Option<Theme> {
    if key != Some(STORAGE_KEY) {
        return None;
    }
    new_value.and_then(Theme::parse)
}

/// Theme matching the system color-scheme preference.
#[must_use]
pub fn system_theme(prefers_dark: bool) -> Theme {
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Whether an OS color-scheme change should restyle the page.
///
/// An explicit stored choice always wins; only visitors without a valid
/// stored theme follow the system.
#[must_use]
pub fn system_change_applies(stored: Option<&str>) -> bool {
    stored.and_then(Theme::parse).is_none()
}

/// Follow live `prefers-color-scheme` changes until [`unwatch_system_scheme`].
///
/// `on_change` receives the new theme only when no valid theme is stored.
/// Replaces any previously installed watcher.
pub fn watch_system_scheme(on_change: impl Fn(Theme) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            let stored = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
            if system_change_applies(stored.as_deref()) {
                on_change(system_theme(ev.matches()));
            }
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if mq.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()).is_err() {
            return;
        }
        unwatch_system_scheme();
        SCHEME_LISTENER.with(|slot| *slot.borrow_mut() = Some((mq, cb)));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}

/// Remove the watcher installed by [`watch_system_scheme`], if any.
pub fn unwatch_system_scheme() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some((mq, cb)) = SCHEME_LISTENER.with(|slot| slot.borrow_mut().take()) {
            let _ = mq.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        }
    }
}
