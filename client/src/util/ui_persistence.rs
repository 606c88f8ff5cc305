//! Gallery preferences kept in `localStorage`.
//!
//! The project gallery remembers its grid/list layout between visits. Values
//! are stored as JSON so the enum stays readable in devtools, and anything
//! that fails to decode is treated as "no preference".

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use crate::state::projects::ViewMode;

pub const VIEW_MODE_KEY: &str = "folio_view_mode";

/// The window's `localStorage`, when the browser exposes one.
#[cfg(feature = "hydrate")]
pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Decode a stored view-mode value.
#[must_use]
pub fn decode_view_mode(raw: &str) -> Option<ViewMode> {
    serde_json::from_str(raw).ok()
}

/// Encode a view mode for storage.
#[must_use]
pub fn encode_view_mode(mode: ViewMode) -> String {
    serde_json::to_string(&mode).unwrap_or_default()
}

/// Remembered gallery layout, if any.
pub fn load_view_mode() -> Option<ViewMode> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(VIEW_MODE_KEY).ok().flatten()?;
        decode_view_mode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remember the gallery layout for the next visit.
pub fn save_view_mode(mode: ViewMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(VIEW_MODE_KEY, &encode_view_mode(mode));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
