//! Clipboard writes and their toast outcome.
//!
//! ERROR HANDLING
//! ==============
//! Copy failures are the one user-visible error on the site. They come back
//! as `ClipboardError` and map to an `Error` toast instead of being dropped.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::state::notification::NotificationVariant;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns `Unavailable` outside a browser (or when the page has no window)
/// and `Rejected` when the browser refuses the write, e.g. without a secure
/// context or user permission.
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}

/// Toast variant for a copy attempt.
#[must_use]
pub fn copy_outcome_variant(outcome: &Result<(), ClipboardError>) -> NotificationVariant {
    match outcome {
        Ok(()) => NotificationVariant::Success,
        Err(_) => NotificationVariant::Error,
    }
}

#[must_use]
pub fn copy_toast_title(variant: NotificationVariant) -> String {
    format!("Copied {}", variant.label())
}

#[must_use]
pub fn copy_toast_message(outcome: &Result<(), ClipboardError>, value: &str) -> String {
    match outcome {
        Ok(()) => format!("Copied {value}"),
        Err(err) => format!("Could not copy {value}: {err}"),
    }
}
