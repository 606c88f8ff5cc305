//! Page-level toast slot.
//!
//! At most one toast is visible. Showing a new toast replaces the current one
//! and assigns a fresh id, which remounts the `Toast` component and restarts
//! its countdown even when the variant and text are unchanged.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use super::notification::{DEFAULT_TOAST_DURATION_MS, Notification, NotificationVariant};

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    current: Option<Notification>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast with the default duration, replacing any visible one.
    pub fn show(&mut self, variant: NotificationVariant, title: Option<String>, message: impl Into<String>) -> u64 {
        self.show_for(variant, title, message, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn show_for(
        &mut self,
        variant: NotificationVariant,
        title: Option<String>,
        message: impl Into<String>,
        duration_ms: u32,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification { id, variant, title, message: message.into(), duration_ms });
        id
    }

    /// Clear the toast with `id`. Ids of already-replaced toasts are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
