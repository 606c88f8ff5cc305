//! Local UI chrome state (theme, navbar, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page content so the navbar,
//! contact cards and theme toggle can all observe one shared signal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::theme::Theme;
use crate::content::nav::HOME_SECTION;

/// UI state shared across the page through context.
#[derive(Clone, Debug)]
pub struct UiState {
    pub theme: Theme,
    /// Page scrolled past the navbar threshold.
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    /// Section id highlighted in the navbar.
    pub active_section: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            scrolled: false,
            mobile_menu_open: false,
            active_section: HOME_SECTION.to_owned(),
        }
    }
}

impl UiState {
    /// Apply one scroll observation. A `None` section keeps the previous one.
    ///
    /// Returns whether anything changed, so scroll handlers can skip
    /// notifying subscribers on every event.
    pub fn record_scroll(&mut self, scrolled: bool, section: Option<&str>) -> bool {
        let mut changed = self.scrolled != scrolled;
        self.scrolled = scrolled;
        if let Some(id) = section {
            if self.active_section != id {
                self.active_section = id.to_owned();
                changed = true;
            }
        }
        changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Navigation always closes the mobile menu.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    #[must_use]
    pub fn is_active(&self, section: &str) -> bool {
        self.active_section == section
    }
}
