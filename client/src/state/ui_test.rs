use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_at_top_of_home() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.scrolled);
    assert!(!state.mobile_menu_open);
    assert_eq!(state.active_section, "home");
    assert!(state.is_active("home"));
}

// =============================================================
// Scroll tracking
// =============================================================

#[test]
fn record_scroll_updates_active_section() {
    let mut state = UiState::default();
    assert!(state.record_scroll(true, Some("projects")));
    assert!(state.scrolled);
    assert!(state.is_active("projects"));
    assert!(!state.is_active("home"));
}

#[test]
fn record_scroll_without_section_keeps_previous() {
    let mut state = UiState::default();
    state.record_scroll(true, Some("contact"));
    assert!(state.record_scroll(false, None));
    assert!(!state.scrolled);
    assert_eq!(state.active_section, "contact");
}

#[test]
fn record_scroll_reports_no_change_for_same_observation() {
    let mut state = UiState::default();
    assert!(!state.record_scroll(false, Some("home")));
    assert!(state.record_scroll(true, Some("home")));
    assert!(!state.record_scroll(true, Some("home")));
    assert!(!state.record_scroll(true, None));
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_mobile_menu_flips() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_mobile_menu_is_idempotent() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    state.close_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}
