use super::*;

fn bounds(top: f64, bottom: f64) -> SectionBounds {
    SectionBounds { top, bottom }
}

// =============================================================
// detect_active_section
// =============================================================

#[test]
fn picks_section_straddling_probe() {
    let sections = [
        ("home", bounds(-700.0, -50.0)),
        ("contact", bounds(-50.0, 400.0)),
        ("projects", bounds(400.0, 1200.0)),
    ];
    assert_eq!(detect_active_section(&sections, ACTIVE_PROBE_PX), Some("contact"));
}

#[test]
fn first_match_wins_when_sections_overlap() {
    let sections = [("home", bounds(0.0, 150.0)), ("contact", bounds(90.0, 500.0))];
    assert_eq!(detect_active_section(&sections, ACTIVE_PROBE_PX), Some("home"));
}

#[test]
fn boundaries_are_inclusive() {
    assert_eq!(detect_active_section(&[("a", bounds(100.0, 300.0))], 100.0), Some("a"));
    assert_eq!(detect_active_section(&[("a", bounds(0.0, 100.0))], 100.0), Some("a"));
}

#[test]
fn gap_between_sections_yields_none() {
    let sections = [("home", bounds(-500.0, 50.0)), ("contact", bounds(150.0, 600.0))];
    assert_eq!(detect_active_section(&sections, ACTIVE_PROBE_PX), None);
    assert_eq!(detect_active_section(&[], ACTIVE_PROBE_PX), None);
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn scrolled_only_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(20.0));
    assert!(is_scrolled(20.5));
}

#[test]
fn scroll_target_clears_navbar_and_never_goes_negative() {
    assert_eq!(scroll_target(500.0), 420.0);
    assert_eq!(scroll_target(30.0), 0.0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn observe_is_none_outside_browser() {
    assert_eq!(observe(&["home"]), None);
    scroll_to_section("home");
}
