use super::*;

// =============================================================
// NotificationVariant
// =============================================================

#[test]
fn variant_default_is_info() {
    assert_eq!(NotificationVariant::default(), NotificationVariant::Info);
}

#[test]
fn variant_labels_are_capitalized_modifiers() {
    for variant in NotificationVariant::ALL {
        let label = variant.label();
        assert_eq!(label.to_ascii_lowercase(), variant.modifier());
        assert!(label.chars().next().is_some_and(char::is_uppercase));
    }
}

#[test]
fn variant_icons_are_distinct() {
    let icons = NotificationVariant::ALL.map(NotificationVariant::icon);
    for (i, a) in icons.iter().enumerate() {
        for b in &icons[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// NotificationTimer
// =============================================================

#[test]
fn timer_starts_visible_with_full_progress() {
    let timer = NotificationTimer::new(DEFAULT_TOAST_DURATION_MS);
    assert!(timer.is_visible());
    assert!(timer.auto_dismisses());
    assert_eq!(timer.remaining_fraction(), 1.0);
}

#[test]
fn timer_progress_decreases_linearly() {
    let mut timer = NotificationTimer::new(1_000);
    assert_eq!(timer.advance(250.0), TimerTick::Running);
    assert!((timer.remaining_fraction() - 0.75).abs() < 1e-9);
    assert_eq!(timer.advance(500.0), TimerTick::Running);
    assert!((timer.remaining_fraction() - 0.5).abs() < 1e-9);
}

#[test]
fn timer_expires_when_duration_elapses() {
    let mut timer = NotificationTimer::new(1_000);
    assert_eq!(timer.advance(999.0), TimerTick::Running);
    assert_eq!(timer.advance(1_000.0), TimerTick::Expired);
    assert_eq!(timer.remaining_fraction(), 0.0);
}

#[test]
fn timer_overshoot_clamps_progress_to_zero() {
    let mut timer = NotificationTimer::new(1_000);
    assert_eq!(timer.advance(5_000.0), TimerTick::Expired);
    assert_eq!(timer.remaining_fraction(), 0.0);
}

#[test]
fn timer_never_runs_backwards() {
    let mut timer = NotificationTimer::new(1_000);
    timer.advance(600.0);
    timer.advance(100.0);
    assert!((timer.remaining_fraction() - 0.4).abs() < 1e-9);
}

#[test]
fn expiry_then_dismiss_fires_once() {
    let mut timer = NotificationTimer::new(100);
    assert_eq!(timer.advance(100.0), TimerTick::Expired);
    assert!(timer.dismiss());
    assert!(!timer.is_visible());
    assert_eq!(timer.advance(200.0), TimerTick::Running);
    assert!(!timer.dismiss());
}

#[test]
fn expiry_is_reported_once_without_dismiss() {
    let mut timer = NotificationTimer::new(1_000);
    assert_eq!(timer.advance(1_000.0), TimerTick::Expired);
    assert_eq!(timer.advance(1_050.0), TimerTick::Running);
    assert_eq!(timer.advance(2_000.0), TimerTick::Running);
    assert_eq!(timer.remaining_fraction(), 0.0);
    assert!(timer.dismiss());
}

#[test]
fn manual_dismiss_before_expiry_suppresses_later_expiry() {
    let mut timer = NotificationTimer::new(1_000);
    timer.advance(300.0);
    assert!(timer.dismiss());
    assert_eq!(timer.advance(1_500.0), TimerTick::Running);
    assert!(!timer.dismiss());
}

#[test]
fn zero_duration_never_expires() {
    let mut timer = NotificationTimer::new(0);
    assert!(!timer.auto_dismisses());
    assert_eq!(timer.advance(1_000_000.0), TimerTick::Running);
    assert_eq!(timer.remaining_fraction(), 1.0);
    assert!(timer.is_visible());
    assert!(timer.dismiss());
}

#[test]
fn negative_elapsed_is_ignored() {
    let mut timer = NotificationTimer::new(1_000);
    assert_eq!(timer.advance(-50.0), TimerTick::Running);
    assert_eq!(timer.remaining_fraction(), 1.0);
}
