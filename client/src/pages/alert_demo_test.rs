use super::*;

#[test]
fn toast_title_uses_capitalized_variant() {
    assert_eq!(toast_title(NotificationVariant::Warning), "Warning Toast");
}

#[test]
fn toast_message_mentions_variant_and_duration() {
    assert_eq!(
        toast_message(NotificationVariant::Error),
        "This is a error toast notification that automatically disappears after 5 seconds."
    );
}

#[test]
fn banner_message_mentions_variant() {
    assert!(banner_message(NotificationVariant::Info).starts_with("This is a info notification banner"));
}

#[test]
fn demo_buttons_are_tinted_per_variant() {
    let classes = NotificationVariant::ALL.map(demo_button_class);
    assert_eq!(classes, ["btn btn--info", "btn btn--success", "btn btn--warning", "btn btn--error"]);
}
