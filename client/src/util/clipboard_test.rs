use super::*;

#[test]
fn success_maps_to_success_variant() {
    assert_eq!(copy_outcome_variant(&Ok(())), NotificationVariant::Success);
}

#[test]
fn any_failure_maps_to_error_variant() {
    assert_eq!(copy_outcome_variant(&Err(ClipboardError::Unavailable)), NotificationVariant::Error);
    assert_eq!(
        copy_outcome_variant(&Err(ClipboardError::Rejected("NotAllowedError".to_owned()))),
        NotificationVariant::Error
    );
}

#[test]
fn toast_title_names_the_variant() {
    assert_eq!(copy_toast_title(NotificationVariant::Success), "Copied Success");
    assert_eq!(copy_toast_title(NotificationVariant::Error), "Copied Error");
}

#[test]
fn toast_message_mentions_value_and_error() {
    assert_eq!(copy_toast_message(&Ok(()), "a@b.c"), "Copied a@b.c");
    assert_eq!(
        copy_toast_message(&Err(ClipboardError::Unavailable), "a@b.c"),
        "Could not copy a@b.c: clipboard is not available"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn copy_text_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(copy_text("hello"));
    assert_eq!(result, Err(ClipboardError::Unavailable));
}
