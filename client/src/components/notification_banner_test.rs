use super::*;

#[test]
fn banner_position_defaults_to_top() {
    assert_eq!(BannerPosition::default(), BannerPosition::Top);
}

#[test]
fn banner_class_combines_variant_and_position() {
    assert_eq!(
        banner_class(NotificationVariant::Warning, BannerPosition::Bottom),
        "banner banner--warning banner--bottom"
    );
    assert_eq!(
        banner_class(NotificationVariant::Success, BannerPosition::Top),
        "banner banner--success banner--top"
    );
}
