use super::*;

#[test]
fn navbar_class_switches_when_scrolled() {
    assert_eq!(navbar_class(false), "navbar");
    assert_eq!(navbar_class(true), "navbar navbar--scrolled");
}

#[test]
fn nav_link_class_marks_active_link() {
    assert_eq!(nav_link_class("desktop", false), "navbar__link navbar__link--desktop");
    assert_eq!(
        nav_link_class("mobile", true),
        "navbar__link navbar__link--mobile navbar__link--active"
    );
}

#[test]
fn theme_toggle_and_mobile_menu_classes() {
    assert_eq!(theme_toggle_class(true), "theme-toggle theme-toggle--dark");
    assert_eq!(theme_toggle_class(false), "theme-toggle");
    assert_eq!(mobile_menu_class(true), "navbar__mobile navbar__mobile--open");
    assert_eq!(mobile_menu_class(false), "navbar__mobile");
}

#[test]
fn nav_items_start_at_home_and_have_unique_ids() {
    assert_eq!(NAV_ITEMS[0].id, HOME_SECTION);
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        for b in &NAV_ITEMS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}
