//! Navigation sections, in page order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// DOM id of the section element.
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const HOME_SECTION: &str = "home";

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { id: HOME_SECTION, label: "Home", icon: "⌂" },
    NavItem { id: "contact", label: "Contact", icon: "✉" },
    NavItem { id: "tech-stack", label: "Tech Stack", icon: "⚒" },
    NavItem { id: "projects", label: "Projects", icon: "▦" },
];
