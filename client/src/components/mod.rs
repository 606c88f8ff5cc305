//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and notification surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod alert;
pub mod contact_card;
pub mod footer;
pub mod navbar;
pub mod notification_banner;
pub mod project_card;
pub mod projects_carousel;
pub mod section_header;
pub mod tech_stack;
pub mod toast;
