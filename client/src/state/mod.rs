//! Client-side UI state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain struct (or enum) with pure transition methods. The
//! root `App` wraps them in `RwSignal`s and provides them as context, so the
//! logic stays testable without a browser.

pub mod notification;
pub mod projects;
pub mod theme;
pub mod toast;
pub mod ui;
