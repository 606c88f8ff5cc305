//! Static page content: profile, navigation, projects and the tech stack.
//!
//! Kept as plain data so pages can render it and tests can check its shape
//! without a reactive runtime.

pub mod nav;
pub mod profile;
pub mod projects;
pub mod tech_stack;
