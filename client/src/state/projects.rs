//! Project gallery filtering and view mode.
//!
//! DESIGN
//! ======
//! Filtering is a pure function over the static project list so the gallery
//! component only re-derives its visible set from `ProjectFilter`.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::{Deserialize, Serialize};

use crate::content::projects::Project;

/// Pseudo-tag that disables tag filtering.
pub const ALL_TAG: &str = "All";

/// Gallery layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Current gallery filter selections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    pub tag: String,
    pub query: String,
    pub view_mode: ViewMode,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self { tag: ALL_TAG.to_owned(), query: String::new(), view_mode: ViewMode::Grid }
    }
}

impl ProjectFilter {
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Back to all projects with no search. The layout choice is kept.
    pub fn reset(&mut self) {
        self.tag = ALL_TAG.to_owned();
        self.query.clear();
    }

    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Message for the empty state, naming whatever excluded everything.
    #[must_use]
    pub fn empty_message(&self) -> String {
        let query = self.query.trim();
        if query.is_empty() {
            format!("No projects match the \"{}\" filter", self.tag)
        } else {
            format!("No projects match \"{query}\"")
        }
    }
}

/// `"All"` followed by every distinct tag in first-seen order.
#[must_use]
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    let mut tags = vec![ALL_TAG.to_owned()];
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Projects passing both the tag filter and the search query.
#[must_use]
pub fn visible_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    let query = filter.query.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| filter.tag == ALL_TAG || p.has_tag(&filter.tag))
        .filter(|p| query.is_empty() || matches_query(p, &query))
        .collect()
}

fn matches_query(project: &Project, query: &str) -> bool {
    project.title.to_lowercase().contains(query)
        || project.description.to_lowercase().contains(query)
        || project.tags.iter().any(|t| t.to_lowercase().contains(query))
}
