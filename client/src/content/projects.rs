//! Project gallery entries.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub stars: Option<u32>,
    pub views: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    /// `None` renders a placeholder glyph.
    pub image_src: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub github_link: Option<String>,
    pub stats: Option<ProjectStats>,
}

impl Project {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

struct ProjectSeed {
    title: &'static str,
    image_src: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    link: &'static str,
    github_link: &'static str,
    stars: u32,
    views: u32,
}

const SEEDS: &[ProjectSeed] = &[
    ProjectSeed {
        title: "Web Novel Application",
        image_src: "/home-novel.png",
        description: "A web application for reading novels online with careful typography, dark mode, \
                      bookmarks and customizable reading themes.",
        tags: &["React", "NextJS", "TailwindCSS", "TypeScript"],
        link: "",
        github_link: "https://github.com/example/web-novel",
        stars: 24,
        views: 856,
    },
    ProjectSeed {
        title: "LOFI Music Player",
        image_src: "/Lofi.png",
        description: "A music streaming app with ambient backgrounds, rain sounds and focus modes, \
                      built around curated playlists.",
        tags: &["React JS", "Material UI", "MongoDB", "Node.js"],
        link: "https://github.com/PhurinGZ/LOFI",
        github_link: "https://github.com/PhurinGZ/LOFI",
        stars: 42,
        views: 1200,
    },
    ProjectSeed {
        title: "Web Blog Platform",
        image_src: "/web-blog.png",
        description: "A blog platform with rich text editing, comments, user authentication and a \
                      responsive layout.",
        tags: &["Node.js", "React.js", "MongoDB", "Express"],
        link: "https://github.com/PhurinGZ/webBlogDemo",
        github_link: "https://github.com/PhurinGZ/webBlogDemo",
        stars: 18,
        views: 634,
    },
    ProjectSeed {
        title: "Portfolio Website",
        image_src: "/portfolio.png",
        description: "This site: a personal showcase with theming, scroll-aware navigation and a \
                      filterable project gallery.",
        tags: &["NextJS", "TailwindCSS", "Framer Motion", "TypeScript"],
        link: "https://github.com/PhurinGZ/Portfolio",
        github_link: "https://github.com/PhurinGZ/Portfolio",
        stars: 67,
        views: 2100,
    },
    ProjectSeed {
        title: "E-Commerce Platform",
        image_src: "/e-commerce.png",
        description: "An e-commerce solution with product management, shopping cart, payment \
                      integration, order tracking and an admin dashboard.",
        tags: &["TailwindCSS", "TypeScript", "MongoDB", "NextJS"],
        link: "https://github.com/Thuje009/project-e-commerce",
        github_link: "https://github.com/Thuje009/project-e-commerce",
        stars: 31,
        views: 945,
    },
];

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// All gallery projects in display order.
#[must_use]
pub fn projects() -> Vec<Project> {
    SEEDS
        .iter()
        .map(|seed| Project {
            title: seed.title.to_owned(),
            image_src: non_empty(seed.image_src),
            description: seed.description.to_owned(),
            tags: seed.tags.iter().map(|t| (*t).to_owned()).collect(),
            link: non_empty(seed.link),
            github_link: non_empty(seed.github_link),
            stats: Some(ProjectStats { stars: Some(seed.stars), views: Some(seed.views) }),
        })
        .collect()
}
