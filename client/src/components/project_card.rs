//! Single project tile in the gallery.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::content::projects::{Project, ProjectStats};

/// Project tile with image (or placeholder), hover overlay, tags and links.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let Project { title, image_src, description, tags, link, github_link, stats } = project;

    let media = match image_src {
        Some(src) => {
            let alt = title.clone();
            view! { <img class="project-card__image" src=src alt=alt loading="lazy"/> }.into_any()
        }
        None => {
            let label = title.clone();
            view! {
                <div class="project-card__placeholder">
                    <span class="project-card__glyph" aria-hidden="true">"💻"</span>
                    <span class="project-card__placeholder-title">{label}</span>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <article
            class=move || project_card_class(hovered.get())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="project-card__media">
                {media}
                <div class="project-card__overlay">
                    <p class="project-card__description">{description}</p>
                </div>
                <div class="project-card__actions">
                    {github_link.map(|href| {
                        view! {
                            <a
                                class="project-card__action"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                title="Source on GitHub"
                            >
                                "GitHub"
                            </a>
                        }
                    })}
                    {link.map(|href| {
                        view! {
                            <a
                                class="project-card__action"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                title="Open project"
                            >
                                "↗"
                            </a>
                        }
                    })}
                </div>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <div class="project-card__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="project-card__tag">{tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
                {stats.and_then(|s| format_stats(&s)).map(|text| view! { <p class="project-card__stats">{text}</p> })}
            </div>
        </article>
    }
}

fn project_card_class(hovered: bool) -> &'static str {
    if hovered { "project-card project-card--hovered" } else { "project-card" }
}

/// `"★ 24 · 856 views"`, or whichever half is known. `None` when neither is.
fn format_stats(stats: &ProjectStats) -> Option<String> {
    match (stats.stars, stats.views) {
        (Some(stars), Some(views)) => Some(format!("★ {stars} · {views} views")),
        (Some(stars), None) => Some(format!("★ {stars}")),
        (None, Some(views)) => Some(format!("{views} views")),
        (None, None) => None,
    }
}
