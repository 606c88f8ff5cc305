//! Filterable project gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `ProjectFilter` signal and derives the visible set through a memo.
//! The grid/list choice is restored from `localStorage` after hydration so
//! the server-rendered markup always starts in grid mode.

#[cfg(test)]
#[path = "projects_carousel_test.rs"]
mod projects_carousel_test;

use leptos::prelude::*;

use super::project_card::ProjectCard;
use crate::content::projects::projects;
use crate::state::projects::{ALL_TAG, ProjectFilter, ViewMode, all_tags, visible_projects};
use crate::util::ui_persistence::{load_view_mode, save_view_mode};

#[component]
pub fn ProjectsCarousel() -> impl IntoView {
    let all = projects();
    let tags = all_tags(&all);
    let filter = RwSignal::new(ProjectFilter::default());

    Effect::new(move || {
        if let Some(mode) = load_view_mode() {
            filter.update(|f| f.view_mode = mode);
        }
    });

    let visible = Memo::new(move |_| {
        filter.with(|f| visible_projects(&all, f).into_iter().cloned().collect::<Vec<_>>())
    });

    let set_view_mode = move |mode: ViewMode| {
        filter.update(|f| f.view_mode = mode);
        save_view_mode(mode);
    };

    view! {
        <div class="projects">
            <div class="projects__controls">
                <div class="projects__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <FilterButton tag=tag filter=filter/> })
                        .collect::<Vec<_>>()}
                </div>

                <input
                    class="projects__search"
                    type="search"
                    placeholder="Search projects"
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.set_query(value));
                    }
                />

                <div class="projects__view-toggle">
                    <button
                        class=move || view_toggle_class(filter.with(|f| f.view_mode == ViewMode::Grid))
                        on:click=move |_| set_view_mode(ViewMode::Grid)
                        title="Grid view"
                    >
                        "▦"
                    </button>
                    <button
                        class=move || view_toggle_class(filter.with(|f| f.view_mode == ViewMode::List))
                        on:click=move |_| set_view_mode(ViewMode::List)
                        title="List view"
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <div class=move || gallery_class(filter.with(|f| f.view_mode))>
                <For
                    each=move || visible.get()
                    key=|project| project.title.clone()
                    children=|project| view! { <ProjectCard project=project/> }
                />
            </div>

            <Show when=move || visible.with(Vec::is_empty)>
                <div class="projects__empty">
                    <div class="projects__empty-glyph" aria-hidden="true">"🔍"</div>
                    <p class="projects__empty-message">{move || filter.with(ProjectFilter::empty_message)}</p>
                    <button class="btn btn--primary" on:click=move |_| filter.update(ProjectFilter::reset)>
                        "Show all"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Tag chip that selects its tag on click.
#[component]
fn FilterButton(tag: String, filter: RwSignal<ProjectFilter>) -> impl IntoView {
    let label = filter_label(&tag);
    let active_tag = tag.clone();

    view! {
        <button
            class=move || filter_button_class(filter.with(|f| f.is_tag_active(&active_tag)))
            on:click=move |_| filter.update(|f| f.select_tag(tag.clone()))
        >
            {label}
        </button>
    }
}

fn filter_label(tag: &str) -> String {
    if tag == ALL_TAG { format!("⚲ {tag}") } else { tag.to_owned() }
}

fn filter_button_class(active: bool) -> &'static str {
    if active { "chip chip--active" } else { "chip" }
}

fn view_toggle_class(active: bool) -> &'static str {
    if active {
        "projects__view-button projects__view-button--active"
    } else {
        "projects__view-button"
    }
}

fn gallery_class(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "projects__gallery projects__gallery--grid",
        ViewMode::List => "projects__gallery projects__gallery--list",
    }
}
