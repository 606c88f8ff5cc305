//! Tech-stack showcase section.

use leptos::prelude::*;

use super::section_header::SectionHeader;
use crate::content::tech_stack::{ADDITIONAL_SKILLS, TECH_STACK, TechCategory};

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id="tech-stack" class="tech-stack">
            <SectionHeader title="Tech Stack" subtitle="Technologies and tools I work with"/>
            <div class="tech-stack__grid">
                {TECH_STACK.iter().map(|category| view! { <TechCategoryCard category=*category/> }).collect::<Vec<_>>()}
            </div>
            <div class="tech-stack__extra">
                <h4 class="tech-stack__extra-title">"Additional Skills"</h4>
                <div class="tech-stack__extra-list">
                    {ADDITIONAL_SKILLS
                        .iter()
                        .map(|skill| view! { <span class="chip">{*skill}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TechCategoryCard(category: TechCategory) -> impl IntoView {
    view! {
        <div class="tech-card">
            <div class="tech-card__header">
                <span class="tech-card__icon" aria-hidden="true">{category.icon}</span>
                <h3 class="tech-card__title">{category.title}</h3>
                <p class="tech-card__subtitle">{category.subtitle}</p>
            </div>
            <div class="tech-card__skills">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="skill">
                                <img class="skill__logo" src=skill.logo alt=skill.name width="64" height="64"/>
                                <span class="skill__name">{skill.name}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
