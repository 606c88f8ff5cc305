//! Single-page portfolio: hero, contact, tech stack, projects.

use leptos::prelude::*;

use crate::components::contact_card::ContactCard;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::projects_carousel::ProjectsCarousel;
use crate::components::section_header::SectionHeader;
use crate::components::tech_stack::TechStack;
use crate::components::toast::ToastHost;
use crate::content::nav::HOME_SECTION;
use crate::content::profile::{BLURB, CONTACTS, NAME, PROFILE_IMAGE, ROLE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>
            <main class="home-page__main">
                <section id=HOME_SECTION class="hero">
                    <div class="hero__frame">
                        <div class="hero__avatar">
                            <img class="hero__image" src=PROFILE_IMAGE alt="Profile picture" width="160" height="160"/>
                        </div>
                        <div class="hero__text">
                            <h1 class="hero__title">{format!("Hi, I'm {NAME}")}</h1>
                            <h2 class="hero__role">{ROLE}" 👋"</h2>
                            <p class="hero__blurb">{BLURB}</p>
                        </div>
                    </div>
                </section>

                <section id="contact" class="contact">
                    <SectionHeader title="Contact" subtitle="Click a card to copy it"/>
                    <div class="contact__cards">
                        {CONTACTS.iter().map(|contact| view! { <ContactCard contact=*contact/> }).collect::<Vec<_>>()}
                    </div>
                </section>

                <TechStack/>

                <section id="projects" class="projects-section">
                    <SectionHeader title="Projects" subtitle="Things I have built"/>
                    <ProjectsCarousel/>
                </section>
            </main>
            <Footer/>
            <ToastHost/>
        </div>
    }
}
