//! The portfolio landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-level pointer and scroll state: two window listeners are
//! installed on mount and removed on unmount. Everything else is composed
//! from the content table and the interactive widgets.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::skill_grid::SkillGrid;
use crate::components::social_button::SocialButton;
use crate::components::spotlight::Spotlight;
use crate::components::tilt_card::TiltCard;
use crate::components::timeline::Timeline;
use crate::components::typewriter::Typewriter;
use crate::content::SiteContent;
use crate::state::page::PageState;
use crate::util::scroll::scroll_to_section;

/// Delay before the experience column reveals, so it trails the bio card.
const EXPERIENCE_REVEAL_DELAY_MS: u32 = 200;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let page = RwSignal::new(PageState::default());
    provide_context(page);

    #[cfg(feature = "hydrate")]
    track_pointer_and_scroll(page);

    let SiteContent { owner, nav, hero, skills, work_heading, projects, about, experience, events, contact, footer } =
        content;

    view! {
        <div class="portfolio">
            <div class="portfolio__base"></div>
            <Spotlight/>
            <NavBar owner=owner items=nav/>

            <header class="hero">
                <div class="hero__content">
                    <div class="hero__badge">
                        <span class="hero__pulse"></span>
                        {hero.badge}
                    </div>
                    <h1 class="hero__title">
                        <span class="hero__line">{hero.headline}</span>
                        <span class="hero__line hero__line--gradient">
                            <Typewriter
                                text=hero.typed_word
                                speed_ms=hero.typing.speed_ms
                                delay_ms=hero.typing.delay_ms
                            />
                        </span>
                    </h1>
                    <p class="hero__blurb">{hero.blurb}</p>
                    <div class="hero__actions">
                        <button class="button button--primary" on:click=move |_| {
                            scroll_to_section("work");
                        }>
                            "View Projects"
                            <span class="button__arrow" aria-hidden="true">"↗"</span>
                        </button>
                        <button class="button button--ghost" on:click=move |_| {
                            scroll_to_section("contact");
                        }>
                            "Contact Me"
                        </button>
                    </div>
                </div>
                <div class="hero__chevron" aria-hidden="true">"⌄"</div>
            </header>

            <main class="portfolio__main">
                <ScrollReveal>
                    <SkillGrid skills=skills/>
                </ScrollReveal>

                <section id="work" class="work">
                    <ScrollReveal>
                        <h2 class="section-title">{work_heading}</h2>
                    </ScrollReveal>
                    <div class="work__grid">
                        {projects
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <TiltCard
                                        title=p.title
                                        category=p.category
                                        description=p.description
                                        color=p.color
                                        tags=p.tags
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section id="about" class="about">
                    <ScrollReveal>
                        <div class="about__card">
                            <p class="about__eyebrow">{about.eyebrow}</p>
                            <h3 class="about__heading">{about.heading}</h3>
                            {about
                                .paragraphs
                                .into_iter()
                                .map(|text| view! { <p class="about__text">{text}</p> })
                                .collect_view()}
                        </div>
                    </ScrollReveal>
                    <ScrollReveal delay_ms=EXPERIENCE_REVEAL_DELAY_MS>
                        <Timeline heading="Experience" entries=experience/>
                    </ScrollReveal>
                </section>

                <section id="events" class="events">
                    <ScrollReveal>
                        <Timeline heading="Events" entries=events/>
                    </ScrollReveal>
                </section>

                <section id="contact" class="contact">
                    <ScrollReveal>
                        <h2 class="contact__heading">
                            {contact.heading}
                            <br/>
                            <span class="contact__highlight">{contact.highlight}</span>
                        </h2>
                        <div class="contact__links">
                            {contact
                                .links
                                .into_iter()
                                .map(|link| view! { <SocialButton link=link/> })
                                .collect_view()}
                        </div>
                    </ScrollReveal>
                </section>
            </main>

            <footer class="footer">
                <p>{footer}</p>
            </footer>
        </div>
    }
}

/// Install the window pointer/scroll listeners for the lifetime of the page.
#[cfg(feature = "hydrate")]
fn track_pointer_and_scroll(page: RwSignal<PageState>) {
    use crate::util::viewport::window_scroll_y;

    let pointer = window_event_listener(leptos::ev::mousemove, move |ev| {
        page.update(|p| p.set_pointer(f64::from(ev.client_x()), f64::from(ev.client_y())));
    });
    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        page.update(|p| p.set_scroll(window_scroll_y()));
    });
    log::debug!("page listeners installed");

    // A reload can restore a scrolled position before any scroll event fires.
    Effect::new(move || page.update(|p| p.set_scroll(window_scroll_y())));

    on_cleanup(move || {
        pointer.remove();
        scroll.remove();
        log::debug!("page listeners removed");
    });
}
