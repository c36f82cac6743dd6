//! Vertical timeline used for experience and event history.

use leptos::prelude::*;

use crate::content::TimelineEntry;

/// Renders `entries` in order; the first entry gets the highlighted dot.
#[component]
pub fn Timeline(#[prop(into)] heading: String, entries: Vec<TimelineEntry>) -> impl IntoView {
    view! {
        <div class="timeline">
            <h4 class="timeline__heading">
                <span class="timeline__bullet"></span>
                {heading}
            </h4>
            <ul class="timeline__list">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        view! {
                            <li class="timeline__item">
                                <span class="timeline__dot" class:timeline__dot--current={i == 0}></span>
                                <p class="timeline__title">{entry.title}</p>
                                <p class="timeline__subtitle">{entry.subtitle}</p>
                                <p class="timeline__description">{entry.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
