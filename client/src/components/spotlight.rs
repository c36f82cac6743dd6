//! Decorative background: drifting blobs, pointer spotlight, noise overlay.

use leptos::prelude::*;

use crate::state::page::{PageState, spotlight_background};

#[component]
pub fn Spotlight() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let style = move || page.with(|p| spotlight_background(p.pointer));

    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__blob backdrop__blob--purple"></div>
            <div class="backdrop__blob backdrop__blob--indigo backdrop__blob--delay-2"></div>
            <div class="backdrop__blob backdrop__blob--blue backdrop__blob--delay-4"></div>
            <div class="backdrop__spotlight" style=style></div>
            <div class="backdrop__noise"></div>
        </div>
    }
}
