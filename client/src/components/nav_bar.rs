//! Fixed glass navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the page scroll offset from context and switches to a blurred
//! background once the page has scrolled past the nav threshold. Buttons
//! smooth-scroll to in-page anchors.

use leptos::prelude::*;

use crate::content::NavItem;
use crate::state::page::{PageState, nav_class};
use crate::util::scroll::{scroll_to_section, scroll_to_top};

#[component]
pub fn NavBar(#[prop(into)] owner: String, items: Vec<NavItem>) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let scrolled = Memo::new(move |_| page.with(PageState::nav_scrolled));

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="nav__inner">
                <button class="nav__brand" on:click=move |_| scroll_to_top()>
                    {owner}
                </button>
                <div class="nav__links">
                    {items
                        .into_iter()
                        .map(|item| {
                            let anchor = item.anchor;
                            view! {
                                <button class="nav__link" on:click=move |_| {
                                    scroll_to_section(&anchor);
                                }>
                                    {item.label}
                                    <span class="nav__underline"></span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
