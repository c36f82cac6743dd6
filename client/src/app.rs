//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::SiteContent;
use crate::pages::portfolio::PortfolioPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the content table to the page. The site has one route; anything
/// else renders a short not-found message.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = SiteContent::builtin();
    let title = format!("{} | Portfolio", content.owner);
    provide_context(content);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=title/>
        <Meta name="description" content="Personal portfolio: projects, experience, events and contact."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
