//! Smooth in-page scrolling helpers.
//!
//! Anchor lookup is separated from the browser call so the no-op behavior for
//! unknown ids is testable without a DOM. SSR builds never scroll.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Normalize a section identifier (`"#work"`, `" work "` → `"work"`).
pub fn normalize_anchor(id: &str) -> &str {
    id.trim().trim_start_matches('#')
}

/// Scroll the element named `id` into view using the provided lookup.
///
/// Returns `false` without calling `scroll` when the id does not resolve.
pub fn scroll_to_with<E>(id: &str, find: impl FnOnce(&str) -> Option<E>, scroll: impl FnOnce(&E)) -> bool {
    let id = normalize_anchor(id);
    if id.is_empty() {
        return false;
    }
    let Some(element) = find(id) else {
        return false;
    };
    scroll(&element);
    true
}

/// Smoothly scroll the section with the given id into view.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window().and_then(|w| w.document());
        scroll_to_with(
            id,
            |id| document.as_ref().and_then(|d| d.get_element_by_id(id)),
            |element| {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            },
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Smoothly scroll the window back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
