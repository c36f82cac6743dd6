//! Fade-and-rise wrapper revealed the first time it scrolls into view.
//!
//! DESIGN
//! ======
//! One `IntersectionObserver` per instance. It is disconnected as soon as the
//! content is revealed (the flag never reverts) and again on teardown for
//! instances that never became visible.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::reveal::REVEAL_THRESHOLD;
use crate::state::reveal::{RevealState, reveal_class, reveal_style};
#[cfg(feature = "hydrate")]
use crate::util::viewport::{IntersectionWatch, observe_intersection};

#[component]
pub fn ScrollReveal(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let reveal = RwSignal::new(RevealState::default());
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let watch = StoredValue::new_local(None::<IntersectionWatch>);
        Effect::new(move || {
            let Some(element) = node_ref.get() else {
                return;
            };
            if watch.with_value(Option::is_some) || reveal.get_untracked().is_visible() {
                return;
            }
            let handle = observe_intersection(&element, REVEAL_THRESHOLD, move |ratio| {
                reveal.try_update(|r| r.observe(ratio));
                !reveal.try_get_untracked().is_some_and(RevealState::is_visible)
            });
            watch.set_value(handle);
        });
        on_cleanup(move || {
            watch.try_update_value(|w| {
                if let Some(w) = w.take() {
                    w.disconnect();
                }
            });
        });
    }

    view! {
        <div
            node_ref=node_ref
            class=move || reveal_class(reveal.get().is_visible())
            style=reveal_style(delay_ms)
        >
            {children()}
        </div>
    }
}
