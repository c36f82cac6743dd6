//! Element geometry and viewport observation.
//!
//! Requires a browser environment; SSR and native test builds see no element
//! and never observe.

use leptos::prelude::*;

use crate::state::tilt::CardRect;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Bounding box of a mounted element, `None` when the ref is not attached.
pub fn element_rect(node_ref: &NodeRef<leptos::html::Div>) -> Option<CardRect> {
    #[cfg(feature = "hydrate")]
    {
        let element = node_ref.get_untracked()?;
        let rect = element.get_bounding_client_rect();
        Some(CardRect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node_ref;
        None
    }
}

/// A live `IntersectionObserver` plus the callback it invokes.
///
/// Disconnects when dropped; the closure must outlive the observer.
#[cfg(feature = "hydrate")]
pub struct IntersectionWatch {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl IntersectionWatch {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch `element` and report each entry's intersection ratio.
///
/// `on_ratio` returns whether to keep watching; returning `false`
/// disconnects the observer from inside the callback.
#[cfg(feature = "hydrate")]
pub fn observe_intersection(
    element: &web_sys::Element,
    threshold: f64,
    mut on_ratio: impl FnMut(f64) -> bool + 'static,
) -> Option<IntersectionWatch> {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !on_ratio(entry.intersection_ratio()) {
                    observer.disconnect();
                    return;
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("intersection observer unavailable: {e:?}");
            return None;
        }
    };
    observer.observe(element);

    Some(IntersectionWatch { observer, _callback: callback })
}

/// Current vertical scroll offset of the window.
#[cfg(feature = "hydrate")]
pub fn window_scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}
