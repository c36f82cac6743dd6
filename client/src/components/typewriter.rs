//! Typed-out text with a blinking caret.
//!
//! DESIGN
//! ======
//! SSR renders an empty prefix plus the caret; after hydration a timer task
//! waits `delay_ms`, then reveals one character per `speed_ms` until the text
//! is complete. The task is stopped when the component is torn down.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::typewriter::TypewriterConfig;
use crate::state::typewriter::{DEFAULT_SPEED_MS, TypewriterState};

#[component]
pub fn Typewriter(
    #[prop(into)] text: String,
    #[prop(default = DEFAULT_SPEED_MS)] speed_ms: u32,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let state = RwSignal::new(TypewriterState::new(&text));

    #[cfg(feature = "hydrate")]
    start_typing(state, TypewriterConfig { speed_ms, delay_ms });
    #[cfg(not(feature = "hydrate"))]
    let _ = (speed_ms, delay_ms);

    view! {
        <span class="typewriter" aria-label=text>
            <span class="typewriter__text" aria-hidden="true">{move || state.with(TypewriterState::prefix)}</span>
            <span class="typewriter__caret" aria-hidden="true">"|"</span>
        </span>
    }
}

#[cfg(feature = "hydrate")]
fn start_typing(state: RwSignal<TypewriterState>, config: TypewriterConfig) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    if state.with_untracked(TypewriterState::is_complete) {
        return;
    }

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();

    leptos::task::spawn_local(async move {
        let mut tick = 0;
        loop {
            let wait = Duration::from_millis(u64::from(config.sleep_before(tick)));
            gloo_timers::future::sleep(wait).await;
            if !alive_task.load(Ordering::Relaxed) {
                break;
            }
            let more = state.try_update(TypewriterState::tick).unwrap_or(false);
            if !more {
                break;
            }
            tick += 1;
        }
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
