//! Project card that tilts toward the pointer while hovered.

use leptos::prelude::*;

use crate::content::accent_class;
use crate::state::tilt::TiltState;
use crate::util::viewport::element_rect;

/// A project card with pointer-driven 3D tilt and hover scale.
#[component]
pub fn TiltCard(
    #[prop(into)] title: String,
    #[prop(into)] category: String,
    #[prop(into)] description: String,
    #[prop(into)] color: String,
    #[prop(default = Vec::new())] tags: Vec<String>,
) -> impl IntoView {
    let tilt = RwSignal::new(TiltState::default());
    let card_ref = NodeRef::<leptos::html::Div>::new();

    let on_move = move |ev: leptos::ev::MouseEvent| {
        let rect = element_rect(&card_ref);
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        tilt.update(|t| t.pointer_move(rect, x, y));
    };
    let on_leave = move |_: leptos::ev::MouseEvent| tilt.update(TiltState::pointer_leave);

    let glow_class = format!("tilt-card__glow {}", accent_class(&color));

    view! {
        <div class="tilt-card">
            <div
                node_ref=card_ref
                class="tilt-card__body"
                class:tilt-card__body--hovered=move || tilt.get().hovered
                style=move || tilt.get().transform()
                on:mousemove=on_move
                on:mouseleave=on_leave
            >
                <div class=glow_class></div>
                <div class="tilt-card__header">
                    <span class="tilt-card__icon" aria-hidden="true"></span>
                    <span class="tilt-card__category">{category}</span>
                </div>
                <h3 class="tilt-card__title">{title}</h3>
                <p class="tilt-card__description">{description}</p>
                <div class="tilt-card__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="tilt-card__tag">{tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
