//! Labeled outbound contact link.

use leptos::prelude::*;

use crate::content::{CONTACT_LINK_REL, CONTACT_LINK_TARGET, ContactLink};

#[component]
pub fn SocialButton(link: ContactLink) -> impl IntoView {
    let icon_class = format!("social__icon social__icon--{}", link.icon);

    view! {
        <a
            class="social"
            href=link.href
            target=CONTACT_LINK_TARGET
            rel=CONTACT_LINK_REL
        >
            <span class=icon_class aria-hidden="true"></span>
            <span class="social__label">{link.label}</span>
        </a>
    }
}
