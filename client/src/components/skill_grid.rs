//! Four-column skill summary shown under the hero.

use leptos::prelude::*;

use crate::content::{SkillGroup, accent_class};

#[component]
pub fn SkillGrid(skills: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <div class="skills">
            {skills
                .into_iter()
                .map(|skill| {
                    let icon_class = format!("skills__icon {}", accent_class(&skill.accent));
                    view! {
                        <div class="skills__group">
                            <div class="skills__label">
                                <span class=icon_class aria-hidden="true"></span>
                                <span class="skills__name">{skill.label}</span>
                            </div>
                            <p class="skills__items">{skill.items}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
