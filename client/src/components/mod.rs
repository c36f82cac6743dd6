//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Interactive widgets (typewriter, scroll reveal, tilt card) own their state
//! per instance; page chrome (nav, spotlight) reads the page state provided by
//! the portfolio page through Leptos context.

pub mod nav_bar;
pub mod scroll_reveal;
pub mod skill_grid;
pub mod social_button;
pub mod spotlight;
pub mod tilt_card;
pub mod timeline;
pub mod typewriter;
