//! Browser helpers: smooth scrolling and element geometry.
//!
//! Both modules compile to inert fallbacks without the `hydrate` feature so
//! SSR and native tests link against the same API.

pub mod scroll;
pub mod viewport;
