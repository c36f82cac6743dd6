//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; it owns page-scoped listeners and delegates
//! rendering details to `components`.

pub mod portfolio;
