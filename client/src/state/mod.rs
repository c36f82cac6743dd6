//! Transient UI state for the portfolio widgets.
//!
//! DESIGN
//! ======
//! Each module is a plain state machine with no browser dependency, so the
//! interaction rules can be tested natively. Components wrap one instance
//! per widget in an `RwSignal`.

pub mod page;
pub mod reveal;
pub mod tilt;
pub mod typewriter;
