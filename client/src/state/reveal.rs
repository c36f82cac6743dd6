//! One-way reveal flag driven by viewport intersection events.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Minimum intersection ratio that counts as "entered the viewport".
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Fixed reveal transition length.
pub const REVEAL_DURATION_MS: u32 = 1000;

/// Hidden until the first qualifying intersection, visible forever after.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    /// Feed one intersection observation.
    ///
    /// Returns `true` only for the observation that flips the flag.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if self.visible || !intersects(intersection_ratio) {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }
}

/// NaN ratios never count.
pub fn intersects(intersection_ratio: f64) -> bool {
    intersection_ratio >= REVEAL_THRESHOLD
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "scroll-reveal scroll-reveal--visible"
    } else {
        "scroll-reveal"
    }
}

pub fn reveal_style(delay_ms: u32) -> String {
    format!("transition-duration: {REVEAL_DURATION_MS}ms; transition-delay: {delay_ms}ms;")
}
