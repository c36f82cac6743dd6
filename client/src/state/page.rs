//! Page-level ambient state: pointer position and scroll offset.
//!
//! DESIGN
//! ======
//! Both values are written by window listeners owned by the portfolio page
//! and read by decorative chrome (spotlight, nav bar). Nothing else mutates
//! them.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Scroll distance past which the nav bar switches to its blurred style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Spotlight gradient radius in CSS pixels.
pub const SPOTLIGHT_RADIUS_PX: u32 = 800;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageState {
    pub pointer: PointerPosition,
    pub scroll_y: f64,
}

impl PageState {
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition { x, y };
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    pub fn nav_scrolled(&self) -> bool {
        nav_scrolled(self.scroll_y)
    }
}

pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled { "nav nav--scrolled" } else { "nav" }
}

/// Inline background for the spotlight layer centered on the pointer.
pub fn spotlight_background(pointer: PointerPosition) -> String {
    format!(
        "background: radial-gradient({SPOTLIGHT_RADIUS_PX}px at {}px {}px, rgba(129, 140, 248, 0.05), transparent 80%);",
        pointer.x, pointer.y
    )
}
