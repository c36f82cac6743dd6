//! Pointer-driven tilt math for project cards.
//!
//! The pointer's fractional offset from the card center (about -0.5..0.5 on
//! each axis) maps onto the opposite rotation axis: vertical offset rotates
//! around X (negated so the card tilts toward the cursor), horizontal offset
//! rotates around Y.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// Rotation produced by a pointer on the card edge (offset 0.5) is half of this.
pub const MAX_TILT_DEG: f64 = 20.0;
pub const HOVER_SCALE: f64 = 1.02;

/// Card bounding box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    /// Fractional pointer offset from the center, `None` for a degenerate box.
    pub fn pointer_offset(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let x_pct = (client_x - self.left) / self.width - 0.5;
        let y_pct = (client_y - self.top) / self.height - 0.5;
        Some((x_pct, y_pct))
    }
}

/// Rotation in degrees around the X and Y axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    pub fn from_offset(x_pct: f64, y_pct: f64) -> Self {
        Self { x: -y_pct * MAX_TILT_DEG, y: x_pct * MAX_TILT_DEG }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltState {
    pub rotation: Rotation,
    pub hovered: bool,
}

impl TiltState {
    /// Recompute rotation for a pointer position.
    ///
    /// With no attached element (`rect` is `None`) or an empty box the state is
    /// left untouched.
    pub fn pointer_move(&mut self, rect: Option<CardRect>, client_x: f64, client_y: f64) {
        let Some((x_pct, y_pct)) = rect.and_then(|r| r.pointer_offset(client_x, client_y)) else {
            return;
        };
        self.rotation = Rotation::from_offset(x_pct, y_pct);
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        *self = Self::default();
    }

    pub fn scale(&self) -> f64 {
        if self.hovered { HOVER_SCALE } else { 1.0 }
    }

    pub fn transform(&self) -> String {
        format!(
            "transform: rotateX({}deg) rotateY({}deg) scale({});",
            self.rotation.x,
            self.rotation.y,
            self.scale()
        )
    }
}
