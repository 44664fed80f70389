//! Pointer-tracking spotlight math for hover cards.
//!
//! The card recomputes the glow position on every pointer move with no
//! debouncing; each update is constant time.

#[cfg(test)]
#[path = "spotlight_test.rs"]
mod spotlight_test;

/// Default glow color (semi-transparent white).
pub const DEFAULT_SPOTLIGHT_COLOR: &str = "rgba(255, 255, 255, 0.25)";

/// Radius of the radial gradient in pixels.
pub const SPOTLIGHT_RADIUS_PX: u32 = 600;

/// Local visual state of a spotlight card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spotlight {
    /// Pointer position relative to the card's top-left corner.
    pub x: f64,
    pub y: f64,
    /// Glow opacity, `0.0` hidden or `1.0` shown.
    pub opacity: f64,
}

impl Spotlight {
    pub fn track(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn enter(&mut self) {
        self.opacity = 1.0;
    }

    pub fn leave(&mut self) {
        self.opacity = 0.0;
    }

    /// Inline CSS for the glow layer.
    #[must_use]
    pub fn style(&self, color: &str) -> String {
        format!(
            "opacity: {}; background: radial-gradient({SPOTLIGHT_RADIUS_PX}px circle at {}px {}px, {color}, transparent 40%);",
            self.opacity, self.x, self.y
        )
    }
}
