//! The colored point shared by every shape.

use serde::{Deserialize, Serialize};

/// A position in image coordinates with an RGB color.
///
/// `x` grows to the right and `y` downwards, as in the rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl ColoredPoint {
    /// Creates a point.
    pub const fn new(x: f64, y: f64, rgb: [u8; 3]) -> Self {
        Self {
            x,
            y,
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }

    /// Color as `[r, g, b]`.
    #[inline]
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Same color at a new position.
    #[inline]
    pub fn moved_to(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }

    /// Position rounded to the nearest pixel (halves away from zero).
    #[inline]
    pub fn pixel(&self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}
