//! RGB <-> HSV point conversion.
//!
//! Inputs and outputs stay in the continuous domain: RGB components are
//! `f64` in `[0, 255]` (mid-pipeline values need not be integral), hue is in
//! degrees `[0, 360)`, saturation and value in `[0, 1]`. Callers narrow to
//! bytes themselves.
//!
//! # Hue ties
//!
//! When two channels both equal the maximum, the hue formula of the first one
//! in `r, g, b` order is used. Yellow `(255, 255, 0)` therefore takes the red
//! branch and lands on exactly 60 degrees.
//!
//! # Example
//!
//! ```rust
//! use pixkit_color::hsv::{hsv_to_rgb, rgb_to_hsv};
//!
//! let hsv = rgb_to_hsv(0.0, 0.0, 255.0);
//! assert_eq!(hsv.h, 240.0);
//! assert_eq!(hsv_to_rgb(hsv.h, hsv.s, hsv.v), [0.0, 0.0, 255.0]);
//! ```

/// Hue/saturation/value triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Value, `[0, 1]`.
    pub v: f64,
}

impl Hsv {
    /// Creates a triple without validation.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Converts back to RGB in `[0, 255]`.
    #[inline]
    pub fn to_rgb(self) -> [f64; 3] {
        hsv_to_rgb(self.h, self.s, self.v)
    }

    /// Brings any finite hue into `[0, 360)`.
    ///
    /// `fmod` first, then a single correction, so `-30` becomes `330` and
    /// `725` becomes `5`.
    #[inline]
    pub fn wrap_hue(h: f64) -> f64 {
        let mut h = h % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        if h >= 360.0 {
            h -= 360.0;
        }
        h
    }
}

/// Converts an RGB color in `[0, 255]` to HSV.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let diff = cmax - cmin;

    // r, g, b order on ties
    let h = if diff == 0.0 {
        0.0
    } else if cmax == r {
        60.0 * (((g - b) / diff) % 6.0)
    } else if cmax == g {
        60.0 * ((b - r) / diff + 2.0)
    } else {
        60.0 * ((r - g) / diff + 4.0)
    };

    let s = if cmax == 0.0 { 0.0 } else { diff / cmax };

    Hsv {
        h: Hsv::wrap_hue(h),
        s,
        v: cmax,
    }
}

/// Converts HSV to RGB in `[0, 255]`.
///
/// Each 60 degree sector is half-open. A hue outside `[0, 360)` (including
/// NaN) yields black; wrap it with [`Hsv::wrap_hue`] first.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    if !(0.0..360.0).contains(&h) {
        return [0.0; 3];
    }

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}
