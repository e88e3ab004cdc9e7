//! Bayer mosaic simulation.
//!
//! A Bayer color filter array records one color per photosite:
//!
//! ```text
//! RGGB:     BGGR:     GRBG:     GBRG:
//! R G R G   B G B G   G R G R   G B G B
//! G B G B   G R G R   B G B G   R G R G
//! ```
//!
//! [`simulate_bayer_mosaic`] keeps, at every pixel, only the channel the
//! pattern assigns to it. The default pattern is [`BayerPattern::Gbrg`].

use crate::OpsResult;
use pixkit_core::{Channels, PixelBuffer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Red channel index.
pub const RED: usize = 0;
/// Green channel index.
pub const GREEN: usize = 1;
/// Blue channel index.
pub const BLUE: usize = 2;

/// Bayer pattern arrangement, named by its top-left 2x2 block read row-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BayerPattern {
    /// Red-Green / Green-Blue
    Rggb,
    /// Blue-Green / Green-Red
    Bggr,
    /// Green-Red / Blue-Green
    Grbg,
    /// Green-Blue / Red-Green
    #[default]
    Gbrg,
}

impl BayerPattern {
    /// All supported patterns.
    pub const ALL: [BayerPattern; 4] = [
        BayerPattern::Rggb,
        BayerPattern::Bggr,
        BayerPattern::Grbg,
        BayerPattern::Gbrg,
    ];

    /// Channel recorded at `(x, y)`: [`RED`], [`GREEN`] or [`BLUE`].
    #[inline]
    pub fn color_at(self, x: usize, y: usize) -> usize {
        let x_odd = x & 1;
        let y_odd = y & 1;

        match self {
            BayerPattern::Rggb => match (x_odd, y_odd) {
                (0, 0) => RED,
                (1, 1) => BLUE,
                _ => GREEN,
            },
            BayerPattern::Bggr => match (x_odd, y_odd) {
                (0, 0) => BLUE,
                (1, 1) => RED,
                _ => GREEN,
            },
            BayerPattern::Grbg => match (x_odd, y_odd) {
                (1, 0) => RED,
                (0, 1) => BLUE,
                _ => GREEN,
            },
            BayerPattern::Gbrg => match (x_odd, y_odd) {
                (1, 0) => BLUE,
                (0, 1) => RED,
                _ => GREEN,
            },
        }
    }

    /// Pattern name in upper case, e.g. `"GBRG"`.
    pub fn name(self) -> &'static str {
        match self {
            BayerPattern::Rggb => "RGGB",
            BayerPattern::Bggr => "BGGR",
            BayerPattern::Grbg => "GRBG",
            BayerPattern::Gbrg => "GBRG",
        }
    }
}

impl fmt::Display for BayerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BayerPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RGGB" => Ok(BayerPattern::Rggb),
            "BGGR" => Ok(BayerPattern::Bggr),
            "GRBG" => Ok(BayerPattern::Grbg),
            "GBRG" => Ok(BayerPattern::Gbrg),
            _ => Err(format!("unknown Bayer pattern '{s}' (expected RGGB, BGGR, GRBG or GBRG)")),
        }
    }
}

/// How the demosaicer treats in-bounds neighbors whose sample is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroNeighbors {
    /// Zero samples are skipped like out-of-bounds neighbors.
    ///
    /// A genuinely black neighbor is then indistinguishable from a missing
    /// one and drops out of both sum and count.
    #[default]
    Exclude,
    /// Every in-bounds neighbor counts, zero or not.
    Include,
}

/// Options shared by mosaic simulation and reconstruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MosaicOptions {
    /// Filter array layout.
    pub pattern: BayerPattern,
    /// Zero-neighbor policy, only used by the demosaicer.
    pub zero_neighbors: ZeroNeighbors,
}

impl MosaicOptions {
    /// Options for `pattern` with the default zero-neighbor policy.
    pub fn with_pattern(pattern: BayerPattern) -> Self {
        Self {
            pattern,
            ..Self::default()
        }
    }
}

/// Samples an RGB buffer through the default [`BayerPattern::Gbrg`] filter.
///
/// See [`simulate_bayer_mosaic_with`].
pub fn simulate_bayer_mosaic(rgb: &PixelBuffer) -> OpsResult<PixelBuffer> {
    simulate_bayer_mosaic_with(rgb, &MosaicOptions::default())
}

/// Samples an RGB buffer through a Bayer filter.
///
/// Returns a single-channel buffer of the same size holding, at every pixel,
/// the channel [`BayerPattern::color_at`] selects. No interpolation.
///
/// # Errors
///
/// [`OpsError::Buffer`](crate::OpsError::Buffer) unless `rgb` is 3-channel.
pub fn simulate_bayer_mosaic_with(
    rgb: &PixelBuffer,
    options: &MosaicOptions,
) -> OpsResult<PixelBuffer> {
    rgb.channels().expect(Channels::Rgb)?;
    let (width, height) = rgb.dimensions();
    debug!(width, height, pattern = %options.pattern, "Simulating Bayer mosaic");

    let mut out = PixelBuffer::new(width, height, Channels::Gray);
    for y in 0..height {
        for x in 0..width {
            let c = options.pattern.color_at(x, y);
            out.set_pixel(x, y, &[rgb.sample(x, y, c)]);
        }
    }
    Ok(out)
}
