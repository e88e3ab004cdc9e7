//! Bayer demosaicing.
//!
//! Reconstructs RGB from a single-channel Bayer buffer. The recorded channel
//! is copied through; each missing channel is the integer mean of the
//! in-bounds 8-neighbors that recorded it. For the GBRG layout this means:
//!
//! - at green sites, red and blue come from the orthogonal pair of the
//!   matching row/column
//! - at red and blue sites, green comes from the 4 orthogonal neighbors and
//!   the opposite color from the 4 diagonals
//!
//! With [`ZeroNeighbors::Exclude`] a zero sample is skipped exactly like an
//! out-of-bounds one. A channel with no usable neighbor reconstructs to 0.

use crate::bayer::{MosaicOptions, ZeroNeighbors};
use crate::OpsResult;
use pixkit_core::{Channels, Error, PixelBuffer};
use tracing::debug;

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Demosaics with the default options (GBRG, zero neighbors excluded).
///
/// See [`demosaic_with`].
pub fn demosaic(bayer: &PixelBuffer) -> OpsResult<PixelBuffer> {
    demosaic_with(bayer, &MosaicOptions::default())
}

/// Reconstructs an RGB buffer of the same size from Bayer samples.
///
/// # Errors
///
/// [`OpsError::Buffer`](crate::OpsError::Buffer) unless `bayer` is
/// single-channel and at least 2x2.
pub fn demosaic_with(bayer: &PixelBuffer, options: &MosaicOptions) -> OpsResult<PixelBuffer> {
    bayer.channels().expect(Channels::Gray)?;
    let (width, height) = bayer.dimensions();
    if width < 2 || height < 2 {
        return Err(Error::invalid_dimensions(width, height, "demosaic needs at least 2x2").into());
    }
    debug!(
        width,
        height,
        pattern = %options.pattern,
        zero_neighbors = ?options.zero_neighbors,
        "Demosaicing"
    );

    let pattern = options.pattern;
    let include_zero = options.zero_neighbors == ZeroNeighbors::Include;
    let mut out = PixelBuffer::new(width, height, Channels::Rgb);
    let mut starved = 0usize;

    for y in 0..height {
        for x in 0..width {
            let native = pattern.color_at(x, y);
            let mut rgb = [0u8; 3];
            rgb[native] = bayer.sample(x, y, 0);

            for (c, slot) in rgb.iter_mut().enumerate() {
                if c == native {
                    continue;
                }
                let mut sum = 0u32;
                let mut count = 0u32;
                for (dx, dy) in NEIGHBORS {
                    let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                    else {
                        continue;
                    };
                    if nx >= width || ny >= height || pattern.color_at(nx, ny) != c {
                        continue;
                    }
                    let v = bayer.sample(nx, ny, 0);
                    if v == 0 && !include_zero {
                        continue;
                    }
                    sum += u32::from(v);
                    count += 1;
                }
                if count == 0 {
                    starved += 1;
                } else {
                    *slot = (sum / count) as u8;
                }
            }
            out.set_pixel(x, y, &rgb);
        }
    }

    if starved > 0 {
        debug!(starved, "Demosaic samples without usable neighbors set to 0");
    }
    Ok(out)
}
