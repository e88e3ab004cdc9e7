//! Rasterizing a point cloud into an RGB buffer.

use crate::cloud::PointCloud;
use pixkit_core::{Channels, PixelBuffer};
use tracing::trace;

/// Canvas color behind the points.
pub const BACKGROUND: [u8; 3] = [40, 20, 60];

impl PointCloud {
    /// Draws every point onto a `width x height` RGB canvas filled with
    /// [`BACKGROUND`]. Later points overwrite earlier ones.
    ///
    /// `radius <= 1` plots the single pixel nearest each point; larger radii
    /// fill a disc whose half-width on row `dy` is `floor(sqrt(r^2 - dy^2))`.
    /// Pixels outside the canvas are skipped.
    pub fn render(&self, width: usize, height: usize, radius: u32) -> PixelBuffer {
        trace!(width, height, radius, points = self.len(), "Rendering point cloud");

        let mut image = PixelBuffer::new(width, height, Channels::Rgb);
        for y in 0..height {
            for x in 0..width {
                image.set_pixel(x, y, &BACKGROUND);
            }
        }

        let r = i64::from(radius.max(1));
        for p in &self.points {
            let (cx, cy) = p.pixel();
            let rgb = p.rgb();
            if r == 1 {
                plot(&mut image, cx, cy, &rgb);
                continue;
            }
            for dy in -r..=r {
                let half = ((r * r - dy * dy) as f64).sqrt() as i64;
                for dx in -half..=half {
                    plot(&mut image, cx + dx, cy + dy, &rgb);
                }
            }
        }
        image
    }
}

#[inline]
fn plot(image: &mut PixelBuffer, x: i64, y: i64, rgb: &[u8; 3]) {
    if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
        if image.layout().contains(x, y) {
            image.set_pixel(x, y, rgb);
        }
    }
}
