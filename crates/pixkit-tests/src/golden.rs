//! Golden pixmap tests.
//!
//! A fixed 4x3 fixture goes through every filter; the encoded pixmap text
//! must match the reference output byte for byte. References were produced
//! with the same double-precision arithmetic and truncation rules, so any
//! change in rounding, tie-breaking or neighbor policy shows up here.

use pixkit_core::{Channels, PixelBuffer};
use pixkit_io::to_pixmap_string;

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

/// Primaries, white/black, a mid gray and a few arbitrary colors.
pub(crate) const FIXTURE_RGB: [u8; 36] = [
    255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255,
    100, 150, 200, 10, 20, 30, 200, 100, 50, 0, 0, 0,
    128, 128, 128, 255, 255, 0, 37, 201, 90, 250, 5, 120,
];

/// Alpha for the fixture when used as the bottom composite layer.
pub(crate) const FIXTURE_ALPHA: [u8; 12] = [255, 255, 255, 255, 128, 0, 255, 64, 255, 200, 10, 255];

/// Layer composited over the fixture.
pub(crate) const LAYER_RGBA: [u8; 48] = [
    0, 255, 0, 0, 20, 235, 37, 128, 40, 215, 74, 255, 60, 195, 111, 64,
    80, 175, 148, 0, 100, 155, 185, 128, 120, 135, 222, 255, 140, 115, 3, 64,
    160, 95, 40, 0, 180, 75, 77, 128, 200, 55, 114, 255, 220, 35, 151, 64,
];

pub(crate) fn fixture() -> PixelBuffer {
    PixelBuffer::from_data(4, 3, Channels::Rgb, FIXTURE_RGB.to_vec()).unwrap()
}

pub(crate) fn fixture_rgba() -> PixelBuffer {
    let rgb = fixture();
    let data = rgb
        .pixels()
        .zip(FIXTURE_ALPHA)
        .flat_map(|(p, a)| [p[0], p[1], p[2], a])
        .collect();
    PixelBuffer::from_data(4, 3, Channels::Rgba, data).unwrap()
}

pub(crate) fn layer() -> PixelBuffer {
    PixelBuffer::from_data(4, 3, Channels::Rgba, LAYER_RGBA.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// References
// ---------------------------------------------------------------------------

const RGB: &str = "P3\n4 3\n255\n\
255 0 0 0 255 0 0 0 255 255 255 255 \n\
100 150 200 10 20 30 200 100 50 0 0 0 \n\
128 128 128 255 255 0 37 201 90 250 5 120 \n";

const REFLECTED: &str = "P3\n4 3\n255\n\
255 255 255 0 0 255 0 255 0 255 0 0 \n\
0 0 0 200 100 50 10 20 30 100 150 200 \n\
250 5 120 37 201 90 255 255 0 128 128 128 \n";

const ROTATED: &str = "P3\n3 4\n255\n\
255 255 255 0 0 0 250 5 120 \n\
0 0 255 200 100 50 37 201 90 \n\
0 255 0 10 20 30 255 255 0 \n\
255 0 0 100 150 200 128 128 128 \n";

const GRAY: &str = "P2\n4 3\n255\n\
54 182 18 254 \n\
142 18 117 0 \n\
128 236 158 65 \n";

const BAYER: &str = "P2\n4 3\n255\n\
0 0 0 255 \n\
100 20 200 0 \n\
128 0 201 120 \n";

const DEMOSAICKED: &str = "P3\n4 3\n255\n\
100 0 0 150 20 0 200 0 255 200 0 255 \n\
100 74 0 150 20 0 200 110 187 200 0 187 \n\
100 128 0 150 116 0 200 201 120 200 201 120 \n";

const SHIFTED_180: &str = "P3\n4 3\n255\n\
0 255 255 255 0 255 255 255 0 255 255 255 \n\
200 150 100 30 20 10 49 149 200 0 0 0 \n\
128 128 128 0 0 255 201 37 147 5 250 134 \n";

const DESATURATED_25: &str = "P3\n4 3\n255\n\
255 63 63 63 255 63 63 63 255 255 255 255 \n\
125 162 200 15 22 30 200 124 87 0 0 0 \n\
128 128 128 255 255 63 78 201 117 250 66 152 \n";

const COMPOSITE: &str = "P3\n4 3\n255\n\
255 0 0 10 244 18 40 215 74 206 239 218 \n\
50 75 100 0 0 0 120 135 222 8 7 0 \n\
128 128 128 170 129 30 7 2 4 242 12 127 \n";

fn encode(buf: &PixelBuffer) -> String {
    to_pixmap_string(buf).unwrap()
}

#[test]
fn test_golden_rgb() {
    assert_eq!(encode(&fixture()), RGB);
}

#[test]
fn test_golden_reflect() {
    assert_eq!(encode(&pixkit_ops::transform::reflect(&fixture())), REFLECTED);
}

#[test]
fn test_golden_rotate() {
    assert_eq!(encode(&pixkit_ops::transform::rotate(&fixture())), ROTATED);
}

#[test]
fn test_golden_gray() {
    assert_eq!(encode(&pixkit_color::rgb_to_gray(&fixture()).unwrap()), GRAY);
}

#[test]
fn test_golden_bayer_and_demosaic() {
    let raw = pixkit_ops::bayer::simulate_bayer_mosaic(&fixture()).unwrap();
    assert_eq!(encode(&raw), BAYER);
    assert_eq!(encode(&pixkit_ops::demosaic::demosaic(&raw).unwrap()), DEMOSAICKED);
}

#[test]
fn test_golden_hue_shift() {
    assert_eq!(encode(&pixkit_color::hue_shift(&fixture(), 180.0).unwrap()), SHIFTED_180);
}

#[test]
fn test_golden_desaturate() {
    assert_eq!(encode(&pixkit_color::desaturate(&fixture(), 0.25).unwrap()), DESATURATED_25);
}

#[test]
fn test_golden_composite() {
    let merged = pixkit_ops::composite::over_stack(&[fixture_rgba(), layer()]).unwrap();
    // the running composite is the source, so its alpha survives
    let alpha: Vec<u8> = merged.pixels().map(|p| p[3]).collect();
    assert_eq!(alpha, FIXTURE_ALPHA);
    assert_eq!(encode(&merged.drop_alpha().unwrap()), COMPOSITE);
}
