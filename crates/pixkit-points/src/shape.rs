//! Shape strategies.
//!
//! A [`PointShape`] draws one [`ColoredPoint`] at a time from a seeded RNG
//! and decides how its points move when the cloud pulses. [`Heart`] and
//! [`Star`] are the two built-in shapes; [`ShapeKind`] names them.

use crate::point::ColoredPoint;
use rand::Rng;
use rand::rngs::StdRng;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// A parametric point distribution.
pub trait PointShape {
    /// Short lower-case name, used for file names.
    fn name(&self) -> &'static str;

    /// Draws one point on a `width x height` canvas centered in the image.
    ///
    /// Returns `None` when the draw lands outside the canvas; callers retry.
    fn sample(&self, rng: &mut StdRng, width: f64, height: f64) -> Option<ColoredPoint>;

    /// Moves `point` towards `center` for a pulse `factor` (1 = rest).
    ///
    /// Default is a uniform scale about `center`.
    fn contract(&self, point: &ColoredPoint, center: (f64, f64), factor: f64) -> ColoredPoint {
        point.moved_to(
            center.0 + factor * (point.x - center.0),
            center.1 + factor * (point.y - center.1),
        )
    }
}

/// Color draw: `base + U[0,1) * span` per channel.
#[derive(Debug, Clone, Copy)]
struct Tone([(u8, f64); 3]);

impl Tone {
    const fn new(r: (u8, f64), g: (u8, f64), b: (u8, f64)) -> Self {
        Self([r, g, b])
    }

    fn draw(&self, rng: &mut StdRng) -> [u8; 3] {
        self.0
            .map(|(base, span)| base.saturating_add((rng.random::<f64>() * span) as u8))
    }
}

// Heart palette, inside out.
const HEART_WHITE: Tone = Tone::new((245, 10.0), (235, 20.0), (235, 15.0));
const HEART_LIGHT: Tone = Tone::new((230, 25.0), (180, 50.0), (180, 30.0));
const HEART_MEDIUM: Tone = Tone::new((200, 40.0), (120, 60.0), (120, 40.0));
const HEART_TRANSITION: Tone = Tone::new((210, 45.0), (140, 70.0), (140, 50.0));
const HEART_BRIGHT: Tone = Tone::new((245, 10.0), (220, 35.0), (220, 25.0));
const HEART_EDGE: Tone = Tone::new((240, 15.0), (100, 80.0), (100, 60.0));
const HEART_GLOW_1: Tone = Tone::new((80, 40.0), (20, 30.0), (20, 30.0));
const HEART_GLOW_2: Tone = Tone::new((60, 30.0), (15, 20.0), (15, 20.0));
const HEART_GLOW_3: Tone = Tone::new((40, 25.0), (10, 15.0), (10, 15.0));

/// Classic parametric heart with a blunted tip, dense outline and outer glow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    /// Curve units to pixels.
    pub scale: f64,
}

impl Default for Heart {
    fn default() -> Self {
        Self { scale: 10.0 }
    }
}

impl Heart {
    /// Point on the outline for parameter `t`, tip flattened below `y = -12`.
    pub fn curve(t: f64) -> (f64, f64) {
        let x = 16.0 * t.sin().powi(3);
        let mut y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        if y < -12.0 {
            y = -12.0 - (-12.0 - y) * 0.05;
        }
        (x, y)
    }

    /// Distance from the origin to the outline at polar `angle`, in pixels.
    fn outline_distance(&self, angle: f64) -> f64 {
        let (x, y) = Self::curve(angle);
        x.hypot(y) * self.scale
    }

    fn tone_for(rng: &mut StdRng, color_dist: f64) -> Tone {
        if color_dist < 0.30 {
            let choice: f64 = rng.random();
            if choice < 0.4 {
                HEART_WHITE
            } else if choice < 0.7 {
                HEART_LIGHT
            } else {
                HEART_MEDIUM
            }
        } else if color_dist < 0.55 {
            HEART_TRANSITION
        } else if color_dist < 0.80 {
            HEART_BRIGHT
        } else if color_dist < 0.98 {
            HEART_EDGE
        } else if color_dist < 1.10 {
            HEART_GLOW_1
        } else if color_dist < 1.25 {
            HEART_GLOW_2
        } else {
            HEART_GLOW_3
        }
    }
}

impl PointShape for Heart {
    fn name(&self) -> &'static str {
        "heart"
    }

    fn sample(&self, rng: &mut StdRng, width: f64, height: f64) -> Option<ColoredPoint> {
        let t = rng.random::<f64>() * 2.0 * PI;
        let (cx, cy) = Self::curve(t);
        let bottom_tip = cy < -10.0;
        let top = cy > 8.0;

        // Radial position relative to the outline (1 = on it).
        let pick: f64 = rng.random();
        let distance = if bottom_tip {
            if pick < 0.20 {
                1.0 + rng.random::<f64>() * 0.25
            } else if pick < 0.45 {
                0.3 + rng.random::<f64>() * 0.5
            } else {
                0.6 + rng.random::<f64>().powf(0.35) * 0.5
            }
        } else if pick < 0.12 {
            1.0 + rng.random::<f64>() * 0.4
        } else if pick < 0.25 {
            rng.random::<f64>()
        } else {
            rng.random::<f64>().powf(0.08)
        };

        let jitter = if bottom_tip {
            8.0
        } else if top {
            9.0
        } else {
            6.0
        };
        let x = cx * distance + (rng.random::<f64>() - 0.5) * jitter;
        let y = cy * distance + (rng.random::<f64>() - 0.5) * jitter;

        let px = width / 2.0 + x * self.scale;
        let py = height / 2.0 - y * self.scale;
        if !on_canvas(px, py, width, height) {
            return None;
        }

        let color_dist = distance + (rng.random::<f64>() - 0.5) * 0.25;
        let rgb = Self::tone_for(rng, color_dist).draw(rng);
        Some(ColoredPoint::new(px, py, rgb))
    }

    /// Outline-aware squeeze: points near the outline follow `factor`,
    /// points near the center move 85% as much.
    fn contract(&self, point: &ColoredPoint, center: (f64, f64), factor: f64) -> ColoredPoint {
        let dx = point.x - center.0;
        let dy = center.1 - point.y;
        let outline = self.outline_distance(dy.atan2(dx));
        let normalized = if outline > 0.0 {
            dx.hypot(dy) / outline
        } else {
            0.0
        };

        let weight = (normalized.clamp(0.0, 1.2) / 1.2).powf(1.8);
        let inner = 1.0 - (1.0 - factor) * 0.85;
        let s = inner * (1.0 - weight) + factor * weight;
        point.moved_to(center.0 + dx * s, center.1 - dy * s)
    }
}

// Star palette: (cumulative probability, tone).
const STAR_TONES: [(f64, Tone); 7] = [
    (0.20, Tone::new((250, 5.0), (245, 10.0), (200, 55.0))),
    (0.40, Tone::new((255, 0.0), (240, 15.0), (100, 100.0))),
    (0.60, Tone::new((255, 0.0), (180, 60.0), (40, 80.0))),
    (0.75, Tone::new((240, 15.0), (120, 80.0), (20, 50.0))),
    (0.88, Tone::new((220, 35.0), (80, 70.0), (15, 35.0))),
    (0.96, Tone::new((200, 40.0), (60, 60.0), (10, 30.0))),
    (1.00, Tone::new((80, 60.0), (70, 50.0), (20, 30.0))),
];

/// Five-pointed star pointing down, slightly rounded tips, edge-biased fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Unit radius to pixels.
    pub scale: f64,
    /// Inner vertex radius relative to the outer one.
    pub inner_radius: f64,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            scale: 150.0,
            inner_radius: 0.382,
        }
    }
}

impl Star {
    /// The 10 outline vertices, alternating outer and inner, starting at the bottom tip.
    pub fn vertices(&self) -> [(f64, f64); 10] {
        std::array::from_fn(|v| {
            let angle = v as f64 * PI / 5.0 + PI / 2.0;
            let r = if v % 2 == 0 { 1.0 } else { self.inner_radius };
            (r * angle.cos(), r * angle.sin())
        })
    }
}

impl PointShape for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn sample(&self, rng: &mut StdRng, width: f64, height: f64) -> Option<ColoredPoint> {
        let vertices = self.vertices();
        let tri = ((rng.random::<f64>() * 10.0) as usize).min(9);
        let v1 = vertices[tri];
        let v2 = vertices[(tri + 1) % 10];

        // Uniform point in the triangle (origin, v1, v2).
        let mut r1: f64 = rng.random();
        let mut r2: f64 = rng.random();
        if r1 + r2 > 1.0 {
            r1 = 1.0 - r1;
            r2 = 1.0 - r2;
        }
        let mut x = r1 * v1.0 + r2 * v2.0;
        let mut y = r1 * v1.1 + r2 * v2.1;

        // Even triangles start at an outer tip; pull points near it inwards.
        if tri % 2 == 0 {
            let dx = x - v1.0;
            let dy = y - v1.1;
            let tip = dx.hypot(dy);
            if tip < 0.12 {
                let pull = (1.0 - tip / 0.12) * 0.08;
                x -= dx * pull;
                y -= dy * pull;
            }
        }

        let pick: f64 = rng.random();
        if pick < 0.12 {
            let glow = 1.0 + rng.random::<f64>() * 0.35;
            x *= glow;
            y *= glow;
        } else if pick >= 0.28 {
            let bias = rng.random::<f64>().powf(0.10);
            let along: f64 = rng.random();
            let ex = v1.0 * (1.0 - along) + v2.0 * along;
            let ey = v1.1 * (1.0 - along) + v2.1 * along;
            x = x * (1.0 - bias) + ex * bias;
            y = y * (1.0 - bias) + ey * bias;
        }

        x += (rng.random::<f64>() - 0.5) * 0.10;
        y += (rng.random::<f64>() - 0.5) * 0.10;

        let px = width / 2.0 + x * self.scale;
        let py = height / 2.0 - y * self.scale;
        if !on_canvas(px, py, width, height) {
            return None;
        }

        let choice: f64 = rng.random();
        let tone = STAR_TONES
            .iter()
            .find(|(p, _)| choice < *p)
            .map_or(STAR_TONES[STAR_TONES.len() - 1].1, |(_, tone)| *tone);
        Some(ColoredPoint::new(px, py, tone.draw(rng)))
    }
}

#[inline]
fn on_canvas(x: f64, y: f64, width: f64, height: f64) -> bool {
    x >= 0.0 && x < width && y >= 0.0 && y < height
}

/// Built-in shapes by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Heart`] with default parameters.
    Heart,
    /// [`Star`] with default parameters.
    Star,
}

impl ShapeKind {
    /// Default-configured strategy for this kind.
    pub fn shape(self) -> Box<dyn PointShape> {
        match self {
            ShapeKind::Heart => Box::new(Heart::default()),
            ShapeKind::Star => Box::new(Star::default()),
        }
    }

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Heart => "heart",
            ShapeKind::Star => "star",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heart" => Ok(ShapeKind::Heart),
            "star" => Ok(ShapeKind::Star),
            _ => Err(format!("unknown shape '{s}' (expected heart or star)")),
        }
    }
}
