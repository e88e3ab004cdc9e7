//! Point clouds: generation, centroid and pulse contraction.

use crate::point::ColoredPoint;
use crate::shape::PointShape;
use crate::{PointsError, PointsResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Draws allowed per requested point before generation gives up.
const MAX_ATTEMPTS_PER_POINT: usize = 1000;

/// Generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudConfig {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Number of points to keep.
    pub count: usize,
    /// RNG seed; equal seeds give equal clouds.
    pub seed: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            count: 5000,
            seed: 42,
        }
    }
}

/// An ordered set of colored points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    /// The points, in draw order.
    pub points: Vec<ColoredPoint>,
}

impl PointCloud {
    /// Wraps existing points.
    pub fn new(points: Vec<ColoredPoint>) -> Self {
        Self { points }
    }

    /// Samples `config.count` on-canvas points from `shape`.
    ///
    /// Off-canvas draws are discarded and redrawn.
    ///
    /// # Errors
    ///
    /// - [`PointsError::InvalidConfig`] for an empty canvas
    /// - [`PointsError::SamplingExhausted`] if the shape keeps missing the canvas
    pub fn generate(shape: &dyn PointShape, config: &CloudConfig) -> PointsResult<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(PointsError::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                config.width, config.height
            )));
        }
        debug!(
            shape = shape.name(),
            width = config.width,
            height = config.height,
            count = config.count,
            seed = config.seed,
            "Generating point cloud"
        );

        let mut rng = StdRng::seed_from_u64(config.seed);
        let (w, h) = (config.width as f64, config.height as f64);
        let max_attempts = config.count.saturating_mul(MAX_ATTEMPTS_PER_POINT);
        let mut points = Vec::with_capacity(config.count);
        let mut attempts = 0;

        while points.len() < config.count {
            if attempts == max_attempts {
                return Err(PointsError::SamplingExhausted {
                    attempts,
                    accepted: points.len(),
                    requested: config.count,
                });
            }
            attempts += 1;
            if let Some(p) = shape.sample(&mut rng, w, h) {
                points.push(p);
            }
        }
        debug!(attempts, "Point cloud generated");
        Ok(Self { points })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the cloud has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean position, `None` for an empty cloud.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some((sx / n, sy / n))
    }

    /// Uniform scale about `center`: `p' = c + (p - c) * factor`.
    pub fn contracted(&self, center: (f64, f64), factor: f64) -> Self {
        self.points
            .iter()
            .map(|p| {
                p.moved_to(
                    center.0 + (p.x - center.0) * factor,
                    center.1 + (p.y - center.1) * factor,
                )
            })
            .collect()
    }

    /// Contraction using the shape's own pulse rule.
    pub fn contracted_with(&self, shape: &dyn PointShape, center: (f64, f64), factor: f64) -> Self {
        self.points
            .iter()
            .map(|p| shape.contract(p, center, factor))
            .collect()
    }
}

impl FromIterator<ColoredPoint> for PointCloud {
    fn from_iter<I: IntoIterator<Item = ColoredPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Contraction factor for `frame` of a `frames`-long cosine pulse.
///
/// `1 - amplitude * (1 + cos(2*pi*frame/frames)) / 2`: fully contracted
/// (`1 - amplitude`) at frame 0, at rest (`1`) halfway through. `frames == 0`
/// is treated as a single frame.
pub fn pulse_factor(frame: usize, frames: usize, amplitude: f64) -> f64 {
    let phase = 2.0 * PI * frame as f64 / frames.max(1) as f64;
    1.0 - amplitude * (1.0 + phase.cos()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Heart, ShapeKind, Star};
    use approx::assert_relative_eq;

    fn small() -> CloudConfig {
        CloudConfig {
            count: 2000,
            ..CloudConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let c = CloudConfig::default();
        assert_eq!((c.width, c.height, c.count, c.seed), (500, 500, 5000, 42));
    }

    #[test]
    fn test_generate_count_and_bounds() {
        for kind in [ShapeKind::Heart, ShapeKind::Star] {
            let cloud = PointCloud::generate(kind.shape().as_ref(), &small()).unwrap();
            assert_eq!(cloud.len(), 2000);
            assert!(cloud
                .points
                .iter()
                .all(|p| (0.0..500.0).contains(&p.x) && (0.0..500.0).contains(&p.y)));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = PointCloud::generate(&Heart::default(), &small()).unwrap();
        let b = PointCloud::generate(&Heart::default(), &small()).unwrap();
        assert_eq!(a, b);

        let other = CloudConfig { seed: 43, ..small() };
        let c = PointCloud::generate(&Heart::default(), &other).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_centered() {
        let cloud = PointCloud::generate(&Star::default(), &small()).unwrap();
        let (cx, _) = cloud.centroid().unwrap();
        assert!((cx - 250.0).abs() < 10.0, "cx = {cx}");
    }

    #[test]
    fn test_generate_rejects_empty_canvas() {
        let cfg = CloudConfig { width: 0, ..small() };
        assert!(matches!(
            PointCloud::generate(&Star::default(), &cfg),
            Err(PointsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_generate_gives_up() {
        let cfg = CloudConfig {
            width: 1,
            height: 1,
            count: 1,
            seed: 0,
        };
        let star = Star {
            scale: 1e6,
            ..Star::default()
        };
        assert!(matches!(
            PointCloud::generate(&star, &cfg),
            Err(PointsError::SamplingExhausted { accepted: 0, .. })
        ));
    }

    #[test]
    fn test_centroid() {
        assert_eq!(PointCloud::default().centroid(), None);
        let cloud = PointCloud::new(vec![
            ColoredPoint::new(0.0, 0.0, [0; 3]),
            ColoredPoint::new(4.0, 2.0, [0; 3]),
            ColoredPoint::new(2.0, 4.0, [0; 3]),
        ]);
        let (x, y) = cloud.centroid().unwrap();
        assert_relative_eq!(x, 2.0);
        assert_relative_eq!(y, 2.0);
    }

    #[test]
    fn test_contracted() {
        let cloud = PointCloud::new(vec![
            ColoredPoint::new(10.0, 20.0, [1, 2, 3]),
            ColoredPoint::new(30.0, 0.0, [4, 5, 6]),
        ]);
        let half = cloud.contracted((20.0, 10.0), 0.5);
        assert_relative_eq!(half.points[0].x, 15.0);
        assert_relative_eq!(half.points[0].y, 15.0);
        assert_relative_eq!(half.points[1].x, 25.0);
        assert_relative_eq!(half.points[1].y, 5.0);
        assert_eq!(half.points[1].rgb(), [4, 5, 6]);

        let collapsed = cloud.contracted((20.0, 10.0), 0.0);
        assert!(collapsed.points.iter().all(|p| p.x == 20.0 && p.y == 10.0));

        // uniform scaling keeps the centroid when scaling about it
        let c = cloud.centroid().unwrap();
        let (x, y) = cloud.contracted(c, 0.7).centroid().unwrap();
        assert_relative_eq!(x, c.0, epsilon = 1e-9);
        assert_relative_eq!(y, c.1, epsilon = 1e-9);
    }

    #[test]
    fn test_contracted_with_star_matches_uniform() {
        let cloud = PointCloud::generate(&Star::default(), &CloudConfig { count: 50, ..small() })
            .unwrap();
        let c = cloud.centroid().unwrap();
        let a = cloud.contracted(c, 0.9);
        let b = cloud.contracted_with(&Star::default(), c, 0.9);
        for (p, q) in a.points.iter().zip(&b.points) {
            assert_relative_eq!(p.x, q.x, epsilon = 1e-9);
            assert_relative_eq!(p.y, q.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pulse_factor() {
        assert_relative_eq!(pulse_factor(0, 30, 0.15), 0.85);
        assert_relative_eq!(pulse_factor(15, 30, 0.15), 1.0, epsilon = 1e-12);
        assert_relative_eq!(pulse_factor(30, 30, 0.15), 0.85, epsilon = 1e-12);
        assert_relative_eq!(pulse_factor(5, 30, 0.0), 1.0);
        assert_relative_eq!(pulse_factor(0, 0, 0.2), 0.8);
        for f in 0..30 {
            let k = pulse_factor(f, 30, 0.15);
            assert!((0.85 - 1e-12..=1.0 + 1e-12).contains(&k));
        }
    }
}
