//! # pixkit-points
//!
//! Seeded, colored point clouds rendered into pixkit buffers.
//!
//! Each shape is a [`PointShape`] strategy producing the shared
//! [`ColoredPoint`] type; everything downstream (centroid, pulse
//! contraction, rendering, JSON) works on [`PointCloud`] regardless of
//! shape.
//!
//! # Example
//!
//! ```rust
//! use pixkit_points::{pulse_factor, CloudConfig, PointCloud, ShapeKind};
//!
//! let shape = ShapeKind::Heart.shape();
//! let config = CloudConfig { count: 200, ..CloudConfig::default() };
//! let cloud = PointCloud::generate(shape.as_ref(), &config).unwrap();
//!
//! let center = cloud.centroid().unwrap();
//! let frame = cloud.contracted_with(shape.as_ref(), center, pulse_factor(0, 30, 0.15));
//! let image = frame.render(config.width, config.height, 1);
//! assert_eq!(image.dimensions(), (500, 500));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cloud;
mod error;
pub mod json;
pub mod point;
pub mod render;
pub mod shape;

pub use cloud::{pulse_factor, CloudConfig, PointCloud};
pub use error::{PointsError, PointsResult};
pub use point::ColoredPoint;
pub use render::BACKGROUND;
pub use shape::{Heart, PointShape, ShapeKind, Star};
