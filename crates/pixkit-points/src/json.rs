//! JSON persistence.
//!
//! Format: `{"points": [{"x": 1.5, "y": 2.0, "r": 255, "g": 0, "b": 0}, ...]}`,
//! written pretty-printed with 2-space indentation. On load, color values
//! outside `[0, 255]` are clamped with a warning and fractional values are
//! truncated.

use crate::cloud::PointCloud;
use crate::point::ColoredPoint;
use crate::PointsResult;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct LenientCloud {
    points: Vec<LenientPoint>,
}

#[derive(Deserialize)]
struct LenientPoint {
    x: f64,
    y: f64,
    r: f64,
    g: f64,
    b: f64,
}

impl PointCloud {
    /// Serializes the cloud to a JSON string.
    pub fn to_json(&self) -> PointsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a cloud from JSON text.
    ///
    /// # Errors
    ///
    /// [`PointsError::Json`](crate::PointsError::Json) for malformed JSON, a
    /// missing `points` array or a point lacking `x`, `y`, `r`, `g` or `b`.
    pub fn from_json(text: &str) -> PointsResult<Self> {
        let raw: LenientCloud = serde_json::from_str(text)?;
        Ok(raw.into_cloud())
    }

    /// Writes the cloud to `path`.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> PointsResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        debug!(path = %path.display(), points = self.len(), "Wrote point cloud");
        Ok(())
    }

    /// Reads a cloud from `path`. See [`PointCloud::from_json`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> PointsResult<Self> {
        let path = path.as_ref();
        let raw: LenientCloud = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        let cloud = raw.into_cloud();
        debug!(path = %path.display(), points = cloud.len(), "Loaded point cloud");
        Ok(cloud)
    }
}

impl LenientCloud {
    fn into_cloud(self) -> PointCloud {
        self.points
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                let in_range = |v: f64| (0.0..=255.0).contains(&v);
                if !(in_range(p.r) && in_range(p.g) && in_range(p.b)) {
                    warn!(index = i, r = p.r, g = p.g, b = p.b, "Point color out of range, clamping");
                }
                ColoredPoint::new(p.x, p.y, [channel(p.r), channel(p.g), channel(p.b)])
            })
            .collect()
    }
}

fn channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
