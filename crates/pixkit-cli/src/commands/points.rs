//! Points command: point cloud generation and pulse frames

use super::{ensure_dir, save_pixmap};
use crate::PointsArgs;
use anyhow::{Context, Result};
use pixkit_points::{pulse_factor, CloudConfig, PointCloud};
use tracing::info;

pub fn run(args: PointsArgs, verbose: u8) -> Result<()> {
    let shape = args.shape.shape();
    let name = shape.name();
    ensure_dir(&args.output)?;

    let cloud = match &args.json {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "Loading point cloud");
            PointCloud::load_json(path)
                .with_context(|| format!("Failed to load: {}", path.display()))?
        }
        json => {
            let config = CloudConfig {
                width: args.width,
                height: args.height,
                count: args.count,
                seed: args.seed,
            };
            let cloud = PointCloud::generate(shape.as_ref(), &config)
                .with_context(|| format!("Failed to generate {name} points"))?;
            if let Some(path) = json {
                cloud
                    .save_json(path)
                    .with_context(|| format!("Failed to save: {}", path.display()))?;
                info!(path = %path.display(), points = cloud.len(), "Saved point cloud");
            }
            cloud
        }
    };

    save_pixmap(
        &args.output.join(format!("{name}_static.ppm")),
        &cloud.render(args.width, args.height, args.radius),
    )?;

    let center = cloud.centroid().context("Point cloud is empty")?;
    info!(x = center.0, y = center.1, "Centroid");

    for frame in 0..args.frames {
        let factor = pulse_factor(frame, args.frames, args.amplitude);
        let image = cloud
            .contracted_with(shape.as_ref(), center, factor)
            .render(args.width, args.height, args.radius);
        save_pixmap(&args.output.join(format!("{name}_frame_{frame:03}.ppm")), &image)?;
        if verbose > 0 {
            println!("Frame {frame}/{} (contraction: {factor:.3})", args.frames);
        }
    }

    if verbose > 0 {
        println!(
            "Rendered {} points, {} frames to {}",
            cloud.len(),
            args.frames,
            args.output.display()
        );
    }
    Ok(())
}
