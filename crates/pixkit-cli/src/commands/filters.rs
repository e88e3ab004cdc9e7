//! Filters command: every filter on one image

use super::{ensure_dir, load_rgba, save_pixmap};
use crate::FiltersArgs;
use anyhow::Result;
use pixkit_color::{desaturate, hue_shift, rgb_to_gray};
use pixkit_ops::{bayer, demosaic, transform, MosaicOptions, ZeroNeighbors};
use tracing::info;

pub fn run(args: FiltersArgs, verbose: u8) -> Result<()> {
    let rgba = load_rgba(&args.input)?;
    let rgb = rgba.drop_alpha()?;
    ensure_dir(&args.output)?;
    info!(
        input = %args.input.display(),
        width = rgb.width(),
        height = rgb.height(),
        "Running filters"
    );

    let options = MosaicOptions {
        pattern: args.pattern,
        zero_neighbors: if args.include_zero_neighbors {
            ZeroNeighbors::Include
        } else {
            ZeroNeighbors::Exclude
        },
    };
    let raw = bayer::simulate_bayer_mosaic_with(&rgb, &options)?;

    let outputs = [
        ("rgb.ppm", rgb.clone()),
        ("reflected.ppm", transform::reflect(&rgb)),
        ("rotated.ppm", transform::rotate(&rgb)),
        ("gray.ppm", rgb_to_gray(&rgb)?),
        ("demosaicked.ppm", demosaic::demosaic_with(&raw, &options)?),
        ("bayer.ppm", raw),
        ("shifted.ppm", hue_shift(&rgb, args.hue_shift)?),
        ("desaturated.ppm", desaturate(&rgb, args.desaturate)?),
    ];

    for (name, image) in &outputs {
        save_pixmap(&args.output.join(name), image)?;
    }

    if verbose > 0 {
        println!(
            "Wrote {} images ({}x{}) to {}",
            outputs.len(),
            rgb.width(),
            rgb.height(),
            args.output.display()
        );
    }
    Ok(())
}
