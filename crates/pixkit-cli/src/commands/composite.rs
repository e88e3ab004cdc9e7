//! Composite command: "over" a stack of PNG layers

use super::{load_rgba, save_pixmap};
use crate::CompositeArgs;
use anyhow::{Context, Result, bail};
use pixkit_ops::composite::over_stack;
use tracing::info;

pub fn run(args: CompositeArgs, verbose: u8) -> Result<()> {
    let mut layers = Vec::with_capacity(args.layers.len() + 1);
    layers.push(load_rgba(&args.bottom)?);
    for path in &args.layers {
        let layer = load_rgba(path)?;
        if layer.dimensions() != layers[0].dimensions() {
            bail!(
                "Layer {} is {}x{}, expected {}x{}",
                path.display(),
                layer.width(),
                layer.height(),
                layers[0].width(),
                layers[0].height()
            );
        }
        layers.push(layer);
    }
    info!(layers = layers.len(), "Compositing");

    let merged = over_stack(&layers).context("Compositing failed")?;
    let rgb = merged.drop_alpha()?;
    save_pixmap(&args.output, &rgb)?;

    if verbose > 0 {
        println!("Composited {} layers into {}", layers.len(), args.output.display());
    }
    Ok(())
}
