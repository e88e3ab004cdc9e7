//! Pixmap diff command (exact, no tolerance)

use crate::DiffArgs;
use anyhow::{Result, bail};
use pixkit_io::{compare_pixmap_files, PixmapDiff};

pub fn run(args: DiffArgs, verbose: u8) -> Result<()> {
    let diff = compare_pixmap_files(&args.a, &args.b)?;

    if verbose > 0 {
        println!("Comparing {} vs {}", args.a.display(), args.b.display());
    }

    match &diff {
        PixmapDiff::Identical => {
            println!("{diff}");
            Ok(())
        }
        PixmapDiff::Samples { mismatches, .. } if args.limit > 0 && mismatches.len() > args.limit => {
            let shown: String = diff
                .to_string()
                .lines()
                .take(args.limit)
                .map(|l| format!("{l}\n"))
                .collect();
            print!("{shown}");
            println!("... {} more", mismatches.len() - args.limit);
            bail!("FAIL: {} differing samples", mismatches.len())
        }
        _ => {
            println!("{diff}");
            bail!("FAIL: images differ")
        }
    }
}
