//! Normalized buffer export command.

use crate::FlattenArgs;
use anyhow::{Context, Result};
use cube_lut::TableKind;
use std::fs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Writes the RGBA float buffer of `args.input` to `args.output`.
pub fn run(args: FlattenArgs) -> Result<()> {
    let lut = super::load_lut(&args.input)?;
    let model = cube_lut::normalize(&lut)
        .with_context(|| format!("Failed to normalize: {}", args.input.display()))?;

    if model.kind == TableKind::OneD && !args.allow_1d {
        model.require_3d()?;
    }

    let bytes = model.as_bytes();
    fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write: {}", args.output.display()))?;

    info!(
        output = %args.output.display(),
        dimension = model.dimension,
        samples = model.sample_count(),
        "wrote normalized buffer"
    );
    println!(
        "{} -> {} (dimension {}, {})",
        args.input.display(),
        args.output.display(),
        model.dimension,
        super::format_size(bytes.len() as u64)
    );
    Ok(())
}
