//! Blend command

use crate::BlendArgs;
use anyhow::{Context, Result};
use tint::ColorKind;
use tracing::debug;

pub fn run(args: BlendArgs, kind: Option<ColorKind>) -> Result<()> {
    let kind = super::output_kind(kind, &args.base);
    debug!(base = %args.base, other = %args.other, mode = %args.mode, alpha = ?args.alpha, "blending");

    let blended = args
        .base
        .blend(&args.other, args.alpha, args.mode)
        .with_context(|| format!("Failed to blend {} over {}", args.other, args.base))?;
    super::print_color(&blended, kind);
    Ok(())
}
