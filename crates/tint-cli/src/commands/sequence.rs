//! Sequence command

use crate::SequenceArgs;
use anyhow::{Context, Result};
use tint::ColorKind;
use tracing::debug;

pub fn run(args: SequenceArgs, kind: Option<ColorKind>) -> Result<()> {
    let kind = super::output_kind(kind, &args.from);
    debug!(from = %args.from, to = %args.to, steps = args.steps, "building sequence");

    let colors = args
        .from
        .sequence(&args.to, args.steps)
        .context("Failed to build sequence")?;
    for color in &colors {
        super::print_color(color, kind);
    }
    Ok(())
}
