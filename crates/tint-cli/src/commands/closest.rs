//! Closest command

use crate::ClosestArgs;
use anyhow::{Result, bail};
use tint::ColorKind;
use tracing::{debug, trace};

pub fn run(args: ClosestArgs, kind: Option<ColorKind>) -> Result<()> {
    for (i, candidate) in args.candidates.iter().enumerate() {
        trace!(index = i, %candidate, distance = args.target.distance(candidate), "candidate");
    }

    let Some(index) = args.target.closest(&args.candidates) else {
        bail!("No candidates given");
    };
    let winner = &args.candidates[index];
    debug!(index, %winner, "closest candidate");

    let kind = super::output_kind(kind, winner);
    super::print_color(winner, kind);
    Ok(())
}
