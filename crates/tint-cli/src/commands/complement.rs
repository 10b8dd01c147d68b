//! Complement command

use crate::ComplementArgs;
use anyhow::Result;
use tint::ColorKind;

pub fn run(args: ComplementArgs, kind: Option<ColorKind>) -> Result<()> {
    for color in &args.colors {
        let kind = super::output_kind(kind, color);
        super::print_color(&color.complement(), kind);
    }
    Ok(())
}
