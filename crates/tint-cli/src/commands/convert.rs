//! Convert command

use crate::ConvertArgs;
use anyhow::Result;
use tint::ColorKind;
use tracing::debug;

pub fn run(args: ConvertArgs, kind: Option<ColorKind>) -> Result<()> {
    let kind = kind.unwrap_or(ColorKind::Rgb);
    debug!(count = args.colors.len(), %kind, "converting");

    for color in &args.colors {
        if args.html {
            println!("{}", color.to_html());
        } else if args.int {
            println!("0x{:08X}", color.to_rgb().to_int(args.with_alpha));
        } else {
            super::print_color(color, kind);
        }
    }
    Ok(())
}
