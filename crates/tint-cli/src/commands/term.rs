//! Term command

use crate::TermArgs;
use anyhow::Result;
use tint::{PaletteExt, StringColoring};
use tracing::debug;

pub fn run(args: TermArgs) -> Result<()> {
    let term = args.color.to_rgb().to_term();
    debug!(color = %args.color, %term, "nearest terminal color");

    let text = args.text.unwrap_or_else(|| args.color.to_string());
    let mut out = if args.background { text.on(term) } else { text.fg(term) };
    for attribute in args.attributes {
        out = out.attr(attribute);
    }
    println!("{out}");
    Ok(())
}
