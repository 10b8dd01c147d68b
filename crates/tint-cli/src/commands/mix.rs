//! Mix command

use crate::MixArgs;
use anyhow::{Context, Result};
use tint::{ColorKind, Mixer};
use tracing::debug;

pub fn run(args: MixArgs, kind: Option<ColorKind>) -> Result<()> {
    let kind = super::output_kind(kind, &args.color);
    let mut mixer = Mixer::with_kind(args.color, kind);
    debug!(start = %mixer.color(), %kind, "mixing");

    if let Some(v) = args.red {
        mixer.set_red(v).context("Failed to set red")?;
    }
    if let Some(v) = args.green {
        mixer.set_green(v).context("Failed to set green")?;
    }
    if let Some(v) = args.blue {
        mixer.set_blue(v).context("Failed to set blue")?;
    }
    if let Some(v) = args.hue {
        mixer.set_hue(v).context("Failed to set hue")?;
    }
    if let Some(shift) = args.hue_shift {
        let hue = mixer.hue() + shift;
        mixer.set_hue(hue).context("Failed to shift hue")?;
    }
    if let Some(v) = args.saturation {
        mixer.set_saturation(v).context("Failed to set saturation")?;
    }
    if let Some(v) = args.value {
        mixer.set_value(v).context("Failed to set value")?;
    }
    if let Some(v) = args.luminance {
        mixer.set_luminance(v).context("Failed to set luminance")?;
    }
    if let Some(v) = args.alpha {
        mixer.set_alpha(v).context("Failed to set alpha")?;
    }
    if args.complementary {
        mixer.complementary().context("Failed to complement")?;
    }

    println!("{}", mixer.color());
    Ok(())
}
