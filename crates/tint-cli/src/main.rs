//! tint - color conversion and mixing CLI
//!
//! Every command takes colors as spec strings (`#ff6400`, `rgb:255,100,0`,
//! `hsv:0.5,0.8,0.3`, `named:Teal`, `term:red`, ...).

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tint::{AnyColor, Attribute, BlendMode, ColorKind};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TINT_LOG";

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Color conversion, mixing and inspection")]
#[command(long_about = "
Converts colors between RGB, HSV, HSL, CMYK, Gray, the named-color table
and the 8-color terminal palette, and edits them channel by channel.

Examples:
  tint convert '#ff6400' -k hsl         # Convert to HSL
  tint inspect named:Teal --json        # Channels, forms, nearest entries
  tint mix rgb:255,0,0 --hue-shift 0.33 # Rotate the hue
  tint blend rgb:255,255,255 rgb:255,0,0 -a 128
  tint sequence gray:0 gray:255 -n 4    # Gradient in five steps
  tint closest '#fa0000' term:red named:Red
  tint complement hsv:0.1,1,1
  tint term '#00ff00' --text hello --attr bold
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by TINT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model to print results in (default: the input's model, RGB for convert)
    #[arg(short = 'k', long, global = true)]
    output_kind: Option<ColorKind>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert colors to another model
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show channels, forms and nearest palette entries
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Edit one color attribute by attribute
    #[command(visible_alias = "m")]
    Mix(MixArgs),

    /// Blend one color over another
    Blend(BlendArgs),

    /// Colors evenly spaced between two endpoints
    #[command(visible_alias = "seq")]
    Sequence(SequenceArgs),

    /// Pick the candidate nearest to a target
    Closest(ClosestArgs),

    /// Half-turn hue rotation
    Complement(ComplementArgs),

    /// Print text in the nearest terminal color
    Term(TermArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Colors to convert
    #[arg(required = true)]
    colors: Vec<AnyColor>,

    /// Print the `#RRGGBB` form instead
    #[arg(long, conflicts_with = "int")]
    html: bool,

    /// Print the packed 0xRRGGBB integer instead
    #[arg(long)]
    int: bool,

    /// Include alpha in the packed integer
    #[arg(long, requires = "int")]
    with_alpha: bool,
}

#[derive(Args)]
struct InspectArgs {
    /// Color to inspect
    color: AnyColor,

    /// Report native units instead of normalized channels
    #[arg(long)]
    native: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MixArgs {
    /// Starting color
    color: AnyColor,

    /// Red, 0-255
    #[arg(long)]
    red: Option<i64>,

    /// Green, 0-255
    #[arg(long)]
    green: Option<i64>,

    /// Blue, 0-255
    #[arg(long)]
    blue: Option<i64>,

    /// Alpha, 0-255
    #[arg(long)]
    alpha: Option<i64>,

    /// HSV hue, wraps around
    #[arg(long, allow_negative_numbers = true)]
    hue: Option<f64>,

    /// Added to the HSV hue, wraps around
    #[arg(long, allow_negative_numbers = true, conflicts_with = "hue")]
    hue_shift: Option<f64>,

    /// HSV saturation, 0-1
    #[arg(long)]
    saturation: Option<f64>,

    /// HSV value, 0-1
    #[arg(long)]
    value: Option<f64>,

    /// HSL luminance, 0-1
    #[arg(long)]
    luminance: Option<f64>,

    /// Rotate the hue half a turn after all other edits
    #[arg(long)]
    complementary: bool,
}

#[derive(Args)]
struct BlendArgs {
    /// Base color, its model is kept
    base: AnyColor,

    /// Color blended over the base
    other: AnyColor,

    /// Alpha of the blended color (default: its own, 0 meaning opaque)
    #[arg(short, long)]
    alpha: Option<u8>,

    /// Blend mode: interpolate, multiply, negative_multiply
    #[arg(short, long, default_value = "interpolate")]
    mode: BlendMode,
}

#[derive(Args)]
struct SequenceArgs {
    /// First color, its model is kept
    from: AnyColor,

    /// Last color
    to: AnyColor,

    /// Number of steps (prints steps + 1 colors)
    #[arg(short = 'n', long, default_value = "10")]
    steps: usize,
}

#[derive(Args)]
struct ClosestArgs {
    /// Color to match
    target: AnyColor,

    /// Candidates, first wins on ties
    #[arg(required = true)]
    candidates: Vec<AnyColor>,
}

#[derive(Args)]
struct ComplementArgs {
    /// Colors to complement
    #[arg(required = true)]
    colors: Vec<AnyColor>,
}

#[derive(Args)]
struct TermArgs {
    /// Color to approximate
    color: AnyColor,

    /// Text to print (default: the color's own textual form)
    #[arg(short, long)]
    text: Option<String>,

    /// Use as background instead of foreground
    #[arg(short, long)]
    background: bool,

    /// Extra attributes: bold, underline, blink, invert
    #[arg(long = "attr")]
    attributes: Vec<Attribute>,
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let kind = cli.output_kind;
    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, kind),
        Commands::Inspect(args) => commands::inspect::run(args, kind),
        Commands::Mix(args) => commands::mix::run(args, kind),
        Commands::Blend(args) => commands::blend::run(args, kind),
        Commands::Sequence(args) => commands::sequence::run(args, kind),
        Commands::Closest(args) => commands::closest::run(args, kind),
        Commands::Complement(args) => commands::complement::run(args, kind),
        Commands::Term(args) => commands::term::run(args),
    }
}
