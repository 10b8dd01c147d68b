//! CLI command implementations

pub mod blend;
pub mod closest;
pub mod complement;
pub mod convert;
pub mod inspect;
pub mod mix;
pub mod sequence;
pub mod term;

use tint::{AnyColor, ColorKind};

/// Output model: the `--output-kind` flag, else the model of `first`.
pub fn output_kind(requested: Option<ColorKind>, first: &AnyColor) -> ColorKind {
    requested.unwrap_or_else(|| first.kind())
}

/// Prints `color` converted to `kind`.
pub fn print_color(color: &AnyColor, kind: ColorKind) {
    println!("{}", color.convert(kind));
}
