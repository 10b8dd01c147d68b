//! # tint
//!
//! Color models, conversions and a shared color algebra.
//!
//! This is the umbrella crate. It re-exports the value types from
//! `tint-core` and `tint-palette` and adds the pieces that need all seven
//! models at once:
//!
//! - [`AnyColor`] - One color of any model, chosen at runtime
//! - [`Mixer`] - Attribute-level editor with a fixed output model
//! - Textual color specs (`rgb:255,100,0`, `#f09`, `named:Teal`, ...)
//!   through [`FromStr`](std::str::FromStr) on [`AnyColor`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tint::prelude::*;
//!
//! let orange = Rgb::new(255, 100, 0);
//! assert_eq!(orange.to_gray(), Gray::new(118));
//! assert_eq!(orange.to_cmyk(), Cmyk::new(0, 155, 255, 0));
//! assert_eq!(orange.to_term(), Term::Red);
//!
//! let white = Rgb::new(255, 255, 255);
//! let pink = white.blend(&Rgb::new(255, 0, 0), Some(128), BlendMode::Interpolate).unwrap();
//! assert_eq!(pink, Rgb::new(255, 128, 128));
//!
//! let mut mixer = orange.to_mixer();
//! mixer.set_luminance(0.25).unwrap();
//! assert_eq!(mixer.kind(), ColorKind::Rgb);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core      Color trait, RGB/HSV/HSL/CMYK/Gray, errors, binary form
//!    ^
//! tint-palette   Named and Term closed sets, ANSI colouring
//!    ^
//! tint           AnyColor, Mixer, spec parsing (this crate)
//!    ^
//! tint-cli       `tint` binary
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize every color type and [`AnyColor`]

#![warn(missing_docs)]

pub mod any;
pub mod mixer;
mod parse;

pub use any::AnyColor;
pub use mixer::{Mixer, MixerExt};

pub use tint_core::{
    BlendMode, Cmyk, Color, ColorKind, Components, Error, Gray, Hsl, Hsv, Persist, Result, Rgb,
    blend, convert, html, math,
};
pub use tint_palette::{Attribute, Named, Palette, PaletteExt, StringColoring, Term, ansi};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::any::AnyColor;
    pub use crate::mixer::{Mixer, MixerExt};
    pub use tint_core::prelude::*;
    pub use tint_palette::{Named, PaletteExt, StringColoring, Term};
}
