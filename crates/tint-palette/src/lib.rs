//! # tint-palette
//!
//! Closed-set color models for tint.
//!
//! - [`Named`] - The 185-entry named-color table
//! - [`Term`] - The 8-color ANSI terminal palette
//! - [`Palette`] - Immutable name ⇄ RGB table with nearest lookup
//! - [`StringColoring`] - ANSI SGR colouring for printable values
//!
//! Both tables are built on first use and never mutated afterwards, so
//! they can be read from any thread.
//!
//! ## Nearest match
//!
//! Any [`Color`] maps into a closed set by minimal
//! [`distance`](Color::distance), ties going to the first entry in table
//! order:
//!
//! ```rust
//! use tint_core::prelude::*;
//! use tint_palette::{PaletteExt, Term};
//!
//! let orange = Rgb::new(255, 100, 0);
//! assert_eq!(orange.to_term(), Term::Red);
//! assert_eq!(orange.to_named().name(), "Safety Orange (Blaze Orange)");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`Named`] and [`Term`] as their name

#![warn(missing_docs)]

pub mod ansi;
pub mod named;
pub mod palette;
pub mod term;

mod table;

pub use ansi::{Attribute, StringColoring};
pub use named::Named;
pub use palette::Palette;
pub use term::Term;

use tint_core::Color;

/// Conversion of any color into the closed-set models.
pub trait PaletteExt: Color {
    /// Nearest named color.
    fn to_named(&self) -> Named {
        Named::from_color(self)
    }

    /// Nearest terminal color.
    fn to_term(&self) -> Term {
        Term::from_color(self)
    }
}

impl<C: Color> PaletteExt for C {}
