//! # tint-core
//!
//! Color models and the color algebra they share.
//!
//! This crate provides the numeric core of tint:
//!
//! - [`Color`] - Trait every model implements, with the shared algebra
//!   (coercion, interpolation, sequences, distance, blending, complement,
//!   nearest match, partial updates, arithmetic)
//! - [`Rgb`], [`Hsv`], [`Hsl`], [`Cmyk`], [`Gray`] - Immutable value types
//! - [`convert`] - Conversion engine, RGB being the hub
//! - [`BlendMode`] - Compositing modes
//! - [`Persist`] - Compact binary persisted form
//! - [`html`] - `#RRGGBB` hex form
//!
//! ## Design
//!
//! Every model converts to RGB (the primitive direction) and from RGB.
//! Anything else is composed through RGB, so HSV to CMYK is
//! `Cmyk::from_rgb(&hsv.to_rgb())`. Binary operations coerce their
//! right-hand side into the left-hand side's model first:
//!
//! ```rust
//! use tint_core::prelude::*;
//!
//! let red = Rgb::new(255, 0, 0);
//! let cyan = Hsv::new(0.5, 1.0, 1.0).unwrap();
//! let mid: Rgb = red.interpolate(&cyan, 0.5).unwrap();
//! assert_eq!(mid, Rgb::new(128, 128, 128));
//! ```
//!
//! Equality is representation-exact: an [`Rgb`] and an [`Hsv`] showing the
//! same color are different types and never compare equal.
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-palette (named colors, terminal palette)
//!    +-- tint (AnyColor, Mixer, spec parsing)
//!    +-- tint-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize the value types; deserialization
//!   validates every channel

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blend;
pub mod cmyk;
pub mod color;
pub mod convert;
pub mod error;
pub mod gray;
pub mod hsl;
pub mod hsv;
pub mod html;
pub mod kind;
pub mod math;
pub mod persist;
pub mod rgb;

pub use blend::BlendMode;
pub use cmyk::Cmyk;
pub use color::{Color, Components};
pub use error::{Error, Result};
pub use gray::Gray;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use kind::ColorKind;
pub use persist::Persist;
pub use rgb::Rgb;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::blend::BlendMode;
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::kind::ColorKind;
    pub use crate::persist::Persist;
    pub use crate::{Cmyk, Gray, Hsl, Hsv, Rgb};
}
