//! 8-bit RGB with alpha, the conversion hub.
//!
//! Every other model converts to [`Rgb`] directly and from it directly;
//! cross conversions compose the two directions.
//!
//! # Forms
//!
//! - components: `red, green, blue, alpha`, each `0..=255`
//! - packed integer: `alpha << 24 | red << 16 | green << 8 | blue`
//! - hex: `#RRGGBB` (see [`crate::html`])
//!
//! # Example
//!
//! ```rust
//! use tint_core::prelude::*;
//!
//! let orange = Rgb::from_html("#FF6400").unwrap();
//! assert_eq!(orange, Rgb::new(255, 100, 0));
//! assert_eq!(orange.to_int(false), 0xFF6400);
//! assert_eq!(orange.to_gray(), Gray::new(118));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::blend::{self, BlendMode, map_color_channels, multiply_channel, negative_multiply_channel};
use crate::color::{Color, Components, check_len};
use crate::error::{Error, Result};
use crate::html::{format_html, parse_html};
use crate::kind::ColorKind;
use crate::math::{byte_to_unit, check_byte, check_byte_int, saturate, saturate_finite, unit_to_byte};

/// 8-bit red, green, blue and alpha (0 opaque, 255 transparent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Rgb {
    /// Opaque color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 0)
    }

    /// Color with explicit alpha.
    #[inline]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Validating constructor for unchecked integers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if any channel is outside `0..=255`.
    pub fn try_new(red: i64, green: i64, blue: i64, alpha: i64) -> Result<Self> {
        Ok(Self::rgba(
            check_byte_int("red", red)?,
            check_byte_int("green", green)?,
            check_byte_int("blue", blue)?,
            check_byte_int("alpha", alpha)?,
        ))
    }

    /// Unpacks `alpha << 24 | red << 16 | green << 8 | blue`.
    pub const fn from_int(packed: u32) -> Self {
        let [alpha, red, green, blue] = packed.to_be_bytes();
        Self::rgba(red, green, blue, alpha)
    }

    /// Packs into an integer, leaving out alpha unless `with_alpha`.
    pub const fn to_int(&self, with_alpha: bool) -> u32 {
        let alpha = if with_alpha { self.alpha } else { 0 };
        u32::from_be_bytes([alpha, self.red, self.green, self.blue])
    }

    /// Parses `#rgb` or `#rrggbb` (the `#` is optional). Alpha is 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] for any other input.
    pub fn from_html(input: &str) -> Result<Self> {
        let [r, g, b] = parse_html(input)?;
        Ok(Self::new(r, g, b))
    }

    /// `#RRGGBB`, uppercase, alpha dropped.
    pub fn to_html(&self) -> String {
        format_html([self.red, self.green, self.blue])
    }

    /// Red channel.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green channel.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Copy with red replaced.
    pub const fn with_red(&self, red: u8) -> Self {
        Self { red, ..*self }
    }

    /// Copy with green replaced.
    pub const fn with_green(&self, green: u8) -> Self {
        Self { green, ..*self }
    }

    /// Copy with blue replaced.
    pub const fn with_blue(&self, blue: u8) -> Self {
        Self { blue, ..*self }
    }

    /// Red, green, blue normalized to `[0, 1]`, without alpha.
    #[inline]
    pub fn unit(&self) -> [f64; 3] {
        [byte_to_unit(self.red), byte_to_unit(self.green), byte_to_unit(self.blue)]
    }

    /// Quantizes normalized red, green, blue and attaches `alpha`.
    #[inline]
    pub fn from_unit(rgb: [f64; 3], alpha: u8) -> Self {
        let [r, g, b] = rgb;
        Self::rgba(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), alpha)
    }
}

impl Color for Rgb {
    const KIND: ColorKind = ColorKind::Rgb;
    const CHANNELS: &'static [&'static str] = &["red", "green", "blue", "alpha"];

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    fn components(&self) -> Components {
        [self.red, self.green, self.blue, self.alpha]
            .into_iter()
            .map(f64::from)
            .collect()
    }

    fn normalized(&self) -> Components {
        [self.red, self.green, self.blue, self.alpha]
            .into_iter()
            .map(byte_to_unit)
            .collect()
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        check_len::<Self>(values.len())?;
        Ok(Self::rgba(
            check_byte("red", values[0])?,
            check_byte("green", values[1])?,
            check_byte("blue", values[2])?,
            check_byte("alpha", values[3])?,
        ))
    }

    fn from_normalized_saturating(values: &[f64]) -> Self {
        let at = |i: usize| unit_to_byte(saturate_finite(values.get(i).copied().unwrap_or(0.0)));
        Self::rgba(at(0), at(1), at(2), at(3))
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Adds [`BlendMode::Multiply`] and [`BlendMode::NegativeMultiply`] to the
    /// interpolating blend every model has.
    fn blend<C: Color>(&self, other: &C, other_alpha: Option<u8>, mode: BlendMode) -> Result<Self> {
        let channel: fn(f64, f64, f64) -> f64 = match mode {
            BlendMode::Interpolate => return blend::interpolate(self, other, other_alpha),
            BlendMode::Multiply => multiply_channel,
            BlendMode::NegativeMultiply => negative_multiply_channel,
        };
        let opacity = blend::opacity(other_alpha.unwrap_or_else(|| other.alpha()));
        let top = self.coerce(other).normalized();
        let values = map_color_channels(&self.normalized(), &top, |a, b| saturate(channel(a, b, opacity)));
        Self::from_normalized(&values)
    }
}

crate::impl_color_arithmetic!(Rgb);

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Self::from_int(packed)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_html(s.trim())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGB: {}, {}, {}, {} ({})",
            self.red,
            self.green,
            self.blue,
            self.alpha,
            self.to_html()
        )
    }
}
