//! Naive subtractive CMYK, 8 bits per channel.
//!
//! No ink model or profile is involved: the conversion is the textbook
//! `key = 1 - max(r, g, b)` formula.

use std::fmt;

use crate::color::{Color, Components, check_len};
use crate::convert::{cmyk_to_rgb, rgb_to_cmyk};
use crate::error::Result;
use crate::kind::ColorKind;
use crate::math::{byte_to_unit, check_byte, check_byte_int, saturate_finite, unit_to_byte};
use crate::rgb::Rgb;

/// Cyan, magenta, yellow, key (black) and alpha, each `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    cyan: u8,
    magenta: u8,
    yellow: u8,
    key: u8,
    alpha: u8,
}

impl Cmyk {
    /// Opaque color.
    #[inline]
    pub const fn new(cyan: u8, magenta: u8, yellow: u8, key: u8) -> Self {
        Self::cmyka(cyan, magenta, yellow, key, 0)
    }

    /// Color with explicit alpha.
    #[inline]
    pub const fn cmyka(cyan: u8, magenta: u8, yellow: u8, key: u8, alpha: u8) -> Self {
        Self { cyan, magenta, yellow, key, alpha }
    }

    /// Validating constructor for unchecked integers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidComponent`] naming the first channel
    /// outside `0..=255`.
    pub fn try_new(cyan: i64, magenta: i64, yellow: i64, key: i64, alpha: i64) -> Result<Self> {
        Ok(Self::cmyka(
            check_byte_int("cyan", cyan)?,
            check_byte_int("magenta", magenta)?,
            check_byte_int("yellow", yellow)?,
            check_byte_int("key", key)?,
            check_byte_int("alpha", alpha)?,
        ))
    }

    /// Cyan channel.
    #[inline]
    pub const fn cyan(&self) -> u8 {
        self.cyan
    }

    /// Magenta channel.
    #[inline]
    pub const fn magenta(&self) -> u8 {
        self.magenta
    }

    /// Yellow channel.
    #[inline]
    pub const fn yellow(&self) -> u8 {
        self.yellow
    }

    /// Key channel.
    #[inline]
    pub const fn key(&self) -> u8 {
        self.key
    }

    /// Alias for [`key`](Self::key).
    pub const fn black(&self) -> u8 {
        self.key
    }

    fn unit(&self) -> [f64; 4] {
        [
            byte_to_unit(self.cyan),
            byte_to_unit(self.magenta),
            byte_to_unit(self.yellow),
            byte_to_unit(self.key),
        ]
    }
}

impl Color for Cmyk {
    const KIND: ColorKind = ColorKind::Cmyk;
    const CHANNELS: &'static [&'static str] = &["cyan", "magenta", "yellow", "key", "alpha"];

    fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(cmyk_to_rgb(self.unit()), self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let [c, m, y, k] = rgb_to_cmyk(rgb.unit());
        Self::cmyka(
            unit_to_byte(c),
            unit_to_byte(m),
            unit_to_byte(y),
            unit_to_byte(k),
            rgb.alpha(),
        )
    }

    fn components(&self) -> Components {
        [self.cyan, self.magenta, self.yellow, self.key, self.alpha]
            .into_iter()
            .map(f64::from)
            .collect()
    }

    fn normalized(&self) -> Components {
        [self.cyan, self.magenta, self.yellow, self.key, self.alpha]
            .into_iter()
            .map(byte_to_unit)
            .collect()
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        check_len::<Self>(values.len())?;
        Ok(Self::cmyka(
            check_byte("cyan", values[0])?,
            check_byte("magenta", values[1])?,
            check_byte("yellow", values[2])?,
            check_byte("key", values[3])?,
            check_byte("alpha", values[4])?,
        ))
    }

    fn from_normalized_saturating(values: &[f64]) -> Self {
        let at = |i: usize| unit_to_byte(saturate_finite(values.get(i).copied().unwrap_or(0.0)));
        Self::cmyka(at(0), at(1), at(2), at(3), at(4))
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }
}

crate::impl_color_arithmetic!(Cmyk);

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CMYK: {}C, {}M, {}Y, {}K, {}a",
            self.cyan, self.magenta, self.yellow, self.key, self.alpha
        )
    }
}
