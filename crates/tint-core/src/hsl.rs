//! Hue, saturation, luminance.
//!
//! Same channel rules as [`Hsv`](crate::Hsv): floats in `[0, 1]`, hue
//! stored modulo 1, 8-bit alpha.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::color::{Color, Components, check_len};
use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::error::{Error, Result};
use crate::kind::ColorKind;
use crate::math::{
    byte_to_unit, check_byte, check_unit, check_unit_byte, display_scaled, saturate_finite,
    unit_to_byte, wrap_unit,
};
use crate::rgb::Rgb;

/// Hue, saturation, luminance with 8-bit alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HslFields")
)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    luminance: f64,
    alpha: u8,
}

impl Hsl {
    /// Opaque color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if a channel is outside `[0, 1]`
    /// or NaN.
    pub fn new(hue: f64, saturation: f64, luminance: f64) -> Result<Self> {
        Self::hsla(hue, saturation, luminance, 0)
    }

    /// Color with explicit alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if a channel is outside `[0, 1]`
    /// or NaN.
    pub fn hsla(hue: f64, saturation: f64, luminance: f64, alpha: u8) -> Result<Self> {
        Ok(Self::from_parts(
            check_unit("hue", hue)?,
            check_unit("saturation", saturation)?,
            check_unit("luminance", luminance)?,
            alpha,
        ))
    }

    fn from_parts(hue: f64, saturation: f64, luminance: f64, alpha: u8) -> Self {
        Self {
            hue: wrap_unit(hue) + 0.0,
            saturation: saturation + 0.0,
            luminance: luminance + 0.0,
            alpha,
        }
    }

    /// Hue in `[0, 1)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation in `[0, 1]`.
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Luminance in `[0, 1]`.
    #[inline]
    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    /// Copy with a new hue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `hue` is outside `[0, 1]`.
    pub fn with_hue(&self, hue: f64) -> Result<Self> {
        Self::hsla(hue, self.saturation, self.luminance, self.alpha)
    }

    /// Copy with a new hue taken modulo 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `hue` is NaN or infinite.
    pub fn with_hue_wrapped(&self, hue: f64) -> Result<Self> {
        if !hue.is_finite() {
            return Err(Error::invalid_component("hue", hue, "finite"));
        }
        Ok(Self::from_parts(hue, self.saturation, self.luminance, self.alpha))
    }

    /// Copy with a new saturation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if out of range.
    pub fn with_saturation(&self, saturation: f64) -> Result<Self> {
        Self::hsla(self.hue, saturation, self.luminance, self.alpha)
    }

    /// Copy with a new luminance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if out of range.
    pub fn with_luminance(&self, luminance: f64) -> Result<Self> {
        Self::hsla(self.hue, self.saturation, luminance, self.alpha)
    }
}

impl Color for Hsl {
    const KIND: ColorKind = ColorKind::Hsl;
    const CHANNELS: &'static [&'static str] = &["hue", "saturation", "luminance", "alpha"];

    fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(hsl_to_rgb([self.hue, self.saturation, self.luminance]), self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let [h, s, l] = rgb_to_hsl(rgb.unit());
        Self::from_parts(h, s, l, rgb.alpha())
    }

    fn components(&self) -> Components {
        Components::from_slice(&[self.hue, self.saturation, self.luminance, f64::from(self.alpha)])
    }

    fn normalized(&self) -> Components {
        Components::from_slice(&[self.hue, self.saturation, self.luminance, byte_to_unit(self.alpha)])
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        check_len::<Self>(values.len())?;
        Self::hsla(values[0], values[1], values[2], check_byte("alpha", values[3])?)
    }

    fn from_normalized(values: &[f64]) -> Result<Self> {
        check_len::<Self>(values.len())?;
        Self::hsla(values[0], values[1], values[2], check_unit_byte("alpha", values[3])?)
    }

    fn from_normalized_saturating(values: &[f64]) -> Self {
        let at = |i: usize| saturate_finite(values.get(i).copied().unwrap_or(0.0));
        Self::from_parts(at(0), at(1), at(2), unit_to_byte(at(3)))
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }
}

crate::impl_color_arithmetic!(Hsl);

impl Eq for Hsl {}

impl Hash for Hsl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hue.to_bits().hash(state);
        self.saturation.to_bits().hash(state);
        self.luminance.to_bits().hash(state);
        self.alpha.hash(state);
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSL: {}°h {}%s, {}%l, {}",
            display_scaled(self.hue, 360.0),
            display_scaled(self.saturation, 100.0),
            display_scaled(self.luminance, 100.0),
            self.alpha
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HslFields {
    hue: f64,
    saturation: f64,
    luminance: f64,
    alpha: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<HslFields> for Hsl {
    type Error = Error;

    fn try_from(f: HslFields) -> Result<Self> {
        Self::hsla(f.hue, f.saturation, f.luminance, f.alpha)
    }
}
