//! Hue, saturation, value.
//!
//! Hue, saturation and value are floats in `[0, 1]`; hue is cyclic and
//! stored modulo 1, so a hue of `1.0` reads back as `0.0`. Alpha is an
//! 8-bit integer like every other model.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::color::{Color, Components, check_len};
use crate::convert::{hsv_to_rgb, rgb_to_hsv};
use crate::error::{Error, Result};
use crate::kind::ColorKind;
use crate::math::{
    byte_to_unit, check_byte, check_unit, check_unit_byte, display_scaled, saturate_finite,
    unit_to_byte, wrap_unit,
};
use crate::rgb::Rgb;

/// Hue, saturation, value with 8-bit alpha.
///
/// ```rust
/// use tint_core::prelude::*;
///
/// let c = Hsv::new(0.8, 0.5, 1.0).unwrap();
/// assert_eq!(c.with_hue_wrapped(c.hue() + 0.4).unwrap().to_string(), "HSV: 72°h 50%s, 100%v, 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HsvFields")
)]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: u8,
}

impl Hsv {
    /// Opaque color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if a channel is outside `[0, 1]`
    /// or NaN.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self> {
        Self::hsva(hue, saturation, value, 0)
    }

    /// Color with explicit alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if a channel is outside `[0, 1]`
    /// or NaN.
    pub fn hsva(hue: f64, saturation: f64, value: f64, alpha: u8) -> Result<Self> {
        Ok(Self::from_parts(
            check_unit("hue", hue)?,
            check_unit("saturation", saturation)?,
            check_unit("value", value)?,
            alpha,
        ))
    }

    /// Trusted constructor; inputs are already in range.
    fn from_parts(hue: f64, saturation: f64, value: f64, alpha: u8) -> Self {
        Self {
            hue: wrap_unit(hue) + 0.0,
            saturation: saturation + 0.0,
            value: value + 0.0,
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

    /// Value in `[0, 1]`.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Copy with a new hue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `hue` is outside `[0, 1]`.
    pub fn with_hue(&self, hue: f64) -> Result<Self> {
        Ok(Self::from_parts(check_unit("hue", hue)?, self.saturation, self.value, self.alpha))
    }

    /// Copy with a new hue taken modulo 1, so any finite value is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `hue` is NaN or infinite.
    pub fn with_hue_wrapped(&self, hue: f64) -> Result<Self> {
        if !hue.is_finite() {
            return Err(Error::invalid_component("hue", hue, "finite"));
        }
        Ok(Self::from_parts(hue, self.saturation, self.value, self.alpha))
    }

    /// Copy with a new saturation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if out of range.
    pub fn with_saturation(&self, saturation: f64) -> Result<Self> {
        Self::hsva(self.hue, saturation, self.value, self.alpha)
    }

    /// Copy with a new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if out of range.
    pub fn with_value(&self, value: f64) -> Result<Self> {
        Self::hsva(self.hue, self.saturation, value, self.alpha)
    }

    pub(crate) fn half_turn(&self) -> Self {
        Self::from_parts(self.hue + 0.5, self.saturation, self.value, self.alpha)
    }
}

impl Color for Hsv {
    const KIND: ColorKind = ColorKind::Hsv;
    const CHANNELS: &'static [&'static str] = &["hue", "saturation", "value", "alpha"];

    fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(hsv_to_rgb([self.hue, self.saturation, self.value]), self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let [h, s, v] = rgb_to_hsv(rgb.unit());
        Self::from_parts(h, s, v, rgb.alpha())
    }

    fn components(&self) -> Components {
        Components::from_slice(&[self.hue, self.saturation, self.value, f64::from(self.alpha)])
    }

    fn normalized(&self) -> Components {
        Components::from_slice(&[self.hue, self.saturation, self.value, byte_to_unit(self.alpha)])
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        check_len::<Self>(values.len())?;
        Self::hsva(values[0], values[1], values[2], check_byte("alpha", values[3])?)
    }

    fn from_normalized(values: &[f64]) -> Result<Self> {
        check_len::<Self>(values.len())?;
        Self::hsva(values[0], values[1], values[2], check_unit_byte("alpha", values[3])?)
    }

    fn from_normalized_saturating(values: &[f64]) -> Self {
        let at = |i: usize| saturate_finite(values.get(i).copied().unwrap_or(0.0));
        Self::from_parts(at(0), at(1), at(2), unit_to_byte(at(3)))
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }
}

crate::impl_color_arithmetic!(Hsv);

// Validated constructors never store NaN.
impl Eq for Hsv {}

impl Hash for Hsv {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hue.to_bits().hash(state);
        self.saturation.to_bits().hash(state);
        self.value.to_bits().hash(state);
        self.alpha.hash(state);
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSV: {}°h {}%s, {}%v, {}",
            display_scaled(self.hue, 360.0),
            display_scaled(self.saturation, 100.0),
            display_scaled(self.value, 100.0),
            self.alpha
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HsvFields {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<HsvFields> for Hsv {
    type Error = Error;

    fn try_from(f: HsvFields) -> Result<Self> {
        Self::hsva(f.hue, f.saturation, f.value, f.alpha)
    }
}
