//! 8-bit grayscale.

use std::fmt;

use crate::color::{Color, Components, check_len};
use crate::error::Result;
use crate::kind::ColorKind;
use crate::math::{BYTE_MAX, byte_to_unit, check_byte, check_byte_int, saturate_finite, unit_to_byte};
use crate::rgb::Rgb;

/// White level and alpha, each `0..=255`.
///
/// Converting from RGB averages the three channels:
///
/// ```rust
/// use tint_core::prelude::*;
///
/// let g = Gray::from_color(&Rgb::new(255, 100, 0));
/// assert_eq!(g.white(), 118);
/// assert_eq!(g.black(), 137);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gray {
    white: u8,
    alpha: u8,
}

impl Gray {
    /// Opaque gray.
    #[inline]
    pub const fn new(white: u8) -> Self {
        Self::gray_alpha(white, 0)
    }

    /// Gray with explicit alpha.
    #[inline]
    pub const fn gray_alpha(white: u8, alpha: u8) -> Self {
        Self { white, alpha }
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidComponent`] if a channel is outside
    /// `0..=255`.
    pub fn try_new(white: i64, alpha: i64) -> Result<Self> {
        Ok(Self::gray_alpha(check_byte_int("white", white)?, check_byte_int("alpha", alpha)?))
    }

    /// White level.
    #[inline]
    pub const fn white(&self) -> u8 {
        self.white
    }

    /// `255 - white`.
    #[inline]
    pub const fn black(&self) -> u8 {
        u8::MAX - self.white
    }
}

impl Color for Gray {
    const KIND: ColorKind = ColorKind::Gray;
    const CHANNELS: &'static [&'static str] = &["white", "alpha"];

    fn to_rgb(&self) -> Rgb {
        Rgb::rgba(self.white, self.white, self.white, self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let sum = f64::from(rgb.red()) + f64::from(rgb.green()) + f64::from(rgb.blue());
        Self::gray_alpha((sum / 3.0).round().min(BYTE_MAX) as u8, rgb.alpha())
    }

    fn components(&self) -> Components {
        Components::from_slice(&[f64::from(self.white), f64::from(self.alpha)])
    }

    fn normalized(&self) -> Components {
        Components::from_slice(&[byte_to_unit(self.white), byte_to_unit(self.alpha)])
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        check_len::<Self>(values.len())?;
        Ok(Self::gray_alpha(check_byte("white", values[0])?, check_byte("alpha", values[1])?))
    }

    fn from_normalized_saturating(values: &[f64]) -> Self {
        let at = |i: usize| unit_to_byte(saturate_finite(values.get(i).copied().unwrap_or(0.0)));
        Self::gray_alpha(at(0), at(1))
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }
}

crate::impl_color_arithmetic!(Gray);

impl fmt::Display for Gray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gray: {} {}a", self.white, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_average() {
        assert_eq!(Rgb::new(255, 100, 0).to_gray(), Gray::new(118));
        assert_eq!(Rgb::rgba(1, 2, 4, 7).to_gray(), Gray::gray_alpha(2, 7));
        assert_eq!(Rgb::new(255, 255, 255).to_gray(), Gray::new(255));
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(Gray::gray_alpha(30, 5).to_rgb(), Rgb::rgba(30, 30, 30, 5));
    }

    #[test]
    fn test_black() {
        assert_eq!(Gray::new(0).black(), 255);
        assert_eq!(Gray::new(200).black(), 55);
    }

    #[test]
    fn test_validation() {
        assert!(Gray::try_new(255, 255).is_ok());
        assert!(Gray::try_new(256, 0).is_err());
        assert!(Gray::from_components(&[12.0]).is_err());
        assert_eq!(Gray::from_components(&[12.0, 0.0]).unwrap(), Gray::new(12));
    }

    #[test]
    fn test_display() {
        assert_eq!(Gray::new(118).to_string(), "Gray: 118 0a");
    }
}
