//! Attribute-level color editing.
//!
//! A [`Mixer`] holds one color and an output model fixed at construction.
//! Every attribute write converts the current color into the model owning
//! that attribute, swaps the channel and converts back:
//!
//! | attribute | owning model |
//! |---|---|
//! | red, green, blue | RGB |
//! | hue, saturation, value | HSV |
//! | luminance | HSL |
//! | alpha | the stored color itself |
//!
//! Hue writes wrap modulo 1. Every other write is validated by the owning
//! model's constructor and fails the same way direct construction would.
//!
//! # Example
//!
//! ```rust
//! use tint::prelude::*;
//!
//! let mut mixer = Rgb::new(255, 0, 0).to_mixer();
//! mixer.set_hue(mixer.hue() + 1.0 / 3.0).unwrap();
//! assert_eq!(mixer.to_rgb(), Rgb::new(0, 255, 0));
//!
//! mixer.set_alpha(i64::from(mixer.alpha()) + 128).unwrap();
//! assert_eq!(mixer.to_rgb(), Rgb::rgba(0, 255, 0, 128));
//! ```

use tint_core::math::check_byte_int;
use tint_core::{Cmyk, Color, ColorKind, Hsl, Hsv, Result, Rgb};
use tracing::trace;

use crate::any::AnyColor;

/// Mutable editor over one color of a fixed output model.
///
/// Not synchronized; share it across threads behind a lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixer {
    color: AnyColor,
    kind: ColorKind,
}

impl Mixer {
    /// Wraps `color`, keeping its model as the output model.
    pub fn new(color: impl Into<AnyColor>) -> Self {
        let color = color.into();
        Self { kind: color.kind(), color }
    }

    /// Wraps `color` converted to `kind`, which becomes the output model.
    pub fn with_kind(color: impl Into<AnyColor>, kind: ColorKind) -> Self {
        Self { color: color.into().convert(kind), kind }
    }

    /// Output model.
    pub fn kind(&self) -> ColorKind {
        self.kind
    }

    /// Current color, always of [`kind`](Self::kind).
    pub fn color(&self) -> &AnyColor {
        &self.color
    }

    /// Consumes the mixer, returning the current color.
    pub fn into_color(self) -> AnyColor {
        self.color
    }

    /// Current color as RGB.
    pub fn to_rgb(&self) -> Rgb {
        self.color.to_rgb()
    }

    /// Current color as HSV.
    pub fn to_hsv(&self) -> Hsv {
        self.color.to_hsv()
    }

    /// Current color as HSL.
    pub fn to_hsl(&self) -> Hsl {
        self.color.to_hsl()
    }

    /// Current color as CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        self.color.to_cmyk()
    }

    // Reads

    /// Red channel, `0..=255`.
    pub fn red(&self) -> u8 {
        self.to_rgb().red()
    }

    /// Green channel, `0..=255`.
    pub fn green(&self) -> u8 {
        self.to_rgb().green()
    }

    /// Blue channel, `0..=255`.
    pub fn blue(&self) -> u8 {
        self.to_rgb().blue()
    }

    /// Alpha of the stored color.
    pub fn alpha(&self) -> u8 {
        self.color.alpha()
    }

    /// HSV hue, `[0, 1)`.
    pub fn hue(&self) -> f64 {
        self.to_hsv().hue()
    }

    /// HSV saturation.
    pub fn saturation(&self) -> f64 {
        self.to_hsv().saturation()
    }

    /// HSV value.
    pub fn value(&self) -> f64 {
        self.to_hsv().value()
    }

    /// HSL luminance.
    pub fn luminance(&self) -> f64 {
        self.to_hsl().luminance()
    }

    // Writes

    /// Sets the red channel.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::InvalidComponent`] outside `0..=255`.
    pub fn set_red(&mut self, red: i64) -> Result<&mut Self> {
        let red = check_byte_int("red", red)?;
        let rgb = self.to_rgb().with_red(red);
        Ok(self.store("red", rgb))
    }

    /// Sets the green channel.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::InvalidComponent`] outside `0..=255`.
    pub fn set_green(&mut self, green: i64) -> Result<&mut Self> {
        let green = check_byte_int("green", green)?;
        let rgb = self.to_rgb().with_green(green);
        Ok(self.store("green", rgb))
    }

    /// Sets the blue channel.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::InvalidComponent`] outside `0..=255`.
    pub fn set_blue(&mut self, blue: i64) -> Result<&mut Self> {
        let blue = check_byte_int("blue", blue)?;
        let rgb = self.to_rgb().with_blue(blue);
        Ok(self.store("blue", rgb))
    }

    /// Sets alpha on the stored color directly.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::InvalidComponent`] outside `0..=255`, or
    /// for any non-zero alpha on a named or terminal color.
    pub fn set_alpha(&mut self, alpha: i64) -> Result<&mut Self> {
        let alpha = check_byte_int("alpha", alpha)?;
        let color = self.color.with_alpha(alpha)?;
        Ok(self.store("alpha", color))
    }

    /// Sets the HSV hue. Any finite value is accepted and wrapped into
    /// `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::InvalidComponent`] for NaN or infinity.
    pub fn set_hue(&mut self, hue: f64) -> Result<&mut Self> {
        let hsv = self.to_hsv().with_hue_wrapped(hue)?;
        Ok(self.store("hue", hsv))
    }

    /// Sets the HSV saturation.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::InvalidComponent`] outside `[0, 1]`.
    pub fn set_saturation(&mut self, saturation: f64) -> Result<&mut Self> {
        let hsv = self.to_hsv().with_saturation(saturation)?;
        Ok(self.store("saturation", hsv))
    }

    /// Sets the HSV value.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::InvalidComponent`] outside `[0, 1]`.
    pub fn set_value(&mut self, value: f64) -> Result<&mut Self> {
        let hsv = self.to_hsv().with_value(value)?;
        Ok(self.store("value", hsv))
    }

    /// Sets the HSL luminance.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::InvalidComponent`] outside `[0, 1]`.
    pub fn set_luminance(&mut self, luminance: f64) -> Result<&mut Self> {
        let hsl = self.to_hsl().with_luminance(luminance)?;
        Ok(self.store("luminance", hsl))
    }

    /// Rotates the hue half a turn.
    ///
    /// # Errors
    ///
    /// Never fails for a valid current color; the signature mirrors
    /// [`set_hue`](Self::set_hue).
    pub fn complementary(&mut self) -> Result<&mut Self> {
        let hue = self.hue() + 0.5;
        self.set_hue(hue)
    }

    fn store(&mut self, attribute: &'static str, color: impl Into<AnyColor>) -> &mut Self {
        self.color = color.into().convert(self.kind);
        trace!(attribute, kind = %self.kind, color = %self.color, "mixer write");
        self
    }
}

impl From<AnyColor> for Mixer {
    fn from(color: AnyColor) -> Self {
        Self::new(color)
    }
}

/// `to_mixer` on every color type.
pub trait MixerExt: Color + Into<AnyColor> {
    /// A [`Mixer`] over this color, keeping its model.
    fn to_mixer(&self) -> Mixer {
        Mixer::new(self.clone())
    }
}

impl<C: Color + Into<AnyColor>> MixerExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tint_core::{Error, Gray};
    use tint_palette::{Named, Term};

    #[test]
    fn test_hue_rotation_keeps_rgb_model() {
        let mut mixer = Rgb::new(255, 0, 0).to_mixer();
        mixer.set_hue(mixer.hue() + 1.0 / 3.0).unwrap();
        assert_eq!(mixer.kind(), ColorKind::Rgb);
        assert_eq!(*mixer.color(), AnyColor::Rgb(Rgb::new(0, 255, 0)));
        mixer.set_alpha(i64::from(mixer.alpha()) + 128).unwrap();
        assert_eq!(mixer.into_color(), AnyColor::Rgb(Rgb::rgba(0, 255, 0, 128)));
    }

    #[test]
    fn test_hue_wraps() {
        let mut mixer = Hsv::new(0.8, 1.0, 1.0).unwrap().to_mixer();
        mixer.set_hue(mixer.hue() + 0.4).unwrap();
        assert_abs_diff_eq!(mixer.hue(), 0.2, epsilon = 1e-9);
        mixer.set_hue(-0.25).unwrap();
        assert_abs_diff_eq!(mixer.hue(), 0.75, epsilon = 1e-9);
        assert!(mixer.set_hue(f64::NAN).unwrap_err().is_component_error());
    }

    #[test]
    fn test_rgb_writes() {
        let mut mixer = Mixer::with_kind(Gray::new(0), ColorKind::Rgb);
        mixer.set_red(10).unwrap().set_green(20).unwrap().set_blue(30).unwrap();
        assert_eq!(mixer.to_rgb(), Rgb::new(10, 20, 30));
        assert_eq!((mixer.red(), mixer.green(), mixer.blue()), (10, 20, 30));
    }

    #[test]
    fn test_invalid_writes_leave_state() {
        let mut mixer = Rgb::new(1, 2, 3).to_mixer();
        let err = mixer.set_red(256).unwrap_err();
        assert!(matches!(err, Error::InvalidComponent { channel: "red", .. }));
        assert!(mixer.set_saturation(1.5).is_err());
        assert!(mixer.set_value(-0.1).is_err());
        assert!(mixer.set_luminance(f64::NAN).is_err());
        assert!(mixer.set_alpha(-1).is_err());
        assert_eq!(mixer.to_rgb(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_output_model_is_fixed() {
        let mut mixer = Gray::new(100).to_mixer();
        mixer.set_red(255).unwrap();
        assert_eq!(mixer.kind(), ColorKind::Gray);
        assert_eq!(*mixer.color(), AnyColor::Gray(Gray::new(152)));

        let mut mixer = Term::Red.to_mixer();
        mixer.complementary().unwrap();
        assert_eq!(*mixer.color(), AnyColor::Term(Term::Cyan));
        assert!(mixer.set_alpha(5).is_err());
    }

    #[test]
    fn test_hsv_and_hsl_writes() {
        let mut mixer = Mixer::new(Hsl::new(0.0, 1.0, 0.5).unwrap());
        mixer.set_value(0.5).unwrap();
        assert_abs_diff_eq!(mixer.value(), 0.5, epsilon = 1.0 / 255.0);
        assert_abs_diff_eq!(mixer.luminance(), 0.25, epsilon = 1.0 / 255.0);
        mixer.set_luminance(0.5).unwrap();
        assert_abs_diff_eq!(mixer.luminance(), 0.5, epsilon = 1e-9);
        mixer.set_saturation(0.0).unwrap();
        assert_abs_diff_eq!(mixer.saturation(), 0.0, epsilon = 1e-9);
        assert_eq!(mixer.kind(), ColorKind::Hsl);
    }

    #[test]
    fn test_complementary() {
        let mut mixer = Named::new("Red").unwrap().to_mixer();
        mixer.complementary().unwrap();
        assert_eq!(mixer.color().to_string(), "Aqua");
        let mut mixer = Rgb::new(255, 100, 0).to_mixer();
        mixer.complementary().unwrap();
        assert_eq!(mixer.to_rgb(), Rgb::new(0, 155, 255));
    }

    #[test]
    fn test_conversions() {
        let mixer = Mixer::new(Rgb::new(255, 100, 0));
        assert_eq!(mixer.to_cmyk(), Cmyk::new(0, 155, 255, 0));
        assert_abs_diff_eq!(mixer.to_hsl().luminance(), 0.5, epsilon = 1e-9);
        assert_eq!(Mixer::from(AnyColor::from(Term::Blue)).kind(), ColorKind::Term);
    }
}
