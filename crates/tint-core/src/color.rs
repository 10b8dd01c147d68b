//! The [`Color`] trait and the color algebra shared by every model.
//!
//! A color model only has to report its channels as an ordered list,
//! rebuild itself from one, and convert to and from RGB. Everything else
//! (coercion, interpolation, sequences, distance, blending, complement,
//! nearest match, partial updates, arithmetic) is implemented once here.
//!
//! # Channels
//!
//! Channel lists always end with alpha. They come in two flavours:
//!
//! - **native** ([`Color::components`]) - the stored units: `0..=255` for
//!   integer channels, `[0, 1]` for hue/saturation/value/luminance
//! - **normalized** ([`Color::normalized`]) - every channel in `[0, 1]`
//!
//! # Example
//!
//! ```rust
//! use tint_core::prelude::*;
//!
//! let black = Gray::new(0);
//! let steps = black.sequence(&Gray::new(20), 5).unwrap();
//! let whites: Vec<u8> = steps.iter().map(|g| g.white()).collect();
//! assert_eq!(whites, [0, 4, 8, 12, 16, 20]);
//!
//! let silver = Gray::new(50);
//! let candidates = [Gray::new(20), Gray::new(60), Gray::new(45)];
//! assert_eq!(silver.closest(&candidates), Some(&Gray::new(45)));
//! ```

use std::any::Any;
use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

use crate::blend::{self, BlendMode};
use crate::cmyk::Cmyk;
use crate::error::{Error, Result};
use crate::gray::Gray;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::kind::ColorKind;
use crate::math::{check_unit, lerp, saturate_finite};
use crate::rgb::Rgb;

/// Ordered channel list, alpha last.
pub type Components = SmallVec<[f64; 5]>;

/// A color model.
///
/// Implementors provide the channel list in/out and the primitive RGB
/// conversion; the algebra comes for free.
///
/// Values are immutable: every operation returns a new color of the same
/// type. Binary operations accept any other [`Color`] and coerce it to
/// `Self` first.
pub trait Color: Clone + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// Runtime tag of this model.
    const KIND: ColorKind;

    /// Channel names in component order, `"alpha"` last.
    const CHANNELS: &'static [&'static str];

    /// Converts to RGB. The primitive conversion every model provides.
    fn to_rgb(&self) -> Rgb;

    /// Builds this model from RGB.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Channel values in native units.
    fn components(&self) -> Components;

    /// Channel values normalized to `[0, 1]`.
    fn normalized(&self) -> Components;

    /// Validating constructor from native units.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the list length is not
    ///   `CHANNELS.len()`
    /// - [`Error::InvalidComponent`] if a value is out of range or NaN
    fn from_components(values: &[f64]) -> Result<Self>;

    /// Infallible constructor from normalized values.
    ///
    /// Values are clamped to `[0, 1]` (NaN counts as 0), missing trailing
    /// channels are 0 and extra ones are ignored.
    fn from_normalized_saturating(values: &[f64]) -> Self;

    /// Alpha in `0..=255`, 0 opaque, 255 fully transparent.
    fn alpha(&self) -> u8;

    /// Validating constructor from normalized values.
    ///
    /// Integer channels are scaled by 255 and rounded.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the list length is not
    ///   `CHANNELS.len()`
    /// - [`Error::InvalidComponent`] if a value is outside `[0, 1]` or NaN
    fn from_normalized(values: &[f64]) -> Result<Self> {
        check_len::<Self>(values.len())?;
        for (&channel, &v) in Self::CHANNELS.iter().zip(values) {
            check_unit(channel, v)?;
        }
        Ok(Self::from_normalized_saturating(values))
    }

    /// Converts any color into this model.
    ///
    /// A value that already is `Self` is returned unchanged; anything else
    /// goes through RGB.
    fn from_color<C: Color>(other: &C) -> Self {
        if let Some(same) = (other as &dyn Any).downcast_ref::<Self>() {
            return same.clone();
        }
        Self::from_rgb(&other.to_rgb())
    }

    /// Converts `other` into the same model as `self`.
    fn coerce<C: Color>(&self, other: &C) -> Self {
        Self::from_color(other)
    }

    /// Color between `self` (position 0) and `other` (position 1).
    ///
    /// Every channel, alpha included, is mixed linearly in the model's native
    /// units and rounded to its resolution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `position` is outside `[0, 1]`.
    fn interpolate<C: Color>(&self, other: &C, position: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&position) {
            return Err(Error::invalid_argument(format!(
                "position must be between 0 and 1, got {position}"
            )));
        }
        let a = self.components();
        let b = self.coerce(other).components();
        let values: Components = a.iter().zip(b.iter()).map(|(&a, &b)| lerp(a, b, position)).collect();
        Self::from_components(&values)
    }

    /// `steps + 1` colors from `self` to `other` at positions
    /// `0, 1/steps, ..., 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `steps` is 0.
    fn sequence<C: Color>(&self, other: &C, steps: usize) -> Result<Vec<Self>> {
        if steps == 0 {
            return Err(Error::invalid_argument("steps must be at least 1"));
        }
        (0..=steps)
            .map(|i| self.interpolate(other, i as f64 / steps as f64))
            .collect()
    }

    /// Mean squared per-channel difference of the normalized channels.
    ///
    /// Purely mathematical, with no perceptual weighting. 0 means
    /// identical.
    fn distance<C: Color>(&self, other: &C) -> f64 {
        let a = self.normalized();
        let b = self.coerce(other).normalized();
        let sum: f64 = a.iter().zip(b.iter()).map(|(a, b)| (a - b) * (a - b)).sum();
        sum / a.len() as f64
    }

    /// Composites `other` over `self`.
    ///
    /// `other_alpha` replaces the alpha of `other` when given. The result
    /// keeps `self`'s alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedBlendMode`] for modes other than
    /// [`BlendMode::Interpolate`]; RGB overrides this to add its modes.
    fn blend<C: Color>(&self, other: &C, other_alpha: Option<u8>, mode: BlendMode) -> Result<Self> {
        match mode {
            BlendMode::Interpolate => blend::interpolate(self, other, other_alpha),
            mode => Err(Error::unsupported_blend_mode(mode.name(), Self::KIND.name())),
        }
    }

    /// Hue rotated by half a turn, computed in HSV.
    fn complement(&self) -> Self {
        let hsv = self.to_hsv();
        Self::from_color(&hsv.half_turn())
    }

    /// The candidate with the smallest [`distance`](Self::distance).
    ///
    /// Ties go to the first candidate. Returns `None` for an empty slice.
    fn closest<'a, C: Color>(&self, candidates: &'a [C]) -> Option<&'a C> {
        let mut best: Option<(&C, f64)> = None;
        for candidate in candidates {
            let d = self.distance(candidate);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((candidate, d));
            }
        }
        if let Some((_, d)) = best {
            trace!(model = %Self::KIND, candidates = candidates.len(), distance = d, "closest match");
        }
        best.map(|(c, _)| c)
    }

    /// New color with the given native components replaced.
    ///
    /// `None` entries keep the current value; missing trailing entries
    /// count as `None`.
    ///
    /// ```rust
    /// use tint_core::prelude::*;
    ///
    /// let c = Rgb::new(255, 0, 100).with(&[None, Some(50.0), None, Some(255.0)]).unwrap();
    /// assert_eq!(c, Rgb::rgba(255, 50, 100, 255));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if more values than channels are given
    /// - [`Error::InvalidComponent`] if a replacement is out of range
    fn with(&self, values: &[Option<f64>]) -> Result<Self> {
        if values.len() > Self::CHANNELS.len() {
            return Err(Error::invalid_argument(format!(
                "{} takes at most {} components, got {}",
                Self::KIND,
                Self::CHANNELS.len(),
                values.len()
            )));
        }
        let mut current = self.components();
        for (slot, value) in current.iter_mut().zip(values) {
            if let Some(v) = value {
                *slot = *v;
            }
        }
        Self::from_components(&current)
    }

    /// New color with only the alpha channel replaced.
    ///
    /// # Errors
    ///
    /// Closed-set models reject any alpha but 0 with
    /// [`Error::InvalidComponent`].
    fn with_alpha(&self, alpha: u8) -> Result<Self> {
        let mut current = self.components();
        if let Some(last) = current.last_mut() {
            *last = f64::from(alpha);
        }
        Self::from_components(&current)
    }

    /// Per-channel sum of the normalized values, clamped to `[0, 1]`.
    fn add_color<C: Color>(&self, other: &C) -> Self {
        combine(self, other, |a, b| a + b)
    }

    /// Per-channel difference of the normalized values, clamped to `[0, 1]`.
    fn sub_color<C: Color>(&self, other: &C) -> Self {
        combine(self, other, |a, b| a - b)
    }

    /// `(channel name, value)` pairs, native or normalized.
    fn named_components(&self, normalized: bool) -> Vec<(&'static str, f64)> {
        let values = if normalized { self.normalized() } else { self.components() };
        Self::CHANNELS.iter().copied().zip(values).collect()
    }

    /// HSV representation.
    fn to_hsv(&self) -> Hsv {
        Hsv::from_color(self)
    }

    /// HSL representation.
    fn to_hsl(&self) -> Hsl {
        Hsl::from_color(self)
    }

    /// CMYK representation.
    fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_color(self)
    }

    /// Grayscale representation.
    fn to_gray(&self) -> Gray {
        Gray::from_color(self)
    }

    /// `#RRGGBB` form of the RGB representation, alpha dropped.
    fn to_html(&self) -> String {
        self.to_rgb().to_html()
    }
}

fn combine<S: Color, C: Color>(base: &S, other: &C, f: impl Fn(f64, f64) -> f64) -> S {
    let a = base.normalized();
    let b = base.coerce(other).normalized();
    let values: Components = a
        .iter()
        .zip(b.iter())
        .map(|(&a, &b)| saturate_finite(f(a, b)))
        .collect();
    S::from_normalized_saturating(&values)
}

/// Checks a component list length against `C::CHANNELS`.
pub(crate) fn check_len<C: Color>(len: usize) -> Result<()> {
    if len == C::CHANNELS.len() {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "{} expects {} components ({}), got {len}",
            C::KIND,
            C::CHANNELS.len(),
            C::CHANNELS.join(", ")
        )))
    }
}

/// Implements `&a + &b` and `&a - &b` for a [`Color`] type, accepting any
/// other color on the right-hand side.
#[macro_export]
macro_rules! impl_color_arithmetic {
    ($ty:ty) => {
        impl<C: $crate::Color> ::std::ops::Add<&C> for &$ty {
            type Output = $ty;

            fn add(self, rhs: &C) -> $ty {
                $crate::Color::add_color(self, rhs)
            }
        }

        impl<C: $crate::Color> ::std::ops::Sub<&C> for &$ty {
            type Output = $ty;

            fn sub(self, rhs: &C) -> $ty {
                $crate::Color::sub_color(self, rhs)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_coerce_same_type_is_identity() {
        let hsv = Hsv::hsva(0.123_456_789, 0.5, 0.25, 7).unwrap();
        assert_eq!(Hsv::from_color(&hsv), hsv);
        assert_eq!(hsv.to_hsv(), hsv);
    }

    #[test]
    fn test_interpolate_bounds() {
        let a = Rgb::new(10, 20, 30);
        let b = Hsv::new(0.5, 0.8, 0.3).unwrap();
        assert_eq!(a.interpolate(&b, 0.0).unwrap(), a);
        assert_eq!(a.interpolate(&b, 1.0).unwrap(), a.coerce(&b));
        assert!(a.interpolate(&b, 1.5).is_err());
        assert!(a.interpolate(&b, -0.1).is_err());
        assert!(a.interpolate(&b, f64::NAN).is_err());
    }

    #[test]
    fn test_interpolate_gray() {
        let c = Gray::new(0).interpolate(&Gray::new(100), 0.3).unwrap();
        assert_eq!(c.white(), 30);
    }

    #[test]
    fn test_interpolate_rounds_half_up_in_native_units() {
        let mid = |a: u8, b: u8| Gray::new(a).interpolate(&Gray::new(b), 0.5).unwrap();
        assert_eq!(mid(16, 17), Gray::new(17));
        assert_eq!(mid(15, 18), Gray::new(17));
        assert_eq!(mid(0, 255), Gray::new(128));
        let seq = Gray::new(16).sequence(&Gray::new(17), 2).unwrap();
        assert_eq!(seq, [Gray::new(16), Gray::new(17), Gray::new(17)]);
    }

    #[test]
    fn test_interpolate_float_model_exact_ends() {
        let a = Hsv::new(0.1, 0.2, 0.3).unwrap();
        let b = Hsv::hsva(0.3, 0.6, 0.9, 200).unwrap();
        assert_eq!(a.interpolate(&b, 0.0).unwrap(), a);
        assert_eq!(a.interpolate(&b, 1.0).unwrap(), b);
        let mid = a.interpolate(&b, 0.5).unwrap();
        assert_abs_diff_eq!(mid.hue(), 0.2, epsilon = 1e-12);
        assert_eq!(mid.alpha(), 100);
    }

    #[test]
    fn test_sequence() {
        let seq = Gray::new(0).sequence(&Gray::new(20), 5).unwrap();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.first(), Some(&Gray::new(0)));
        assert_eq!(seq.last(), Some(&Gray::new(20)));
        assert!(Gray::new(0).sequence(&Gray::new(20), 0).is_err());
    }

    #[test]
    fn test_distance() {
        let a = Gray::gray_alpha(0, 0);
        let b = Gray::gray_alpha(255, 255);
        assert_abs_diff_eq!(a.distance(&b), 1.0);
        assert_abs_diff_eq!(a.distance(&a), 0.0);
        assert!(Rgb::new(255, 0, 0).distance(&Rgb::new(0, 0, 255)) > 0.4);
    }

    #[test]
    fn test_closest_ties_first() {
        let c = Gray::new(50);
        let candidates = [Gray::new(40), Gray::new(60), Gray::new(45)];
        assert_eq!(c.closest(&candidates), Some(&Gray::new(45)));
        let black = Rgb::new(0, 0, 0);
        let tied = [Rgb::new(10, 0, 0), Rgb::new(0, 10, 0)];
        assert_eq!(black.closest(&tied), Some(&Rgb::new(10, 0, 0)));
        let empty: [Gray; 0] = [];
        assert_eq!(c.closest(&empty), None);
    }

    #[test]
    fn test_with() {
        let c = Rgb::new(255, 0, 100);
        assert_eq!(c.with(&[None, Some(50.0)]).unwrap(), Rgb::new(255, 50, 100));
        assert!(c.with(&[Some(300.0)]).is_err());
        assert!(c.with(&[None; 5]).is_err());
    }

    #[test]
    fn test_with_alpha() {
        let c = Cmyk::new(1, 2, 3, 4).with_alpha(128).unwrap();
        assert_eq!(c.alpha(), 128);
        assert_eq!(c.key(), 4);
    }

    #[test]
    fn test_complement() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(red.complement(), Rgb::new(0, 255, 255));
        let hsv = Hsv::new(0.8, 0.5, 0.5).unwrap();
        assert_abs_diff_eq!(hsv.complement().hue(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic_clamps() {
        let a = Rgb::new(200, 100, 0);
        let b = Rgb::new(100, 50, 10);
        assert_eq!(&a + &b, Rgb::new(255, 150, 10));
        assert_eq!(&b - &a, Rgb::new(0, 0, 10));
        let g = &Gray::new(10) + &Rgb::new(30, 30, 30);
        assert_eq!(g, Gray::new(40));
    }

    #[test]
    fn test_from_normalized_length_check() {
        assert!(Rgb::from_normalized(&[0.0, 0.0, 0.0]).is_err());
        assert!(Rgb::from_normalized(&[0.0, 0.0, 0.0, 1.5]).is_err());
        assert_eq!(
            Rgb::from_normalized(&[0.0, 0.5, 0.75, 1.0]).unwrap(),
            Rgb::rgba(0, 128, 191, 255)
        );
    }

    #[test]
    fn test_named_components() {
        let pairs = Gray::gray_alpha(51, 0).named_components(true);
        assert_eq!(pairs[0].0, "white");
        assert_abs_diff_eq!(pairs[0].1, 0.2);
        assert_eq!(pairs[1], ("alpha", 0.0));
    }
}
