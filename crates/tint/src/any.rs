//! A color of any model, chosen at runtime.
//!
//! [`AnyColor`] is a tagged variant over the seven models. It is what the
//! [`Mixer`](crate::Mixer) stores, what the text parser produces and what
//! the CLI passes around. Operations dispatch on the variant and keep the
//! left-hand side's model, exactly like the statically typed [`Color`]
//! algebra does.
//!
//! ```rust
//! use tint::prelude::*;
//!
//! let c: AnyColor = Rgb::new(255, 100, 0).into();
//! let hsl = c.convert(ColorKind::Hsl);
//! assert_eq!(hsl.kind(), ColorKind::Hsl);
//! assert!(hsl.distance(&c) < 1e-9);
//! ```

use std::fmt;

use tint_core::persist::Persist;
use tint_core::{
    BlendMode, Cmyk, Color, ColorKind, Components, Error, Gray, Hsl, Hsv, Result, Rgb,
};
use tint_palette::{Named, Term};

/// Runs `$body` with `$c` bound to the inner value of whatever variant
/// `$color` holds.
macro_rules! dispatch {
    ($color:expr, $c:ident => $body:expr) => {
        match $color {
            AnyColor::Rgb($c) => $body,
            AnyColor::Hsv($c) => $body,
            AnyColor::Hsl($c) => $body,
            AnyColor::Cmyk($c) => $body,
            AnyColor::Gray($c) => $body,
            AnyColor::Named($c) => $body,
            AnyColor::Term($c) => $body,
        }
    };
}

/// One color value in any of the seven models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyColor {
    /// [`Rgb`] value.
    Rgb(Rgb),
    /// [`Hsv`] value.
    Hsv(Hsv),
    /// [`Hsl`] value.
    Hsl(Hsl),
    /// [`Cmyk`] value.
    Cmyk(Cmyk),
    /// [`Gray`] value.
    Gray(Gray),
    /// [`Named`] value.
    Named(Named),
    /// [`Term`] value.
    Term(Term),
}

impl AnyColor {
    /// Model of the held value.
    pub fn kind(&self) -> ColorKind {
        dispatch!(self, c => color_kind(c))
    }

    /// Converts into a statically known model.
    ///
    /// A value already of model `C` comes back unchanged.
    pub fn to_model<C: Color>(&self) -> C {
        dispatch!(self, c => C::from_color(c))
    }

    /// Converts into the model named by `kind`.
    pub fn convert(&self, kind: ColorKind) -> AnyColor {
        match kind {
            ColorKind::Rgb => Self::Rgb(self.to_model()),
            ColorKind::Hsv => Self::Hsv(self.to_model()),
            ColorKind::Hsl => Self::Hsl(self.to_model()),
            ColorKind::Cmyk => Self::Cmyk(self.to_model()),
            ColorKind::Gray => Self::Gray(self.to_model()),
            ColorKind::Named => Self::Named(self.to_model()),
            ColorKind::Term => Self::Term(self.to_model()),
        }
    }

    /// RGB representation.
    pub fn to_rgb(&self) -> Rgb {
        dispatch!(self, c => c.to_rgb())
    }

    /// HSV representation.
    pub fn to_hsv(&self) -> Hsv {
        self.to_model()
    }

    /// HSL representation.
    pub fn to_hsl(&self) -> Hsl {
        self.to_model()
    }

    /// CMYK representation.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_model()
    }

    /// `#RRGGBB` form.
    pub fn to_html(&self) -> String {
        self.to_rgb().to_html()
    }

    /// Alpha in `0..=255`.
    pub fn alpha(&self) -> u8 {
        dispatch!(self, c => c.alpha())
    }

    /// Channel names of the held model, alpha last.
    pub fn channels(&self) -> &'static [&'static str] {
        dispatch!(self, c => channels_of(c))
    }

    /// Native components.
    pub fn components(&self) -> Components {
        dispatch!(self, c => c.components())
    }

    /// Components normalized to `[0, 1]`.
    pub fn normalized(&self) -> Components {
        dispatch!(self, c => c.normalized())
    }

    /// `(channel, value)` pairs, see [`Color::named_components`].
    pub fn named_components(&self, normalized: bool) -> Vec<(&'static str, f64)> {
        dispatch!(self, c => c.named_components(normalized))
    }

    /// See [`Color::with_alpha`].
    ///
    /// # Errors
    ///
    /// Closed-set models reject a non-zero alpha.
    pub fn with_alpha(&self, alpha: u8) -> Result<AnyColor> {
        dispatch!(self, c => c.with_alpha(alpha).map(AnyColor::from))
    }

    /// See [`Color::with`].
    ///
    /// # Errors
    ///
    /// Propagates the model's validation errors.
    pub fn with(&self, values: &[Option<f64>]) -> Result<AnyColor> {
        dispatch!(self, c => c.with(values).map(AnyColor::from))
    }

    /// See [`Color::interpolate`]. The result has `self`'s model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `position` is outside `[0, 1]`.
    pub fn interpolate(&self, other: &AnyColor, position: f64) -> Result<AnyColor> {
        dispatch!(self, a => dispatch!(other, b => a.interpolate(b, position).map(AnyColor::from)))
    }

    /// See [`Color::sequence`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `steps` is 0.
    pub fn sequence(&self, other: &AnyColor, steps: usize) -> Result<Vec<AnyColor>> {
        dispatch!(self, a => dispatch!(other, b => a
            .sequence(b, steps)
            .map(|seq| seq.into_iter().map(AnyColor::from).collect())))
    }

    /// See [`Color::distance`], measured in `self`'s model.
    pub fn distance(&self, other: &AnyColor) -> f64 {
        dispatch!(self, a => dispatch!(other, b => a.distance(b)))
    }

    /// See [`Color::blend`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedBlendMode`] if `self`'s model does not
    /// support `mode`.
    pub fn blend(&self, other: &AnyColor, other_alpha: Option<u8>, mode: BlendMode) -> Result<AnyColor> {
        dispatch!(self, a => dispatch!(other, b => a.blend(b, other_alpha, mode).map(AnyColor::from)))
    }

    /// See [`Color::complement`].
    pub fn complement(&self) -> AnyColor {
        dispatch!(self, c => AnyColor::from(c.complement()))
    }

    /// Index of the nearest candidate, ties going to the first.
    pub fn closest(&self, candidates: &[AnyColor]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            let d = self.distance(candidate);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Per-channel clamped sum, see [`Color::add_color`].
    pub fn add(&self, other: &AnyColor) -> AnyColor {
        dispatch!(self, a => dispatch!(other, b => AnyColor::from(a.add_color(b))))
    }

    /// Per-channel clamped difference, see [`Color::sub_color`].
    pub fn sub(&self, other: &AnyColor) -> AnyColor {
        dispatch!(self, a => dispatch!(other, b => AnyColor::from(a.sub_color(b))))
    }
}

fn color_kind<C: Color>(_: &C) -> ColorKind {
    C::KIND
}

fn channels_of<C: Color>(_: &C) -> &'static [&'static str] {
    C::CHANNELS
}

impl Default for AnyColor {
    fn default() -> Self {
        Self::Rgb(Rgb::default())
    }
}

macro_rules! impl_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyColor {
                fn from(c: $variant) -> Self {
                    Self::$variant(c)
                }
            }

            impl TryFrom<AnyColor> for $variant {
                type Error = Error;

                fn try_from(c: AnyColor) -> Result<Self> {
                    match c {
                        AnyColor::$variant(inner) => Ok(inner),
                        other => Err(Error::invalid_argument(format!(
                            "expected {} color, got {}",
                            ColorKind::$variant,
                            other.kind()
                        ))),
                    }
                }
            }
        )*
    };
}

impl_conversions!(Rgb, Hsv, Hsl, Cmyk, Gray, Named, Term);

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, c => fmt::Display::fmt(c, f))
    }
}

impl Persist for AnyColor {
    /// Kind tag byte followed by the model's own payload.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![self.kind().tag()];
        out.extend(dispatch!(self, c => c.to_bytes()));
        out
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (&tag, payload) = bytes
            .split_first()
            .ok_or_else(|| Error::invalid_format("empty color payload"))?;
        let kind = ColorKind::from_tag(tag)
            .ok_or_else(|| Error::invalid_format(format!("unknown color kind tag {tag}")))?;
        Ok(match kind {
            ColorKind::Rgb => Self::Rgb(Rgb::from_bytes(payload)?),
            ColorKind::Hsv => Self::Hsv(Hsv::from_bytes(payload)?),
            ColorKind::Hsl => Self::Hsl(Hsl::from_bytes(payload)?),
            ColorKind::Cmyk => Self::Cmyk(Cmyk::from_bytes(payload)?),
            ColorKind::Gray => Self::Gray(Gray::from_bytes(payload)?),
            ColorKind::Named => Self::Named(Named::from_bytes(payload)?),
            ColorKind::Term => Self::Term(Term::from_bytes(payload)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<AnyColor> {
        vec![
            Rgb::rgba(255, 100, 0, 3).into(),
            Hsv::new(0.5, 0.8, 0.3).unwrap().into(),
            Hsl::hsla(0.25, 0.5, 0.5, 9).unwrap().into(),
            Cmyk::cmyka(10, 20, 30, 40, 50).into(),
            Gray::gray_alpha(118, 1).into(),
            Named::new("Teal").unwrap().into(),
            Term::Purple.into(),
        ]
    }

    #[test]
    fn test_kind_and_identity_convert() {
        for (c, kind) in samples().into_iter().zip(ColorKind::ALL) {
            assert_eq!(c.kind(), kind);
            assert_eq!(c.convert(kind), c);
        }
    }

    #[test]
    fn test_convert_via_rgb() {
        let c = AnyColor::from(Rgb::new(255, 100, 0));
        assert_eq!(c.convert(ColorKind::Gray), AnyColor::Gray(Gray::new(118)));
        assert_eq!(c.convert(ColorKind::Cmyk), AnyColor::Cmyk(Cmyk::new(0, 155, 255, 0)));
        assert_eq!(c.convert(ColorKind::Term), AnyColor::Term(Term::Red));
    }

    #[test]
    fn test_try_from() {
        let c = AnyColor::from(Gray::new(5));
        assert_eq!(Gray::try_from(c).unwrap(), Gray::new(5));
        let err = Rgb::try_from(c).unwrap_err();
        assert!(err.to_string().contains("expected RGB color, got Gray"));
    }

    #[test]
    fn test_mixed_algebra_keeps_left_model() {
        let gray = AnyColor::from(Gray::new(0));
        let white = AnyColor::from(Rgb::new(255, 255, 255));
        let mid = gray.interpolate(&white, 0.5).unwrap();
        assert_eq!(mid, AnyColor::Gray(Gray::new(128)));
        let seq = gray.sequence(&white, 4).unwrap();
        assert_eq!(seq.len(), 5);
        assert!(seq.iter().all(|c| c.kind() == ColorKind::Gray));
        assert_eq!(gray.add(&white), AnyColor::Gray(Gray::new(255)));
        assert_eq!(white.sub(&white), AnyColor::Rgb(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_blend_dispatch() {
        let white = AnyColor::from(Rgb::new(255, 255, 255));
        let red = AnyColor::from(Hsv::new(0.0, 1.0, 1.0).unwrap());
        let out = white.blend(&red, Some(128), BlendMode::Interpolate).unwrap();
        assert_eq!(out, AnyColor::Rgb(Rgb::new(255, 128, 128)));
        assert!(red.blend(&white, None, BlendMode::Multiply).is_err());
        assert!(white.blend(&red, None, BlendMode::Multiply).is_ok());
    }

    #[test]
    fn test_closest() {
        let target = AnyColor::from(Rgb::new(250, 0, 0));
        let candidates = [
            AnyColor::from(Term::Blue),
            AnyColor::from(Named::new("Red").unwrap()),
            AnyColor::from(Rgb::new(255, 0, 0)),
        ];
        assert_eq!(target.closest(&candidates), Some(1));
        assert_eq!(target.closest(&[]), None);
    }

    #[test]
    fn test_persist_roundtrip() {
        for c in samples() {
            let bytes = c.to_bytes();
            assert_eq!(bytes[0], c.kind().tag());
            assert_eq!(AnyColor::from_bytes(&bytes).unwrap(), c);
        }
        assert!(AnyColor::from_bytes(&[]).unwrap_err().is_format_error());
        assert!(AnyColor::from_bytes(&[9, 0]).unwrap_err().is_format_error());
    }

    #[test]
    fn test_display_delegates() {
        assert_eq!(AnyColor::from(Gray::new(118)).to_string(), "Gray: 118 0a");
        assert_eq!(AnyColor::from(Term::Cyan).to_string(), "cyan");
        assert_eq!(AnyColor::from(Rgb::new(1, 2, 3)).channels(), ["red", "green", "blue", "alpha"]);
    }
}
