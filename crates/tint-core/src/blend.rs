//! Blend modes for compositing one color over another.
//!
//! Every color model supports [`BlendMode::Interpolate`]; RGB additionally
//! supports the multiplicative modes.
//!
//! # Blend Modes
//!
//! - [`BlendMode::Interpolate`] - weighted mix by the top color's opacity
//! - [`BlendMode::Multiply`] - darken: `a * value(b, t)`
//! - [`BlendMode::NegativeMultiply`] - lighten: `1 - (1 - a) * value(1 - b, t)`
//!
//! where `value(v, t) = v + t - t * v` and `t = 1 - opacity` is the top
//! color's transparency, so an opaque top color multiplies fully and a
//! transparent one leaves the base unchanged.
//!
//! Alpha follows the model's convention (0 = opaque, 255 = transparent),
//! so the opacity of the top color is `(255 - alpha) / 255`. The alpha of
//! the blended result is always the bottom color's alpha.
//!
//! # Example
//!
//! ```rust
//! use tint_core::blend::{multiply_channel, BlendMode};
//!
//! let mode: BlendMode = "negative_multiply".parse().unwrap();
//! assert_eq!(mode, BlendMode::NegativeMultiply);
//! assert!((multiply_channel(0.5, 0.5, 1.0) - 0.25).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, Components};
use crate::error::{Error, Result};
use crate::math::{byte_to_unit, lerp};

/// Blend mode for [`Color::blend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Per-channel linear mix weighted by opacity. Supported by every model.
    #[default]
    Interpolate,
    /// Multiply (darken). RGB only.
    Multiply,
    /// Inverse multiply (lighten, "screen"). RGB only.
    NegativeMultiply,
}

impl BlendMode {
    /// Mode name as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Interpolate => "interpolate",
            Self::Multiply => "multiply",
            Self::NegativeMultiply => "negative_multiply",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BlendMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "interpolate" => Ok(Self::Interpolate),
            "multiply" | "mult" => Ok(Self::Multiply),
            "negative_multiply" | "screen" => Ok(Self::NegativeMultiply),
            _ => Err(Error::unsupported_blend_mode(s, "any model")),
        }
    }
}

/// Opacity of a color given its alpha byte.
#[inline]
pub fn opacity(alpha: u8) -> f64 {
    1.0 - byte_to_unit(alpha)
}

/// `value(v, t) = v + t - t * v`
#[inline]
fn value(v: f64, t: f64) -> f64 {
    v + t - t * v
}

/// Multiply one normalized channel `a` by `b` at the given opacity.
#[inline]
pub fn multiply_channel(a: f64, b: f64, opacity: f64) -> f64 {
    a * value(b, 1.0 - opacity)
}

/// Negative-multiply one normalized channel `a` by `b` at the given opacity.
#[inline]
pub fn negative_multiply_channel(a: f64, b: f64, opacity: f64) -> f64 {
    1.0 - (1.0 - a) * value(1.0 - b, 1.0 - opacity)
}

/// Applies `f` to every color channel of `base` and `top`, keeping the
/// base alpha (last channel) untouched.
pub(crate) fn map_color_channels(
    base: &Components,
    top: &Components,
    f: impl Fn(f64, f64) -> f64,
) -> Components {
    let last = base.len().saturating_sub(1);
    base.iter()
        .zip(top.iter())
        .enumerate()
        .map(|(i, (&a, &b))| if i == last { a } else { f(a, b) })
        .collect()
}

/// [`BlendMode::Interpolate`] for any color model.
///
/// Channels are mixed in the base model's native units. `top_alpha` overrides the top color's own alpha when given.
///
/// # Errors
///
/// Propagates construction errors of the result type, which cannot occur
/// for in-range inputs.
pub fn interpolate<S: Color, T: Color>(base: &S, top: &T, top_alpha: Option<u8>) -> Result<S> {
    let weight = opacity(top_alpha.unwrap_or_else(|| top.alpha()));
    let top = base.coerce(top);
    let values = map_color_channels(&base.components(), &top.components(), |a, b| lerp(a, b, weight));
    S::from_components(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("interpolate".parse::<BlendMode>().unwrap(), BlendMode::Interpolate);
        assert_eq!("Multiply".parse::<BlendMode>().unwrap(), BlendMode::Multiply);
        assert_eq!("negative-multiply".parse::<BlendMode>().unwrap(), BlendMode::NegativeMultiply);
        let err = "overlay".parse::<BlendMode>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedBlendMode { .. }));
    }

    #[test]
    fn test_opacity() {
        assert_eq!(opacity(0), 1.0);
        assert_eq!(opacity(255), 0.0);
    }

    #[test]
    fn test_multiply_channels() {
        // Fully opaque top: plain multiply / screen.
        assert!((multiply_channel(0.8, 0.2, 1.0) - 0.16).abs() < 1e-12);
        assert!((negative_multiply_channel(0.8, 0.2, 1.0) - 0.84).abs() < 1e-12);
        // Fully transparent top leaves the base alone.
        assert!((multiply_channel(0.8, 0.2, 0.0) - 0.8).abs() < 1e-12);
        assert!((negative_multiply_channel(0.8, 0.2, 0.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_interpolate_keeps_base_alpha() {
        use crate::gray::Gray;

        let base = Gray::gray_alpha(16, 9);
        let top = Gray::gray_alpha(17, 200);
        // Opacity just over one half lands past 16.5 and rounds up.
        let half = interpolate(&base, &top, Some(127)).unwrap();
        assert_eq!(half.white(), 17);
        assert_eq!(half.alpha(), 9);
        assert_eq!(interpolate(&base, &top, Some(0)).unwrap(), Gray::gray_alpha(17, 9));
        assert_eq!(interpolate(&base, &top, Some(255)).unwrap(), base);
    }
}
