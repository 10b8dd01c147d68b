//! Numeric helpers shared by the color models.
//!
//! This module provides the small set of scalar functions every
//! conversion relies on:
//!
//! - Epsilon-bounded comparison ([`near`], [`near_zero`])
//! - Linear interpolation ([`lerp`])
//! - Clamping and cyclic wrapping ([`saturate`], [`wrap_unit`])
//! - Channel quantization between `[0, 1]` and `0..=255`
//! - Range validation used by the validating constructors
//!
//! No conversion compares floats with `==`; tolerance checks go through
//! [`near`] with [`EPSILON_DELTA`].
//!
//! # Usage
//!
//! ```rust
//! use tint_core::math::{lerp, near, unit_to_byte};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert!(near(0.1 + 0.2, 0.3));
//! assert_eq!(unit_to_byte(0.5), 128);
//! ```

use crate::error::{Error, Result};

/// Tolerance for "these two floats are the same" decisions.
///
/// Four machine epsilons, enough to absorb the rounding of one division
/// by 255 and a subtraction.
pub const EPSILON_DELTA: f64 = 4.0 * f64::EPSILON;

/// Maximum value of an 8-bit channel, as a float.
pub const BYTE_MAX: f64 = 255.0;

/// Display form of the integer channel range.
pub const BYTE_RANGE: &str = "0..=255";

/// Display form of the normalized channel range.
pub const UNIT_RANGE: &str = "0..=1";

/// Returns `true` if `a` and `b` differ by less than [`EPSILON_DELTA`].
#[inline]
pub fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON_DELTA
}

/// Returns `true` if `v` is within [`EPSILON_DELTA`] of zero.
#[inline]
pub fn near_zero(v: f64) -> bool {
    near(v, 0.0)
}

/// Linear interpolation between two values.
///
/// Returns exactly `a` at `t = 0.0` and exactly `b` at `t = 1.0`.
///
/// # Formula
///
/// `a + (b - a) * t`, with `t = 1.0` pinned to `b`. The result never leaves
/// the span of `a` and `b`, so it is meant for `t` in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use tint_core::math::lerp;
///
/// assert_eq!(lerp(0.1, 0.3, 0.0), 0.1);
/// assert_eq!(lerp(0.1, 0.3, 1.0), 0.3);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t >= 1.0 {
        return b;
    }
    (a + (b - a) * t).clamp(a.min(b), a.max(b))
}

/// Clamps a value to `[0, 1]`.
#[inline]
pub fn saturate(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Clamps a value to `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn saturate_finite(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { saturate(v) }
}

/// Wraps a cyclic value (hue) into `[0, 1)`.
///
/// ```rust
/// use tint_core::math::wrap_unit;
///
/// assert!((wrap_unit(1.2) - 0.2).abs() < 1e-12);
/// assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-12);
/// assert_eq!(wrap_unit(1.0), 0.0);
/// ```
#[inline]
pub fn wrap_unit(v: f64) -> f64 {
    let wrapped = v.rem_euclid(1.0);
    // rem_euclid can return 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Scales a normalized value for display, rounded to two decimals.
///
/// ```rust
/// use tint_core::math::display_scaled;
///
/// assert_eq!(display_scaled(0.5, 360.0), 180.0);
/// assert_eq!(display_scaled(1.0 / 3.0, 100.0), 33.33);
/// ```
#[inline]
pub fn display_scaled(v: f64, scale: f64) -> f64 {
    (v * scale * 100.0).round() / 100.0
}

/// Converts an 8-bit channel to `[0, 1]`.
#[inline]
pub fn byte_to_unit(v: u8) -> f64 {
    f64::from(v) / BYTE_MAX
}

/// Quantizes a `[0, 1]` value to 8 bits, clamping first.
///
/// Used on conversion outputs, where the math stays in range up to float
/// rounding.
#[inline]
pub fn unit_to_byte(v: f64) -> u8 {
    (saturate(v) * BYTE_MAX).round() as u8
}

/// Validates an integer channel given as a float in native units.
///
/// The value is rounded to the nearest integer after the range check.
///
/// # Errors
///
/// Returns [`Error::InvalidComponent`] if `v` is NaN, infinite or
/// outside `0..=255`.
pub fn check_byte(channel: &'static str, v: f64) -> Result<u8> {
    if v.is_finite() && (0.0..=BYTE_MAX).contains(&v) {
        Ok(v.round() as u8)
    } else {
        Err(Error::invalid_component(channel, v, BYTE_RANGE))
    }
}

/// Validates an integer channel given as a signed integer.
///
/// # Errors
///
/// Returns [`Error::InvalidComponent`] if `v` is outside `0..=255`.
pub fn check_byte_int(channel: &'static str, v: i64) -> Result<u8> {
    u8::try_from(v).map_err(|_| Error::invalid_component(channel, v as f64, BYTE_RANGE))
}

/// Validates a normalized channel.
///
/// Negative zero is folded into positive zero so equal values hash alike.
///
/// # Errors
///
/// Returns [`Error::InvalidComponent`] if `v` is NaN or outside `[0, 1]`.
pub fn check_unit(channel: &'static str, v: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&v) {
        Ok(v + 0.0)
    } else {
        Err(Error::invalid_component(channel, v, UNIT_RANGE))
    }
}

/// Validates a normalized channel and quantizes it to 8 bits.
///
/// # Errors
///
/// Returns [`Error::InvalidComponent`] if `v` is NaN or outside `[0, 1]`.
pub fn check_unit_byte(channel: &'static str, v: f64) -> Result<u8> {
    check_unit(channel, v).map(|v| (v * BYTE_MAX).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let (a, b) = (0.1, 0.3);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert!((lerp(a, b, 0.5) - 0.2).abs() < 1e-12);
        // Byte midpoints land on .5 exactly.
        assert_eq!(lerp(16.0, 17.0, 0.5), 16.5);
        assert_eq!(lerp(255.0, 0.0, 0.5), 127.5);
    }

    #[test]
    fn test_near() {
        assert!(near(1.0 / 3.0 * 3.0, 1.0));
        assert!(!near(0.0, 1e-9));
        assert!(near_zero(-0.0));
    }

    #[test]
    fn test_wrap_unit() {
        assert!((wrap_unit(0.8 + 0.4) - 0.2).abs() < 1e-12);
        assert_eq!(wrap_unit(0.0), 0.0);
        assert_eq!(wrap_unit(2.0), 0.0);
        assert!(wrap_unit(-1e-20) < 1.0);
    }

    #[test]
    fn test_saturate_finite() {
        assert_eq!(saturate_finite(f64::NAN), 0.0);
        assert_eq!(saturate_finite(1.5), 1.0);
        assert_eq!(saturate_finite(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_byte_unit() {
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(1.000_000_1), 255);
        assert_eq!(unit_to_byte(-0.01), 0);
        assert_eq!(unit_to_byte(byte_to_unit(77)), 77);
    }

    #[test]
    fn test_check_byte() {
        assert_eq!(check_byte("red", 127.6).unwrap(), 128);
        assert!(check_byte("red", -1.0).is_err());
        assert!(check_byte("red", 256.0).is_err());
        assert!(check_byte("red", f64::NAN).is_err());
        assert!(check_byte("red", f64::INFINITY).is_err());
        assert_eq!(check_byte_int("alpha", 255).unwrap(), 255);
        assert!(check_byte_int("alpha", 256).is_err());
        assert!(check_byte_int("alpha", -1).is_err());
    }

    #[test]
    fn test_check_unit() {
        assert_eq!(check_unit("hue", 1.0).unwrap(), 1.0);
        assert!(check_unit("hue", 1.1).is_err());
        assert!(check_unit("hue", -0.1).is_err());
        assert!(check_unit("hue", f64::NAN).is_err());
        assert!(check_unit("hue", -0.0).unwrap().is_sign_positive());
        assert_eq!(check_unit_byte("alpha", 0.5).unwrap(), 128);
    }
}
