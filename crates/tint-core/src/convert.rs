//! Conversion engine between the RGB hub and the other models.
//!
//! Every function here works on normalized channels (`[0, 1]`) without
//! alpha; the color types quantize and attach alpha themselves. RGB is the
//! hub: each model has a `to_rgb` direction and an RGB → model direction,
//! and any cross conversion (HSV → CMYK, ...) is the composition of the two.
//!
//! # Functions
//!
//! - [`rgb_to_hsv`] / [`hsv_to_rgb`] - hexcone model
//! - [`rgb_to_hsl`] / [`hsl_to_rgb`] - bi-hexcone model
//! - [`rgb_to_cmyk`] / [`cmyk_to_rgb`] - naive subtractive model
//!
//! # Example
//!
//! ```rust
//! use tint_core::convert::{hsv_to_rgb, rgb_to_hsv};
//!
//! let hsv = rgb_to_hsv([1.0, 0.5, 0.0]);
//! let rgb = hsv_to_rgb(hsv);
//! assert!((rgb[1] - 0.5).abs() < 1e-12);
//! ```

use crate::math::{near, near_zero, wrap_unit};

/// Which channel holds the maximum, red winning ties, then green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dominant {
    Red,
    Green,
    Blue,
}

fn dominant(r: f64, g: f64, b: f64) -> Dominant {
    if r >= g && r >= b {
        Dominant::Red
    } else if g >= b {
        Dominant::Green
    } else {
        Dominant::Blue
    }
}

/// Six-sector hue shared by HSV and HSL, in `[0, 1)`.
fn hue(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
    if near(max, min) {
        return 0.0;
    }
    let delta = max - min;
    let h = match dominant(r, g, b) {
        Dominant::Red => {
            let h = (g - b) / delta / 6.0;
            if g < b { h + 1.0 } else { h }
        }
        Dominant::Green => (b - r) / delta / 6.0 + 1.0 / 3.0,
        Dominant::Blue => (r - g) / delta / 6.0 + 2.0 / 3.0,
    };
    wrap_unit(h)
}

fn max_min(rgb: [f64; 3]) -> (f64, f64) {
    let [r, g, b] = rgb;
    (r.max(g).max(b), r.min(g).min(b))
}

/// RGB to hue, saturation, value.
pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let (max, min) = max_min(rgb);
    let saturation = if near_zero(max) { 0.0 } else { (max - min) / max };
    [hue(r, g, b, max, min), saturation, max]
}

/// Hue, saturation, value to RGB.
///
/// A saturation within epsilon of zero short-circuits to the gray
/// `(value, value, value)`.
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;
    if near_zero(s) {
        return [v, v, v];
    }
    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// RGB to hue, saturation, luminance.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let (max, min) = max_min(rgb);
    let luminance = 0.5 * (max + min);
    let saturation = if near(max, min) {
        0.0
    } else if luminance <= 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    };
    [hue(r, g, b, max, min), saturation, luminance]
}

/// One RGB channel of an HSL color, `hue` already offset for the channel.
fn hsl_channel(first: f64, second: f64, hue: f64) -> f64 {
    let h = wrap_unit(hue);
    if 6.0 * h < 1.0 {
        second + (first - second) * 6.0 * h
    } else if 2.0 * h < 1.0 {
        first
    } else if 3.0 * h < 2.0 {
        second + (first - second) * (2.0 / 3.0 - h) * 6.0
    } else {
        second
    }
}

/// Hue, saturation, luminance to RGB.
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    if near_zero(s) {
        return [l, l, l];
    }
    let first = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let second = 2.0 * l - first;
    [
        hsl_channel(first, second, h + 1.0 / 3.0),
        hsl_channel(first, second, h),
        hsl_channel(first, second, h - 1.0 / 3.0),
    ]
}

/// RGB to cyan, magenta, yellow, key.
///
/// Pure black (key within epsilon of 1) has no defined chroma and maps
/// to `(0, 0, 0, 1)`.
pub fn rgb_to_cmyk(rgb: [f64; 3]) -> [f64; 4] {
    let [r, g, b] = rgb;
    let key = (1.0 - r).min(1.0 - g).min(1.0 - b);
    if near(key, 1.0) {
        return [0.0, 0.0, 0.0, key];
    }
    let chroma = |v: f64| (1.0 - v - key) / (1.0 - key);
    [chroma(r), chroma(g), chroma(b), key]
}

/// Cyan, magenta, yellow, key to RGB.
pub fn cmyk_to_rgb(cmyk: [f64; 4]) -> [f64; 3] {
    let [c, m, y, k] = cmyk;
    [(1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_eq(a: [f64; 3], b: [f64; 3]) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-9);
        }
    }

    /// Reference hexcone hue using the degree-based `mod 6` formulation.
    fn reference_hue(rgb: [f64; 3]) -> f64 {
        let [r, g, b] = rgb;
        let (max, min) = max_min(rgb);
        let d = max - min;
        if d == 0.0 {
            return 0.0;
        }
        let sector = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        wrap_unit(sector / 6.0)
    }

    #[test]
    fn test_primaries_hue() {
        assert_abs_diff_eq!(rgb_to_hsv([1.0, 0.0, 0.0])[0], 0.0);
        assert_abs_diff_eq!(rgb_to_hsv([0.0, 1.0, 0.0])[0], 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb_to_hsv([0.0, 0.0, 1.0])[0], 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb_to_hsv([1.0, 0.0, 1.0])[0], 5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hue_matches_reference_on_grid() {
        // Covers the green/blue boundary where the blue branch is taken.
        let steps = [0.0, 0.1, 0.25, 0.5, 0.6, 0.75, 0.9, 1.0];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let rgb = [r, g, b];
                    let ours = rgb_to_hsv(rgb)[0];
                    let reference = reference_hue(rgb);
                    let diff = (ours - reference).abs();
                    assert!(diff < 1e-9 || (1.0 - diff) < 1e-9, "{rgb:?}: {ours} vs {reference}");
                    assert_abs_diff_eq!(ours, rgb_to_hsl(rgb)[0]);
                }
            }
        }
    }

    #[test]
    fn test_hsv_roundtrip() {
        for rgb in [[1.0, 100.0 / 255.0, 0.0], [0.2, 0.4, 0.6], [0.9, 0.1, 0.5]] {
            assert_rgb_eq(hsv_to_rgb(rgb_to_hsv(rgb)), rgb);
        }
    }

    #[test]
    fn test_hsv_achromatic_shortcut() {
        assert_eq!(hsv_to_rgb([0.7, 0.0, 0.4]), [0.4, 0.4, 0.4]);
        assert_eq!(rgb_to_hsv([0.4, 0.4, 0.4]), [0.0, 0.0, 0.4]);
        assert_eq!(rgb_to_hsv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsl_roundtrip() {
        for rgb in [[1.0, 100.0 / 255.0, 0.0], [0.2, 0.4, 0.6], [0.9, 0.1, 0.5], [0.1, 0.9, 0.8]] {
            assert_rgb_eq(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
        }
    }

    #[test]
    fn test_hsl_values() {
        let hsl = rgb_to_hsl([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(hsl[1], 1.0);
        assert_abs_diff_eq!(hsl[2], 0.5);
        assert_eq!(hsl_to_rgb([0.0, 0.0, 1.0]), [1.0, 1.0, 1.0]);
        assert_rgb_eq(hsl_to_rgb([1.0 / 3.0, 1.0, 0.5]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_cmyk_roundtrip() {
        for rgb in [[1.0, 100.0 / 255.0, 0.0], [0.2, 0.4, 0.6], [0.5, 0.5, 0.5]] {
            assert_rgb_eq(cmyk_to_rgb(rgb_to_cmyk(rgb)), rgb);
        }
    }

    #[test]
    fn test_cmyk_black() {
        assert_eq!(rgb_to_cmyk([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 1.0]);
        let gray = rgb_to_cmyk([0.5, 0.5, 0.5]);
        assert_abs_diff_eq!(gray[0], 0.0);
        assert_abs_diff_eq!(gray[3], 0.5);
    }
}
