//! Textual color specs.
//!
//! Accepted forms (case-insensitive prefix, whitespace around values
//! ignored):
//!
//! - `#rgb`, `#rrggbb`, `rgb`, `rrggbb` - HTML hex
//! - `rgb:r,g,b[,a]` - integer channels `0..=255`
//! - `hsv:h,s,v[,a]`, `hsl:h,s,l[,a]` - unit floats, integer alpha
//! - `cmyk:c,m,y,k[,a]` - integer channels
//! - `gray:w[,a]` - integer channels
//! - `named:<name>` - entry of the named-color table
//! - `term:<symbol>` - terminal palette symbol
//!
//! ```rust
//! use tint::prelude::*;
//!
//! let c: AnyColor = "rgb:255,100,0".parse().unwrap();
//! assert_eq!(c, AnyColor::Rgb(Rgb::new(255, 100, 0)));
//! assert_eq!("#f09".parse::<AnyColor>().unwrap().to_html(), "#FF0099");
//! assert!("rgb:1,2".parse::<AnyColor>().is_err());
//! ```

use std::str::FromStr;

use tint_core::{Cmyk, ColorKind, Error, Gray, Hsl, Hsv, Result, Rgb};
use tint_palette::{Named, Term};

use crate::any::AnyColor;

impl FromStr for AnyColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let Some((prefix, body)) = s.split_once(':') else {
            return Rgb::from_html(s).map(Self::Rgb);
        };
        let kind: ColorKind = prefix.parse()?;
        let body = body.trim();
        Ok(match kind {
            ColorKind::Rgb => {
                let v = ints(body, 3, 4)?;
                Self::Rgb(Rgb::try_new(v[0], v[1], v[2], alpha_or_zero(&v, 3))?)
            }
            ColorKind::Hsv => {
                let (h, s, v, a) = hue_triple(body)?;
                Self::Hsv(Hsv::hsva(h, s, v, a)?)
            }
            ColorKind::Hsl => {
                let (h, s, l, a) = hue_triple(body)?;
                Self::Hsl(Hsl::hsla(h, s, l, a)?)
            }
            ColorKind::Cmyk => {
                let v = ints(body, 4, 5)?;
                Self::Cmyk(Cmyk::try_new(v[0], v[1], v[2], v[3], alpha_or_zero(&v, 4))?)
            }
            ColorKind::Gray => {
                let v = ints(body, 1, 2)?;
                Self::Gray(Gray::try_new(v[0], alpha_or_zero(&v, 1))?)
            }
            ColorKind::Named => Self::Named(body.parse::<Named>()?),
            ColorKind::Term => Self::Term(body.parse::<Term>()?),
        })
    }
}

fn alpha_or_zero(values: &[i64], index: usize) -> i64 {
    values.get(index).copied().unwrap_or(0)
}

fn fields(body: &str, min: usize, max: usize) -> Result<Vec<&str>> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() < min || parts.len() > max {
        let expected = if min == max { min.to_string() } else { format!("{min} or {max}") };
        return Err(Error::invalid_format(format!(
            "expected {expected} values, got {} in '{body}'",
            parts.len()
        )));
    }
    Ok(parts)
}

fn ints(body: &str, min: usize, max: usize) -> Result<Vec<i64>> {
    fields(body, min, max)?.into_iter().map(int).collect()
}

fn int(field: &str) -> Result<i64> {
    field
        .parse()
        .map_err(|_| Error::invalid_format(format!("'{field}' is not an integer")))
}

fn float(field: &str) -> Result<f64> {
    field
        .parse()
        .map_err(|_| Error::invalid_format(format!("'{field}' is not a number")))
}

fn hue_triple(body: &str) -> Result<(f64, f64, f64, u8)> {
    let parts = fields(body, 3, 4)?;
    let alpha = match parts.get(3) {
        Some(field) => tint_core::math::check_byte_int("alpha", int(field)?)?,
        None => 0,
    };
    Ok((float(parts[0])?, float(parts[1])?, float(parts[2])?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<AnyColor> {
        s.parse()
    }

    #[test]
    fn test_hex() {
        assert_eq!(parse("#FF7F00").unwrap(), AnyColor::Rgb(Rgb::new(255, 127, 0)));
        assert_eq!(parse(" f09 ").unwrap(), AnyColor::Rgb(Rgb::new(255, 0, 153)));
        assert!(parse("#ff00").unwrap_err().is_format_error());
    }

    #[test]
    fn test_channel_forms() {
        assert_eq!(parse("RGB: 1, 2, 3, 4").unwrap(), AnyColor::Rgb(Rgb::rgba(1, 2, 3, 4)));
        assert_eq!(parse("cmyk:0,155,255,0").unwrap(), AnyColor::Cmyk(Cmyk::new(0, 155, 255, 0)));
        assert_eq!(parse("gray:118,7").unwrap(), AnyColor::Gray(Gray::gray_alpha(118, 7)));
        assert_eq!(
            parse("hsv:0.5,0.25,1,9").unwrap(),
            AnyColor::Hsv(Hsv::hsva(0.5, 0.25, 1.0, 9).unwrap())
        );
        assert_eq!(parse("hsl:0,1,0.5").unwrap(), AnyColor::Hsl(Hsl::new(0.0, 1.0, 0.5).unwrap()));
    }

    #[test]
    fn test_palette_forms() {
        assert_eq!(parse("named:Lavender blue").unwrap().to_string(), "Lavender blue");
        assert_eq!(parse("term:purple").unwrap(), AnyColor::Term(Term::Purple));
        assert!(parse("named:Octarine").unwrap_err().is_lookup_error());
        assert!(parse("term:teal").unwrap_err().is_lookup_error());
    }

    #[test]
    fn test_malformed() {
        assert!(parse("lab:1,2,3").unwrap_err().is_format_error());
        assert!(parse("rgb:1,2").unwrap_err().is_format_error());
        assert!(parse("rgb:1,2,x").unwrap_err().is_format_error());
        assert!(parse("hsv:a,0,0").unwrap_err().is_format_error());
        assert!(parse("gray:1,2,3").unwrap_err().is_format_error());
    }

    #[test]
    fn test_out_of_range_is_component_error() {
        assert!(parse("rgb:256,0,0").unwrap_err().is_component_error());
        assert!(parse("hsl:0,2,0").unwrap_err().is_component_error());
        assert!(parse("hsv:0,0,0,300").unwrap_err().is_component_error());
    }
}
