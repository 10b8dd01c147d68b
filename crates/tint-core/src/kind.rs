//! Runtime tags for the color models.
//!
//! [`ColorKind`] names each concrete color type at runtime. It is the
//! "klass" a `Mixer` keeps fixed, the leading byte of a persisted
//! `AnyColor` and the value of the CLI `--output-kind` flag.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::ColorKind;
//!
//! let kind: ColorKind = "hsl".parse().unwrap();
//! assert_eq!(kind, ColorKind::Hsl);
//! assert_eq!(ColorKind::from_tag(kind.tag()), Some(kind));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The seven color models known to tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorKind {
    /// 8-bit red, green, blue, alpha.
    #[default]
    Rgb,
    /// Hue, saturation, value (floats) with 8-bit alpha.
    Hsv,
    /// Hue, saturation, luminance (floats) with 8-bit alpha.
    Hsl,
    /// 8-bit cyan, magenta, yellow, key, alpha.
    Cmyk,
    /// 8-bit white and alpha.
    Gray,
    /// Entry of the named-color table.
    Named,
    /// Entry of the 8-color terminal palette.
    Term,
}

impl ColorKind {
    /// All kinds, in tag order.
    pub const ALL: [ColorKind; 7] = [
        Self::Rgb,
        Self::Hsv,
        Self::Hsl,
        Self::Cmyk,
        Self::Gray,
        Self::Named,
        Self::Term,
    ];

    /// Short display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
            Self::Cmyk => "CMYK",
            Self::Gray => "Gray",
            Self::Named => "Named",
            Self::Term => "Term",
        }
    }

    /// Tag byte used by the persisted form of a dynamically typed color.
    #[inline]
    pub const fn tag(&self) -> u8 {
        match self {
            Self::Rgb => 0,
            Self::Hsv => 1,
            Self::Hsl => 2,
            Self::Cmyk => 3,
            Self::Gray => 4,
            Self::Named => 5,
            Self::Term => 6,
        }
    }

    /// Inverse of [`tag`](Self::tag).
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Rgb),
            1 => Some(Self::Hsv),
            2 => Some(Self::Hsl),
            3 => Some(Self::Cmyk),
            4 => Some(Self::Gray),
            5 => Some(Self::Named),
            6 => Some(Self::Term),
            _ => None,
        }
    }

    /// Whether values of this kind come from a fixed finite table.
    #[inline]
    pub const fn is_closed_set(&self) -> bool {
        matches!(self, Self::Named | Self::Term)
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ColorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_format(format!("unknown color kind '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for kind in ColorKind::ALL {
            assert_eq!(ColorKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ColorKind::from_tag(7), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("cmyk".parse::<ColorKind>().unwrap(), ColorKind::Cmyk);
        assert_eq!(" Gray ".parse::<ColorKind>().unwrap(), ColorKind::Gray);
        assert!("lab".parse::<ColorKind>().is_err());
    }

    #[test]
    fn test_closed_set() {
        assert!(ColorKind::Named.is_closed_set());
        assert!(ColorKind::Term.is_closed_set());
        assert!(!ColorKind::Rgb.is_closed_set());
    }
}
