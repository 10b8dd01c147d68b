//! The 8-color ANSI terminal palette.
//!
//! [`Term`] is a closed-set color model like [`Named`](crate::Named), with
//! eight entries and no alpha. Each entry has a fixed SGR foreground
//! (30-37) and background (40-47) code.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use tint_core::{Color, ColorKind, Components, Error, Persist, Result, Rgb};

use crate::named::closed_set_components;
use crate::palette::Palette;

/// Palette order, used for nearest-match tie breaking.
const TERM_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("red", 0xFF0000),
    ("green", 0x00FF00),
    ("blue", 0x0000FF),
    ("yellow", 0xFFFF00),
    ("purple", 0xFF00FF),
    ("cyan", 0x00FFFF),
    ("white", 0xFFFFFF),
];

static TERM: LazyLock<Palette> = LazyLock::new(|| Palette::new("term", TERM_COLORS));

/// One of the eight terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Term {
    /// `#000000`
    #[default]
    Black,
    /// `#FF0000`
    Red,
    /// `#00FF00`
    Green,
    /// `#0000FF`
    Blue,
    /// `#FFFF00`
    Yellow,
    /// `#FF00FF`
    Purple,
    /// `#00FFFF`
    Cyan,
    /// `#FFFFFF`
    White,
}

impl Term {
    /// All entries, in palette order.
    pub const ALL: [Term; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
        Self::Cyan,
        Self::White,
    ];

    /// Lowercase palette symbol.
    pub const fn symbol(&self) -> &'static str {
        TERM_COLORS[*self as usize].0
    }

    /// Fixed RGB value.
    pub const fn rgb(&self) -> Rgb {
        Rgb::from_int(TERM_COLORS[*self as usize].1)
    }

    /// SGR foreground code, 30-37.
    pub const fn foreground_code(&self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Purple => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }

    /// SGR background code, 40-47.
    pub const fn background_code(&self) -> u8 {
        self.foreground_code() + 10
    }

    /// `ESC[<code>m` selecting this color as foreground or background.
    ///
    /// ```rust
    /// use tint_palette::Term;
    ///
    /// assert_eq!(Term::Yellow.escape(false), "\x1b[33m");
    /// assert_eq!(Term::Black.escape(true), "\x1b[40m");
    /// ```
    pub fn escape(&self, background: bool) -> String {
        let code = if background { self.background_code() } else { self.foreground_code() };
        format!("\x1b[{code}m")
    }

    fn nearest(rgb: &Rgb) -> Self {
        TERM.nearest(rgb).and_then(|i| Self::ALL.get(i).copied()).unwrap_or_default()
    }
}

impl Color for Term {
    const KIND: ColorKind = ColorKind::Term;
    const CHANNELS: &'static [&'static str] = &["red", "green", "blue", "alpha"];

    fn to_rgb(&self) -> Rgb {
        self.rgb()
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        Self::nearest(rgb)
    }

    fn components(&self) -> Components {
        self.rgb().components()
    }

    fn normalized(&self) -> Components {
        self.rgb().normalized()
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        closed_set_components::<Self>(values).map(|rgb| Self::nearest(&rgb))
    }

    fn from_normalized_saturating(values: &[f64]) -> Self {
        Self::nearest(&Rgb::from_normalized_saturating(values))
    }

    fn alpha(&self) -> u8 {
        0
    }
}

tint_core::impl_color_arithmetic!(Term);

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unknown_palette_entry(s))
    }
}

impl Persist for Term {
    /// The palette symbol.
    fn to_bytes(&self) -> Vec<u8> {
        self.symbol().as_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let symbol = std::str::from_utf8(bytes)
            .map_err(|e| Error::invalid_format(format!("terminal color is not UTF-8: {e}")))?;
        symbol.parse()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
