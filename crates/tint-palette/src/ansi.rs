//! ANSI SGR text colouring.
//!
//! Every helper wraps its text as `ESC[<code>m<text>ESC[0m`.
//!
//! ```rust
//! use tint_palette::{Attribute, StringColoring, Term};
//!
//! let s = "hello".fg(Term::Yellow).on(Term::Red);
//! assert_eq!(s, "\x1b[41m\x1b[33mhello\x1b[0m\x1b[0m");
//! assert_eq!("x".attr(Attribute::Bold), "\x1b[1mx\x1b[0m");
//! ```

use std::fmt;
use std::str::FromStr;

use tint_core::{Error, Result};

use crate::term::Term;

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Text attributes besides color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// SGR 1
    Bold,
    /// SGR 4
    Underline,
    /// SGR 5
    Blink,
    /// SGR 7
    Invert,
}

impl Attribute {
    /// All attributes.
    pub const ALL: [Attribute; 4] = [Self::Bold, Self::Underline, Self::Blink, Self::Invert];

    /// SGR code.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::Invert => 7,
        }
    }

    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Invert => "invert",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_palette_entry(s))
    }
}

/// Wraps `text` in one SGR code and a reset.
pub fn wrap(code: u8, text: impl fmt::Display) -> String {
    format!("\x1b[{code}m{text}{RESET}")
}

/// Colouring helpers for anything printable.
pub trait StringColoring: fmt::Display {
    /// Foreground color.
    fn fg(&self, color: Term) -> String {
        wrap(color.foreground_code(), self)
    }

    /// Background color (`on_<color>`).
    fn on(&self, color: Term) -> String {
        wrap(color.background_code(), self)
    }

    /// Text attribute.
    fn attr(&self, attribute: Attribute) -> String {
        wrap(attribute.code(), self)
    }

    /// Bold text.
    fn bold(&self) -> String {
        self.attr(Attribute::Bold)
    }

    /// Underlined text.
    fn underline(&self) -> String {
        self.attr(Attribute::Underline)
    }

    /// Blinking text.
    fn blink(&self) -> String {
        self.attr(Attribute::Blink)
    }

    /// Inverted text.
    fn invert(&self) -> String {
        self.attr(Attribute::Invert)
    }
}

impl<T: fmt::Display + ?Sized> StringColoring for T {}
