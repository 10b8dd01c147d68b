//! Named colors.
//!
//! [`Named`] is a closed-set color model: its values are the entries of a
//! fixed 185-name table. Arbitrary colors map into it by nearest match.
//!
//! # Channels
//!
//! A named color reports the RGB of its table entry as components and has
//! no alpha of its own: [`Color::alpha`] is always 0 and
//! [`Color::with_alpha`] rejects anything else.
//!
//! # Example
//!
//! ```rust
//! use tint_core::prelude::*;
//! use tint_palette::Named;
//!
//! let red = Named::new("Red").unwrap();
//! assert_eq!(red.to_rgb(), Rgb::new(255, 0, 0));
//! assert_eq!(Named::from_color(&Rgb::new(250, 5, 5)), red);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use tint_core::math::{BYTE_MAX, check_byte};
use tint_core::{Color, ColorKind, Components, Error, Persist, Result, Rgb};

use crate::palette::Palette;
use crate::table::NAMED_COLORS;

static NAMED: LazyLock<Palette> = LazyLock::new(|| Palette::new("named", NAMED_COLORS));

/// The named-color table.
pub fn palette() -> &'static Palette {
    &NAMED
}

/// An entry of the named-color table.
///
/// Equality and hashing follow the RGB value, so names sharing a table
/// value (`Cyan` and `Aqua`) compare equal. [`Named::name`] still tells
/// them apart.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Named {
    name: &'static str,
}

impl Named {
    /// Looks up `name`, exactly first and then ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if the table has no such entry.
    pub fn new(name: &str) -> Result<Self> {
        NAMED
            .index_of(name)
            .map(Self::at)
            .ok_or_else(|| Error::unknown_name(name))
    }

    /// The exact entry for `rgb`, if the table has one (first name wins).
    pub fn exact(rgb: &Rgb) -> Option<Self> {
        NAMED.name_of(rgb).map(|name| Self { name })
    }

    /// Every named color, in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        NAMED.iter().map(|(name, _)| Self { name })
    }

    fn at(index: usize) -> Self {
        let name = NAMED.entry(index).map_or("Black", |(name, _)| name);
        Self { name }
    }

    fn nearest(rgb: &Rgb) -> Self {
        NAMED.nearest(rgb).map_or(Self { name: "Black" }, Self::at)
    }

    /// Table name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Color for Named {
    const KIND: ColorKind = ColorKind::Named;
    const CHANNELS: &'static [&'static str] = &["red", "green", "blue", "alpha"];

    fn to_rgb(&self) -> Rgb {
        NAMED.get(self.name).unwrap_or_default()
    }

    /// Nearest table entry; alpha is dropped.
    fn from_rgb(rgb: &Rgb) -> Self {
        Self::nearest(rgb)
    }

    fn components(&self) -> Components {
        self.to_rgb().components()
    }

    fn normalized(&self) -> Components {
        self.to_rgb().normalized()
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        closed_set_components::<Self>(values).map(|rgb| Self::nearest(&rgb))
    }

    fn from_normalized_saturating(values: &[f64]) -> Self {
        let rgb = Rgb::from_normalized_saturating(values);
        Self::nearest(&rgb)
    }

    fn alpha(&self) -> u8 {
        0
    }
}

tint_core::impl_color_arithmetic!(Named);

/// Validates a closed-set component list (`red, green, blue, alpha`) whose
/// alpha must be 0, returning the opaque RGB it names.
pub(crate) fn closed_set_components<C: Color>(values: &[f64]) -> Result<Rgb> {
    if values.len() != C::CHANNELS.len() {
        return Err(Error::invalid_argument(format!(
            "{} expects {} components, got {}",
            C::KIND,
            C::CHANNELS.len(),
            values.len()
        )));
    }
    if values[3] != 0.0 {
        let value = values[3];
        let range = if (0.0..=BYTE_MAX).contains(&value) { "0 (no alpha channel)" } else { "0..=255" };
        return Err(Error::invalid_component("alpha", value, range));
    }
    Ok(Rgb::new(
        check_byte("red", values[0])?,
        check_byte("green", values[1])?,
        check_byte("blue", values[2])?,
    ))
}

impl PartialEq for Named {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name || self.to_rgb() == other.to_rgb()
    }
}

impl Eq for Named {}

impl Hash for Named {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgb().hash(state);
    }
}

impl FromStr for Named {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for Named {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::new(&name)
    }
}

impl From<Named> for String {
    fn from(named: Named) -> Self {
        named.name.to_string()
    }
}

impl Persist for Named {
    /// The UTF-8 name.
    fn to_bytes(&self) -> Vec<u8> {
        self.name.as_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let name = std::str::from_utf8(bytes)
            .map_err(|e| Error::invalid_format(format!("named color is not UTF-8: {e}")))?;
        Self::new(name)
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
