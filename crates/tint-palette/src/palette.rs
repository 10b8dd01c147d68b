//! Immutable name ⇄ RGB tables.
//!
//! A [`Palette`] is built once from a literal list and never mutated. It
//! answers three questions: the RGB of a name, the name of an exact RGB
//! value and the entry nearest to an arbitrary color.
//!
//! Several names may share one RGB value. Name lookup finds every one of
//! them; the inverse lookup returns the first in table order.

use std::collections::HashMap;

use tint_core::{Color, Rgb};
use tracing::{debug, trace};

/// A fixed table of named RGB values.
#[derive(Debug)]
pub struct Palette {
    label: &'static str,
    entries: Vec<(&'static str, Rgb)>,
    by_name: HashMap<&'static str, usize>,
    by_folded_name: HashMap<String, usize>,
    by_rgb: HashMap<Rgb, usize>,
}

impl Palette {
    /// Builds a palette from `(name, 0xRRGGBB)` pairs.
    ///
    /// Names are expected to be unique; a repeated name keeps its first
    /// entry.
    pub fn new(label: &'static str, table: &[(&'static str, u32)]) -> Self {
        let entries: Vec<(&'static str, Rgb)> = table
            .iter()
            .map(|&(name, packed)| (name, Rgb::from_int(packed & 0x00FF_FFFF)))
            .collect();

        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_folded_name = HashMap::with_capacity(entries.len());
        let mut by_rgb = HashMap::with_capacity(entries.len());
        for (i, (name, rgb)) in entries.iter().enumerate() {
            by_name.entry(*name).or_insert(i);
            by_folded_name.entry(name.to_lowercase()).or_insert(i);
            by_rgb.entry(*rgb).or_insert(i);
        }

        debug!(
            palette = label,
            entries = entries.len(),
            distinct_values = by_rgb.len(),
            "built palette"
        );
        Self { label, entries, by_name, by_folded_name, by_rgb }
    }

    /// Table label, for diagnostics.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, in table order.
    pub fn entry(&self, index: usize) -> Option<(&'static str, Rgb)> {
        self.entries.get(index).copied()
    }

    /// All entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Rgb)> + '_ {
        self.entries.iter().copied()
    }

    /// Index of `name`, matched exactly first and then ignoring case.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name
            .get(name)
            .or_else(|| self.by_folded_name.get(&name.to_lowercase()))
            .copied()
    }

    /// RGB value of `name`.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.index_of(name).map(|i| self.entries[i].1)
    }

    /// First name whose value is exactly `rgb`. Alpha is ignored.
    pub fn name_of(&self, rgb: &Rgb) -> Option<&'static str> {
        self.by_rgb.get(&opaque(rgb)).map(|&i| self.entries[i].0)
    }

    /// Index of the entry nearest to `color`; ties go to the first entry.
    ///
    /// Distance is [`Color::distance`] between opaque RGB values, so the
    /// color's own alpha does not bias the choice.
    ///
    /// Returns `None` only for an empty palette.
    pub fn nearest<C: Color>(&self, color: &C) -> Option<usize> {
        let target = opaque(&color.to_rgb());
        if let Some(&i) = self.by_rgb.get(&target) {
            return Some(i);
        }
        let mut best: Option<(usize, f64)> = None;
        for (i, (_, rgb)) in self.entries.iter().enumerate() {
            let d = target.distance(rgb);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        if let Some((i, d)) = best {
            trace!(palette = self.label, name = self.entries[i].0, distance = d, "nearest entry");
        }
        best.map(|(i, _)| i)
    }
}

fn opaque(rgb: &Rgb) -> Rgb {
    Rgb::new(rgb.red(), rgb.green(), rgb.blue())
}
