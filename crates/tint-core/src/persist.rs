//! Compact binary persisted form.
//!
//! Each model packs its component list in component order:
//!
//! | Model | Layout | Size |
//! |-------|--------|------|
//! | [`Rgb`] | `red green blue alpha` as bytes | 4 |
//! | [`Hsv`] | `hue saturation value` as big-endian `f64`, `alpha` byte | 25 |
//! | [`Hsl`] | `hue saturation luminance` as big-endian `f64`, `alpha` byte | 25 |
//! | [`Cmyk`] | `cyan magenta yellow key alpha` as bytes | 5 |
//! | [`Gray`] | `white alpha` as bytes | 2 |
//!
//! Integer models round-trip exactly. Float channels are written with their
//! full bit pattern, so they round-trip exactly as well. Decoding goes
//! through the validating constructors: out-of-range floats and NaN are
//! rejected.
//!
//! # Example
//!
//! ```rust
//! use tint_core::prelude::*;
//!
//! let c = Rgb::rgba(1, 2, 3, 4);
//! assert_eq!(c.to_bytes(), [1, 2, 3, 4]);
//! assert_eq!(Rgb::from_bytes(&[1, 2, 3, 4]).unwrap(), c);
//! ```

use std::io::{Read, Write};

use byteorder::{BigEndian, ByteOrder};

use crate::cmyk::Cmyk;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::gray::Gray;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::rgb::Rgb;

/// Conversion to and from the persisted byte form.
pub trait Persist: Sized {
    /// Encodes the value.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decodes a value.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFormat`] for a payload of the wrong length
    /// - [`Error::InvalidComponent`] for out-of-range channels
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Writes the encoded value to `writer`.
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Reads `reader` to the end and decodes its content.
    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }
}

/// Checks a payload length.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if `bytes.len() != expected`.
pub fn expect_len(bytes: &[u8], expected: usize, what: &str) -> Result<()> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(Error::invalid_format(format!(
            "{what} payload must be {expected} bytes, got {}",
            bytes.len()
        )))
    }
}

const FLOAT_MODEL_LEN: usize = 3 * 8 + 1;

fn encode_floats(values: [f64; 3], alpha: u8) -> Vec<u8> {
    let mut buf = vec![0u8; FLOAT_MODEL_LEN];
    for (chunk, v) in buf.chunks_exact_mut(8).zip(values) {
        BigEndian::write_f64(chunk, v);
    }
    buf[FLOAT_MODEL_LEN - 1] = alpha;
    buf
}

fn decode_floats(bytes: &[u8], what: &str) -> Result<([f64; 3], u8)> {
    expect_len(bytes, FLOAT_MODEL_LEN, what)?;
    let values = [
        BigEndian::read_f64(&bytes[0..8]),
        BigEndian::read_f64(&bytes[8..16]),
        BigEndian::read_f64(&bytes[16..24]),
    ];
    Ok((values, bytes[FLOAT_MODEL_LEN - 1]))
}

impl Persist for Rgb {
    fn to_bytes(&self) -> Vec<u8> {
        vec![self.red(), self.green(), self.blue(), self.alpha()]
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len(bytes, 4, "RGB")?;
        Ok(Rgb::rgba(bytes[0], bytes[1], bytes[2], bytes[3]))
    }
}

impl Persist for Hsv {
    fn to_bytes(&self) -> Vec<u8> {
        encode_floats([self.hue(), self.saturation(), self.value()], self.alpha())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let ([h, s, v], alpha) = decode_floats(bytes, "HSV")?;
        Hsv::hsva(h, s, v, alpha)
    }
}

impl Persist for Hsl {
    fn to_bytes(&self) -> Vec<u8> {
        encode_floats([self.hue(), self.saturation(), self.luminance()], self.alpha())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let ([h, s, l], alpha) = decode_floats(bytes, "HSL")?;
        Hsl::hsla(h, s, l, alpha)
    }
}

impl Persist for Cmyk {
    fn to_bytes(&self) -> Vec<u8> {
        vec![self.cyan(), self.magenta(), self.yellow(), self.key(), self.alpha()]
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len(bytes, 5, "CMYK")?;
        Ok(Cmyk::cmyka(bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]))
    }
}

impl Persist for Gray {
    fn to_bytes(&self) -> Vec<u8> {
        vec![self.white(), self.alpha()]
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len(bytes, 2, "Gray")?;
        Ok(Gray::gray_alpha(bytes[0], bytes[1]))
    }
}
