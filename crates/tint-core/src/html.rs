//! Hex ("HTML") form of an RGB triple.
//!
//! Accepted input is `#?[0-9a-f]{3}` or `#?[0-9a-f]{6}`, case-insensitive.
//! The three-digit form replicates each digit (`f` reads as `ff`). Output
//! is always `#RRGGBB`, uppercase, without alpha.
//!
//! ```rust
//! use tint_core::html::{format_html, parse_html};
//!
//! assert_eq!(parse_html("#f09").unwrap(), [255, 0, 153]);
//! assert_eq!(format_html([255, 127, 0]), "#FF7F00");
//! ```

use crate::error::{Error, Result};

/// Parses a hex color into `[red, green, blue]`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for anything but 3 or 6 hex digits with
/// an optional leading `#`.
pub fn parse_html(input: &str) -> Result<[u8; 3]> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed(input));
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| malformed(input));
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, i) in out.iter_mut().zip(0..3) {
                *slot = channel(&digits[i..i + 1])? * 17;
            }
            Ok(out)
        }
        6 => Ok([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ]),
        _ => Err(malformed(input)),
    }
}

/// Formats `[red, green, blue]` as `#RRGGBB`.
pub fn format_html(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("#{r:02X}{g:02X}{b:02X}")
}

fn malformed(input: &str) -> Error {
    Error::invalid_format(format!("'{input}' is not a 3 or 6 digit hex color"))
}
