//! Error types for tint-core operations.
//!
//! This module provides a unified error handling system for every color
//! model, the shared color algebra and the external representations
//! (hex strings, packed bytes) built on top of them.
//!
//! # Overview
//!
//! The [`Error`] enum covers all failure modes that can occur during:
//! - Construction of a color value (channel out of range, NaN)
//! - Algebra calls (interpolation position, sequence step count)
//! - Blending with a mode the color model does not support
//! - Parsing of external representations (hex strings, persisted bytes)
//! - Lookups in closed-set tables (named colors, terminal palette)
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Error, Result};
//!
//! fn check_position(position: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&position) {
//!         return Err(Error::invalid_argument(format!(
//!             "position must be between 0 and 1, got {position}"
//!         )));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::rgb::Rgb`], [`crate::hsv::Hsv`], ... - constructor validation
//! - [`crate::color::Color`] - algebra argument checks
//! - `tint-palette` - unknown names and palette entries
//! - `tint` - mixer writes and color-spec parsing

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, converting or combining colors.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Value errors**: [`InvalidComponent`](Error::InvalidComponent), [`InvalidArgument`](Error::InvalidArgument)
/// - **Mode errors**: [`UnsupportedBlendMode`](Error::UnsupportedBlendMode)
/// - **Format errors**: [`InvalidFormat`](Error::InvalidFormat), [`Io`](Error::Io)
/// - **Lookup errors**: [`UnknownName`](Error::UnknownName), [`UnknownPaletteEntry`](Error::UnknownPaletteEntry)
#[derive(Debug, Error)]
pub enum Error {
    /// A channel value is outside its legal range.
    ///
    /// Returned by every validating constructor. NaN and infinities are
    /// always rejected, since range comparisons against NaN are false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Error;
    ///
    /// let err = Error::invalid_component("red", 256.0, "0..=255");
    /// assert!(err.to_string().contains("red"));
    /// ```
    #[error("invalid value {value} for {channel}, must be within {range}")]
    InvalidComponent {
        /// Channel name (`red`, `hue`, ...)
        channel: &'static str,
        /// Offending value
        value: f64,
        /// Legal range, for display
        range: &'static str,
    },

    /// An algebra argument is out of its domain.
    ///
    /// Interpolation positions outside `[0, 1]`, sequence step counts
    /// below 1 or component lists of the wrong length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The blend mode is unknown or not supported by this color model.
    #[error("unsupported blend mode '{mode}' for {model}")]
    UnsupportedBlendMode {
        /// Requested mode
        mode: String,
        /// Color model that rejected it
        model: &'static str,
    },

    /// Malformed external representation.
    ///
    /// Hex strings that are neither `#rgb` nor `#rrggbb`, persisted bytes
    /// with a wrong length or an unknown kind tag.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Name lookup miss in the named-color table.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Symbol lookup miss in the terminal palette.
    #[error("unknown palette entry: {0}")]
    UnknownPaletteEntry(String),

    /// I/O error while reading or writing the persisted form.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidComponent`] error.
    ///
    /// # Arguments
    ///
    /// * `channel` - Channel name
    /// * `value` - Rejected value
    /// * `range` - Legal range for display
    #[inline]
    pub fn invalid_component(channel: &'static str, value: f64, range: &'static str) -> Self {
        Self::InvalidComponent {
            channel,
            value,
            range,
        }
    }

    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::UnsupportedBlendMode`] error.
    #[inline]
    pub fn unsupported_blend_mode(mode: impl Into<String>, model: &'static str) -> Self {
        Self::UnsupportedBlendMode {
            mode: mode.into(),
            model,
        }
    }

    /// Creates an [`Error::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Creates an [`Error::UnknownName`] error.
    #[inline]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName(name.into())
    }

    /// Creates an [`Error::UnknownPaletteEntry`] error.
    #[inline]
    pub fn unknown_palette_entry(symbol: impl Into<String>) -> Self {
        Self::UnknownPaletteEntry(symbol.into())
    }

    /// Returns `true` if this is a channel range error.
    #[inline]
    pub fn is_component_error(&self) -> bool {
        matches!(self, Self::InvalidComponent { .. })
    }

    /// Returns `true` if this is a closed-set lookup miss.
    #[inline]
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::UnknownName(_) | Self::UnknownPaletteEntry(_))
    }

    /// Returns `true` if this is a malformed-input error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat(_) | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_component() {
        let err = Error::invalid_component("green", -1.0, "0..=255");
        let msg = err.to_string();
        assert!(msg.contains("green"));
        assert!(msg.contains("-1"));
        assert!(msg.contains("0..=255"));
        assert!(err.is_component_error());
    }

    #[test]
    fn test_nan_component_message() {
        let err = Error::invalid_component("hue", f64::NAN, "0..=1");
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_unsupported_blend_mode() {
        let err = Error::unsupported_blend_mode("multiply", "HSV");
        let msg = err.to_string();
        assert!(msg.contains("multiply"));
        assert!(msg.contains("HSV"));
    }

    #[test]
    fn test_lookup_errors() {
        assert!(Error::unknown_name("Octarine").is_lookup_error());
        assert!(Error::unknown_palette_entry("magenta").is_lookup_error());
        assert!(!Error::invalid_argument("x").is_lookup_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: Error = io_err.into();
        assert!(err.is_format_error());
    }
}
