//! Error types for the color model.
//!
//! Construction of [`Color`](crate::Color) values is validated eagerly: a
//! wrong channel count or a colorspace that cannot carry the color type is
//! rejected before any conversion machinery sees the color.

use crate::ColorType;
use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while building or validating color values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// The number of channel values does not match the color type.
    #[error("{kind} expects {expected} channel(s), got {actual}")]
    ChannelCount {
        /// Color type being constructed
        kind: ColorType,
        /// Channels required by the type
        expected: usize,
        /// Channels supplied
        actual: usize,
    },

    /// The colorspace cannot describe this color type.
    #[error("{kind} cannot live in colorspace {space}")]
    ColorspaceMismatch {
        /// Color type being constructed
        kind: ColorType,
        /// Name of the offending colorspace
        space: String,
    },

    /// A profile-associated color's type is neither the profile's data
    /// colorspace nor its PCS.
    #[error("{kind} is neither the data colorspace ({data}) nor the PCS ({pcs}) of profile '{profile}'")]
    ProfileRole {
        /// Color type being constructed
        kind: ColorType,
        /// Profile data colorspace
        data: ColorType,
        /// Profile connection space
        pcs: ColorType,
        /// Profile description
        profile: String,
    },

    /// Device link profiles map device to device and cannot anchor one color.
    #[error("device link profile '{0}' cannot be attached to a single color")]
    DeviceLink(String),

    /// Unknown name when parsing an identifier.
    #[error("unknown {what}: '{name}'")]
    UnknownName {
        /// Kind of identifier (color type, rgb space, ...)
        what: &'static str,
        /// The name that failed to parse
        name: String,
    },
}
