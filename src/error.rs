//! Error types for favicon generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating a favicon.
///
/// Font resolution and canvas allocation are infallible by design, so the
/// only sources of error are color parsing and the two save steps. An ICO
/// failure is caught by the generator and reported as a warning; it is never
/// propagated out of [`IconGenerator::run`](crate::IconGenerator::run).
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A color string in the spec could not be parsed as a hex color.
    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        /// The offending value as it appeared in the spec.
        value: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    /// The PNG could not be encoded or written.
    #[error("failed to save PNG to {path}: {source}")]
    PngSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The ICO payload could not be encoded.
    #[error("failed to encode ICO for {path}: {source}")]
    IcoEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The encoded ICO could not be written out.
    #[error("failed to write ICO to {path}: {source}")]
    IcoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
