// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the configuration layer and the host collaborators.
//!
//! The banner core never hands errors back to the code that presents a
//! notification: every failure degrades to "not shown" or "no effect".
//! These types only travel across the IO edges (config files, sound lookup).

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Sound Error: {0}")]
    Sound(#[from] SoundError),
}

/// Failures reported by a [`SoundService`](crate::banner::SoundService).
///
/// Both variants are recovered locally by falling back to the system alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoundError {
    /// The named sound resource does not exist.
    #[error("sound resource not found: {name}.{kind}")]
    ResourceNotFound { name: String, kind: String },

    /// The resource exists but could not be played.
    #[error("playback failed: {0}")]
    Playback(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn sound_error_converts_and_names_resource() {
        let err: Error = SoundError::ResourceNotFound {
            name: "chime".into(),
            kind: "wav".into(),
        }
        .into();
        assert!(matches!(err, Error::Sound(SoundError::ResourceNotFound { .. })));
        assert!(format!("{}", err).contains("chime.wav"));
    }

    #[test]
    fn invalid_toml_maps_to_config_error() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("toml should be rejected").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
