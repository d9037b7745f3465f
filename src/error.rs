// SPDX-License-Identifier: MPL-2.0
use crate::application::port::EngineError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Control(ControlError),
}

/// Failures of the playback controller lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// The locator was missing or invalid, or the engine refused to load it.
    InitializationFailed(String),

    /// An operation needed an engine but none is attached.
    NotInitialized,

    /// The controller was already torn down.
    Disposed,
}

impl ControlError {
    /// Wraps an engine load failure.
    pub fn from_engine(err: &EngineError) -> Self {
        ControlError::InitializationFailed(err.to_string())
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::InitializationFailed(msg) => {
                write!(f, "Initialization failed: {}", msg)
            }
            ControlError::NotInitialized => write!(f, "No engine attached"),
            ControlError::Disposed => write!(f, "Controller already disposed"),
        }
    }
}

impl std::error::Error for ControlError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Control(e) => write!(f, "Control Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ControlError> for Error {
    fn from(err: ControlError) -> Self {
        Error::Control(err)
    }
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
    fn control_error_converts_into_error() {
        let err: Error = ControlError::NotInitialized.into();
        assert!(matches!(err, Error::Control(ControlError::NotInitialized)));
        assert_eq!(err.to_string(), "Control Error: No engine attached");
    }

    #[test]
    fn engine_failure_maps_to_initialization_failed() {
        let err = ControlError::from_engine(&EngineError::Unsupported("hevc".into()));
        assert_eq!(
            err,
            ControlError::InitializationFailed("Unsupported media: hevc".into())
        );
    }
}
