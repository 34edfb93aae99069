pub mod json;

#[cfg(feature = "svg-io")]
pub mod svg;

use crate::errors::EpicycleError;

/// Generic I/O and format‑conversion errors.
///
/// Many I/O features are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    Json(serde_json::Error),

    MalformedInput(String),

    /// The payload decoded but describes an invalid session.
    Session(EpicycleError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Json(error) => write!(f, "Could not decode JSON: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),

            Session(error) => write!(f, "Invalid drawing: {error}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::Json(error) => Some(error),
            IoError::Session(error) => Some(error),
            IoError::MalformedInput(_) => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<serde_json::Error> for IoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<EpicycleError> for IoError {
    fn from(value: EpicycleError) -> Self {
        Self::Session(value)
    }
}
