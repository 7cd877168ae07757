//! Crate-level error types.

use std::fmt;

/// Errors produced by the photosphere crate.
#[derive(Debug)]
pub enum GalleryError {
    /// Object-store request failed (network, auth, HTTP status).
    Fetch(String),
    /// Object-store response could not be interpreted.
    Metadata(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Background catalog worker failed or went away.
    Worker(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(msg) => write!(f, "object store fetch error: {msg}"),
            Self::Metadata(msg) => {
                write!(f, "object metadata error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Worker(msg) => write!(f, "catalog worker error: {msg}"),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Metadata(e.to_string())
    }
}
