//! Catalog image identity.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Resolvable URL identifying one image. Used both as the catalog key and
/// as the texture source.
///
/// Cloning is cheap (shared string).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ImageId(Arc<str>);

impl ImageId {
    /// Identifier from any string-like value.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    /// Unique, resolvable identifier.
    pub id: ImageId,
}

impl Image {
    /// Image with the given identifier.
    pub fn new(id: impl Into<ImageId>) -> Self {
        Self { id: id.into() }
    }
}
