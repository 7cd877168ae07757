use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Catalog", inline)]
#[serde(default)]
/// Where the image catalog is fetched from.
pub struct CatalogOptions {
    /// Storage bucket name. A `gs://` prefix is accepted and stripped.
    #[schemars(skip)]
    pub bucket: String,
}

impl CatalogOptions {
    /// Bucket name without any `gs://` scheme prefix.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        self.bucket.strip_prefix("gs://").unwrap_or(&self.bucket)
    }

    /// The configured bucket name, or an error when none is set.
    pub fn require_bucket(&self) -> Result<&str, GalleryError> {
        match self.bucket_name().trim() {
            "" => Err(GalleryError::OptionsParse(
                "no catalog bucket configured".to_owned(),
            )),
            name => Ok(name),
        }
    }
}
