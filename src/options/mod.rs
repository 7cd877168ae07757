//! Centralized gallery options with TOML preset support.
//!
//! All tweakable settings (layout geometry, camera, animation timing, node
//! appearance, catalog source) are consolidated here. Options serialize
//! to/from TOML so a deployment can ship a preset next to the binary.

mod animation;
mod camera;
mod catalog;
mod layout;
mod scene;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use catalog::CatalogOptions;
pub use layout::LayoutOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct GalleryOptions {
    /// Grid arrangement and scene scaling.
    pub layout: LayoutOptions,
    /// Camera projection, home pose and orbit controls.
    pub camera: CameraOptions,
    /// Transition timing.
    pub animation: AnimationOptions,
    /// Node appearance.
    pub scene: SceneOptions,
    /// Catalog source.
    #[schemars(skip)]
    pub catalog: CatalogOptions,
}

impl GalleryOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(GalleryOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GalleryError> {
        toml::from_str(content)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GalleryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
