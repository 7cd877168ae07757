use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Per-node appearance.
pub struct SceneOptions {
    /// Longer billboard edge, in render-space units.
    #[schemars(title = "Thumbnail Size", range(min = 4.0, max = 128.0), extend("step" = 1.0))]
    pub thumbnail_size: f32,
    /// Opacity of nodes that are not the current selection.
    #[schemars(title = "Dim Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub dim_opacity: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            thumbnail_size: 32.0,
            dim_opacity: 0.1,
        }
    }
}
