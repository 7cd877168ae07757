use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Grid arrangement and scene-space scaling.
pub struct LayoutOptions {
    /// Number of columns in the grid layout.
    #[schemars(title = "Grid Columns", range(min = 1, max = 50))]
    pub grid_columns: usize,
    /// Total normalized width the grid columns span.
    #[schemars(skip)]
    pub grid_extent: f32,
    /// Uniform factor mapping normalized positions into render space.
    #[schemars(skip)]
    pub scene_scale: f32,
    /// Z translation of the scene group while the grid layout is active.
    #[schemars(title = "Grid Depth Offset", range(min = 0.0, max = 300.0), extend("step" = 5.0))]
    pub grid_depth_offset: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            grid_columns: crate::layout::GRID_COLUMNS,
            grid_extent: crate::layout::GRID_EXTENT,
            scene_scale: crate::layout::SCENE_SCALE,
            grid_depth_offset: 150.0,
        }
    }
}
