use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, home pose and orbit-control parameters.
pub struct CameraOptions {
    /// Camera position the reset animation returns to.
    #[schemars(skip)]
    pub home_position: [f32; 3],
    /// Orbit target the reset animation returns to.
    #[schemars(skip)]
    pub home_target: [f32; 3],
    /// Camera-to-node distance after focusing a selected image.
    #[schemars(title = "Focus Distance", range(min = 5.0, max = 200.0), extend("step" = 1.0))]
    pub focus_distance: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 110.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Closest the orbit controls may zoom to the target.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub min_distance: f32,
    /// Farthest the orbit controls may zoom from the target.
    #[schemars(title = "Max Distance", range(min = 100.0, max = 2000.0), extend("step" = 10.0))]
    pub max_distance: f32,
    /// Rotation sensitivity (radians per pixel of drag).
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity (world units per pixel of drag).
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Zoom sensitivity (fraction of distance per scroll unit).
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Whether panning is allowed.
    #[schemars(title = "Enable Pan")]
    pub enable_pan: bool,
}

impl CameraOptions {
    /// Home camera position as a vector.
    #[must_use]
    pub fn home_position(&self) -> Vec3 {
        Vec3::from_array(self.home_position)
    }

    /// Home orbit target as a vector.
    #[must_use]
    pub fn home_target(&self) -> Vec3 {
        Vec3::from_array(self.home_target)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            home_position: [0.0, 0.0, 300.0],
            home_target: [0.0, 0.0, 0.0],
            focus_distance: 25.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 10_000.0,
            min_distance: 20.0,
            max_distance: 500.0,
            rotate_speed: 0.005,
            pan_speed: 0.5,
            zoom_speed: 0.1,
            enable_pan: true,
        }
    }
}
