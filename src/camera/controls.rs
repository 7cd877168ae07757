//! Orbit controls: drag-to-rotate, drag-to-pan and scroll-to-zoom around
//! the camera's orbit target.

use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use crate::options::CameraOptions;

/// Smallest angle kept between the view direction and either pole, so
/// pitching never flips the camera over.
const POLE_MARGIN: f32 = 0.01;

/// User-driven orbit around `Camera::target`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
    enable_pan: bool,
}

impl OrbitControls {
    /// Controls configured from camera options.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance.min(options.max_distance),
            max_distance: options.max_distance.max(options.min_distance),
            enable_pan: options.enable_pan,
        }
    }

    /// Whether panning is enabled.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.enable_pan
    }

    /// Orbit by a pointer drag of `delta` pixels.
    ///
    /// Horizontal drag yaws about world up; vertical drag pitches about the
    /// camera's right axis, stopping short of the poles.
    pub fn rotate(&self, camera: &mut Camera, delta: Vec2) {
        let yaw = Quat::from_axis_angle(camera.up, -delta.x * self.rotate_speed);
        let mut offset = yaw * (camera.eye - camera.target);

        let right = (-offset).cross(camera.up).try_normalize();
        if let Some(right) = right {
            let pitch =
                Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
            let pitched = pitch * offset;
            let polar = pitched
                .try_normalize()
                .map_or(0.0, |dir| dir.dot(camera.up).clamp(-1.0, 1.0).acos());
            if (POLE_MARGIN..=std::f32::consts::PI - POLE_MARGIN)
                .contains(&polar)
            {
                offset = pitched;
            }
        }

        camera.eye = camera.target + offset;
    }

    /// Move eye and target together by a drag of `delta` pixels.
    pub fn pan(&self, camera: &mut Camera, delta: Vec2) {
        if !self.enable_pan {
            return;
        }
        let (right, up) = camera.basis();
        let translation = right * (-delta.x * self.pan_speed)
            + up * (delta.y * self.pan_speed);
        camera.eye += translation;
        camera.target += translation;
    }

    /// Dolly toward (positive `delta`) or away from the target.
    pub fn zoom(&self, camera: &mut Camera, delta: f32) {
        let direction = (camera.eye - camera.target)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        let distance = (camera.distance() * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        camera.eye = camera.target + direction * distance;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}
