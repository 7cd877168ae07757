//! Camera system for the gallery scene.
//!
//! Provides a perspective camera with ray casting, user orbit controls,
//! and the animator that flies the camera in response to store changes.

mod animator;
mod controls;
mod core;

pub use animator::{AnimationEvent, AnimationGoal, CameraAnimator};
pub use controls::OrbitControls;
pub use self::core::{Camera, Ray};
