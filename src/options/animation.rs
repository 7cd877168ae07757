use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

/// Default transition length, in seconds.
const DEFAULT_DURATION_SECS: f32 = 0.8;
/// Longest transition accepted from configuration, in seconds.
const MAX_DURATION_SECS: f32 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing of camera and scene-group transitions.
pub struct AnimationOptions {
    /// Length of every camera/group transition, in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub duration_secs: f32,
    /// Easing curve applied to each axis tween.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl AnimationOptions {
    /// Transition duration as a [`Duration`], clamped to `[0, 3]`
    /// seconds. A NaN falls back to the default.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f32(
            self.duration_secs.clamp(0.0, MAX_DURATION_SECS),
        )
        .unwrap_or(Duration::from_millis(800))
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            easing: EasingFunction::CubicInOut,
        }
    }
}
