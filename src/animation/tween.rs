//! Scalar tween: one value interpolated over a fixed duration.

use std::time::Duration;

use super::easing::EasingFunction;

/// Time-based interpolation of a single scalar from `from` to `to`.
///
/// Progress is advanced explicitly with [`advance`](Self::advance) so the
/// tween is independent of any clock; the render loop feeds it frame
/// deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
}

impl Tween {
    /// Tween from `from` to `to` over `duration` with the given easing.
    #[must_use]
    pub fn new(
        from: f32,
        to: f32,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            duration: duration.as_secs_f32(),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    /// Normalized progress (0.0 to 1.0). Zero-length tweens are complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Current interpolated value. Exactly `to` once finished.
    #[must_use]
    pub fn value(&self) -> f32 {
        let t = self.progress();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.evaluate(t)
    }

    /// Start value.
    #[must_use]
    pub fn start(&self) -> f32 {
        self.from
    }

    /// End value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the tween has reached its end value.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
