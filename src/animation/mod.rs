//! Tween-based animation primitives for camera and scene-group transitions.
//!
//! A [`Tween`] interpolates one scalar; an [`AnimationGroup`] joins several
//! tweens (one per coordinate axis) and reports a single completion once
//! all of them have finished.

mod easing;
mod group;
mod tween;

pub use easing::EasingFunction;
pub use group::{AnimationGroup, GroupState, GroupStep};
pub use tween::Tween;
