//! Per-node position resolution for the active layout.

use glam::Vec3;

use super::LayoutKind;

/// Innermost radial scale applied to sphere-layout nodes.
pub const SPHERE_MIN_RADIUS: f32 = 0.1;
/// Outermost radial scale applied to sphere-layout nodes.
pub const SPHERE_MAX_RADIUS: f32 = 0.5;

/// Deterministic radial scale for the node at `ordinal_index` in the
/// sphere layout.
///
/// `factor = ((i * 137) mod 100) / 100`, mapped linearly into
/// `[SPHERE_MIN_RADIUS, SPHERE_MAX_RADIUS]`. A fixed hash of the index, so
/// re-renders place every node identically without stored state.
#[must_use]
pub fn sphere_radial_distance(ordinal_index: usize) -> f32 {
    // (i * 137) mod 100 == ((i mod 100) * 137) mod 100, without overflow.
    let bucket = ((ordinal_index % 100) * 137) % 100;
    let factor = bucket as f32 / 100.0;
    SPHERE_MIN_RADIUS + factor * (SPHERE_MAX_RADIUS - SPHERE_MIN_RADIUS)
}

/// Resolve the normalized position of a node.
///
/// - `Grid`: the raw coordinate is already resolved at load time and is
///   returned unchanged.
/// - `Sphere`: the stored unit-sphere point is scaled component-wise by
///   [`sphere_radial_distance`] so nodes fill the ball instead of sitting
///   on its surface.
///
/// The uniform scene scale is applied afterward by the caller when mapping
/// into render space.
#[must_use]
pub fn resolve_position(
    layout: LayoutKind,
    raw: Vec3,
    ordinal_index: usize,
) -> Vec3 {
    match layout {
        LayoutKind::Grid => raw,
        LayoutKind::Sphere => raw * sphere_radial_distance(ordinal_index),
    }
}
