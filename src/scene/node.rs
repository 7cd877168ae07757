//! Visual nodes: one camera-facing billboard per catalog image.

use glam::{Vec2, Vec3};
use serde::Serialize;

use super::texture::TextureStatus;
use crate::camera::{Camera, Ray};
use crate::image::ImageId;

/// Billboard size preserving the source aspect ratio, with the longer edge
/// equal to `thumbnail`. `None` for a zero-sized source.
#[must_use]
pub fn billboard_size(width: u32, height: u32, thumbnail: f32) -> Option<Vec2> {
    if width == 0 || height == 0 {
        return None;
    }
    let (w, h) = (width as f32, height as f32);
    Some(if w >= h {
        Vec2::new(thumbnail, thumbnail * h / w)
    } else {
        Vec2::new(thumbnail * w / h, thumbnail)
    })
}

/// Renderable description of one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualNode {
    /// Image this node shows.
    pub id: ImageId,
    /// Ordinal index in the catalog.
    pub index: usize,
    /// Group-local render-space position.
    pub position: Vec3,
    /// This node is the current selection.
    pub highlight: bool,
    /// A selection exists and this node is not it.
    pub dim: bool,
    /// Material opacity.
    pub opacity: f32,
    /// Texture state last reported for this image.
    pub texture: TextureStatus,
    /// Billboard size; `None` until the texture is ready.
    pub size: Option<Vec2>,
}

impl VisualNode {
    /// Whether the node has a usable texture and is drawn.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.size.is_some()
    }

    /// Distance along `ray` at which it crosses this node's billboard
    /// centred at `center` and facing `camera`.
    #[must_use]
    pub fn hit_distance(&self, ray: &Ray, camera: &Camera, center: Vec3) -> Option<f32> {
        let size = self.size?;
        let normal = camera.forward();
        let denom = ray.direction.dot(normal);
        if denom.abs() < f32::EPSILON {
            return None;
        }
        let t = (center - ray.origin).dot(normal) / denom;
        if t <= 0.0 {
            return None;
        }
        let local = ray.at(t) - center;
        let (right, up) = camera.basis();
        let half = size * 0.5;
        (local.dot(right).abs() <= half.x && local.dot(up).abs() <= half.y)
            .then_some(t)
    }
}
