//! Coordinate assignment for newly uploaded images.
//!
//! Runs outside the viewer (as a storage trigger): every new image gets a
//! uniformly random point on the unit sphere, stored as string custom
//! metadata that the catalog loader later reads back.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::catalog::{ObjectMetadata, SPHERE_X, SPHERE_Y, SPHERE_Z};

/// Result of [`assign_coordinates`].
#[derive(Debug, Clone, PartialEq)]
pub enum AssignOutcome {
    /// The object is not an image; left untouched.
    NotAnImage,
    /// The object already carries a coordinate; left untouched.
    AlreadyAssigned,
    /// A new coordinate was generated.
    Assigned {
        /// The generated point.
        point: Vec3,
        /// Custom metadata to write back to the object.
        metadata: BTreeMap<String, String>,
    },
}

/// Uniformly random point on the unit sphere.
///
/// `theta = 2*pi*u`, `phi = acos(2v - 1)` for `u, v ~ U(0, 1)`.
pub fn random_sphere_point<R: Rng>(rng: &mut R) -> Vec3 {
    let u: f64 = rng.random();
    let v: f64 = rng.random();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        (phi.sin() * theta.cos()) as f32,
        (phi.sin() * theta.sin()) as f32,
        phi.cos() as f32,
    )
}

/// Decide whether `object` needs a coordinate and generate one.
///
/// Idempotent: objects that already have `sphere_x` and non-image content
/// are skipped.
pub fn assign_coordinates<R: Rng>(
    object: &ObjectMetadata,
    rng: &mut R,
) -> AssignOutcome {
    let is_image = object
        .content_type
        .as_deref()
        .is_some_and(|ty| ty.starts_with("image/"));
    if !is_image {
        log::info!("upload: {} is not an image, skipping", object.name);
        return AssignOutcome::NotAnImage;
    }
    if object.custom.contains_key(SPHERE_X) {
        log::info!("upload: {} already has coordinates", object.name);
        return AssignOutcome::AlreadyAssigned;
    }

    let point = random_sphere_point(rng);
    let metadata = [
        (SPHERE_X, point.x),
        (SPHERE_Y, point.y),
        (SPHERE_Z, point.z),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), value.to_string()))
    .collect();
    log::info!("upload: assigned {point} to {}", object.name);
    AssignOutcome::Assigned { point, metadata }
}
