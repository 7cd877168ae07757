//! Object-store contract consumed by the catalog loader, plus an
//! in-process implementation.

use std::collections::BTreeMap;

use glam::Vec3;

use crate::error::GalleryError;

/// Custom-metadata key holding the stored sphere x coordinate.
pub const SPHERE_X: &str = "sphere_x";
/// Custom-metadata key holding the stored sphere y coordinate.
pub const SPHERE_Y: &str = "sphere_y";
/// Custom-metadata key holding the stored sphere z coordinate.
pub const SPHERE_Z: &str = "sphere_z";

/// Metadata of one stored object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectMetadata {
    /// Object path within the bucket.
    pub name: String,
    /// MIME type, when the store records one.
    pub content_type: Option<String>,
    /// String-valued custom metadata.
    pub custom: BTreeMap<String, String>,
}

impl ObjectMetadata {
    /// Stored sphere coordinate, if all three components are present and
    /// parse as finite floats.
    #[must_use]
    pub fn sphere_coordinate(&self) -> Option<Vec3> {
        let component = |key: &str| -> Option<f32> {
            self.custom
                .get(key)?
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
        };
        Some(Vec3::new(
            component(SPHERE_X)?,
            component(SPHERE_Y)?,
            component(SPHERE_Z)?,
        ))
    }
}

/// Read access to a bucket of images.
///
/// Implementations perform blocking I/O; the loader calls them either on
/// the UI thread ([`CatalogLoader::load`](super::CatalogLoader::load)) or
/// on a worker thread ([`CatalogLoader::spawn`](super::CatalogLoader::spawn)).
pub trait ObjectStore {
    /// Reference to one stored object.
    type Object;

    /// Every object at the bucket root, in listing order.
    fn list(&self) -> Result<Vec<Self::Object>, GalleryError>;

    /// URL an image can be displayed from.
    fn resolve_url(&self, object: &Self::Object) -> Result<String, GalleryError>;

    /// Object metadata, including custom fields.
    fn metadata(
        &self,
        object: &Self::Object,
    ) -> Result<ObjectMetadata, GalleryError>;
}

/// One object held by a [`MemoryObjectStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryObject {
    /// Display URL.
    pub url: String,
    /// Object metadata.
    pub metadata: ObjectMetadata,
}

/// In-process object store.
#[derive(Debug, Clone, Default)]
pub struct MemoryObjectStore {
    objects: Vec<MemoryObject>,
    failure: Option<String>,
}

impl MemoryObjectStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose listing always fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            objects: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Add an image object; `coordinate` becomes string custom metadata.
    #[must_use]
    pub fn with_image(
        mut self,
        name: &str,
        url: &str,
        coordinate: Option<Vec3>,
    ) -> Self {
        let mut custom = BTreeMap::new();
        if let Some(p) = coordinate {
            let _ = custom.insert(SPHERE_X.to_owned(), p.x.to_string());
            let _ = custom.insert(SPHERE_Y.to_owned(), p.y.to_string());
            let _ = custom.insert(SPHERE_Z.to_owned(), p.z.to_string());
        }
        self.insert(MemoryObject {
            url: url.to_owned(),
            metadata: ObjectMetadata {
                name: name.to_owned(),
                content_type: Some("image/jpeg".to_owned()),
                custom,
            },
        });
        self
    }

    /// Append an object.
    pub fn insert(&mut self, object: MemoryObject) {
        self.objects.push(object);
    }

    /// Mutable access to an object's metadata by name.
    pub fn metadata_mut(&mut self, name: &str) -> Option<&mut ObjectMetadata> {
        self.objects
            .iter_mut()
            .find(|o| o.metadata.name == name)
            .map(|o| &mut o.metadata)
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn get(&self, index: usize) -> Result<&MemoryObject, GalleryError> {
        self.objects
            .get(index)
            .ok_or_else(|| GalleryError::Fetch(format!("no object #{index}")))
    }
}

impl ObjectStore for MemoryObjectStore {
    type Object = usize;

    fn list(&self) -> Result<Vec<usize>, GalleryError> {
        match &self.failure {
            Some(message) => Err(GalleryError::Fetch(message.clone())),
            None => Ok((0..self.objects.len()).collect()),
        }
    }

    fn resolve_url(&self, object: &usize) -> Result<String, GalleryError> {
        Ok(self.get(*object)?.url.clone())
    }

    fn metadata(&self, object: &usize) -> Result<ObjectMetadata, GalleryError> {
        Ok(self.get(*object)?.metadata.clone())
    }
}
