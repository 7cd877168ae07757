//! The gallery state snapshot and its change tracking.

use std::sync::Arc;

use bitflags::bitflags;

use crate::image::{Image, ImageId};
use crate::layout::{LayoutKind, LayoutTable, Layouts};

bitflags! {
    /// Set of [`GalleryState`] fields, used for change notification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Fields: u16 {
        /// [`GalleryState::did_init`].
        const DID_INIT = 1 << 0;
        /// [`GalleryState::images`].
        const IMAGES = 1 << 1;
        /// [`GalleryState::layout`].
        const LAYOUT = 1 << 2;
        /// [`GalleryState::layouts`].
        const LAYOUTS = 1 << 3;
        /// [`GalleryState::node_positions`].
        const NODE_POSITIONS = 1 << 4;
        /// [`GalleryState::is_sidebar_open`].
        const SIDEBAR = 1 << 5;
        /// [`GalleryState::target_image`].
        const TARGET_IMAGE = 1 << 6;
        /// [`GalleryState::reset_cam`].
        const RESET_CAM = 1 << 7;
    }
}

/// Everything the gallery knows about the current session.
///
/// Cloning is cheap: the catalog and the layout tables are shared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    /// Whether a catalog load has been started this session.
    pub did_init: bool,
    /// The catalog in listing order; `None` until loaded.
    pub images: Option<Arc<[Image]>>,
    /// Active layout.
    pub layout: LayoutKind,
    /// Both layout tables; `None` until loaded.
    pub layouts: Option<Layouts>,
    /// The active layout table (shared with `layouts`).
    pub node_positions: Option<Arc<LayoutTable>>,
    /// Whether the image list sidebar is open.
    pub is_sidebar_open: bool,
    /// Currently selected image.
    pub target_image: Option<ImageId>,
    /// Pending request to return the camera to its home pose.
    pub reset_cam: bool,
}

impl GalleryState {
    /// Catalog as a slice (empty when not loaded).
    #[must_use]
    pub fn images(&self) -> &[Image] {
        self.images.as_deref().unwrap_or(&[])
    }

    /// Whether the catalog has been loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.images.is_some()
    }

    /// Ordinal index of `id` in the catalog.
    #[must_use]
    pub fn image_index(&self, id: &ImageId) -> Option<usize> {
        self.images().iter().position(|image| &image.id == id)
    }

    /// Whether `id` is part of the catalog.
    #[must_use]
    pub fn contains_image(&self, id: &ImageId) -> bool {
        self.image_index(id).is_some()
    }

    /// Fields whose values differ between `self` and `other`.
    #[must_use]
    pub fn changed_fields(&self, other: &Self) -> Fields {
        let mut fields = Fields::empty();
        fields.set(Fields::DID_INIT, self.did_init != other.did_init);
        fields.set(Fields::IMAGES, !same_arc(&self.images, &other.images));
        fields.set(Fields::LAYOUT, self.layout != other.layout);
        let same_layouts = match (&self.layouts, &other.layouts) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        };
        fields.set(Fields::LAYOUTS, !same_layouts);
        fields.set(
            Fields::NODE_POSITIONS,
            !same_arc(&self.node_positions, &other.node_positions),
        );
        fields.set(
            Fields::SIDEBAR,
            self.is_sidebar_open != other.is_sidebar_open,
        );
        fields.set(Fields::TARGET_IMAGE, self.target_image != other.target_image);
        fields.set(Fields::RESET_CAM, self.reset_cam != other.reset_cam);
        fields
    }

    /// Check the state invariants, describing the first violation.
    ///
    /// - every catalog image has an entry in both layout tables;
    /// - the active table is the table of the active layout;
    /// - the selection, if any, references a catalog image.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(layouts) = &self.layouts {
            for image in self.images() {
                if !layouts.sphere.contains(&image.id)
                    || !layouts.grid.contains(&image.id)
                {
                    return Err(format!(
                        "image {} missing from a layout table",
                        image.id
                    ));
                }
            }
            if let Some(active) = &self.node_positions {
                let expected = layouts.get(self.layout);
                let is_placeholder = !Arc::ptr_eq(active, &layouts.sphere)
                    && !Arc::ptr_eq(active, &layouts.grid);
                if !is_placeholder && !Arc::ptr_eq(active, expected) {
                    return Err(format!(
                        "node positions do not match layout {}",
                        self.layout
                    ));
                }
            }
        }
        if let Some(target) = &self.target_image {
            if !self.contains_image(target) {
                return Err(format!("selection {target} not in catalog"));
            }
        }
        Ok(())
    }
}

/// Pointer equality first, value equality as a fallback.
fn same_arc<T: PartialEq + ?Sized>(
    a: &Option<Arc<T>>,
    b: &Option<Arc<T>>,
) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a == b,
        (None, None) => true,
        _ => false,
    }
}
