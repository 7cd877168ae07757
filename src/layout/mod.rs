//! Position engine: layout kinds, per-layout position tables, and the pure
//! functions that place each node.
//!
//! Two layouts exist. `sphere` positions come from per-image coordinates
//! stored in the object store; `grid` positions are computed when the
//! catalog loads. Both tables are fully populated before first render and
//! are swapped wholesale on layout change.

mod grid;
mod position;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use glam::Vec3;
pub use grid::{grid_position, grid_table};
pub use position::{
    resolve_position, sphere_radial_distance, SPHERE_MAX_RADIUS,
    SPHERE_MIN_RADIUS,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::image::ImageId;

/// Default number of grid columns.
pub const GRID_COLUMNS: usize = 10;
/// Default normalized width spanned by the grid columns.
pub const GRID_EXTENT: f32 = 0.9;
/// Default uniform factor mapping normalized positions into render space.
pub const SCENE_SCALE: f32 = 600.0;

/// A named spatial arrangement of the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Nodes scattered through a ball around the origin.
    #[default]
    Sphere,
    /// Nodes in a flat, centered, row-major grid.
    Grid,
}

impl LayoutKind {
    /// Lower-case layout name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sphere" => Ok(Self::Sphere),
            "grid" => Ok(Self::Grid),
            other => Err(format!("unknown layout: {other}")),
        }
    }
}

/// Mapping from image id to a normalized 3D point for one layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTable {
    positions: FxHashMap<ImageId, Vec3>,
}

impl LayoutTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            ),
        }
    }

    /// Set the position for `id`, replacing any previous entry.
    pub fn insert(&mut self, id: ImageId, position: Vec3) {
        let _ = self.positions.insert(id, position);
    }

    /// Position for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ImageId) -> Option<Vec3> {
        self.positions.get(id).copied()
    }

    /// Whether `id` has an entry.
    #[must_use]
    pub fn contains(&self, id: &ImageId) -> bool {
        self.positions.contains_key(id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(id, position)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ImageId, &Vec3)> {
        self.positions.iter()
    }
}

impl FromIterator<(ImageId, Vec3)> for LayoutTable {
    fn from_iter<I: IntoIterator<Item = (ImageId, Vec3)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// The per-layout position tables. Shared, never partially updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Layouts {
    /// Stored sphere coordinates.
    pub sphere: Arc<LayoutTable>,
    /// Computed grid coordinates.
    pub grid: Arc<LayoutTable>,
}

impl Layouts {
    /// Wrap both tables.
    #[must_use]
    pub fn new(sphere: LayoutTable, grid: LayoutTable) -> Self {
        Self {
            sphere: Arc::new(sphere),
            grid: Arc::new(grid),
        }
    }

    /// Whether both tables are shared with `other`.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sphere, &other.sphere)
            && Arc::ptr_eq(&self.grid, &other.grid)
    }

    /// Table for `kind`.
    #[must_use]
    pub fn get(&self, kind: LayoutKind) -> &Arc<LayoutTable> {
        match kind {
            LayoutKind::Sphere => &self.sphere,
            LayoutKind::Grid => &self.grid,
        }
    }
}
