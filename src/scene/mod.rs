//! Scene renderer: maps the store's catalog and active layout into visual
//! nodes, and resolves pointer rays back to images.
//!
//! The renderer listens to `images`, `node_positions`, `layout` and
//! `target_image`. Node positions are group-local; the scene-group
//! transform owned by the camera animator places them in the world.

mod node;
mod texture;
mod transform;

use glam::Vec3;
pub use node::{billboard_size, VisualNode};
pub use texture::{TextureSource, TextureStatus, TextureTable};
pub use transform::GroupTransform;

use crate::camera::{Camera, Ray};
use crate::image::ImageId;
use crate::layout::resolve_position;
use crate::options::GalleryOptions;
use crate::store::{Fields, GalleryState, Store, Subscription};

/// Keeps a list of [`VisualNode`]s in step with the store.
pub struct SceneRenderer {
    thumbnail_size: f32,
    dim_opacity: f32,
    scene_scale: f32,
    subscription: Subscription,
    nodes: Vec<VisualNode>,
    /// Bumped whenever `nodes` changes.
    generation: u64,
}

impl SceneRenderer {
    /// Renderer built from the current store state.
    pub fn new(store: &mut Store, options: &GalleryOptions) -> Self {
        let subscription = store.subscribe(
            Fields::IMAGES
                | Fields::NODE_POSITIONS
                | Fields::LAYOUT
                | Fields::TARGET_IMAGE,
        );
        let mut renderer = Self {
            thumbnail_size: options.scene.thumbnail_size,
            dim_opacity: options.scene.dim_opacity,
            scene_scale: options.layout.scene_scale,
            subscription,
            nodes: Vec::new(),
            generation: 0,
        };
        renderer.rebuild(store.state());
        renderer
    }

    /// Rebuild nodes if the store changed, then refresh texture state.
    ///
    /// Returns whether any node changed.
    pub fn sync(&mut self, store: &Store, textures: &dyn TextureSource) -> bool {
        let rebuilt = self.subscription.poll().is_some();
        if rebuilt {
            self.rebuild(store.state());
        }
        let refreshed = self.refresh_textures(textures);
        if rebuilt || refreshed {
            self.generation += 1;
        }
        rebuilt || refreshed
    }

    fn rebuild(&mut self, state: &GalleryState) {
        let Some(positions) = &state.node_positions else {
            self.nodes.clear();
            return;
        };
        let target = state.target_image.as_ref();
        self.nodes = state
            .images()
            .iter()
            .enumerate()
            .filter_map(|(index, image)| {
                let raw = positions.get(&image.id)?;
                let highlight = target == Some(&image.id);
                let dim = target.is_some() && !highlight;
                Some(VisualNode {
                    id: image.id.clone(),
                    index,
                    position: resolve_position(state.layout, raw, index)
                        * self.scene_scale,
                    highlight,
                    dim,
                    opacity: if dim { self.dim_opacity } else { 1.0 },
                    texture: TextureStatus::Pending,
                    size: None,
                })
            })
            .collect();
        log::debug!("scene: rebuilt {} nodes", self.nodes.len());
    }

    fn refresh_textures(&mut self, textures: &dyn TextureSource) -> bool {
        let mut changed = false;
        for node in &mut self.nodes {
            let status = textures.status(&node.id);
            if status == node.texture {
                continue;
            }
            if status == TextureStatus::Failed {
                log::warn!("scene: texture for {} failed to load", node.id);
            }
            node.size = match status {
                TextureStatus::Ready { width, height } => {
                    billboard_size(width, height, self.thumbnail_size)
                }
                TextureStatus::Pending | TextureStatus::Failed => None,
            };
            node.texture = status;
            changed = true;
        }
        changed
    }

    /// Every node, drawable or not, in catalog order.
    #[must_use]
    pub fn nodes(&self) -> &[VisualNode] {
        &self.nodes
    }

    /// Nodes whose textures are ready.
    pub fn drawable(&self) -> impl Iterator<Item = &VisualNode> {
        self.nodes.iter().filter(|node| node.is_drawable())
    }

    /// Node for `id`.
    #[must_use]
    pub fn node(&self, id: &ImageId) -> Option<&VisualNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    /// Counter bumped whenever the node list changes.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// World-space centre of a node under the group transform.
    #[must_use]
    pub fn world_position(node: &VisualNode, group: &GroupTransform) -> Vec3 {
        group.transform_point(node.position)
    }

    /// Nearest drawable node whose billboard `ray` crosses.
    #[must_use]
    pub fn pick(
        &self,
        ray: &Ray,
        camera: &Camera,
        group: &GroupTransform,
    ) -> Option<&ImageId> {
        self.drawable()
            .filter_map(|node| {
                let center = Self::world_position(node, group);
                node.hit_distance(ray, camera, center).map(|t| (t, node))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, node)| &node.id)
    }
}

impl std::fmt::Debug for SceneRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneRenderer")
            .field("nodes", &self.nodes.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::catalog::{CatalogLoader, MemoryObjectStore};
    use crate::layout::LayoutKind;

    fn loaded_store(count: usize) -> Store {
        let mut store = Store::new();
        let source = (0..count).fold(MemoryObjectStore::new(), |s, i| {
            let t = i as f32;
            s.with_image(
                &format!("{i}.jpg"),
                &format!("https://img/{i}.jpg"),
                Some(Vec3::new(t.cos(), t.sin(), 0.0)),
            )
        });
        CatalogLoader::default().load(&mut store, &source);
        store
    }

    fn id(i: usize) -> ImageId {
        ImageId::from(format!("https://img/{i}.jpg"))
    }

    #[test]
    fn empty_until_catalog_loads() {
        let mut store = Store::new();
        let mut renderer = SceneRenderer::new(&mut store, &GalleryOptions::default());
        assert!(renderer.nodes().is_empty());
        assert!(!renderer.sync(&store, &TextureTable::all_ready(1, 1)));
    }

    #[test]
    fn nodes_follow_layout_switch() {
        let mut store = loaded_store(3);
        let mut renderer = SceneRenderer::new(&mut store, &GalleryOptions::default());
        let textures = TextureTable::new();
        assert_eq!(renderer.nodes().len(), 3);

        store.set_layout(LayoutKind::Grid);
        assert!(renderer.sync(&store, &textures));
        let grid = store.state().layouts.as_ref().unwrap().grid.clone();
        for node in renderer.nodes() {
            assert_eq!(node.position, grid.get(&node.id).unwrap() * 600.0);
        }
    }

    #[test]
    fn selection_highlights_and_dims() {
        let mut store = loaded_store(3);
        let mut renderer = SceneRenderer::new(&mut store, &GalleryOptions::default());
        store.set_target_image(Some(id(1)));
        let _ = renderer.sync(&store, &TextureTable::new());

        let flags: Vec<_> = renderer
            .nodes()
            .iter()
            .map(|n| (n.highlight, n.dim, n.opacity))
            .collect();
        assert_eq!(
            flags,
            [(false, true, 0.1), (true, false, 1.0), (false, true, 0.1)]
        );
    }

    #[test]
    fn pending_and_failed_textures_are_not_drawn() {
        let mut store = loaded_store(3);
        let mut renderer = SceneRenderer::new(&mut store, &GalleryOptions::default());
        let mut textures = TextureTable::new();
        textures.set(id(0), TextureStatus::Ready { width: 400, height: 200 });
        textures.set(id(2), TextureStatus::Failed);

        assert!(renderer.sync(&store, &textures));
        let drawable: Vec<_> = renderer.drawable().map(|n| n.id.clone()).collect();
        assert_eq!(drawable, [id(0)]);
        assert_eq!(renderer.node(&id(0)).unwrap().size, Some(Vec2::new(32.0, 16.0)));
        assert!(!renderer.sync(&store, &textures));
    }

    #[test]
    fn pick_returns_nearest_hit() {
        let mut store = Store::new();
        // Same stored point; the radial scale puts index 0 at z = 60 and
        // index 1 at z = 148.8, closer to the camera.
        let source = MemoryObjectStore::new()
            .with_image("a.jpg", "a", Some(Vec3::Z))
            .with_image("b.jpg", "b", Some(Vec3::Z));
        CatalogLoader::default().load(&mut store, &source);
        let mut renderer = SceneRenderer::new(&mut store, &GalleryOptions::default());
        let _ = renderer.sync(&store, &TextureTable::all_ready(10, 10));

        let camera = Camera::from_options(&crate::options::CameraOptions::default());
        let group = GroupTransform::IDENTITY;
        let ray = camera.ray_from_ndc(Vec2::ZERO);
        assert_eq!(renderer.pick(&ray, &camera, &group), Some(&ImageId::from("b")));

        let miss = camera.ray_from_ndc(Vec2::new(0.9, 0.9));
        assert_eq!(renderer.pick(&miss, &camera, &group), None);
    }
}
