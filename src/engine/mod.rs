//! The gallery engine: owns the store and wires the catalog loader, camera
//! animator, orbit controls and scene renderer together.
//!
//! Drive it with [`Gallery::execute`] for user input and
//! [`Gallery::tick`] once per frame.

mod command;

pub use command::GalleryCommand;
use glam::Vec2;

use crate::camera::{AnimationEvent, Camera, CameraAnimator, OrbitControls};
use crate::catalog::{CatalogLoader, LoadStatus, ObjectStore, PendingCatalog};
use crate::image::ImageId;
use crate::options::GalleryOptions;
use crate::scene::{
    GroupTransform, SceneRenderer, TextureSource, TextureTable, VisualNode,
};
use crate::store::{GalleryState, Store};

/// A gallery session.
pub struct Gallery {
    options: GalleryOptions,
    store: Store,
    animator: CameraAnimator,
    controls: OrbitControls,
    scene: SceneRenderer,
    loader: CatalogLoader,
    pending: Option<PendingCatalog>,
    textures: Box<dyn TextureSource>,
}

impl Gallery {
    /// New session with an empty store. Textures report as pending until
    /// a source is installed with [`set_textures`](Self::set_textures).
    #[must_use]
    pub fn new(options: GalleryOptions) -> Self {
        let mut store = Store::new();
        let animator = CameraAnimator::new(&mut store, &options);
        let scene = SceneRenderer::new(&mut store, &options);
        Self {
            controls: OrbitControls::new(&options.camera),
            loader: CatalogLoader::new(options.layout.clone()),
            options,
            store,
            animator,
            scene,
            pending: None,
            textures: Box::new(TextureTable::new()),
        }
    }

    /// Replace the texture source consulted by the scene renderer.
    pub fn set_textures(&mut self, textures: Box<dyn TextureSource>) {
        self.textures = textures;
        let _ = self.scene.sync(&self.store, self.textures.as_ref());
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// The view is ready; camera animations may run.
    pub fn mount(&mut self) {
        self.animator.mount(&mut self.store);
    }

    /// The view went away; animations stop and pending resets are released.
    pub fn unmount(&mut self) {
        self.animator.unmount(&mut self.store);
    }

    /// Load the catalog on the calling thread (once per session).
    pub fn load_catalog<S: ObjectStore + ?Sized>(&mut self, source: &S) {
        self.loader.load(&mut self.store, source);
        self.observe();
    }

    /// Load the catalog on a worker thread; [`tick`](Self::tick) commits it
    /// when ready. Returns whether a load was started.
    pub fn spawn_catalog_load<S>(&mut self, source: S) -> bool
    where
        S: ObjectStore + Send + 'static,
    {
        match self.loader.spawn(&mut self.store, source) {
            Some(pending) => {
                self.pending = Some(pending);
                true
            }
            None => false,
        }
    }

    /// Whether a background catalog load is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply a command. Store reactions (camera animation, node rebuild)
    /// start before this returns.
    pub fn execute(&mut self, command: GalleryCommand) {
        match command {
            GalleryCommand::SetLayout { layout } => self.store.set_layout(layout),
            GalleryCommand::SelectImage { id } => self.store.set_target_image(id),
            GalleryCommand::PointerMissed => self.store.set_target_image(None),
            GalleryCommand::Click { ndc } => {
                let hit = self.pick(ndc);
                self.store.set_target_image(hit);
            }
            GalleryCommand::ToggleSidebar => self.store.toggle_sidebar(),
            GalleryCommand::SetSidebarOpen { open } => {
                self.store.set_sidebar_open(open);
            }
            GalleryCommand::RotateCamera { delta } => {
                if let Some(camera) = self.animator.user_camera() {
                    self.controls.rotate(camera, delta);
                }
            }
            GalleryCommand::PanCamera { delta } => {
                if let Some(camera) = self.animator.user_camera() {
                    self.controls.pan(camera, delta);
                }
            }
            GalleryCommand::Zoom { delta } => {
                if let Some(camera) = self.animator.user_camera() {
                    self.controls.zoom(camera, delta);
                }
            }
            GalleryCommand::Resize { width, height } => {
                self.animator.resize(width, height);
            }
        }
        self.observe();
    }

    /// Image under a viewport position, if any.
    #[must_use]
    pub fn pick(&self, ndc: Vec2) -> Option<ImageId> {
        let camera = self.animator.camera();
        let ray = camera.ray_from_ndc(ndc);
        self.scene
            .pick(&ray, camera, &self.animator.group_transform())
            .cloned()
    }

    fn observe(&mut self) {
        self.animator.sync(&mut self.store);
        let _ = self.scene.sync(&self.store, self.textures.as_ref());
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Advance one frame of `dt` seconds.
    ///
    /// Commits a finished background load, advances every animation group
    /// and refreshes the nodes. Returns whether an animation is still
    /// running.
    pub fn tick(&mut self, dt: f32) -> bool {
        let status = self.pending.as_ref().map(|p| p.poll(&mut self.store));
        match status {
            Some(LoadStatus::Loaded(count)) => {
                log::info!("gallery: catalog ready with {count} images");
                self.pending = None;
            }
            Some(LoadStatus::Failed) => self.pending = None,
            Some(LoadStatus::Pending) | None => {}
        }

        let animating = self.animator.tick(dt, &mut self.store);
        let _ = self.scene.sync(&self.store, self.textures.as_ref());
        animating
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Session options.
    #[must_use]
    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    /// The store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Committed state.
    #[must_use]
    pub fn state(&self) -> &GalleryState {
        self.store.state()
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.animator.camera()
    }

    /// Current scene-group transform.
    #[must_use]
    pub fn group_transform(&self) -> GroupTransform {
        self.animator.group_transform()
    }

    /// The camera animator.
    #[must_use]
    pub fn animator(&self) -> &CameraAnimator {
        &self.animator
    }

    /// The scene renderer.
    #[must_use]
    pub fn scene(&self) -> &SceneRenderer {
        &self.scene
    }

    /// Every visual node in catalog order.
    #[must_use]
    pub fn nodes(&self) -> &[VisualNode] {
        self.scene.nodes()
    }

    /// Whether a camera or scene-group animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Remove and return the animation events recorded so far.
    pub fn drain_animation_events(&mut self) -> Vec<AnimationEvent> {
        self.animator.drain_events()
    }
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("store", &self.store)
            .field("animator", &self.animator)
            .field("scene", &self.scene)
            .field("loading", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}
