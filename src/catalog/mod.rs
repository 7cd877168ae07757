//! Catalog loader: fetches image ids and stored sphere coordinates from an
//! object store once per session and populates the [`Store`].
//!
//! The fetch either succeeds as a whole or commits nothing. Objects
//! without complete coordinate metadata are skipped individually.

#[cfg(feature = "http")]
mod firebase;
mod source;

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

#[cfg(feature = "http")]
pub use firebase::FirebaseStorage;
use glam::Vec3;
use rustc_hash::FxHashSet;
pub use source::{
    MemoryObject, MemoryObjectStore, ObjectMetadata, ObjectStore, SPHERE_X,
    SPHERE_Y, SPHERE_Z,
};

use crate::error::GalleryError;
use crate::image::Image;
use crate::layout::{grid_table, LayoutKind, LayoutTable, Layouts};
use crate::options::LayoutOptions;
use crate::store::Store;

/// Position every node holds between the catalog commit and the first
/// layout assignment.
const PLACEHOLDER_POSITION: Vec3 = Vec3::splat(0.5);

/// A fully fetched catalog, ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Images in listing order.
    pub images: Vec<Image>,
    /// Stored sphere coordinates.
    pub sphere: LayoutTable,
    /// Computed grid coordinates.
    pub grid: LayoutTable,
}

impl Catalog {
    /// Fetch every object from `source` and build both layout tables.
    ///
    /// Any listing or metadata error aborts the whole fetch.
    pub fn fetch<S: ObjectStore + ?Sized>(
        source: &S,
        options: &LayoutOptions,
    ) -> Result<Self, GalleryError> {
        let objects = source.list()?;
        log::info!("catalog: found {} objects", objects.len());

        let mut images = Vec::with_capacity(objects.len());
        let mut sphere = LayoutTable::with_capacity(objects.len());
        let mut seen = FxHashSet::default();

        for object in &objects {
            let url = source.resolve_url(object)?;
            let metadata = source.metadata(object)?;

            let Some(coordinate) = metadata.sphere_coordinate() else {
                log::warn!(
                    "catalog: skipping {}, missing or invalid coordinate metadata",
                    metadata.name
                );
                continue;
            };
            if !seen.insert(url.clone()) {
                log::warn!(
                    "catalog: skipping {}, duplicate url {url}",
                    metadata.name
                );
                continue;
            }

            let image = Image::new(url);
            sphere.insert(image.id.clone(), coordinate);
            images.push(image);
        }

        let grid = grid_table(&images, options.grid_columns, options.grid_extent);
        Ok(Self {
            images,
            sphere,
            grid,
        })
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Commit the catalog in one mutation, then activate the sphere layout
    /// (which also requests a camera reset).
    pub fn commit(self, store: &mut Store) {
        let count = self.images.len();
        let placeholder: LayoutTable = self
            .images
            .iter()
            .map(|image| (image.id.clone(), PLACEHOLDER_POSITION))
            .collect();
        let layouts = Layouts::new(self.sphere, self.grid);
        let images: Arc<[Image]> = Arc::from(self.images);

        store.mutate(|state| {
            state.images = Some(images);
            state.layouts = Some(layouts);
            state.node_positions = Some(Arc::new(placeholder));
        });
        log::info!("catalog: committed {count} images");

        store.set_layout(LayoutKind::Sphere);
    }
}

/// Outcome of polling a [`PendingCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The worker has not finished yet.
    Pending,
    /// The catalog was committed with this many images.
    Loaded(usize),
    /// The fetch failed; the store keeps `images = None`.
    Failed,
}

/// A catalog fetch running on a worker thread.
#[derive(Debug)]
pub struct PendingCatalog {
    rx: mpsc::Receiver<Result<Catalog, GalleryError>>,
}

impl PendingCatalog {
    /// Commit the result if the worker has finished.
    ///
    /// Must be polled from the thread that owns the store. Once this
    /// returns `Loaded` or `Failed` the pending load is spent.
    pub fn poll(&self, store: &mut Store) -> LoadStatus {
        match self.rx.try_recv() {
            Ok(Ok(catalog)) => {
                let count = catalog.len();
                catalog.commit(store);
                LoadStatus::Loaded(count)
            }
            Ok(Err(e)) => {
                log::error!("catalog: load failed: {e}");
                LoadStatus::Failed
            }
            Err(mpsc::TryRecvError::Empty) => LoadStatus::Pending,
            Err(mpsc::TryRecvError::Disconnected) => {
                let e = GalleryError::Worker(
                    "catalog worker exited without a result".to_owned(),
                );
                log::error!("catalog: load failed: {e}");
                LoadStatus::Failed
            }
        }
    }
}

/// Populates the store from an object store, at most once per session.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    options: LayoutOptions,
}

impl CatalogLoader {
    /// Loader using the given grid parameters.
    #[must_use]
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Claim the session's single load. Returns `false` if a load already
    /// started.
    fn begin(store: &mut Store) -> bool {
        if store.state().did_init {
            log::info!("catalog: already initialized");
            return false;
        }
        store.mutate(|state| state.did_init = true);
        true
    }

    /// Fetch and commit on the calling thread.
    ///
    /// A second call in the same session is a no-op. Fetch errors are
    /// logged and leave `images = None`.
    pub fn load<S: ObjectStore + ?Sized>(&self, store: &mut Store, source: &S) {
        if !Self::begin(store) {
            return;
        }
        match Catalog::fetch(source, &self.options) {
            Ok(catalog) => catalog.commit(store),
            Err(e) => log::error!("catalog: load failed: {e}"),
        }
    }

    /// Fetch on a worker thread; commit later via [`PendingCatalog::poll`].
    ///
    /// Returns `None` if a load already started this session or the worker
    /// could not be spawned.
    pub fn spawn<S>(&self, store: &mut Store, source: S) -> Option<PendingCatalog>
    where
        S: ObjectStore + Send + 'static,
    {
        if !Self::begin(store) {
            return None;
        }
        let (tx, rx) = mpsc::channel();
        let options = self.options.clone();
        let spawned = thread::Builder::new()
            .name("catalog-loader".to_owned())
            .spawn(move || {
                let _ = tx.send(Catalog::fetch(&source, &options));
            });
        match spawned {
            Ok(_) => Some(PendingCatalog { rx }),
            Err(e) => {
                log::error!("catalog: failed to spawn worker: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::image::ImageId;

    fn unit(i: usize) -> Vec3 {
        let t = i as f32;
        Vec3::new(t.cos(), t.sin(), 0.0)
    }

    fn source(total: usize, without_coords: &[usize]) -> MemoryObjectStore {
        (0..total).fold(MemoryObjectStore::new(), |store, i| {
            let coords = (!without_coords.contains(&i)).then(|| unit(i));
            store.with_image(
                &format!("{i}.jpg"),
                &format!("https://img/{i}.jpg"),
                coords,
            )
        })
    }

    #[test]
    fn fetch_skips_objects_without_coordinates() {
        let catalog =
            Catalog::fetch(&source(5, &[1, 3]), &LayoutOptions::default())
                .unwrap();
        let ids: Vec<&str> =
            catalog.images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            ["https://img/0.jpg", "https://img/2.jpg", "https://img/4.jpg"]
        );
        assert_eq!(catalog.sphere.len(), 3);
        assert_eq!(catalog.grid.len(), 3);
        assert_eq!(
            catalog.sphere.get(&ImageId::from("https://img/2.jpg")),
            Some(unit(2))
        );
    }

    #[test]
    fn non_finite_coordinates_are_excluded() {
        let mut objects = source(2, &[]);
        let _ = objects
            .metadata_mut("1.jpg")
            .unwrap()
            .custom
            .insert(SPHERE_X.to_owned(), "NaN".to_owned());

        let mut store = Store::new();
        CatalogLoader::default().load(&mut store, &objects);
        assert_eq!(store.state().images().len(), 1);

        let version = store.version();
        store.set_sidebar_open(false);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn fetch_keeps_first_of_duplicate_urls() {
        let store = MemoryObjectStore::new()
            .with_image("a.jpg", "https://img/a.jpg", Some(Vec3::X))
            .with_image("a-copy.jpg", "https://img/a.jpg", Some(Vec3::Y));
        let catalog =
            Catalog::fetch(&store, &LayoutOptions::default()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.sphere.get(&"https://img/a.jpg".into()), Some(Vec3::X));
    }

    #[test]
    fn load_commits_catalog_and_activates_sphere() {
        let mut store = Store::new();
        CatalogLoader::default().load(&mut store, &source(4, &[]));

        let state = store.state();
        assert!(state.did_init);
        assert_eq!(state.images().len(), 4);
        assert_eq!(state.layout, LayoutKind::Sphere);
        let layouts = state.layouts.as_ref().unwrap();
        assert!(Arc::ptr_eq(
            state.node_positions.as_ref().unwrap(),
            &layouts.sphere
        ));
        assert!(state.reset_cam);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn second_load_is_a_no_op() {
        let mut store = Store::new();
        let loader = CatalogLoader::default();
        loader.load(&mut store, &source(2, &[]));
        let version = store.version();

        loader.load(&mut store, &source(9, &[]));
        assert_eq!(store.version(), version);
        assert_eq!(store.state().images().len(), 2);
    }

    #[test]
    fn failed_fetch_leaves_catalog_absent() {
        let mut store = Store::new();
        CatalogLoader::default()
            .load(&mut store, &MemoryObjectStore::failing("offline"));
        assert!(store.state().did_init);
        assert!(store.state().images.is_none());
        assert!(store.state().layouts.is_none());
        assert!(!store.state().reset_cam);
    }

    #[test]
    fn spawned_load_commits_on_poll() {
        let mut store = Store::new();
        let pending = CatalogLoader::default()
            .spawn(&mut store, source(3, &[0]))
            .unwrap();

        let mut status = LoadStatus::Pending;
        for _ in 0..500 {
            status = pending.poll(&mut store);
            if status != LoadStatus::Pending {
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(status, LoadStatus::Loaded(2));
        assert_eq!(store.state().images().len(), 2);
    }

    #[test]
    fn spawn_respects_init_guard() {
        let mut store = Store::new();
        let loader = CatalogLoader::default();
        assert!(loader.spawn(&mut store, source(1, &[])).is_some());
        assert!(loader.spawn(&mut store, source(1, &[])).is_none());
    }

    #[test]
    fn spawned_failure_reports_failed() {
        let mut store = Store::new();
        let pending = CatalogLoader::default()
            .spawn(&mut store, MemoryObjectStore::failing("403"))
            .unwrap();
        let mut status = LoadStatus::Pending;
        for _ in 0..500 {
            status = pending.poll(&mut store);
            if status != LoadStatus::Pending {
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(status, LoadStatus::Failed);
        assert!(store.state().images.is_none());
    }
}
