//! User-facing actions. Each one is a single atomic store mutation.

use super::Store;
use crate::image::ImageId;
use crate::layout::LayoutKind;

impl Store {
    /// Switch the active layout.
    ///
    /// Swaps `node_positions` to the layout's table, clears the selection
    /// and requests a camera reset, all in one commit. Before the catalog
    /// has loaded there is no table to swap in and `node_positions` stays
    /// absent.
    pub fn set_layout(&mut self, layout: LayoutKind) {
        log::info!("set_layout: switching to {layout}");
        self.mutate(|state| {
            state.layout = layout;
            state.node_positions = state
                .layouts
                .as_ref()
                .map(|layouts| layouts.get(layout).clone());
            state.target_image = None;
            state.reset_cam = true;
        });
    }

    /// Select an image, or clear the selection with `None`.
    ///
    /// Selecting the image that is already selected clears the selection
    /// (toggle). Any transition to "no selection" requests a camera reset.
    /// Ids that are not part of the catalog are ignored.
    pub fn set_target_image(&mut self, id: Option<ImageId>) {
        if let Some(requested) = &id {
            if !self.state().contains_image(requested) {
                log::warn!(
                    "set_target_image: ignoring {requested}, not in catalog"
                );
                return;
            }
        }

        let next = if id == self.state().target_image {
            None
        } else {
            id
        };
        match &next {
            Some(target) => log::info!("set_target_image: selecting {target}"),
            None => log::info!("set_target_image: clearing selection"),
        }

        self.mutate(|state| {
            if next.is_none() {
                state.reset_cam = true;
            }
            state.target_image = next;
        });
    }

    /// Flip the sidebar open/closed.
    pub fn toggle_sidebar(&mut self) {
        self.mutate(|state| state.is_sidebar_open = !state.is_sidebar_open);
    }

    /// Open or close the sidebar.
    pub fn set_sidebar_open(&mut self, open: bool) {
        self.mutate(|state| state.is_sidebar_open = open);
    }

    /// Clear the camera reset request once the reset has been carried out
    /// (or abandoned).
    pub fn finish_camera_reset(&mut self) {
        self.mutate(|state| state.reset_cam = false);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;

    use super::*;
    use crate::image::Image;
    use crate::layout::{LayoutTable, Layouts};

    fn loaded_store(ids: &[&str]) -> Store {
        let mut store = Store::new();
        let images: Vec<Image> = ids.iter().map(|id| Image::new(*id)).collect();
        let sphere: LayoutTable =
            ids.iter().map(|id| (ImageId::from(*id), Vec3::X)).collect();
        let grid: LayoutTable =
            ids.iter().map(|id| (ImageId::from(*id), Vec3::Y)).collect();
        store.mutate(|s| {
            s.did_init = true;
            s.images = Some(Arc::from(images));
            s.layouts = Some(Layouts::new(sphere, grid));
        });
        store.set_layout(LayoutKind::Sphere);
        store.finish_camera_reset();
        store
    }

    #[test]
    fn selecting_twice_toggles_off() {
        let mut store = loaded_store(&["a", "b"]);
        store.set_target_image(Some("a".into()));
        assert_eq!(store.state().target_image, Some("a".into()));
        assert!(!store.state().reset_cam);

        store.set_target_image(Some("a".into()));
        assert_eq!(store.state().target_image, None);
        assert!(store.state().reset_cam);
    }

    #[test]
    fn selecting_another_switches_without_null() {
        let mut store = loaded_store(&["a", "b"]);
        store.set_target_image(Some("a".into()));
        let sub = store.subscribe(crate::store::Fields::TARGET_IMAGE);

        store.set_target_image(Some("b".into()));
        assert_eq!(store.state().target_image, Some("b".into()));
        assert!(!store.state().reset_cam);
        // Exactly one commit: a -> b.
        let change = sub.poll().unwrap();
        assert_eq!(change.version, store.version());
    }

    #[test]
    fn clearing_selection_requests_reset() {
        let mut store = loaded_store(&["a"]);
        store.set_target_image(None);
        assert!(store.state().reset_cam);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut store = loaded_store(&["a"]);
        let version = store.version();
        store.set_target_image(Some("zzz".into()));
        assert_eq!(store.state().target_image, None);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn set_layout_swaps_table_and_resets() {
        let mut store = loaded_store(&["a", "b"]);
        store.set_target_image(Some("b".into()));

        store.set_layout(LayoutKind::Grid);
        let state = store.state();
        assert_eq!(state.layout, LayoutKind::Grid);
        let layouts = state.layouts.as_ref().unwrap();
        assert!(Arc::ptr_eq(
            state.node_positions.as_ref().unwrap(),
            &layouts.grid
        ));
        assert_eq!(state.target_image, None);
        assert!(state.reset_cam);
    }

    #[test]
    fn set_layout_before_load_leaves_positions_absent() {
        let mut store = Store::new();
        store.set_layout(LayoutKind::Grid);
        assert_eq!(store.state().layout, LayoutKind::Grid);
        assert!(store.state().node_positions.is_none());
        assert!(store.state().reset_cam);
    }

    #[test]
    fn sidebar_actions() {
        let mut store = Store::new();
        store.toggle_sidebar();
        assert!(store.state().is_sidebar_open);
        store.toggle_sidebar();
        assert!(!store.state().is_sidebar_open);
        store.set_sidebar_open(true);
        assert!(store.state().is_sidebar_open);
    }
}
