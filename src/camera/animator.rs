//! Camera/target animator.
//!
//! Owns the visible camera pose and the scene-group transform and moves
//! them in response to three store triggers:
//!
//! - selection (`target_image` becomes `Some`): fly to the selected node;
//! - reset (`reset_cam` becomes `true`): fly back to the home pose, then
//!   clear the flag;
//! - layout change: move the scene group to the layout's depth offset and
//!   rotate it back to identity.
//!
//! Each motion is one [`AnimationGroup`] of per-axis tweens. Camera and
//! group are independent channels; within a channel a new request cancels
//! the in-flight group before starting its own (last writer wins).

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use glam::Vec3;

use super::core::Camera;
use crate::animation::{AnimationGroup, EasingFunction, GroupStep, Tween};
use crate::image::ImageId;
use crate::layout::{resolve_position, LayoutKind};
use crate::options::GalleryOptions;
use crate::scene::GroupTransform;
use crate::store::{Fields, GalleryState, Store, Subscription};

/// Number of recent [`AnimationEvent`]s kept for inspection.
const EVENT_HISTORY: usize = 64;

/// What an animation is moving toward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationGoal {
    /// Camera flying to a selected image.
    Focus(ImageId),
    /// Camera returning to the home pose.
    Home,
    /// Scene group settling into a layout's transform.
    Layout(LayoutKind),
}

impl fmt::Display for AnimationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus(id) => write!(f, "focus {id}"),
            Self::Home => f.write_str("home"),
            Self::Layout(kind) => write!(f, "layout {kind}"),
        }
    }
}

/// Lifecycle notifications, recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationEvent {
    /// A group started.
    Started(AnimationGoal),
    /// A running group was cancelled by a newer request on its channel.
    Superseded(AnimationGoal),
    /// A running group was cancelled because the animator unmounted.
    Cancelled(AnimationGoal),
    /// Every tween of a group finished and its values were snapped.
    Completed(AnimationGoal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CameraAxis {
    EyeX,
    EyeY,
    EyeZ,
    TargetX,
    TargetY,
    TargetZ,
}

impl CameraAxis {
    fn apply(self, camera: &mut Camera, value: f32) {
        match self {
            Self::EyeX => camera.eye.x = value,
            Self::EyeY => camera.eye.y = value,
            Self::EyeZ => camera.eye.z = value,
            Self::TargetX => camera.target.x = value,
            Self::TargetY => camera.target.y = value,
            Self::TargetZ => camera.target.z = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupAxis {
    OffsetX,
    OffsetY,
    OffsetZ,
    RotationX,
    RotationY,
    RotationZ,
}

impl GroupAxis {
    fn apply(self, transform: &mut GroupTransform, value: f32) {
        match self {
            Self::OffsetX => transform.offset.x = value,
            Self::OffsetY => transform.offset.y = value,
            Self::OffsetZ => transform.offset.z = value,
            Self::RotationX => transform.rotation.x = value,
            Self::RotationY => transform.rotation.y = value,
            Self::RotationZ => transform.rotation.z = value,
        }
    }
}

#[derive(Debug)]
struct CameraFlight {
    goal: AnimationGoal,
    eye: Vec3,
    target: Vec3,
    group: AnimationGroup<CameraAxis>,
}

#[derive(Debug)]
struct GroupFlight {
    layout: LayoutKind,
    transform: GroupTransform,
    group: AnimationGroup<GroupAxis>,
}

/// Tween parameters and fixed poses, taken from [`GalleryOptions`].
#[derive(Debug, Clone)]
struct Settings {
    duration: Duration,
    easing: EasingFunction,
    focus_distance: f32,
    home_eye: Vec3,
    home_target: Vec3,
    scene_scale: f32,
    grid_depth_offset: f32,
}

impl Settings {
    fn tween(&self, from: f32, to: f32) -> Tween {
        Tween::new(from, to, self.duration, self.easing)
    }

    fn layout_transform(&self, layout: LayoutKind) -> GroupTransform {
        let depth = match layout {
            LayoutKind::Grid => self.grid_depth_offset,
            LayoutKind::Sphere => 0.0,
        };
        GroupTransform::from_offset(Vec3::new(0.0, 0.0, depth))
    }
}

/// State machine driving the camera and scene group.
///
/// Each channel is either idle or animating toward one goal. The animator
/// reacts to committed store state, never to the action that produced it,
/// so any sequence of actions ends in a consistent pose.
pub struct CameraAnimator {
    settings: Settings,
    subscription: Subscription,
    mounted: bool,
    camera: Camera,
    group: GroupTransform,
    camera_flight: Option<CameraFlight>,
    group_flight: Option<GroupFlight>,
    layout: LayoutKind,
    events: VecDeque<AnimationEvent>,
}

impl CameraAnimator {
    /// Unmounted animator at the home pose, listening to `store`.
    pub fn new(store: &mut Store, options: &GalleryOptions) -> Self {
        let settings = Settings {
            duration: options.animation.duration(),
            easing: options.animation.easing,
            focus_distance: options.camera.focus_distance,
            home_eye: options.camera.home_position(),
            home_target: options.camera.home_target(),
            scene_scale: options.layout.scene_scale,
            grid_depth_offset: options.layout.grid_depth_offset,
        };
        let layout = store.state().layout;
        Self {
            group: settings.layout_transform(layout),
            settings,
            subscription: store.subscribe(
                Fields::LAYOUT | Fields::TARGET_IMAGE | Fields::RESET_CAM,
            ),
            mounted: false,
            camera: Camera::from_options(&options.camera),
            camera_flight: None,
            group_flight: None,
            layout,
            events: VecDeque::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Mark the view as ready to animate and catch up on a pending reset
    /// or a selection made while unmounted.
    pub fn mount(&mut self, store: &mut Store) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        log::debug!("animator: mounted");
        self.sync(store);
        if store.state().reset_cam && !self.is_resetting() {
            self.start_reset(store);
        }
        let state = store.snapshot();
        if let Some(id) = &state.target_image {
            if self.camera_goal() != Some(&AnimationGoal::Focus(id.clone())) {
                self.start_focus(store, &state, id);
            }
        }
    }

    /// Stop animating. In-flight groups are cancelled, the scene group
    /// jumps to its settled transform and a pending reset is released.
    pub fn unmount(&mut self, store: &mut Store) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        log::debug!("animator: unmounted");
        if let Some(mut flight) = self.camera_flight.take() {
            flight.group.cancel();
            self.record(AnimationEvent::Cancelled(flight.goal));
        }
        if let Some(mut flight) = self.group_flight.take() {
            flight.group.cancel();
            self.group = flight.transform;
            self.record(AnimationEvent::Cancelled(AnimationGoal::Layout(
                flight.layout,
            )));
        }
        if store.state().reset_cam {
            store.finish_camera_reset();
        }
    }

    /// Whether the animator is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // -----------------------------------------------------------------------
    // Store reactions
    // -----------------------------------------------------------------------

    /// React to store changes committed since the last call.
    pub fn sync(&mut self, store: &mut Store) {
        let Some(change) = self.subscription.poll() else {
            return;
        };
        let state = store.snapshot();

        if change.fields.contains(Fields::LAYOUT) && state.layout != self.layout
        {
            self.layout = state.layout;
            self.start_layout(state.layout);
        }
        if state.reset_cam && !self.is_resetting() {
            self.start_reset(store);
        }
        if change.fields.contains(Fields::TARGET_IMAGE) {
            if let Some(id) = &state.target_image {
                self.start_focus(store, &state, id);
            }
        }
    }

    fn start_reset(&mut self, store: &mut Store) {
        if !self.mounted {
            log::debug!("animator: not mounted, releasing camera reset");
            store.finish_camera_reset();
            return;
        }
        let (eye, target) = (self.settings.home_eye, self.settings.home_target);
        self.start_camera(store, AnimationGoal::Home, eye, target);
    }

    fn start_focus(&mut self, store: &mut Store, state: &GalleryState, id: &ImageId) {
        if !self.mounted {
            log::debug!("animator: not mounted, ignoring selection of {id}");
            return;
        }
        let Some(target) = self.node_world_position(state, id) else {
            log::warn!("animator: no resolved position for {id}, not focusing");
            return;
        };
        // Keeps the current viewing direction, so repeated selections
        // inherit whatever angle the camera has drifted to.
        let direction = (self.camera.eye - self.camera.target)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        let eye = target + direction * self.settings.focus_distance;
        self.start_camera(store, AnimationGoal::Focus(id.clone()), eye, target);
    }

    fn start_camera(
        &mut self,
        store: &mut Store,
        goal: AnimationGoal,
        eye: Vec3,
        target: Vec3,
    ) {
        if let Some(mut previous) = self.camera_flight.take() {
            previous.group.cancel();
            log::debug!("animator: camera {} superseded by {goal}", previous.goal);
            let was_reset = previous.goal == AnimationGoal::Home;
            self.record(AnimationEvent::Superseded(previous.goal));
            if was_reset && goal != AnimationGoal::Home {
                store.finish_camera_reset();
            }
        }

        let from = &self.camera;
        let s = &self.settings;
        let name = match goal {
            AnimationGoal::Home => "camera-home",
            _ => "camera-focus",
        };
        let group = AnimationGroup::new(name)
            .with(CameraAxis::EyeX, s.tween(from.eye.x, eye.x))
            .with(CameraAxis::EyeY, s.tween(from.eye.y, eye.y))
            .with(CameraAxis::EyeZ, s.tween(from.eye.z, eye.z))
            .with(CameraAxis::TargetX, s.tween(from.target.x, target.x))
            .with(CameraAxis::TargetY, s.tween(from.target.y, target.y))
            .with(CameraAxis::TargetZ, s.tween(from.target.z, target.z));

        log::debug!("animator: camera -> {goal}");
        self.record(AnimationEvent::Started(goal.clone()));
        self.camera_flight = Some(CameraFlight {
            goal,
            eye,
            target,
            group,
        });
    }

    fn start_layout(&mut self, layout: LayoutKind) {
        let transform = self.settings.layout_transform(layout);
        if !self.mounted {
            self.group = transform;
            return;
        }
        if let Some(mut previous) = self.group_flight.take() {
            previous.group.cancel();
            self.record(AnimationEvent::Superseded(AnimationGoal::Layout(
                previous.layout,
            )));
        }

        let from = self.group;
        let s = &self.settings;
        let group = AnimationGroup::new("scene-group")
            .with(GroupAxis::OffsetX, s.tween(from.offset.x, transform.offset.x))
            .with(GroupAxis::OffsetY, s.tween(from.offset.y, transform.offset.y))
            .with(GroupAxis::OffsetZ, s.tween(from.offset.z, transform.offset.z))
            .with(GroupAxis::RotationX, s.tween(from.rotation.x, 0.0))
            .with(GroupAxis::RotationY, s.tween(from.rotation.y, 0.0))
            .with(GroupAxis::RotationZ, s.tween(from.rotation.z, 0.0));

        log::debug!("animator: scene group -> {layout}");
        self.record(AnimationEvent::Started(AnimationGoal::Layout(layout)));
        self.group_flight = Some(GroupFlight {
            layout,
            transform,
            group,
        });
    }

    // -----------------------------------------------------------------------
    // Per-frame update
    // -----------------------------------------------------------------------

    /// Observe the store, then advance both channels by `dt` seconds.
    ///
    /// Returns whether anything is still animating.
    pub fn tick(&mut self, dt: f32, store: &mut Store) -> bool {
        self.sync(store);
        self.advance_camera(dt, store);
        self.advance_group(dt);
        self.is_animating()
    }

    fn advance_camera(&mut self, dt: f32, store: &mut Store) {
        let Some(flight) = self.camera_flight.as_mut() else {
            return;
        };
        let step = flight.group.advance(dt);
        for (axis, value) in flight.group.values() {
            axis.apply(&mut self.camera, value);
        }
        if step != GroupStep::Completed {
            return;
        }

        self.camera.eye = flight.eye;
        self.camera.target = flight.target;
        let goal = flight.goal.clone();
        self.camera_flight = None;

        log::debug!("animator: camera settled at {goal}");
        if goal == AnimationGoal::Home {
            store.finish_camera_reset();
        }
        self.record(AnimationEvent::Completed(goal));
    }

    fn advance_group(&mut self, dt: f32) {
        let Some(flight) = self.group_flight.as_mut() else {
            return;
        };
        let step = flight.group.advance(dt);
        for (axis, value) in flight.group.values() {
            axis.apply(&mut self.group, value);
        }
        if step != GroupStep::Completed {
            return;
        }

        self.group = flight.transform;
        let layout = flight.layout;
        self.group_flight = None;
        log::debug!("animator: scene group settled at {layout}");
        self.record(AnimationEvent::Completed(AnimationGoal::Layout(layout)));
    }

    fn record(&mut self, event: AnimationEvent) {
        if self.events.len() == EVENT_HISTORY {
            let _ = self.events.pop_front();
        }
        self.events.push_back(event);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// World-space position of a node, using the scene group's settled
    /// transform.
    fn node_world_position(&self, state: &GalleryState, id: &ImageId) -> Option<Vec3> {
        let index = state.image_index(id)?;
        let raw = state.node_positions.as_ref()?.get(id)?;
        let local =
            resolve_position(state.layout, raw, index) * self.settings.scene_scale;
        Some(self.settled_group().transform_point(local))
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Camera for user manipulation; `None` while a camera animation owns
    /// it.
    pub fn user_camera(&mut self) -> Option<&mut Camera> {
        if self.camera_flight.is_some() {
            None
        } else {
            Some(&mut self.camera)
        }
    }

    /// Update the viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Current scene-group transform.
    #[must_use]
    pub fn group_transform(&self) -> GroupTransform {
        self.group
    }

    /// Transform the scene group is heading to (or at, when idle).
    #[must_use]
    pub fn settled_group(&self) -> GroupTransform {
        self.group_flight
            .as_ref()
            .map_or(self.group, |flight| flight.transform)
    }

    /// Goal of the in-flight camera animation.
    #[must_use]
    pub fn camera_goal(&self) -> Option<&AnimationGoal> {
        self.camera_flight.as_ref().map(|flight| &flight.goal)
    }

    /// Whether the camera is animating.
    #[must_use]
    pub fn is_camera_animating(&self) -> bool {
        self.camera_flight.is_some()
    }

    /// Whether the scene group is animating.
    #[must_use]
    pub fn is_group_animating(&self) -> bool {
        self.group_flight.is_some()
    }

    /// Whether either channel is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_camera_animating() || self.is_group_animating()
    }

    fn is_resetting(&self) -> bool {
        self.camera_goal() == Some(&AnimationGoal::Home)
    }

    /// Recent lifecycle events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &AnimationEvent> {
        self.events.iter()
    }

    /// Remove and return the recorded events.
    pub fn drain_events(&mut self) -> Vec<AnimationEvent> {
        self.events.drain(..).collect()
    }
}

impl fmt::Debug for CameraAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraAnimator")
            .field("mounted", &self.mounted)
            .field("eye", &self.camera.eye)
            .field("target", &self.camera.target)
            .field("camera_goal", &self.camera_goal())
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::{CatalogLoader, MemoryObjectStore};
    use crate::image::Image;

    const HOME_EYE: Vec3 = Vec3::new(0.0, 0.0, 300.0);

    fn id(i: usize) -> ImageId {
        ImageId::from(format!("https://img/{i}.jpg"))
    }

    fn raw(i: usize) -> Vec3 {
        let t = i as f32 * 0.7;
        Vec3::new(t.cos(), t.sin(), 0.3).normalize()
    }

    fn settle(animator: &mut CameraAnimator, store: &mut Store) {
        for _ in 0..100 {
            if !animator.tick(0.1, store) {
                break;
            }
        }
    }

    fn loaded(count: usize, mount: bool) -> (Store, CameraAnimator) {
        let mut store = Store::new();
        let mut animator = CameraAnimator::new(&mut store, &GalleryOptions::default());
        if mount {
            animator.mount(&mut store);
        }
        let source = (0..count).fold(MemoryObjectStore::new(), |s, i| {
            s.with_image(&format!("{i}.jpg"), id(i).as_str(), Some(raw(i)))
        });
        CatalogLoader::default().load(&mut store, &source);
        settle(&mut animator, &mut store);
        let _ = animator.drain_events();
        (store, animator)
    }

    fn expected_sphere_target(store: &Store, i: usize) -> Vec3 {
        let raw = store
            .state()
            .node_positions
            .as_ref()
            .and_then(|table| table.get(&id(i)))
            .unwrap();
        resolve_position(LayoutKind::Sphere, raw, i) * 600.0
    }

    #[test]
    fn initial_load_settles_at_home_and_clears_reset() {
        let (store, animator) = loaded(4, true);
        assert!(!store.state().reset_cam);
        assert_eq!(animator.camera().eye, HOME_EYE);
        assert_eq!(animator.camera().target, Vec3::ZERO);
        assert!(!animator.is_animating());
    }

    #[test]
    fn focus_snaps_to_exact_target() {
        let (mut store, mut animator) = loaded(4, true);
        store.set_target_image(Some(id(2)));
        animator.sync(&mut store);
        assert_eq!(animator.camera_goal(), Some(&AnimationGoal::Focus(id(2))));

        settle(&mut animator, &mut store);
        let target = expected_sphere_target(&store, 2);
        assert_eq!(animator.camera().target, target);
        let eye = target + Vec3::Z * 25.0;
        assert!((animator.camera().eye - eye).length() < 1e-3);
        assert!(!store.state().reset_cam);
    }

    #[test]
    fn second_selection_supersedes_first() {
        let (mut store, mut animator) = loaded(6, true);
        store.set_target_image(Some(id(1)));
        let _ = animator.tick(0.2, &mut store);
        store.set_target_image(Some(id(4)));
        settle(&mut animator, &mut store);

        let events = animator.drain_events();
        let completed: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, AnimationEvent::Completed(_)))
            .collect();
        assert_eq!(
            completed,
            [&AnimationEvent::Completed(AnimationGoal::Focus(id(4)))]
        );
        assert!(events
            .contains(&AnimationEvent::Superseded(AnimationGoal::Focus(id(1)))));

        let target = expected_sphere_target(&store, 4);
        assert_eq!(animator.camera().target, target);
        assert!((animator.camera().distance() - 25.0).abs() < 1e-3);
    }

    #[test]
    fn deselect_returns_home_and_clears_flag() {
        let (mut store, mut animator) = loaded(4, true);
        store.set_target_image(Some(id(3)));
        settle(&mut animator, &mut store);

        store.set_target_image(None);
        assert!(store.state().reset_cam);
        let _ = animator.tick(0.1, &mut store);
        assert_eq!(animator.camera_goal(), Some(&AnimationGoal::Home));
        assert!(store.state().reset_cam);

        settle(&mut animator, &mut store);
        assert!(!store.state().reset_cam);
        assert_eq!(animator.camera().eye, HOME_EYE);
        assert_eq!(animator.camera().target, Vec3::ZERO);
    }

    #[test]
    fn layout_change_moves_group_and_camera_together() {
        let (mut store, mut animator) = loaded(12, true);
        store.set_layout(LayoutKind::Grid);
        animator.sync(&mut store);
        assert!(animator.is_camera_animating());
        assert!(animator.is_group_animating());

        let _ = animator.tick(0.4, &mut store);
        let z = animator.group_transform().offset.z;
        assert!(z > 0.0 && z < 150.0);

        settle(&mut animator, &mut store);
        assert_eq!(
            animator.group_transform(),
            GroupTransform::from_offset(Vec3::new(0.0, 0.0, 150.0))
        );
        assert!(!store.state().reset_cam);
    }

    #[test]
    fn grid_focus_includes_group_offset() {
        let (mut store, mut animator) = loaded(12, true);
        store.set_layout(LayoutKind::Grid);
        settle(&mut animator, &mut store);

        store.set_target_image(Some(id(0)));
        settle(&mut animator, &mut store);
        let raw = store.state().layouts.as_ref().unwrap().grid.get(&id(0)).unwrap();
        assert_eq!(
            animator.camera().target,
            raw * 600.0 + Vec3::new(0.0, 0.0, 150.0)
        );
    }

    #[test]
    fn selection_during_reset_releases_flag() {
        let (mut store, mut animator) = loaded(4, true);
        store.set_layout(LayoutKind::Grid);
        let _ = animator.tick(0.1, &mut store);
        assert!(store.state().reset_cam);

        store.set_target_image(Some(id(1)));
        animator.sync(&mut store);
        assert!(!store.state().reset_cam);
        assert_eq!(animator.camera_goal(), Some(&AnimationGoal::Focus(id(1))));
    }

    #[test]
    fn unmounted_animator_clears_reset_immediately() {
        let (mut store, mut animator) = loaded(4, false);
        assert!(!store.state().reset_cam);

        store.set_layout(LayoutKind::Grid);
        animator.sync(&mut store);
        assert!(!store.state().reset_cam);
        assert!(!animator.is_animating());
        assert_eq!(animator.group_transform().offset.z, 150.0);
    }

    #[test]
    fn mount_focuses_selection_made_while_unmounted() {
        let (mut store, mut animator) = loaded(4, false);
        store.set_target_image(Some(id(3)));
        animator.sync(&mut store);
        assert!(!animator.is_animating());

        animator.mount(&mut store);
        assert_eq!(animator.camera_goal(), Some(&AnimationGoal::Focus(id(3))));
        settle(&mut animator, &mut store);
        assert_eq!(animator.camera().target, expected_sphere_target(&store, 3));
        let started = animator
            .events()
            .filter(|e| matches!(e, AnimationEvent::Started(_)))
            .count();
        assert_eq!(started, 1);
    }

    #[test]
    fn mount_does_not_restart_focus_picked_up_by_sync() {
        let (mut store, mut animator) = loaded(4, false);
        store.set_target_image(Some(id(1)));
        animator.mount(&mut store);
        assert_eq!(animator.camera_goal(), Some(&AnimationGoal::Focus(id(1))));
        assert!(!animator
            .events()
            .any(|e| matches!(e, AnimationEvent::Superseded(_))));
    }

    #[test]
    fn unmount_releases_in_flight_reset() {
        let (mut store, mut animator) = loaded(4, true);
        store.set_layout(LayoutKind::Grid);
        let _ = animator.tick(0.1, &mut store);
        animator.unmount(&mut store);
        assert!(!store.state().reset_cam);
        assert!(!animator.is_animating());
        assert!(animator
            .events()
            .any(|e| *e == AnimationEvent::Cancelled(AnimationGoal::Home)));
    }

    #[test]
    fn selection_without_position_is_skipped() {
        let mut store = Store::new();
        let mut animator = CameraAnimator::new(&mut store, &GalleryOptions::default());
        animator.mount(&mut store);
        store.mutate(|s| {
            s.images = Some(Arc::from(vec![Image::new(id(0))]));
            s.target_image = Some(id(0));
        });
        animator.sync(&mut store);
        assert!(!animator.is_camera_animating());
    }

    #[test]
    fn user_camera_is_locked_while_animating() {
        let (mut store, mut animator) = loaded(3, true);
        assert!(animator.user_camera().is_some());
        store.set_target_image(Some(id(0)));
        animator.sync(&mut store);
        assert!(animator.user_camera().is_none());
        settle(&mut animator, &mut store);
        assert!(animator.user_camera().is_some());
    }
}
