//! Application state store: a single versioned [`GalleryState`] with
//! transactional mutation and field-level change subscriptions.
//!
//! Mutations run against a draft copy of the state and are committed in
//! one step, so readers never observe a half-applied change. Every commit
//! that changes at least one field bumps the version and notifies the
//! subscribers interested in those fields, after the new state is in
//! place.
//!
//! The store is single-writer by construction: it is owned by the UI
//! thread and handed to components by `&mut` reference, so no locking is
//! involved.

mod actions;
mod state;

use std::sync::mpsc;

pub use state::{Fields, GalleryState};

/// A committed change: which fields moved, and the version that moved them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    /// Store version after the commit.
    pub version: u64,
    /// Fields that differ from the previous version.
    pub fields: Fields,
}

/// Identifier of a live subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving end of a store subscription.
///
/// Changes accumulate until [`poll`](Self::poll) drains them. Dropping the
/// subscription unsubscribes it at the next commit.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    interest: Fields,
    rx: mpsc::Receiver<Change>,
}

impl Subscription {
    /// Identifier of this subscription.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Fields this subscription listens to.
    #[must_use]
    pub fn interest(&self) -> Fields {
        self.interest
    }

    /// Drain pending changes, coalesced into one.
    ///
    /// The result carries the union of changed fields (restricted to this
    /// subscription's interest) and the latest version seen. `None` when
    /// nothing relevant changed since the last poll.
    pub fn poll(&self) -> Option<Change> {
        let mut merged: Option<Change> = None;
        while let Ok(change) = self.rx.try_recv() {
            merged = Some(match merged {
                Some(prev) => Change {
                    version: change.version.max(prev.version),
                    fields: prev.fields | change.fields,
                },
                None => change,
            });
        }
        merged.map(|change| Change {
            version: change.version,
            fields: change.fields & self.interest,
        })
    }
}

struct Subscriber {
    id: SubscriptionId,
    interest: Fields,
    tx: mpsc::Sender<Change>,
}

/// The process-wide gallery store. Inject it wherever state is read or
/// changed; there is no global instance.
pub struct Store {
    state: GalleryState,
    version: u64,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl Store {
    /// Store holding the initial session state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GalleryState::default(),
            version: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Read access to the committed state.
    #[must_use]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Owned copy of the committed state.
    #[must_use]
    pub fn snapshot(&self) -> GalleryState {
        self.state.clone()
    }

    /// Monotonically increasing version; bumped on every effective commit.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Listen for changes to any of `interest`.
    pub fn subscribe(&mut self, interest: Fields) -> Subscription {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(Subscriber { id, interest, tx });
        Subscription { id, interest, rx }
    }

    /// Stop delivering changes to `subscription`.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|s| s.id != subscription.id);
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply `mutation` to a draft of the state and commit it atomically.
    pub fn mutate(&mut self, mutation: impl FnOnce(&mut GalleryState)) {
        let mut draft = self.state.clone();
        mutation(&mut draft);
        self.commit(draft);
    }

    /// Like [`mutate`](Self::mutate), but a failing mutation discards the
    /// draft and leaves the store untouched.
    pub fn try_mutate<E>(
        &mut self,
        mutation: impl FnOnce(&mut GalleryState) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut draft = self.state.clone();
        mutation(&mut draft)?;
        self.commit(draft);
        Ok(())
    }

    fn commit(&mut self, draft: GalleryState) {
        let fields = self.state.changed_fields(&draft);
        if fields.is_empty() {
            return;
        }
        debug_assert!(
            draft.validate().is_ok(),
            "store invariant violated: {:?}",
            draft.validate()
        );
        self.state = draft;
        self.version += 1;

        let change = Change {
            version: self.version,
            fields,
        };
        // Disconnected receivers are pruned here.
        self.subscribers.retain(|s| {
            !s.interest.intersects(fields) || s.tx.send(change).is_ok()
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .field("ready", &self.state.is_ready())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutKind;

    #[test]
    fn mutate_commits_and_bumps_version() {
        let mut store = Store::new();
        assert_eq!(store.version(), 0);
        store.mutate(|s| s.is_sidebar_open = true);
        assert!(store.state().is_sidebar_open);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn no_op_mutation_does_not_notify() {
        let mut store = Store::new();
        let sub = store.subscribe(Fields::all());
        store.mutate(|s| s.layout = LayoutKind::Sphere);
        assert_eq!(store.version(), 0);
        assert!(sub.poll().is_none());
    }

    #[test]
    fn subscribers_see_only_their_fields() {
        let mut store = Store::new();
        let camera = store.subscribe(Fields::RESET_CAM | Fields::LAYOUT);
        let sidebar = store.subscribe(Fields::SIDEBAR);

        store.mutate(|s| s.is_sidebar_open = true);
        assert!(camera.poll().is_none());
        assert_eq!(
            sidebar.poll(),
            Some(Change {
                version: 1,
                fields: Fields::SIDEBAR
            })
        );
    }

    #[test]
    fn pending_changes_are_coalesced() {
        let mut store = Store::new();
        let sub = store.subscribe(Fields::LAYOUT | Fields::RESET_CAM);
        store.mutate(|s| s.layout = LayoutKind::Grid);
        store.mutate(|s| s.reset_cam = true);
        store.mutate(|s| s.is_sidebar_open = true);

        let change = sub.poll().unwrap();
        assert_eq!(change.version, 2);
        assert_eq!(change.fields, Fields::LAYOUT | Fields::RESET_CAM);
        assert!(sub.poll().is_none());
    }

    #[test]
    fn state_is_updated_before_notification() {
        let mut store = Store::new();
        let sub = store.subscribe(Fields::TARGET_IMAGE | Fields::RESET_CAM);
        store.mutate(|s| s.reset_cam = true);
        let change = sub.poll().unwrap();
        assert_eq!(change.version, store.version());
        assert!(store.state().reset_cam);
    }

    #[test]
    fn failed_try_mutate_leaves_state_untouched() {
        let mut store = Store::new();
        let result: Result<(), &str> = store.try_mutate(|s| {
            s.is_sidebar_open = true;
            Err("abort")
        });
        assert_eq!(result, Err("abort"));
        assert!(!store.state().is_sidebar_open);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn unsubscribe_and_drop_remove_subscribers() {
        let mut store = Store::new();
        let a = store.subscribe(Fields::all());
        let b = store.subscribe(Fields::all());
        assert_eq!(store.subscriber_count(), 2);

        store.unsubscribe(a);
        assert_eq!(store.subscriber_count(), 1);

        drop(b);
        store.mutate(|s| s.reset_cam = true);
        assert_eq!(store.subscriber_count(), 0);
    }
}
