//! Animation groups: independent scalar tweens joined into one completion.

use std::fmt;

use super::tween::Tween;

/// Lifecycle of an [`AnimationGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    /// At least one member tween is still progressing.
    Running,
    /// Every member tween reached its end value.
    Completed,
    /// The group was stopped before completing.
    Cancelled,
}

/// Result of advancing a group by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStep {
    /// Still running after this frame.
    Running,
    /// All member tweens finished during this frame. Reported exactly once.
    Completed,
    /// The group had already completed or was cancelled; nothing advanced.
    Inactive,
}

/// A set of tweens started together, each driving one keyed scalar.
///
/// The group completes only once **all** of its tweens have finished
/// (join-all). A cancelled group never reports completion, so its
/// finalize step never runs.
pub struct AnimationGroup<K> {
    name: &'static str,
    tweens: Vec<(K, Tween)>,
    state: GroupState,
}

impl<K: Copy> AnimationGroup<K> {
    /// Empty running group. An empty group completes on its first advance.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tweens: Vec::new(),
            state: GroupState::Running,
        }
    }

    /// Add a tween driving `key`.
    #[must_use]
    pub fn with(mut self, key: K, tween: Tween) -> Self {
        self.tweens.push((key, tween));
        self
    }

    /// Debug name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GroupState {
        self.state
    }

    /// Whether the group is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == GroupState::Running
    }

    /// Advance every member tween by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> GroupStep {
        if self.state != GroupState::Running {
            return GroupStep::Inactive;
        }
        for (_, tween) in &mut self.tweens {
            let _ = tween.advance(dt);
        }
        if self.tweens.iter().all(|(_, t)| t.is_finished()) {
            self.state = GroupState::Completed;
            GroupStep::Completed
        } else {
            GroupStep::Running
        }
    }

    /// Stop the group. Values stay wherever the tweens last were.
    pub fn cancel(&mut self) {
        if self.state == GroupState::Running {
            self.state = GroupState::Cancelled;
        }
    }

    /// Current value of every member tween.
    pub fn values(&self) -> impl Iterator<Item = (K, f32)> + '_ {
        self.tweens.iter().map(|(k, t)| (*k, t.value()))
    }

    /// End value of every member tween.
    pub fn targets(&self) -> impl Iterator<Item = (K, f32)> + '_ {
        self.tweens.iter().map(|(k, t)| (*k, t.target()))
    }

    /// Number of member tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether the group has no member tweens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl<K> fmt::Debug for AnimationGroup<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationGroup")
            .field("name", &self.name)
            .field("tweens", &self.tweens.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation::EasingFunction;

    fn tween(to: f32, millis: u64) -> Tween {
        Tween::new(
            0.0,
            to,
            Duration::from_millis(millis),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn test_group_waits_for_all_members() {
        let mut group = AnimationGroup::new("test")
            .with(0_u8, tween(1.0, 100))
            .with(1_u8, tween(2.0, 200));

        assert_eq!(group.advance(0.1), GroupStep::Running);
        let values: Vec<_> = group.values().collect();
        assert_eq!(values[0], (0, 1.0));
        assert!((values[1].1 - 1.0).abs() < 1e-4);

        assert_eq!(group.advance(0.1), GroupStep::Completed);
        assert_eq!(group.state(), GroupState::Completed);
        // Completion is reported once.
        assert_eq!(group.advance(0.1), GroupStep::Inactive);
    }

    #[test]
    fn test_cancelled_group_never_completes() {
        let mut group = AnimationGroup::new("test").with(0_u8, tween(1.0, 100));
        let _ = group.advance(0.05);
        group.cancel();
        assert_eq!(group.state(), GroupState::Cancelled);
        assert_eq!(group.advance(1.0), GroupStep::Inactive);
        assert!(!group.is_running());
    }

    #[test]
    fn test_cancel_after_completion_keeps_completed() {
        let mut group = AnimationGroup::new("test").with(0_u8, tween(1.0, 10));
        assert_eq!(group.advance(1.0), GroupStep::Completed);
        group.cancel();
        assert_eq!(group.state(), GroupState::Completed);
    }

    #[test]
    fn test_empty_group_completes_immediately() {
        let mut group: AnimationGroup<u8> = AnimationGroup::new("empty");
        assert!(group.is_empty());
        assert_eq!(group.advance(0.0), GroupStep::Completed);
    }

    #[test]
    fn test_targets_report_end_values() {
        let group = AnimationGroup::new("test")
            .with('x', tween(4.0, 100))
            .with('y', tween(-4.0, 100));
        let targets: Vec<_> = group.targets().collect();
        assert_eq!(targets, vec![('x', 4.0), ('y', -4.0)]);
        assert_eq!(group.len(), 2);
        assert_eq!(group.name(), "test");
    }
}
