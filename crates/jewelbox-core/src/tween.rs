//! Generic eased interpolation, shared by every animated property.
//!
//! A [`Tween`] only moves when it is advanced, so the same driver serves the
//! browser frame loop and deterministic host-side tests. Groups of tweens that
//! must finish together report through a [`CompletionCounter`].

use crate::easing::Easing;
use crate::scene::Transform;
use glam::Vec3;
use std::time::Duration;

/// Values that can be linearly blended.
pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// Result of advancing a tween by one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep<T> {
    pub value: T,
    /// True only on the step that reached the target.
    pub just_finished: bool,
}

#[derive(Clone, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    finished: bool,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
            finished: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    pub fn target(&self) -> T {
        self.to
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Normalized progress in `[0, 1]`. A zero duration counts as complete.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn advance(&mut self, dt: Duration) -> TweenStep<T> {
        if self.finished {
            return TweenStep {
                value: self.to,
                just_finished: false,
            };
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        let progress = self.progress();
        if progress >= 1.0 {
            self.finished = true;
            return TweenStep {
                value: self.to,
                just_finished: true,
            };
        }
        TweenStep {
            value: self.from.lerp_to(self.to, self.easing.apply(progress)),
            just_finished: false,
        }
    }
}

/// Counts completions of a fixed number of concurrent animations.
#[derive(Clone, Copy, Debug)]
pub struct CompletionCounter {
    completed: usize,
    total: usize,
}

impl CompletionCounter {
    pub fn new(total: usize) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    /// Record one completion. Returns true exactly once, when the last one lands.
    pub fn complete(&mut self) -> bool {
        if self.completed >= self.total {
            return false;
        }
        self.completed += 1;
        self.completed == self.total
    }

    #[inline]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Position, scale and rotation tweens that run side by side.
#[derive(Clone, Debug)]
pub struct TransformTween {
    position: Tween<Vec3>,
    scale: Tween<Vec3>,
    rotation: Tween<Vec3>,
    counter: CompletionCounter,
}

/// One step of a [`TransformTween`].
#[derive(Clone, Copy, Debug)]
pub struct TransformStep {
    pub transform: Transform,
    /// Set on the step where the last of the three tracks completed.
    pub finished: bool,
}

impl TransformTween {
    pub const TRACKS: usize = 3;

    /// Tween every component of `from` towards `to`. Rotations are radians.
    pub fn new(from: Transform, to: Transform, duration: Duration) -> Self {
        Self {
            position: Tween::new(from.position, to.position, duration),
            scale: Tween::new(from.scale, to.scale, duration),
            rotation: Tween::new(from.rotation, to.rotation, duration),
            counter: CompletionCounter::new(Self::TRACKS),
        }
    }

    pub fn target(&self) -> Transform {
        Transform {
            position: self.position.target(),
            scale: self.scale.target(),
            rotation: self.rotation.target(),
        }
    }

    pub fn completed_tracks(&self) -> usize {
        self.counter.completed()
    }

    pub fn advance(&mut self, dt: Duration) -> TransformStep {
        let mut finished = false;
        let position = self.position.advance(dt);
        let scale = self.scale.advance(dt);
        let rotation = self.rotation.advance(dt);
        for step_done in [
            position.just_finished,
            scale.just_finished,
            rotation.just_finished,
        ] {
            if step_done && self.counter.complete() {
                finished = true;
            }
        }
        if position.just_finished || scale.just_finished || rotation.just_finished {
            log::debug!(
                "[tween] {}/{} tracks complete",
                self.counter.completed(),
                self.counter.total()
            );
        }
        TransformStep {
            transform: Transform {
                position: position.value,
                scale: scale.value,
                rotation: rotation.value,
            },
            finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn tween_reaches_target_exactly() {
        let mut t = Tween::new(0.0_f32, 10.0, Duration::from_millis(400));
        let mut last = t.advance(MS_100);
        assert!(last.value > 0.0 && last.value < 10.0);
        for _ in 0..3 {
            last = t.advance(MS_100);
        }
        assert_eq!(last.value, 10.0);
        assert!(last.just_finished);
        assert!(t.is_finished());
    }

    #[test]
    fn tween_reports_finish_once() {
        let mut t = Tween::new(Vec3::ZERO, Vec3::ONE, MS_100);
        assert!(t.advance(Duration::from_millis(250)).just_finished);
        let after = t.advance(MS_100);
        assert!(!after.just_finished);
        assert_eq!(after.value, Vec3::ONE);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut t = Tween::new(1.0_f32, 2.0, Duration::ZERO);
        let step = t.advance(Duration::ZERO);
        assert_eq!(step.value, 2.0);
        assert!(step.just_finished);
    }

    #[test]
    fn midpoint_matches_cubic_ease() {
        let mut t = Tween::new(Vec3::ZERO, Vec3::new(2.0, 4.0, -2.0), Duration::from_millis(800));
        let step = t.advance(Duration::from_millis(400));
        assert!((step.value - Vec3::new(1.0, 2.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn counter_fires_on_last_completion_only() {
        let mut c = CompletionCounter::new(3);
        assert!(!c.complete());
        assert!(!c.complete());
        assert!(c.complete());
        assert!(!c.complete());
        assert_eq!(c.completed(), 3);
    }

    #[test]
    fn transform_tween_finishes_when_all_tracks_complete() {
        let from = Transform::default();
        let to = Transform {
            position: Vec3::new(0.0, 0.8, 2.5),
            scale: Vec3::splat(0.15),
            rotation: Vec3::new(0.0, 45f32.to_radians(), 0.0),
        };
        let mut tw = TransformTween::new(from, to, Duration::from_millis(800));
        let step = tw.advance(Duration::from_millis(500));
        assert!(!step.finished);
        assert_eq!(tw.completed_tracks(), 0);
        let step = tw.advance(Duration::from_millis(300));
        assert!(step.finished);
        assert_eq!(tw.completed_tracks(), TransformTween::TRACKS);
        assert_eq!(step.transform, to);
        assert!(!tw.advance(MS_100).finished);
    }
}
