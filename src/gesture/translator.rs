use serde::{Deserialize, Serialize};

use crate::{card::Pose, config::DeckConfig, types::Direction};

/// One frame of a pan gesture, relative to where it began.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureSample {
    /// Horizontal displacement since begin.
    pub dx: f64,
    /// Vertical displacement since begin.
    pub dy: f64,
    /// Horizontal velocity in units per second.
    pub vx: f64,
    /// Vertical velocity in units per second.
    pub vy: f64,
}

impl GestureSample {
    /// Displacement-only sample.
    pub fn at(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            ..Self::default()
        }
    }

    /// Same displacement with a release velocity.
    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }
}

/// Outcome of a released drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Throw the card off screen in this direction.
    Commit(Direction),
    /// Return the card to rest.
    Cancel,
}

/// Turns a begin/update*/end drag stream into an [`Intent`].
///
/// Out-of-order events (update or end with no begin) are ignored and
/// reported as `None`.
#[derive(Debug, Clone)]
pub struct GestureTranslator {
    config: DeckConfig,
    active: bool,
    last: Option<GestureSample>,
}

impl GestureTranslator {
    pub fn new(config: DeckConfig) -> Self {
        Self {
            config,
            active: false,
            last: None,
        }
    }

    /// Starts a drag. A begin while a drag is already active restarts it.
    pub fn begin(&mut self) {
        if self.active {
            log::warn!("gesture begin while a drag is active; restarting");
        }
        self.active = true;
        self.last = None;
    }

    pub fn update(&mut self, sample: GestureSample) -> Option<Pose> {
        if !self.active {
            log::warn!("gesture update without begin ignored");
            return None;
        }
        let sample = self.sanitize(sample);
        self.last = Some(sample);
        Some(self.drag_pose(&sample))
    }

    pub fn end(&mut self, sample: GestureSample) -> Option<Intent> {
        if !self.active {
            log::warn!("gesture end without begin ignored");
            return None;
        }
        let sample = self.sanitize(sample);
        self.active = false;
        self.last = None;
        Some(self.decide(&sample))
    }

    /// Aborts the drag, e.g. when another recognizer claims the touch.
    /// Returns whether a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        self.last = None;
        was_active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_sample(&self) -> Option<&GestureSample> {
        self.last.as_ref()
    }

    /// Replaces non-finite displacement with the last good frame's and
    /// non-finite velocity with zero.
    pub fn sanitize(&self, sample: GestureSample) -> GestureSample {
        let last = self.last.unwrap_or_default();
        let finite = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        GestureSample {
            dx: finite(sample.dx, last.dx),
            dy: finite(sample.dy, last.dy),
            vx: finite(sample.vx, 0.0),
            vy: finite(sample.vy, 0.0),
        }
    }

    /// Horizontal drag progress in card widths. Not clamped.
    pub fn progress(&self, dx: f64) -> f64 {
        dx / self.config.reference_width()
    }

    pub fn drag_pose(&self, sample: &GestureSample) -> Pose {
        Pose {
            x: sample.dx,
            y: sample.dy,
            rotation_deg: self.progress(sample.dx) * self.config.max_drag_rotation_deg,
            opacity: 1.0,
        }
    }

    /// Release decision.
    ///
    /// Commits when the displacement or the velocity passes its threshold,
    /// unless the two point in opposite directions. A fast flick against a
    /// negligible displacement wins; a fast flick back against a real
    /// displacement cancels.
    pub fn decide(&self, sample: &GestureSample) -> Intent {
        let cfg = &self.config;
        let dx = if sample.dx.is_finite() { sample.dx } else { 0.0 };
        let vx = if sample.vx.is_finite() { sample.vx } else { 0.0 };

        let far_enough = dx.abs() > cfg.distance_threshold;
        let fast_enough = vx.abs() > cfg.velocity_threshold;
        if !far_enough && !fast_enough {
            return Intent::Cancel;
        }

        let by_distance = Direction::from_sign(dx);
        let by_velocity = Direction::from_sign(vx);
        let opposing = matches!((by_distance, by_velocity), (Some(d), Some(v)) if d != v);

        if !opposing {
            return by_distance
                .or(by_velocity)
                .map_or(Intent::Cancel, Intent::Commit);
        }

        if fast_enough && dx.abs() <= cfg.negligible_displacement {
            return by_velocity.map_or(Intent::Cancel, Intent::Commit);
        }
        if far_enough && !fast_enough {
            return by_distance.map_or(Intent::Cancel, Intent::Commit);
        }
        Intent::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> GestureTranslator {
        GestureTranslator::new(DeckConfig::default())
    }

    #[test]
    fn distance_threshold_boundary() {
        let t = translator();
        let d = DeckConfig::default().distance_threshold;
        assert_eq!(t.decide(&GestureSample::at(d - 1.0, 0.0)), Intent::Cancel);
        assert_eq!(t.decide(&GestureSample::at(d, 0.0)), Intent::Cancel);
        assert_eq!(
            t.decide(&GestureSample::at(d + 1.0, 0.0)),
            Intent::Commit(Direction::Right)
        );
        assert_eq!(
            t.decide(&GestureSample::at(-(d + 1.0), 0.0)),
            Intent::Commit(Direction::Left)
        );
    }

    #[test]
    fn fast_flick_commits_with_small_displacement() {
        let t = translator();
        let s = GestureSample::at(30.0, 0.0).with_velocity(900.0, 0.0);
        assert_eq!(t.decide(&s), Intent::Commit(Direction::Right));

        let s = GestureSample::at(0.0, 0.0).with_velocity(-900.0, 0.0);
        assert_eq!(t.decide(&s), Intent::Commit(Direction::Left));
    }

    #[test]
    fn flick_overrides_negligible_opposite_residual() {
        let t = translator();
        let s = GestureSample::at(5.0, 0.0).with_velocity(-900.0, 0.0);
        assert_eq!(t.decide(&s), Intent::Commit(Direction::Left));
    }

    #[test]
    fn contradictory_release_cancels() {
        let t = translator();
        let s = GestureSample::at(60.0, 0.0).with_velocity(-900.0, 0.0);
        assert_eq!(t.decide(&s), Intent::Cancel);

        let s = GestureSample::at(200.0, 0.0).with_velocity(-900.0, 0.0);
        assert_eq!(t.decide(&s), Intent::Cancel);
    }

    #[test]
    fn slow_backwards_residual_keeps_distance_commit() {
        let t = translator();
        let s = GestureSample::at(200.0, 0.0).with_velocity(-50.0, 0.0);
        assert_eq!(t.decide(&s), Intent::Commit(Direction::Right));
    }

    #[test]
    fn vertical_travel_alone_does_not_commit() {
        let t = translator();
        let s = GestureSample::at(10.0, 400.0).with_velocity(0.0, 2000.0);
        assert_eq!(t.decide(&s), Intent::Cancel);
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        let mut t = translator();
        assert_eq!(t.update(GestureSample::at(10.0, 0.0)), None);
        assert_eq!(t.end(GestureSample::at(500.0, 0.0)), None);
        assert!(!t.cancel());

        t.begin();
        assert!(t.update(GestureSample::at(10.0, 0.0)).is_some());
        assert_eq!(t.last_sample(), Some(&GestureSample::at(10.0, 0.0)));
        assert_eq!(t.end(GestureSample::at(10.0, 0.0)), Some(Intent::Cancel));
        assert_eq!(t.last_sample(), None);
        assert_eq!(t.end(GestureSample::at(10.0, 0.0)), None);
    }

    #[test]
    fn non_finite_frames_reuse_the_last_good_one() {
        let mut t = translator();
        t.begin();
        t.update(GestureSample::at(80.0, 5.0));
        let pose = t
            .update(GestureSample::at(f64::NAN, f64::INFINITY))
            .expect("pose");
        assert_eq!((pose.x, pose.y), (80.0, 5.0));
        assert!(pose.rotation_deg.is_finite());

        let release = GestureSample::at(f64::NEG_INFINITY, 0.0).with_velocity(f64::NAN, 0.0);
        assert_eq!(t.end(release), Some(Intent::Cancel));
    }

    #[test]
    fn drag_rotation_is_proportional_and_uncapped() {
        let cfg = DeckConfig::default();
        let t = GestureTranslator::new(cfg);
        let w = cfg.reference_width();
        let pose = t.drag_pose(&GestureSample::at(w * 2.0, 7.0));
        assert!((pose.rotation_deg - cfg.max_drag_rotation_deg * 2.0).abs() < 1e-9);
        assert_eq!(pose.y, 7.0);
        assert_eq!(pose.opacity, 1.0);
    }
}
