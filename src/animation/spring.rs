use crate::config::SpringConfig;

const MAX_FRAME_SECS: f64 = 0.05;
pub(crate) const SUBSTEP_SECS: f64 = 1.0 / 240.0;

/// One damped-spring channel (position, rotation, or opacity).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringChannel {
    pub value: f64,
    pub velocity: f64,
}

impl SpringChannel {
    pub fn at(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// Integrates toward `target` for `dt` seconds. Long frames are clamped so
    /// a stalled frame cannot blow the simulation up. A channel that has gone
    /// non-finite snaps to `target`.
    pub fn step(&mut self, target: f64, cfg: &SpringConfig, dt: f64) {
        if !self.is_finite() {
            self.snap_to(target);
            return;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        let mass = cfg.mass.max(f64::EPSILON);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let spring_force = (target - self.value) * cfg.stiffness;
            let damping_force = -self.velocity * cfg.damping;
            self.velocity += (spring_force + damping_force) / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if !self.is_finite() {
            self.snap_to(target);
        }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.velocity.is_finite()
    }

    /// `scale` adapts the rest thresholds to the channel's units, e.g. 0.01
    /// for opacity.
    pub fn is_at_rest(&self, target: f64, cfg: &SpringConfig, scale: f64) -> bool {
        (target - self.value).abs() < cfg.rest_displacement * scale
            && self.velocity.abs() < cfg.rest_velocity * scale
    }

    pub fn snap_to(&mut self, target: f64) {
        self.value = target;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_target() {
        let cfg = SpringConfig::default();
        let mut ch = SpringChannel::at(0.0);
        let mut frames = 0;
        while !ch.is_at_rest(500.0, &cfg, 1.0) {
            ch.step(500.0, &cfg, 1.0 / 60.0);
            frames += 1;
            assert!(frames < 600, "spring failed to settle");
        }
        assert!((ch.value - 500.0).abs() < cfg.rest_displacement);
    }

    #[test]
    fn non_finite_state_snaps_to_target() {
        let cfg = SpringConfig::default();
        let mut ch = SpringChannel::at(f64::NAN);
        ch.step(490.0, &cfg, 1.0 / 60.0);
        assert_eq!(ch, SpringChannel::at(490.0));

        let mut ch = SpringChannel::at(1e300);
        ch.velocity = 1e300;
        ch.step(0.0, &cfg, 1.0 / 60.0);
        assert!(ch.is_finite());
    }

    #[test]
    fn huge_frame_is_clamped() {
        let cfg = SpringConfig::default();
        let mut ch = SpringChannel::at(0.0);
        ch.step(100.0, &cfg, 10.0);
        assert!(ch.value.is_finite());
        assert!(ch.value.abs() < 200.0);
    }
}
