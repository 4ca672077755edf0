use std::fmt;

use crate::{card::Pose, config::DeckConfig, types::Direction};

use super::spring::{SUBSTEP_SECS, SpringChannel};

const OPACITY_REST_SCALE: f64 = 0.01;

/// Where the top card is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Back to rest after a cancelled drag.
    Neutral,
    /// Off screen after a commit.
    Exit(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStyle {
    Spring,
    /// Jump to the target on the next frame.
    Snap,
}

/// Identifies one `drive_to` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationTicket(pub u64);

/// Completion notice for a `drive_to` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub ticket: AnimationTicket,
    pub destination: Destination,
}

pub type SettleCallback = Box<dyn FnOnce(Settled) + Send>;

struct InFlight {
    ticket: AnimationTicket,
    destination: Destination,
    target: Pose,
    style: AnimationStyle,
    on_settled: Option<SettleCallback>,
}

/// Frame-stepped spring animator for the top card's pose.
///
/// Each `drive_to` settles exactly once, reported from [`AnimationDriver::step`]
/// and through its callback. A newer `drive_to` (or a direct
/// [`AnimationDriver::set_pose`]) abandons the previous one without settling it.
pub struct AnimationDriver {
    config: DeckConfig,
    x: SpringChannel,
    y: SpringChannel,
    rotation: SpringChannel,
    opacity: SpringChannel,
    in_flight: Option<InFlight>,
    next_ticket: u64,
}

impl fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("pose", &self.pose())
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

impl AnimationDriver {
    pub fn new(config: DeckConfig) -> Self {
        Self {
            config,
            x: SpringChannel::at(0.0),
            y: SpringChannel::at(0.0),
            rotation: SpringChannel::at(0.0),
            opacity: SpringChannel::at(1.0),
            in_flight: None,
            next_ticket: 1,
        }
    }

    pub fn target_for(&self, destination: Destination) -> Pose {
        match destination {
            Destination::Neutral => Pose::NEUTRAL,
            Destination::Exit(direction) => Pose {
                x: direction.sign() * self.config.exit_distance(),
                y: self.y.value,
                rotation_deg: direction.sign() * self.config.exit_rotation_deg,
                opacity: 0.0,
            },
        }
    }

    pub fn drive_to(
        &mut self,
        destination: Destination,
        style: AnimationStyle,
        on_settled: Option<SettleCallback>,
    ) -> AnimationTicket {
        let ticket = AnimationTicket(self.next_ticket);
        self.next_ticket += 1;
        if let Some(prev) = self.in_flight.take() {
            log::debug!("animation {:?} superseded by {:?}", prev.ticket, ticket);
        }
        self.in_flight = Some(InFlight {
            ticket,
            destination,
            target: self.target_for(destination),
            style,
            on_settled,
        });
        ticket
    }

    /// Places the card directly, as while dragging. Abandons any animation.
    /// Non-finite channels fall back to the neutral pose.
    pub fn set_pose(&mut self, pose: Pose) {
        let finite = |v: f64, rest: f64| if v.is_finite() { v } else { rest };
        let pose = Pose {
            x: finite(pose.x, Pose::NEUTRAL.x),
            y: finite(pose.y, Pose::NEUTRAL.y),
            rotation_deg: finite(pose.rotation_deg, Pose::NEUTRAL.rotation_deg),
            opacity: finite(pose.opacity, Pose::NEUTRAL.opacity),
        };
        self.in_flight = None;
        self.x.snap_to(pose.x);
        self.y.snap_to(pose.y);
        self.rotation.snap_to(pose.rotation_deg);
        self.opacity.snap_to(pose.opacity);
    }

    /// Seeds horizontal velocity, e.g. from a release flick. Bounded to one
    /// exit distance per integration substep.
    pub fn impart_velocity(&mut self, vx: f64) {
        if vx.is_finite() {
            let bound = self.config.exit_distance() / SUBSTEP_SECS;
            self.x.velocity = vx.clamp(-bound, bound);
        }
    }

    /// Advances one frame. Returns the settle notice when the in-flight
    /// animation reaches its target during this frame.
    pub fn step(&mut self, dt: f64) -> Option<Settled> {
        let (target, style) = self
            .in_flight
            .as_ref()
            .map(|f| (f.target, f.style))?;
        let spring = self.config.spring;

        let done = match style {
            AnimationStyle::Snap => true,
            AnimationStyle::Spring => {
                self.x.step(target.x, &spring, dt);
                self.y.step(target.y, &spring, dt);
                self.rotation.step(target.rotation_deg, &spring, dt);
                self.opacity.step(target.opacity, &spring, dt);
                self.x.is_at_rest(target.x, &spring, 1.0)
                    && self.y.is_at_rest(target.y, &spring, 1.0)
                    && self.rotation.is_at_rest(target.rotation_deg, &spring, 1.0)
                    && self.opacity.is_at_rest(target.opacity, &spring, OPACITY_REST_SCALE)
            }
        };
        if !done {
            return None;
        }

        let flight = self.in_flight.take()?;
        self.x.snap_to(target.x);
        self.y.snap_to(target.y);
        self.rotation.snap_to(target.rotation_deg);
        self.opacity.snap_to(target.opacity);

        let settled = Settled {
            ticket: flight.ticket,
            destination: flight.destination,
        };
        if let Some(callback) = flight.on_settled {
            callback(settled);
        }
        Some(settled)
    }

    pub fn pose(&self) -> Pose {
        Pose {
            x: self.x.value,
            y: self.y.value,
            rotation_deg: self.rotation.value,
            opacity: self.opacity.value.clamp(0.0, 1.0),
        }
    }

    pub fn in_flight(&self) -> Option<(AnimationTicket, Destination)> {
        self.in_flight.as_ref().map(|f| (f.ticket, f.destination))
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }
}
