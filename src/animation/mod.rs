//! Spring-driven pose animation for the top card.

/// Exit/return animator with exactly-once settle notices.
pub mod driver;
/// Damped spring integrator.
pub mod spring;
