//! Tuning constants for gestures and animation.

use serde::{Deserialize, Serialize};

/// Damped spring parameters shared by every animated channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Higher is snappier.
    pub stiffness: f64,
    /// Higher is less bouncy.
    pub damping: f64,
    /// Simulated mass.
    pub mass: f64,
    /// A channel is at rest once it is this close to its target...
    pub rest_displacement: f64,
    /// ...and moving slower than this.
    pub rest_velocity: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 25.0,
            mass: 1.0,
            rest_displacement: 0.5,
            rest_velocity: 10.0,
        }
    }
}

/// Deck geometry and swipe thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Width of the viewport the deck is drawn in.
    pub screen_width: f64,
    /// Horizontal inset subtracted from the screen to get the card width.
    pub card_inset: f64,
    /// Release displacement beyond which a drag commits.
    pub distance_threshold: f64,
    /// Release speed (units/s) beyond which a drag commits.
    pub velocity_threshold: f64,
    /// Opposing displacement small enough to be overridden by a flick.
    pub negligible_displacement: f64,
    /// Rotation applied per card width of horizontal drag.
    pub max_drag_rotation_deg: f64,
    /// Extra distance past the screen edge for the exit position.
    pub exit_overshoot: f64,
    /// Rotation reached by a card leaving the screen.
    pub exit_rotation_deg: f64,
    /// Top card plus background cards exposed for rendering.
    pub visible_cards: usize,
    /// Spring used for both exit and return animations.
    pub spring: SpringConfig,
}

impl DeckConfig {
    /// Width used to normalize drag progress.
    pub fn reference_width(&self) -> f64 {
        (self.screen_width - self.card_inset).max(1.0)
    }

    /// Horizontal offset of a card that has fully left the screen.
    pub fn exit_distance(&self) -> f64 {
        self.screen_width + self.exit_overshoot
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            screen_width: 390.0,
            card_inset: 48.0,
            distance_threshold: 120.0,
            velocity_threshold: 400.0,
            negligible_displacement: 20.0,
            max_drag_rotation_deg: 20.0,
            exit_overshoot: 100.0,
            exit_rotation_deg: 15.0,
            visible_cards: 3,
            spring: SpringConfig::default(),
        }
    }
}
