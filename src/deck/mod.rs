//! Swipe deck controller and its observer seam.

/// Gesture, animation, stack, and undo wiring.
pub mod controller;
