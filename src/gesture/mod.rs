//! Drag stream to swipe decision.

/// Threshold-based release classifier.
pub mod translator;
