//! Card stack model and single-level undo history.

/// Single-slot commit history.
pub mod history;
/// Ordered card list with a top-of-stack cursor.
pub mod stack;
