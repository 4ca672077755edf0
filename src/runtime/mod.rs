//! Serialized async front end and event stream APIs.

/// Event stream types emitted by the deck.
pub mod events;
/// Handle and command loop implementation.
pub mod handle;
