//! Committed-swipe record kept for undo.

use serde::{Deserialize, Serialize};

use crate::types::{CardIndex, Direction};

/// The most recent committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Index of the card that was swiped away.
    pub card_index: CardIndex,
    /// Direction it left in.
    pub direction: Direction,
    /// Cursor value before the commit advanced it.
    pub previous_cursor: CardIndex,
}
