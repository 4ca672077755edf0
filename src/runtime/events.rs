//! Deck event stream payloads.

use crate::types::{CardId, CardIndex};

/// Events emitted by the deck controller and fanned out by the runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckEvent {
    /// A drag was released short of the thresholds or aborted; the card is
    /// returning to rest.
    Cancelled,
    /// A card left to the left and the deck advanced.
    CommitLeft {
        /// Swiped card.
        id: CardId,
        /// Its position in the deck.
        index: CardIndex,
    },
    /// A card left to the right and the deck advanced.
    CommitRight {
        /// Swiped card.
        id: CardId,
        /// Its position in the deck.
        index: CardIndex,
    },
    /// The last commit was reverted; this card is on top again.
    UndoApplied {
        /// Restored card.
        id: CardId,
        /// Its position in the deck.
        index: CardIndex,
    },
    /// No cards remain.
    Exhausted,
}
