use hashbrown::HashMap;

use crate::{
    card::CardItem,
    types::{CardId, CardIndex},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    Exhausted,
    DuplicateId(CardId),
    RewindBeyondCursor { to: CardIndex, cursor: CardIndex },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackState {
    Active,
    Exhausted,
}

/// Ordered, read-only card list plus the top-of-stack cursor.
///
/// `0 <= cursor <= len` always holds; `cursor == len` is the exhausted state.
#[derive(Debug, Clone, Default)]
pub struct CardStack {
    items: Vec<CardItem>,
    pos: HashMap<CardId, CardIndex>,
    cursor: CardIndex,
}

impl CardStack {
    pub fn new(items: Vec<CardItem>) -> Result<Self, StackError> {
        let mut pos = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if pos.insert(item.id.clone(), idx).is_some() {
                return Err(StackError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self {
            items,
            pos,
            cursor: 0,
        })
    }

    pub fn advance(&mut self) -> Result<CardIndex, StackError> {
        if self.cursor >= self.items.len() {
            return Err(StackError::Exhausted);
        }
        self.cursor += 1;
        Ok(self.cursor)
    }

    pub fn current(&self) -> Option<&CardItem> {
        self.items.get(self.cursor)
    }

    pub fn peek_background(&self, n: usize) -> &[CardItem] {
        let start = (self.cursor + 1).min(self.items.len());
        let end = start.saturating_add(n).min(self.items.len());
        &self.items[start..end]
    }

    /// Top card plus up to `n - 1` cards behind it.
    pub fn visible_window(&self, n: usize) -> &[CardItem] {
        let start = self.cursor.min(self.items.len());
        let end = start.saturating_add(n).min(self.items.len());
        &self.items[start..end]
    }

    pub fn rewind(&mut self, to: CardIndex) -> Result<(), StackError> {
        if to > self.cursor {
            return Err(StackError::RewindBeyondCursor {
                to,
                cursor: self.cursor,
            });
        }
        self.cursor = to;
        Ok(())
    }

    pub fn state(&self) -> StackState {
        if self.cursor >= self.items.len() {
            StackState::Exhausted
        } else {
            StackState::Active
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == StackState::Exhausted
    }

    pub fn cursor(&self) -> CardIndex {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    pub fn get(&self, idx: CardIndex) -> Option<&CardItem> {
        self.items.get(idx)
    }

    pub fn position_of(&self, id: &CardId) -> Option<CardIndex> {
        self.pos.get(id).copied()
    }

    pub fn items(&self) -> &[CardItem] {
        &self.items
    }
}
