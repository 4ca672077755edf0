use crate::transition::TransitionRecord;

use super::stack::CardStack;

/// Single-slot undo history. A new record overwrites the previous one and
/// an undo consumes it.
#[derive(Debug, Clone, Default)]
pub struct CommitHistory {
    last: Option<TransitionRecord>,
}

impl CommitHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transition: TransitionRecord) {
        self.last = Some(transition);
    }

    /// Rewinds `stack` to the recorded cursor. Returns `None` when there is
    /// nothing to undo or the stack no longer matches the record.
    pub fn undo(&mut self, stack: &mut CardStack) -> Option<TransitionRecord> {
        let record = self.last.take()?;
        match stack.rewind(record.previous_cursor) {
            Ok(()) => Some(record),
            Err(err) => {
                log::warn!("dropping stale undo record {record:?}: {err:?}");
                None
            }
        }
    }

    pub fn peek(&self) -> Option<&TransitionRecord> {
        self.last.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.last.is_some()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card::CardItem, types::Direction};

    fn swiped(stack: &mut CardStack, direction: Direction) -> TransitionRecord {
        let previous_cursor = stack.cursor();
        stack.advance().expect("advance");
        TransitionRecord {
            card_index: previous_cursor,
            direction,
            previous_cursor,
        }
    }

    #[test]
    fn only_the_latest_record_survives() {
        let mut stack =
            CardStack::new(["a", "b", "c"].iter().map(|id| CardItem::new(*id, *id)).collect())
                .expect("deck");
        let mut history = CommitHistory::new();
        assert!(!history.can_undo());

        history.record(swiped(&mut stack, Direction::Left));
        let second = swiped(&mut stack, Direction::Right);
        history.record(second);
        assert_eq!(history.peek(), Some(&second));

        assert_eq!(history.undo(&mut stack), Some(second));
        assert_eq!(stack.cursor(), 1);
        assert_eq!(history.undo(&mut stack), None);
        assert_eq!(stack.cursor(), 1);
    }

    #[test]
    fn cleared_history_has_nothing_to_undo() {
        let mut stack =
            CardStack::new(["a", "b"].iter().map(|id| CardItem::new(*id, *id)).collect())
                .expect("deck");
        let mut history = CommitHistory::new();
        history.record(swiped(&mut stack, Direction::Right));
        assert!(history.can_undo());

        history.clear();
        assert!(!history.can_undo());
        assert!(history.peek().is_none());
        assert_eq!(history.undo(&mut stack), None);
        assert_eq!(stack.cursor(), 1);
    }

    #[test]
    fn stale_record_is_dropped() {
        let mut stack =
            CardStack::new(["a", "b"].iter().map(|id| CardItem::new(*id, *id)).collect())
                .expect("deck");
        let mut history = CommitHistory::new();
        history.record(TransitionRecord {
            card_index: 1,
            direction: Direction::Left,
            previous_cursor: 1,
        });
        stack.advance().expect("advance");
        stack.rewind(0).expect("rewind");

        assert_eq!(history.undo(&mut stack), None);
        assert!(!history.can_undo());
        assert_eq!(stack.cursor(), 0);
    }
}
