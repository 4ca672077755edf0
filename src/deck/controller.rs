use crate::{
    animation::driver::{AnimationDriver, AnimationStyle, AnimationTicket, Destination},
    card::{BackgroundLayer, CardItem, Pose},
    config::DeckConfig,
    core::{
        history::CommitHistory,
        stack::{CardStack, StackError, StackState},
    },
    gesture::translator::{GestureSample, GestureTranslator, Intent},
    runtime::events::DeckEvent,
    transition::TransitionRecord,
    types::{CardIndex, Direction},
};

/// Reported no-ops. None of these leave the deck in a changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// There is no top card to act on.
    Exhausted,
    /// The top card is still playing its exit animation.
    Locked,
    /// An update/end/cancel arrived with no drag in progress.
    NoActiveGesture,
}

/// Receives one notification per committed card, after the exit animation
/// has settled and the deck has advanced.
pub trait DeckObserver: Send {
    fn on_commit_left(&mut self, _card: &CardItem) {}
    fn on_commit_right(&mut self, _card: &CardItem) {}
}

#[derive(Debug, Clone, Copy)]
struct PendingCommit {
    ticket: AnimationTicket,
    card_index: CardIndex,
    direction: Direction,
}

/// Swipe deck: stack, gesture translator, animation driver, and undo slot.
///
/// Input is serialized: while a commit's exit animation is in flight the
/// deck is locked and every gesture, swipe, and undo is rejected. The cursor
/// only moves when [`DeckController::tick`] observes the exit settle.
pub struct DeckController {
    config: DeckConfig,
    stack: CardStack,
    history: CommitHistory,
    translator: GestureTranslator,
    driver: AnimationDriver,
    pending: Option<PendingCommit>,
    observer: Option<Box<dyn DeckObserver>>,
    events: Vec<DeckEvent>,
}

impl DeckController {
    pub fn new(items: Vec<CardItem>, config: DeckConfig) -> Result<Self, StackError> {
        Ok(Self {
            config,
            stack: CardStack::new(items)?,
            history: CommitHistory::new(),
            translator: GestureTranslator::new(config),
            driver: AnimationDriver::new(config),
            pending: None,
            observer: None,
            events: Vec::new(),
        })
    }

    pub fn with_observer(mut self, observer: Box<dyn DeckObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Option<Box<dyn DeckObserver>>) {
        self.observer = observer;
    }

    pub fn begin_gesture(&mut self) -> Result<(), DeckError> {
        self.ensure_interactive()?;
        self.translator.begin();
        // Grabbing a card mid-return freezes it where it is.
        let pose = self.driver.pose();
        self.driver.set_pose(pose);
        Ok(())
    }

    pub fn update_gesture(&mut self, sample: GestureSample) -> Result<Pose, DeckError> {
        if self.pending.is_some() {
            return Err(DeckError::Locked);
        }
        let pose = self
            .translator
            .update(sample)
            .ok_or(DeckError::NoActiveGesture)?;
        self.driver.set_pose(pose);
        Ok(pose)
    }

    pub fn end_gesture(&mut self, sample: GestureSample) -> Result<Intent, DeckError> {
        if self.pending.is_some() {
            return Err(DeckError::Locked);
        }
        let intent = self
            .translator
            .end(sample)
            .ok_or(DeckError::NoActiveGesture)?;
        match intent {
            Intent::Commit(direction) => {
                if self.stack.is_exhausted() {
                    self.return_to_rest();
                    return Err(DeckError::Exhausted);
                }
                self.start_exit(direction, Some(sample.vx));
            }
            Intent::Cancel => self.return_to_rest(),
        }
        Ok(intent)
    }

    /// The gesture system took the touch away; treated as a cancel.
    pub fn cancel_gesture(&mut self) -> Result<(), DeckError> {
        if !self.translator.cancel() {
            return Err(DeckError::NoActiveGesture);
        }
        self.return_to_rest();
        Ok(())
    }

    /// Commits the top card without a drag (pass/like buttons).
    pub fn swipe(&mut self, direction: Direction) -> Result<(), DeckError> {
        self.ensure_interactive()?;
        if self.translator.cancel() {
            log::debug!("button swipe replaced an active drag");
        }
        self.start_exit(direction, None);
        Ok(())
    }

    /// Advances animation by `dt` seconds and completes a commit whose exit
    /// has settled.
    pub fn tick(&mut self, dt: f64) {
        let Some(settled) = self.driver.step(dt) else {
            return;
        };
        match settled.destination {
            Destination::Exit(_) => match self.pending {
                Some(pending) if pending.ticket == settled.ticket => {
                    self.pending = None;
                    self.finish_commit(pending);
                }
                _ => log::warn!("exit {:?} settled with no matching commit", settled.ticket),
            },
            Destination::Neutral => log::debug!("card back at rest"),
        }
    }

    /// Reverts the last commit. Returns false when there is nothing to undo
    /// or a commit is still in flight.
    pub fn undo(&mut self) -> bool {
        if self.pending.is_some() {
            log::debug!("undo ignored while a commit is in flight");
            return false;
        }
        let Some(record) = self.history.undo(&mut self.stack) else {
            return false;
        };
        self.translator.cancel();
        self.driver.set_pose(Pose::NEUTRAL);
        if let Some(card) = self.stack.get(record.card_index) {
            log::debug!("undo restored card {} at {}", card.id, record.card_index);
            self.events.push(DeckEvent::UndoApplied {
                id: card.id.clone(),
                index: record.card_index,
            });
        }
        true
    }

    pub fn drain_events(&mut self) -> Vec<DeckEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn current(&self) -> Option<&CardItem> {
        self.stack.current()
    }

    pub fn cursor(&self) -> CardIndex {
        self.stack.cursor()
    }

    pub fn state(&self) -> StackState {
        self.stack.state()
    }

    pub fn visible_window(&self) -> &[CardItem] {
        self.stack.visible_window(self.config.visible_cards)
    }

    /// Cards behind the top one with their layering hints, nearest first.
    pub fn background_layers(&self) -> Vec<(&CardItem, BackgroundLayer)> {
        let behind = self.config.visible_cards.saturating_sub(1);
        self.stack
            .peek_background(behind)
            .iter()
            .enumerate()
            .map(|(i, card)| (card, BackgroundLayer::at_depth(i + 1)))
            .collect()
    }

    pub fn pose(&self) -> Pose {
        self.driver.pose()
    }

    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.translator.is_active()
    }

    pub fn can_undo(&self) -> bool {
        self.pending.is_none() && self.history.can_undo()
    }

    pub fn last_transition(&self) -> Option<&TransitionRecord> {
        self.history.peek()
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    fn ensure_interactive(&self) -> Result<(), DeckError> {
        if self.pending.is_some() {
            log::warn!("input rejected: exit animation in flight");
            return Err(DeckError::Locked);
        }
        if self.stack.is_exhausted() {
            return Err(DeckError::Exhausted);
        }
        Ok(())
    }

    fn start_exit(&mut self, direction: Direction, release_vx: Option<f64>) {
        if let Some(vx) = release_vx {
            self.driver.impart_velocity(vx);
        }
        let ticket = self
            .driver
            .drive_to(Destination::Exit(direction), AnimationStyle::Spring, None);
        let card_index = self.stack.cursor();
        log::debug!("commit {direction:?} of card {card_index} started");
        self.pending = Some(PendingCommit {
            ticket,
            card_index,
            direction,
        });
    }

    fn return_to_rest(&mut self) {
        self.driver
            .drive_to(Destination::Neutral, AnimationStyle::Spring, None);
        self.events.push(DeckEvent::Cancelled);
    }

    fn finish_commit(&mut self, pending: PendingCommit) {
        let previous_cursor = self.stack.cursor();
        if previous_cursor != pending.card_index {
            log::warn!(
                "commit for card {} settled with cursor at {previous_cursor}",
                pending.card_index
            );
            return;
        }
        if let Err(err) = self.stack.advance() {
            log::warn!("commit settled on an exhausted deck: {err:?}");
            return;
        }
        self.history.record(TransitionRecord {
            card_index: pending.card_index,
            direction: pending.direction,
            previous_cursor,
        });
        self.driver.set_pose(Pose::NEUTRAL);

        let Some(card) = self.stack.get(pending.card_index) else {
            return;
        };
        log::debug!("committed {:?} on card {}", pending.direction, card.id);
        let event = match pending.direction {
            Direction::Left => {
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_commit_left(card);
                }
                DeckEvent::CommitLeft {
                    id: card.id.clone(),
                    index: pending.card_index,
                }
            }
            Direction::Right => {
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_commit_right(card);
                }
                DeckEvent::CommitRight {
                    id: card.id.clone(),
                    index: pending.card_index,
                }
            }
        };
        self.events.push(event);
        if self.stack.is_exhausted() {
            self.events.push(DeckEvent::Exhausted);
        }
    }
}
