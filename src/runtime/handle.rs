use tokio::{
    sync::{broadcast, mpsc, oneshot},
    time::{Duration, MissedTickBehavior},
};

use crate::{
    card::{CardItem, Pose},
    core::stack::StackState,
    deck::controller::{DeckController, DeckError},
    gesture::translator::{GestureSample, Intent},
    types::{CardIndex, Direction},
};

use super::events::DeckEvent;

#[derive(Debug)]
pub enum RuntimeError {
    Deck(DeckError),
    ChannelClosed,
}

impl From<DeckError> for RuntimeError {
    fn from(value: DeckError) -> Self {
        Self::Deck(value)
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub frame_interval_ms: u64,
    pub command_queue_bound: usize,
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            command_queue_bound: 256,
            event_capacity: 1024,
        }
    }
}

/// Point-in-time view of the deck for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSnapshot {
    pub cursor: CardIndex,
    pub state: StackState,
    pub window: Vec<CardItem>,
    pub pose: Pose,
    pub locked: bool,
    pub can_undo: bool,
}

impl DeckSnapshot {
    pub fn current(&self) -> Option<&CardItem> {
        match self.state {
            StackState::Active => self.window.first(),
            StackState::Exhausted => None,
        }
    }
}

pub struct DeckHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<DeckEvent>,
}

impl Clone for DeckHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

enum Command {
    Begin {
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    Update {
        sample: GestureSample,
        resp: oneshot::Sender<Result<Pose, RuntimeError>>,
    },
    End {
        sample: GestureSample,
        resp: oneshot::Sender<Result<Intent, RuntimeError>>,
    },
    CancelGesture {
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    Swipe {
        direction: Direction,
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    Undo {
        resp: oneshot::Sender<bool>,
    },
    Snapshot {
        resp: oneshot::Sender<DeckSnapshot>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Moves `controller` onto its own task. All input is applied in arrival
/// order; a frame ticker drives the animation between commands.
pub fn spawn_deck(controller: DeckController, config: RuntimeConfig) -> DeckHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<DeckEvent>(config.event_capacity.max(1));

    let events_tx_loop = events_tx.clone();
    let frame = Duration::from_millis(config.frame_interval_ms.max(1));

    tokio::spawn(async move {
        let mut controller = controller;
        let mut ticker = tokio::time::interval(frame);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let dt = frame.as_secs_f64();

        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => {
                    let Some(cmd) = cmd else { break; };
                    let done = handle_command(cmd, &mut controller);
                    publish(&mut controller, &events_tx_loop);
                    if done {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if controller.is_animating() {
                        controller.tick(dt);
                        publish(&mut controller, &events_tx_loop);
                    }
                }
            }
        }
        log::debug!("deck runtime stopped");
    });

    DeckHandle { cmd_tx, events_tx }
}

impl DeckHandle {
    pub fn subscribe(&self) -> broadcast::Receiver<DeckEvent> {
        self.events_tx.subscribe()
    }

    pub async fn begin_gesture(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Begin { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    pub async fn update_gesture(&self, sample: GestureSample) -> Result<Pose, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Update { sample, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    pub async fn end_gesture(&self, sample: GestureSample) -> Result<Intent, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::End { sample, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    pub async fn cancel_gesture(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::CancelGesture { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    pub async fn swipe(&self, direction: Direction) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Swipe {
            direction,
            resp: tx,
        })
        .await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    pub async fn undo(&self) -> Result<bool, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Undo { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    pub async fn snapshot(&self) -> Result<DeckSnapshot, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Shutdown { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    async fn send(&self, cmd: Command) -> Result<(), RuntimeError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}

fn handle_command(cmd: Command, controller: &mut DeckController) -> bool {
    match cmd {
        Command::Begin { resp } => {
            let _ = resp.send(controller.begin_gesture().map_err(RuntimeError::from));
        }
        Command::Update { sample, resp } => {
            let _ = resp.send(controller.update_gesture(sample).map_err(RuntimeError::from));
        }
        Command::End { sample, resp } => {
            let _ = resp.send(controller.end_gesture(sample).map_err(RuntimeError::from));
        }
        Command::CancelGesture { resp } => {
            let _ = resp.send(controller.cancel_gesture().map_err(RuntimeError::from));
        }
        Command::Swipe { direction, resp } => {
            let _ = resp.send(controller.swipe(direction).map_err(RuntimeError::from));
        }
        Command::Undo { resp } => {
            let _ = resp.send(controller.undo());
        }
        Command::Snapshot { resp } => {
            let _ = resp.send(snapshot_of(controller));
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}

fn snapshot_of(controller: &DeckController) -> DeckSnapshot {
    DeckSnapshot {
        cursor: controller.cursor(),
        state: controller.state(),
        window: controller.visible_window().to_vec(),
        pose: controller.pose(),
        locked: controller.is_locked(),
        can_undo: controller.can_undo(),
    }
}

fn publish(controller: &mut DeckController, events_tx: &broadcast::Sender<DeckEvent>) {
    for event in controller.drain_events() {
        let _ = events_tx.send(event);
    }
}
