use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use swipedeck::{
    card::CardItem,
    config::DeckConfig,
    core::stack::StackState,
    deck::controller::{DeckController, DeckError, DeckObserver},
    gesture::translator::{GestureSample, Intent},
    runtime::{
        events::DeckEvent,
        handle::{RuntimeConfig, RuntimeError, spawn_deck},
    },
    types::{CardId, Direction},
};

struct Likes {
    liked: Arc<Mutex<Vec<CardId>>>,
}

impl DeckObserver for Likes {
    fn on_commit_right(&mut self, card: &CardItem) {
        self.liked.lock().expect("lock").push(card.id.clone());
    }
}

fn cards() -> Vec<CardItem> {
    ["1", "2", "3"]
        .iter()
        .map(|id| CardItem::new(*id, format!("Company {id}")))
        .collect()
}

async fn next_commit(sub: &mut tokio::sync::broadcast::Receiver<DeckEvent>) -> DeckEvent {
    loop {
        let evt = tokio::time::timeout(Duration::from_secs(5), sub.recv())
            .await
            .expect("event")
            .expect("recv");
        if matches!(evt, DeckEvent::CommitLeft { .. } | DeckEvent::CommitRight { .. }) {
            return evt;
        }
    }
}

#[tokio::test]
async fn drag_commit_advances_after_exit_animation() {
    let liked = Arc::new(Mutex::new(Vec::new()));
    let deck = DeckController::new(cards(), DeckConfig::default())
        .expect("deck")
        .with_observer(Box::new(Likes {
            liked: Arc::clone(&liked),
        }));
    let handle = spawn_deck(deck, RuntimeConfig::default());
    let mut sub = handle.subscribe();

    handle.begin_gesture().await.expect("begin");
    handle
        .update_gesture(GestureSample::at(150.0, 0.0))
        .await
        .expect("update");
    let intent = handle
        .end_gesture(GestureSample::at(210.0, 0.0))
        .await
        .expect("end");
    assert_eq!(intent, Intent::Commit(Direction::Right));

    let snap = handle.snapshot().await.expect("snapshot");
    assert!(snap.locked);
    assert_eq!(snap.cursor, 0);

    assert!(matches!(
        handle.begin_gesture().await,
        Err(RuntimeError::Deck(DeckError::Locked))
    ));

    let evt = next_commit(&mut sub).await;
    assert_eq!(
        evt,
        DeckEvent::CommitRight {
            id: CardId::from("1"),
            index: 0
        }
    );

    let snap = handle.snapshot().await.expect("snapshot");
    assert_eq!(snap.cursor, 1);
    assert!(!snap.locked);
    assert!(snap.can_undo);
    assert_eq!(snap.current().map(|c| c.id.as_str()), Some("2"));
    assert_eq!(*liked.lock().unwrap(), vec![CardId::from("1")]);

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn button_swipes_exhaust_then_undo_restores() {
    let deck = DeckController::new(cards(), DeckConfig::default()).expect("deck");
    let handle = spawn_deck(deck, RuntimeConfig::default());
    let mut sub = handle.subscribe();

    for _ in 0..3 {
        handle.swipe(Direction::Left).await.expect("swipe");
        let evt = next_commit(&mut sub).await;
        assert!(matches!(evt, DeckEvent::CommitLeft { .. }));
    }

    let snap = handle.snapshot().await.expect("snapshot");
    assert_eq!(snap.state, StackState::Exhausted);
    assert!(snap.current().is_none());
    assert!(matches!(
        handle.swipe(Direction::Right).await,
        Err(RuntimeError::Deck(DeckError::Exhausted))
    ));

    assert!(handle.undo().await.expect("undo"));
    assert!(!handle.undo().await.expect("undo"));
    let snap = handle.snapshot().await.expect("snapshot");
    assert_eq!(snap.cursor, 2);
    assert_eq!(snap.state, StackState::Active);

    handle.shutdown().await.expect("shutdown");
    assert!(matches!(
        handle.snapshot().await,
        Err(RuntimeError::ChannelClosed)
    ));
}
