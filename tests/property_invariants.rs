use proptest::prelude::*;

use swipedeck::{
    card::CardItem,
    config::DeckConfig,
    deck::controller::DeckController,
    gesture::translator::{GestureSample, GestureTranslator, Intent},
    types::Direction,
};

#[derive(Debug, Clone)]
enum Action {
    Drag { dx: i16, vx: i16 },
    Swipe { right: bool },
    Begin,
    End { dx: i16 },
    SystemCancel,
    Undo,
    Tick { frames: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (-400i16..400, -1500i16..1500).prop_map(|(dx, vx)| Action::Drag { dx, vx }),
        any::<bool>().prop_map(|right| Action::Swipe { right }),
        Just(Action::Begin),
        (-400i16..400).prop_map(|dx| Action::End { dx }),
        Just(Action::SystemCancel),
        Just(Action::Undo),
        (0u8..90).prop_map(|frames| Action::Tick { frames }),
    ]
}

fn deck_of(n: usize) -> DeckController {
    let cards = (0..n)
        .map(|i| CardItem::new(format!("c{i}"), format!("Card {i}")))
        .collect();
    DeckController::new(cards, DeckConfig::default()).expect("deck")
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds_and_only_undo_moves_it_back(
        n in 0usize..8,
        actions in prop::collection::vec(action_strategy(), 1..150),
    ) {
        let mut deck = deck_of(n);
        let mut prev = deck.cursor();

        for action in actions {
            let mut undone = false;
            match action {
                Action::Drag { dx, vx } => {
                    if deck.begin_gesture().is_ok() {
                        let s = GestureSample::at(f64::from(dx), 0.0);
                        let _ = deck.update_gesture(s);
                        let _ = deck.end_gesture(s.with_velocity(f64::from(vx), 0.0));
                    }
                }
                Action::Swipe { right } => {
                    let dir = if right { Direction::Right } else { Direction::Left };
                    let _ = deck.swipe(dir);
                }
                Action::Begin => {
                    let _ = deck.begin_gesture();
                }
                Action::End { dx } => {
                    let _ = deck.end_gesture(GestureSample::at(f64::from(dx), 0.0));
                }
                Action::SystemCancel => {
                    let _ = deck.cancel_gesture();
                }
                Action::Undo => {
                    undone = deck.undo();
                }
                Action::Tick { frames } => {
                    for _ in 0..frames {
                        deck.tick(1.0 / 60.0);
                    }
                }
            }

            let cursor = deck.cursor();
            prop_assert!(cursor <= n);
            if undone {
                prop_assert_eq!(cursor + 1, prev);
            } else {
                prop_assert!(cursor == prev || cursor == prev + 1);
            }
            prev = cursor;
        }
    }

    #[test]
    fn second_undo_never_moves_the_cursor(commits in 0usize..6) {
        let mut deck = deck_of(6);
        for _ in 0..commits {
            deck.swipe(Direction::Right).expect("swipe");
            while deck.is_animating() {
                deck.tick(1.0 / 60.0);
            }
        }
        let first = deck.undo();
        prop_assert_eq!(first, commits > 0);
        let cursor = deck.cursor();
        prop_assert!(!deck.undo());
        prop_assert_eq!(deck.cursor(), cursor);
    }

    #[test]
    fn slow_releases_split_at_the_distance_threshold(dx in 0.0f64..1000.0, right in any::<bool>()) {
        let cfg = DeckConfig::default();
        let t = GestureTranslator::new(cfg);
        let signed = if right { dx } else { -dx };
        let slow = GestureSample::at(signed, 0.0).with_velocity(signed.signum() * 10.0, 0.0);
        let intent = t.decide(&slow);
        if dx > cfg.distance_threshold {
            let expected = if right { Direction::Right } else { Direction::Left };
            prop_assert_eq!(intent, Intent::Commit(expected));
        } else {
            prop_assert_eq!(intent, Intent::Cancel);
        }
    }
}
