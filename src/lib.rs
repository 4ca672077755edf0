//! Headless swipe-deck engine: card stack, drag-to-decision translation,
//! spring exit/return animation, and single-level undo.
//!
//! # Examples
//!
//! Driving a [`deck::controller::DeckController`] frame by frame:
//! ```
//! use swipedeck::{
//!     card::CardItem,
//!     config::DeckConfig,
//!     deck::controller::DeckController,
//!     gesture::translator::{GestureSample, Intent},
//!     types::Direction,
//! };
//!
//! let cards = vec![CardItem::new("1", "CareTech"), CardItem::new("2", "MediAlert")];
//! let mut deck = DeckController::new(cards, DeckConfig::default()).expect("deck");
//!
//! deck.begin_gesture().expect("begin");
//! deck.update_gesture(GestureSample::at(200.0, 0.0)).expect("update");
//! let intent = deck.end_gesture(GestureSample::at(200.0, 0.0)).expect("end");
//! assert_eq!(intent, Intent::Commit(Direction::Right));
//!
//! while deck.is_locked() {
//!     deck.tick(1.0 / 60.0);
//! }
//! assert_eq!(deck.cursor(), 1);
//! assert!(deck.undo());
//! assert_eq!(deck.cursor(), 0);
//! ```
//!
//! Runtime usage, where a frame ticker drives the animation:
//! ```no_run
//! use swipedeck::{
//!     card::CardItem,
//!     config::DeckConfig,
//!     deck::controller::DeckController,
//!     runtime::handle::{spawn_deck, RuntimeConfig},
//!     types::Direction,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let deck = DeckController::new(vec![CardItem::new("1", "CareTech")], DeckConfig::default())
//!     .expect("deck");
//! let handle = spawn_deck(deck, RuntimeConfig::default());
//! let mut events = handle.subscribe();
//! handle.swipe(Direction::Left).await.expect("swipe");
//! let _commit = events.recv().await.expect("event");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```

/// Spring animation of the top card.
pub mod animation;
/// Card payload and pose types.
pub mod card;
/// Gesture and animation tuning.
pub mod config;
/// Card stack model and undo history.
pub mod core;
/// Deck controller tying input, animation, and state together.
pub mod deck;
/// Drag stream classification.
pub mod gesture;
/// Preference persistence abstraction and SQLite implementation.
pub mod persist;
/// Serialized runtime handle and events.
pub mod runtime;
/// Session state containers.
pub mod state;
/// Committed-swipe record.
pub mod transition;
/// Shared primitive types and enums.
pub mod types;
