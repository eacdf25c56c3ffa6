//! # card-table
//!
//! Deck, hand, and turn-order state engine for a table card game: a
//! standard 52-card draw pile, per-player hands of five, and a round-robin
//! turn pointer with rule-driven jumps.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation takes a `GameState` and returns
//!    a new one. Persistent data structures (`im`) make the whole-state
//!    replacement cheap.
//!
//! 2. **One writer**: the UI dispatches [`Action`]s to a [`GameStore`],
//!    which owns the live state and the RNG. Readers only ever see complete
//!    states.
//!
//! 3. **No-op over failure**: guarded operations (deal, draw) that cannot
//!    proceed return a [`Blocked`] reason and leave the state unchanged.
//!    Nothing in this crate panics on a reachable state.
//!
//! ## Modules
//!
//! - `core`: cards, players, state, actions, RNG
//! - `store`: single-writer state container
//! - `persist`: key-value snapshot layer with load-or-reset recovery
//!
//! ## Example
//!
//! ```
//! use card_table::{Action, GameStore, MemoryStore};
//!
//! let mut store = GameStore::new(MemoryStore::new(), 42);
//! store.apply(Action::AddPlayer { name: "Alice".into() }).unwrap();
//! store.apply(Action::AddPlayer { name: "Bob".into() }).unwrap();
//! store.apply(Action::Shuffle).unwrap();
//! store.apply(Action::DealHands).unwrap();
//!
//! assert_eq!(store.state().draw_pile.len(), 42);
//! assert_eq!(store.state().active_player().unwrap().hand_size(), 5);
//! ```

pub mod core;
pub mod persist;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, Action, Blocked, Card, GameRng, GameRngState, GameState, Hand, Player, Rank,
    Suit, HAND_SIZE,
};

pub use crate::persist::{MemoryStore, PersistError, Snapshot, SnapshotStore, SNAPSHOT_KEY};

pub use crate::store::GameStore;
