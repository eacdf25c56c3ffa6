//! Core types: cards, players, state, actions, RNG.
//!
//! Everything in this module is pure data and pure transitions. The single
//! writer lives in `crate::store`; persistence lives in `crate::persist`.

pub mod action;
pub mod card;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use card::{standard_deck, Card, Rank, Suit};
pub use player::{Hand, Player};
pub use rng::{GameRng, GameRngState};
pub use state::{Blocked, GameState, HAND_SIZE};
