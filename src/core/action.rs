//! Action representation: the discrete operations a UI can dispatch.
//!
//! Each variant maps 1:1 onto a transition in `core::state`. The rendering
//! layer builds an `Action` from a user interaction and hands it to the
//! store; it never mutates state directly.

use serde::{Deserialize, Serialize};

/// A user-dispatched game operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Shuffle the draw pile.
    Shuffle,
    /// Deal 5 cards to every seated player.
    DealHands,
    /// Remove the top card of the draw pile.
    DrawTop,
    /// Advance the turn pointer. `to: Some(index)` jumps straight to a
    /// seat (rule-driven skips/reverses); `None` is round-robin.
    AdvanceTurn { to: Option<usize> },
    /// Seat a new player with an empty hand.
    AddPlayer { name: String },
    /// Restore the initial state.
    Reset,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Shuffle => write!(f, "shuffle"),
            Action::DealHands => write!(f, "deal hands"),
            Action::DrawTop => write!(f, "draw top card"),
            Action::AdvanceTurn { to: Some(index) } => write!(f, "jump turn to seat {}", index),
            Action::AdvanceTurn { to: None } => write!(f, "advance turn"),
            Action::AddPlayer { name } => write!(f, "add player {}", name),
            Action::Reset => write!(f, "reset game"),
        }
    }
}
