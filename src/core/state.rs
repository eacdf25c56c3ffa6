//! Game state and its pure transitions.
//!
//! ## GameState
//!
//! The complete table state:
//! - Draw pile and discard pile
//! - Seated players (insertion order = seating order)
//! - Deal gate (`dealt`) and turn pointer
//!
//! Uses `im` persistent data structures, so every transition returns a new
//! `GameState` sharing structure with the old one. The input state is never
//! mutated; readers holding the previous state never observe a torn update.
//!
//! ## Blocked transitions
//!
//! Guarded operations return `Result<GameState, Blocked>`. The `Err` arm
//! always means "state unchanged because precondition P failed" - these are
//! ordinary no-ops, not failures, and the caller keeps its current state.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{standard_deck, Card};
use super::player::{Hand, Player};
use super::rng::GameRng;

/// Cards dealt to each player at game start.
pub const HAND_SIZE: usize = 5;

/// Reason a guarded transition left the state unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Blocked {
    /// Deal requested with nobody seated.
    #[error("no players seated")]
    NoPlayers,
    /// Hands were already dealt this game.
    #[error("cards already dealt")]
    AlreadyDealt,
    /// Draw pile cannot cover a full deal.
    #[error("draw pile too small: need {need}, have {have}")]
    DeckTooSmall { need: usize, have: usize },
    /// Draw requested from an empty draw pile.
    #[error("draw pile is empty")]
    EmptyDrawPile,
}

/// Complete table state.
///
/// Constructed once per session via [`GameState::new`], then advanced only
/// through the transition methods below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down stack cards are dealt and drawn from. The "top" is the
    /// back of the sequence.
    pub draw_pile: Vector<Card>,

    /// Face-up pile of used cards. Declared for rendering and future
    /// transfer rules; no transition moves cards into it yet.
    pub discard_pile: Vector<Card>,

    /// Seated players in seating order.
    pub players: Vector<Player>,

    /// True once hands have been dealt; blocks re-dealing until reset.
    pub dealt: bool,

    /// Index of the active player, or 0 when nobody is seated.
    pub turn: usize,
}

impl GameState {
    /// The initial state: fresh unshuffled 52-card draw pile, no players,
    /// empty discard pile, `dealt = false`, `turn = 0`.
    ///
    /// Reset restores exactly this state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draw_pile: standard_deck(),
            discard_pile: Vector::new(),
            players: Vector::new(),
            dealt: false,
            turn: 0,
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is, if anyone is seated.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.turn)
    }

    /// Total cards across the draw pile, discard pile, and all hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
    }

    // === Transitions ===

    /// Return a state whose draw pile is a uniform random permutation of
    /// the current one. No other field changes.
    #[must_use]
    pub fn shuffled(&self, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = self.draw_pile.iter().copied().collect();
        rng.shuffle(&mut cards);

        Self {
            draw_pile: cards.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Remove the top card of the draw pile.
    ///
    /// `Blocked::EmptyDrawPile` when there is nothing to draw; the caller
    /// keeps the unchanged state.
    pub fn draw_top(&self) -> Result<Self, Blocked> {
        let mut draw_pile = self.draw_pile.clone();
        draw_pile.pop_back().ok_or(Blocked::EmptyDrawPile)?;

        Ok(Self {
            draw_pile,
            ..self.clone()
        })
    }

    /// Deal [`HAND_SIZE`] cards to every seated player.
    ///
    /// Guards, checked in order:
    /// 1. `NoPlayers` - nobody seated
    /// 2. `AlreadyDealt` - hands were dealt and the game was not reset
    /// 3. `DeckTooSmall` - draw pile cannot cover `players * HAND_SIZE`
    ///
    /// On success the cards come off the FRONT of the draw pile: player `i`
    /// receives the contiguous slice `[i*5, i*5+5)` of the taken cards, and
    /// `dealt` flips true.
    pub fn deal_hands(&self) -> Result<Self, Blocked> {
        if self.players.is_empty() {
            return Err(Blocked::NoPlayers);
        }
        if self.dealt {
            return Err(Blocked::AlreadyDealt);
        }

        let need = self.players.len() * HAND_SIZE;
        if self.draw_pile.len() < need {
            return Err(Blocked::DeckTooSmall {
                need,
                have: self.draw_pile.len(),
            });
        }

        let taken = self.draw_pile.take(need);
        let players: Vector<Player> = self
            .players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let hand: Hand = taken
                    .iter()
                    .skip(i * HAND_SIZE)
                    .take(HAND_SIZE)
                    .copied()
                    .collect();
                Player {
                    name: player.name.clone(),
                    hand,
                }
            })
            .collect();

        Ok(Self {
            draw_pile: self.draw_pile.skip(need),
            players,
            dealt: true,
            ..self.clone()
        })
    }

    /// Advance the turn pointer.
    ///
    /// - No players seated: pointer resets to 0.
    /// - `Some(index)`: jump straight to `index`, bounds unchecked - this is
    ///   the hook for rule-driven jumps (skips, reverses) and the rule layer
    ///   owns validity. `Some(0)` is a real jump to seat 0, not "no value".
    /// - `None`: round-robin, `(turn + 1) % players.len()`.
    #[must_use]
    pub fn advance_turn(&self, to: Option<usize>) -> Self {
        let turn = if self.players.is_empty() {
            0
        } else {
            match to {
                Some(index) => index,
                None => (self.turn + 1) % self.players.len(),
            }
        };

        Self {
            turn,
            ..self.clone()
        }
    }

    /// Seat a player at the end of the table.
    ///
    /// No duplicate-name check and no capacity limit.
    #[must_use]
    pub fn with_player(&self, player: Player) -> Self {
        let mut players = self.players.clone();
        players.push_back(player);

        Self {
            players,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
