//! Single-writer state container.
//!
//! `GameStore` owns the one live `GameState` plus the RNG, applies
//! dispatched actions, and writes a snapshot after every applied change.
//! Replacement is whole-state: a transition either produces a complete new
//! state or leaves the old one untouched, so readers never see a partial
//! update.
//!
//! Blocked transitions are reported through `tracing` and returned to the
//! caller; they are ordinary no-ops, never fatal.

use tracing::{debug, warn};

use crate::core::action::Action;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::core::state::{Blocked, GameState};
use crate::persist::{self, Snapshot, SnapshotStore};

/// Owns the live game state and serializes all writes to it.
#[derive(Debug)]
pub struct GameStore<S: SnapshotStore> {
    state: GameState,
    rng: GameRng,
    backend: S,
}

impl<S: SnapshotStore> GameStore<S> {
    /// Create a store with a fresh initial state.
    pub fn new(backend: S, seed: u64) -> Self {
        Self {
            state: GameState::new(),
            rng: GameRng::new(seed),
            backend,
        }
    }

    /// Restore from the backend's snapshot, or start fresh.
    ///
    /// An absent or undecodable snapshot falls back to the initial state;
    /// a decode failure is logged, not surfaced.
    pub fn load_or_new(backend: S, seed: u64) -> Self {
        match persist::load(&backend) {
            Ok(Some(snapshot)) => {
                debug!("restored game snapshot");
                Self {
                    state: snapshot.state,
                    rng: GameRng::from_state(&snapshot.rng),
                    backend,
                }
            }
            Ok(None) => Self::new(backend, seed),
            Err(err) => {
                warn!(%err, "discarding invalid game snapshot");
                Self::new(backend, seed)
            }
        }
    }

    /// The current state, for the rendering layer.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The snapshot backend.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Apply an action.
    ///
    /// On success the whole state is replaced and a snapshot written; on
    /// `Blocked` the state is untouched and the reason is logged and
    /// returned.
    pub fn apply(&mut self, action: Action) -> Result<(), Blocked> {
        let next = match &action {
            Action::Shuffle => self.state.shuffled(&mut self.rng),
            Action::DealHands => match self.state.deal_hands() {
                Ok(next) => next,
                Err(blocked) => return self.reject(&action, blocked),
            },
            Action::DrawTop => match self.state.draw_top() {
                Ok(next) => next,
                Err(blocked) => return self.reject(&action, blocked),
            },
            Action::AdvanceTurn { to } => self.state.advance_turn(*to),
            Action::AddPlayer { name } => self.state.with_player(Player::new(name.clone())),
            Action::Reset => GameState::new(),
        };

        debug!(%action, "applied");
        self.state = next;
        self.snapshot();
        Ok(())
    }

    fn reject(&self, action: &Action, blocked: Blocked) -> Result<(), Blocked> {
        debug!(%action, reason = %blocked, "blocked");
        Err(blocked)
    }

    fn snapshot(&mut self) {
        let snapshot = Snapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
        };
        if let Err(err) = persist::save(&mut self.backend, &snapshot) {
            // Persistence is best-effort; the live state is already updated.
            warn!(%err, "failed to write game snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    fn store_with_players(names: &[&str]) -> GameStore<MemoryStore> {
        let mut store = GameStore::new(MemoryStore::new(), 42);
        for name in names {
            store
                .apply(Action::AddPlayer { name: (*name).to_string() })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_full_session() {
        let mut store = store_with_players(&["Alice", "Bob", "Carol"]);

        store.apply(Action::Shuffle).unwrap();
        store.apply(Action::DealHands).unwrap();

        let state = store.state();
        assert_eq!(state.draw_pile.len(), 37);
        assert!(state.dealt);
        for player in &state.players {
            assert_eq!(player.hand_size(), 5);
        }

        store.apply(Action::AdvanceTurn { to: None }).unwrap();
        assert_eq!(store.state().turn, 1);
    }

    #[test]
    fn test_blocked_action_leaves_state_untouched() {
        let mut store = store_with_players(&["Alice"]);
        store.apply(Action::DealHands).unwrap();
        let before = store.state().clone();

        let result = store.apply(Action::DealHands);

        assert_eq!(result, Err(Blocked::AlreadyDealt));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut store = store_with_players(&["Alice", "Bob"]);
        store.apply(Action::Shuffle).unwrap();
        store.apply(Action::DealHands).unwrap();

        store.apply(Action::Reset).unwrap();

        assert_eq!(store.state(), &GameState::new());
    }

    #[test]
    fn test_snapshot_written_after_each_applied_action() {
        let mut store = GameStore::new(MemoryStore::new(), 42);
        assert!(store.backend().is_empty());

        store
            .apply(Action::AddPlayer { name: "Alice".to_string() })
            .unwrap();

        assert_eq!(store.backend().len(), 1);
    }

    #[test]
    fn test_load_or_new_restores_session() {
        let mut store = store_with_players(&["Alice", "Bob"]);
        store.apply(Action::Shuffle).unwrap();
        store.apply(Action::DealHands).unwrap();
        let expected = store.state().clone();

        let backend = store.backend().clone();
        let restored = GameStore::load_or_new(backend, 7);

        assert_eq!(restored.state(), &expected);
    }

    #[test]
    fn test_load_or_new_falls_back_on_corrupt_snapshot() {
        let mut backend = MemoryStore::new();
        backend.put(crate::persist::SNAPSHOT_KEY, "{broken".to_string());

        let store = GameStore::load_or_new(backend, 42);

        assert_eq!(store.state(), &GameState::new());
    }

    #[test]
    fn test_restored_store_continues_shuffle_stream() {
        let mut original = store_with_players(&["Alice"]);
        original.apply(Action::Shuffle).unwrap();

        let mut restored = GameStore::load_or_new(original.backend().clone(), 999);

        // Both stores shuffle from the same persisted RNG position
        original.apply(Action::Shuffle).unwrap();
        restored.apply(Action::Shuffle).unwrap();

        assert_eq!(original.state(), restored.state());
    }

    #[test]
    fn test_draw_from_empty_pile_blocked() {
        let mut store = GameStore::new(MemoryStore::new(), 42);
        for _ in 0..52 {
            store.apply(Action::DrawTop).unwrap();
        }

        assert!(store.state().draw_pile.is_empty());
        assert_eq!(store.apply(Action::DrawTop), Err(Blocked::EmptyDrawPile));
    }
}
