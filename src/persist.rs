//! Snapshot persistence: key-value storage of the full game state.
//!
//! The whole `GameState` (plus the RNG position, so a restored session
//! continues the same shuffle stream) is written as one JSON document under
//! the fixed key `"game"` after every applied action. On startup the store
//! tries to restore it and falls back to the initial state when the
//! snapshot is absent or invalid.
//!
//! The backing store is a trait so the UI layer can plug in whatever
//! key-value storage the platform offers; `MemoryStore` covers tests and
//! ephemeral sessions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::rng::GameRngState;
use crate::core::state::GameState;

/// Fixed key the game snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "game";

/// Snapshot encode/decode failure.
///
/// Decode failures are non-fatal by design: the loader falls back to a
/// fresh game.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A key-value store the snapshot layer writes through.
pub trait SnapshotStore {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: String);

    /// Remove the value under `key`, if any.
    fn remove(&mut self, key: &str);
}

/// In-memory `SnapshotStore` for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Everything needed to resume a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The complete table state.
    pub state: GameState,

    /// RNG position, so post-restore shuffles continue the same stream.
    pub rng: GameRngState,
}

impl Snapshot {
    /// Encode to the JSON document stored under [`SNAPSHOT_KEY`].
    pub fn encode(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(PersistError::Encode)
    }

    /// Decode a stored JSON document.
    pub fn decode(raw: &str) -> Result<Self, PersistError> {
        serde_json::from_str(raw).map_err(PersistError::Decode)
    }
}

/// Write a snapshot under [`SNAPSHOT_KEY`].
pub fn save(store: &mut impl SnapshotStore, snapshot: &Snapshot) -> Result<(), PersistError> {
    let raw = snapshot.encode()?;
    store.put(SNAPSHOT_KEY, raw);
    Ok(())
}

/// Read the snapshot under [`SNAPSHOT_KEY`].
///
/// `Ok(None)` when no snapshot exists; `Err` when one exists but cannot be
/// decoded (the caller decides whether to fall back or surface it).
pub fn load(store: &impl SnapshotStore) -> Result<Option<Snapshot>, PersistError> {
    match store.get(SNAPSHOT_KEY) {
        Some(raw) => Snapshot::decode(&raw).map(Some),
        None => Ok(None),
    }
}
