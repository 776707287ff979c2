//! High score leaderboard system
//!
//! Persisted as a JSON array of the top 5 scores, highest first.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, load_json, save_json};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// High score leaderboard. Always sorted descending, never longer than
/// `MAX_HIGH_SCORES`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBoard {
    scores: Vec<u64>,
}

impl ScoreBoard {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "neon-barrage-highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Build from arbitrary scores, restoring the ordering/size invariant
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_HIGH_SCORES);
        Self { scores }
    }

    /// Scores, highest first
    pub fn scores(&self) -> &[u64] {
        &self.scores
    }

    /// Add a score in memory; it is dropped if it falls outside the top 5
    pub fn insert(&mut self, score: u64) -> &[u64] {
        self.scores.push(score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(MAX_HIGH_SCORES);
        &self.scores
    }

    /// Add a score, persist the board, and return the resulting list
    pub fn record<S: KeyValueStore + ?Sized>(&mut self, score: u64, store: &mut S) -> &[u64] {
        self.insert(score);
        self.save(store);
        &self.scores
    }

    /// Load from storage. Missing or malformed data yields an empty board.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match load_json::<Vec<u64>, _>(store, Self::STORAGE_KEY) {
            Ok(Some(scores)) => {
                log::info!("Loaded {} high scores", scores.len());
                Self::from_scores(scores)
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Ignoring stored high scores: {}", e);
                Self::new()
            }
        }
    }

    /// Save to storage. Failures are logged, never fatal.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        match save_json(store, Self::STORAGE_KEY, &self.scores) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.scores.len()),
            Err(e) => log::warn!("Failed to save high scores: {}", e),
        }
    }
}
