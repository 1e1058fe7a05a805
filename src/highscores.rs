//! Per-game best score
//!
//! A single persisted integer per game, overwritten only by a strictly
//! greater final score. Sessions report their result once, on termination.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sim::state::GameId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScores {
    scores: BTreeMap<String, u32>,
}

impl BestScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored best for a game; zero when nothing is recorded yet
    pub fn best(&self, game: GameId) -> u32 {
        self.scores.get(game.key()).copied().unwrap_or(0)
    }

    /// Report a completed session. Overwrites the stored best only when the
    /// final score is strictly greater; returns whether it did.
    pub fn record(&mut self, game: GameId, score: u32) -> bool {
        if score > self.best(game) {
            self.scores.insert(game.key().to_string(), score);
            true
        } else {
            false
        }
    }
}
