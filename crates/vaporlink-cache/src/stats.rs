//! The stats cache: per-game statistics and achievements.

use std::collections::HashMap;

use vaporlink_protocol::{Achievement, Stat};

/// Stats and achievements for one game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStats {
    pub stats: Vec<Stat>,
    pub achievements: Vec<Achievement>,
}

/// Per-game usage statistics, keyed by the string-normalized game id.
///
/// The string key is the form the cache's consumers address games by;
/// the session normalizes `GameId` with `to_string()` on the way in.
#[derive(Debug, Default)]
pub struct StatsCache {
    entries: HashMap<String, GameStats>,
}

impl StatsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stats and achievements held for a game.
    pub fn update_stats(
        &mut self,
        game_id: String,
        stats: Vec<Stat>,
        achievements: Vec<Achievement>,
    ) {
        self.entries
            .insert(game_id, GameStats { stats, achievements });
    }

    /// Returns the record held for a game.
    pub fn get(&self, game_id: &str) -> Option<&GameStats> {
        self.entries.get(game_id)
    }

    /// Number of games with stats.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no stats are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
