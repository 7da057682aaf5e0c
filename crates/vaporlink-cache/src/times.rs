//! The times cache: play time per game plus the import-finished flag.

use std::collections::HashMap;

/// Play-time record for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameTime {
    /// Total minutes played.
    pub time_played: u32,
    /// Unix timestamp of the last session.
    pub last_played: u32,
}

/// Per-game play times, keyed by the string-normalized game id, plus a
/// flag signalling that the backend has delivered the whole library.
///
/// Completion aggregation is owned here: the session only forwards the
/// boolean it receives.
#[derive(Debug, Default)]
pub struct TimesCache {
    entries: HashMap<String, GameTime>,
    import_finished: bool,
}

impl TimesCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the play-time record for a game.
    pub fn update_time(
        &mut self,
        game_id: String,
        time_played: u32,
        last_played: u32,
    ) {
        self.entries
            .insert(game_id, GameTime { time_played, last_played });
    }

    /// Records the import-finished signal from the backend.
    pub fn set_import_finished(&mut self, finished: bool) {
        self.import_finished = finished;
    }

    /// Returns `true` once the backend has signalled completion.
    pub fn import_finished(&self) -> bool {
        self.import_finished
    }

    /// Returns the record held for a game.
    pub fn get(&self, game_id: &str) -> Option<&GameTime> {
        self.entries.get(game_id)
    }

    /// Number of games with times.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no times are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
