//! Reconciled-state caches for Vaporlink.
//!
//! Four independent keyed stores — [`FriendsCache`], [`GamesCache`],
//! [`StatsCache`], [`TimesCache`] — plus the [`TranslationsCache`]
//! key→value alias. The session layer is the only writer; consumers
//! above it read the reconciled state.
//!
//! # Concurrency note
//!
//! None of these types lock internally. Each is owned behind one
//! `tokio::sync::Mutex` in the session — a single lock per cache is the
//! explicit replacement for the cooperative single-threaded scheduling
//! the design originally relied on. Keeping the types themselves plain
//! avoids hidden locking and keeps them trivially testable.

mod friends;
mod games;
mod stats;
mod times;

pub use friends::FriendsCache;
pub use games::{AppEntry, GamesCache};
pub use stats::{GameStats, StatsCache};
pub use times::{GameTime, TimesCache};

use std::collections::HashMap;

use vaporlink_protocol::{AppId, LocalizationBundle};

/// Localized rich-presence strings per app. A plain map is all the
/// session needs; the lazy-fill protocol around it lives in the session.
pub type TranslationsCache = HashMap<AppId, LocalizationBundle>;
