//! Payload types for decoded protocol events.
//!
//! These are the structures the transport hands to the session layer
//! after framing, decryption, and message decoding — and the descriptors
//! the session hands back (deferred jobs). Wire encoding itself lives in
//! the transport; everything here is already in typed form.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A user's account identifier (the 64-bit form used on the wire).
///
/// Newtype wrappers keep the four id spaces from mixing: a `UserId` can't
/// be passed where an [`AppId`] is expected even though both are integers
/// underneath. `#[serde(transparent)]` serializes each as the bare number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user-{}", self.0)
    }
}

/// An individual installable title in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AppId(pub u32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "app-{}", self.0)
    }
}

/// A content bundle granted by a license; resolves to a set of apps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PackageId(pub u32);

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "package-{}", self.0)
    }
}

/// The identifier stats and play-time records are keyed by.
///
/// Distinct from [`AppId`]: usage records can reference mods and
/// shortcuts that have no catalog entry, so the id space is wider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Social graph
// ---------------------------------------------------------------------------

/// Relationship between the signed-in user and another account.
///
/// Only `Friend` and `None` drive reconciliation; the request/ignore
/// states pass through relationship events but this layer leaves them
/// alone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum FriendRelationship {
    /// No relationship. In an incremental event this means "removed".
    None,
    Blocked,
    RequestRecipient,
    Friend,
    RequestInitiator,
    Ignored,
    IgnoredFriend,
}

/// The presence status a user advertises to their friends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum PersonaState {
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
    /// Connected but hidden. The session sets itself Invisible after a
    /// full friend resync — being "online" in some state is a protocol
    /// precondition for querying other users' statuses.
    Invisible,
}

/// A user-info record as delivered by the backend.
///
/// Fields arrive piecemeal depending on the status flags of the request
/// that triggered them, so everything is optional and records are merged
/// field-by-field into the friends cache rather than overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Display name.
    pub persona_name: Option<String>,
    /// Current presence status.
    pub persona_state: Option<PersonaState>,
    /// The game the user is currently in, if any.
    pub game_id: Option<GameId>,
    /// Display name of that game.
    pub game_name: Option<String>,
}

impl UserInfo {
    /// Merges `incoming` into `self`, keeping existing values for fields
    /// the incoming record doesn't carry.
    pub fn merge(&mut self, incoming: UserInfo) {
        if incoming.persona_name.is_some() {
            self.persona_name = incoming.persona_name;
        }
        if incoming.persona_state.is_some() {
            self.persona_state = incoming.persona_state;
        }
        if incoming.game_id.is_some() {
            self.game_id = incoming.game_id;
        }
        if incoming.game_name.is_some() {
            self.game_name = incoming.game_name;
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog / ownership
// ---------------------------------------------------------------------------

/// An ownership grant. Licenses arrive in a batch at logon; the session
/// extracts the package ids and resolves the whole batch with a single
/// package-info request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// The package this license grants access to.
    pub package_id: PackageId,
}

/// One localization bundle for an app's rich-presence strings.
///
/// The transport delivers bundles with the caller's preferred locale
/// first, so the session stores the first entry and drops the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationBundle {
    /// Language code, e.g. `"english"`.
    pub language: String,
    /// Token → localized string.
    pub tokens: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Usage data
// ---------------------------------------------------------------------------

/// A single named statistic for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: f64,
}

/// An achievement definition with its unlock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    /// Unix timestamp of the unlock; `None` while still locked.
    pub unlock_time: Option<u64>,
}

// ---------------------------------------------------------------------------
// Deferred jobs
// ---------------------------------------------------------------------------

/// A deferred request descriptor.
///
/// Some imports are not sent immediately: the session appends a `Job`
/// to the transport's queue and the transport's own execution loop
/// issues the request when its pacing allows. The serialized form is
/// internally tagged on `job_name`, matching the queue entries the
/// transport logs:
/// `{ "job_name": "import_game_stats", "game_id": 570 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "job_name", rename_all = "snake_case")]
pub enum Job {
    /// Fetch stats and achievements for one game.
    ImportGameStats { game_id: GameId },
    /// Fetch play times for the whole library.
    ImportGameTimes,
    /// Fetch the user's collections (shelf groupings of apps).
    ImportCollections,
}

/// A collections payload: collection name → member app ids.
pub type Collections = HashMap<String, Vec<AppId>>;

// =========================================================================
// Tests
// =========================================================================
