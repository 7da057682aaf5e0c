//! The friends cache: reconciled social-graph membership plus the
//! user-info records attached to each friend.

use std::collections::HashMap;

use vaporlink_protocol::{UserId, UserInfo};

/// Set of current friends with their latest known info.
///
/// Membership is driven by relationship events (add/remove for
/// incremental deltas, [`reset`](Self::reset) for full snapshots); info
/// records merge in separately as user-info events arrive.
#[derive(Debug, Default)]
pub struct FriendsCache {
    entries: HashMap<UserId, UserInfo>,
}

impl FriendsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a friend with no info yet. Adding an existing friend keeps
    /// their current info.
    pub fn add(&mut self, user_id: UserId) {
        self.entries.entry(user_id).or_default();
    }

    /// Removes a friend and their info.
    pub fn remove(&mut self, user_id: UserId) {
        self.entries.remove(&user_id);
    }

    /// Resets membership to exactly `user_ids`.
    ///
    /// Info already held for retained friends survives the reset; ids
    /// new to the cache start with empty info. This is the full-snapshot
    /// path: afterwards, membership equals the snapshot's friend set.
    pub fn reset(&mut self, user_ids: &[UserId]) {
        let mut entries = HashMap::with_capacity(user_ids.len());
        for &user_id in user_ids {
            let info =
                self.entries.remove(&user_id).unwrap_or_default();
            entries.insert(user_id, info);
        }
        self.entries = entries;
    }

    /// Merges an incoming info record into the entry for `user_id`.
    ///
    /// Info can arrive for a user the cache doesn't hold yet (the
    /// response to a user-info request races the relationship event that
    /// prompted it); the entry is created in that case.
    pub fn update(&mut self, user_id: UserId, info: UserInfo) {
        self.entries.entry(user_id).or_default().merge(info);
    }

    /// Returns the info held for a friend.
    pub fn get(&self, user_id: &UserId) -> Option<&UserInfo> {
        self.entries.get(user_id)
    }

    /// Returns `true` if `user_id` is currently a friend.
    pub fn contains(&self, user_id: &UserId) -> bool {
        self.entries.contains_key(user_id)
    }

    /// Current membership, sorted for deterministic iteration.
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of friends.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no friends.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
