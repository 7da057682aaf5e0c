//! The games cache: app metadata plus license-batch import tracking.

use std::collections::{HashMap, HashSet};

use vaporlink_protocol::{AppId, PackageId};

/// Metadata for one app, filled in as app-info events stream through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppEntry {
    /// Display title.
    pub title: Option<String>,
    /// Whether the app is a playable game (as opposed to a tool, DLC,
    /// or soundtrack).
    pub is_game: Option<bool>,
}

/// App metadata keyed by app id, plus completion tracking for the
/// license→package→app import chain.
///
/// The session announces a batch with
/// [`start_packages_import`](Self::start_packages_import) before issuing
/// the package-info request; each [`update_package`](Self::update_package)
/// crosses one package off. Completion detection belongs here, not in
/// the session — the owner polls [`import_in_progress`](Self::import_in_progress).
#[derive(Debug, Default)]
pub struct GamesCache {
    apps: HashMap<AppId, AppEntry>,
    pending_packages: HashSet<PackageId>,
    resolved_packages: HashSet<PackageId>,
}

impl GamesCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges app metadata as it arrives. Absent fields keep their
    /// current value.
    pub fn update_app(
        &mut self,
        app_id: AppId,
        title: Option<String>,
        is_game: Option<bool>,
    ) {
        let entry = self.apps.entry(app_id).or_default();
        if title.is_some() {
            entry.title = title;
        }
        if is_game.is_some() {
            entry.is_game = is_game;
        }
    }

    /// Records that an import for exactly this package batch is starting.
    ///
    /// Packages from a previous unfinished batch stay pending — a second
    /// license event extends the outstanding set rather than forgetting
    /// the first.
    pub fn start_packages_import(&mut self, package_ids: &[PackageId]) {
        tracing::info!(
            count = package_ids.len(),
            "starting packages import"
        );
        for &package_id in package_ids {
            if !self.resolved_packages.contains(&package_id) {
                self.pending_packages.insert(package_id);
            }
        }
    }

    /// Marks one package of the in-flight batch as resolved.
    pub fn update_package(&mut self, package_id: PackageId) {
        self.pending_packages.remove(&package_id);
        self.resolved_packages.insert(package_id);
    }

    /// Returns `true` while announced packages are still unresolved.
    pub fn import_in_progress(&self) -> bool {
        !self.pending_packages.is_empty()
    }

    /// Returns the metadata held for an app.
    pub fn app(&self, app_id: &AppId) -> Option<&AppEntry> {
        self.apps.get(app_id)
    }

    /// Ids of every app known to be a game, sorted.
    pub fn game_ids(&self) -> Vec<AppId> {
        let mut ids: Vec<AppId> = self
            .apps
            .iter()
            .filter(|(_, entry)| entry.is_game == Some(true))
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of known apps.
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Returns `true` if no apps are known.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
