//! The session: authentication handshake and event reconciliation.
//!
//! One `Session` owns one authenticated connection's worth of state. Its
//! public operations are called by the application; its [`EventHandler`]
//! implementation is called by the transport's delivery loop, one event
//! at a time. Both sides meet in the caches, each guarded by its own
//! mutex — the explicit serialization that replaces the cooperative
//! single-threaded scheduling this design originally assumed. No lock is
//! held across a transport await.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio::sync::{oneshot, Mutex};

use vaporlink_cache::{
    FriendsCache, GamesCache, StatsCache, TimesCache, TranslationsCache,
};
use vaporlink_protocol::{
    Achievement, AppId, ClientError, Collections, FriendRelationship,
    GameId, Job, License, LocalizationBundle, PackageId, PersonaState,
    ResultCode, Stat, UserId, UserInfo,
};
use vaporlink_transport::{EventHandler, MessageTransport};

use crate::SessionError;

/// Status-flag bundle requested with every user-info query. A fixed
/// transport-level constant: persona name + presence + game info.
const STATUS_FLAGS: u32 = 1106;

/// Callback invoked when the server terminates an authenticated session.
///
/// Installed by a successful [`Session::authenticate`]; invoked with the
/// classified log-off reason. Fire-and-forget — reconnecting is the
/// application's decision, not this layer's.
pub type AuthLostHandler =
    Box<dyn Fn(ClientError) -> BoxFuture<'static, ()> + Send + Sync>;

/// Login handshake state machine.
///
/// ```text
///   Idle ──(authenticate)──→ Awaiting ──(log-on result / close)──→ Idle
/// ```
///
/// At most one attempt is in flight; `authenticate` fails fast with
/// [`SessionError::LoginInProgress`] while `Awaiting`. Dropping the
/// sender (on close) releases the suspended caller with a network error.
enum LoginState {
    Idle,
    Awaiting(oneshot::Sender<ResultCode>),
}

/// The session layer over one message transport.
///
/// Shared as `Arc<Session<T>>`: public operations and event handlers all
/// take `&self` and may run concurrently.
pub struct Session<T: MessageTransport> {
    transport: Arc<T>,
    friends: Arc<Mutex<FriendsCache>>,
    games: Arc<Mutex<GamesCache>>,
    translations: Arc<Mutex<TranslationsCache>>,
    stats: Arc<Mutex<StatsCache>>,
    times: Arc<Mutex<TimesCache>>,
    /// Apps with a localization request issued and no data yet —
    /// the lazy-fill de-duplication guard.
    pending_localizations: Mutex<HashSet<AppId>>,
    login: Mutex<LoginState>,
    auth_lost: Mutex<Option<AuthLostHandler>>,
}

impl<T: MessageTransport> Session<T> {
    /// Creates a session over `transport`, reconciling into the given
    /// caches. The caller keeps its own handles to read reconciled state.
    pub fn new(
        transport: Arc<T>,
        friends: Arc<Mutex<FriendsCache>>,
        games: Arc<Mutex<GamesCache>>,
        translations: Arc<Mutex<TranslationsCache>>,
        stats: Arc<Mutex<StatsCache>>,
        times: Arc<Mutex<TimesCache>>,
    ) -> Self {
        Self {
            transport,
            friends,
            games,
            translations,
            stats,
            times,
            pending_localizations: Mutex::new(HashSet::new()),
            login: Mutex::new(LoginState::Idle),
            auth_lost: Mutex::new(None),
        }
    }

    // -- Lifecycle ---------------------------------------------------------

    /// Drives the transport's receive loop until closed or faulted.
    pub async fn run(&self) -> Result<(), SessionError> {
        self.transport.run().await.map_err(ClientError::from)?;
        Ok(())
    }

    /// Initiates graceful shutdown.
    ///
    /// A caller suspended in [`authenticate`](Self::authenticate) is
    /// released with a network error (its result sender is dropped
    /// here); the transport releases the collections waiter.
    pub async fn close(&self) -> Result<(), SessionError> {
        {
            let mut login = self.login.lock().await;
            *login = LoginState::Idle;
        }
        self.transport.close().await.map_err(ClientError::from)?;
        Ok(())
    }

    /// Suspends until transport shutdown has completed.
    pub async fn wait_closed(&self) {
        self.transport.wait_closed().await;
    }

    // -- Authentication ----------------------------------------------------

    /// Runs the authentication handshake and suspends until the backend
    /// answers the login request.
    ///
    /// On success, `on_auth_lost` is installed and will be invoked with
    /// the classified reason if the server later terminates the session.
    /// On failure the session stays unauthenticated, the handler is not
    /// installed, and the classified error is returned.
    ///
    /// # Errors
    /// - [`SessionError::LoginInProgress`] if another attempt is already
    ///   awaiting its result.
    /// - [`ClientError::Network`] if the session closes mid-wait.
    /// - The classified category for any non-`Ok` login result.
    pub async fn authenticate(
        &self,
        user_id: UserId,
        miniprofile_id: u64,
        account_name: &str,
        token: &str,
        on_auth_lost: AuthLostHandler,
    ) -> Result<(), SessionError> {
        let rx = {
            let mut login = self.login.lock().await;
            if matches!(*login, LoginState::Awaiting(_)) {
                return Err(SessionError::LoginInProgress);
            }
            let (tx, rx) = oneshot::channel();
            *login = LoginState::Awaiting(tx);
            rx
        };

        if let Err(err) = self
            .transport
            .log_on(user_id, miniprofile_id, account_name, token)
            .await
        {
            let mut login = self.login.lock().await;
            *login = LoginState::Idle;
            return Err(ClientError::from(err).into());
        }

        let result = match rx.await {
            Ok(result) => result,
            // Sender dropped: the session closed while we were parked.
            Err(_) => {
                return Err(ClientError::Network(
                    ResultCode::RemoteDisconnect,
                )
                .into());
            }
        };

        if result == ResultCode::Ok {
            let mut auth_lost = self.auth_lost.lock().await;
            *auth_lost = Some(on_auth_lost);
            tracing::info!(%user_id, "authenticated");
            Ok(())
        } else {
            tracing::warn!(%user_id, %result, "authentication failed");
            Err(ClientError::from_result(result).into())
        }
    }

    // -- Deferred imports --------------------------------------------------

    /// Queues a stats import for each given game. The transport's
    /// execution loop issues the actual requests at its own pace.
    pub fn import_game_stats(&self, game_ids: &[GameId]) {
        let queue = self.transport.job_queue();
        for &game_id in game_ids {
            queue.push(Job::ImportGameStats { game_id });
        }
    }

    /// Queues a play-times import for the whole library.
    pub fn import_game_times(&self) {
        self.transport.job_queue().push(Job::ImportGameTimes);
    }

    /// Queues a collections import and suspends until the result arrives.
    ///
    /// The rendezvous slot is consumed and cleared on return, so a
    /// subsequent call suspends for a fresh result. Single-caller-only:
    /// two tasks racing here would steal each other's payloads.
    ///
    /// # Errors
    /// [`ClientError::Network`] if the transport closes mid-wait.
    pub async fn retrieve_collections(
        &self,
    ) -> Result<Collections, SessionError> {
        self.transport.job_queue().push(Job::ImportCollections);
        let collections = self
            .transport
            .collections()
            .wait()
            .await
            .map_err(ClientError::from)?;
        Ok(collections)
    }
}

impl<T: MessageTransport> EventHandler for Session<T> {
    type Error = SessionError;

    async fn on_log_on_result(
        &self,
        result: ResultCode,
    ) -> Result<(), SessionError> {
        let state = {
            let mut login = self.login.lock().await;
            std::mem::replace(&mut *login, LoginState::Idle)
        };
        match state {
            LoginState::Awaiting(tx) => {
                // The waiter may have been dropped meanwhile; fine.
                let _ = tx.send(result);
                Ok(())
            }
            LoginState::Idle => Err(SessionError::ProtocolViolation(
                "login result with no login in flight".into(),
            )),
        }
    }

    async fn on_log_off(&self, result: ResultCode) {
        tracing::warn!(%result, "logged off by server");
        // Build the callback future under the lock, await it outside, so
        // the handler can call back into the session.
        let fut = {
            let auth_lost = self.auth_lost.lock().await;
            auth_lost
                .as_ref()
                .map(|handler| handler(ClientError::from_result(result)))
        };
        if let Some(fut) = fut {
            fut.await;
        }
    }

    async fn on_relationships(
        &self,
        incremental: bool,
        changes: Vec<(UserId, FriendRelationship)>,
    ) -> Result<(), SessionError> {
        tracing::info!(
            incremental,
            count = changes.len(),
            "relationship event"
        );

        let mut initial_friends = Vec::new();
        let mut new_friends = Vec::new();
        {
            let mut friends = self.friends.lock().await;
            for (user_id, relationship) in changes {
                match relationship {
                    FriendRelationship::Friend => {
                        if incremental {
                            friends.add(user_id);
                            new_friends.push(user_id);
                        } else {
                            initial_friends.push(user_id);
                        }
                    }
                    FriendRelationship::None => {
                        if !incremental {
                            // A removal only makes sense as a delta. In a
                            // full snapshot the entry is simply absent, so
                            // this is backend noise: skip it, keep the
                            // rest of the snapshot.
                            tracing::warn!(
                                %user_id,
                                "None relationship in full snapshot, skipping"
                            );
                            continue;
                        }
                        friends.remove(user_id);
                    }
                    // Requests and ignores don't affect membership.
                    _ => {}
                }
            }
            if !incremental {
                friends.reset(&initial_friends);
            }
        }

        if !incremental {
            // Being visible in some persona state is a precondition for
            // querying others' statuses; Invisible satisfies it without
            // advertising presence.
            self.transport
                .set_persona_state(PersonaState::Invisible)
                .await
                .map_err(ClientError::from)?;
            self.transport
                .get_friends_statuses()
                .await
                .map_err(ClientError::from)?;
            self.transport
                .get_user_infos(&initial_friends, STATUS_FLAGS)
                .await
                .map_err(ClientError::from)?;
        }

        if !new_friends.is_empty() {
            // Only the delta — never re-request the whole cache on an
            // incremental update.
            self.transport
                .get_friends_statuses()
                .await
                .map_err(ClientError::from)?;
            self.transport
                .get_user_infos(&new_friends, STATUS_FLAGS)
                .await
                .map_err(ClientError::from)?;
        }

        Ok(())
    }

    async fn on_user_info(&self, user_id: UserId, info: UserInfo) {
        tracing::debug!(%user_id, "user info received");
        self.friends.lock().await.update(user_id, info);
    }

    async fn on_app_info(
        &self,
        app_id: AppId,
        title: Option<String>,
        is_game: Option<bool>,
    ) {
        self.games.lock().await.update_app(app_id, title, is_game);
    }

    async fn on_license_import(
        &self,
        licenses: Vec<License>,
    ) -> Result<(), SessionError> {
        let package_ids: Vec<PackageId> =
            licenses.iter().map(|license| license.package_id).collect();
        tracing::info!(count = package_ids.len(), "license import");

        self.games.lock().await.start_packages_import(&package_ids);

        // One request for the whole batch, not one per license.
        self.transport
            .get_packages_info(&package_ids)
            .await
            .map_err(ClientError::from)?;
        Ok(())
    }

    async fn on_package_info(&self, package_id: PackageId) {
        self.games.lock().await.update_package(package_id);
    }

    async fn on_translations(
        &self,
        app_id: AppId,
        bundles: Vec<LocalizationBundle>,
    ) -> Result<(), SessionError> {
        if let Some(bundle) = bundles.into_iter().next() {
            // First bundle wins: the transport delivers the preferred
            // locale first.
            self.pending_localizations.lock().await.remove(&app_id);
            self.translations.lock().await.insert(app_id, bundle);
            return Ok(());
        }

        if self.translations.lock().await.contains_key(&app_id) {
            self.pending_localizations.lock().await.remove(&app_id);
            return Ok(());
        }

        // Lazy fill: a miss triggers one follow-up request, de-duplicated
        // while one is already outstanding for this app.
        {
            let mut pending = self.pending_localizations.lock().await;
            if !pending.insert(app_id) {
                return Ok(());
            }
        }
        self.transport
            .get_presence_localization(app_id)
            .await
            .map_err(ClientError::from)?;
        Ok(())
    }

    async fn on_stats(
        &self,
        game_id: GameId,
        stats: Vec<Stat>,
        achievements: Vec<Achievement>,
    ) {
        self.stats.lock().await.update_stats(
            game_id.to_string(),
            stats,
            achievements,
        );
    }

    async fn on_times(
        &self,
        game_id: GameId,
        time_played: u32,
        last_played: u32,
    ) {
        self.times.lock().await.update_time(
            game_id.to_string(),
            time_played,
            last_played,
        );
    }

    async fn on_times_import_finished(&self, finished: bool) {
        self.times.lock().await.set_import_finished(finished);
    }
}
