//! Transport interface boundary for Vaporlink.
//!
//! The message transport — socket framing, encryption, wire codec, and
//! the delivery loop — lives outside this workspace. This crate pins
//! down the contract between it and the session layer:
//!
//! - [`MessageTransport`] — the outbound surface the session calls:
//!   request senders plus run/close lifecycle, a [`JobQueue`] for
//!   deferred imports, and a [`CollectionsSlot`] rendezvous.
//! - [`EventHandler`] — the inbound surface the session implements and
//!   the transport's delivery loop invokes, one decoded event at a time.
//!
//! `EventHandler` replaces ad-hoc callback wiring: instead of assigning
//! closures into named slots on the transport object, the transport is
//! constructed with one handler and dispatches every event through this
//! trait. Each event kind therefore has exactly one installer by design.

#![allow(async_fn_in_trait)]

mod collections;
mod error;
mod jobs;

pub use collections::CollectionsSlot;
pub use error::TransportError;
pub use jobs::JobQueue;

use vaporlink_protocol::{
    Achievement, AppId, FriendRelationship, GameId, License,
    LocalizationBundle, PackageId, PersonaState, ResultCode, Stat, UserId,
    UserInfo,
};

/// Outbound surface of the message transport.
///
/// All request methods hand an already-encoded message to the transport;
/// they complete when the message is accepted for delivery, not when the
/// backend responds. Responses come back through [`EventHandler`].
///
/// # Trait bounds
/// `Send + Sync + 'static` — the session is shared across tasks and
/// holds the transport for its whole lifetime.
pub trait MessageTransport: Send + Sync + 'static {
    /// Sends the login request for the authentication handshake.
    async fn log_on(
        &self,
        user_id: UserId,
        miniprofile_id: u64,
        account_name: &str,
        token: &str,
    ) -> Result<(), TransportError>;

    /// Advertises our own presence status.
    async fn set_persona_state(
        &self,
        state: PersonaState,
    ) -> Result<(), TransportError>;

    /// Requests current statuses for the whole friend list.
    async fn get_friends_statuses(&self) -> Result<(), TransportError>;

    /// Requests user-info records for the given users. `status_flags`
    /// selects which fields the backend includes.
    async fn get_user_infos(
        &self,
        user_ids: &[UserId],
        status_flags: u32,
    ) -> Result<(), TransportError>;

    /// Requests package contents for a batch of packages.
    async fn get_packages_info(
        &self,
        package_ids: &[PackageId],
    ) -> Result<(), TransportError>;

    /// Requests the rich-presence localization bundle for one app.
    async fn get_presence_localization(
        &self,
        app_id: AppId,
    ) -> Result<(), TransportError>;

    /// Drives the receive/dispatch loop until the transport is closed or
    /// faults.
    async fn run(&self) -> Result<(), TransportError>;

    /// Initiates graceful shutdown. Must release any task parked on the
    /// collections slot.
    async fn close(&self) -> Result<(), TransportError>;

    /// Suspends until shutdown has completed.
    async fn wait_closed(&self);

    /// The deferred-job queue drained by the transport's execution loop.
    fn job_queue(&self) -> &JobQueue;

    /// The collections rendezvous slot.
    fn collections(&self) -> &CollectionsSlot;
}

/// Inbound surface: decoded protocol events, delivered strictly one at a
/// time (an invocation finishes before the next begins).
///
/// Handlers that can fail — because they issue follow-up requests or
/// because the event violates a protocol invariant — return the
/// implementor's error; the transport loop logs it and carries on with
/// the next event. The rest are infallible cache forwards.
pub trait EventHandler: Send + Sync + 'static {
    /// Error type for the fallible handlers.
    type Error: std::error::Error + Send + Sync;

    /// Result of the login attempt sent via
    /// [`MessageTransport::log_on`]. Invoked exactly once per attempt.
    async fn on_log_on_result(
        &self,
        result: ResultCode,
    ) -> Result<(), Self::Error>;

    /// The server terminated the session (fire-and-forget; may arrive
    /// at any time after logon).
    async fn on_log_off(&self, result: ResultCode);

    /// A relationship snapshot (`incremental == false`, complete
    /// replacement) or delta batch (`incremental == true`).
    async fn on_relationships(
        &self,
        incremental: bool,
        changes: Vec<(UserId, FriendRelationship)>,
    ) -> Result<(), Self::Error>;

    /// A user-info record for one user.
    async fn on_user_info(&self, user_id: UserId, info: UserInfo);

    /// App metadata, streamed per app as the backend resolves it.
    async fn on_app_info(
        &self,
        app_id: AppId,
        title: Option<String>,
        is_game: Option<bool>,
    );

    /// The license batch granted to this account.
    async fn on_license_import(
        &self,
        licenses: Vec<License>,
    ) -> Result<(), Self::Error>;

    /// One package of an in-flight batch has resolved.
    async fn on_package_info(&self, package_id: PackageId);

    /// Localization bundles for an app; empty when the backend has none
    /// ready yet.
    async fn on_translations(
        &self,
        app_id: AppId,
        bundles: Vec<LocalizationBundle>,
    ) -> Result<(), Self::Error>;

    /// Stats and achievements for one game.
    async fn on_stats(
        &self,
        game_id: GameId,
        stats: Vec<Stat>,
        achievements: Vec<Achievement>,
    );

    /// Play time for one game. `time_played` is minutes, `last_played`
    /// a unix timestamp.
    async fn on_times(
        &self,
        game_id: GameId,
        time_played: u32,
        last_played: u32,
    );

    /// The whole times import has finished (or aborted, `false`).
    async fn on_times_import_finished(&self, finished: bool);
}
