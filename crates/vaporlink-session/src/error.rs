//! Error types for the session layer.

use vaporlink_protocol::ClientError;

/// Errors surfaced by [`Session`](crate::Session) operations.
///
/// Callers see either a classified backend/network failure
/// ([`ClientError`], one of the nine categories — raw result codes never
/// escape) or one of the session-local conditions below.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A classified protocol failure.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// `authenticate` was called while a previous login attempt was
    /// still awaiting its result. The pending attempt is left intact;
    /// this call fails fast instead of overwriting it.
    #[error("login already in progress")]
    LoginInProgress,

    /// The transport delivered an event that violates a protocol
    /// invariant (e.g. a login result with no login in flight). Fatal to
    /// that handler invocation only.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),
}
