//! Error type for the transport boundary.

use vaporlink_protocol::{ClientError, ResultCode};

/// Errors a transport implementation can report to the session.
///
/// These describe local delivery problems — the connection, not the
/// backend. Backend-reported failures arrive as [`ResultCode`]s inside
/// events instead.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection was closed underneath us.
    #[error("connection closed: {0}")]
    ConnectionClosed(String),

    /// Writing a request to the connection failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// The transport was shut down; waiters are released with this.
    #[error("transport shut down")]
    Shutdown,
}

/// Folds a local transport failure into the caller-facing taxonomy.
///
/// The session never surfaces a `TransportError` upward — a send failure
/// is a network error like any other, tagged with the closest result
/// code so the diagnostic trail stays uniform.
impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::SendFailed(_) => {
                ClientError::Network(ResultCode::IoFailure)
            }
            TransportError::ConnectionClosed(_)
            | TransportError::Shutdown => {
                ClientError::Network(ResultCode::RemoteDisconnect)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_failure_classifies_as_io_failure() {
        let err = TransportError::SendFailed(std::io::Error::other("pipe"));
        assert_eq!(
            ClientError::from(err),
            ClientError::Network(ResultCode::IoFailure)
        );
    }

    #[test]
    fn test_shutdown_classifies_as_remote_disconnect() {
        assert_eq!(
            ClientError::from(TransportError::Shutdown),
            ClientError::Network(ResultCode::RemoteDisconnect)
        );
        assert_eq!(
            ClientError::from(TransportError::ConnectionClosed(
                "reset".into()
            )),
            ClientError::Network(ResultCode::RemoteDisconnect)
        );
    }
}
