//! The caller-facing error taxonomy.
//!
//! Transport result codes never escape this layer raw: every failure is
//! classified into one of the nine [`ClientError`] categories before it
//! reaches a caller. The categories are deliberately coarse — callers
//! decide between "fix your credentials", "try again later", and "give
//! up", not between thirty backend-specific reasons. The originating
//! [`ResultCode`] rides along for diagnostics.

use crate::ResultCode;

/// A classified protocol failure.
///
/// Produced by [`ClientError::from_result`], which is total: any code not
/// in the fixed mapping lands in [`ClientError::Unknown`]. Each variant
/// carries the original code so logs can show the precise backend reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The identity or credential material was rejected. Retrying with
    /// the same inputs will not help.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(ResultCode),

    /// The connection itself failed (connect, I/O, remote hangup).
    #[error("network error: {0}")]
    Network(ResultCode),

    /// The backend is reachable but not currently serving (busy,
    /// unavailable, asked us to try another node).
    #[error("backend not available: {0}")]
    BackendNotAvailable(ResultCode),

    /// The backend did not answer in time.
    #[error("backend timeout: {0}")]
    BackendTimeout(ResultCode),

    /// The account is throttled or temporarily locked; the condition
    /// clears on its own.
    #[error("temporarily blocked: {0}")]
    TemporaryBlocked(ResultCode),

    /// The account is banned.
    #[error("banned: {0}")]
    Banned(ResultCode),

    /// The account exists but is not allowed to do this (disabled,
    /// blocked, logon denied, session replaced).
    #[error("access denied: {0}")]
    AccessDenied(ResultCode),

    /// The backend failed internally (corruption, disk full, bad
    /// response).
    #[error("backend error: {0}")]
    Backend(ResultCode),

    /// A code outside the fixed mapping. Still carries the code so the
    /// log line tells the whole story.
    #[error("unknown error: {0}")]
    Unknown(ResultCode),
}

impl ClientError {
    /// Classifies a non-`Ok` result code.
    ///
    /// The mapping is fixed and the categories are disjoint, so match
    /// order doesn't matter. Calling this with `ResultCode::Ok` is a
    /// logic error in the caller (there is nothing to classify).
    pub fn from_result(code: ResultCode) -> Self {
        use ResultCode::*;
        debug_assert_ne!(code, Ok, "Ok is not an error");
        match code {
            AccountNotFound
            | InvalidSteamId
            | InvalidLoginAuthCode
            | AccountLogonDeniedNoMailSent
            | AccountLoginDeniedNeedTwoFactor => {
                Self::InvalidCredentials(code)
            }
            ConnectFailed | IoFailure | RemoteDisconnect => {
                Self::Network(code)
            }
            Busy | ServiceUnavailable | Pending | IpNotFound
            | TryAnotherCm | Cancelled => Self::BackendNotAvailable(code),
            Timeout => Self::BackendTimeout(code),
            RateLimitExceeded
            | LimitExceeded
            | Suspended
            | AccountLocked
            | AccountLogonDeniedVerifiedEmailRequired => {
                Self::TemporaryBlocked(code)
            }
            Banned => Self::Banned(code),
            AccessDenied
            | InsufficientPrivilege
            | LogonSessionReplaced
            | Blocked
            | Ignored
            | AccountDisabled
            | AccountNotFeatured
            | AccountLogonDenied => Self::AccessDenied(code),
            DataCorruption | DiskFull | RemoteCallFailed
            | RemoteFileConflict | BadResponse => Self::Backend(code),
            _ => Self::Unknown(code),
        }
    }

    /// Returns the originating result code, whatever the category.
    pub fn result_code(&self) -> ResultCode {
        match *self {
            Self::InvalidCredentials(code)
            | Self::Network(code)
            | Self::BackendNotAvailable(code)
            | Self::BackendTimeout(code)
            | Self::TemporaryBlocked(code)
            | Self::Banned(code)
            | Self::AccessDenied(code)
            | Self::Backend(code)
            | Self::Unknown(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    //! One test per category, each walking the complete code list from
    //! the classification table, plus the catch-all behavior.

    use super::*;
    use ResultCode::*;

    #[test]
    fn test_from_result_invalid_credentials_codes() {
        for code in [
            AccountNotFound,
            InvalidSteamId,
            InvalidLoginAuthCode,
            AccountLogonDeniedNoMailSent,
            AccountLoginDeniedNeedTwoFactor,
        ] {
            assert_eq!(
                ClientError::from_result(code),
                ClientError::InvalidCredentials(code),
                "{code}"
            );
        }
    }

    #[test]
    fn test_from_result_network_codes() {
        for code in [ConnectFailed, IoFailure, RemoteDisconnect] {
            assert_eq!(
                ClientError::from_result(code),
                ClientError::Network(code),
                "{code}"
            );
        }
    }

    #[test]
    fn test_from_result_backend_not_available_codes() {
        for code in
            [Busy, ServiceUnavailable, Pending, IpNotFound, TryAnotherCm, Cancelled]
        {
            assert_eq!(
                ClientError::from_result(code),
                ClientError::BackendNotAvailable(code),
                "{code}"
            );
        }
    }

    #[test]
    fn test_from_result_timeout_code() {
        assert_eq!(
            ClientError::from_result(Timeout),
            ClientError::BackendTimeout(Timeout)
        );
    }

    #[test]
    fn test_from_result_temporary_blocked_codes() {
        for code in [
            RateLimitExceeded,
            LimitExceeded,
            Suspended,
            AccountLocked,
            AccountLogonDeniedVerifiedEmailRequired,
        ] {
            assert_eq!(
                ClientError::from_result(code),
                ClientError::TemporaryBlocked(code),
                "{code}"
            );
        }
    }

    #[test]
    fn test_from_result_banned_code() {
        assert_eq!(
            ClientError::from_result(Banned),
            ClientError::Banned(ResultCode::Banned)
        );
    }

    #[test]
    fn test_from_result_access_denied_codes() {
        for code in [
            AccessDenied,
            InsufficientPrivilege,
            LogonSessionReplaced,
            Blocked,
            Ignored,
            AccountDisabled,
            AccountNotFeatured,
            AccountLogonDenied,
        ] {
            assert_eq!(
                ClientError::from_result(code),
                ClientError::AccessDenied(code),
                "{code}"
            );
        }
    }

    #[test]
    fn test_from_result_backend_error_codes() {
        for code in [
            DataCorruption,
            DiskFull,
            RemoteCallFailed,
            RemoteFileConflict,
            BadResponse,
        ] {
            assert_eq!(
                ClientError::from_result(code),
                ClientError::Backend(code),
                "{code}"
            );
        }
    }

    #[test]
    fn test_from_result_unlisted_codes_are_unknown() {
        // Codes the table doesn't name — including ones the enum models —
        // must classify as Unknown, never panic or mis-bucket.
        for code in [
            Fail,
            NoConnection,
            InvalidPassword,
            Expired,
            Revoked,
            NotLoggedOn,
            TwoFactorCodeMismatch,
            AccountLoginDeniedThrottle,
        ] {
            assert_eq!(
                ClientError::from_result(code),
                ClientError::Unknown(code),
                "{code}"
            );
        }
    }

    #[test]
    fn test_result_code_accessor_returns_original_code() {
        let err = ClientError::from_result(Timeout);
        assert_eq!(err.result_code(), Timeout);

        let err = ClientError::from_result(Fail);
        assert_eq!(err.result_code(), Fail);
    }

    #[test]
    fn test_display_includes_code_diagnostics() {
        let err = ClientError::from_result(InvalidSteamId);
        assert_eq!(
            err.to_string(),
            "invalid credentials: InvalidSteamId(19)"
        );
    }
}
