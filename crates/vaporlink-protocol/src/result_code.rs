//! Transport-level result codes.
//!
//! Every request and several unsolicited events carry a [`ResultCode`]
//! describing the outcome. The numeric discriminants are fixed by the
//! vendor's wire protocol — they arrive as an `i32` inside the decoded
//! message and must map back to the same values when logged or re-sent.
//!
//! This layer never exposes a raw `ResultCode` to its callers; failures
//! are classified into [`ClientError`](crate::ClientError) first.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a protocol request or event.
///
/// The variant list covers every code the error classifier distinguishes
/// plus the common neighbors seen in live traffic. Codes outside this set
/// fail [`ResultCode::from_raw`] and should be treated as a decode error
/// by the transport.
///
/// `#[repr(i32)]` pins each variant to its wire value, so `code as i32`
/// round-trips through [`ResultCode::from_raw`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum ResultCode {
    /// The request succeeded. Never classified.
    Ok = 1,
    Fail = 2,
    NoConnection = 3,
    InvalidPassword = 5,
    LoggedInElsewhere = 6,
    InvalidProtocolVersion = 7,
    InvalidParam = 8,
    FileNotFound = 9,
    Busy = 10,
    InvalidState = 11,
    InvalidName = 12,
    InvalidEmail = 13,
    DuplicateName = 14,
    AccessDenied = 15,
    Timeout = 16,
    Banned = 17,
    AccountNotFound = 18,
    InvalidSteamId = 19,
    ServiceUnavailable = 20,
    NotLoggedOn = 21,
    Pending = 22,
    EncryptionFailure = 23,
    InsufficientPrivilege = 24,
    LimitExceeded = 25,
    Revoked = 26,
    Expired = 27,
    AlreadyRedeemed = 28,
    DuplicateRequest = 29,
    AlreadyOwned = 30,
    IpNotFound = 31,
    PersistFailed = 32,
    LockingFailed = 33,
    LogonSessionReplaced = 34,
    ConnectFailed = 35,
    HandshakeFailed = 36,
    IoFailure = 37,
    RemoteDisconnect = 38,
    Blocked = 40,
    Ignored = 41,
    NoMatch = 42,
    AccountDisabled = 43,
    ServiceReadOnly = 44,
    AccountNotFeatured = 45,
    TryAnotherCm = 48,
    PasswordRequiredToKickSession = 49,
    AlreadyLoggedInElsewhere = 50,
    Suspended = 51,
    Cancelled = 52,
    DataCorruption = 53,
    DiskFull = 54,
    RemoteCallFailed = 55,
    RemoteFileConflict = 60,
    AccountLogonDenied = 63,
    CannotUseOldPassword = 64,
    InvalidLoginAuthCode = 65,
    AccountLogonDeniedNoMailSent = 66,
    AccountLocked = 73,
    AccountLogonDeniedVerifiedEmailRequired = 74,
    BadResponse = 76,
    RequirePasswordReEntry = 77,
    ValueOutOfRange = 78,
    UnexpectedError = 79,
    Disabled = 80,
    RateLimitExceeded = 84,
    AccountLoginDeniedNeedTwoFactor = 85,
    AccountLoginDeniedThrottle = 87,
    TwoFactorCodeMismatch = 88,
}

impl ResultCode {
    /// Maps a raw wire value back to a `ResultCode`.
    ///
    /// Returns `None` for values this client doesn't know, which the
    /// transport should surface as a decode failure rather than guess at.
    pub fn from_raw(raw: i32) -> Option<Self> {
        use ResultCode::*;
        let code = match raw {
            1 => Ok,
            2 => Fail,
            3 => NoConnection,
            5 => InvalidPassword,
            6 => LoggedInElsewhere,
            7 => InvalidProtocolVersion,
            8 => InvalidParam,
            9 => FileNotFound,
            10 => Busy,
            11 => InvalidState,
            12 => InvalidName,
            13 => InvalidEmail,
            14 => DuplicateName,
            15 => AccessDenied,
            16 => Timeout,
            17 => Banned,
            18 => AccountNotFound,
            19 => InvalidSteamId,
            20 => ServiceUnavailable,
            21 => NotLoggedOn,
            22 => Pending,
            23 => EncryptionFailure,
            24 => InsufficientPrivilege,
            25 => LimitExceeded,
            26 => Revoked,
            27 => Expired,
            28 => AlreadyRedeemed,
            29 => DuplicateRequest,
            30 => AlreadyOwned,
            31 => IpNotFound,
            32 => PersistFailed,
            33 => LockingFailed,
            34 => LogonSessionReplaced,
            35 => ConnectFailed,
            36 => HandshakeFailed,
            37 => IoFailure,
            38 => RemoteDisconnect,
            40 => Blocked,
            41 => Ignored,
            42 => NoMatch,
            43 => AccountDisabled,
            44 => ServiceReadOnly,
            45 => AccountNotFeatured,
            48 => TryAnotherCm,
            49 => PasswordRequiredToKickSession,
            50 => AlreadyLoggedInElsewhere,
            51 => Suspended,
            52 => Cancelled,
            53 => DataCorruption,
            54 => DiskFull,
            55 => RemoteCallFailed,
            60 => RemoteFileConflict,
            63 => AccountLogonDenied,
            64 => CannotUseOldPassword,
            65 => InvalidLoginAuthCode,
            66 => AccountLogonDeniedNoMailSent,
            73 => AccountLocked,
            74 => AccountLogonDeniedVerifiedEmailRequired,
            76 => BadResponse,
            77 => RequirePasswordReEntry,
            78 => ValueOutOfRange,
            79 => UnexpectedError,
            80 => Disabled,
            84 => RateLimitExceeded,
            85 => AccountLoginDeniedNeedTwoFactor,
            87 => AccountLoginDeniedThrottle,
            88 => TwoFactorCodeMismatch,
            _ => return None,
        };
        Some(code)
    }

    /// Returns the numeric wire value.
    pub fn raw(self) -> i32 {
        self as i32
    }
}

/// Prints the variant name with its wire value, e.g. `Timeout(16)`.
/// This is the form that shows up in logs and classified errors.
impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.raw())
    }
}
