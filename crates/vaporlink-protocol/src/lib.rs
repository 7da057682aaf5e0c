//! Protocol vocabulary for Vaporlink.
//!
//! This crate defines the typed "language" the rest of the client speaks:
//!
//! - **Result codes** ([`ResultCode`]) — per-request/per-event outcomes
//!   with their fixed wire values.
//! - **Error classifier** ([`ClientError`]) — the nine-category taxonomy
//!   every failure is folded into before a caller sees it.
//! - **Payload types** ([`UserInfo`], [`License`], [`Job`], …) — decoded
//!   event contents and deferred-job descriptors.
//!
//! # Architecture
//!
//! ```text
//! Transport (framing, crypto, decode)  →  Protocol (typed events)  →  Session (reconciliation)
//! ```
//!
//! The protocol crate has no I/O and no state — it is the shared
//! vocabulary of the transport boundary.

mod error;
mod result_code;
mod types;

pub use error::ClientError;
pub use result_code::ResultCode;
pub use types::{
    Achievement, AppId, Collections, FriendRelationship, GameId, Job,
    License, LocalizationBundle, PackageId, PersonaState, Stat, UserId,
    UserInfo,
};
