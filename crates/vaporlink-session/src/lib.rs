//! Session layer for Vaporlink.
//!
//! This crate is the root of the client stack: it runs the
//! authentication handshake, reconciles incoming protocol events into
//! the caches, drives the license→package→app import chain, lazily
//! fills the translations cache, and defers stats/times/collections
//! imports through the transport's job queue.
//!
//! # How it fits in the stack
//!
//! ```text
//! Application (above)      ← calls authenticate / imports, reads caches
//!     ↕
//! Session (this crate)     ← handshake + event reconciliation
//!     ↕
//! Transport (below)        ← framing, crypto, decode; delivers events
//! ```
//!
//! The transport delivers events one at a time through the
//! [`EventHandler`](vaporlink_transport::EventHandler) implementation on
//! [`Session`]; public operations may be called concurrently from any
//! task and suspend only their caller.

mod error;
mod session;

pub use error::SessionError;
pub use session::{AuthLostHandler, Session};
