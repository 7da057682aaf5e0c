//! One-shot rendezvous for collections results.
//!
//! A collections import is the one asynchronous response that is handed
//! back to a waiting caller instead of a cache: the session enqueues an
//! `ImportCollections` job and suspends on this slot; when the transport
//! loop receives the payload it signals the slot; the waiter consumes the
//! payload and the slot resets to empty, so the next retrieval suspends
//! afresh instead of seeing stale data.
//!
//! The slot supports exactly one waiter at a time. Two tasks racing on
//! [`CollectionsSlot::wait`] would steal each other's payloads; the
//! session documents its collections retrieval as single-caller-only.

use tokio::sync::{Mutex, Notify};

use vaporlink_protocol::Collections;

use crate::TransportError;

#[derive(Debug, Default)]
struct SlotState {
    payload: Option<Collections>,
    closed: bool,
}

/// Event/payload pair with signal, consume-and-clear, and close.
#[derive(Debug, Default)]
pub struct CollectionsSlot {
    state: Mutex<SlotState>,
    notify: Notify,
}

impl CollectionsSlot {
    /// Creates an empty, open slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a payload and wakes the waiter.
    ///
    /// Signaling with no waiter present is fine — the payload (and the
    /// wakeup permit) are retained until the next [`wait`](Self::wait).
    /// Signaling twice before consumption replaces the payload; results
    /// pair one-to-one with `ImportCollections` jobs, so the newer one
    /// is the one the waiter asked for.
    pub async fn signal(&self, collections: Collections) {
        let mut state = self.state.lock().await;
        state.payload = Some(collections);
        self.notify.notify_one();
    }

    /// Suspends until a payload is available, then consumes it, leaving
    /// the slot empty.
    ///
    /// # Errors
    /// Returns [`TransportError::Shutdown`] if the slot is closed while
    /// (or before) waiting — a closed transport must release the waiter
    /// rather than hang it forever.
    pub async fn wait(&self) -> Result<Collections, TransportError> {
        loop {
            {
                let mut state = self.state.lock().await;
                if let Some(payload) = state.payload.take() {
                    return Ok(payload);
                }
                if state.closed {
                    return Err(TransportError::Shutdown);
                }
            }
            // `notify_one` stores a permit when nobody is parked here yet,
            // so a signal landing between the check above and this await
            // is not lost.
            self.notify.notified().await;
        }
    }

    /// Returns a copy of the pending payload without consuming it.
    pub async fn snapshot(&self) -> Option<Collections> {
        self.state.lock().await.payload.clone()
    }

    /// Closes the slot, releasing the current waiter (and any future one)
    /// with [`TransportError::Shutdown`].
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        state.closed = true;
        // Wake the parked waiter, and leave a permit for a waiter that is
        // between its closed-check and its park.
        self.notify.notify_waiters();
        self.notify.notify_one();
    }
}
