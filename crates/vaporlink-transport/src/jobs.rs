//! Deferred-job queue.
//!
//! Imports that should not hit the wire immediately (stats, times,
//! collections) are appended here as [`Job`] descriptors. The transport's
//! own execution loop drains the queue and issues the actual requests at
//! its own pace — pacing and throttling stay out of the session layer.

use std::collections::VecDeque;
use std::sync::Mutex;

use vaporlink_protocol::Job;

/// FIFO queue of deferred jobs.
///
/// Append-only from the session's side; the transport loop pops. The
/// queue is internally locked, so both sides hold a shared reference.
/// The lock is a `std` mutex — no `.await` ever happens while it is held.
#[derive(Debug, Default)]
pub struct JobQueue {
    jobs: Mutex<VecDeque<Job>>,
}

impl JobQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a job to the back of the queue.
    pub fn push(&self, job: Job) {
        tracing::debug!(?job, "job queued");
        self.lock().push_back(job);
    }

    /// Pops the oldest job, or `None` if the queue is empty.
    pub fn pop(&self) -> Option<Job> {
        self.lock().pop_front()
    }

    /// Takes every queued job at once, oldest first.
    pub fn drain(&self) -> Vec<Job> {
        self.lock().drain(..).collect()
    }

    /// Number of queued jobs.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Job>> {
        // A poisoned lock means a panic while pushing/popping a VecDeque,
        // which leaves no broken invariant worth preserving.
        self.jobs.lock().unwrap_or_else(|e| e.into_inner())
    }
}
