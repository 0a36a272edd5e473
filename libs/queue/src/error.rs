use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur when operating on a queue.
///
/// An empty queue or a missing handle are not errors, they are reported through
/// [`crate::Reply::success`].
#[derive(Debug, Error)]
pub enum Error {
    /// Growing the slot array or copying a payload could not allocate.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    /// A thread panicked while holding the queue lock, the heap may be left half-repaired.
    #[error("queue lock poisoned by a panicked thread")]
    Poisoned,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
