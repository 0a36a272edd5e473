//! Shared vocabulary of the concurrent key-ordered queues: the [`Item`] and [`Reply`] value types,
//! the [`PriorityQueue`] trait every implementation provides, and the reusable conformance and
//! stress harnesses under [`test`].

mod error;
mod item;
mod queue;
pub mod test;

// region:    --- Exports
pub use error::{Error, Result};
pub use item::{Item, Key, Payload, Reply};
pub use queue::PriorityQueue;
// endregion: --- Exports
