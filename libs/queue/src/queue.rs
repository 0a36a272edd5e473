use crate::{Item, Key, Reply, Result};

/// A thread-safe max-priority queue keyed by [`Key`], holding at most one entry per key.
///
/// All operations block the calling thread until they complete. Implementations are shared
/// between worker threads behind an [`std::sync::Arc`].
pub trait PriorityQueue: Send + Sync + 'static {
    /// Inserts `item`, or replaces the payload of the entry that already holds `item.key`.
    /// The reply carries a copy of the stored item.
    fn enqueue(&self, item: Item) -> Result<Reply>;

    /// Removes the entry with the largest key. Returns a failed [`Reply`] if the queue is empty.
    fn dequeue(&self) -> Result<Reply>;

    /// Builds a new, independent queue holding copies of every entry with `start <= key <= end`.
    /// The source queue is left untouched.
    fn range(&self, start: Key, end: Key) -> Result<Self>
    where
        Self: Sized;

    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Checks the max-heap invariant over every live slot.
    fn is_valid_heap(&self) -> Result<bool>;
}
