use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use queue::{Error, Item, Key, PriorityQueue, Reply, Result};
use tracing::{debug, trace, warn};

use crate::{
    cfg::Cfg,
    heap::{Heap, Placement},
};

/// Thread-safe max-priority queue over a single array-backed heap.
///
/// One reader-writer lock guards the slot array, its counters and every payload. `enqueue`
/// (including any growth of the array) and `dequeue` hold the write side for their whole
/// duration, so no operation ever observes the array mid-reallocation. `range` and the read-only
/// queries share the read side, several snapshots can be taken at once.
#[derive(Debug)]
pub struct HeapQueue {
    cfg: Cfg,
    storage: RwLock<Heap>,
}

impl HeapQueue {
    /// Creates an empty queue with the default [`Cfg`].
    pub fn new() -> Result<Self> {
        Self::with_cfg(Cfg::default())
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_cfg(Cfg::with_capacity(capacity))
    }

    pub fn with_cfg(cfg: Cfg) -> Result<Self> {
        cfg.validate()?;
        let heap = Heap::with_capacity(cfg.capacity, cfg.high_water_percent)?;
        Ok(Self {
            cfg,
            storage: RwLock::new(heap),
        })
    }

    pub fn cfg(&self) -> &Cfg {
        &self.cfg
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Heap>> {
        self.storage.read().map_err(|_| {
            warn!("queue lock is poisoned");
            Error::Poisoned
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Heap>> {
        self.storage.write().map_err(|_| {
            warn!("queue lock is poisoned");
            Error::Poisoned
        })
    }

    /// Inserts `item`, or replaces the payload of the entry that already holds `item.key`.
    ///
    /// The reply carries a copy of the stored item, taken before the lock is acquired.
    pub fn enqueue(&self, item: Item) -> Result<Reply> {
        let copy = item.try_clone()?;
        let key = item.key;

        let placement = self.write()?.push(item)?;
        match placement {
            Placement::Inserted(idx) => trace!(key, idx, "inserted"),
            Placement::Updated(idx) => trace!(key, idx, "replaced payload of existing key"),
        }

        Ok(Reply::ok(copy))
    }

    /// Removes the entry with the largest key and hands it to the caller.
    /// On an empty queue a failed [`Reply`] is returned and nothing changes.
    pub fn dequeue(&self) -> Result<Reply> {
        let top = self.write()?.pop();
        Ok(top.map(Reply::ok).unwrap_or_else(Reply::failed))
    }

    /// Creates a new queue holding copies of every entry with `start <= key <= end`.
    ///
    /// The entries are copied under the read lock, so the snapshot reflects a single point in time.
    /// The new queue uses the configuration of `self` and is a valid, empty queue when nothing
    /// matches or `start > end`.
    pub fn range(&self, start: Key, end: Key) -> Result<Self> {
        if start > end {
            return Self::with_cfg(self.cfg);
        }
        let in_range = |item: &&Item| (start..=end).contains(&item.key);

        let matched = {
            let heap = self.read()?;
            let count = heap.iter().filter(in_range).count();

            let mut matched = Vec::new();
            matched.try_reserve_exact(count)?;
            for item in heap.iter().filter(in_range) {
                matched.push(item.try_clone()?);
            }
            matched
        };

        // The new heap is not shared yet, building it needs no lock.
        let heap = Heap::from_items(matched, self.cfg.capacity, self.cfg.high_water_percent)?;
        debug!(
            start,
            end,
            matched = heap.len(),
            capacity = heap.capacity(),
            "created range snapshot"
        );

        Ok(Self {
            cfg: self.cfg,
            storage: RwLock::new(heap),
        })
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Current number of slots. Grows by doubling, never shrinks.
    pub fn capacity(&self) -> Result<usize> {
        Ok(self.read()?.capacity())
    }

    /// Key of the entry the next `dequeue` would return.
    pub fn peek_key(&self) -> Result<Option<Key>> {
        Ok(self.read()?.peek().map(|item| item.key))
    }

    pub fn is_valid_heap(&self) -> Result<bool> {
        Ok(self.read()?.is_valid())
    }
}

impl Drop for HeapQueue {
    fn drop(&mut self) {
        if let Ok(heap) = self.storage.get_mut() {
            trace!(len = heap.len(), "releasing queue");
        }
    }
}

impl PriorityQueue for HeapQueue {
    fn enqueue(&self, item: Item) -> Result<Reply> {
        HeapQueue::enqueue(self, item)
    }

    fn dequeue(&self) -> Result<Reply> {
        HeapQueue::dequeue(self)
    }

    fn range(&self, start: Key, end: Key) -> Result<Self> {
        HeapQueue::range(self, start, end)
    }

    fn len(&self) -> Result<usize> {
        HeapQueue::len(self)
    }

    fn is_valid_heap(&self) -> Result<bool> {
        HeapQueue::is_valid_heap(self)
    }
}
