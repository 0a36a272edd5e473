//! Array-backed binary max-heap over [`Key`]s.
//!
//! The heap is not synchronized. [`crate::HeapQueue`] wraps it in a lock.
//!
//! Next to the slot array the heap tracks the slot index of every live key, so that an `enqueue`
//! of a key that is already present can update the entry in place instead of adding a duplicate.
//! Every swap performed by the sift walks keeps this index in step.

use std::collections::HashMap;

use queue::{Item, Key, Result};
use tracing::debug;

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

#[derive(Debug)]
pub(crate) struct Heap {
    /// `slots[..]` is a valid max-heap, `slots.len()` is the number of live entries.
    slots: Vec<Item>,
    /// Logical slot count. Growth is triggered against this value, not `slots.capacity()`.
    capacity: usize,
    high_water_percent: u8,
    positions: HashMap<Key, usize>,
}

/// What [`Heap::push`] did with the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Inserted(usize),
    Updated(usize),
}

impl Heap {
    pub(crate) fn with_capacity(capacity: usize, high_water_percent: u8) -> Result<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        let mut positions = HashMap::new();
        positions.try_reserve(capacity)?;

        Ok(Self {
            slots,
            capacity,
            high_water_percent,
            positions,
        })
    }

    /// Builds a heap out of `items` in O(n). Keys of `items` must be unique.
    ///
    /// `capacity` is raised to twice the item count when the items would not fit.
    pub(crate) fn from_items(
        items: Vec<Item>,
        capacity: usize,
        high_water_percent: u8,
    ) -> Result<Self> {
        let capacity = if items.len() > capacity {
            items.len() * 2
        } else {
            capacity
        };
        let mut heap = Self::with_capacity(capacity, high_water_percent)?;

        for (idx, item) in items.into_iter().enumerate() {
            heap.positions.insert(item.key, idx);
            heap.slots.push(item);
        }
        // every index from the last parent down to the root
        for idx in (0..heap.slots.len() / 2).rev() {
            heap.sift_down(idx);
        }

        Ok(heap)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    pub(crate) fn get(&self, idx: usize) -> Option<&Item> {
        self.slots.get(idx)
    }

    pub(crate) fn peek(&self) -> Option<&Item> {
        self.slots.first()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter()
    }

    /// Inserts `item`, or replaces the payload of the live entry with the same key.
    pub(crate) fn push(&mut self, item: Item) -> Result<Placement> {
        if let Some(&idx) = self.positions.get(&item.key) {
            // Same key, same position: the heap shape is unaffected.
            self.slots[idx].payload = item.payload;
            return Ok(Placement::Updated(idx));
        }

        if self.above_high_water() {
            self.grow()?;
        }
        // keeps the index insert below from allocating
        self.positions.try_reserve(1)?;

        let idx = self.slots.len();
        self.positions.insert(item.key, idx);
        self.slots.push(item);
        Ok(Placement::Inserted(self.sift_up(idx)))
    }

    /// Removes and returns the entry with the largest key.
    pub(crate) fn pop(&mut self) -> Option<Item> {
        if self.slots.is_empty() {
            return None;
        }
        // promote the tail into the root slot
        let top = self.slots.swap_remove(0);
        self.positions.remove(&top.key);

        if let Some(first) = self.slots.first() {
            self.positions.insert(first.key, 0);
            self.sift_down(0);
        }
        Some(top)
    }

    fn above_high_water(&self) -> bool {
        self.slots.len() >= self.capacity.saturating_mul(usize::from(self.high_water_percent)) / 100
    }

    /// Doubles the logical capacity. Live items are moved, their payloads are not copied.
    fn grow(&mut self) -> Result<()> {
        let new_capacity = self.capacity.saturating_mul(2).max(1);
        self.slots
            .try_reserve_exact(new_capacity.saturating_sub(self.slots.len()))?;
        self.positions
            .try_reserve(new_capacity.saturating_sub(self.positions.len()))?;

        debug!(
            from = self.capacity,
            to = new_capacity,
            len = self.slots.len(),
            "growing heap"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.positions.insert(self.slots[a].key, a);
        self.positions.insert(self.slots[b].key, b);
    }

    /// Moves the item at `idx` towards the root while its key is strictly greater than its
    /// parent's. Returns the final index.
    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let p = parent(idx);
            if self.slots[p].key >= self.slots[idx].key {
                break;
            }
            self.swap(p, idx);
            idx = p;
        }
        idx
    }

    /// Moves the item at `idx` towards the leaves while one of its children has a strictly
    /// greater key, always swapping with the larger child.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.slots.len();
        loop {
            let l = left(idx);
            let r = right(idx);
            let mut largest = idx;
            if l < len && self.slots[l].key > self.slots[largest].key {
                largest = l;
            }
            if r < len && self.slots[r].key > self.slots[largest].key {
                largest = r;
            }
            if largest == idx {
                break;
            }
            self.swap(idx, largest);
            idx = largest;
        }
    }

    /// Checks the max-heap property and the consistency of the key index.
    pub(crate) fn is_valid(&self) -> bool {
        let ordered = (1..self.slots.len())
            .all(|i| self.slots[parent(i)].key >= self.slots[i].key);
        let indexed = self.positions.len() == self.slots.len()
            && self
                .slots
                .iter()
                .enumerate()
                .all(|(idx, item)| self.positions.get(&item.key) == Some(&idx));

        ordered && indexed && self.slots.len() <= self.capacity
    }
}
