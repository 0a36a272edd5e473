use queue::{Error, Result};

/// Slot count of a queue created through [`Cfg::default`].
pub const DEFAULT_CAPACITY: usize = 16_384;
/// Fill level, in percent of the capacity, at which an insert doubles the capacity first.
pub const DEFAULT_HIGH_WATER_PERCENT: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cfg {
    /// Initial capacity of the queue. It will grow as needed as items are added.
    /// # Note
    /// The size of the queue is not capped. Snapshots created by `range` start out with the same
    /// capacity as their source configuration.
    pub capacity: usize,
    pub high_water_percent: u8,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            high_water_percent: DEFAULT_HIGH_WATER_PERCENT,
        }
    }
}

impl Cfg {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfig("capacity must be at least one slot"));
        }
        if !(1..=100).contains(&self.high_water_percent) {
            return Err(Error::InvalidConfig(
                "high water mark must be within 1..=100 percent",
            ));
        }
        Ok(())
    }
}
