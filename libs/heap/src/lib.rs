mod cfg;
pub mod handle;
mod heap;
mod locked;
mod test;

// region:    --- Exports
pub use cfg::{Cfg, DEFAULT_CAPACITY, DEFAULT_HIGH_WATER_PERCENT};
pub use locked::HeapQueue;
// endregion: --- Exports
