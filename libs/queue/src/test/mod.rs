//! Harnesses shared by every [`crate::PriorityQueue`] implementation: a conformance [`suite`] for
//! unit tests and a multi-threaded [`stress`] driver for benchmarking.
