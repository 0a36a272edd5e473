#[cfg(test)]
mod test_suite {
    use queue::test::suite;

    use crate::{Cfg, HeapQueue};

    struct HeapTester;

    impl suite::Tester<HeapQueue> for HeapTester {
        fn create_queue(&self) -> HeapQueue {
            HeapQueue::new().unwrap()
        }
    }

    /// Starts from a handful of slots so that every test exercises growth.
    struct SmallHeapTester;

    impl suite::Tester<HeapQueue> for SmallHeapTester {
        fn create_queue(&self) -> HeapQueue {
            HeapQueue::with_cfg(Cfg::with_capacity(2)).unwrap()
        }
    }

    #[test]
    fn max_extraction() {
        suite::test_max_extraction(HeapTester);
    }

    #[test]
    fn empty_queue() {
        suite::test_empty_queue(HeapTester);
    }

    #[test]
    fn upsert_replaces_payload() {
        suite::test_upsert_replaces_payload(HeapTester);
        suite::test_upsert_replaces_payload(SmallHeapTester);
    }

    #[test]
    fn replies_are_independent() {
        suite::test_replies_are_independent(HeapTester);
    }

    #[test]
    fn range_snapshot() {
        suite::test_range_snapshot(HeapTester);
        suite::test_range_snapshot(SmallHeapTester);
    }

    #[test]
    fn range_edge_cases() {
        suite::test_range_edge_cases(HeapTester);
    }

    #[test]
    fn capacity_growth() {
        suite::test_capacity_growth(HeapTester, 100_000);
        suite::test_capacity_growth(SmallHeapTester, 10_000);
    }

    #[test]
    fn concurrent_enqueue() {
        suite::test_concurrent_enqueue(HeapTester);
    }

    #[test]
    fn concurrent_enqueue_and_dequeue() {
        suite::test_concurrent_enqueue_and_dequeue(HeapTester);
        suite::test_concurrent_enqueue_and_dequeue(SmallHeapTester);
    }

    #[test]
    fn concurrent_range() {
        suite::test_concurrent_range(SmallHeapTester);
    }
}
