//! Handle-based entry points for harnesses that drive a queue through a nullable handle.
//!
//! A missing handle is not an error: every operation on it reports a failed [`Reply`] (or another
//! missing handle for [`range`]) and has no side effects.

use std::sync::Arc;

use queue::{Item, Key, Payload, Reply, Result};

use crate::HeapQueue;

/// Shared handle to a [`HeapQueue`]. `None` stands for an invalid handle.
pub type QueueHandle = Option<Arc<HeapQueue>>;

/// Allocates an empty queue with the default configuration.
pub fn create() -> Result<QueueHandle> {
    Ok(Some(Arc::new(HeapQueue::new()?)))
}

/// Releases this reference to the queue. The queue and every payload it owns are freed once the
/// last handle is gone.
pub fn destroy(handle: QueueHandle) {
    drop(handle);
}

/// Copies `payload` into the queue under `key`, replacing the payload of an existing entry.
pub fn enqueue(handle: Option<&HeapQueue>, key: Key, payload: &[u8]) -> Result<Reply> {
    let Some(queue) = handle else {
        return Ok(Reply::failed());
    };
    queue.enqueue(Item {
        key,
        payload: Payload::copy_from_slice(payload)?,
    })
}

pub fn dequeue(handle: Option<&HeapQueue>) -> Result<Reply> {
    match handle {
        Some(queue) => queue.dequeue(),
        None => Ok(Reply::failed()),
    }
}

pub fn range(handle: Option<&HeapQueue>, start: Key, end: Key) -> Result<QueueHandle> {
    match handle {
        Some(queue) => Ok(Some(Arc::new(queue.range(start, end)?))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{QueueHandle, create, dequeue, destroy, enqueue, range};

    #[test]
    fn invalid_handle_fails_softly() {
        let handle: QueueHandle = None;

        assert!(!enqueue(handle.as_deref(), 1, b"one").unwrap().success);
        assert!(!dequeue(handle.as_deref()).unwrap().success);
        assert!(range(handle.as_deref(), 0, 10).unwrap().is_none());
        destroy(handle);
    }

    #[test]
    fn caller_buffer_is_copied() {
        let handle = create().unwrap();
        let mut buf = b"original".to_vec();

        let reply = enqueue(handle.as_deref(), 4, &buf).unwrap();
        assert!(reply.success);
        assert_eq!(reply.item.payload.as_slice(), b"original");

        buf.fill(0);
        let reply = dequeue(handle.as_deref()).unwrap();
        assert_eq!(reply.item.key, 4);
        assert_eq!(reply.item.payload.as_slice(), b"original");
        destroy(handle);
    }

    #[test]
    fn range_handle_outlives_source() {
        let source = create().unwrap();
        for key in [1, 5, 9] {
            enqueue(source.as_deref(), key, &[key as u8]).unwrap();
        }

        let snapshot = range(source.as_deref(), 2, 9).unwrap();
        destroy(source);

        let reply = dequeue(snapshot.as_deref()).unwrap();
        assert_eq!((reply.item.key, reply.item.payload.as_slice()), (9, &[9u8][..]));
        let reply = dequeue(snapshot.as_deref()).unwrap();
        assert_eq!(reply.item.key, 5);
        assert!(!dequeue(snapshot.as_deref()).unwrap().success);
    }

    #[test]
    fn handle_is_shared_between_threads() {
        let handle = create().unwrap();

        let workers: Vec<_> = (0..4u32)
            .map(|t| {
                let handle = handle.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        enqueue(handle.as_deref(), t * 250 + i, b"x").unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let queue = handle.as_deref().unwrap();
        assert_eq!(queue.len().unwrap(), 1_000);
        assert_eq!(queue.peek_key().unwrap(), Some(999));
        destroy(handle);
    }
}
