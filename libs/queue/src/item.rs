use crate::Result;

/// Priority of an [`Item`]. Larger keys are dequeued first.
pub type Key = u32;

/// Owned, length-tagged byte buffer carried by an [`Item`].
///
/// Every copy of a payload is a deep copy, so a payload handed out by a queue never aliases the
/// buffer held in the queue's slot. Prefer [`Payload::try_clone`] where an allocation failure
/// must be reported instead of aborting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Copies `bytes` into a freshly allocated payload.
    pub fn copy_from_slice(bytes: &[u8]) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes.len())?;
        buf.extend_from_slice(bytes);
        Ok(Self(buf))
    }

    /// Deep copy that reports allocation failure as [`crate::Error::OutOfMemory`].
    pub fn try_clone(&self) -> Result<Self> {
        Self::copy_from_slice(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

/// A keyed entry of a queue. The item owns its payload exclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub key: Key,
    pub payload: Payload,
}

impl Item {
    pub fn new(key: Key, payload: impl Into<Payload>) -> Self {
        Self {
            key,
            payload: payload.into(),
        }
    }

    pub fn without_load(key: Key) -> Self {
        Self {
            key,
            payload: Payload::empty(),
        }
    }

    /// Deep copy of the item, see [`Payload::try_clone`].
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            key: self.key,
            payload: self.payload.try_clone()?,
        })
    }
}

/// Result of an `enqueue` or `dequeue` call.
///
/// `item` only carries meaning when `success` is `true`. It is always an independent copy that
/// the caller may keep or drop without affecting the queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub success: bool,
    pub item: Item,
}

impl Reply {
    pub fn ok(item: Item) -> Self {
        Self {
            success: true,
            item,
        }
    }

    pub fn failed() -> Self {
        Self::default()
    }

    pub fn into_item(self) -> Option<Item> {
        self.success.then_some(self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, Payload, Reply};

    #[test]
    fn clone_does_not_alias_buffer() {
        let original = Payload::from("payload");
        let copy = original.try_clone().unwrap();

        assert_eq!(original, copy);
        assert_ne!(original.as_slice().as_ptr(), copy.as_slice().as_ptr());
    }

    #[test]
    fn empty_payload_is_allowed() {
        let item = Item::without_load(3);
        let copy = item.try_clone().unwrap();

        assert!(copy.payload.is_empty());
        assert_eq!(copy.payload.len(), 0);
        assert_eq!(copy.key, 3);
    }

    /// A failed reply never hands out its placeholder item.
    #[test]
    fn failed_reply_has_no_item() {
        let reply = Reply::failed();
        assert!(!reply.success);
        assert_eq!(reply.into_item(), None);

        let reply = Reply::ok(Item::new(7, "seven"));
        assert_eq!(reply.into_item(), Some(Item::new(7, "seven")));
    }
}
