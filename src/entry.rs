use alloc::vec::Vec;

/// One key-value slot of a `TinyMap`.
///
/// Slots past the map's length are retired: `value` is `None` and `key`
/// keeps its allocation for the next `set`.
#[derive(Debug, Clone)]
pub(crate) struct Entry<V> {
    pub(crate) key: Vec<u8>,
    pub(crate) value: Option<V>,
}

impl<V> Entry<V> {
    pub(crate) fn new(key: &[u8], value: V) -> Self {
        Self {
            key: key.to_vec(),
            value: Some(value),
        }
    }

    /// Brings a retired slot back to life, overwriting the old key bytes in place.
    pub(crate) fn refill(&mut self, key: &[u8], value: V) {
        self.key.clear();
        self.key.extend_from_slice(key);
        self.value = Some(value);
    }

    pub(crate) fn retire(&mut self) {
        self.value = None;
    }

    pub(crate) fn matches(&self, key: &[u8]) -> bool {
        self.key.as_slice() == key
    }
}
