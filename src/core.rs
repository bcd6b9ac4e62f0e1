use alloc::vec::Vec;
use core::fmt;

use crate::dispose::Value;
use crate::entry::Entry;
use crate::error::{DisposeError, TinyMapError};
use crate::iter::{Keys, TinyMapIter, Values};

/// A map stored as a slice of key-value pairs, searched linearly.
///
/// Keys are byte strings copied into the map. Entries keep their insertion
/// order. `reset` empties the map but keeps every allocation, so a map reused
/// for the same workload stops allocating after the first round.
pub struct TinyMap<V> {
    entries: Vec<Entry<V>>,
    len: usize,
}

impl<V> TinyMap<V> {
    /// Creates an empty map. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of entries the map can hold without reallocating its slot array.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    #[allow(clippy::indexing_slicing)] // len never exceeds entries.len()
    pub(crate) fn live(&self) -> &[Entry<V>] {
        &self.entries[..self.len]
    }

    #[allow(clippy::indexing_slicing)] // len never exceeds entries.len()
    fn live_mut(&mut self) -> &mut [Entry<V>] {
        &mut self.entries[..self.len]
    }

    /// Sets the value for `key`, inserting a new entry if the key is not present.
    ///
    /// An existing entry keeps its position and its stored key; only the value
    /// is replaced. The old value is dropped without being disposed.
    ///
    /// A new entry goes to the end. After a `reset`, the key buffer of a
    /// retired slot is reused.
    pub fn set<K: AsRef<[u8]>>(&mut self, key: K, value: V) {
        let key = key.as_ref();

        if let Some(entry) = self.live_mut().iter_mut().find(|e| e.matches(key)) {
            entry.value = Some(value);
            return;
        }

        if let Some(slot) = self.entries.get_mut(self.len) {
            slot.refill(key, value);
        } else {
            self.entries.push(Entry::new(key, value));
        }
        self.len += 1;
    }

    /// Returns the value stored for `key`.
    ///
    /// Returns `None` if the key is not present. A stored value is always
    /// `Some`, even when the value itself is empty (for example `None` in a
    /// `TinyMap<Option<T>>`).
    #[must_use]
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        let key = key.as_ref();
        self.live()
            .iter()
            .find(|e| e.matches(key))
            .and_then(|e| e.value.as_ref())
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<K: AsRef<[u8]>>(&mut self, key: K) -> Option<&mut V> {
        let key = key.as_ref();
        self.live_mut()
            .iter_mut()
            .find(|e| e.matches(key))
            .and_then(|e| e.value.as_mut())
    }

    #[must_use]
    pub fn contains_key<K: AsRef<[u8]>>(&self, key: K) -> bool {
        let key = key.as_ref();
        self.live().iter().any(|e| e.matches(key))
    }

    /// Calls `visitor` with every key and value, in insertion order.
    pub fn visit_values<F>(&self, mut visitor: F)
    where
        F: FnMut(&[u8], &V),
    {
        for (key, value) in self {
            visitor(key, value);
        }
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    #[must_use]
    pub fn iter(&self) -> TinyMapIter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over the keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the values in insertion order.
    #[must_use]
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.iter())
    }

    /// Drops the live values and sets the length to zero.
    /// Slots and their key buffers stay allocated.
    fn release(&mut self) {
        #[cfg(feature = "log")]
        log::trace!(
            "tinymap: reset clears {} entries, {} slots retained",
            self.len,
            self.entries.len()
        );

        for entry in self.live_mut() {
            entry.retire();
        }
        self.len = 0;
    }
}

impl<V: Value> TinyMap<V> {
    /// Disposes every live value that has the capability, in insertion order.
    ///
    /// Returns the number of `dispose` calls made.
    fn dispose_live<F>(&mut self, mut on_error: F) -> usize
    where
        F: FnMut(&[u8], DisposeError),
    {
        let mut attempted = 0;
        for entry in self.live_mut() {
            let Some(value) = entry.value.as_mut() else {
                continue;
            };
            if let Some(disposable) = value.as_dispose() {
                attempted += 1;
                if let Err(err) = disposable.dispose() {
                    on_error(&entry.key, err);
                }
            }
        }
        attempted
    }

    /// Empties the map.
    ///
    /// Every value with a cleanup capability is disposed exactly once, in
    /// insertion order, before the values are dropped. Disposal errors are
    /// ignored; use [`TinyMap::try_reset`] to observe them.
    ///
    /// The slot array and the key buffers are kept for reuse.
    pub fn reset(&mut self) {
        self.dispose_live(|_key, _err| {
            #[cfg(feature = "log")]
            log::debug!(
                "tinymap: dispose failed for key {:?}: {}",
                alloc::string::String::from_utf8_lossy(_key),
                _err
            );
        });
        self.release();
    }

    /// Empties the map like [`TinyMap::reset`] and reports disposal failures.
    ///
    /// All values are disposed and the map is empty whether or not this
    /// returns an error.
    ///
    /// # Errors
    ///
    /// Returns `TinyMapError::ResetIncomplete` if any `dispose` call failed.
    pub fn try_reset(&mut self) -> Result<(), TinyMapError> {
        let mut failed = 0;
        let mut first = None;
        let attempted = self.dispose_live(|_, err| {
            failed += 1;
            first.get_or_insert(err);
        });
        self.release();

        match first {
            Some(first) => Err(TinyMapError::ResetIncomplete {
                failed,
                attempted,
                first,
            }),
            None => Ok(()),
        }
    }
}

impl<V> Default for TinyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TinyMap<V> {
    /// Clones the live entries only; retired slots are not carried over.
    fn clone(&self) -> Self {
        Self {
            entries: self.live().to_vec(),
            len: self.len,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for TinyMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(key, value)| (alloc::string::String::from_utf8_lossy(key), value)),
            )
            .finish()
    }
}

impl<K: AsRef<[u8]>, V> Extend<(K, V)> for TinyMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for TinyMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
