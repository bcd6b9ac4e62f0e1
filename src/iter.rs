use core::slice;

use crate::core::TinyMap;
use crate::entry::Entry;

/// Iterator over `(key, value)` pairs of a `TinyMap`, in insertion order
///
/// This iterator implements `Clone`.
pub struct TinyMapIter<'a, V> {
    entries: slice::Iter<'a, Entry<V>>,
}

impl<V> Clone for TinyMapIter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<'a, V> Iterator for TinyMapIter<'a, V> {
    type Item = (&'a [u8], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some((entry.key.as_slice(), entry.value.as_ref()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<V> ExactSizeIterator for TinyMapIter<'_, V> {}

impl<'a, V> IntoIterator for &'a TinyMap<V> {
    type Item = (&'a [u8], &'a V);
    type IntoIter = TinyMapIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        TinyMapIter {
            entries: self.live().iter(),
        }
    }
}

/// Iterator over the keys of a `TinyMap`
pub struct Keys<'a, V> {
    iter: TinyMapIter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(iter: TinyMapIter<'a, V>) -> Self {
        Self { iter }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// Iterator over the values of a `TinyMap`
pub struct Values<'a, V> {
    iter: TinyMapIter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(iter: TinyMapIter<'a, V>) -> Self {
        Self { iter }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
