use std::iter::FusedIterator;
use std::slice::{Iter as BucketIter, IterMut as BucketIterMut};

use super::str_map::{Entry, Link};
use super::StrMap;

impl<'a, V, B> IntoIterator for &'a StrMap<V, B> {
    type Item = (&'a str, &'a V);

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

/// A borrowed iterator over the entries of a [`StrMap`], see [`StrMap::iter`].
///
/// Entries are yielded bucket by bucket, and in chain order within a bucket.
pub struct Iter<'a, V> {
    pub(crate) buckets: BucketIter<'a, Link<V>>,
    pub(crate) current: Option<&'a Entry<V>>,
    pub(crate) remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                self.remaining -= 1;
                return Some((&*entry.key, &entry.value));
            }

            // Move on to the next bucket, ending once they run out.
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// A borrowed iterator over the keys of a [`StrMap`], see [`StrMap::keys`].
pub struct Keys<'a, V>(
    pub(crate) Iter<'a, V>
);

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// A borrowed iterator over the values of a [`StrMap`], see [`StrMap::values`].
pub struct Values<'a, V>(
    pub(crate) Iter<'a, V>
);

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

/// A mutable iterator over the values of a [`StrMap`], see [`StrMap::values_mut`].
///
/// There is no mutable iterator over keys, changing a key in place would leave it in the wrong
/// bucket.
pub struct ValuesMut<'a, V> {
    pub(crate) buckets: BucketIterMut<'a, Link<V>>,
    pub(crate) current: Option<&'a mut Entry<V>>,
    pub(crate) remaining: usize,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.take() {
                // Split the entry so the value and the rest of the chain can be borrowed apart.
                let Entry { value, next, .. } = entry;
                self.current = next.as_deref_mut();
                self.remaining -= 1;
                return Some(value);
            }

            self.current = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}
