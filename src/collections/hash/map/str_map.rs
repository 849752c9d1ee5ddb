use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hasher};
use std::mem;

use super::{Iter, Keys, Values, ValuesMut};
use crate::collections::contiguous::{Array, Vector};
use crate::collections::hash::Fnv1aBuildHasher;

/// The number of buckets used by [`StrMap::new`].
pub const DEFAULT_BUCKETS: usize = 16;

const MIN_BUCKETS: usize = 1;

const GROWTH_FACTOR: usize = 2;

pub(crate) type Link<V> = Option<Box<Entry<V>>>;

/// A single key-value pair, owning a copy of its key and linking to the next entry in its bucket.
pub(crate) struct Entry<V> {
    pub key: Box<str>,
    pub value: V,
    pub next: Link<V>,
}

/// A map from text keys to values, using separate chaining.
///
/// Every bucket holds a singly linked chain of entries whose keys hash to it, by default with
/// [FNV-1a](super::super::fnv1a). When an insertion finds the map holding as many entries as it
/// has buckets, the bucket count doubles and every entry is relinked into its new bucket before the
/// insertion goes ahead. The map never shrinks.
///
/// Keys are copied into the map on insertion. Chains are unbounded, so a set of keys that all
/// collide degrades every operation to a walk of one long chain.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the StrMap.
/// - `c`: The length of the chain for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `get` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `keys` | `O(n + buckets)` |
///
/// \* If the insertion triggers a rehash, it takes `O(n)`.
pub struct StrMap<V, B = Fnv1aBuildHasher> {
    pub(crate) buckets: Array<Link<V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<V> StrMap<V> {
    /// Creates a new StrMap with [`DEFAULT_BUCKETS`] buckets, hashing with FNV-1a.
    pub fn new() -> StrMap<V> {
        StrMap::with_buckets(DEFAULT_BUCKETS)
    }

    /// Creates a new StrMap with `bucket_count` buckets (at least 1), hashing with FNV-1a.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::hash::StrMap;
    /// let map: StrMap<i32> = StrMap::with_buckets(1000);
    /// assert_eq!(map.bucket_count(), 1000);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_buckets(bucket_count: usize) -> StrMap<V> {
        StrMap::with_buckets_and_hasher(bucket_count, Fnv1aBuildHasher)
    }
}

impl<V, B: BuildHasher> StrMap<V, B> {
    /// Creates a new StrMap with [`DEFAULT_BUCKETS`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> StrMap<V, B> {
        StrMap::with_buckets_and_hasher(DEFAULT_BUCKETS, hasher)
    }

    /// Creates a new StrMap with `bucket_count` buckets (at least 1) and the provided `hasher`.
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: B) -> StrMap<V, B> {
        StrMap {
            buckets: Array::repeat_default(bucket_count.max(MIN_BUCKETS)),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the StrMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the StrMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.size()
    }

    /// Associates `value` with `key`. If the key was already present its value is overwritten in
    /// place and the old value is returned, otherwise a new entry holding a copy of `key` is
    /// appended to the end of its bucket's chain.
    ///
    /// If the map holds as many entries as it has buckets, it is rehashed into twice as many
    /// buckets first, whether or not `key` is new.
    ///
    /// # Panics
    /// Panics if the bucket array would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::hash::StrMap;
    /// let mut map = StrMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        if self.len == self.bucket_count() {
            self.rehash();
        }

        let index = self.index_for(key);
        let mut link = &mut self.buckets[index];
        while let Some(entry) = link {
            if *entry.key == *key {
                return Some(mem::replace(&mut entry.value, value));
            }
            link = &mut entry.next;
        }

        *link = Some(Box::new(Entry {
            key: key.into(),
            value,
            next: None,
        }));
        self.len += 1;

        None
    }

    /// Returns a reference to the value associated with `key`, or None if there isn't one.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.find_entry(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with `key`, or None if there isn't one.
    /// Writing through the reference changes the value stored in the map.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::hash::StrMap;
    /// let mut map = StrMap::new();
    /// map.insert("count", 1);
    /// *map.get_mut("count").unwrap() += 1;
    /// assert_eq!(map.get("count"), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.index_for(key);
        let mut link = &mut self.buckets[index];
        while let Some(entry) = link {
            if *entry.key == *key {
                return Some(&mut entry.value);
            }
            link = &mut entry.next;
        }

        None
    }

    /// Returns a copy of the value associated with `key`, or None if there isn't one.
    pub fn get_cloned(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.get(key).cloned()
    }

    /// Copies the value associated with `key` into `out`, returning true if the key was found. On
    /// a miss `out` is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::hash::StrMap;
    /// let mut map = StrMap::new();
    /// map.insert("5", 5);
    /// let mut out = 0;
    /// assert!(map.copy_into("5", &mut out));
    /// assert_eq!(out, 5);
    /// assert!(!map.copy_into("6", &mut out));
    /// ```
    pub fn copy_into(&self, key: &str, out: &mut V) -> bool
    where
        V: Clone,
    {
        match self.get(key) {
            Some(value) => {
                out.clone_from(value);
                true
            },
            None => false,
        }
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.find_entry(key).is_some()
    }

    /// Removes the entry for `key`, returning its value. Does nothing if the key isn't present.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::hash::StrMap;
    /// let mut map = StrMap::new();
    /// map.insert("a", 1);
    /// assert_eq!(map.remove("a"), Some(1));
    /// assert_eq!(map.remove("a"), None);
    /// assert!(map.is_empty());
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.index_for(key);
        let head = &mut self.buckets[index];

        if head.as_ref().is_some_and(|entry| *entry.key == *key) {
            let mut removed = head.take()?;
            *head = removed.next.take();
            self.len -= 1;
            return Some(removed.value);
        }

        // Walk with the predecessor, so the match can be unlinked from it.
        let mut prev = head.as_deref_mut()?;
        loop {
            if prev.next.as_ref().is_some_and(|entry| *entry.key == *key) {
                let mut removed = prev.next.take()?;
                prev.next = removed.next.take();
                self.len -= 1;
                return Some(removed.value);
            }
            prev = prev.next.as_deref_mut()?;
        }
    }

    /// Returns an iterator over all key-value pairs, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys. The keys borrow the map's own storage, so the map can't
    /// be changed while they are in use.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys(self.iter())
    }

    /// Collects all keys into a [`Vector`] of borrowed strings.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::hash::StrMap;
    /// let mut map = StrMap::new();
    /// map.insert("x", ());
    /// map.insert("y", ());
    /// let mut keys = map.key_list();
    /// keys.sort();
    /// assert_eq!(&*keys, &["x", "y"]);
    /// ```
    pub fn key_list(&self) -> Vector<&str> {
        self.keys().collect()
    }

    /// Returns an iterator over all values.
    pub fn values(&self) -> Values<'_, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            buckets: self.buckets.iter_mut(),
            current: None,
            remaining: self.len,
        }
    }

    /// Doubles the bucket count and moves every entry into its bucket for the new count. Entries
    /// are relinked rather than copied, and the entry count doesn't change.
    pub(crate) fn rehash(&mut self) {
        let new_count = self.bucket_count().saturating_mul(GROWTH_FACTOR);
        let mut old_buckets = mem::replace(&mut self.buckets, Array::repeat_default(new_count));

        for slot in old_buckets.iter_mut() {
            let mut link = slot.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
                self.relink(entry);
            }
        }
    }

    /// Appends a detached entry to the end of its bucket's chain. This never triggers a rehash and
    /// assumes the key isn't already present.
    fn relink(&mut self, entry: Box<Entry<V>>) {
        let index = self.index_for(&entry.key);
        let mut link = &mut self.buckets[index];
        while let Some(existing) = link {
            link = &mut existing.next;
        }

        *link = Some(entry);
    }

    fn find_entry(&self, key: &str) -> Option<&Entry<V>> {
        let mut current = self.buckets[self.index_for(key)].as_deref();
        while let Some(entry) = current {
            if *entry.key == *key {
                return Some(entry);
            }
            current = entry.next.as_deref();
        }

        None
    }

    /// Calculates the bucket for `key`. The bucket count is never 0.
    pub(crate) fn index_for(&self, key: &str) -> usize {
        let mut hasher = self.hasher.build_hasher();
        hasher.write(key.as_bytes());
        (hasher.finish() % self.bucket_count() as u64) as usize
    }
}

impl<V, B> Drop for StrMap<V, B> {
    fn drop(&mut self) {
        // Unlink chains one entry at a time, dropping a long chain recursively could overflow the
        // stack.
        for slot in self.buckets.iter_mut() {
            let mut link = slot.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }
    }
}

impl<V> Default for StrMap<V> {
    fn default() -> Self {
        StrMap::new()
    }
}

impl<'a, V, B: BuildHasher> Extend<(&'a str, V)> for StrMap<V, B> {
    fn extend<I: IntoIterator<Item = (&'a str, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, V> FromIterator<(&'a str, V)> for StrMap<V> {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        let mut map = StrMap::new();
        map.extend(iter);
        map
    }
}

/// Renders one bucket's chain, e.g. `("a": 1) -> ("b": 2)`, or `-` if it is empty.
struct DebugChain<'a, V>(&'a Link<V>);

impl<V: Debug> Debug for DebugChain<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(mut entry) = self.0.as_deref() else {
            return write!(f, "-");
        };

        loop {
            write!(f, "({:?}: {:?})", entry.key, entry.value)?;
            match entry.next.as_deref() {
                Some(next) => {
                    write!(f, " -> ")?;
                    entry = next;
                },
                None => return Ok(()),
            }
        }
    }
}

impl<V: Debug, B: Debug> Debug for StrMap<V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let chains: Vector<DebugChain<'_, V>> = self.buckets.iter().map(DebugChain).collect();

        f.debug_struct("StrMap")
            .field("buckets", &&*chains)
            .field("len", &self.len)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<V: Debug, B: BuildHasher> Display for StrMap<V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
