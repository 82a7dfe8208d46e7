//! A string-keyed hash table with a fixed bucket count and separately
//! chained synonyms

use std::fmt;
use std::mem;

/// The number of buckets in a [`ChainTable`]
///
/// The bucket array never grows or shrinks.
pub const TABLE_SIZE: usize = 101;

type Link = Option<Box<Item>>;

/// A single entry of the table, owning its key and the rest of its chain
#[derive(Debug, Clone)]
struct Item {
    key: String,
    value: f32,
    next: Link,
}

/// Walks a single synonym chain front to back
struct ChainIter<'a> {
    next: Option<&'a Item>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next?;
        self.next = item.next.as_deref();
        Some(item)
    }
}

/// A hash table keyed by strings, valued by `f32`
///
/// The table has a fixed number of buckets ([`TABLE_SIZE`]) and resolves
/// collisions by chaining: every bucket holds a singly linked list of the
/// keys that hash to it ("synonyms"). A key occurs at most once across the
/// whole table; inserting an existing key overwrites its value in place.
///
/// The hash function is deliberately simple: one plus the sum of the key's
/// byte values, reduced modulo the bucket count. It distributes poorly for
/// short or similar keys (any two anagrams collide), which makes collision
/// handling easy to exercise.
#[derive(Clone)]
pub struct ChainTable {
    buckets: [Link; TABLE_SIZE],
    len: usize,
}

impl Default for ChainTable {
    fn default() -> Self {
        const EMPTY: Link = None;
        Self {
            buckets: [EMPTY; TABLE_SIZE],
            len: 0,
        }
    }
}

impl fmt::Debug for ChainTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.items().map(|item| (&item.key, item.value)))
            .finish()
    }
}

impl PartialEq for ChainTable {
    fn eq(&self, other: &Self) -> bool {
        // Chains holding the same entries can be linked in a different order
        // depending on insertion order, so compare entry by entry instead of
        // structurally
        self.len == other.len
            && self.items().all(|item| other.get(&item.key) == Some(&item.value))
    }
}

impl ChainTable {
    /// Creates an empty `ChainTable` with every bucket's chain empty
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::ChainTable;
    /// let table = ChainTable::new();
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a key to the index of its home bucket, in `0..TABLE_SIZE`
    ///
    /// The same key always maps to the same bucket, and anagrams of a key
    /// map to the same bucket as the key itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::ChainTable;
    ///
    /// assert!(ChainTable::hash_key("abc") < treetable::TABLE_SIZE);
    /// assert_eq!(ChainTable::hash_key("abc"), ChainTable::hash_key("cba"));
    /// ```
    pub fn hash_key(key: &str) -> usize {
        let sum = key
            .bytes()
            .fold(1usize, |sum, byte| sum.wrapping_add(usize::from(byte)));
        sum % TABLE_SIZE
    }

    /// Returns the number of entries in the table
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.buckets.iter().all(|bucket| bucket.is_none()));
        self.len == 0
    }

    /// Returns `true` if the table contains an entry for the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Returns a reference to the value stored under the given key, or
    /// `None` if no such key exists in the table
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::ChainTable;
    ///
    /// let mut table = ChainTable::new();
    /// table.insert("pi", 3.14);
    /// assert_eq!(table.get("pi"), Some(&3.14));
    /// assert_eq!(table.get("tau"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&f32> {
        self.search(key).map(|item| &item.value)
    }

    /// Returns a mutable reference to the value stored under the given key,
    /// or `None` if no such key exists in the table
    pub fn get_mut(&mut self, key: &str) -> Option<&mut f32> {
        self.search_mut(key).map(|item| &mut item.value)
    }

    /// Inserts a new entry into the table
    ///
    /// If the key is already present, its value is overwritten in place and
    /// the previous value is returned. Otherwise the key is copied into
    /// owned storage and a new item is pushed onto the front of its home
    /// bucket's chain, so the most recently inserted synonym is found first.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::ChainTable;
    ///
    /// let mut table = ChainTable::new();
    /// assert_eq!(table.insert("x", 1.0), None);
    /// assert_eq!(table.insert("x", 2.0), Some(1.0));
    /// assert_eq!(table.get("x"), Some(&2.0));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &str, value: f32) -> Option<f32> {
        if let Some(item) = self.search_mut(key) {
            return Some(mem::replace(&mut item.value, value));
        }

        // hash_key already reduces modulo TABLE_SIZE; reducing again is
        // harmless
        let index = Self::hash_key(key) % TABLE_SIZE;
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Item {
            key: key.to_string(),
            value,
            next,
        }));
        self.len += 1;

        None
    }

    /// Removes a key from the table, returning its value if the key was
    /// previously present. Removing a missing key is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::ChainTable;
    ///
    /// let mut table = ChainTable::new();
    /// table.insert("x", 1.0);
    /// assert_eq!(table.remove("x"), Some(1.0));
    /// assert_eq!(table.remove("x"), None);
    /// assert_eq!(table.get("x"), None);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<f32> {
        // Unlinking needs a cursor on the incoming link of every item, which
        // `search` cannot provide, so this walks the chains itself
        for bucket in self.buckets.iter_mut() {
            let mut chain = bucket.take();
            let mut cursor = bucket;

            while let Some(mut item) = chain {
                chain = item.next.take();
                if item.key == key {
                    // Splice the rest of the chain into the predecessor link
                    *cursor = chain;
                    self.len -= 1;
                    return Some(item.value);
                }
                cursor = &mut cursor.insert(item).next;
            }
        }

        None
    }

    /// Clears the table, removing all entries and resetting every bucket to
    /// an empty chain
    ///
    /// Afterwards the table is equal to a freshly created one.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::ChainTable;
    ///
    /// let mut table = ChainTable::new();
    /// table.insert("x", 1.0);
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.get("x"), None);
    /// ```
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            // Free the chain one item at a time instead of letting the drop
            // glue recurse through `next`
            let mut chain = bucket.take();
            while let Some(mut item) = chain {
                chain = item.next.take();
            }
        }

        self.len = 0;
    }

    /// Finds the item holding `key`, scanning every bucket's chain
    ///
    /// The scan is not restricted to the key's home bucket, so it finds the
    /// key even when callers mix hash functions across inserts (it costs a
    /// full-table walk in the miss case).
    fn search(&self, key: &str) -> Option<&Item> {
        self.items().find(|item| item.key == key)
    }

    fn search_mut(&mut self, key: &str) -> Option<&mut Item> {
        for bucket in self.buckets.iter_mut() {
            let mut current = bucket.as_deref_mut();
            while let Some(item) = current {
                if item.key == key {
                    return Some(item);
                }
                current = item.next.as_deref_mut();
            }
        }

        None
    }

    /// Walks every item in the table, bucket by bucket, front of chain first
    fn items(&self) -> impl Iterator<Item = &Item> {
        self.buckets
            .iter()
            .flat_map(|bucket| ChainIter { next: bucket.as_deref() })
    }
}

impl Drop for ChainTable {
    fn drop(&mut self) {
        // Same reasoning as `clear`: avoid deep recursive drops on long
        // chains
        self.clear();
    }
}

/// Inserts every `(key, value)` pair in order, overwriting earlier values on
/// repeated keys just like [`insert`](ChainTable::insert)
impl Extend<(String, f32)> for ChainTable {
    fn extend<T: IntoIterator<Item = (String, f32)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}

impl std::iter::FromIterator<(String, f32)> for ChainTable {
    fn from_iter<T: IntoIterator<Item = (String, f32)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
